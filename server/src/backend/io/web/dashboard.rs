use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use shared::HistoryRange;
use tracing::info;

use super::chart::render_history_chart;
use super::error::WebError;
use super::page::{render_dashboard, Notice};
use crate::backend::AppState;

/// Query string of `GET /`
///
/// Values are kept as text so a malformed parameter falls back to the
/// default instead of failing the page.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub range: Option<String>,
    pub added: Option<String>,
    pub saved: Option<String>,
}

impl DashboardQuery {
    pub fn history_range(&self) -> HistoryRange {
        self.range
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .map(HistoryRange::from_days)
            .unwrap_or_default()
    }

    pub fn notice(&self) -> Option<Notice> {
        let added = self
            .added
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|amount| amount.is_finite() && *amount > 0.0)
            .map(Notice::EntryAdded);
        let saved = self
            .saved
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .map(Notice::GoalSaved);
        added.or(saved)
    }
}

/// Render the dashboard
pub async fn show_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, WebError> {
    let range = query.history_range();
    info!("GET / - range: {} days", range.days());

    let view = state.dashboard_service.load(range).await?;
    let chart = if view.history.has_data() {
        Some(render_history_chart(&view.history)?)
    } else {
        None
    };

    Ok(Html(render_dashboard(&view, chart.as_deref(), query.notice())))
}
