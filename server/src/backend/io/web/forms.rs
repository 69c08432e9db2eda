use axum::{
    extract::{rejection::FormRejection, State},
    response::Redirect,
    Form,
};
use serde::Deserialize;
use shared::HistoryRange;
use tracing::{info, warn};

use super::error::WebError;
use super::page::format_ml;
use crate::backend::domain::commands::entries::AddEntryCommand;
use crate::backend::domain::commands::goal::SetGoalCommand;
use crate::backend::AppState;

/// Body of `POST /goal`
#[derive(Debug, Deserialize)]
pub struct GoalForm {
    pub goal: u32,
    pub range: Option<u32>,
}

/// Body of `POST /entries`, sent by both the quick-add buttons and the custom amount field
#[derive(Debug, Deserialize)]
pub struct EntryForm {
    pub amount: f64,
    pub range: Option<u32>,
}

fn selected_range(range: Option<u32>) -> HistoryRange {
    range.map(HistoryRange::from_days).unwrap_or_default()
}

fn reject(rejection: FormRejection) -> WebError {
    warn!("Rejected form: {}", rejection.body_text());
    WebError::BadRequest(rejection.body_text())
}

/// Save the daily goal and reload the dashboard
pub async fn save_goal(
    State(state): State<AppState>,
    form: Result<Form<GoalForm>, FormRejection>,
) -> Result<Redirect, WebError> {
    let Form(form) = form.map_err(reject)?;
    info!("POST /goal - {:?}", form);

    let result = state
        .goal_service
        .set_goal(SetGoalCommand { goal_ml: form.goal })
        .await?;
    info!("{}", result.success_message);

    Ok(Redirect::to(&format!(
        "/?range={}&saved={}",
        selected_range(form.range).days(),
        result.goal_ml
    )))
}

/// Log consumption and reload the dashboard
pub async fn add_entry(
    State(state): State<AppState>,
    form: Result<Form<EntryForm>, FormRejection>,
) -> Result<Redirect, WebError> {
    let Form(form) = form.map_err(reject)?;
    info!("POST /entries - {:?}", form);

    let result = state
        .entry_service
        .add_entry(AddEntryCommand { amount_ml: form.amount })
        .await?;
    info!("{}", result.success_message);

    Ok(Redirect::to(&format!(
        "/?range={}&added={}",
        selected_range(form.range).days(),
        format_ml(result.entry.amount)
    )))
}

/// Liveness probe
pub async fn health() -> &'static str {
    "ok"
}
