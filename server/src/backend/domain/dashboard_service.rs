//! Assembles the dashboard view from the other services.
//!
//! Nothing is cached: every call reads the goal, today's log, the history
//! window and the reward counters fresh from storage.

use anyhow::Result;
use shared::{DashboardView, HistoryRange};

use crate::backend::clock::SharedClock;
use crate::backend::domain::commands::history::RangeAggregateQuery;
use crate::backend::domain::progress::{compute_progress, consumed_ml};
use crate::backend::domain::tips::tip_of_the_day;
use crate::backend::domain::{EntryService, GoalService, HistoryService};
use crate::backend::storage::Connection;

#[derive(Clone)]
pub struct DashboardService<C: Connection> {
    goal_service: GoalService<C>,
    entry_service: EntryService<C>,
    history_service: HistoryService<C>,
    clock: SharedClock,
}

impl<C: Connection> DashboardService<C> {
    pub fn new(
        goal_service: GoalService<C>,
        entry_service: EntryService<C>,
        history_service: HistoryService<C>,
        clock: SharedClock,
    ) -> Self {
        Self {
            goal_service,
            entry_service,
            history_service,
            clock,
        }
    }

    pub async fn load(&self, history_range: HistoryRange) -> Result<DashboardView> {
        let today = self.clock.today();
        let goal_ml = self.goal_service.get_goal().await?;
        let today_entries = self.entry_service.get_today_entries().await?;
        let progress = compute_progress(consumed_ml(&today_entries), goal_ml);
        let history = self
            .history_service
            .get_range_aggregate(RangeAggregateQuery { range: history_range })
            .await?;
        let stats = self.history_service.get_stats().await?;

        Ok(DashboardView {
            today,
            goal_ml,
            progress,
            today_entries,
            history_range,
            history,
            stats,
            tip: tip_of_the_day(today).to_string(),
        })
    }
}
