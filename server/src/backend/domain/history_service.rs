//! History domain logic: the per-day chart data and the reward counters
//! (streak and number of days the goal was reached).

use anyhow::Result;
use chrono::NaiveDate;
use shared::{HabitStats, RangeAggregate};
use std::collections::HashMap;
use tracing::debug;

use crate::backend::clock::SharedClock;
use crate::backend::domain::commands::history::RangeAggregateQuery;
use crate::backend::storage::{Connection, DailyTotal, EntryStorage, SettingsStorage};

#[derive(Clone)]
pub struct HistoryService<C: Connection> {
    entry_repository: C::EntryRepository,
    settings_repository: C::SettingsRepository,
    clock: SharedClock,
}

impl<C: Connection> HistoryService<C> {
    pub fn new(connection: &C, clock: SharedClock) -> Self {
        Self {
            entry_repository: connection.create_entry_repository(clock.clone()),
            settings_repository: connection.create_settings_repository(),
            clock,
        }
    }

    pub async fn get_range_aggregate(&self, query: RangeAggregateQuery) -> Result<RangeAggregate> {
        let days = query.range.days();
        let aggregate = self.entry_repository.get_range_aggregate(days).await?;
        debug!("History for {} days totals {} ml", days, aggregate.total());
        Ok(aggregate)
    }

    /// Streak and goals-reached counters against the current goal
    pub async fn get_stats(&self) -> Result<HabitStats> {
        let goal_ml = self.settings_repository.get_goal().await?;
        let totals = self.entry_repository.get_daily_totals().await?;
        Ok(compute_stats(&totals, goal_ml, self.clock.today()))
    }
}

fn goal_met(total_ml: f64, goal_ml: u32) -> bool {
    total_ml > 0.0 && total_ml >= f64::from(goal_ml)
}

/// Count reward stats from per-day totals.
///
/// The streak only counts when today's goal is met, then walks back one day
/// at a time until a day falls short.
pub fn compute_stats(totals: &[DailyTotal], goal_ml: u32, today: NaiveDate) -> HabitStats {
    let by_day: HashMap<NaiveDate, f64> = totals
        .iter()
        .map(|daily| (daily.date, daily.total_ml))
        .collect();

    let mut streak_days = 0;
    let mut day = Some(today);
    while let Some(date) = day {
        match by_day.get(&date) {
            Some(total) if goal_met(*total, goal_ml) => {
                streak_days += 1;
                day = date.pred_opt();
            }
            _ => break,
        }
    }

    let goals_hit_total = totals
        .iter()
        .filter(|daily| goal_met(daily.total_ml, goal_ml))
        .count() as u32;

    HabitStats {
        streak_days,
        goals_hit_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::clock::FixedClock;
    use crate::backend::storage::{DbConnection, EntryRepository};
    use chrono::{Local, TimeZone};
    use shared::HistoryRange;
    use std::sync::Arc;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
    }

    fn total(d: u32, total_ml: f64) -> DailyTotal {
        DailyTotal { date: date(d), total_ml }
    }

    #[test]
    fn test_streak_counts_back_from_today() {
        let totals = vec![
            total(15, 2500.0),
            total(17, 2000.0),
            total(18, 2100.0),
            total(19, 3000.0),
        ];
        let stats = compute_stats(&totals, 2000, date(19));
        assert_eq!(stats.streak_days, 3);
        assert_eq!(stats.goals_hit_total, 4);
    }

    #[test]
    fn test_streak_is_zero_when_today_is_short() {
        let totals = vec![total(17, 2000.0), total(18, 2100.0), total(19, 500.0)];
        let stats = compute_stats(&totals, 2000, date(19));
        assert_eq!(stats.streak_days, 0);
        assert_eq!(stats.goals_hit_total, 2);
    }

    #[test]
    fn test_no_history_has_no_rewards() {
        assert_eq!(compute_stats(&[], 2000, date(19)), HabitStats::default());
    }

    #[tokio::test]
    async fn test_service_reads_from_storage() {
        let (db, _dir) = DbConnection::init_test().await.unwrap();
        let now = Local.with_ymd_and_hms(2025, 5, 20, 18, 0, 0).unwrap();
        let yesterday = Local.with_ymd_and_hms(2025, 5, 19, 9, 0, 0).unwrap();

        EntryRepository::new(db.clone(), Arc::new(FixedClock(yesterday)))
            .add_entry(2000.0)
            .await
            .unwrap();
        let today_repo = EntryRepository::new(db.clone(), Arc::new(FixedClock(now)));
        today_repo.add_entry(1500.0).await.unwrap();
        today_repo.add_entry(500.0).await.unwrap();

        let service = HistoryService::new(&db, Arc::new(FixedClock(now)));
        let stats = service.get_stats().await.unwrap();
        assert_eq!(stats, HabitStats { streak_days: 2, goals_hit_total: 2 });

        let week = service
            .get_range_aggregate(RangeAggregateQuery { range: HistoryRange::LastWeek })
            .await
            .unwrap();
        assert_eq!(week.values.len(), 7);
        assert_eq!(week.values[5..], [2000.0, 2000.0]);
    }
}
