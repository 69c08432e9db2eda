use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use shared::{Entry, RangeAggregate};
use sqlx::{Connection as _, Row};
use tracing::debug;

use crate::backend::clock::{day_bounds, SharedClock};
use crate::backend::storage::connection::DbConnection;
use crate::backend::storage::traits::{DailyTotal, EntryStorage};

const MAX_PREALLOCATED_DAYS: u32 = 366;

/// Repository for the append-only `entries` table
#[derive(Clone)]
pub struct EntryRepository {
    db: DbConnection,
    clock: SharedClock,
}

impl EntryRepository {
    pub fn new(db: DbConnection, clock: SharedClock) -> Self {
        Self { db, clock }
    }
}

/// Chart label for `date`: short weekday for a week or less, `dd/mm` beyond that
pub fn day_label(date: NaiveDate, days: u32) -> String {
    if days <= 7 {
        date.format("%a").to_string()
    } else {
        date.format("%d/%m").to_string()
    }
}

#[async_trait]
impl EntryStorage for EntryRepository {
    async fn add_entry(&self, amount_ml: f64) -> Result<Entry> {
        let entry = Entry {
            amount: amount_ml,
            timestamp: self.clock.now().timestamp(),
        };

        let mut conn = self.db.open().await?;
        sqlx::query("INSERT INTO entries (amount, ts) VALUES (?, ?)")
            .bind(entry.amount)
            .bind(entry.timestamp)
            .execute(&mut conn)
            .await?;
        conn.close().await?;

        debug!("Stored entry {:?}", entry);
        Ok(entry)
    }

    async fn get_today_entries(&self) -> Result<Vec<Entry>> {
        let (start, end) = day_bounds(self.clock.today())?;

        let mut conn = self.db.open().await?;
        let rows = sqlx::query(
            r#"
            SELECT amount, ts
            FROM entries
            WHERE ts >= ? AND ts <= ?
            ORDER BY ts ASC, id ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&mut conn)
        .await?;
        conn.close().await?;

        rows.iter()
            .map(|row| {
                Ok(Entry {
                    amount: row.try_get("amount")?,
                    timestamp: row.try_get("ts")?,
                })
            })
            .collect()
    }

    async fn get_range_aggregate(&self, days: u32) -> Result<RangeAggregate> {
        let today = self.clock.today();
        let oldest = today
            .checked_sub_days(Days::new(u64::from(days.saturating_sub(1))))
            .ok_or_else(|| {
                anyhow!("History window of {} days reaches before the earliest date", days)
            })?;

        let capacity = days.min(MAX_PREALLOCATED_DAYS) as usize;
        let mut aggregate = RangeAggregate {
            labels: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        };

        let mut conn = self.db.open().await?;
        for date in oldest.iter_days().take(days as usize) {
            let (start, end) = day_bounds(date)?;

            let total: f64 = sqlx::query_scalar(
                "SELECT TOTAL(amount) FROM entries WHERE ts >= ? AND ts <= ?",
            )
            .bind(start)
            .bind(end)
            .fetch_one(&mut conn)
            .await?;

            aggregate.labels.push(day_label(date, days));
            aggregate.values.push(total);
        }
        conn.close().await?;

        Ok(aggregate)
    }

    async fn get_daily_totals(&self) -> Result<Vec<DailyTotal>> {
        let mut conn = self.db.open().await?;
        let rows = sqlx::query(
            r#"
            SELECT date(ts, 'unixepoch', 'localtime') AS day, TOTAL(amount) AS total
            FROM entries
            GROUP BY day
            ORDER BY day ASC
            "#,
        )
        .fetch_all(&mut conn)
        .await?;
        conn.close().await?;

        rows.iter()
            .map(|row| {
                let day: String = row.try_get("day")?;
                let date = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
                    .with_context(|| format!("Unexpected day key {:?}", day))?;
                Ok(DailyTotal {
                    date,
                    total_ml: row.try_get("total")?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::clock::{Clock, FixedClock};
    use chrono::{Local, TimeZone};
    use std::sync::Arc;

    fn clock_at(y: i32, m: u32, d: u32, h: u32, min: u32) -> SharedClock {
        Arc::new(FixedClock(Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()))
    }

    async fn setup_test(clock: SharedClock) -> (EntryRepository, DbConnection, tempfile::TempDir) {
        let (db, dir) = DbConnection::init_test().await.expect("Failed to create test database");
        (EntryRepository::new(db.clone(), clock), db, dir)
    }

    async fn add_at(db: &DbConnection, clock: SharedClock, amount: f64) {
        EntryRepository::new(db.clone(), clock)
            .add_entry(amount)
            .await
            .expect("Failed to add entry");
    }

    async fn today_sum(repo: &EntryRepository) -> f64 {
        repo.get_today_entries()
            .await
            .unwrap()
            .iter()
            .map(|e| e.amount)
            .sum()
    }

    #[tokio::test]
    async fn test_add_entry_increases_today_sum() {
        let (repo, _db, _dir) = setup_test(clock_at(2025, 5, 20, 9, 30)).await;

        let before = today_sum(&repo).await;
        assert_eq!(before, 0.0);

        for amount in [200.0, 250.0, 37.5] {
            let sum_before = today_sum(&repo).await;
            let entry = repo.add_entry(amount).await.expect("Failed to add entry");
            assert_eq!(entry.amount, amount);
            let sum_after = today_sum(&repo).await;
            assert_eq!(sum_after - sum_before, amount);
        }
    }

    #[tokio::test]
    async fn test_entry_is_stamped_with_clock() {
        let clock = clock_at(2025, 5, 20, 14, 5);
        let expected = clock.now().timestamp();
        let (repo, _db, _dir) = setup_test(clock).await;

        let entry = repo.add_entry(300.0).await.unwrap();
        assert_eq!(entry.timestamp, expected);
        assert_eq!(entry.time_of_day(), "14:05");
    }

    #[tokio::test]
    async fn test_today_entries_are_ordered_and_exclude_other_days() {
        let (_, db, _dir) = setup_test(clock_at(2025, 5, 20, 23, 0)).await;

        // Written out of order, across three days
        let writes = [
            (clock_at(2025, 5, 20, 18, 0), 300.0),
            (clock_at(2025, 5, 19, 23, 59), 999.0),
            (clock_at(2025, 5, 20, 7, 15), 200.0),
            (clock_at(2025, 5, 21, 0, 0), 888.0),
            (clock_at(2025, 5, 20, 0, 0), 100.0),
        ];
        for (clock, amount) in writes {
            EntryRepository::new(db.clone(), clock).add_entry(amount).await.unwrap();
        }

        let repo = EntryRepository::new(db.clone(), clock_at(2025, 5, 20, 23, 0));
        let entries = repo.get_today_entries().await.unwrap();
        let amounts: Vec<f64> = entries.iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![100.0, 200.0, 300.0]);
        assert!(entries.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[tokio::test]
    async fn test_range_aggregate_places_totals_by_day() {
        let today = clock_at(2025, 5, 20, 12, 0);
        let (_, db, _dir) = setup_test(today.clone()).await;

        add_at(&db, clock_at(2025, 5, 18, 10, 0), 100.0).await;
        add_at(&db, today.clone(), 50.0).await;

        let repo = EntryRepository::new(db.clone(), today);
        let aggregate = repo.get_range_aggregate(7).await.unwrap();

        assert_eq!(aggregate.labels.len(), 7);
        assert_eq!(aggregate.values, vec![0.0, 0.0, 0.0, 0.0, 100.0, 0.0, 50.0]);
        // 2025-05-20 is a Tuesday
        assert_eq!(aggregate.labels.last().map(String::as_str), Some("Tue"));
        assert_eq!(aggregate.labels.first().map(String::as_str), Some("Wed"));
    }

    #[tokio::test]
    async fn test_range_aggregate_sums_same_day() {
        let today = clock_at(2025, 5, 20, 12, 0);
        let (repo, db, _dir) = setup_test(today).await;

        add_at(&db, clock_at(2025, 5, 19, 8, 0), 250.0).await;
        add_at(&db, clock_at(2025, 5, 19, 21, 0), 300.0).await;

        let aggregate = repo.get_range_aggregate(2).await.unwrap();
        assert_eq!(aggregate.values, vec![550.0, 0.0]);
    }

    #[tokio::test]
    async fn test_empty_month_is_all_zero_with_date_labels() {
        let (repo, _db, _dir) = setup_test(clock_at(2025, 5, 20, 12, 0)).await;

        let aggregate = repo.get_range_aggregate(30).await.unwrap();
        assert_eq!(aggregate.labels.len(), 30);
        assert_eq!(aggregate.values.len(), 30);
        assert!(aggregate.values.iter().all(|v| *v == 0.0));
        assert!(!aggregate.has_data());
        assert_eq!(aggregate.labels.first().map(String::as_str), Some("21/04"));
        assert_eq!(aggregate.labels.last().map(String::as_str), Some("20/05"));
    }

    #[tokio::test]
    async fn test_daily_totals_group_by_local_day() {
        let (repo, db, _dir) = setup_test(clock_at(2025, 5, 20, 12, 0)).await;

        add_at(&db, clock_at(2025, 5, 18, 10, 0), 100.0).await;
        add_at(&db, clock_at(2025, 5, 18, 22, 0), 150.0).await;
        add_at(&db, clock_at(2025, 5, 20, 6, 0), 50.0).await;

        let totals = repo.get_daily_totals().await.unwrap();
        assert_eq!(
            totals,
            vec![
                DailyTotal { date: NaiveDate::from_ymd_opt(2025, 5, 18).unwrap(), total_ml: 250.0 },
                DailyTotal { date: NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(), total_ml: 50.0 },
            ]
        );
    }

    #[tokio::test]
    async fn test_range_before_earliest_date_is_an_error() {
        let (repo, _db, _dir) = setup_test(clock_at(2025, 5, 20, 12, 0)).await;

        let err = repo
            .get_range_aggregate(u32::MAX)
            .await
            .expect_err("Window past the calendar range should fail");
        assert!(err.to_string().contains("earliest date"));
    }

    #[tokio::test]
    async fn test_zero_day_range_is_empty() {
        let (repo, _db, _dir) = setup_test(clock_at(2025, 5, 20, 12, 0)).await;

        let aggregate = repo.get_range_aggregate(0).await.unwrap();
        assert!(aggregate.is_empty());
    }

    #[test]
    fn test_day_label_formats() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        assert_eq!(day_label(date, 7), "Fri");
        assert_eq!(day_label(date, 1), "Fri");
        assert_eq!(day_label(date, 8), "03/01");
        assert_eq!(day_label(date, 30), "03/01");
    }
}
