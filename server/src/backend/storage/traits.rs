//! # Storage Traits
//!
//! Storage abstraction used by the domain services, so that services can be
//! exercised against any backend that implements these traits.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{Entry, RangeAggregate};

use crate::backend::clock::SharedClock;

/// Total consumption of one local calendar day
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total_ml: f64,
}

/// Append-only log of consumption entries
#[async_trait]
pub trait EntryStorage: Send + Sync {
    /// Append an entry stamped with the current time. No bounds are enforced here.
    async fn add_entry(&self, amount_ml: f64) -> Result<Entry>;

    /// Entries inside today's local window, oldest first
    async fn get_today_entries(&self) -> Result<Vec<Entry>>;

    /// Per-day sums for the `days` calendar days ending today, oldest first
    async fn get_range_aggregate(&self, days: u32) -> Result<RangeAggregate>;

    /// Per-day sums over the whole log, oldest first. Days without entries are omitted.
    async fn get_daily_totals(&self) -> Result<Vec<DailyTotal>>;
}

/// Key/value settings; currently only the daily goal
#[async_trait]
pub trait SettingsStorage: Send + Sync {
    /// Current goal in ml, or the default when no row exists
    async fn get_goal(&self) -> Result<u32>;

    /// Overwrite the goal. Any value is accepted.
    async fn set_goal(&self, goal_ml: u32) -> Result<()>;
}

/// Factory for repositories bound to one storage backend
pub trait Connection: Send + Sync + Clone {
    type EntryRepository: EntryStorage + Clone;
    type SettingsRepository: SettingsStorage + Clone;

    fn create_entry_repository(&self, clock: SharedClock) -> Self::EntryRepository;

    fn create_settings_repository(&self) -> Self::SettingsRepository;
}
