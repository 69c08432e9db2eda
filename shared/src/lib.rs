use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// Goal written at first start and returned when the settings row is missing
pub const DEFAULT_GOAL_ML: u32 = 2000;

/// Bounds enforced by the goal input on the page
pub const GOAL_MIN_ML: u32 = 500;
pub const GOAL_MAX_ML: u32 = 10_000;
pub const GOAL_STEP_ML: u32 = 100;

/// Bounds enforced by the custom amount input on the page
pub const CUSTOM_AMOUNT_MIN_ML: u32 = 50;
pub const CUSTOM_AMOUNT_STEP_ML: u32 = 50;

/// One-click amounts offered next to the custom input
pub const QUICK_ADD_AMOUNTS_ML: [u32; 3] = [200, 250, 300];

/// A single logged water-consumption event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Amount drunk in millilitres (always > 0)
    pub amount: f64,
    /// Unix epoch seconds taken from the system clock at write time
    pub timestamp: i64,
}

impl Entry {
    /// Timestamp converted to the host's local timezone
    pub fn local_time(&self) -> Option<DateTime<Local>> {
        Local.timestamp_opt(self.timestamp, 0).single()
    }

    /// Local time-of-day as `HH:MM`
    pub fn time_of_day(&self) -> String {
        self.local_time()
            .map(|dt| dt.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    }
}

/// Per-day summed consumption over a trailing window of calendar days.
///
/// `labels` and `values` always have the same length; index 0 is the oldest
/// day and the last index is today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RangeAggregate {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl RangeAggregate {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when at least one day in the window has consumption
    pub fn has_data(&self) -> bool {
        self.values.iter().any(|v| *v > 0.0)
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// History window offered by the range selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HistoryRange {
    #[default]
    LastWeek,
    LastMonth,
}

impl HistoryRange {
    pub const ALL: [HistoryRange; 2] = [HistoryRange::LastWeek, HistoryRange::LastMonth];

    pub fn days(&self) -> u32 {
        match self {
            HistoryRange::LastWeek => 7,
            HistoryRange::LastMonth => 30,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HistoryRange::LastWeek => "Last 7 days",
            HistoryRange::LastMonth => "Last 30 days",
        }
    }

    /// Maps a `?range=` query value; anything other than 30 falls back to a week
    pub fn from_days(days: u32) -> Self {
        if days == 30 {
            HistoryRange::LastMonth
        } else {
            HistoryRange::LastWeek
        }
    }
}

/// Today's consumption measured against the goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub consumed_ml: f64,
    pub goal_ml: u32,
    /// Whole percent, capped at 100
    pub percent: u8,
}

impl Progress {
    pub fn goal_reached(&self) -> bool {
        self.percent >= 100
    }

    pub fn remaining_ml(&self) -> f64 {
        (self.goal_ml as f64 - self.consumed_ml).max(0.0)
    }
}

/// Reward counters shown under the progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HabitStats {
    /// Consecutive days, ending today, on which the goal was met
    pub streak_days: u32,
    /// Number of days on which the goal was met
    pub goals_hit_total: u32,
}

/// Everything the dashboard page needs, read fresh for every render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub today: NaiveDate,
    pub goal_ml: u32,
    pub progress: Progress,
    /// Today's entries, oldest first
    pub today_entries: Vec<Entry>,
    pub history_range: HistoryRange,
    pub history: RangeAggregate,
    pub stats: HabitStats,
    pub tip: String,
}
