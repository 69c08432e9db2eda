//! # Clock
//!
//! Source of "now" for every day-boundary computation.
//!
//! All day windows are computed in the host's local timezone, not UTC, so a
//! deployment moved to another region will bucket entries differently.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone};
use std::sync::Arc;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock of the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

pub type SharedClock = Arc<dyn Clock>;

pub fn system_clock() -> SharedClock {
    Arc::new(SystemClock)
}

/// Resolve a local wall-clock time on `date` to epoch seconds.
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant; times that
/// do not exist (DST spring-forward gap) move forward an hour.
fn local_timestamp(date: NaiveDate, time: NaiveTime) -> Result<i64> {
    let naive = date.and_time(time);
    if let Some(dt) = Local.from_local_datetime(&naive).earliest() {
        return Ok(dt.timestamp());
    }
    Local
        .from_local_datetime(&(naive + Duration::hours(1)))
        .earliest()
        .map(|dt| dt.timestamp())
        .ok_or_else(|| anyhow!("Cannot resolve local time {} on {}", time, date))
}

/// Inclusive `[00:00:00, 23:59:59]` local window of `date`, in epoch seconds
pub fn day_bounds(date: NaiveDate) -> Result<(i64, i64)> {
    let start = local_timestamp(date, NaiveTime::MIN)?;
    let end_time = NaiveTime::from_hms_opt(23, 59, 59)
        .ok_or_else(|| anyhow!("Invalid end-of-day time"))?;
    let end = local_timestamp(date, end_time)?;
    Ok((start, end))
}
