//! Derived progress of today's consumption against the goal.

use shared::{Entry, Progress};

/// Sum of the amounts of `entries`
pub fn consumed_ml(entries: &[Entry]) -> f64 {
    entries.iter().map(|entry| entry.amount).sum()
}

/// `min(100, floor(consumed / goal * 100))`.
///
/// A goal of zero is treated as 1 ml so the percentage stays defined.
pub fn compute_progress(consumed_ml: f64, goal_ml: u32) -> Progress {
    let goal = f64::from(goal_ml.max(1));
    let percent = (consumed_ml / goal * 100.0).floor().clamp(0.0, 100.0) as u8;
    Progress {
        consumed_ml,
        goal_ml,
        percent,
    }
}
