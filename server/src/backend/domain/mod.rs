//! # Domain Module
//!
//! Business logic of the tracker, independent of storage details and of the
//! way the page is rendered.
//!
//! ## Module Organization
//!
//! - **goal_service**: reading and validating/changing the daily goal
//! - **entry_service**: logging consumption, today's log
//! - **history_service**: chart data and reward counters (streak, goals reached)
//! - **dashboard_service**: gathers everything a page render needs
//! - **progress**: today's consumption against the goal
//! - **tips**: hydration tip of the day
//!
//! ## Business Rules
//!
//! - The goal is a whole number of ml in [500, 10000], in steps of 100
//! - Logged amounts are at least 50 ml, in steps of 50
//! - Entries are timestamped by the system clock and never edited or deleted
//! - Progress is `min(100, floor(consumed / goal * 100))`
//! - A day counts as "goal reached" when its total is positive and at least the goal

pub mod commands;
pub mod dashboard_service;
pub mod entry_service;
pub mod goal_service;
pub mod history_service;
pub mod models;
pub mod progress;
pub mod tips;

pub use dashboard_service::*;
pub use entry_service::*;
pub use goal_service::*;
pub use history_service::*;
