//! # Storage Module
//!
//! Owns the SQLite file that persists the goal setting and the entry log.
//!
//! ## Tables
//!
//! - **entries** `(id, amount, ts)`: append-only consumption log, `ts` in
//!   epoch seconds taken from the system clock
//! - **settings** `(key, value)`: singleton `goal` row, created with a default
//!   of 2000 ml by [`DbConnection::initialize`]
//!
//! ## Connection Model
//!
//! There is no pool. Every repository call opens a connection, runs one
//! statement (or a short fixed sequence) and closes it again. A failure is
//! returned to the caller as-is; nothing is retried.

pub mod connection;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
pub use repositories::{EntryRepository, SettingsRepository};
pub use traits::{Connection, DailyTotal, EntryStorage, SettingsStorage};
