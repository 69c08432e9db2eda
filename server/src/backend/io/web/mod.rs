//! # Web Module
//!
//! Server-rendered HTML interface. Reads are a single `GET /`; every write is
//! a form post answered with `303 See Other` back to `/`, so the browser
//! always shows a page built from fresh storage reads.
//!
//! ## Routes
//!
//! - `GET /?range=7|30`: dashboard (goal, progress, today's log, history chart)
//! - `POST /goal`: change the daily goal
//! - `POST /entries`: log an amount
//! - `GET /health`: liveness probe
//!
//! Validation failures answer `400` with the reason; storage failures answer
//! `500` with a generic message and are logged.

pub mod chart;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::AppState;

pub use error::WebError;

/// Router for all page routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::show_dashboard))
        .route("/goal", post(forms::save_goal))
        .route("/entries", post(forms::add_entry))
        .route("/health", get(forms::health))
}
