//! # Backend Module
//!
//! Contains all logic of the H2O Habits tracker behind the HTTP socket.
//!
//! This module brings together:
//! - **Domain**: goal, logging, progress and reward rules
//! - **Storage**: the SQLite file holding entries and settings
//! - **IO**: the server-rendered pages and form handlers
//!
//! ## Architecture
//!
//! ```text
//! Browser (plain HTML forms, full page reloads)
//!     ↓
//! IO Layer (axum handlers, HTML and SVG rendering)
//!     ↓
//! Domain Layer (services, validation)
//!     ↓
//! Storage Layer (SQLite, one connection per operation)
//! ```
//!
//! Time enters through [`clock::Clock`] so every "today" computation can be
//! pinned in tests.

pub mod clock;
pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::backend::clock::{system_clock, SharedClock};
use crate::backend::config::AppConfig;
use crate::backend::domain::{DashboardService, EntryService, GoalService, HistoryService};
use crate::backend::storage::DbConnection;

/// Services shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub goal_service: GoalService<DbConnection>,
    pub entry_service: EntryService<DbConnection>,
    pub history_service: HistoryService<DbConnection>,
    pub dashboard_service: DashboardService<DbConnection>,
}

/// Initialize the backend from the loaded configuration
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database at {:?}", config.database_path);
    let db = DbConnection::new(&config.database_path);
    db.initialize().await?;

    Ok(initialize_backend_with(db, system_clock()))
}

/// Wire the services over an already initialized database
pub fn initialize_backend_with(db: DbConnection, clock: SharedClock) -> AppState {
    info!("Setting up domain services");
    let goal_service = GoalService::new(&db);
    let entry_service = EntryService::new(&db, clock.clone());
    let history_service = HistoryService::new(&db, clock.clone());
    let dashboard_service = DashboardService::new(
        goal_service.clone(),
        entry_service.clone(),
        history_service.clone(),
        clock,
    );

    AppState {
        goal_service,
        entry_service,
        history_service,
        dashboard_service,
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    io::web::router()
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
