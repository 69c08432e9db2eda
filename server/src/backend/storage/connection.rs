use anyhow::{Context, Result};
use shared::DEFAULT_GOAL_ML;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection as _};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::repositories::{EntryRepository, SettingsRepository};
use super::traits::Connection;
use crate::backend::clock::SharedClock;

/// DbConnection knows where the SQLite file lives and opens a fresh
/// connection for every storage operation.
#[derive(Clone, Debug)]
pub struct DbConnection {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl DbConnection {
    /// Create a handle for the database at `path`; the file is created on first open
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        Self { path, options }
    }

    /// Create a database in a throw-away directory
    #[cfg(test)]
    pub async fn init_test() -> Result<(Self, tempfile::TempDir)> {
        let dir = tempfile::tempdir()?;
        let db = Self::new(dir.path().join("h2o_habits_test.db"));
        db.initialize().await?;
        Ok((db, dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a new connection; callers close it as soon as their statement is done
    pub async fn open(&self) -> Result<SqliteConnection> {
        debug!("Opening database connection to {:?}", self.path);
        self.options
            .connect()
            .await
            .with_context(|| format!("Failed to open database {:?}", self.path))
    }

    /// Ensure both tables and the goal row exist.
    ///
    /// Safe to call on every startup: tables are created only when absent and
    /// an existing goal is never overwritten.
    pub async fn initialize(&self) -> Result<()> {
        let mut conn = self.open().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                ts INTEGER NOT NULL
            );
            "#,
        )
        .execute(&mut conn)
        .await?;

        // Day-window lookups filter on ts
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_entries_ts
            ON entries(ts);
            "#,
        )
        .execute(&mut conn)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT
            );
            "#,
        )
        .execute(&mut conn)
        .await?;

        sqlx::query("INSERT OR IGNORE INTO settings (key, value) VALUES ('goal', ?)")
            .bind(DEFAULT_GOAL_ML.to_string())
            .execute(&mut conn)
            .await?;

        conn.close().await?;
        info!("Database ready at {:?}", self.path);
        Ok(())
    }
}

impl Connection for DbConnection {
    type EntryRepository = EntryRepository;
    type SettingsRepository = SettingsRepository;

    fn create_entry_repository(&self, clock: SharedClock) -> Self::EntryRepository {
        EntryRepository::new(self.clone(), clock)
    }

    fn create_settings_repository(&self) -> Self::SettingsRepository {
        SettingsRepository::new(self.clone())
    }
}
