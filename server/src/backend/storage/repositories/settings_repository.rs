use anyhow::Result;
use async_trait::async_trait;
use shared::DEFAULT_GOAL_ML;
use sqlx::{Connection as _, Row};
use tracing::warn;

use crate::backend::storage::connection::DbConnection;
use crate::backend::storage::traits::SettingsStorage;

const GOAL_KEY: &str = "goal";

/// Repository for the `settings` key/value table
#[derive(Clone)]
pub struct SettingsRepository {
    db: DbConnection,
}

impl SettingsRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsStorage for SettingsRepository {
    async fn get_goal(&self) -> Result<u32> {
        let mut conn = self.db.open().await?;
        let row = sqlx::query("SELECT value FROM settings WHERE key = ?")
            .bind(GOAL_KEY)
            .fetch_optional(&mut conn)
            .await?;
        conn.close().await?;

        let value: Option<String> = match row {
            Some(r) => r.try_get("value")?,
            None => None,
        };

        match value {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(goal) => Ok(goal),
                Err(_) => {
                    warn!("Stored goal {:?} is not a whole number, using default", raw);
                    Ok(DEFAULT_GOAL_ML)
                }
            },
            None => Ok(DEFAULT_GOAL_ML),
        }
    }

    async fn set_goal(&self, goal_ml: u32) -> Result<()> {
        let mut conn = self.db.open().await?;
        sqlx::query("INSERT OR REPLACE INTO settings (key, value) VALUES (?, ?)")
            .bind(GOAL_KEY)
            .bind(goal_ml.to_string())
            .execute(&mut conn)
            .await?;
        conn.close().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> (SettingsRepository, DbConnection, tempfile::TempDir) {
        let (db, dir) = DbConnection::init_test().await.expect("Failed to create test database");
        (SettingsRepository::new(db.clone()), db, dir)
    }

    #[tokio::test]
    async fn test_fresh_store_goal_is_default() {
        let (repo, _db, _dir) = setup_test().await;
        assert_eq!(repo.get_goal().await.unwrap(), 2000);
    }

    #[tokio::test]
    async fn test_set_then_get_goal() {
        let (repo, _db, _dir) = setup_test().await;
        for goal in [500, 1200, 2500, 9900, 10_000] {
            repo.set_goal(goal).await.expect("Failed to set goal");
            assert_eq!(repo.get_goal().await.unwrap(), goal);
        }
    }

    #[tokio::test]
    async fn test_storage_accepts_out_of_range_goal() {
        let (repo, _db, _dir) = setup_test().await;
        repo.set_goal(42).await.unwrap();
        assert_eq!(repo.get_goal().await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_initialize_does_not_reset_goal() {
        let (repo, db, _dir) = setup_test().await;
        repo.set_goal(3100).await.unwrap();
        db.initialize().await.unwrap();
        assert_eq!(repo.get_goal().await.unwrap(), 3100);
    }

    #[tokio::test]
    async fn test_missing_row_falls_back_to_default() {
        let (repo, db, _dir) = setup_test().await;
        let mut conn = db.open().await.unwrap();
        sqlx::query("DELETE FROM settings").execute(&mut conn).await.unwrap();
        conn.close().await.unwrap();

        assert_eq!(repo.get_goal().await.unwrap(), 2000);
    }

    #[tokio::test]
    async fn test_garbage_value_falls_back_to_default() {
        let (repo, db, _dir) = setup_test().await;
        let mut conn = db.open().await.unwrap();
        sqlx::query("UPDATE settings SET value = 'lots' WHERE key = 'goal'")
            .execute(&mut conn)
            .await
            .unwrap();
        conn.close().await.unwrap();

        assert_eq!(repo.get_goal().await.unwrap(), 2000);
    }
}
