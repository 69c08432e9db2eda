//! Goal service domain logic.
//!
//! The goal is the daily target consumption in millilitres. Bounds are
//! enforced here, at the input boundary; the settings repository itself
//! stores whatever it is given.

use anyhow::Result;
use tracing::info;

use crate::backend::domain::commands::goal::{SetGoalCommand, SetGoalResult};
use crate::backend::domain::models::goal::validate_goal;
use crate::backend::storage::{Connection, SettingsStorage};

/// Service for reading and changing the daily goal
#[derive(Clone)]
pub struct GoalService<C: Connection> {
    settings_repository: C::SettingsRepository,
}

impl<C: Connection> GoalService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            settings_repository: connection.create_settings_repository(),
        }
    }

    pub async fn get_goal(&self) -> Result<u32> {
        self.settings_repository.get_goal().await
    }

    /// Validate and store a new goal
    pub async fn set_goal(&self, command: SetGoalCommand) -> Result<SetGoalResult> {
        info!("Setting goal: {:?}", command);

        validate_goal(command.goal_ml)?;
        self.settings_repository.set_goal(command.goal_ml).await?;

        info!("🎯 Goal saved at {} ml", command.goal_ml);
        Ok(SetGoalResult {
            goal_ml: command.goal_ml,
            success_message: format!("Goal saved at {} ml!", command.goal_ml),
        })
    }
}
