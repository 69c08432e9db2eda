//! Entry service domain logic.
//!
//! Logging consumption and reading back today's log. Entries are immutable:
//! there is no update or delete operation.

use anyhow::Result;
use shared::Entry;
use tracing::info;

use crate::backend::clock::SharedClock;
use crate::backend::domain::commands::entries::{AddEntryCommand, AddEntryResult};
use crate::backend::domain::models::entry::validate_amount;
use crate::backend::storage::{Connection, EntryStorage};

#[derive(Clone)]
pub struct EntryService<C: Connection> {
    entry_repository: C::EntryRepository,
}

impl<C: Connection> EntryService<C> {
    pub fn new(connection: &C, clock: SharedClock) -> Self {
        Self {
            entry_repository: connection.create_entry_repository(clock),
        }
    }

    /// Validate the amount and append an entry stamped with the current time
    pub async fn add_entry(&self, command: AddEntryCommand) -> Result<AddEntryResult> {
        info!("Adding entry: {:?}", command);

        validate_amount(command.amount_ml)?;
        let entry = self.entry_repository.add_entry(command.amount_ml).await?;

        info!("💧 {} ml added", entry.amount);
        Ok(AddEntryResult {
            success_message: format!("💧 {} ml added!", entry.amount),
            entry,
        })
    }

    /// Today's entries, oldest first
    pub async fn get_today_entries(&self) -> Result<Vec<Entry>> {
        self.entry_repository.get_today_entries().await
    }
}
