//! Journal domain service.
//!
//! Implements the journal driving ports on top of an [`EntryRepository`],
//! stamping timestamps from an injected clock and translating repository
//! failures into domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    EntryRepository, EntryRepositoryError, JournalCommand, JournalPage, JournalQuery,
};
use crate::domain::{Entry, EntryDraft, EntryId, EntryUpdate, Error, group_by_week};

fn map_repository_error(error: EntryRepositoryError) -> Error {
    match error {
        EntryRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("entry repository unavailable: {message}"))
        }
        EntryRepositoryError::Query { message } => {
            Error::internal(format!("entry repository error: {message}"))
        }
    }
}

fn entry_not_found(id: &EntryId) -> Error {
    Error::not_found(format!("entry {id} not found"))
}

/// Journal service implementing [`JournalQuery`] and [`JournalCommand`].
#[derive(Clone)]
pub struct JournalService<R> {
    entries: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> JournalService<R> {
    /// Create a service over `entries`, taking timestamps from `clock`.
    pub fn new(entries: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { entries, clock }
    }
}

impl<R> JournalService<R>
where
    R: EntryRepository,
{
    async fn load(&self, id: &EntryId) -> Result<Entry, Error> {
        self.entries
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| entry_not_found(id))
    }
}

#[async_trait]
impl<R> JournalQuery for JournalService<R>
where
    R: EntryRepository,
{
    async fn list_weeks(&self) -> Result<JournalPage, Error> {
        let entries = self
            .entries
            .list_by_date_desc()
            .await
            .map_err(map_repository_error)?;
        debug!(count = entries.len(), "loaded journal entries");
        Ok(JournalPage {
            weeks: group_by_week(entries),
        })
    }

    async fn get_entry(&self, id: &EntryId) -> Result<Entry, Error> {
        self.load(id).await
    }
}

#[async_trait]
impl<R> JournalCommand for JournalService<R>
where
    R: EntryRepository,
{
    async fn create_entry(&self, draft: EntryDraft) -> Result<Entry, Error> {
        let entry = Entry::create(EntryId::random(), draft, self.clock.utc());
        self.entries
            .insert(&entry)
            .await
            .map_err(map_repository_error)?;
        info!(
            entry_id = %entry.id(),
            kind = %entry.kind(),
            date = %entry.date(),
            "journal entry created"
        );
        Ok(entry)
    }

    async fn update_entry(&self, id: &EntryId, update: EntryUpdate) -> Result<Entry, Error> {
        let mut entry = self.load(id).await?;
        entry.revise(update, self.clock.utc());
        let updated = self
            .entries
            .update(&entry)
            .await
            .map_err(map_repository_error)?;
        if !updated {
            // Deleted between the read and the write.
            return Err(entry_not_found(id));
        }
        info!(entry_id = %id, "journal entry updated");
        Ok(entry)
    }

    async fn delete_entry(&self, id: &EntryId) -> Result<(), Error> {
        let removed = self
            .entries
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(entry_not_found(id));
        }
        info!(entry_id = %id, "journal entry deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "journal_service_tests.rs"]
mod tests;
