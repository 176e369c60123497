//! In-process `EntryRepository` used when no database is configured.
//!
//! Entries live in a map behind a `RwLock` and vanish with the process.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{EntryRepository, EntryRepositoryError};
use crate::domain::{Entry, EntryId};

/// Volatile entry store.
#[derive(Debug, Default)]
pub struct InMemoryEntryRepository {
    entries: RwLock<HashMap<EntryId, Entry>>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with `entries`.
    pub fn with_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let map = entries.into_iter().map(|entry| (entry.id(), entry)).collect();
        Self {
            entries: RwLock::new(map),
        }
    }
}

fn poisoned<T>(_: PoisonError<T>) -> EntryRepositoryError {
    EntryRepositoryError::query("entry store lock poisoned")
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn insert(&self, entry: &Entry) -> Result<(), EntryRepositoryError> {
        let mut guard = self.entries.write().map_err(poisoned)?;
        if guard.contains_key(&entry.id()) {
            return Err(EntryRepositoryError::query("entry id already exists"));
        }
        guard.insert(entry.id(), entry.clone());
        Ok(())
    }

    async fn update(&self, entry: &Entry) -> Result<bool, EntryRepositoryError> {
        let mut guard = self.entries.write().map_err(poisoned)?;
        match guard.get_mut(&entry.id()) {
            Some(stored) => {
                *stored = entry.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &EntryId) -> Result<bool, EntryRepositoryError> {
        let mut guard = self.entries.write().map_err(poisoned)?;
        Ok(guard.remove(id).is_some())
    }

    async fn find_by_id(&self, id: &EntryId) -> Result<Option<Entry>, EntryRepositoryError> {
        let guard = self.entries.read().map_err(poisoned)?;
        Ok(guard.get(id).cloned())
    }

    async fn list_by_date_desc(&self) -> Result<Vec<Entry>, EntryRepositoryError> {
        let guard = self.entries.read().map_err(poisoned)?;
        let mut entries: Vec<Entry> = guard.values().cloned().collect();
        entries.sort_by(Entry::journal_order);
        Ok(entries)
    }
}
