//! Driven port for journal entry persistence.

use async_trait::async_trait;

use crate::domain::{Entry, EntryId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by entry repository adapters.
    pub enum EntryRepositoryError {
        /// Repository connection could not be established.
        Connection => "entry repository connection failed",
        /// Query or mutation failed during execution.
        Query => "entry repository query failed",
    }
}

/// Port for storing and reading journal entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Persist a new entry.
    async fn insert(&self, entry: &Entry) -> Result<(), EntryRepositoryError>;

    /// Overwrite an existing entry. Returns `false` when no row matched.
    async fn update(&self, entry: &Entry) -> Result<bool, EntryRepositoryError>;

    /// Remove an entry. Returns `false` when no row matched.
    async fn delete(&self, id: &EntryId) -> Result<bool, EntryRepositoryError>;

    /// Find an entry by id.
    async fn find_by_id(&self, id: &EntryId) -> Result<Option<Entry>, EntryRepositoryError>;

    /// Every entry, newest date first and, within a date, newest creation
    /// first.
    async fn list_by_date_desc(&self) -> Result<Vec<Entry>, EntryRepositoryError>;
}
