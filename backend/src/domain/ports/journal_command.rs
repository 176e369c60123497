//! Driving port for journal mutations.
//!
//! Inbound adapters validate form input into [`EntryDraft`] and
//! [`EntryUpdate`] values before calling this port, so every method here
//! receives well-formed data and only fails on missing entries or storage
//! problems.

use async_trait::async_trait;

use crate::domain::{Entry, EntryDraft, EntryId, EntryUpdate, Error};

/// Write side of the journal.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JournalCommand: Send + Sync {
    /// Store a new entry and return it.
    async fn create_entry(&self, draft: EntryDraft) -> Result<Entry, Error>;

    /// Apply an edit to an existing entry.
    async fn update_entry(&self, id: &EntryId, update: EntryUpdate) -> Result<Entry, Error>;

    /// Remove an entry.
    async fn delete_entry(&self, id: &EntryId) -> Result<(), Error>;
}
