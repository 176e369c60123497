//! Driving port for reading the journal.

use async_trait::async_trait;

use crate::domain::{Entry, EntryId, Error, WeekGroup};

/// Journal listing grouped into weeks, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalPage {
    pub weeks: Vec<WeekGroup>,
}

/// Read side of the journal.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JournalQuery: Send + Sync {
    /// All entries grouped into Sunday-anchored weeks.
    async fn list_weeks(&self) -> Result<JournalPage, Error>;

    /// A single entry. Fails with `not_found` when it does not exist.
    async fn get_entry(&self, id: &EntryId) -> Result<Entry, Error>;
}
