//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`EntryRepository`) describe what the domain needs from
//! storage; driving ports (`JournalQuery`, `JournalCommand`, `LoginService`)
//! are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod entry_repository;
mod journal_command;
mod journal_query;
mod login_service;

#[cfg(test)]
pub use entry_repository::MockEntryRepository;
pub use entry_repository::{EntryRepository, EntryRepositoryError};
#[cfg(test)]
pub use journal_command::MockJournalCommand;
pub use journal_command::JournalCommand;
#[cfg(test)]
pub use journal_query::MockJournalQuery;
pub use journal_query::{JournalPage, JournalQuery};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;

#[cfg(test)]
mod tests;
