//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{JournalCommand, JournalQuery, LoginService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub journal_query: Arc<dyn JournalQuery>,
    pub journal_command: Arc<dyn JournalCommand>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use journal::domain::{AdminLoginService, JournalService};
    /// use journal::inbound::http::state::HttpState;
    /// use journal::outbound::memory::InMemoryEntryRepository;
    ///
    /// let journal = Arc::new(JournalService::new(
    ///     Arc::new(InMemoryEntryRepository::new()),
    ///     Arc::new(mockable::DefaultClock),
    /// ));
    /// let state = HttpState::new(
    ///     Arc::new(AdminLoginService::disabled()),
    ///     journal.clone(),
    ///     journal,
    /// );
    /// let _login = state.login.clone();
    /// ```
    pub fn new(
        login: Arc<dyn LoginService>,
        journal_query: Arc<dyn JournalQuery>,
        journal_command: Arc<dyn JournalCommand>,
    ) -> Self {
        Self {
            login,
            journal_query,
            journal_command,
        }
    }
}
