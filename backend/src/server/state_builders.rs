//! Builders for the HTTP state's journal ports.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use journal::domain::JournalService;
use journal::domain::ports::{EntryRepository, JournalCommand, JournalQuery, LoginService};
use journal::inbound::http::state::HttpState;
use journal::outbound::memory::InMemoryEntryRepository;
use journal::outbound::persistence::{DbPool, DieselEntryRepository};

type JournalPorts = (Arc<dyn JournalQuery>, Arc<dyn JournalCommand>);

/// One journal service serving both the read and the write port.
fn journal_ports<R>(entries: Arc<R>) -> JournalPorts
where
    R: EntryRepository + 'static,
{
    let service = Arc::new(JournalService::new(
        entries,
        Arc::new(mockable::DefaultClock),
    ));
    (
        service.clone() as Arc<dyn JournalQuery>,
        service as Arc<dyn JournalCommand>,
    )
}

/// PostgreSQL-backed ports when a pool is configured, in-memory ones
/// otherwise.
fn build_journal_ports(db_pool: Option<&DbPool>) -> JournalPorts {
    match db_pool {
        Some(pool) => journal_ports(Arc::new(DieselEntryRepository::new(pool.clone()))),
        None => {
            warn!("no database configured; journal entries are kept in memory only");
            journal_ports(Arc::new(InMemoryEntryRepository::new()))
        }
    }
}

/// Build the shared HTTP state.
pub(super) fn build_http_state(
    login: Arc<dyn LoginService>,
    db_pool: Option<&DbPool>,
) -> web::Data<HttpState> {
    let (journal_query, journal_command) = build_journal_ports(db_pool);
    web::Data::new(HttpState::new(login, journal_query, journal_command))
}
