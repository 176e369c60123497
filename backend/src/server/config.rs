//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use journal::domain::ports::LoginService;
use journal::inbound::http::session_config::SessionSettings;
use journal::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) login: Arc<dyn LoginService>,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration without persistent storage.
    #[must_use]
    pub fn new(
        session: SessionSettings,
        bind_addr: SocketAddr,
        login: Arc<dyn LoginService>,
    ) -> Self {
        Self {
            session,
            bind_addr,
            login,
            db_pool: None,
        }
    }

    /// Store entries in PostgreSQL through this pool.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
