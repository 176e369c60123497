//! Journal server entry-point: loads settings, prepares storage and serves
//! the journal pages.

mod server;

use std::io;
use std::sync::Arc;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use journal::config::{JournalSettings, admin_login_from_env};
use journal::inbound::http::health::HealthState;
use journal::inbound::http::session_config::{BuildMode, session_settings_from_env};
use journal::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = JournalSettings::load()
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;
    let mode = BuildMode::from_debug_assertions();
    let env = DefaultEnv::new();

    let session = session_settings_from_env(&env, mode).map_err(io::Error::other)?;
    let login = admin_login_from_env(&env, mode).map_err(io::Error::other)?;
    let mut config = ServerConfig::new(session, settings.bind_addr(), Arc::new(login));

    if let Some(database_url) = settings.database_url() {
        run_pending_migrations(database_url)
            .await
            .map_err(io::Error::other)?;
        let pool = DbPool::new(
            PoolConfig::new(database_url).with_max_size(settings.pool_max_size()),
        )
        .await
        .map_err(io::Error::other)?;
        info!(max_size = settings.pool_max_size(), "database pool ready");
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
