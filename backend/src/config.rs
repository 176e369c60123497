//! Application settings.
//!
//! Server settings load through OrthoConfig (CLI flags, `JOURNAL_*`
//! environment variables and config files). The admin identity comes from the
//! plain `EMAIL` and `PASSWORD` variables and is read through
//! [`mockable::Env`] so start-up rules stay testable.

use std::net::{Ipv4Addr, SocketAddr};

use mockable::Env;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;

use crate::domain::{AdminCredentials, AdminLoginService};
use crate::inbound::http::session_config::BuildMode;

pub(crate) const ADMIN_EMAIL_ENV: &str = "EMAIL";
pub(crate) const ADMIN_PASSWORD_ENV: &str = "PASSWORD";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "JOURNAL")]
pub struct JournalSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL connection string. Without it entries live in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl JournalSettings {
    /// Configured bind address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
            .unwrap_or_else(|| SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)))
    }

    /// Configured pool size, defaulting to 10 and never below 1.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE).max(1)
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Errors raised while reading the admin identity.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AdminConfigError {
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
}

/// Build the login service from `EMAIL` and `PASSWORD`.
///
/// Release builds refuse to start without both; debug builds warn and
/// reject every login.
///
/// # Examples
/// ```
/// use journal::config::admin_login_from_env;
/// use journal::inbound::http::session_config::BuildMode;
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|_| None);
/// assert!(admin_login_from_env(&env, BuildMode::Release).is_err());
/// assert!(admin_login_from_env(&env, BuildMode::Debug).is_ok());
/// ```
pub fn admin_login_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<AdminLoginService, AdminConfigError> {
    let email = non_blank(env, ADMIN_EMAIL_ENV);
    let password = env
        .string(ADMIN_PASSWORD_ENV)
        .filter(|password| !password.is_empty());

    match (email, password) {
        (Some(email), Some(password)) => Ok(AdminLoginService::new(AdminCredentials::new(
            email, password,
        ))),
        (email, _) => {
            let name = if email.is_none() {
                ADMIN_EMAIL_ENV
            } else {
                ADMIN_PASSWORD_ENV
            };
            let error = AdminConfigError::MissingEnv { name };
            if mode == BuildMode::Release {
                return Err(error);
            }
            warn!(%error, "admin login disabled (dev only)");
            Ok(AdminLoginService::disabled())
        }
    }
}

fn non_blank<E: Env>(env: &E, name: &str) -> Option<String> {
    env.string(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
