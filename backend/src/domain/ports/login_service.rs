//! Driving port for admin authentication.
//!
//! Inbound adapters call this port to check submitted credentials without
//! knowing where the admin identity comes from, which keeps handler tests
//! free of environment setup.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Succeeds when `credentials` identify the admin.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<(), Error>;
}
