//! Login service backed by the configured admin identity.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::LoginService;
use crate::domain::{AdminCredentials, Error, LoginCredentials};

/// Message returned for any credential mismatch.
pub const INVALID_LOGIN_MESSAGE: &str = "Invalid login.";

/// Authenticates against a single admin account.
///
/// Without configured credentials every attempt fails.
#[derive(Debug, Clone, Default)]
pub struct AdminLoginService {
    admin: Option<AdminCredentials>,
}

impl AdminLoginService {
    pub fn new(admin: AdminCredentials) -> Self {
        Self { admin: Some(admin) }
    }

    /// Service that rejects every login.
    pub fn disabled() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LoginService for AdminLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<(), Error> {
        match &self.admin {
            Some(admin) if admin.matches(credentials) => {
                info!("admin signed in");
                Ok(())
            }
            Some(_) => {
                warn!("rejected admin login attempt");
                Err(Error::unauthorized(INVALID_LOGIN_MESSAGE))
            }
            None => {
                warn!("login attempted but no admin credentials are configured");
                Err(Error::unauthorized(INVALID_LOGIN_MESSAGE))
            }
        }
    }
}
