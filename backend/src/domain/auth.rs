//! Authentication primitives: submitted login credentials and the configured
//! admin identity.
//!
//! Inbound adapters hand raw form values to [`LoginCredentials::try_from_parts`]
//! so a handler never talks to the login port with unvalidated input.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Domain error returned when login form values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was missing or blank.
    MissingEmail,
    /// Password was missing.
    MissingPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEmail => write!(f, "Email is required."),
            Self::MissingPassword => write!(f, "Password is required."),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials submitted through the login form.
///
/// ## Invariants
/// - `email` must not be blank. It is kept exactly as submitted.
/// - `password` must be non-empty but keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use journal::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("me@example.com", "hunter2")
///     .expect("valid credentials");
/// assert_eq!(creds.email(), "me@example.com");
/// assert_eq!(creds.password(), "hunter2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        if email.trim().is_empty() {
            return Err(LoginValidationError::MissingEmail);
        }

        if password.is_empty() {
            return Err(LoginValidationError::MissingPassword);
        }

        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// The single admin identity allowed to edit the journal.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AdminCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_owned(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Whether the submitted credentials identify the admin.
    ///
    /// Both fields compare exactly. Passwords are compared as SHA-256 digests
    /// so the time taken does not depend on where the inputs first differ.
    pub fn matches(&self, credentials: &LoginCredentials) -> bool {
        let email_matches = self.email == credentials.email();
        let password_matches = digests_equal(&self.password, credentials.password());
        email_matches & password_matches
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

fn digests_equal(left: &str, right: &str) -> bool {
    let left = Sha256::digest(left.as_bytes());
    let right = Sha256::digest(right.as_bytes());
    left.iter()
        .zip(right.iter())
        .fold(0_u8, |diff, (l, r)| diff | (l ^ r))
        == 0
}
