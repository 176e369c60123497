//! Session key fingerprinting.
//!
//! Logs identify the active key by a truncated SHA-256 of its signing half so
//! operators can confirm a rotation without the key itself appearing anywhere.

use actix_web::cookie::Key;
use sha2::{Digest, Sha256};

const FINGERPRINT_BYTES: usize = 8;

/// First 8 bytes of `SHA-256(key.signing())`, lowercase hex.
///
/// # Examples
/// ```
/// use actix_web::cookie::Key;
/// use journal::inbound::http::session_config::key_fingerprint;
///
/// let fp = key_fingerprint(&Key::generate());
/// assert_eq!(fp.len(), 16);
/// assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn key_fingerprint(key: &Key) -> String {
    let digest = Sha256::digest(key.signing());
    hex::encode(&digest[..FINGERPRINT_BYTES])
}
