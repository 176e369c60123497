//! HTTP inbound adapter exposing the journal pages.

pub mod entries;
pub(crate) mod entry_form;
pub(crate) mod form_body;
pub mod error;
pub mod health;
pub mod login;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
pub(crate) mod validation;
pub mod views;

pub use error::ApiResult;
