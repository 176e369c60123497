//! Weekly work journal backend.
//!
//! Hexagonal layout: [`domain`] holds entries, week grouping and the ports;
//! [`inbound::http`] adapts actix-web requests onto those ports; [`outbound`]
//! provides the PostgreSQL and in-memory entry stores.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
