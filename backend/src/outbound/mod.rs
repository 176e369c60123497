//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL repository using Diesel.
//! - **memory**: volatile repository for database-less runs and tests.
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
