//! PostgreSQL persistence adapters using Diesel.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) never
//! leave this module.
//!
//! ```ignore
//! use journal::outbound::persistence::{DbPool, DieselEntryRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/journal")).await?;
//! let repo = DieselEntryRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_entry_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_entry_repository::DieselEntryRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
