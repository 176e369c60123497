//! Translation of pool and Diesel failures into entry repository errors.

use tracing::debug;

use crate::domain::ports::EntryRepositoryError;

use super::pool::PoolError;

/// Pool failures always mean the database is unreachable.
pub(crate) fn map_pool_error(error: PoolError) -> EntryRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    EntryRepositoryError::connection(message)
}

/// Map Diesel errors to connection or query failures.
///
/// Driver messages are logged at debug level and replaced with a generic
/// description so SQL details never reach an HTTP response.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> EntryRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EntryRepositoryError::connection("database connection closed")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            EntryRepositoryError::query("entry id already exists")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            EntryRepositoryError::query("entry violates a table constraint")
        }
        DieselError::NotFound => EntryRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => EntryRepositoryError::query("database query error"),
        _ => EntryRepositoryError::query("database error"),
    }
}
