//! Domain primitives, ports and services.
//!
//! Purpose: define the journal's strongly typed entities and the use-cases
//! the HTTP adapter drives. Nothing here depends on actix or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Entry and its value types: the journal aggregate.
//! - week_start / group_by_week / WeekGroup: Sunday-anchored grouping.
//! - LoginCredentials / AdminCredentials: authentication inputs.
//! - JournalService / AdminLoginService: implementations of the driving
//!   ports in [`ports`].

pub mod admin_login_service;
pub mod auth;
pub mod entry;
pub mod error;
pub mod journal_service;
pub mod ports;
pub mod trace_id;
pub mod week;

pub use self::admin_login_service::{AdminLoginService, INVALID_LOGIN_MESSAGE};
pub use self::auth::{AdminCredentials, LoginCredentials, LoginValidationError};
pub use self::entry::{
    Entry, EntryDraft, EntryId, EntryImage, EntryKind, EntrySnapshot, EntryText, EntryUpdate,
    EntryValidationError, ImageChange, MAX_IMAGE_BYTES, ParseEntryKindError,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::journal_service::JournalService;
pub use self::trace_id::TraceId;
pub use self::week::{WeekGroup, group_by_week, week_start};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use journal::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::unauthorized("Not authenticated"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
