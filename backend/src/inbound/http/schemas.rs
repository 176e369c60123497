//! OpenAPI schema definitions for domain and form types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`; the
//! wrappers here mirror their wire shape for utoipa instead.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Admin session missing or credentials rejected.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The requested entry does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// Storage is temporarily unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "date must be a valid YYYY-MM-DD date")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Form field errors carry `{ "field": ..., "code": ... }`.
    details: Option<serde_json::Value>,
}

/// Multipart fields accepted by the create and edit forms.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EntryFormSchema {
    #[schema(example = "2024-03-04")]
    date: String,
    #[schema(rename = "type", example = "learning")]
    kind: String,
    text: String,
    /// Image file; an empty part keeps the current image when editing.
    #[schema(value_type = Option<String>, format = Binary)]
    image: Option<Vec<u8>>,
    /// Link to a hosted image, used when no file is uploaded.
    #[schema(rename = "imageUrl")]
    image_url: Option<String>,
    /// `delete` removes the entry (edit form only).
    #[schema(rename = "_action")]
    action: Option<String>,
}
