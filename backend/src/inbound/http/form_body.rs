//! Form bodies as browsers post them.
//!
//! A plain `<form method="post">` sends `application/x-www-form-urlencoded`;
//! a form carrying a file input sends `multipart/form-data`. Every form route
//! accepts both, so a bare delete button and the full entry form reach the
//! same handler.

use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::dev::UrlEncoded;
use actix_web::error::UrlencodedError;
use actix_web::{HttpMessage, HttpRequest, web};
use futures_util::TryStreamExt;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::validation::IMAGE;
use crate::domain::Error;

/// Upper bound for any non-file part.
pub(crate) const TEXT_PART_LIMIT: usize = 256 * 1024;

/// Upper bound for a whole URL-encoded body.
pub(crate) const URLENCODED_LIMIT: usize = 4 * TEXT_PART_LIMIT;

const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// A form post, decoded when URL-encoded and left streaming when multipart.
pub(crate) enum FormBody<T> {
    Fields(T),
    Multipart(Multipart),
}

impl<T: DeserializeOwned + 'static> FormBody<T> {
    /// Pick the decoder from the request's `Content-Type`.
    ///
    /// Anything that is not multipart goes through the URL-encoded decoder,
    /// which rejects other content types with `invalid_request`.
    pub(crate) async fn from_request(
        req: &HttpRequest,
        payload: web::Payload,
    ) -> Result<Self, Error> {
        if req.content_type().eq_ignore_ascii_case(MULTIPART_FORM_DATA) {
            return Ok(Self::Multipart(Multipart::new(req.headers(), payload)));
        }
        let mut payload = payload.into_inner();
        UrlEncoded::<T>::new(req, &mut payload)
            .limit(URLENCODED_LIMIT)
            .await
            .map(Self::Fields)
            .map_err(malformed_urlencoded)
    }
}

/// Read one multipart part, failing once it grows past `limit` bytes.
pub(crate) async fn read_part(field: &mut Field, limit: usize) -> Result<Vec<u8>, Error> {
    let mut data = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(malformed_body)? {
        if data.len() + chunk.len() > limit {
            return Err(part_too_large(field.name().unwrap_or_default(), limit));
        }
        data.extend_from_slice(&chunk);
    }
    Ok(data)
}

/// Read a multipart text part as UTF-8.
pub(crate) async fn read_text_part(field: &mut Field, name: &str) -> Result<String, Error> {
    let bytes = read_part(field, TEXT_PART_LIMIT).await?;
    String::from_utf8(bytes).map_err(|_| {
        Error::invalid_request(format!("{name} must be valid UTF-8")).with_details(json!({
            "field": name,
            "code": "invalid_encoding",
        }))
    })
}

fn part_too_large(name: &str, limit: usize) -> Error {
    let code = if name == IMAGE.as_str() {
        "invalid_image"
    } else {
        "field_too_large"
    };
    Error::invalid_request(format!("{name} exceeds {limit} bytes")).with_details(json!({
        "field": name,
        "code": code,
    }))
}

pub(crate) fn malformed_body(err: MultipartError) -> Error {
    Error::invalid_request(format!("malformed multipart body: {err}"))
}

fn malformed_urlencoded(err: UrlencodedError) -> Error {
    match err {
        UrlencodedError::ContentType => {
            Error::invalid_request("expected a URL-encoded or multipart form body")
        }
        UrlencodedError::Overflow { limit, .. } => {
            Error::invalid_request(format!("form body exceeds {limit} bytes"))
        }
        other => Error::invalid_request(format!("malformed form body: {other}")),
    }
}
