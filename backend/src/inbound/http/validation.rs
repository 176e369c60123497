//! Field validation helpers shared by the journal form handlers.
//!
//! Every failure becomes an `invalid_request` error whose details name the
//! offending form field and a stable machine-readable code.

use chrono::NaiveDate;
use serde_json::json;

use crate::domain::{EntryId, EntryImage, EntryKind, EntryText, EntryValidationError, Error};

/// Detail codes attached to field validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldErrorCode {
    MissingField,
    InvalidDate,
    InvalidType,
    EmptyText,
    InvalidText,
    InvalidImage,
    InvalidImageUrl,
}

impl FieldErrorCode {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidDate => "invalid_date",
            Self::InvalidType => "invalid_type",
            Self::EmptyText => "empty_text",
            Self::InvalidText => "invalid_text",
            Self::InvalidImage => "invalid_image",
            Self::InvalidImageUrl => "invalid_image_url",
        }
    }
}

/// Form field name as submitted by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(&self) -> &'static str {
        self.0
    }
}

pub(crate) const DATE: FieldName = FieldName::new("date");
pub(crate) const TYPE: FieldName = FieldName::new("type");
pub(crate) const TEXT: FieldName = FieldName::new("text");
pub(crate) const IMAGE: FieldName = FieldName::new("image");
pub(crate) const IMAGE_URL: FieldName = FieldName::new("imageUrl");

pub(crate) fn field_error(
    field: FieldName,
    code: FieldErrorCode,
    message: impl Into<String>,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    field_error(
        field,
        FieldErrorCode::MissingField,
        format!("missing required field: {}", field.as_str()),
    )
}

fn required(field: FieldName, value: Option<&str>) -> Result<&str, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Parse a `YYYY-MM-DD` form date.
pub(crate) fn parse_date(value: Option<&str>) -> Result<NaiveDate, Error> {
    let raw = required(DATE, value)?;
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        field_error(
            DATE,
            FieldErrorCode::InvalidDate,
            "date must be a valid YYYY-MM-DD date",
        )
    })
}

pub(crate) fn parse_kind(value: Option<&str>) -> Result<EntryKind, Error> {
    let raw = required(TYPE, value)?;
    raw.trim()
        .parse()
        .map_err(|err: crate::domain::ParseEntryKindError| {
            field_error(TYPE, FieldErrorCode::InvalidType, err.to_string())
        })
}

pub(crate) fn parse_text(value: Option<String>) -> Result<EntryText, Error> {
    let raw = value.ok_or_else(|| missing_field_error(TEXT))?;
    EntryText::new(raw).map_err(|err| {
        let code = match err {
            EntryValidationError::NulInText => FieldErrorCode::InvalidText,
            _ => FieldErrorCode::EmptyText,
        };
        field_error(TEXT, code, err.to_string())
    })
}

pub(crate) fn parse_uploaded_image(
    content_type: Option<&str>,
    data: Vec<u8>,
) -> Result<EntryImage, Error> {
    let content_type = content_type.unwrap_or("application/octet-stream");
    EntryImage::inline(content_type, data)
        .map_err(|err| field_error(IMAGE, FieldErrorCode::InvalidImage, err.to_string()))
}

pub(crate) fn parse_image_url(raw: &str) -> Result<EntryImage, Error> {
    EntryImage::external(raw).map_err(|err: EntryValidationError| {
        field_error(IMAGE_URL, FieldErrorCode::InvalidImageUrl, err.to_string())
    })
}

/// Parse an entry id path segment. Malformed ids read as missing entries.
pub(crate) fn parse_entry_id(raw: &str) -> Result<EntryId, Error> {
    EntryId::new(raw).map_err(|_| Error::not_found(format!("entry {raw} not found")))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn detail_code(error: &Error) -> Option<&str> {
        error.details()?.get("code")?.as_str()
    }

    #[rstest]
    #[case(None, "missing_field")]
    #[case(Some("2024-02-30"), "invalid_date")]
    #[case(Some("03/04/2024"), "invalid_date")]
    fn date_errors_carry_codes(#[case] raw: Option<&str>, #[case] code: &str) {
        let err = parse_date(raw).expect_err("invalid date");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(detail_code(&err), Some(code));
    }

    #[rstest]
    fn dates_tolerate_surrounding_whitespace() {
        let date = parse_date(Some(" 2024-03-04 ")).expect("valid date");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 4).expect("date"));
    }

    #[rstest]
    #[case(None, "missing_field")]
    #[case(Some("chore"), "invalid_type")]
    fn kind_errors_carry_codes(#[case] raw: Option<&str>, #[case] code: &str) {
        let err = parse_kind(raw).expect_err("invalid type");
        assert_eq!(detail_code(&err), Some(code));
    }

    #[rstest]
    #[case(None, "missing_field")]
    #[case(Some("   ".to_owned()), "empty_text")]
    #[case(Some("before\0after".to_owned()), "invalid_text")]
    fn text_errors_carry_codes(#[case] raw: Option<String>, #[case] code: &str) {
        let err = parse_text(raw).expect_err("invalid text");
        assert_eq!(detail_code(&err), Some(code));
    }

    #[rstest]
    fn upload_without_content_type_is_invalid_image() {
        let err = parse_uploaded_image(None, vec![1]).expect_err("untyped upload");
        assert_eq!(detail_code(&err), Some("invalid_image"));
        assert_eq!(
            err.details().and_then(|d| d.get("field")).and_then(|f| f.as_str()),
            Some("image")
        );
    }

    #[rstest]
    fn malformed_entry_id_is_not_found() {
        let err = parse_entry_id("not-an-id").expect_err("malformed id");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
