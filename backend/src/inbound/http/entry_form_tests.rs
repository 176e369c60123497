//! Tests for multipart entry form parsing.

use actix_multipart::Multipart;
use actix_web::error::PayloadError;
use actix_web::http::header::{self, HeaderMap, HeaderValue};
use actix_web::web::Bytes;
use chrono::NaiveDate;
use rstest::rstest;

use super::*;
use crate::domain::{EntryKind, ErrorCode};
use crate::inbound::http::form_body::TEXT_PART_LIMIT;
use crate::inbound::http::test_utils::MultipartBody;

fn multipart(form: MultipartBody) -> Multipart {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&form.content_type()).expect("content type header"),
    );
    let body = Bytes::from(form.into_bytes());
    let stream = futures::stream::iter(vec![Ok::<_, PayloadError>(body)]);
    Multipart::new(&headers, stream)
}

fn read(form: MultipartBody) -> Result<EntryForm, Error> {
    futures::executor::block_on(EntryForm::read(multipart(form)))
}

fn complete_form() -> EntryForm {
    EntryForm {
        date: Some("2024-03-04".to_owned()),
        kind: Some("learning".to_owned()),
        text: Some("Read about lifetimes".to_owned()),
        ..EntryForm::default()
    }
}

#[rstest]
fn reads_every_known_part() {
    let form = read(
        MultipartBody::new()
            .text("date", "2024-03-04")
            .text("type", "work")
            .text("text", "Shipped it")
            .text("imageUrl", "")
            .text("_action", "delete")
            .text("unrelated", "ignored")
            .file("image", "pic.png", "image/png", &[1, 2, 3]),
    )
    .expect("well-formed body");

    assert_eq!(form.date.as_deref(), Some("2024-03-04"));
    assert_eq!(form.kind.as_deref(), Some("work"));
    assert_eq!(form.text.as_deref(), Some("Shipped it"));
    assert_eq!(form.image_url.as_deref(), Some(""));
    assert!(form.is_delete());
    let image = form.image.expect("image part");
    assert_eq!(image.content_type.as_deref(), Some("image/png"));
    assert_eq!(image.data, vec![1, 2, 3]);
}

#[rstest]
fn empty_file_part_reads_as_no_image() {
    let form = read(
        MultipartBody::new()
            .text("date", "2024-03-04")
            .file("image", "", "application/octet-stream", &[]),
    )
    .expect("well-formed body");
    assert!(form.image.is_none());
}

#[rstest]
fn oversized_text_part_is_rejected() {
    let long = "x".repeat(TEXT_PART_LIMIT + 1);
    let err = read(MultipartBody::new().text("text", &long)).expect_err("oversized part");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        err.details().and_then(|d| d.get("field")).and_then(|f| f.as_str()),
        Some("text")
    );
}

#[rstest]
fn draft_without_image_is_accepted() {
    let draft = complete_form().into_draft().expect("valid draft");
    assert_eq!(
        draft.date,
        NaiveDate::from_ymd_opt(2024, 3, 4).expect("date")
    );
    assert_eq!(draft.kind, EntryKind::Learning);
    assert_eq!(draft.text.as_ref(), "Read about lifetimes");
    assert!(draft.image.is_none());
}

#[rstest]
#[case::date(EntryForm { date: None, ..complete_form() }, "date")]
#[case::kind(EntryForm { kind: Some("chore".to_owned()), ..complete_form() }, "type")]
#[case::text(EntryForm { text: Some(" ".to_owned()), ..complete_form() }, "text")]
#[case::link(EntryForm { image_url: Some("ftp://host/x.png".to_owned()), ..complete_form() }, "imageUrl")]
fn invalid_fields_are_named(#[case] form: EntryForm, #[case] field: &str) {
    let err = form.into_draft().expect_err("invalid form");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        err.details().and_then(|d| d.get("field")).and_then(|f| f.as_str()),
        Some(field)
    );
}

#[rstest]
fn upload_takes_priority_over_link() {
    let form = EntryForm {
        image: Some(UploadedFile {
            content_type: Some("image/gif".to_owned()),
            data: vec![7],
        }),
        image_url: Some("https://example.com/a.png".to_owned()),
        ..complete_form()
    };
    let draft = form.into_draft().expect("valid draft");
    assert!(matches!(draft.image, Some(EntryImage::Inline { ref content_type, .. }) if content_type == "image/gif"));
}

#[rstest]
fn non_image_upload_is_rejected() {
    let form = EntryForm {
        image: Some(UploadedFile {
            content_type: Some("text/plain".to_owned()),
            data: vec![7],
        }),
        ..complete_form()
    };
    let err = form.into_draft().expect_err("text upload");
    assert_eq!(
        err.details().and_then(|d| d.get("code")).and_then(|c| c.as_str()),
        Some("invalid_image")
    );
}

#[rstest]
#[case(None, ImageChange::Keep)]
#[case(Some("  "), ImageChange::Keep)]
fn update_without_new_image_keeps_existing(
    #[case] link: Option<&str>,
    #[case] expected: ImageChange,
) {
    let form = EntryForm {
        image_url: link.map(str::to_owned),
        ..complete_form()
    };
    assert_eq!(form.into_update().expect("valid update").image, expected);
}

#[rstest]
fn update_with_link_replaces_image() {
    let form = EntryForm {
        image_url: Some("https://example.com/a.png".to_owned()),
        ..complete_form()
    };
    let update = form.into_update().expect("valid update");
    assert!(matches!(update.image, ImageChange::Replace(EntryImage::External { .. })));
}

#[rstest]
#[case(Some("delete"), true)]
#[case(Some("save"), false)]
#[case(None, false)]
fn delete_action_is_detected(#[case] action: Option<&str>, #[case] expected: bool) {
    let form = EntryForm {
        action: action.map(str::to_owned),
        ..EntryForm::default()
    };
    assert_eq!(form.is_delete(), expected);
}
