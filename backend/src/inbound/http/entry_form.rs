//! Entry form shared by the create and edit actions.
//!
//! The form carries `date`, `type`, `text`, an optional `image` file part and
//! an optional `imageUrl`. The edit form may also carry `_action=delete`.
//! Unknown fields are skipped. Bodies may be multipart or URL-encoded; only
//! multipart bodies can carry an upload.

use actix_multipart::Multipart;
use actix_web::{HttpRequest, web};
use futures_util::TryStreamExt;
use serde::Deserialize;

use super::form_body::{FormBody, malformed_body, read_part, read_text_part};
use super::validation::{
    parse_date, parse_image_url, parse_kind, parse_text, parse_uploaded_image,
};
use crate::domain::{EntryDraft, EntryImage, EntryUpdate, Error, ImageChange, MAX_IMAGE_BYTES};

const DELETE_ACTION: &str = "delete";

/// File part as received, before validation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct UploadedFile {
    pub(crate) content_type: Option<String>,
    pub(crate) data: Vec<u8>,
}

/// Raw entry form values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct EntryForm {
    pub(crate) date: Option<String>,
    #[serde(rename = "type")]
    pub(crate) kind: Option<String>,
    pub(crate) text: Option<String>,
    #[serde(skip)]
    pub(crate) image: Option<UploadedFile>,
    #[serde(rename = "imageUrl")]
    pub(crate) image_url: Option<String>,
    #[serde(rename = "_action")]
    pub(crate) action: Option<String>,
}

impl EntryForm {
    /// Read the form from either body encoding.
    pub(crate) async fn from_request(
        req: &HttpRequest,
        payload: web::Payload,
    ) -> Result<Self, Error> {
        match FormBody::<Self>::from_request(req, payload).await? {
            FormBody::Fields(form) => Ok(form),
            FormBody::Multipart(multipart) => Self::read(multipart).await,
        }
    }

    /// Drain a multipart payload into a form.
    ///
    /// Oversized parts and malformed bodies become `invalid_request` errors.
    pub(crate) async fn read(mut payload: Multipart) -> Result<Self, Error> {
        let mut form = Self::default();
        while let Some(mut field) = payload.try_next().await.map_err(malformed_body)? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            match name.as_str() {
                "image" => {
                    let content_type = field.content_type().map(ToString::to_string);
                    let data = read_part(&mut field, MAX_IMAGE_BYTES).await?;
                    // Browsers submit an empty part when no file was chosen.
                    if !data.is_empty() {
                        form.image = Some(UploadedFile { content_type, data });
                    }
                }
                "date" => form.date = Some(read_text_part(&mut field, &name).await?),
                "type" => form.kind = Some(read_text_part(&mut field, &name).await?),
                "text" => form.text = Some(read_text_part(&mut field, &name).await?),
                "imageUrl" => form.image_url = Some(read_text_part(&mut field, &name).await?),
                "_action" => form.action = Some(read_text_part(&mut field, &name).await?),
                _ => {}
            }
        }
        Ok(form)
    }

    /// Whether the edit form asked for deletion.
    pub(crate) fn is_delete(&self) -> bool {
        self.action.as_deref().map(str::trim) == Some(DELETE_ACTION)
    }

    /// Validate the form as a new entry.
    pub(crate) fn into_draft(self) -> Result<EntryDraft, Error> {
        let date = parse_date(self.date.as_deref())?;
        let kind = parse_kind(self.kind.as_deref())?;
        let text = parse_text(self.text)?;
        let image = resolve_image(self.image, self.image_url.as_deref())?;
        Ok(EntryDraft {
            date,
            kind,
            text,
            image,
        })
    }

    /// Validate the form as an edit. Without a new image the old one is kept.
    pub(crate) fn into_update(self) -> Result<EntryUpdate, Error> {
        let date = parse_date(self.date.as_deref())?;
        let kind = parse_kind(self.kind.as_deref())?;
        let text = parse_text(self.text)?;
        let image = match resolve_image(self.image, self.image_url.as_deref())? {
            Some(image) => ImageChange::Replace(image),
            None => ImageChange::Keep,
        };
        Ok(EntryUpdate {
            date,
            kind,
            text,
            image,
        })
    }
}

/// An uploaded file wins over a link; blank links are ignored.
fn resolve_image(
    upload: Option<UploadedFile>,
    link: Option<&str>,
) -> Result<Option<EntryImage>, Error> {
    if let Some(file) = upload {
        return parse_uploaded_image(file.content_type.as_deref(), file.data).map(Some);
    }
    match link.map(str::trim) {
        Some(url) if !url.is_empty() => parse_image_url(url).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
#[path = "entry_form_tests.rs"]
mod tests;
