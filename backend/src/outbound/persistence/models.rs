//! Internal Diesel row structs for the `entries` table.
//!
//! These stay inside the persistence layer; the repository converts them to
//! and from [`Entry`] at the boundary.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    Entry, EntryId, EntryImage, EntryKind, EntrySnapshot, EntryText, EntryValidationError,
};

use super::schema::entries;

/// Row read from the entries table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = entries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EntryRow {
    pub id: Uuid,
    pub entry_date: NaiveDate,
    pub kind: String,
    pub body: String,
    pub image_data: Option<Vec<u8>>,
    pub image_content_type: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Errors raised while turning a stored row back into an [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum RowDecodeError {
    #[error("entry {id} has unknown kind {kind:?}")]
    UnknownKind { id: Uuid, kind: String },
    #[error("entry {id} stores image bytes without a content type")]
    MissingContentType { id: Uuid },
    #[error("entry {id} is invalid: {source}")]
    Invalid {
        id: Uuid,
        #[source]
        source: EntryValidationError,
    },
}

impl EntryRow {
    pub(crate) fn into_entry(self) -> Result<Entry, RowDecodeError> {
        let Self {
            id,
            entry_date,
            kind,
            body,
            image_data,
            image_content_type,
            image_url,
            created_at,
            updated_at,
        } = self;

        let invalid = |source| RowDecodeError::Invalid { id, source };
        let kind = kind
            .parse::<EntryKind>()
            .map_err(|_| RowDecodeError::UnknownKind {
                id,
                kind: kind.clone(),
            })?;
        let image = match (image_data, image_content_type, image_url) {
            (Some(data), Some(content_type), _) => {
                Some(EntryImage::inline(content_type, data).map_err(invalid)?)
            }
            (Some(_), None, _) => return Err(RowDecodeError::MissingContentType { id }),
            (None, _, Some(url)) => Some(EntryImage::external(url).map_err(invalid)?),
            (None, _, None) => None,
        };

        Entry::from_snapshot(EntrySnapshot {
            id: EntryId::from_uuid(id),
            date: entry_date,
            kind,
            text: EntryText::new(body).map_err(invalid)?,
            image,
            created_at,
            updated_at,
        })
        .map_err(invalid)
    }
}

/// Column values shared by inserts and updates.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = entries)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct EntryRecord<'a> {
    pub id: Uuid,
    pub entry_date: NaiveDate,
    pub kind: &'a str,
    pub body: &'a str,
    pub image_data: Option<&'a [u8]>,
    pub image_content_type: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Entry> for EntryRecord<'a> {
    fn from(entry: &'a Entry) -> Self {
        let (image_data, image_content_type, image_url) = match entry.image() {
            Some(EntryImage::Inline { content_type, data }) => {
                (Some(data.as_slice()), Some(content_type.as_str()), None)
            }
            Some(EntryImage::External { url }) => (None, None, Some(url.as_str())),
            None => (None, None, None),
        };
        Self {
            id: *entry.id().as_uuid(),
            entry_date: entry.date(),
            kind: entry.kind().as_str(),
            body: entry.text().as_ref(),
            image_data,
            image_content_type,
            image_url,
            created_at: entry.created_at(),
            updated_at: entry.updated_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion coverage; no database required.
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn row() -> EntryRow {
        let stamp = Utc
            .with_ymd_and_hms(2024, 3, 6, 8, 0, 0)
            .single()
            .expect("valid timestamp");
        EntryRow {
            id: Uuid::new_v4(),
            entry_date: NaiveDate::from_ymd_opt(2024, 3, 6).expect("valid date"),
            kind: "interesting-thing".to_owned(),
            body: "A heron on the canal".to_owned(),
            image_data: Some(vec![9, 9]),
            image_content_type: Some("image/gif".to_owned()),
            image_url: None,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    #[rstest]
    fn row_round_trips_through_record(row: EntryRow) {
        let entry = row.clone().into_entry().expect("row decodes");
        let record = EntryRecord::from(&entry);

        assert_eq!(record.id, row.id);
        assert_eq!(record.kind, "interesting-thing");
        assert_eq!(record.image_data, Some([9_u8, 9].as_slice()));
        assert_eq!(record.image_content_type, Some("image/gif"));
        assert_eq!(record.image_url, None);
    }

    #[rstest]
    fn unknown_kind_is_reported(mut row: EntryRow) {
        row.kind = "chore".to_owned();
        let err = row.into_entry().expect_err("unknown kind");
        assert!(matches!(err, RowDecodeError::UnknownKind { .. }));
    }

    #[rstest]
    fn image_bytes_without_content_type_are_rejected(mut row: EntryRow) {
        row.image_content_type = None;
        let err = row.into_entry().expect_err("missing content type");
        assert!(matches!(err, RowDecodeError::MissingContentType { .. }));
    }

    #[rstest]
    fn external_url_is_used_when_no_bytes_are_stored(mut row: EntryRow) {
        row.image_data = None;
        row.image_content_type = None;
        row.image_url = Some("https://example.com/heron.jpg".to_owned());
        let entry = row.into_entry().expect("row decodes");
        assert_eq!(
            entry.data_url().as_deref(),
            Some("https://example.com/heron.jpg")
        );
    }
}
