//! Journal entry aggregate and its value types.
//!
//! An entry is a dated note tagged with one of three kinds and optionally
//! carrying an image. Constructors validate raw input so adapters never hold
//! an `Entry` that breaks the invariants below.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// Upper bound for inline image payloads.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Validation errors raised by entry constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyId,
    InvalidId,
    EmptyText,
    NulInText,
    EmptyImage,
    ImageTooLarge { max: usize },
    UnsupportedImageType { content_type: String },
    InvalidImageUrl,
    UpdatedBeforeCreated,
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "entry id must not be empty"),
            Self::InvalidId => write!(f, "entry id must be a valid UUID"),
            Self::EmptyText => write!(f, "text must not be empty"),
            Self::NulInText => write!(f, "text must not contain NUL characters"),
            Self::EmptyImage => write!(f, "image must not be empty"),
            Self::ImageTooLarge { max } => write!(f, "image must be at most {max} bytes"),
            Self::UnsupportedImageType { content_type } => {
                write!(f, "image content type must be image/*, got {content_type}")
            }
            Self::InvalidImageUrl => write!(f, "image URL must be an absolute http(s) URL"),
            Self::UpdatedBeforeCreated => {
                write!(f, "updated_at must not be earlier than created_at")
            }
        }
    }
}

impl std::error::Error for EntryValidationError {}

/// Stable entry identifier stored as a UUID.
///
/// # Examples
/// ```
/// use journal::domain::EntryId;
///
/// let id = EntryId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// assert!(EntryId::new("abc").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntryId(Uuid);

impl EntryId {
    /// Validate and construct an [`EntryId`] from text.
    pub fn new(id: impl AsRef<str>) -> Result<Self, EntryValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(EntryValidationError::EmptyId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| EntryValidationError::InvalidId)
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<EntryId> for String {
    fn from(value: EntryId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for EntryId {
    type Error = EntryValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Category an entry is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    Work,
    Learning,
    InterestingThing,
}

/// Error returned when parsing an [`EntryKind`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseEntryKindError;

impl fmt::Display for ParseEntryKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("type must be one of work, learning, interesting-thing")
    }
}

impl std::error::Error for ParseEntryKindError {}

impl EntryKind {
    /// Every kind, in display order.
    pub const ALL: [Self; 3] = [Self::Work, Self::Learning, Self::InterestingThing];

    /// Wire and storage representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Learning => "learning",
            Self::InterestingThing => "interesting-thing",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = ParseEntryKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "work" => Ok(Self::Work),
            "learning" => Ok(Self::Learning),
            "interesting-thing" => Ok(Self::InterestingThing),
            _ => Err(ParseEntryKindError),
        }
    }
}

/// Entry body text.
///
/// ## Invariants
/// - Not empty once trimmed. The original text is kept verbatim.
/// - No U+0000; PostgreSQL `text` columns cannot store it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntryText(String);

impl EntryText {
    /// Validate and construct entry text.
    pub fn new(text: impl Into<String>) -> Result<Self, EntryValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(EntryValidationError::EmptyText);
        }
        if text.contains('\0') {
            return Err(EntryValidationError::NulInText);
        }
        Ok(Self(text))
    }
}

impl AsRef<str> for EntryText {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EntryText> for String {
    fn from(value: EntryText) -> Self {
        value.0
    }
}

impl TryFrom<String> for EntryText {
    type Error = EntryValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Image attached to an entry.
///
/// Uploaded files are stored inline with their MIME type; entries may instead
/// point at an image hosted elsewhere.
#[derive(Clone, PartialEq, Eq)]
pub enum EntryImage {
    Inline { content_type: String, data: Vec<u8> },
    External { url: String },
}

impl fmt::Debug for EntryImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline { content_type, data } => f
                .debug_struct("Inline")
                .field("content_type", content_type)
                .field("len", &data.len())
                .finish(),
            Self::External { url } => f.debug_struct("External").field("url", url).finish(),
        }
    }
}

impl EntryImage {
    /// Validate an uploaded image.
    ///
    /// # Examples
    /// ```
    /// use journal::domain::EntryImage;
    ///
    /// let image = EntryImage::inline("image/png", vec![1, 2, 3]).expect("valid image");
    /// assert_eq!(image.to_src(), "data:image/png;base64,AQID");
    /// assert!(EntryImage::inline("text/plain", vec![1]).is_err());
    /// ```
    pub fn inline(
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Result<Self, EntryValidationError> {
        let content_type = content_type.into().trim().to_ascii_lowercase();
        if !content_type.starts_with("image/") || content_type.len() == "image/".len() {
            return Err(EntryValidationError::UnsupportedImageType { content_type });
        }
        if data.is_empty() {
            return Err(EntryValidationError::EmptyImage);
        }
        if data.len() > MAX_IMAGE_BYTES {
            return Err(EntryValidationError::ImageTooLarge {
                max: MAX_IMAGE_BYTES,
            });
        }
        Ok(Self::Inline { content_type, data })
    }

    /// Validate a link to an externally hosted image.
    pub fn external(url: impl AsRef<str>) -> Result<Self, EntryValidationError> {
        let parsed =
            Url::parse(url.as_ref().trim()).map_err(|_| EntryValidationError::InvalidImageUrl)?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(EntryValidationError::InvalidImageUrl);
        }
        Ok(Self::External {
            url: parsed.to_string(),
        })
    }

    /// Value suitable for an `<img src>` attribute.
    ///
    /// Inline images render as `data:` URLs.
    pub fn to_src(&self) -> String {
        match self {
            Self::Inline { content_type, data } => {
                format!("data:{content_type};base64,{}", BASE64.encode(data))
            }
            Self::External { url } => url.clone(),
        }
    }
}

/// Validated entry fields supplied by the admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub date: NaiveDate,
    pub kind: EntryKind,
    pub text: EntryText,
    pub image: Option<EntryImage>,
}

/// What to do with an entry's image during an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageChange {
    /// Leave the stored image untouched.
    Keep,
    /// Swap in a new image.
    Replace(EntryImage),
}

/// Validated edit submitted for an existing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryUpdate {
    pub date: NaiveDate,
    pub kind: EntryKind,
    pub text: EntryText,
    pub image: ImageChange,
}

/// Every persisted field of an entry, used to rebuild it from storage.
#[derive(Debug, Clone)]
pub struct EntrySnapshot {
    pub id: EntryId,
    pub date: NaiveDate,
    pub kind: EntryKind,
    pub text: EntryText,
    pub image: Option<EntryImage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A journal entry.
///
/// ## Invariants
/// - `updated_at >= created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,
    date: NaiveDate,
    kind: EntryKind,
    text: EntryText,
    image: Option<EntryImage>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Entry {
    /// Create a brand new entry stamped with `now`.
    pub fn create(id: EntryId, draft: EntryDraft, now: DateTime<Utc>) -> Self {
        let EntryDraft {
            date,
            kind,
            text,
            image,
        } = draft;
        Self {
            id,
            date,
            kind,
            text,
            image,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild an entry from stored fields.
    pub fn from_snapshot(snapshot: EntrySnapshot) -> Result<Self, EntryValidationError> {
        let EntrySnapshot {
            id,
            date,
            kind,
            text,
            image,
            created_at,
            updated_at,
        } = snapshot;
        if updated_at < created_at {
            return Err(EntryValidationError::UpdatedBeforeCreated);
        }
        Ok(Self {
            id,
            date,
            kind,
            text,
            image,
            created_at,
            updated_at,
        })
    }

    /// Apply an edit, bumping `updated_at`.
    ///
    /// A clock running behind `created_at` never moves `updated_at` earlier
    /// than creation.
    pub fn revise(&mut self, update: EntryUpdate, now: DateTime<Utc>) {
        let EntryUpdate {
            date,
            kind,
            text,
            image,
        } = update;
        self.date = date;
        self.kind = kind;
        self.text = text;
        if let ImageChange::Replace(image) = image {
            self.image = Some(image);
        }
        self.updated_at = now.max(self.created_at);
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn text(&self) -> &EntryText {
        &self.text
    }

    pub fn image(&self) -> Option<&EntryImage> {
        self.image.as_ref()
    }

    /// Image rendered for display: a `data:` URL for uploads, the link
    /// otherwise.
    pub fn data_url(&self) -> Option<String> {
        self.image.as_ref().map(EntryImage::to_src)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Journal display order: newest date first, then newest creation first.
    pub fn journal_order(a: &Self, b: &Self) -> Ordering {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    }
}
