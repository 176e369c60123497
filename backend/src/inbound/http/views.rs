//! JSON view models returned by the journal pages.
//!
//! Dates render as `YYYY-MM-DD` and images as `data:` URLs (uploads) or plain
//! links. Edit links only appear for the admin.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Entry, WeekGroup};

/// Session data exposed to every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub is_admin: bool,
}

/// One journal entry as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryView {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "2024-03-04")]
    pub date: String,
    #[serde(rename = "type")]
    #[schema(example = "work")]
    pub kind: String,
    pub text: String,
    /// `data:` URL for uploaded images, the link for hosted ones.
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "/entries/3fa85f64-5717-4562-b3fc-2c963f66afa6/edit")]
    pub edit_url: Option<String>,
}

impl EntryView {
    pub fn from_entry(entry: &Entry, is_admin: bool) -> Self {
        Self {
            id: entry.id().to_string(),
            date: entry.date().format("%Y-%m-%d").to_string(),
            kind: entry.kind().as_str().to_owned(),
            text: entry.text().as_ref().to_owned(),
            image: entry.data_url(),
            edit_url: is_admin.then(|| edit_path(entry)),
        }
    }
}

/// Path of an entry's edit page.
pub fn edit_path(entry: &Entry) -> String {
    format!("/entries/{}/edit", entry.id())
}

/// One Sunday-anchored week of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeekView {
    #[schema(example = "2024-03-03")]
    pub start: String,
    #[schema(example = "Week of March 3, 2024")]
    pub label: String,
    pub work: Vec<EntryView>,
    pub learnings: Vec<EntryView>,
    pub interesting_things: Vec<EntryView>,
}

impl WeekView {
    pub fn from_week(week: &WeekGroup, is_admin: bool) -> Self {
        let views = |entries: &[Entry]| {
            entries
                .iter()
                .map(|entry| EntryView::from_entry(entry, is_admin))
                .collect()
        };
        Self {
            start: week.start().format("%Y-%m-%d").to_string(),
            label: week.label(),
            work: views(week.work()),
            learnings: views(week.learnings()),
            interesting_things: views(week.interesting_things()),
        }
    }
}

/// Payload of the journal index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct JournalView {
    pub session: SessionView,
    pub weeks: Vec<WeekView>,
}
