//! Sunday-anchored week grouping for the journal listing.

use chrono::{Datelike, Days, NaiveDate};

use super::{Entry, EntryKind};

/// Sunday on or before `date`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use journal::domain::week_start;
///
/// let wednesday = NaiveDate::from_ymd_opt(2024, 3, 6).expect("valid date");
/// let sunday = NaiveDate::from_ymd_opt(2024, 3, 3).expect("valid date");
/// assert_eq!(week_start(wednesday), sunday);
/// assert_eq!(week_start(sunday), sunday);
/// ```
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    // Only the first week of the calendar's range can underflow.
    date.checked_sub_days(Days::new(offset))
        .unwrap_or(NaiveDate::MIN)
}

/// Entries filed under one week, split by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGroup {
    start: NaiveDate,
    work: Vec<Entry>,
    learnings: Vec<Entry>,
    interesting_things: Vec<Entry>,
}

impl WeekGroup {
    fn new(start: NaiveDate) -> Self {
        Self {
            start,
            work: Vec::new(),
            learnings: Vec::new(),
            interesting_things: Vec::new(),
        }
    }

    fn push(&mut self, entry: Entry) {
        match entry.kind() {
            EntryKind::Work => self.work.push(entry),
            EntryKind::Learning => self.learnings.push(entry),
            EntryKind::InterestingThing => self.interesting_things.push(entry),
        }
    }

    /// Sunday the week starts on.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn work(&self) -> &[Entry] {
        &self.work
    }

    pub fn learnings(&self) -> &[Entry] {
        &self.learnings
    }

    pub fn interesting_things(&self) -> &[Entry] {
        &self.interesting_things
    }

    /// Total number of entries in the week.
    pub fn len(&self) -> usize {
        self.work.len() + self.learnings.len() + self.interesting_things.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Heading shown above the week, e.g. `Week of March 3, 2024`.
    pub fn label(&self) -> String {
        format!("Week of {}", self.start.format("%B %-d, %Y"))
    }
}

/// Group entries into weeks.
///
/// Entries are first put into journal order (newest date, then newest
/// creation), so weeks come out newest first and entries within each kind
/// keep that order.
pub fn group_by_week(mut entries: Vec<Entry>) -> Vec<WeekGroup> {
    entries.sort_by(Entry::journal_order);

    let mut weeks: Vec<WeekGroup> = Vec::new();
    for entry in entries {
        let start = week_start(entry.date());
        match weeks.last_mut() {
            Some(week) if week.start == start => week.push(entry),
            _ => {
                let mut week = WeekGroup::new(start);
                week.push(entry);
                weeks.push(week);
            }
        }
    }
    weeks
}
