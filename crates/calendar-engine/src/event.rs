//! Event value types.
//!
//! An [`Event`] is what the store holds. An [`EventDraft`] is a candidate that
//! has not been validated yet: every field may be missing, which is how the
//! editor form hands data to [`crate::validate::validate`]. An [`EventPatch`]
//! carries the fields an update replaces.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Color assigned to new events when the user picks none.
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// Colors offered by the event editor, as `(token, label)`.
pub const COLOR_PALETTE: [(&str, &str); 8] = [
    ("#3b82f6", "Blue"),
    ("#10b981", "Green"),
    ("#f59e0b", "Orange"),
    ("#ef4444", "Red"),
    ("#8b5cf6", "Purple"),
    ("#ec4899", "Pink"),
    ("#06b6d4", "Cyan"),
    ("#84cc16", "Lime"),
];

/// Category labels offered by the event editor.
pub const CATEGORIES: [&str; 5] = ["Meeting", "Work", "Personal", "Design", "Development"];

/// A stored calendar event.
///
/// `start` and `end` are local wall-clock values. Once an event has passed
/// validation `end > start` holds, but events read back from storage are not
/// guaranteed to have been validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Event {
    /// Duration in whole minutes, truncated toward zero. Negative for
    /// reversed (unvalidated) events.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// The color to render with, falling back to [`DEFAULT_COLOR`].
    pub fn display_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_COLOR)
    }

    /// The editable fields of this event as a draft.
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: Some(self.title.clone()),
            description: self.description.clone(),
            start: Some(self.start),
            end: Some(self.end),
            color: self.color.clone(),
            category: self.category.clone(),
        }
    }
}

/// A candidate event, as collected by an editor form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start: Option<NaiveDateTime>,
    #[serde(default)]
    pub end: Option<NaiveDateTime>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl EventDraft {
    /// A blank draft on `date`, running 09:00 to 10:00.
    pub fn for_date(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN));
        Self::blank(start, start + Duration::hours(1))
    }

    /// A blank one-hour draft starting at `at`.
    ///
    /// An instant at exactly midnight means "a date was picked, not a time",
    /// so it falls back to [`EventDraft::for_date`].
    pub fn starting_at(at: NaiveDateTime) -> Self {
        if at.hour() == 0 && at.minute() == 0 {
            return Self::for_date(at.date());
        }
        Self::blank(at, at + Duration::hours(1))
    }

    fn blank(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        EventDraft {
            title: Some(String::new()),
            description: Some(String::new()),
            start: Some(start),
            end: Some(end),
            color: Some(DEFAULT_COLOR.to_string()),
            category: None,
        }
    }

    /// Convert into a stored event with the given id.
    ///
    /// Returns `None` when start or end is missing. Callers run validation
    /// first; this only performs the structural conversion. Title and
    /// description are trimmed and empty optional strings become `None`.
    pub fn into_event(self, id: String) -> Option<Event> {
        Some(Event {
            id,
            title: self.title.unwrap_or_default().trim().to_string(),
            description: non_empty(self.description.map(|d| d.trim().to_string())),
            start: self.start?,
            end: self.end?,
            color: non_empty(self.color),
            category: non_empty(self.category),
        })
    }
}

/// Fields replaced by an update. `None` leaves the stored value as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start: Option<NaiveDateTime>,
    #[serde(default)]
    pub end: Option<NaiveDateTime>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl EventPatch {
    /// Overlay this patch onto `event`, producing the merged draft.
    pub fn apply_to(&self, event: &Event) -> EventDraft {
        let mut draft = event.to_draft();
        if let Some(title) = &self.title {
            draft.title = Some(title.clone());
        }
        if let Some(description) = &self.description {
            draft.description = Some(description.clone());
        }
        if let Some(start) = self.start {
            draft.start = Some(start);
        }
        if let Some(end) = self.end {
            draft.end = Some(end);
        }
        if let Some(color) = &self.color {
            draft.color = Some(color.clone());
        }
        if let Some(category) = &self.category {
            draft.category = Some(category.clone());
        }
        draft
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

