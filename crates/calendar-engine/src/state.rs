//! View and editor state as plain values with pure transitions.
//!
//! Each transition consumes the current state and returns the next one; the
//! caller decides where the state lives.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::event::{Event, EventDraft};
use crate::grid::{shift_months, shift_weeks};
use crate::store::CommitOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    #[default]
    Month,
    Week,
}

/// Which period is on screen and which day is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarState {
    pub current_date: NaiveDate,
    pub view: CalendarView,
    pub selected_date: Option<NaiveDate>,
}

impl CalendarState {
    pub fn new(current_date: NaiveDate, view: CalendarView) -> Self {
        Self {
            current_date,
            view,
            selected_date: None,
        }
    }

    /// Advance one month in month view, one week in week view.
    pub fn next(self) -> Self {
        self.step(1)
    }

    /// Go back one month in month view, one week in week view.
    pub fn previous(self) -> Self {
        self.step(-1)
    }

    fn step(self, direction: i32) -> Self {
        let current_date = match self.view {
            CalendarView::Month => shift_months(self.current_date, direction),
            CalendarView::Week => shift_weeks(self.current_date, i64::from(direction)),
        };
        Self {
            current_date,
            ..self
        }
    }

    /// Jump to `today`, keeping the view and selection.
    pub fn today(self, today: NaiveDate) -> Self {
        Self {
            current_date: today,
            ..self
        }
    }

    pub fn with_view(self, view: CalendarView) -> Self {
        Self { view, ..self }
    }

    pub fn select(self, date: Option<NaiveDate>) -> Self {
        Self {
            selected_date: date,
            ..self
        }
    }
}

/// State of the create/edit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    pub open: bool,
    /// The event being edited; `None` while creating.
    pub editing: Option<Event>,
    pub selected_date: Option<NaiveDate>,
}

impl EditorState {
    /// Open the form for a new event at `at`, returning the prefilled draft.
    pub fn open_create(self, at: NaiveDateTime) -> (Self, EventDraft) {
        let state = Self {
            open: true,
            editing: None,
            selected_date: Some(at.date()),
        };
        (state, EventDraft::starting_at(at))
    }

    /// Open the form on an existing event, returning its draft.
    pub fn open_edit(self, event: Event) -> (Self, EventDraft) {
        let draft = event.to_draft();
        let state = Self {
            open: true,
            editing: Some(event),
            selected_date: None,
        };
        (state, draft)
    }

    pub fn close(self) -> Self {
        Self::default()
    }

    /// Close after a successful commit; stay open so errors can be shown
    /// otherwise.
    pub fn after_commit(self, outcome: &CommitOutcome) -> Self {
        if outcome.success {
            self.close()
        } else {
            self
        }
    }
}
