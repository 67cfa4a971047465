//! Assign events to the calendar days they occupy.
//!
//! Both filters are stable: the returned events keep their input order.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::event::Event;
use crate::grid::GridCell;

/// Events that touch `date` at all.
///
/// An event touches a date when its start or its end falls on that date, or
/// when the date's midnight lies within `[start, end]`. Multi-day events show
/// up on every day they span, and an event ending exactly at midnight also
/// touches the day it ends on.
pub fn events_touching_date(events: &[Event], date: NaiveDate) -> Vec<Event> {
    let midnight = date.and_time(NaiveTime::MIN);
    events
        .iter()
        .filter(|e| touches(e, date, midnight))
        .cloned()
        .collect()
}

/// Events whose start falls on `date`, regardless of where they end.
///
/// Used for day columns, where an event is drawn once in the column it
/// starts in even when it runs past midnight.
pub fn events_starting_on_date(events: &[Event], date: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|e| e.start.date() == date)
        .cloned()
        .collect()
}

fn touches(event: &Event, date: NaiveDate, midnight: NaiveDateTime) -> bool {
    event.start.date() == date
        || event.end.date() == date
        || (event.start <= midnight && event.end >= midnight)
}

/// What a month-view cell shows: the first few events and how many more.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellSummary {
    pub date: NaiveDate,
    pub in_focal_month: bool,
    pub visible: Vec<Event>,
    /// Count behind the "+N more" marker. Zero when everything fits.
    pub overflow: usize,
}

impl CellSummary {
    pub fn total(&self) -> usize {
        self.visible.len() + self.overflow
    }
}

/// Summarize the events touching `cell`, keeping at most `max_visible`.
pub fn summarize_cell(events: &[Event], cell: GridCell, max_visible: usize) -> CellSummary {
    let mut visible = events_touching_date(events, cell.date);
    let overflow = visible.len().saturating_sub(max_visible);
    visible.truncate(max_visible);
    CellSummary {
        date: cell.date,
        in_focal_month: cell.in_focal_month,
        visible,
        overflow,
    }
}
