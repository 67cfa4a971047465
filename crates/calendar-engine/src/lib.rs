//! # calendar-engine
//!
//! Deterministic layout core for month and week calendar views.
//!
//! Everything here is a pure function over immutable inputs: build the dates
//! a view shows, decide which events land on which day, cluster a day's
//! events by time overlap, and turn clusters into geometry a renderer can
//! draw without collisions. Writes go through [`store::EventStore`], which
//! refuses any event that fails [`validate::validate`].
//!
//! Dates are local wall-clock values (`chrono::NaiveDate` /
//! `chrono::NaiveDateTime`); no timezone conversion happens anywhere.
//!
//! ## Modules
//!
//! - [`grid`] — month and week date sequences, navigation arithmetic
//! - [`assign`] — events touching or starting on a date, month cell summaries
//! - [`overlap`] — overlap test and clustering
//! - [`layout`] — vertical and horizontal geometry per day column
//! - [`validate`] — field rules for candidate events
//! - [`store`] — validated create/update/delete
//! - [`state`] — view and editor state transitions
//! - [`config`] — view configuration
//! - [`event`] — event value types
//! - [`error`] — Error types

pub mod assign;
pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod layout;
pub mod overlap;
pub mod state;
pub mod store;
pub mod validate;

pub use assign::{events_starting_on_date, events_touching_date, summarize_cell, CellSummary};
pub use config::{CalendarConfig, LayoutConfig};
pub use error::CalendarError;
pub use event::{Event, EventDraft, EventPatch};
pub use grid::{build_month_cells, build_month_grid, build_week_range, GridCell};
pub use layout::{compute_layout, lay_out_day, lay_out_week, DayLayout, PlacedEvent};
pub use overlap::{events_overlap, group_connected, group_overlapping, sort_by_start};
pub use state::{CalendarState, CalendarView, EditorState};
pub use store::{CommitOutcome, EventStore};
pub use validate::{validate, ValidationIssue, ValidationReport};
