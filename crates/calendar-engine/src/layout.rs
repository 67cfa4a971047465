//! Two-dimensional placement of events inside day columns.
//!
//! Vertical geometry comes from the time of day: one hour is `slot_height`
//! display units tall, measured from the day's midnight. Horizontal geometry
//! comes from clustering and is expressed as percentages of the column width.
//!
//! The banded layout ([`compute_layout`]) splits the column into equal-width
//! bands, one per cluster, and splits each band evenly between the cluster's
//! members. The packed layout ([`pack_columns`]) gives each cluster the full
//! column and assigns every event the leftmost sub-column that is free at its
//! start, so events that do not overlap can share a sub-column.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assign::events_starting_on_date;
use crate::config::LayoutConfig;
use crate::event::Event;
use crate::grid::build_week_range;
use crate::overlap::sort_by_start;

/// Vertical extent below which events are stretched so they stay clickable.
pub const DEFAULT_MIN_EXTENT: f64 = 20.0;

/// Display units per hour in the reference week view.
pub const DEFAULT_SLOT_HEIGHT: f64 = 60.0;

/// Which horizontal placement a layout uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStrategy {
    #[default]
    Banded,
    Packed,
}

/// An event with its computed geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedEvent {
    pub event: Event,
    /// Distance from the top of the day column.
    pub vertical_offset: f64,
    pub vertical_extent: f64,
    /// Left edge, as a percentage of the day column width.
    pub left_percent: f64,
    /// Width, as a percentage of the day column width.
    pub width_percent: f64,
    pub cluster_index: usize,
    pub cluster_count: usize,
    pub slot_index: usize,
    pub slot_count: usize,
}

/// All placed events for one day column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub events: Vec<PlacedEvent>,
}

/// Vertical `(offset, extent)` of an event drawn in the column for `day`.
///
/// The offset is minutes since `day`'s midnight scaled by `slot_height / 60`,
/// and goes negative for events that started on an earlier day. The extent
/// is the duration scaled the same way, raised to `min_extent` when shorter.
/// Reversed events have a negative duration and therefore get `min_extent`.
pub fn event_position(
    start: NaiveDateTime,
    end: NaiveDateTime,
    day: NaiveDate,
    slot_height: f64,
    min_extent: f64,
) -> (f64, f64) {
    let midnight = day.and_time(NaiveTime::MIN);
    let minutes_from_start = (start - midnight).num_minutes() as f64;
    let duration_minutes = (end - start).num_minutes() as f64;

    let offset = minutes_from_start / 60.0 * slot_height;
    let extent = (duration_minutes / 60.0 * slot_height).max(min_extent);
    (offset, extent)
}

/// Banded layout of `clusters` in the column for `day`, with the default
/// minimum extent.
///
/// Cluster `i` of `n` occupies the band `[i/n, (i+1)/n)` of the column; the
/// `j`-th of its `k` members occupies the `j`-th of `k` equal sub-columns of
/// that band. One [`PlacedEvent`] is returned per input event, cluster by
/// cluster.
pub fn compute_layout(clusters: &[Vec<Event>], day: NaiveDate, slot_height: f64) -> Vec<PlacedEvent> {
    compute_layout_with(clusters, day, slot_height, DEFAULT_MIN_EXTENT)
}

/// [`compute_layout`] with an explicit minimum extent.
pub fn compute_layout_with(
    clusters: &[Vec<Event>],
    day: NaiveDate,
    slot_height: f64,
    min_extent: f64,
) -> Vec<PlacedEvent> {
    let cluster_count = clusters.len();
    let band_width = 100.0 / cluster_count.max(1) as f64;

    let mut placed = Vec::with_capacity(clusters.iter().map(Vec::len).sum());
    for (cluster_index, cluster) in clusters.iter().enumerate() {
        let band_left = cluster_index as f64 * band_width;
        let slot_count = cluster.len();
        let slot_width = band_width / slot_count.max(1) as f64;

        for (slot_index, event) in cluster.iter().enumerate() {
            let (vertical_offset, vertical_extent) =
                event_position(event.start, event.end, day, slot_height, min_extent);
            placed.push(PlacedEvent {
                event: event.clone(),
                vertical_offset,
                vertical_extent,
                left_percent: band_left + slot_index as f64 * slot_width,
                width_percent: slot_width,
                cluster_index,
                cluster_count,
                slot_index,
                slot_count,
            });
        }
    }
    placed
}

/// Packed layout of `clusters` in the column for `day`.
///
/// Within each cluster, events are visited in the order given and each takes
/// the leftmost sub-column whose previous occupant has ended by the event's
/// start, opening a new sub-column when none is free. Every member of a
/// cluster gets `1/columns` of the full column width.
///
/// Clusters must not overlap one another in time. That holds for the output
/// of [`crate::overlap::group_connected`] and for
/// [`crate::overlap::group_overlapping`] applied to start-sorted events.
pub fn pack_columns(
    clusters: &[Vec<Event>],
    day: NaiveDate,
    slot_height: f64,
    min_extent: f64,
) -> Vec<PlacedEvent> {
    let cluster_count = clusters.len();
    let mut placed = Vec::with_capacity(clusters.iter().map(Vec::len).sum());

    for (cluster_index, cluster) in clusters.iter().enumerate() {
        let mut column_ends: Vec<NaiveDateTime> = Vec::new();
        let mut columns = Vec::with_capacity(cluster.len());
        for event in cluster {
            let column = match column_ends.iter().position(|end| *end <= event.start) {
                Some(free) => {
                    column_ends[free] = event.end;
                    free
                }
                None => {
                    column_ends.push(event.end);
                    column_ends.len() - 1
                }
            };
            columns.push(column);
        }

        let slot_count = column_ends.len();
        let slot_width = 100.0 / slot_count.max(1) as f64;
        for (event, slot_index) in cluster.iter().zip(columns) {
            let (vertical_offset, vertical_extent) =
                event_position(event.start, event.end, day, slot_height, min_extent);
            placed.push(PlacedEvent {
                event: event.clone(),
                vertical_offset,
                vertical_extent,
                left_percent: slot_index as f64 * slot_width,
                width_percent: slot_width,
                cluster_index,
                cluster_count,
                slot_index,
                slot_count,
            });
        }
    }
    placed
}

/// Lay out the day column for `date`.
///
/// Takes the events starting on `date`, sorts them by start, groups them with
/// the configured strategy and places them with the configured layout.
pub fn lay_out_day(events: &[Event], date: NaiveDate, config: &LayoutConfig) -> Vec<PlacedEvent> {
    let day_events = sort_by_start(&events_starting_on_date(events, date));
    let clusters = config.grouping.group(&day_events);

    debug!(
        %date,
        events = day_events.len(),
        clusters = clusters.len(),
        strategy = ?config.strategy,
        "laying out day column"
    );

    match config.strategy {
        LayoutStrategy::Banded => {
            compute_layout_with(&clusters, date, config.slot_height, config.min_extent)
        }
        LayoutStrategy::Packed => pack_columns(&clusters, date, config.slot_height, config.min_extent),
    }
}

/// Lay out all seven day columns of the week containing `reference`.
pub fn lay_out_week(events: &[Event], reference: NaiveDate, config: &LayoutConfig) -> Vec<DayLayout> {
    build_week_range(reference)
        .into_iter()
        .map(|date| DayLayout {
            date,
            events: lay_out_day(events, date, config),
        })
        .collect()
}
