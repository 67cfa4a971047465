//! Month and week date grids.
//!
//! Weeks start on Sunday. A month grid covers the reference month padded out to
//! whole weeks on both sides, so it is always a multiple of 7 days long: 35 for
//! most months, 42 when the month spills into a sixth week, and 28 for a
//! February that starts on a Sunday in a non-leap year.

use chrono::{Datelike, Days, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One day of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub date: NaiveDate,
    /// `false` for the padding days borrowed from the adjacent months.
    pub in_focal_month: bool,
}

/// All dates shown in the month view for the month containing `reference`.
///
/// Runs from the Sunday on or before the first of the month through the
/// Saturday on or after the last of the month, inclusive, in ascending order.
pub fn build_month_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(reference);
    let last = last_of_month(reference);
    days_inclusive(start_of_week(first), end_of_week(last))
}

/// The month grid paired with each date's focal-month flag.
pub fn build_month_cells(reference: NaiveDate) -> Vec<GridCell> {
    build_month_grid(reference)
        .into_iter()
        .map(|date| GridCell {
            date,
            in_focal_month: is_same_month(date, reference),
        })
        .collect()
}

/// The seven dates, Sunday through Saturday, of the week containing `reference`.
pub fn build_week_range(reference: NaiveDate) -> Vec<NaiveDate> {
    days_inclusive(start_of_week(reference), end_of_week(reference))
}

/// Every day of the month containing `reference`.
pub fn days_in_month(reference: NaiveDate) -> Vec<NaiveDate> {
    days_inclusive(first_of_month(reference), last_of_month(reference))
}

/// The Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as u64;
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// The Saturday on or after `date`.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    let offset = 6 - date.weekday().num_days_from_sunday() as u64;
    date.checked_add_days(Days::new(offset)).unwrap_or(date)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Whether `a` and `b` fall in the same calendar month of the same year.
pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Move `date` by `months` calendar months.
///
/// The day of month is clamped to the target month's length, so Jan 31 plus
/// one month is the last day of February. Out-of-range results leave `date`
/// unchanged.
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// Move `date` by `weeks` whole weeks.
pub fn shift_weeks(date: NaiveDate, weeks: i64) -> NaiveDate {
    Duration::try_weeks(weeks)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(date)
}

/// Whole days elapsed from `start` to `end`, rounded toward negative infinity.
pub fn days_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
    (end - start).num_milliseconds().div_euclid(MS_PER_DAY)
}

/// Heading for a month view, e.g. "January 2024".
pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Row labels for the day-column time axis, from 00:00 up to the last slot
/// before midnight.
///
/// An `interval_minutes` of 0 is treated as 60.
pub fn time_slots(interval_minutes: u32) -> Vec<NaiveTime> {
    let step = if interval_minutes == 0 { 60 } else { interval_minutes };
    (0..24u32)
        .flat_map(|hour| {
            (0..60u32)
                .step_by(step as usize)
                .filter_map(move |minute| NaiveTime::from_hms_opt(hour, minute, 0))
        })
        .collect()
}

fn days_inclusive(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}
