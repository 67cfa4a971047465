//! Tests for month/week grid construction and date navigation.

use calendar_engine::grid::{
    build_month_cells, build_month_grid, build_week_range, days_between, days_in_month,
    month_title, shift_months, shift_weeks, time_slots,
};
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ── Month grid ──────────────────────────────────────────────────────────────

#[test]
fn january_2024_spans_five_weeks() {
    // Jan 1 2024 is a Monday, Jan 31 a Wednesday.
    let grid = build_month_grid(date(2024, 1, 15));

    assert_eq!(grid.len(), 35);
    assert_eq!(grid[0], date(2023, 12, 31));
    assert_eq!(grid[34], date(2024, 2, 3));
}

#[test]
fn march_2024_spans_six_weeks() {
    // Mar 1 2024 is a Friday and Mar 31 a Sunday, so the grid runs into a sixth row.
    let grid = build_month_grid(date(2024, 3, 1));

    assert_eq!(grid.len(), 42);
    assert_eq!(grid[0], date(2024, 2, 25));
    assert_eq!(grid[41], date(2024, 4, 6));
}

#[test]
fn february_2015_fits_exactly_four_weeks() {
    // Feb 1 2015 is a Sunday and the month has 28 days: no padding at all.
    let grid = build_month_grid(date(2015, 2, 14));

    assert_eq!(grid.len(), 28);
    assert_eq!(grid[0], date(2015, 2, 1));
    assert_eq!(grid[27], date(2015, 2, 28));
}

#[test]
fn month_grid_starts_sunday_and_ends_saturday() {
    let grid = build_month_grid(date(2024, 9, 10));

    assert_eq!(grid.first().unwrap().weekday(), Weekday::Sun);
    assert_eq!(grid.last().unwrap().weekday(), Weekday::Sat);
}

#[test]
fn month_grid_is_independent_of_day_within_month() {
    assert_eq!(
        build_month_grid(date(2024, 1, 1)),
        build_month_grid(date(2024, 1, 31))
    );
}

#[test]
fn month_cells_flag_padding_days() {
    let cells = build_month_cells(date(2024, 1, 15));

    assert_eq!(cells.len(), 35);
    assert!(!cells[0].in_focal_month, "Dec 31 is padding");
    assert!(cells[1].in_focal_month, "Jan 1 is in the focal month");
    assert!(cells[31].in_focal_month, "Jan 31 is in the focal month");
    assert!(!cells[32].in_focal_month, "Feb 1 is padding");
    assert_eq!(cells.iter().filter(|c| c.in_focal_month).count(), 31);
}

#[test]
fn days_in_leap_february() {
    let days = days_in_month(date(2024, 2, 10));
    assert_eq!(days.len(), 29);
    assert_eq!(days[28], date(2024, 2, 29));
}

// ── Week range ──────────────────────────────────────────────────────────────

#[test]
fn week_range_for_midweek_date() {
    // 2024-01-17 is a Wednesday.
    let week = build_week_range(date(2024, 1, 17));

    assert_eq!(week.len(), 7);
    assert_eq!(week[0], date(2024, 1, 14));
    assert_eq!(week[6], date(2024, 1, 20));
}

#[test]
fn week_range_for_sunday_starts_on_that_day() {
    let week = build_week_range(date(2024, 1, 14));
    assert_eq!(week[0], date(2024, 1, 14));
}

#[test]
fn week_range_for_saturday_ends_on_that_day() {
    let week = build_week_range(date(2024, 1, 20));
    assert_eq!(week[0], date(2024, 1, 14));
    assert_eq!(week[6], date(2024, 1, 20));
}

#[test]
fn week_range_crosses_year_boundary() {
    // 2025-01-01 is a Wednesday.
    let week = build_week_range(date(2025, 1, 1));
    assert_eq!(week[0], date(2024, 12, 29));
    assert_eq!(week[6], date(2025, 1, 4));
}

// ── Navigation ──────────────────────────────────────────────────────────────

#[test]
fn shifting_months_clamps_day_of_month() {
    assert_eq!(shift_months(date(2024, 1, 31), 1), date(2024, 2, 29));
    assert_eq!(shift_months(date(2023, 1, 31), 1), date(2023, 2, 28));
    assert_eq!(shift_months(date(2024, 3, 31), -1), date(2024, 2, 29));
    assert_eq!(shift_months(date(2024, 1, 15), -1), date(2023, 12, 15));
    assert_eq!(shift_months(date(2024, 1, 15), 0), date(2024, 1, 15));
}

#[test]
fn shifting_weeks_moves_seven_days() {
    assert_eq!(shift_weeks(date(2024, 1, 15), 1), date(2024, 1, 22));
    assert_eq!(shift_weeks(date(2024, 1, 15), -1), date(2024, 1, 8));
}

#[test]
fn days_between_floors_partial_days() {
    let a = date(2024, 1, 15).and_hms_opt(10, 0, 0).unwrap();
    let b = date(2024, 1, 16).and_hms_opt(9, 0, 0).unwrap();
    let c = date(2024, 1, 17).and_hms_opt(10, 0, 0).unwrap();

    assert_eq!(days_between(a, b), 0);
    assert_eq!(days_between(a, c), 2);
    assert_eq!(days_between(b, a), -1, "negative spans round down");
}

#[test]
fn month_title_names_month_and_year() {
    assert_eq!(month_title(date(2024, 1, 15)), "January 2024");
    assert_eq!(month_title(date(1999, 12, 1)), "December 1999");
}

// ── Time slots ──────────────────────────────────────────────────────────────

#[test]
fn hourly_time_slots() {
    let slots = time_slots(60);
    assert_eq!(slots.len(), 24);
    assert_eq!(slots[0], NaiveTime::MIN);
    assert_eq!(slots[23], NaiveTime::from_hms_opt(23, 0, 0).unwrap());
}

#[test]
fn half_hour_time_slots() {
    let slots = time_slots(30);
    assert_eq!(slots.len(), 48);
    assert_eq!(slots[1], NaiveTime::from_hms_opt(0, 30, 0).unwrap());
    assert_eq!(slots[47], NaiveTime::from_hms_opt(23, 30, 0).unwrap());
}

#[test]
fn zero_interval_falls_back_to_hourly() {
    assert_eq!(time_slots(0), time_slots(60));
}
