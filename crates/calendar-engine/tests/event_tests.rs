//! Tests for event value types, drafts, and patches.

use calendar_engine::event::{Event, EventDraft, EventPatch, COLOR_PALETTE, DEFAULT_COLOR};
use chrono::{NaiveDate, NaiveDateTime};

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn review() -> Event {
    Event {
        id: "evt-1".to_string(),
        title: "Review".to_string(),
        description: Some("Q1".to_string()),
        start: at(9, 0),
        end: at(10, 0),
        color: None,
        category: Some("Work".to_string()),
    }
}

#[test]
fn draft_for_date_runs_nine_to_ten() {
    let draft = EventDraft::for_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

    assert_eq!(draft.start, Some(at(9, 0)));
    assert_eq!(draft.end, Some(at(10, 0)));
    assert_eq!(draft.color.as_deref(), Some(DEFAULT_COLOR));
    assert_eq!(draft.title.as_deref(), Some(""));
}

#[test]
fn draft_starting_at_keeps_picked_time() {
    let draft = EventDraft::starting_at(at(14, 30));

    assert_eq!(draft.start, Some(at(14, 30)));
    assert_eq!(draft.end, Some(at(15, 30)));
}

#[test]
fn into_event_trims_and_drops_empty_optionals() {
    let mut draft = EventDraft::for_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    draft.title = Some("  Standup ".to_string());
    draft.category = Some(String::new());

    let event = draft.into_event("evt-1".to_string()).unwrap();

    assert_eq!(event.title, "Standup");
    assert_eq!(event.description, None);
    assert_eq!(event.category, None);
    assert_eq!(event.color.as_deref(), Some(DEFAULT_COLOR));
}

#[test]
fn into_event_requires_both_dates() {
    let draft = EventDraft {
        title: Some("No end".to_string()),
        start: Some(at(9, 0)),
        ..EventDraft::default()
    };

    assert!(draft.into_event("evt-1".to_string()).is_none());
}

#[test]
fn patch_overlays_only_given_fields() {
    let patch = EventPatch {
        end: Some(at(11, 0)),
        ..EventPatch::default()
    };

    let merged = patch.apply_to(&review());

    assert_eq!(merged.title.as_deref(), Some("Review"));
    assert_eq!(merged.start, Some(at(9, 0)));
    assert_eq!(merged.end, Some(at(11, 0)));
    assert_eq!(merged.category.as_deref(), Some("Work"));
}

#[test]
fn duration_and_display_color() {
    let event = review();

    assert_eq!(event.duration_minutes(), 60);
    assert_eq!(event.display_color(), DEFAULT_COLOR);
    assert_eq!(COLOR_PALETTE[0].0, DEFAULT_COLOR);
}

#[test]
fn event_json_omits_absent_optionals() {
    let mut event = review();
    event.description = None;
    event.category = None;

    let json = serde_json::to_value(&event).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "id": "evt-1",
            "title": "Review",
            "start": "2024-01-15T09:00:00",
            "end": "2024-01-15T10:00:00",
        })
    );
    let back: Event = serde_json::from_value(json).unwrap();
    assert_eq!(back, event);
}
