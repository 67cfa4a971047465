//! Benchmarks for the week-view layout pipeline.

use std::hint::black_box;

use calendar_engine::config::LayoutConfig;
use calendar_engine::event::Event;
use calendar_engine::layout::{lay_out_day, lay_out_week};
use calendar_engine::overlap::GroupingStrategy;
use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};

/// `count` events spread over a working day, every third one overlapping its
/// neighbours.
fn busy_day(count: usize) -> Vec<Event> {
    let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let eight = day.and_hms_opt(8, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let start = eight + Duration::minutes((i as i64 * 17) % 600);
            let length = if i % 3 == 0 { 90 } else { 30 };
            Event {
                id: format!("evt-{}", i),
                title: format!("Event {}", i),
                description: None,
                start,
                end: start + Duration::minutes(length),
                color: None,
                category: None,
            }
        })
        .collect()
}

fn bench_day_layout(c: &mut Criterion) {
    let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let events = busy_day(40);

    c.bench_function("lay_out_day chained/banded 40 events", |b| {
        let config = LayoutConfig::default();
        b.iter(|| lay_out_day(black_box(&events), day, &config))
    });

    c.bench_function("lay_out_day connected/banded 40 events", |b| {
        let config = LayoutConfig {
            grouping: GroupingStrategy::Connected,
            ..LayoutConfig::default()
        };
        b.iter(|| lay_out_day(black_box(&events), day, &config))
    });
}

fn bench_week_layout(c: &mut Criterion) {
    let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let events = busy_day(200);
    let config = LayoutConfig::default();

    c.bench_function("lay_out_week 200 events", |b| {
        b.iter(|| lay_out_week(black_box(&events), day, &config))
    });
}

criterion_group!(benches, bench_day_layout, bench_week_layout);
criterion_main!(benches);
