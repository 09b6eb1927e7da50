#![forbid(unsafe_code)]

use criterion::{Criterion, criterion_group, criterion_main};
use folio_core::{ActiveSectionTracker, ScrollRouter, StaticLayout, TrackerConfig, Trigger};
use std::hint::black_box;

fn portfolio_layout() -> StaticLayout {
    StaticLayout::stacked(
        70.0,
        &[
            ("home", 900.0),
            ("service", 1400.0),
            ("education", 1100.0),
            ("hire-me", 500.0),
            ("skills", 1300.0),
            ("projects", 1200.0),
            ("contact", 600.0),
        ],
    )
}

fn bench_scroll_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracker/recompute");

    group.bench_function("sweep_7_sections_step_16px", |b| {
        let mut layout = portfolio_layout();
        let end = layout.document_height() as u32;
        b.iter(|| {
            let mut tracker = ActiveSectionTracker::new(TrackerConfig::default());
            for scroll in (0..end).step_by(16) {
                layout.set_scroll(f64::from(scroll));
                black_box(tracker.recompute(&layout, Trigger::Scroll));
            }
            black_box(tracker.active_id().len());
        });
    });

    group.bench_function("navigate_round_robin", |b| {
        let mut layout = portfolio_layout();
        let router = ScrollRouter::new();
        let ids = ["home", "service", "education", "skills", "projects", "contact"];
        b.iter(|| {
            let mut tracker = ActiveSectionTracker::new(TrackerConfig::default());
            for id in ids {
                black_box(router.navigate(&mut tracker, &mut layout, id).ok());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scroll_sweep);
criterion_main!(benches);
