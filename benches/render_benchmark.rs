//! Performance benchmarks for capsule layout and overlay rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratatui::{backend::TestBackend, Terminal};
use tcreactions::app::App;
use tcreactions::capsule::{CapsuleConfig, ReactionCapsule};
use tcreactions::config::AppConfig;
use tcreactions::geometry::{Frame, Point};

fn full_capsule(count: usize) -> ReactionCapsule {
    let mut capsule = ReactionCapsule::new(CapsuleConfig::default().with_capacity(count));
    capsule
        .append_reactions((0..count).map(|i| format!("r{}", i)))
        .unwrap();
    capsule
}

/// Benchmark button layout and hit testing for growing capsules
fn bench_capsule_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("capsule_hit_test");
    let bounds = Frame::new(0.0, 0.0, 250.0, 50.0);

    for size in [3, 6, 12, 24].iter() {
        let capsule = full_capsule(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &capsule, |b, capsule| {
            b.iter(|| black_box(capsule.hit_test(bounds, black_box(Point::new(240.0, 25.0)))));
        });
    }

    group.finish();
}

/// Benchmark a full frame with the preview open and revealed
fn bench_render_preview(c: &mut Criterion) {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    let mut app = App::new(AppConfig::default().with_feed_enabled(false));
    app.open_preview(2);
    app.tick();

    c.bench_function("render_preview_frame", |b| {
        b.iter(|| {
            terminal
                .draw(|f| tcreactions::ui::render(f, &mut app))
                .unwrap();
        });
    });
}

criterion_group!(benches, bench_capsule_hit_test, bench_render_preview);
criterion_main!(benches);
