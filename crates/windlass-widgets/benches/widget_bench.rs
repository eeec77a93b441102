//! Benchmarks for window math and event routing.
//!
//! Run with: cargo bench -p windlass-widgets

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use windlass_core::event::Event;
use windlass_core::geometry::ViewportGeometry;
use windlass_widgets::pull_list::{PullList, PullListState};
use windlass_widgets::window::ViewWindow;

const ROW: f32 = 50.0;
const VIEWPORT: f32 = 500.0;

fn geometry(total: usize, scroll_offset: f32) -> ViewportGeometry {
    ViewportGeometry::new(scroll_offset, VIEWPORT, total as f32 * ROW)
}

// ============================================================================
// Window calculator
// ============================================================================

fn bench_window_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("window/compute");

    for total in [1_000usize, 100_000] {
        let mid = geometry(total, total as f32 * ROW / 2.0);
        group.bench_with_input(BenchmarkId::from_parameter(total), &mid, |b, g| {
            b.iter(|| black_box(ViewWindow::compute(*g, ROW, 1)))
        });
    }

    group.finish();
}

// ============================================================================
// Scroll event routing
// ============================================================================

fn bench_scroll_event(c: &mut Criterion) {
    let mut group = c.benchmark_group("pull_list/scroll");

    for total in [1_000usize, 100_000] {
        let data: Vec<u32> = (0..total as u32).collect();
        let list = PullList::new(&data, ROW);
        let mut state = PullListState::new(800.0);
        list.mount(&mut state, geometry(total, 0.0));

        // Alternate between two windows so the stability check never
        // short-circuits the work being measured.
        let near = geometry(total, 120.0);
        let far = geometry(total, 720.0);

        group.bench_with_input(BenchmarkId::from_parameter(total), &(), |b, _| {
            b.iter(|| {
                black_box(list.handle_event(&mut state, Event::Scroll, near));
                black_box(list.handle_event(&mut state, Event::Scroll, far));
            })
        });
    }

    group.finish();
}

// ============================================================================
// Visible slice extraction
// ============================================================================

fn bench_visible_items(c: &mut Criterion) {
    let mut group = c.benchmark_group("pull_list/visible_items");

    for total in [1_000usize, 100_000] {
        let data: Vec<u32> = (0..total as u32).collect();
        let list = PullList::new(&data, ROW);
        let mut state = PullListState::new(800.0);
        list.mount(&mut state, geometry(total, total as f32 * ROW / 2.0));

        group.bench_with_input(BenchmarkId::from_parameter(total), &(), |b, _| {
            b.iter(|| black_box(list.visible_items(&state)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_window_compute,
    bench_scroll_event,
    bench_visible_items
);
criterion_main!(benches);
