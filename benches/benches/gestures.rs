// Copyright 2025 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `pantograph_gesture` and `pantograph_view` primitives.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use pantograph_gesture::pinch::{PinchState, PinchUpdate};
use pantograph_gesture::touches::TouchTracker;
use pantograph_view::{ScaleLimits, ViewTransform};

fn bench_zoom_about(c: &mut Criterion) {
    let limits = ScaleLimits::default();
    c.bench_function("view/zoomed_about_chain_256", |b| {
        b.iter(|| {
            let mut t = ViewTransform::IDENTITY;
            for i in 0..256_u32 {
                let anchor = Point::new(f64::from(i % 800), f64::from(i % 600));
                let factor = if i % 2 == 0 { 1.1 } else { 1.0 / 1.05 };
                t = t.zoomed_about(anchor, factor, &limits).unwrap_or(t);
            }
            black_box(t)
        });
    });
}

fn bench_pinch_state(c: &mut Criterion) {
    c.bench_function("gesture/pinch_update_256", |b| {
        b.iter(|| {
            let mut pinch = PinchState::default();
            let mut factor = 1.0;
            pinch.start(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
            for i in 0..256_u32 {
                let x = 100.0 + f64::from(i % 50);
                if let PinchUpdate::Moved(step) = pinch.update(Point::new(0.0, 0.0), Point::new(x, 0.0)) {
                    factor *= step.factor;
                }
            }
            black_box(factor)
        });
    });
}

fn bench_touch_tracker(c: &mut Criterion) {
    c.bench_function("gesture/touch_tracker_two_finger_256", |b| {
        b.iter(|| {
            let mut touches = TouchTracker::new();
            touches.down(1_u64, Point::new(0.0, 0.0));
            touches.down(2, Point::new(10.0, 0.0));
            for i in 0..256_u32 {
                let id = u64::from(i % 2) + 1;
                black_box(touches.moved(id, Point::new(f64::from(i), 0.0)));
            }
            touches.up(2);
            touches.up(1)
        });
    });
}

criterion_group!(benches, bench_zoom_about, bench_pinch_state, bench_touch_tracker);
criterion_main!(benches);
