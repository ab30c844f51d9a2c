// Copyright 2025 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `pantograph_controller`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use pantograph_controller::{
    ControllerConfig, InputEvent, PinchPivot, ViewportTransformController, YAxis,
};

fn wheel_events(n: usize) -> Vec<InputEvent> {
    (0..n)
        .map(|i| InputEvent::Wheel {
            position: Point::new((i * 37 % 800) as f64, (i * 53 % 600) as f64),
            delta_y: if i % 3 == 0 { 1.0 } else { -1.0 },
        })
        .collect()
}

fn drag_events(n: usize) -> Vec<InputEvent> {
    let mut events = Vec::with_capacity(n + 2);
    events.push(InputEvent::PointerDown {
        position: Point::new(0.0, 0.0),
    });
    events.extend((1..=n).map(|i| InputEvent::PointerMove {
        position: Point::new(i as f64 * 0.5, (i % 17) as f64),
    }));
    events.push(InputEvent::PointerUp);
    events
}

fn pinch_events(n: usize) -> Vec<InputEvent> {
    let mut events = Vec::with_capacity(n + 2);
    events.push(InputEvent::PinchStart {
        p1: Point::new(300.0, 300.0),
        p2: Point::new(400.0, 300.0),
    });
    events.extend((1..=n).map(|i| {
        let spread = 50.0 + (i % 100) as f64;
        InputEvent::PinchMove {
            p1: Point::new(350.0 - spread, 300.0 + (i % 7) as f64),
            p2: Point::new(350.0 + spread, 300.0 + (i % 7) as f64),
        }
    }));
    events.push(InputEvent::PinchEnd);
    events
}

fn run(controller: &mut ViewportTransformController, events: &[InputEvent]) -> u64 {
    for event in events {
        black_box(controller.handle(event));
    }
    controller.revision()
}

fn bench_streams(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/stream");
    for n in [64_usize, 1024] {
        let streams = [
            ("wheel", wheel_events(n)),
            ("drag", drag_events(n)),
            ("pinch", pinch_events(n)),
        ];
        for (name, events) in &streams {
            group.bench_with_input(BenchmarkId::new(*name, n), events, |b, events| {
                b.iter_batched(
                    ViewportTransformController::default,
                    |mut controller| run(&mut controller, events),
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_configs(c: &mut Criterion) {
    let events = pinch_events(256);
    let mut group = c.benchmark_group("controller/pinch_config");
    let configs = [
        ("new_center_down", ControllerConfig::default()),
        (
            "previous_center_up",
            ControllerConfig::default()
                .with_pinch_pivot(PinchPivot::PreviousCenter)
                .with_y_axis(YAxis::Up),
        ),
    ];
    for (name, config) in configs {
        group.bench_function(name, |b| {
            b.iter_batched(
                || ViewportTransformController::new(config).unwrap(),
                |mut controller| run(&mut controller, &events),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_mapping(c: &mut Criterion) {
    let mut controller = ViewportTransformController::default();
    run(&mut controller, &wheel_events(16));
    let points: Vec<Point> = (0..1024)
        .map(|i| Point::new(f64::from(i % 800), f64::from(i % 600)))
        .collect();

    c.bench_function("controller/screen_to_content_1024", |b| {
        b.iter(|| {
            points
                .iter()
                .map(|&p| controller.screen_to_content(p))
                .fold(0.0, |acc, p| acc + p.x + p.y)
        });
    });
}

fn bench_script_decode(c: &mut Criterion) {
    let events = drag_events(256);
    let json = serde_json::to_string(&events).unwrap();
    c.bench_function("controller/decode_and_replay_256", |b| {
        b.iter(|| {
            let events: Vec<InputEvent> = serde_json::from_str(black_box(&json)).unwrap();
            let mut controller = ViewportTransformController::default();
            run(&mut controller, &events)
        });
    });
}

criterion_group!(
    benches,
    bench_streams,
    bench_configs,
    bench_mapping,
    bench_script_decode
);
criterion_main!(benches);
