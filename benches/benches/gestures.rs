// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use loupe::{Config, Surface, Viewer};
use loupe_gesture::{GestureConfig, GestureRecognizer, InputEvent, PointerSample};
use loupe_tiles::TileSink;
use loupe_timing::ManualClock;
use loupe_view::{Dimensions, DimensionsError};

struct Headless;

impl TileSink for Headless {}

impl Surface for Headless {
    fn measure(&mut self) -> Result<Dimensions, DimensionsError> {
        Dimensions::new(Size::new(1280.0, 800.0), Size::new(25_600.0, 16_000.0))
    }
}

/// One drag across the container as `Down`, `moves` x `Move`, `Up`.
fn drag_events(moves: u32) -> Vec<InputEvent> {
    let mut events = Vec::with_capacity(moves as usize + 2);
    events.push(InputEvent::Down(PointerSample::at(Point::new(100.0, 100.0))));
    for i in 1..=moves {
        let t = f64::from(i);
        events.push(InputEvent::Move(PointerSample::at(Point::new(
            100.0 + t * 3.0,
            100.0 + t * 2.0,
        ))));
    }
    events.push(InputEvent::Up);
    events
}

/// Two-finger touches spreading apart.
fn pinch_events(moves: u32) -> Vec<InputEvent> {
    let touches = |spread: f64| {
        PointerSample::touches([
            Point::new(400.0 - spread, 300.0 - spread),
            Point::new(400.0 + spread, 300.0 + spread),
        ])
    };
    let mut events = Vec::with_capacity(moves as usize + 2);
    events.push(InputEvent::Down(touches(20.0)));
    for i in 1..=moves {
        events.push(InputEvent::Move(touches(20.0 + f64::from(i))));
    }
    events.push(InputEvent::Up);
    events
}

fn bench_recognizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("loupe_gesture/recognizer");
    for (name, events) in [("drag", drag_events(256)), ("pinch", pinch_events(256))] {
        group.bench_function(name, |b| {
            let mut recognizer = GestureRecognizer::new(GestureConfig::default());
            b.iter(|| {
                let mut emitted = 0_usize;
                for (now, event) in (0_u64..).zip(&events) {
                    let response = recognizer
                        .handle(event, now)
                        .expect("bench events are well formed");
                    emitted += response.gestures.len();
                }
                black_box(emitted);
            });
        });
    }
    group.finish();
}

fn bench_viewer(c: &mut Criterion) {
    let mut group = c.benchmark_group("loupe/viewer");
    group.sample_size(50);
    let events = drag_events(256);

    group.bench_function("drag_then_settle", |b| {
        b.iter_batched(
            || ManualClock::new(0),
            |clock| {
                let mut viewer = Viewer::new(Config::default(), Headless, &clock)
                    .expect("headless surface measures");
                viewer.engine_mut().zoom_to(8.0);
                for event in &events {
                    clock.advance(4);
                    viewer.handle(event).expect("bench events are well formed");
                }
                clock.advance(300);
                black_box(viewer.poll());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_recognizer, bench_viewer);
criterion_main!(benches);
