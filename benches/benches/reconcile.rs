// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use loupe_tiles::{TileConfig, TileGrid, TileRegistry, TileSource};
use loupe_view::{Dimensions, ViewState, VisibleArea};

const VIEWPORT: Size = Size::new(1280.0, 800.0);
const FULL: Size = Size::new(25_600.0, 16_000.0);

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }
}

/// A sequence of `(zoom, area)` pairs for `steps` random pans at zooms up to
/// `max_zoom`.
fn pan_sequence(steps: usize, max_zoom: f64, seed: u64) -> Vec<(f64, VisibleArea)> {
    let dimensions = Dimensions::new(VIEWPORT, FULL).expect("bench dimensions are valid");
    let mut view = ViewState::new(dimensions);
    let mut rng = Lcg::new(seed);
    (0..steps)
        .map(|_| {
            view.zoom_to(1.0 + rng.next_unit() * (max_zoom - 1.0));
            view.pan_to(rng.next_unit(), rng.next_unit());
            (view.transformation().zoom(), view.update_area())
        })
        .collect()
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("loupe_tiles/grid");
    for &zoom in &[1.0_f64, 4.0, 16.0] {
        let sequence = pan_sequence(256, zoom, 0x7115_0000_0000_0001);
        group.bench_function(format!("range_keys(max_zoom={zoom})"), |b| {
            b.iter(|| {
                let mut count = 0_usize;
                for (zoom, area) in &sequence {
                    let grid = TileGrid::new(VIEWPORT, *zoom, 128);
                    count += grid.range(area).keys().count();
                }
                black_box(count);
            });
        });
    }
    group.finish();
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("loupe_tiles/reconcile");
    group.sample_size(50);

    for &capacity in &[64_usize, 128, 512] {
        let sequence = pan_sequence(128, 20.0, 0x7115_0000_0000_0002);

        group.bench_function(format!("random_pans(capacity={capacity})"), |b| {
            b.iter_batched(
                || {
                    let config = TileConfig {
                        capacity,
                        ..TileConfig::default()
                    };
                    TileRegistry::new(config, TileSource::default())
                },
                |mut registry| {
                    for (zoom, area) in &sequence {
                        let report = registry.reconcile(VIEWPORT, *zoom, area, &mut ());
                        black_box(report);
                    }
                    black_box(registry);
                },
                BatchSize::LargeInput,
            );
        });

        // A settled view: every pass finds the same tiles.
        group.bench_function(format!("settled(capacity={capacity})"), |b| {
            let (zoom, area) = sequence[0];
            let config = TileConfig {
                capacity,
                ..TileConfig::default()
            };
            let mut registry = TileRegistry::new(config, TileSource::default());
            registry.reconcile(VIEWPORT, zoom, &area, &mut ());
            b.iter(|| black_box(registry.reconcile(VIEWPORT, zoom, &area, &mut ())));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grid, bench_reconcile);
criterion_main!(benches);
