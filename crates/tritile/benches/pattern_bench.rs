//! Criterion microbenches for grid generation and point layout.
//!
//! - grid: randomized shape-sequence generation at a few resolutions.
//! - layout: deterministic point placement on a fixed grid.
//! - pattern: one full generate pass.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use tritile::grid::generate_grid;
use tritile::layout::layout_points;
use tritile::{generate, PatternParams};

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    for &resolution in &[10u32, 40, 160] {
        let params = PatternParams {
            resolution,
            ..PatternParams::default()
        };
        group.bench_function(BenchmarkId::new("generate_grid", resolution), |b| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| generate_grid(params.rows(), params.columns(), &mut rng).unwrap())
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &resolution in &[10u32, 40, 160] {
        let params = PatternParams {
            resolution,
            ..PatternParams::default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        let grid = generate_grid(params.rows(), params.columns(), &mut rng).unwrap();
        group.bench_function(BenchmarkId::new("layout_points", resolution), |b| {
            b.iter(|| layout_points(&grid, params.width, params.height).unwrap())
        });
    }
    group.finish();
}

fn bench_full_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern");
    let params = PatternParams {
        resolution: 40,
        ..PatternParams::default()
    };
    group.bench_function(BenchmarkId::new("generate", 40), |b| {
        b.iter_batched(
            || StdRng::seed_from_u64(1234),
            |mut rng| generate(&params, &mut rng).unwrap(),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_grid, bench_layout, bench_full_pass);
criterion_main!(benches);
