//! Criterion micro-benchmarks for grid and distance field operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use horde_bench::stress_profile;
use horde_core::{Cell, Connectivity, EntityKind};
use horde_engine::Apocalypse;
use horde_field::build_distance_field;
use horde_space::Grid;

/// Benchmark: eight-way neighbours() on all 10K cells of an open 100x100 grid.
fn bench_neighbours_eight_10k(c: &mut Criterion) {
    let grid = Grid::new(100, 100).unwrap();

    c.bench_function("neighbours_eight_10k", |b| {
        b.iter(|| {
            for cell in grid.cells() {
                black_box(grid.neighbours(cell, Connectivity::Eight));
            }
        });
    });
}

/// Benchmark: single-source field over an open 300x400 grid.
fn bench_field_single_source_120k(c: &mut Criterion) {
    let grid = Grid::new(300, 400).unwrap();

    c.bench_function("field_single_source_120k", |b| {
        b.iter(|| black_box(build_distance_field(&grid, [Cell::new(0, 0)]).unwrap()));
    });
}

/// Benchmark: both population fields of the stress profile.
fn bench_fields_stress(c: &mut Criterion) {
    let world = Apocalypse::new(stress_profile(42)).unwrap();

    c.bench_function("fields_stress_profile", |b| {
        b.iter(|| {
            black_box(world.compute_distance_field(EntityKind::Zombie).unwrap());
            black_box(world.compute_distance_field(EntityKind::Human).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_neighbours_eight_10k,
    bench_field_single_source_120k,
    bench_fields_stress
);
criterion_main!(benches);
