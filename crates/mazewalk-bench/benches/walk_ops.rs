//! Criterion micro-benchmarks for walks, batches, and frame building.

use criterion::{criterion_group, criterion_main, Criterion};
use mazewalk_bench::{open_field, reference_config, reference_grid};
use mazewalk_grid::Grid;
use mazewalk_render::{maze_frame, Layout};
use mazewalk_walk::{run_walk, NoopObserver, RandomDirections};
use std::hint::black_box;

/// Benchmark: one seeded walk out of the escape room.
fn bench_walk_escape_room(c: &mut Criterion) {
    let grid = reference_grid().unwrap();
    let mut seed = 0u64;

    c.bench_function("walk_escape_room", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let outcome =
                run_walk(&grid, grid.start(), RandomDirections::seeded(seed)).unwrap();
            black_box(outcome.moves);
        });
    });
}

/// Benchmark: one seeded walk out of a 32x32 open field.
fn bench_walk_open_field_32(c: &mut Criterion) {
    let grid = open_field(32).unwrap();
    let mut seed = 0u64;

    c.bench_function("walk_open_field_32", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let outcome =
                run_walk(&grid, grid.start(), RandomDirections::seeded(seed)).unwrap();
            black_box(outcome.moves);
        });
    });
}

/// Benchmark: a full 100-walk batch in the escape room.
fn bench_batch_escape_room_100(c: &mut Criterion) {
    let grid = reference_grid().unwrap();
    let config = reference_config(7);

    c.bench_function("batch_escape_room_100", |b| {
        b.iter(|| {
            let report = config.run(&grid, NoopObserver).unwrap();
            black_box(report.average_moves());
        });
    });
}

/// Benchmark: build the full redraw for a 100x100 grid.
fn bench_maze_frame_10k(c: &mut Criterion) {
    let grid = Grid::new(100, 100, 0, 0).unwrap();
    let layout = Layout::default();

    c.bench_function("maze_frame_10k", |b| {
        b.iter(|| {
            let frame = maze_frame(&layout, &grid);
            black_box(frame.len());
        });
    });
}

criterion_group!(
    benches,
    bench_walk_escape_room,
    bench_walk_open_field_32,
    bench_batch_escape_room_100,
    bench_maze_frame_10k
);
criterion_main!(benches);
