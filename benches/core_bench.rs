use chem_grid_editor::{generate, pick_point, CircleShape, ConnectionSession, GridModel, PointId};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_grid_generate(c: &mut Criterion) {
    c.bench_function("grid_generate_10x25", |b| {
        b.iter(|| generate(black_box(10), black_box(25), 96, 20, 150))
    });

    c.bench_function("grid_generate_100x100", |b| {
        b.iter(|| generate(black_box(100), black_box(100), 12, 4, 4))
    });
}

fn bench_pick_point(c: &mut Criterion) {
    let grid = GridModel::default();
    let Some(last) = grid.point(PointId(grid.len() - 1)) else {
        return;
    };
    let hit = grid.center(&last);
    let miss = last.position;

    c.bench_function("pick_point_hit_last", |b| {
        b.iter(|| pick_point(&grid, black_box(hit), &CircleShape))
    });

    c.bench_function("pick_point_miss", |b| {
        b.iter(|| pick_point(&grid, black_box(miss), &CircleShape))
    });
}

fn bench_session_chain(c: &mut Criterion) {
    let grid = GridModel::default();

    c.bench_function("session_chain_all_points_then_undo", |b| {
        b.iter(|| {
            let mut session = ConnectionSession::new();
            for &point in grid.points() {
                session.select_point(point);
            }
            while session.undo().is_some() {}
            black_box(session.segment_count())
        })
    });
}

criterion_group!(
    benches,
    bench_grid_generate,
    bench_pick_point,
    bench_session_chain
);
criterion_main!(benches);
