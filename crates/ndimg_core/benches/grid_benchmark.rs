//! Benchmarks for matrix linearization and grid scaling.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndimg_core::{DenseGrid, MatrixBuffer, Plottable, RenderConfig, SparseGrid};

fn bench_from_rows(c: &mut Criterion) {
    let rows: Vec<Vec<f32>> = (0..256)
        .map(|r| (0..256).map(|col| (r * col) as f32).collect())
        .collect();

    c.bench_function("matrix_from_rows_256x256", |b| {
        b.iter(|| MatrixBuffer::from_rows(black_box(&rows)))
    });
}

fn bench_scale(c: &mut Criterion) {
    let config = RenderConfig { scaling_factor: 10, ..RenderConfig::default() };

    let mut dense = DenseGrid::from_elem(100, 100, 0_i32).unwrap();
    let mut sparse = SparseGrid::empty(100, 100).unwrap();
    for i in 0..100 {
        dense[[i, (i * 7) % 100]] = i as i32 - 50;
        sparse[[i, (i * 7) % 100]] = Some(i as i32 - 50);
    }

    c.bench_function("dense_scale_100x100_by_10", |b| {
        b.iter(|| black_box(&dense).scaled(&config))
    });
    c.bench_function("sparse_scale_100x100_by_10", |b| {
        b.iter(|| black_box(&sparse).scaled(&config))
    });
}

fn bench_render(c: &mut Criterion) {
    let config = RenderConfig { scaling_factor: 5, ..RenderConfig::default() };
    let mut grid = SparseGrid::empty(100, 100).unwrap();
    for i in 0..100 {
        grid[[i, 99 - i]] = Some(i as f32);
    }
    let scaled = grid.scaled(&config).unwrap();

    c.bench_function("render_500x500", |b| b.iter(|| black_box(&scaled).render(&config)));
}

criterion_group!(benches, bench_from_rows, bench_scale, bench_render);
criterion_main!(benches);
