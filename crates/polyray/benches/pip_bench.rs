//! Criterion benchmarks for the point-in-polygon predicate.
//! Focus sizes: n in {4, 16, 64, 256} vertices, 1024 queries per iteration.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use polyray::geom2::rand::{draw_queries, draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use polyray::geom2::{Point, Polygon};

const QUERIES: usize = 1024;

fn star(n: usize, seed: u64) -> Polygon<f64> {
    let cfg = StarCfg {
        vertex_count: VertexCount::Fixed(n),
        ..StarCfg::default()
    };
    draw_star_polygon(&cfg, ReplayToken { seed, index: 0 })
}

fn to_grid(poly: &Polygon<f64>, scale: f64) -> Polygon<i64> {
    let vs = poly
        .vertices()
        .iter()
        .map(|p| Point::new((p.x * scale).round() as i64, (p.y * scale).round() as i64))
        .collect();
    Polygon::new(vs).expect("non-empty")
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_point");
    group.throughput(Throughput::Elements(QUERIES as u64));
    for &n in &[4usize, 16, 64, 256] {
        let poly = star(n, 43);
        let queries = draw_queries(poly.bounding_box(), QUERIES, ReplayToken { seed: 43, index: 1 });
        group.bench_with_input(BenchmarkId::new("f64", n), &n, |b, _| {
            b.iter(|| queries.iter().filter(|q| poly.contains_point(q)).count())
        });

        let grid = to_grid(&poly, 1e6);
        let grid_queries: Vec<Point<i64>> = queries
            .iter()
            .map(|q| Point::new((q.x * 1e6).round() as i64, (q.y * 1e6).round() as i64))
            .collect();
        group.bench_with_input(BenchmarkId::new("i64", n), &n, |b, _| {
            b.iter(|| grid_queries.iter().filter(|q| grid.contains_point(q)).count())
        });
    }
    group.finish();
}

fn bench_validity(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_valid");
    for &n in &[4usize, 64, 256] {
        let poly = star(n, 44);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| poly.is_valid())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_contains, bench_validity);
criterion_main!(benches);
