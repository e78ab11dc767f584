//! Criterion benchmarks for the end-of-gesture hot path
//!
//! Covers: arc-length resampling, RDP simplification, full stroke analysis,
//! and per-frame filtering.

use air_sketch::analysis::{resample, RdpSimplifier, ShapeAnalyzer};
use air_sketch::filter::{FilterConfig, PointFilter};
use air_sketch::Point;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::f64::consts::PI;

fn generate_circle_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let angle = (i as f64 / (n - 1) as f64) * 2.0 * PI;
            Point::new(400.0 + 150.0 * angle.cos(), 300.0 + 150.0 * angle.sin())
        })
        .collect()
}

fn generate_star_points(n: usize) -> Vec<Point> {
    let corners: Vec<Point> = (0..=10)
        .map(|i| {
            let r = if i % 2 == 0 { 150.0 } else { 60.0 };
            let angle = -PI / 2.0 + i as f64 * PI / 5.0;
            Point::new(400.0 + r * angle.cos(), 300.0 + r * angle.sin())
        })
        .collect();
    resample(&corners, n)
}

// ---------------------------------------------------------------------------
// Resampling benchmarks
// ---------------------------------------------------------------------------

fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");

    for count in [50, 200, 1000, 5000] {
        let circle = generate_circle_points(count);
        group.bench_with_input(BenchmarkId::new("circle_to_100", count), &circle, |b, points| {
            b.iter(|| black_box(resample(black_box(points), 100)));
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// RDP simplification benchmarks
// ---------------------------------------------------------------------------

fn bench_rdp_simplify(c: &mut Criterion) {
    let simplifier = RdpSimplifier::with_epsilon(12.0);
    let mut group = c.benchmark_group("rdp_simplify");

    for count in [100, 1000, 5000] {
        let circle = generate_circle_points(count);
        group.bench_with_input(BenchmarkId::new("circle", count), &circle, |b, points| {
            b.iter(|| black_box(simplifier.simplify(black_box(points))));
        });

        let star = generate_star_points(count);
        group.bench_with_input(BenchmarkId::new("star", count), &star, |b, points| {
            b.iter(|| black_box(simplifier.simplify(black_box(points))));
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Full analysis benchmarks
// ---------------------------------------------------------------------------

fn bench_analyze(c: &mut Criterion) {
    let analyzer = ShapeAnalyzer::default();
    let mut group = c.benchmark_group("analyze");

    for count in [60, 300, 1500] {
        let circle = generate_circle_points(count);
        group.bench_with_input(BenchmarkId::new("circle", count), &circle, |b, points| {
            b.iter(|| black_box(analyzer.analyze(black_box(points))));
        });

        let star = generate_star_points(count);
        group.bench_with_input(BenchmarkId::new("star", count), &star, |b, points| {
            b.iter(|| black_box(analyzer.analyze(black_box(points))));
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Per-frame filter benchmark
// ---------------------------------------------------------------------------

fn bench_point_filter(c: &mut Criterion) {
    let samples = generate_circle_points(1000);

    c.bench_function("point_filter_1000_frames", |b| {
        b.iter(|| {
            let mut filter = PointFilter::new(FilterConfig::default());
            for p in &samples {
                black_box(filter.filter(*p));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_resample,
    bench_rdp_simplify,
    bench_analyze,
    bench_point_filter
);
criterion_main!(benches);
