use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use cell_planner::analysis::{compare_patterns, run_analysis};
use cell_planner::coverage::resolve_radius;
use cell_planner::io::NetworkParameters;

fn analysis_benchmark(c: &mut Criterion) {
    let params = NetworkParameters::default();

    c.bench_function("resolve_radius", |b| {
        b.iter(|| resolve_radius(black_box(&params), black_box(18)))
    });

    c.bench_function("run_analysis", |b| {
        b.iter(|| run_analysis(black_box(&params)))
    });

    // Sweep over the usual hexagonal cluster sizes
    let clusters = [1, 3, 4, 7, 9, 12, 13, 16, 19, 21];
    c.bench_function("compare_patterns", |b| {
        b.iter(|| compare_patterns(black_box(&params), black_box(&clusters)))
    });
}

criterion_group!(benches, analysis_benchmark);
criterion_main!(benches);
