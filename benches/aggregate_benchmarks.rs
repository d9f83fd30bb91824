//! Benchmarks comparing the hand-written sum against the generalized aggregate
//! Verifies that passing the combining step as a closure costs nothing measurable

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fnkit::aggregate::{manual_sum, max, sum};
use std::hint::black_box;

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");

    for size in [10, 100, 1000, 10000] {
        let numbers: Vec<i32> = (0..size).collect();

        // Baseline: explicit loop
        group.bench_with_input(BenchmarkId::new("manual", size), &numbers, |b, numbers| {
            b.iter(|| black_box(manual_sum(black_box(numbers))))
        });

        // Generalized: aggregate with an addition closure
        group.bench_with_input(BenchmarkId::new("aggregate", size), &numbers, |b, numbers| {
            b.iter(|| black_box(sum(black_box(numbers))))
        });
    }

    group.finish();
}

fn bench_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("max");

    for size in [10, 1000] {
        let numbers: Vec<i32> = (0..size).map(|n| (n * 7919) % 1013).collect();

        group.bench_with_input(BenchmarkId::new("aggregate", size), &numbers, |b, numbers| {
            b.iter(|| black_box(max(black_box(numbers))))
        });

        group.bench_with_input(BenchmarkId::new("iter_max", size), &numbers, |b, numbers| {
            b.iter(|| black_box(black_box(numbers).iter().max().copied()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sum, bench_max);
criterion_main!(benches);
