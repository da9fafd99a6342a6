//! Criterion benchmarks for tabulated_core.
//!
//! Measures evaluation, table addition and linearisation across table
//! sizes to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tabulated_core::math::interpolators::InterpolationLaw;
use tabulated_core::table::InterpolationTable;

/// Generate a logarithmically spaced grid with a smooth positive function.
fn generate_data(n: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..n)
        .map(|i| 1e-5 * 10f64.powf(12.0 * i as f64 / (n - 1) as f64))
        .collect();
    let ys: Vec<f64> = xs.iter().map(|&x| 1.0 + 1.0 / x.sqrt()).collect();
    (xs, ys)
}

/// Benchmark pointwise evaluation.
fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for size in [100, 1000, 10000] {
        let (xs, ys) = generate_data(size);
        let table = InterpolationTable::with_law(xs, ys, InterpolationLaw::LogLog).unwrap();

        group.bench_with_input(BenchmarkId::new("lookup", size), &table, |b, table| {
            b.iter(|| table.evaluate(black_box(1.0)));
        });

        group.bench_with_input(BenchmarkId::new("lookup_100", size), &table, |b, table| {
            let test_xs: Vec<f64> = (0..100).map(|i| 1e-5 * 10f64.powf(i as f64 / 8.25)).collect();
            b.iter(|| table.evaluate_many(black_box(&test_xs)));
        });
    }

    group.finish();
}

/// Benchmark the sum of two linearised tables on interleaved grids.
fn bench_add_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_tables");

    for size in [100, 1000, 10000] {
        let (xs, ys) = generate_data(size);
        let shifted: Vec<f64> = xs.iter().map(|x| x * 1.5).collect();
        let a =
            InterpolationTable::with_law(xs, ys.clone(), InterpolationLaw::LinearLinear).unwrap();
        let b = InterpolationTable::with_law(shifted, ys, InterpolationLaw::LinearLinear).unwrap();

        group.bench_with_input(BenchmarkId::new("interleaved", size), &(a, b), |bench, (a, b)| {
            bench.iter(|| a.add_table(black_box(b)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark linearisation of a log-log table.
fn bench_linearise(c: &mut Criterion) {
    let mut group = c.benchmark_group("linearise");

    for size in [10, 100, 1000] {
        let (xs, ys) = generate_data(size);
        let table = InterpolationTable::with_law(xs, ys, InterpolationLaw::LogLog).unwrap();

        group.bench_with_input(BenchmarkId::new("log_log", size), &table, |b, table| {
            b.iter(|| table.linearise().unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_add_tables, bench_linearise);
criterion_main!(benches);
