//! Benchmarks for the gap and scenario calculators.
//!
//! Run with: cargo bench -p alm-analytics
//! Compare with: cargo bench -p alm-analytics --features parallel

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use alm_analytics::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_sheet(size: usize) -> Vec<BalanceSheetInstrument> {
    let products = [
        "Fixed Mortgage",
        "HELOC",
        "Commercial Loan",
        "Core Checking",
        "Savings Account",
        "Time Deposits",
    ];
    (0..size)
        .map(|i| {
            let builder = BalanceSheetInstrument::builder()
                .product(products[i % products.len()])
                .amount(Decimal::from(100_000 + (i as u64 % 50) * 25_000))
                .rate(0.5 + (i % 12) as f64 * 0.5)
                .duration(0.5 + (i % 10) as f64)
                .maturity_months(((i * 7) % 120) as f64);
            let builder = if i % products.len() < 3 {
                builder.asset()
            } else {
                builder.liability()
            };
            builder.build().expect("valid instrument")
        })
        .collect()
}

const SIZES: [usize; 4] = [10, 100, 1_000, 10_000];

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_liquidity_gap(c: &mut Criterion) {
    let config = AlmConfig::default();
    let mut group = c.benchmark_group("liquidity_gap");

    for size in SIZES {
        let sheet = create_sheet(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &sheet, |b, sheet| {
            b.iter(|| liquidity_gap(black_box(sheet), &config.buckets, &config));
        });
    }
    group.finish();
}

fn bench_rate_scenarios(c: &mut Criterion) {
    let config = AlmConfig::default();
    let table = RateSensitivityTable::standard();
    let scenarios = standard_scenarios::all();
    let mut group = c.benchmark_group("rate_scenarios");
    group.sample_size(50);

    for size in SIZES {
        let sheet = create_sheet(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &sheet, |b, sheet| {
            b.iter(|| run_rate_scenarios(black_box(sheet), &table, &scenarios, &config));
        });
    }
    group.finish();
}

fn bench_sequential_vs_parallel(c: &mut Criterion) {
    let sheet = create_sheet(5_000);
    let parallel = AlmConfig::default();
    let sequential = AlmConfig::sequential();
    let mut group = c.benchmark_group("ftp_comparison_5000");
    group.throughput(Throughput::Elements(5_000));

    group.bench_function("sequential", |b| {
        b.iter(|| ftp_analysis(black_box(&sheet), &sequential.ftp_curve, &sequential));
    });
    group.bench_function("parallel", |b| {
        b.iter(|| ftp_analysis(black_box(&sheet), &parallel.ftp_curve, &parallel));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_liquidity_gap,
    bench_rate_scenarios,
    bench_sequential_vs_parallel
);
criterion_main!(benches);
