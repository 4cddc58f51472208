//! Downsampling benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (10K to 1M points) for both methods
//! - Threshold sweeps at a fixed input size
//! - Real-world shapes (financial walks, sensor bursts)
//! - Pathological cases (flat series, single spike)
//!
//! Run with `cargo bench -p lttb-benchmarks`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lttb::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Sinusoid with Gaussian noise, one point per millisecond.
fn generate_sine_data(size: usize, seed: u64) -> Vec<Point<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.2).unwrap();

    (0..size)
        .map(|i| {
            let t = i as f64 * 10.0 / size as f64;
            Point::new(i as u64, t.sin() + noise_dist.sample(&mut rng))
        })
        .collect()
}

/// Geometric random walk sampled once per second from an epoch base.
fn generate_financial_data(size: usize, seed: u64) -> Vec<Point<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let returns_dist = Normal::new(0.0005, 0.02).unwrap();
    let base = 1_700_000_000_000u64;

    let mut price = 100.0;
    (0..size)
        .map(|i| {
            let point = Point::new(base + i as u64 * 1_000, price);
            price *= 1.0 + returns_dist.sample(&mut rng);
            point
        })
        .collect()
}

/// Mostly quiet sensor with short high-variance bursts and jittered sampling.
fn generate_burst_data(size: usize, seed: u64) -> Vec<Point<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let quiet = Normal::new(0.0, 0.01).unwrap();
    let burst = Normal::new(0.0, 5.0).unwrap();
    let jitter = Uniform::new(1u64, 20).unwrap();

    let mut t = 0u64;
    (0..size)
        .map(|i| {
            t += jitter.sample(&mut rng);
            let in_burst = (i / 1_000) % 10 == 7;
            let v = if in_burst {
                burst.sample(&mut rng)
            } else {
                quiet.sample(&mut rng)
            };
            Point::new(t, v)
        })
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(20);

    for size in [10_000, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(size as u64));
        let data = generate_sine_data(size, 42);

        group.bench_with_input(BenchmarkId::new("lttb", size), &size, |b, _| {
            b.iter(|| downsample_fixed(black_box(&data), 1_000).unwrap())
        });

        // LTD runs up to `n * 10 / threshold` rounds, each scoring every bucket.
        if size <= 100_000 {
            group.bench_with_input(BenchmarkId::new("ltd", size), &size, |b, _| {
                b.iter(|| downsample_adaptive(black_box(&data), 1_000).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("threshold");
    group.sample_size(20);

    let data = generate_sine_data(50_000, 42);
    for threshold in [100, 500, 2_500, 10_000] {
        for method in [Lttb, Ltd] {
            let downsampler = Downsample::new()
                .threshold(threshold)
                .method(method)
                .build()
                .unwrap();

            group.bench_with_input(
                BenchmarkId::new(method.name(), threshold),
                &threshold,
                |b, _| b.iter(|| downsampler.run(black_box(&data)).unwrap()),
            );
        }
    }
    group.finish();
}

fn bench_financial(c: &mut Criterion) {
    let mut group = c.benchmark_group("financial");
    group.sample_size(20);

    let data = generate_financial_data(100_000, 7);
    group.bench_function("lttb", |b| {
        b.iter(|| downsample_fixed(black_box(&data), 800).unwrap())
    });
    group.bench_function("ltd", |b| {
        b.iter(|| downsample_adaptive(black_box(&data), 800).unwrap())
    });
    group.finish();
}

fn bench_bursts(c: &mut Criterion) {
    let mut group = c.benchmark_group("bursts");
    group.sample_size(20);

    let data = generate_burst_data(100_000, 11);
    group.bench_function("lttb", |b| {
        b.iter(|| downsample_fixed(black_box(&data), 1_000).unwrap())
    });
    group.bench_function("ltd", |b| {
        b.iter(|| downsample_adaptive(black_box(&data), 1_000).unwrap())
    });
    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20);

    // Flat data: refinement stops on the first round.
    let flat: Vec<Point<f64>> = (0..100_000u64).map(|t| Point::new(t, 1.0)).collect();
    group.bench_function("flat_ltd", |b| {
        b.iter(|| downsample_adaptive(black_box(&flat), 1_000).unwrap())
    });

    // One spike in otherwise flat data.
    let mut spike = flat.clone();
    spike[50_000].value = 1_000.0;
    group.bench_function("spike_ltd", |b| {
        b.iter(|| downsample_adaptive(black_box(&spike), 1_000).unwrap())
    });

    // Threshold barely below the input size.
    let dense = generate_sine_data(10_000, 3);
    group.bench_function("near_identity_lttb", |b| {
        b.iter(|| downsample_fixed(black_box(&dense), 9_999).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_threshold,
    bench_financial,
    bench_bursts,
    bench_pathological,
);

criterion_main!(benches);
