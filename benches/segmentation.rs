//! Benchmarks for tagging and both threshold searches.

use anofox_trend::core::build;
use anofox_trend::search::{fit, fit_many, Method, ThresholdConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_noisy_wave(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y = x
        .iter()
        .map(|v| 50.0 * (v / 25.0).sin() + 0.2 * v + rng.gen_range(-5.0..5.0))
        .collect();
    (x, y)
}

fn bench_tagging(c: &mut Criterion) {
    let mut group = c.benchmark_group("tagging");

    for size in [128, 512, 2048, 8192].iter() {
        let (x, y) = generate_noisy_wave(*size, 7);
        group.bench_with_input(BenchmarkId::new("build", size), size, |b, _| {
            b.iter(|| build(black_box(&x), black_box(&y)))
        });
    }

    group.finish();
}

fn bench_searches(c: &mut Criterion) {
    let mut group = c.benchmark_group("threshold_search");
    group.sample_size(20);

    for size in [64, 256, 1024].iter() {
        let (x, y) = generate_noisy_wave(*size, 11);
        let series = build(&x, &y).unwrap();
        let config = ThresholdConfig::default();

        group.bench_with_input(BenchmarkId::new("correlation", size), size, |b, _| {
            b.iter(|| fit(black_box(&series), Method::Correlation, &config))
        });

        group.bench_with_input(BenchmarkId::new("distance", size), size, |b, _| {
            b.iter(|| fit(black_box(&series), Method::Distance, &config))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(10);

    let batch: Vec<_> = (0..32)
        .map(|seed| {
            let (x, y) = generate_noisy_wave(256, seed);
            build(&x, &y).unwrap()
        })
        .collect();
    let config = ThresholdConfig::default();

    group.bench_function("fit_many_distance", |b| {
        b.iter(|| fit_many(black_box(&batch), Method::Distance, &config))
    });

    group.finish();
}

criterion_group!(benches, bench_tagging, bench_searches, bench_batch);
criterion_main!(benches);
