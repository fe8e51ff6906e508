//! # PB-03 Bucket Build Benchmarks
//!
//! Bucket sizes around the mean load of the default table (10,000 values
//! over 2 x 902 buckets is about 5.5 per bucket) and a heavy tail.

use criterion::{black_box, BenchmarkId, Criterion};
use pb_03_bin_modulus::{build_bucket, BuildConfig};
use pb_benchmarks::utils::{bucket_primes, pad_primes, seeded_rng};

pub fn single_bucket(c: &mut Criterion) {
    let mut group = c.benchmark_group("pb-03/build_bucket");
    group.sample_size(20);
    let pads = pad_primes(5_000, 32);
    let config = BuildConfig::default();

    for size in [2usize, 6, 12] {
        let primes = bucket_primes(size, 86);
        group.bench_with_input(BenchmarkId::new("primes", size), &primes, |b, primes| {
            let mut rng = seeded_rng();
            b.iter(|| {
                let built = build_bucket(black_box(primes), &pads, &config, &mut rng)
                    .expect("bucket build");
                black_box(built.generator_attempts)
            });
        });
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    single_bucket(c);
}
