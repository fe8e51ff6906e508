//! # PB-04 Signature Checker Benchmarks

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use pb_03_bin_modulus::{build_bucket, BuildConfig};
use pb_04_signature_checker::{bucket_hits, cofactor_exponent};
use pb_benchmarks::utils::{bucket_primes, pad_primes, seeded_rng};

pub fn bucket_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("pb-04/bucket_hits");
    let pads = pad_primes(5_000, 32);

    for size in [2usize, 6, 12] {
        let built = build_bucket(
            &bucket_primes(size, 86),
            &pads,
            &BuildConfig::default(),
            &mut seeded_rng(),
        )
        .expect("bucket build");
        group.throughput(Throughput::Elements(built.factors.member_count() as u64));
        group.bench_with_input(BenchmarkId::new("members", size), &built, |b, built| {
            b.iter(|| black_box(bucket_hits(black_box(&built.record), &built.factors)));
        });
    }

    group.finish();
}

pub fn exponent_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("pb-04/cofactor_exponent");
    let set = bucket_primes(8, 86);

    group.bench_function("set_of_8", |b| {
        b.iter(|| black_box(cofactor_exponent(black_box(&set), &set[3])));
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bucket_scan(c);
    exponent_product(c);
}
