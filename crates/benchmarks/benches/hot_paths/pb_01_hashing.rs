//! # PB-01 Hashing Benchmarks
//!
//! Hash-to-prime cost grows with the expected number of rejected candidates
//! (about `ln(2^n) / 2`) times one primality test.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use pb_01_prime_hashing::{BinHasherPair, PrimeHasher, OFFLINE_ROUNDS, SERVING_ROUNDS};
use pb_benchmarks::utils::random_preimages;

pub fn prime_hash_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("pb-01/prime_hash");
    let preimages = random_preimages(64);

    for bits in [32usize, 86, 128, 256] {
        let hasher = PrimeHasher::new(bits)
            .expect("valid bit length")
            .with_rounds(OFFLINE_ROUNDS);
        group.bench_with_input(BenchmarkId::new("offline", bits), &bits, |b, _| {
            let mut i = 0;
            b.iter(|| {
                i = (i + 1) % preimages.len();
                black_box(hasher.hash_to_prime(black_box(&preimages[i])))
            });
        });
    }

    // Serving confidence: what producers pay per job
    let hasher = PrimeHasher::new(86)
        .expect("valid bit length")
        .with_rounds(SERVING_ROUNDS);
    group.bench_function("serving_86", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % preimages.len();
            black_box(hasher.hash_to_prime(black_box(&preimages[i])))
        });
    });

    group.finish();
}

pub fn bin_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("pb-01/bin_hash");
    let pair = BinHasherPair::new(80).expect("valid bit length");
    let primes = pb_benchmarks::utils::bucket_primes(1_000, 86);

    group.throughput(Throughput::Elements(primes.len() as u64));
    group.bench_function("candidates_1000", |b| {
        b.iter(|| {
            for prime in &primes {
                black_box(pair.candidates(black_box(prime), 902).expect("non-empty table"));
            }
        });
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    prime_hash_by_size(c);
    bin_hash(c);
}
