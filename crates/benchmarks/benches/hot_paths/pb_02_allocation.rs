//! # PB-02 Allocation Benchmarks

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use pb_01_prime_hashing::HashingConfig;
use pb_02_balanced_allocation::AllocationService;

pub fn bulk_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("pb-02/insert_values");
    group.sample_size(10);
    let config = HashingConfig::default();

    for count in [1_000u64, 10_000] {
        let values: Vec<u64> = (0..count).collect();
        group.throughput(Throughput::Elements(count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &values, |b, values| {
            b.iter(|| {
                let mut service =
                    AllocationService::new(&config, 902).expect("valid allocation config");
                let summary = service.insert_values(black_box(values)).expect("placement");
                black_box(summary.occupancy.max)
            });
        });
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bulk_insert(c);
}
