//! # PB-05 Query Benchmarks
//!
//! A consumer's work per job is one modular exponentiation with an 86-bit
//! exponent; the modulus size dominates.

use criterion::{black_box, BenchmarkId, Criterion};
use pb_05_query_engine::{random_entries, EngineConfig, Job, JobFactory, ShardLayout};
use pb_benchmarks::utils::seeded_rng;

pub fn apply_job(c: &mut Criterion) {
    let mut group = c.benchmark_group("pb-05/apply_job");
    let config = EngineConfig::default();

    for bits in [1024usize, 2048, 3072] {
        let mut rng = seeded_rng();
        let entries = random_entries(8, bits, &mut rng).expect("random table");
        let layout = ShardLayout::new(entries.len(), 1).expect("layout");
        let factory = JobFactory::new(&config, layout).expect("job factory");
        let mut shards = layout.partition(entries).expect("partition");
        let jobs: Vec<Job> = (0..16)
            .flat_map(|_| factory.next_jobs(&mut rng).expect("jobs"))
            .map(|routed| routed.job)
            .collect();

        group.bench_with_input(BenchmarkId::new("modulus_bits", bits), &jobs, |b, jobs| {
            let mut i = 0;
            b.iter(|| {
                i = (i + 1) % jobs.len();
                shards[0].apply(black_box(&jobs[i])).expect("job in range");
            });
        });
    }

    group.finish();
}

pub fn job_factory(c: &mut Criterion) {
    let mut group = c.benchmark_group("pb-05/next_jobs");
    let config = EngineConfig::default();
    let factory =
        JobFactory::new(&config, ShardLayout::new(902, 8).expect("layout")).expect("job factory");
    let mut rng = seeded_rng();

    group.bench_function("serving_86", |b| {
        b.iter(|| black_box(factory.next_jobs(&mut rng).expect("jobs")));
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    apply_job(c);
    job_factory(c);
}
