//! `build`: signature set to persisted tables

use std::time::{Duration, Instant};

use anyhow::{ensure, Context, Result};
use pb_01_prime_hashing::HashingConfig;
use pb_02_balanced_allocation::{AllocationService, AllocationSummary};
use pb_03_bin_modulus::{BuildConfig, ModulusBuilder, PadPrimeList};
use rand::Rng;
use tracing::info;

use super::{open_repository, rng_from};
use crate::cli::BuildArgs;
use crate::config::RuntimeConfig;

#[derive(Debug, Clone)]
pub struct BuildReport {
    pub allocation: AllocationSummary,
    pub build_elapsed: Duration,
    pub buckets_per_side: usize,
    pub members: usize,
}

pub fn execute(args: &BuildArgs, config: &RuntimeConfig) -> Result<BuildReport> {
    ensure!(args.value_range > 0, "value_range must be > 0");
    let table_size = args.table_size.unwrap_or(config.table_size);
    let hashing = HashingConfig {
        prime_bits: args.prime_bits.unwrap_or(config.hashing.prime_bits),
        ..config.hashing.clone()
    };

    let mut repository = open_repository(config)?;
    let pads = repository
        .load_pad_primes()
        .context("No pad-prime list found; run `prime-bins pads` first")?;

    let mut rng = rng_from(args.seed);
    let values: Vec<u64> = (0..args.sig_set_size)
        .map(|_| rng.gen_range(0..args.value_range))
        .collect();

    let mut allocation =
        AllocationService::new(&hashing, table_size).context("Invalid table configuration")?;
    let summary = allocation
        .insert_values(&values)
        .context("Failed to place signature set")?;

    let build_config = BuildConfig {
        parallel: !args.sequential,
        verify: args.verify || config.build.verify,
        rng_seed: args.seed.or(config.build.rng_seed),
        ..config.build.clone()
    };
    let builder = ModulusBuilder::new(build_config, PadPrimeList::new(pads))
        .context("Invalid build configuration")?;

    let start = Instant::now();
    let (left, right) = builder
        .build_tables(allocation.into_tables())
        .context("Failed to build tables")?;
    let build_elapsed = start.elapsed();

    repository.save_table(&left).context("Failed to store left table")?;
    repository.save_table(&right).context("Failed to store right table")?;

    let report = BuildReport {
        allocation: summary,
        build_elapsed,
        buckets_per_side: table_size,
        members: left.member_count() + right.member_count(),
    };
    info!(
        signatures = report.allocation.inserted,
        table_size,
        hash_ms = report.allocation.elapsed.as_millis() as u64,
        build_ms = report.build_elapsed.as_millis() as u64,
        max_bucket = report.allocation.occupancy.max,
        min_bucket = report.allocation.occupancy.min,
        "Tables built and stored"
    );
    Ok(report)
}
