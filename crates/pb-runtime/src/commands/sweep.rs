//! `sweep`: bounded runs over a producer/consumer grid

use anyhow::{Context, Result};
use pb_05_query_engine::{append_results, run_sweep, SweepConfig, SweepResult};
use tracing::info;

use super::rng_from;
use crate::cli::SweepArgs;
use crate::config::RuntimeConfig;

pub fn execute(args: &SweepArgs, config: &RuntimeConfig) -> Result<Vec<SweepResult>> {
    let sweep = SweepConfig {
        producers: args.producers_min..args.producers_max,
        consumers_min: args.consumers_min,
        consumers_cap: args.consumers_cap,
        bins_per_consumer: args.bins_per_consumer,
        modulus_bits: args.modulus_bits,
        total_jobs: args.total_jobs,
        queue_capacity: args.queue_capacity,
        prime_bits: config.hashing.prime_bits,
    };

    let mut rng = rng_from(args.seed);
    let results = run_sweep(&sweep, &mut rng, |result| {
        info!(
            producers = result.producers,
            consumers = result.consumers,
            "Test complete"
        )
    })
    .context("Sweep failed")?;

    let path = args.results_file.as_ref().unwrap_or(&config.results_file);
    append_results(path, &results)
        .with_context(|| format!("Failed to write results to {}", path.display()))?;
    info!(cells = results.len(), path = %path.display(), "Sweep results written");
    Ok(results)
}
