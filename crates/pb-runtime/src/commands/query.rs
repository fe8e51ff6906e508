//! `query` and `soak`: query-engine runs

use std::time::Duration;

use anyhow::{Context, Result};
use pb_05_query_engine::{
    append_results, entries_from_table, random_entries, EngineConfig, EngineConfigBuilder,
    EngineReport, QueryEngine, ShardEntry, SoakSummary,
};
use shared_types::TableSide;
use tracing::info;

use super::{open_repository, rng_from};
use crate::cli::{EngineArgs, QueryArgs, SoakArgs};
use crate::config::RuntimeConfig;

const BINS_PER_CONSUMER: usize = 8;

pub fn execute_bounded(args: &QueryArgs, config: &RuntimeConfig) -> Result<EngineReport> {
    let engine_config = engine_builder(&args.engine, config)
        .bounded(args.jobs)
        .build()
        .context("Invalid query configuration")?;
    run_engine(&args.engine, engine_config, config).map(|run| run.report)
}

pub fn execute_soak(args: &SoakArgs, config: &RuntimeConfig) -> Result<EngineReport> {
    let engine_config = engine_builder(&args.engine, config)
        .soak(Duration::from_secs(args.duration_secs))
        .grace_period(Duration::from_secs(args.grace_secs))
        .poll_interval(Duration::from_millis(args.poll_ms))
        .build()
        .context("Invalid soak configuration")?;
    let run = run_engine(&args.engine, engine_config, config)?;

    let summary = SoakSummary {
        cpus: num_cpus::get(),
        table_size: run.table_size,
        modulus_bits: run.modulus_bits,
        report: run.report,
    };
    let path = args.results_file.as_ref().unwrap_or(&config.results_file);
    append_results(path, std::slice::from_ref(&summary))
        .with_context(|| format!("Failed to write results to {}", path.display()))?;
    info!(path = %path.display(), "Soak results written");
    Ok(summary.report)
}

/// Engine report plus the table it ran over.
struct EngineRun {
    report: EngineReport,
    table_size: usize,
    modulus_bits: usize,
}

fn engine_builder(args: &EngineArgs, config: &RuntimeConfig) -> EngineConfigBuilder {
    let builder = EngineConfigBuilder::new()
        .producers(args.producers)
        .consumers(args.consumers)
        .queue_capacity(args.queue_capacity)
        .prime_bits(config.hashing.prime_bits);
    match args.seed {
        Some(seed) => builder.rng_seed(seed),
        None => builder,
    }
}

/// Serving pairs from a stored table, or random ones.
fn load_entries(args: &EngineArgs, config: &RuntimeConfig) -> Result<Vec<ShardEntry>> {
    match args.from_table {
        Some(side) => {
            let side = TableSide::from(side);
            let table = open_repository(config)?
                .load_table(side)
                .with_context(|| format!("Failed to load {} table", side))?;
            entries_from_table(&table).context("Stored table has an unusable modulus")
        }
        None => {
            let table_size = args
                .table_size
                .unwrap_or(args.consumers * BINS_PER_CONSUMER);
            let mut rng = rng_from(args.seed);
            random_entries(table_size, args.modulus_bits, &mut rng)
                .context("Failed to draw random table")
        }
    }
}

fn run_engine(
    args: &EngineArgs,
    engine_config: EngineConfig,
    config: &RuntimeConfig,
) -> Result<EngineRun> {
    let entries = load_entries(args, config)?;
    let table_size = entries.len();
    let modulus_bits = entries
        .iter()
        .map(|entry| entry.modulus().bits())
        .max()
        .unwrap_or(0);
    let engine = QueryEngine::new(engine_config).context("Invalid engine configuration")?;
    let report = engine.run(entries).context("Query engine failed")?.report;

    for producer in &report.producers {
        info!(
            producer = producer.id,
            iterations = producer.iterations,
            terminated = producer.terminated,
            "Producer completed"
        );
    }
    for consumer in &report.consumers {
        info!(
            consumer = consumer.id,
            completed = consumer.completed,
            abandoned = consumer.abandoned,
            "Consumer completed"
        );
    }
    Ok(EngineRun {
        report,
        table_size,
        modulus_bits,
    })
}
