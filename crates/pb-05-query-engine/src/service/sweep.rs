//! Parameter sweep
//!
//! Runs the bounded engine over a grid of producer and consumer counts,
//! each cell on a fresh table of random `(N, A)` pairs.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use rand::Rng;
use tracing::info;

use super::engine::QueryEngine;
use crate::config::SweepConfig;
use crate::domain::random_entries;
use crate::error::EngineError;
use crate::report::SweepResult;

/// Run every cell of the grid. `on_result` sees each result as it lands.
pub fn run_sweep<R, F>(
    config: &SweepConfig,
    rng: &mut R,
    mut on_result: F,
) -> Result<Vec<SweepResult>, EngineError>
where
    R: Rng + ?Sized,
    F: FnMut(&SweepResult),
{
    config.validate()?;
    let mut results = Vec::new();

    for producers in config.producers.clone() {
        for consumers in config.consumer_range(producers) {
            let table_size = consumers * config.bins_per_consumer;
            let entries = random_entries(table_size, config.modulus_bits, rng)?;
            let engine = QueryEngine::new(config.engine_config(producers, consumers))?;
            let report = engine.run(entries)?.report;

            let result = SweepResult {
                producers,
                consumers,
                consumer_time: report.consumer_time,
                producer_time: report.producer_time,
            };
            info!(
                producers,
                consumers,
                completed = report.jobs_completed(),
                consumer_ms = result.consumer_time.as_millis() as u64,
                producer_ms = result.producer_time.as_millis() as u64,
                "Sweep cell complete"
            );
            on_result(&result);
            results.push(result);
        }
        info!(producers, "Sweep row complete");
    }
    Ok(results)
}

/// Append each result's rendering plus a newline to `path`, creating it if
/// needed.
pub fn append_results<T: fmt::Display>(path: &Path, results: &[T]) -> Result<(), EngineError> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for result in results {
        writeln!(file, "{}", result)?;
    }
    file.sync_all()?;
    Ok(())
}
