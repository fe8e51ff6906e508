//! Modulus builder service
//!
//! Converts every bucket of a `HashTable` into a `BuiltTable`. Buckets are
//! independent, so they are built on the rayon pool; each bucket gets its
//! own RNG so a seeded build is reproducible regardless of thread count.

use std::time::{Duration, Instant};

use pb_02_balanced_allocation::{BalancedTables, Bucket, HashTable};
use pb_telemetry::{time_histogram, BUCKETS_BUILT, BUCKET_BUILD_DURATION, GENERATOR_DRAWS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use shared_types::{BuiltTable, TableSide};
use tracing::{debug, error, info};

use crate::config::BuildConfig;
use crate::domain::{build_bucket, check_bucket_invariants, BuiltBucket, PadPrimeList};
use crate::error::BuildError;

/// Timing and effort of one table build.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub side: TableSide,
    pub buckets: usize,
    pub generator_draws: u64,
    pub elapsed: Duration,
}

/// Builds `(g, N)` tables from allocated buckets.
pub struct ModulusBuilder {
    config: BuildConfig,
    pads: PadPrimeList,
}

impl ModulusBuilder {
    pub fn new(config: BuildConfig, pads: PadPrimeList) -> Result<Self, BuildError> {
        config.validate()?;
        Ok(Self { config, pads })
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn pads(&self) -> &PadPrimeList {
        &self.pads
    }

    /// Build both sides. The first failing bucket aborts the whole build.
    pub fn build_tables(
        &self,
        tables: BalancedTables,
    ) -> Result<(BuiltTable, BuiltTable), BuildError> {
        let start = Instant::now();
        let (left, right) = tables.into_tables();

        let (left, left_summary) = self.build_table(left)?;
        let (right, right_summary) = self.build_table(right)?;

        info!(
            buckets = left_summary.buckets + right_summary.buckets,
            generator_draws = left_summary.generator_draws + right_summary.generator_draws,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Found N and g for every bucket"
        );
        Ok((left, right))
    }

    /// Build one side.
    pub fn build_table(&self, table: HashTable) -> Result<(BuiltTable, BuildSummary), BuildError> {
        let start = Instant::now();
        let side = table.side();
        let buckets = table.into_buckets();
        debug!(%side, buckets = buckets.len(), parallel = self.config.parallel, "Building table");

        let built: Vec<BuiltBucket> = if self.config.parallel {
            buckets
                .par_iter()
                .enumerate()
                .map(|(index, bucket)| self.build_one(side, index, bucket))
                .collect::<Result<_, _>>()?
        } else {
            buckets
                .iter()
                .enumerate()
                .map(|(index, bucket)| self.build_one(side, index, bucket))
                .collect::<Result<_, _>>()?
        };

        let generator_draws = built.iter().map(|b| u64::from(b.generator_attempts)).sum();
        let (records, factors): (Vec<_>, Vec<_>) =
            built.into_iter().map(|b| (b.record, b.factors)).unzip();
        let table = BuiltTable::new(side, records, factors)
            .map_err(|e| BuildError::InvalidConfig(e.to_string()))?;

        let summary = BuildSummary {
            side,
            buckets: table.len(),
            generator_draws,
            elapsed: start.elapsed(),
        };
        info!(
            %side,
            buckets = summary.buckets,
            generator_draws = summary.generator_draws,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Table built"
        );
        Ok((table, summary))
    }

    fn build_one(
        &self,
        side: TableSide,
        index: usize,
        bucket: &Bucket,
    ) -> Result<BuiltBucket, BuildError> {
        let _timer = time_histogram!(BUCKET_BUILD_DURATION);
        let mut rng = self.bucket_rng(side, index);

        let built = build_bucket(bucket.primes(), &self.pads, &self.config, &mut rng).map_err(
            |source| {
                error!(%side, index, error = %source, "Bucket build failed");
                BuildError::Bucket {
                    side,
                    index,
                    source: Box::new(source),
                }
            },
        )?;

        if self.config.verify {
            check_bucket_invariants(&built.record, &built.factors, self.config.factor_rounds)
                .map_err(|violation| BuildError::Invariant {
                    side,
                    index,
                    violation,
                })?;
        }

        BUCKETS_BUILT.with_label_values(&[side.as_str()]).inc();
        GENERATOR_DRAWS.inc_by(f64::from(built.generator_attempts));
        Ok(built)
    }

    fn bucket_rng(&self, side: TableSide, index: usize) -> StdRng {
        match self.config.rng_seed {
            Some(seed) => {
                let side_offset = match side {
                    TableSide::Left => 0u64,
                    TableSide::Right => 1u64 << 32,
                };
                StdRng::seed_from_u64(seed ^ side_offset ^ index as u64)
            }
            None => StdRng::from_entropy(),
        }
    }
}
