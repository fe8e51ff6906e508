//! Allocation service: hash preimages to primes and place them

use std::time::{Duration, Instant};

use pb_01_prime_hashing::{HashingConfig, PrimeHasher};
use pb_telemetry::{metric_inc, ELEMENTS_PLACED, PRIMES_HASHED};
use rayon::prelude::*;
use shared_types::Prime;
use tracing::{debug, info};

use crate::domain::{BalancedTables, OccupancyStats, Placement};
use crate::error::AllocationError;

/// Result of a bulk insertion.
#[derive(Debug, Clone)]
pub struct AllocationSummary {
    pub inserted: usize,
    pub elapsed: Duration,
    pub occupancy: OccupancyStats,
}

/// Owns the prime hasher and the two tables during construction.
pub struct AllocationService {
    hasher: PrimeHasher,
    tables: BalancedTables,
}

impl AllocationService {
    pub fn new(config: &HashingConfig, table_size: usize) -> Result<Self, AllocationError> {
        config.validate()?;
        Ok(Self {
            hasher: config.prime_hasher()?,
            tables: BalancedTables::new(table_size, config.bin_hashers()?)?,
        })
    }

    pub fn tables(&self) -> &BalancedTables {
        &self.tables
    }

    /// Hash one preimage to a prime and place it.
    pub fn insert_preimage(&mut self, preimage: &[u8]) -> Result<Placement, AllocationError> {
        let prime = self.hasher.hash_to_prime(preimage);
        metric_inc!(PRIMES_HASHED);
        self.place(prime)
    }

    /// Insert integer signatures, hashing the decimal string of each.
    ///
    /// Primes are hashed in parallel and placed in input order, so the
    /// resulting tables do not depend on the thread count.
    pub fn insert_values(&mut self, values: &[u64]) -> Result<AllocationSummary, AllocationError> {
        let start = Instant::now();

        let hasher = &self.hasher;
        let primes: Vec<_> = values
            .par_iter()
            .map(|value| hasher.hash_to_prime(value.to_string().as_bytes()))
            .collect();
        PRIMES_HASHED.inc_by(primes.len() as f64);
        debug!(count = primes.len(), "Hashed signature set to primes");

        for prime in primes {
            self.place(prime)?;
        }

        let summary = AllocationSummary {
            inserted: values.len(),
            elapsed: start.elapsed(),
            occupancy: self.tables.occupancy(),
        };

        info!(
            inserted = summary.inserted,
            buckets = summary.occupancy.buckets,
            min = summary.occupancy.min,
            max = summary.occupancy.max,
            mean = summary.occupancy.mean,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Signature set hashed and placed"
        );

        Ok(summary)
    }

    pub fn into_tables(self) -> BalancedTables {
        self.tables
    }

    fn place(&mut self, prime: Prime) -> Result<Placement, AllocationError> {
        let placement = self.tables.place(prime)?;
        metric_inc!(ELEMENTS_PLACED, &[placement.side.as_str()]);
        Ok(placement)
    }
}
