//! Engine and sweep configuration

use std::ops::Range;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// How the engine decides when to stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunMode {
    /// Each producer submits `jobs_per_producer` iterations (two jobs each).
    Bounded { jobs_per_producer: u64 },
    /// Run until `duration` elapses, then cancel.
    Soak { duration: Duration },
}

impl RunMode {
    pub fn name(&self) -> &'static str {
        match self {
            RunMode::Bounded { .. } => "bounded",
            RunMode::Soak { .. } => "soak",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub num_producers: usize,
    pub num_consumers: usize,
    /// Capacity of each consumer's queue
    pub queue_capacity: usize,
    /// Soak mode: longest a push or pop waits before re-checking cancellation
    pub poll_interval: Duration,
    /// Soak mode: time producers get to exit after cancellation
    pub grace_period: Duration,
    /// Bit length of the job exponents
    pub prime_bits: usize,
    pub bin_hash_bits: usize,
    pub mode: RunMode,
    /// Seed for producer preimages; entropy when unset
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            num_producers: 4,
            num_consumers: 8,
            queue_capacity: 1000,
            poll_interval: Duration::from_secs(1),
            grace_period: Duration::from_secs(180),
            prime_bits: 86,
            bin_hash_bits: 80,
            mode: RunMode::Bounded {
                jobs_per_producer: 1000,
            },
            rng_seed: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.num_producers == 0 {
            return Err(EngineError::InvalidConfig(
                "num_producers must be > 0".to_string(),
            ));
        }
        if self.num_consumers == 0 {
            return Err(EngineError::InvalidConfig(
                "num_consumers must be > 0".to_string(),
            ));
        }
        if self.queue_capacity == 0 {
            return Err(EngineError::InvalidConfig(
                "queue_capacity must be > 0".to_string(),
            ));
        }
        if self.poll_interval.is_zero() {
            return Err(EngineError::InvalidConfig(
                "poll_interval must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Worker threads for the engine runtime: one per task.
    pub fn worker_threads(&self) -> usize {
        self.num_producers + self.num_consumers
    }
}

/// Builder for EngineConfig with validation
#[derive(Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn producers(mut self, count: usize) -> Self {
        self.config.num_producers = count;
        self
    }

    pub fn consumers(mut self, count: usize) -> Self {
        self.config.num_consumers = count;
        self
    }

    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.config.queue_capacity = capacity;
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval = interval;
        self
    }

    pub fn grace_period(mut self, grace: Duration) -> Self {
        self.config.grace_period = grace;
        self
    }

    pub fn prime_bits(mut self, bits: usize) -> Self {
        self.config.prime_bits = bits;
        self
    }

    pub fn bounded(mut self, jobs_per_producer: u64) -> Self {
        self.config.mode = RunMode::Bounded { jobs_per_producer };
        self
    }

    pub fn soak(mut self, duration: Duration) -> Self {
        self.config.mode = RunMode::Soak { duration };
        self
    }

    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.config.rng_seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<EngineConfig, EngineError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Grid of bounded runs over producer and consumer counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub producers: Range<usize>,
    pub consumers_min: usize,
    /// Consumers range up to `consumers_cap - producers`, exclusive
    pub consumers_cap: usize,
    /// Table size is `consumers * bins_per_consumer`
    pub bins_per_consumer: usize,
    pub modulus_bits: usize,
    /// Split evenly across producers
    pub total_jobs: u64,
    pub queue_capacity: usize,
    pub prime_bits: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            producers: 1..12,
            consumers_min: 5,
            consumers_cap: 49,
            bins_per_consumer: 8,
            modulus_bits: 3072,
            total_jobs: 1_000_000,
            queue_capacity: 1000,
            prime_bits: 86,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.producers.start == 0 || self.producers.is_empty() {
            return Err(EngineError::InvalidConfig(format!(
                "producer range {:?} must be non-empty and start above 0",
                self.producers
            )));
        }
        if self.consumers_min == 0 || self.bins_per_consumer == 0 {
            return Err(EngineError::InvalidConfig(
                "consumers_min and bins_per_consumer must be > 0".to_string(),
            ));
        }
        if self.modulus_bits < 2 {
            return Err(EngineError::InvalidConfig(format!(
                "modulus_bits {} too small",
                self.modulus_bits
            )));
        }
        Ok(())
    }

    /// Consumer counts tried for `producers`.
    pub fn consumer_range(&self, producers: usize) -> Range<usize> {
        self.consumers_min..self.consumers_cap.saturating_sub(producers)
    }

    pub fn jobs_per_producer(&self, producers: usize) -> u64 {
        self.total_jobs / producers as u64
    }

    /// Engine configuration for one grid cell.
    pub fn engine_config(&self, producers: usize, consumers: usize) -> EngineConfig {
        EngineConfig {
            num_producers: producers,
            num_consumers: consumers,
            queue_capacity: self.queue_capacity,
            prime_bits: self.prime_bits,
            mode: RunMode::Bounded {
                jobs_per_producer: self.jobs_per_producer(producers),
            },
            ..EngineConfig::default()
        }
    }
}
