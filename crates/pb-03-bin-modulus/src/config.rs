//! Modulus builder configuration and validation

use pb_01_prime_hashing::FACTOR_ROUNDS;
use serde::{Deserialize, Serialize};

use crate::error::BuildError;

/// Knobs for the per-bucket build.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Miller-Rabin rounds for `P` and `Q`
    pub factor_rounds: usize,
    /// Generator draws per bucket before the build fails
    pub max_generator_attempts: u32,
    /// Build buckets on the rayon pool
    pub parallel: bool,
    /// Re-check every built bucket against its invariants
    pub verify: bool,
    /// Fixed seed for generator draws; `None` seeds from the OS
    pub rng_seed: Option<u64>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            factor_rounds: FACTOR_ROUNDS,
            max_generator_attempts: 10_000,
            parallel: true,
            verify: false,
            rng_seed: None,
        }
    }
}

impl BuildConfig {
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.max_generator_attempts == 0 {
            return Err(BuildError::InvalidConfig(
                "max_generator_attempts cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for BuildConfig with validation
#[derive(Default)]
pub struct BuildConfigBuilder {
    factor_rounds: Option<usize>,
    max_generator_attempts: Option<u32>,
    parallel: Option<bool>,
    verify: Option<bool>,
    rng_seed: Option<u64>,
}

impl BuildConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn factor_rounds(mut self, rounds: usize) -> Self {
        self.factor_rounds = Some(rounds);
        self
    }

    pub fn max_generator_attempts(mut self, attempts: u32) -> Self {
        self.max_generator_attempts = Some(attempts);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = Some(verify);
        self
    }

    /// Seed generator draws for reproducible tables
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<BuildConfig, BuildError> {
        let defaults = BuildConfig::default();

        let config = BuildConfig {
            factor_rounds: self.factor_rounds.unwrap_or(defaults.factor_rounds),
            max_generator_attempts: self
                .max_generator_attempts
                .unwrap_or(defaults.max_generator_attempts),
            parallel: self.parallel.unwrap_or(defaults.parallel),
            verify: self.verify.unwrap_or(defaults.verify),
            rng_seed: self.rng_seed.or(defaults.rng_seed),
        };

        config.validate()?;
        Ok(config)
    }
}
