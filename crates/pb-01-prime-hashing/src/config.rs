//! Hashing configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use pb_01_prime_hashing::HashingConfigBuilder;
//!
//! let config = HashingConfigBuilder::new()
//!     .prime_bits(86)
//!     .bin_hash_bits(80)
//!     .build()?;
//! let hasher = config.prime_hasher()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{
    BinHasherPair, PrimeHasher, MAX_OUTPUT_BITS, MIN_OUTPUT_BITS, OFFLINE_ROUNDS,
};
use crate::error::HashError;

/// Bit lengths and primality confidence shared by construction and serving.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashingConfig {
    /// Prime hash output size `n` (the security parameter)
    pub prime_bits: usize,
    /// Bin hash digest size before reduction
    pub bin_hash_bits: usize,
    /// Miller-Rabin rounds used by the prime hasher
    pub primality_rounds: usize,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            prime_bits: 86,
            bin_hash_bits: 80,
            primality_rounds: OFFLINE_ROUNDS,
        }
    }
}

impl HashingConfig {
    pub fn validate(&self) -> Result<(), HashError> {
        for bits in [self.prime_bits, self.bin_hash_bits] {
            if !(MIN_OUTPUT_BITS..=MAX_OUTPUT_BITS).contains(&bits) {
                return Err(HashError::InvalidBitLength {
                    bits,
                    min: MIN_OUTPUT_BITS,
                    max: MAX_OUTPUT_BITS,
                });
            }
        }
        Ok(())
    }

    /// Prime hasher at the configured size and confidence.
    pub fn prime_hasher(&self) -> Result<PrimeHasher, HashError> {
        Ok(PrimeHasher::new(self.prime_bits)?.with_rounds(self.primality_rounds))
    }

    pub fn bin_hashers(&self) -> Result<BinHasherPair, HashError> {
        BinHasherPair::new(self.bin_hash_bits)
    }

    /// Builder-style method to set the primality rounds
    pub fn with_primality_rounds(mut self, rounds: usize) -> Self {
        self.primality_rounds = rounds;
        self
    }
}

/// Builder for HashingConfig with validation
#[derive(Default)]
pub struct HashingConfigBuilder {
    prime_bits: Option<usize>,
    bin_hash_bits: Option<usize>,
    primality_rounds: Option<usize>,
}

impl HashingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prime hash output size (3..=512)
    pub fn prime_bits(mut self, bits: usize) -> Self {
        self.prime_bits = Some(bits);
        self
    }

    /// Set the bin hash digest size (3..=512)
    pub fn bin_hash_bits(mut self, bits: usize) -> Self {
        self.bin_hash_bits = Some(bits);
        self
    }

    pub fn primality_rounds(mut self, rounds: usize) -> Self {
        self.primality_rounds = Some(rounds);
        self
    }

    /// Build the HashingConfig, validating all parameters
    pub fn build(self) -> Result<HashingConfig, HashError> {
        let defaults = HashingConfig::default();

        let config = HashingConfig {
            prime_bits: self.prime_bits.unwrap_or(defaults.prime_bits),
            bin_hash_bits: self.bin_hash_bits.unwrap_or(defaults.bin_hash_bits),
            primality_rounds: self.primality_rounds.unwrap_or(defaults.primality_rounds),
        };

        config.validate()?;
        Ok(config)
    }
}
