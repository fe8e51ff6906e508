//! Job synthesis
//!
//! A producer iteration draws a random preimage, hashes it to a prime
//! exponent and routes one job per table side to the shard owning that
//! side's bucket.

use pb_01_prime_hashing::{BinHasherPair, PrimeHasher, SERVING_ROUNDS};
use rand::Rng;
use shared_types::Prime;

use super::job::Job;
use super::shard::ShardLayout;
use crate::config::EngineConfig;
use crate::error::EngineError;

/// Random bytes per preimage; hex-encoded before hashing.
const PREIMAGE_BYTES: usize = 16;

/// A job addressed to a shard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedJob {
    pub shard: usize,
    pub job: Job,
}

#[derive(Debug, Clone)]
pub struct JobFactory {
    prime_hasher: PrimeHasher,
    bin_hashers: BinHasherPair,
    layout: ShardLayout,
}

impl JobFactory {
    /// Serving-side hashers use the fast primality check.
    pub fn new(config: &EngineConfig, layout: ShardLayout) -> Result<Self, EngineError> {
        Ok(Self {
            prime_hasher: PrimeHasher::new(config.prime_bits)?.with_rounds(SERVING_ROUNDS),
            bin_hashers: BinHasherPair::new(config.bin_hash_bits)?,
            layout,
        })
    }

    pub fn layout(&self) -> &ShardLayout {
        &self.layout
    }

    /// Hex string of fresh random bytes.
    pub fn random_preimage<R: Rng + ?Sized>(rng: &mut R) -> String {
        let mut bytes = [0u8; PREIMAGE_BYTES];
        rng.fill(&mut bytes[..]);
        hex::encode(bytes)
    }

    /// Left and right jobs for one preimage.
    pub fn jobs_for(&self, preimage: &[u8]) -> Result<[RoutedJob; 2], EngineError> {
        let prime = self.prime_hasher.hash_to_prime(preimage);
        let (left, right) = self
            .bin_hashers
            .candidates(&prime, self.layout.table_size() as u64)?;
        Ok([self.route(left, prime.clone())?, self.route(right, prime)?])
    }

    /// Jobs for a fresh random preimage.
    pub fn next_jobs<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<[RoutedJob; 2], EngineError> {
        let preimage = Self::random_preimage(rng);
        self.jobs_for(preimage.as_bytes())
    }

    fn route(&self, key: u64, exponent: Prime) -> Result<RoutedJob, EngineError> {
        let (shard, offset) = self.layout.locate(key)?;
        Ok(RoutedJob {
            shard,
            job: Job { exponent, offset },
        })
    }
}
