//! Hash-to-prime
//!
//! `candidate = 2^(n-1) + (digest mod 2^(n-1))` with the low bit forced,
//! tested for primality. A failed candidate extends the running hash input
//! with a marker byte and re-digests, so the search is hash-chained rather
//! than a numeric increment.

use num_bigint_dig::BigUint;
use num_integer::Integer;
use num_traits::One;
use shared_types::Prime;

use super::keyed_hash::KeyedBlake2b;
use super::primality::{is_probable_prime, OFFLINE_ROUNDS};
use crate::error::HashError;

/// Byte appended to the hashed input after each rejected candidate.
pub const EXTENSION_MARKER: &[u8] = b"0";

/// A hashed prime together with the number of rejected candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeWithRetries {
    pub prime: Prime,
    pub retries: u32,
}

/// Deterministic map from a byte preimage to an `n`-bit probable prime.
#[derive(Debug, Clone)]
pub struct PrimeHasher {
    hash: KeyedBlake2b,
    /// `2^(n-1)`: both the reduction modulus and the forced top bit.
    top_bit: BigUint,
    rounds: usize,
}

impl PrimeHasher {
    /// Unsalted hasher producing `bits`-bit primes at offline confidence.
    pub fn new(bits: usize) -> Result<Self, HashError> {
        Self::build(bits, None)
    }

    /// Salted hasher; different salts give independent prime streams.
    pub fn with_salt(bits: usize, salt: &[u8]) -> Result<Self, HashError> {
        Self::build(bits, Some(salt))
    }

    fn build(bits: usize, salt: Option<&[u8]>) -> Result<Self, HashError> {
        let hash = KeyedBlake2b::new(bits, salt)?;
        Ok(Self {
            hash,
            top_bit: BigUint::one() << (bits - 1),
            rounds: OFFLINE_ROUNDS,
        })
    }

    /// Override the Miller-Rabin round count.
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn bits(&self) -> usize {
        self.hash.output_bits()
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Hash `preimage` to a prime.
    pub fn hash_to_prime(&self, preimage: &[u8]) -> Prime {
        self.hash_with_retries(preimage).prime
    }

    /// Hash `preimage` to a prime and report how many candidates failed.
    ///
    /// Unbounded: by the prime number theorem about `ln(2^n) / 2` odd
    /// candidates are rejected on average.
    pub fn hash_with_retries(&self, preimage: &[u8]) -> PrimeWithRetries {
        let mut state = self.hash.absorb(preimage);
        let mut retries = 0u32;

        loop {
            let candidate = self.candidate_from_digest(&state.digest());
            if is_probable_prime(&candidate, self.rounds) {
                return PrimeWithRetries {
                    prime: candidate,
                    retries,
                };
            }

            state.extend(EXTENSION_MARKER);
            retries += 1;
        }
    }

    /// Map digest bytes (little-endian) into the odd half of `[2^(n-1), 2^n)`.
    fn candidate_from_digest(&self, digest: &[u8]) -> BigUint {
        let reduced = BigUint::from_bytes_le(digest) % &self.top_bit;
        let candidate = &self.top_bit + reduced;
        if candidate.is_even() {
            candidate + BigUint::one()
        } else {
            candidate
        }
    }
}
