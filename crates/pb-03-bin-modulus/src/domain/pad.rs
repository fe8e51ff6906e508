//! Pad-prime list and the factor search
//!
//! `FindPad` walks the list from a cursor, forming
//! `candidate = 2 * prod(subset) * pad + 1`, and stops at the first
//! candidate that passes the primality test.

use num_bigint_dig::BigUint;
use num_traits::One;
use pb_01_prime_hashing::is_probable_prime;
use serde::{Deserialize, Serialize};
use shared_types::Prime;

use super::cofactor::Subset;
use crate::error::BuildError;

/// Externally supplied, ordered list of padding primes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PadPrimeList {
    primes: Vec<Prime>,
}

impl PadPrimeList {
    pub fn new(primes: Vec<Prime>) -> Self {
        Self { primes }
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn as_slice(&self) -> &[Prime] {
        &self.primes
    }

    pub fn into_inner(self) -> Vec<Prime> {
        self.primes
    }
}

/// A successful pad search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadSelection {
    /// The prime factor `2 * product * pad + 1`.
    pub factor: BigUint,
    pub pad: Prime,
    /// Index of `pad` in the list.
    pub position: usize,
}

/// Scan `pads` from `start` for the first pad that makes the factor prime.
pub fn find_pad(
    pads: &PadPrimeList,
    start: usize,
    subset_product: &BigUint,
    rounds: usize,
    subset: Subset,
) -> Result<PadSelection, BuildError> {
    let doubled = subset_product * BigUint::from(2u32);

    for (position, pad) in pads.primes.iter().enumerate().skip(start) {
        let candidate = &doubled * pad + BigUint::one();
        if is_probable_prime(&candidate, rounds) {
            return Ok(PadSelection {
                factor: candidate,
                pad: pad.clone(),
                position,
            });
        }
    }

    Err(BuildError::PadListExhausted {
        subset,
        scanned: pads.len().saturating_sub(start),
    })
}
