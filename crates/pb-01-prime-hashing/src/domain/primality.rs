//! Probabilistic primality testing
//!
//! Wraps `num_bigint_dig::prime::probably_prime`, which runs `rounds`
//! Miller-Rabin iterations followed by a Baillie-PSW test.

use num_bigint_dig::prime::probably_prime;
use num_bigint_dig::BigUint;

/// Miller-Rabin rounds for primes hashed during offline construction.
pub const OFFLINE_ROUNDS: usize = 20;

/// Miller-Rabin rounds for the `P` / `Q` factors of a bucket modulus.
pub const FACTOR_ROUNDS: usize = 40;

/// Online serving only runs the Baillie-PSW test.
pub const SERVING_ROUNDS: usize = 0;

/// Probable-prime test at the given confidence.
pub fn is_probable_prime(candidate: &BigUint, rounds: usize) -> bool {
    probably_prime(candidate, rounds)
}
