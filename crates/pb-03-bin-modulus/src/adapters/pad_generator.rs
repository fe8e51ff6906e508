//! Random pad-prime list generation
//!
//! Produces the ordered pad list consumed by the factor search.

use num_bigint_dig::RandPrime;
use rand::Rng;

use crate::domain::PadPrimeList;
use crate::error::BuildError;

/// `count` random probable primes of exactly `bits` bits.
pub fn generate_pad_primes<R: Rng + ?Sized>(
    count: usize,
    bits: usize,
    rng: &mut R,
) -> Result<PadPrimeList, BuildError> {
    if bits < 8 {
        return Err(BuildError::InvalidConfig(format!(
            "pad primes need at least 8 bits, got {}",
            bits
        )));
    }

    let primes = (0..count).map(|_| rng.gen_prime(bits)).collect();
    Ok(PadPrimeList::new(primes))
}
