//! Post-build invariant checks

use num_bigint_dig::BigUint;
use num_traits::One;
use pb_01_prime_hashing::is_probable_prime;
use shared_types::{product, BucketRecord, FactorRecord};

use super::cofactor::Subset;
use super::generator::generator_is_valid;
use crate::error::InvariantViolation;

/// Verify a built bucket against every construction invariant.
pub fn check_bucket_invariants(
    record: &BucketRecord,
    factors: &FactorRecord,
    rounds: usize,
) -> Result<(), InvariantViolation> {
    let two = BigUint::from(2u32);

    for (subset, factor, set) in [
        (Subset::P, &factors.factor_p, &factors.set_p),
        (Subset::Q, &factors.factor_q, &factors.set_q),
    ] {
        if !is_probable_prime(factor, rounds) {
            return Err(InvariantViolation::CompositeFactor(subset));
        }
        if *factor != &two * product(set) + BigUint::one() {
            return Err(InvariantViolation::FactorShape(subset));
        }
    }

    if record.modulus != factors.modulus() {
        return Err(InvariantViolation::ModulusMismatch);
    }
    if record.generator < two || record.generator >= record.modulus {
        return Err(InvariantViolation::GeneratorOutOfRange);
    }

    // Attribute a collapse to the set it happens in
    if !generator_is_valid(&record.generator, &factors.set_p, &[], &factors.factor_p, &factors.factor_q) {
        return Err(InvariantViolation::OrderCollapse(Subset::P));
    }
    if !generator_is_valid(&record.generator, &[], &factors.set_q, &factors.factor_p, &factors.factor_q) {
        return Err(InvariantViolation::OrderCollapse(Subset::Q));
    }
    Ok(())
}
