//! Generator search
//!
//! `g = H^2 mod N` for uniform `H` in `[2, N)` lands in the quadratic-residue
//! subgroup. A draw is kept only if no set member's subgroup collapses:
//! `g^((P-1)/p) mod P != 1` for every `p` in `setP`, and likewise for `Q`.

use num_bigint_dig::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;
use shared_types::Prime;

use crate::error::BuildError;

/// Accepted generator and the number of draws it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSearch {
    pub generator: BigUint,
    pub attempts: u32,
}

/// One candidate: `H^2 mod N` with `H` uniform in `[2, N)`.
///
/// `modulus` must be greater than 2.
pub fn draw_generator<R: Rng + ?Sized>(modulus: &BigUint, rng: &mut R) -> BigUint {
    let two = BigUint::from(2u32);
    let h = rng.gen_biguint_range(&two, modulus);
    h.modpow(&two, modulus)
}

/// Whether `g` keeps every member of both sets in its order.
///
/// The sets are walked pairwise by position; the shorter set simply stops
/// contributing once exhausted.
pub fn generator_is_valid(
    generator: &BigUint,
    set_p: &[Prime],
    set_q: &[Prime],
    factor_p: &BigUint,
    factor_q: &BigUint,
) -> bool {
    let p_minus_one = factor_p - BigUint::one();
    let q_minus_one = factor_q - BigUint::one();

    for position in 0..set_p.len().max(set_q.len()) {
        if let Some(member) = set_p.get(position) {
            if order_collapses(generator, &p_minus_one, member, factor_p) {
                return false;
            }
        }
        if let Some(member) = set_q.get(position) {
            if order_collapses(generator, &q_minus_one, member, factor_q) {
                return false;
            }
        }
    }
    true
}

/// `g^((F-1)/member) mod F == 1`.
fn order_collapses(
    generator: &BigUint,
    factor_minus_one: &BigUint,
    member: &BigUint,
    factor: &BigUint,
) -> bool {
    if member.is_zero() {
        return true;
    }
    let exponent = factor_minus_one / member;
    (generator % factor).modpow(&exponent, factor).is_one()
}

/// Draw generators until one passes, giving up after `max_attempts` draws.
///
/// On top of the subgroup-order checks, draws below 2 and draws with
/// `gcd(g, N) != 1` are rejected. A multiple of `P` reduces to 0 mod `P`,
/// which no order check flags (`0^e != 1`), yet it has no order there at all.
pub fn find_generator<R: Rng + ?Sized>(
    set_p: &[Prime],
    set_q: &[Prime],
    factor_p: &BigUint,
    factor_q: &BigUint,
    max_attempts: u32,
    rng: &mut R,
) -> Result<GeneratorSearch, BuildError> {
    let modulus = factor_p * factor_q;
    let two = BigUint::from(2u32);
    if modulus <= two {
        return Err(BuildError::InvalidConfig(format!(
            "modulus {} too small for a generator",
            modulus
        )));
    }

    for attempt in 1..=max_attempts {
        let generator = draw_generator(&modulus, rng);
        if generator < two || !generator.gcd(&modulus).is_one() {
            continue;
        }
        if generator_is_valid(&generator, set_p, set_q, factor_p, factor_q) {
            return Ok(GeneratorSearch {
                generator,
                attempts: attempt,
            });
        }
    }

    Err(BuildError::GeneratorSearchExhausted {
        attempts: max_attempts,
    })
}
