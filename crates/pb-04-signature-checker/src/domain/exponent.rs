//! Cofactor exponent

use num_bigint_dig::BigUint;
use shared_types::Prime;

/// `2 * prod(k in set, k != excluded)`.
///
/// Exclusion is by value: every occurrence of `excluded` is dropped, not only
/// the one at the member's own position.
pub fn cofactor_exponent(set: &[Prime], excluded: &Prime) -> BigUint {
    set.iter()
        .filter(|member| *member != excluded)
        .fold(BigUint::from(2u32), |acc, member| acc * member)
}
