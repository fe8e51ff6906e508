//! Per-bucket membership scan

use num_bigint_dig::BigUint;
use num_traits::One;
use shared_types::{BucketRecord, FactorRecord, Prime};

use super::exponent::cofactor_exponent;

/// Members examined and hits found in one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketHits {
    pub members: u64,
    pub hits: u64,
}

impl BucketHits {
    pub fn merge(self, other: BucketHits) -> BucketHits {
        BucketHits {
            members: self.members + other.members,
            hits: self.hits + other.hits,
        }
    }
}

/// Count members `i` with `g^(2 * prod(set \ {i})) mod factor == 1`.
pub fn subset_hits(generator: &BigUint, set: &[Prime], factor: &BigUint) -> u64 {
    let base = generator % factor;
    set.iter()
        .filter(|member| base.modpow(&cofactor_exponent(set, member), factor).is_one())
        .count() as u64
}

/// Scan both subsets of one bucket.
pub fn bucket_hits(record: &BucketRecord, factors: &FactorRecord) -> BucketHits {
    let g = &record.generator;
    BucketHits {
        members: factors.member_count() as u64,
        hits: subset_hits(g, &factors.set_p, &factors.factor_p)
            + subset_hits(g, &factors.set_q, &factors.factor_q),
    }
}
