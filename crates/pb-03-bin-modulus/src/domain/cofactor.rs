//! Even/odd split of a bucket into the two cofactor subsets

use serde::{Deserialize, Serialize};
use shared_types::Prime;
use std::fmt;

/// Which factor a subset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subset {
    P,
    Q,
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subset::P => f.write_str("P"),
            Subset::Q => f.write_str("Q"),
        }
    }
}

/// `setP` (even positions) and `setQ` (odd positions) of one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CofactorSets {
    pub set_p: Vec<Prime>,
    pub set_q: Vec<Prime>,
}

impl CofactorSets {
    pub fn get(&self, subset: Subset) -> &[Prime] {
        match subset {
            Subset::P => &self.set_p,
            Subset::Q => &self.set_q,
        }
    }
}

/// Split bucket primes by position parity, preserving order within each set.
pub fn split_cofactors(primes: &[Prime]) -> CofactorSets {
    let mut sets = CofactorSets::default();
    for (position, prime) in primes.iter().enumerate() {
        if position % 2 == 0 {
            sets.set_p.push(prime.clone());
        } else {
            sets.set_q.push(prime.clone());
        }
    }
    sets
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint_dig::BigUint;

    fn primes(values: &[u32]) -> Vec<Prime> {
        values.iter().map(|v| BigUint::from(*v)).collect()
    }

    #[test]
    fn test_split_by_position() {
        let sets = split_cofactors(&primes(&[11, 13, 17, 19, 23]));
        assert_eq!(sets.set_p, primes(&[11, 17, 23]));
        assert_eq!(sets.set_q, primes(&[13, 19]));
        assert_eq!(sets.get(Subset::Q), primes(&[13, 19]).as_slice());
    }

    #[test]
    fn test_split_empty_and_single() {
        let empty = split_cofactors(&[]);
        assert!(empty.set_p.is_empty() && empty.set_q.is_empty());

        let single = split_cofactors(&primes(&[101]));
        assert_eq!(single.set_p, primes(&[101]));
        assert!(single.set_q.is_empty());
    }

    #[test]
    fn test_split_keeps_duplicates() {
        let sets = split_cofactors(&primes(&[7, 7, 7]));
        assert_eq!(sets.set_p, primes(&[7, 7]));
        assert_eq!(sets.set_q, primes(&[7]));
    }
}
