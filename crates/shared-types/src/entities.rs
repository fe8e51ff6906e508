//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Values**: `Prime`, `BucketIndex`, `TableSide`
//! - **Built buckets**: `BucketRecord` (serving pair), `FactorRecord` (checker data)
//! - **Tables**: `BuiltTable` (two parallel arrays, one entry per bucket)

use num_traits::One;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::TableShapeError;

// Re-export the big integer type so downstream crates agree on one version.
pub use num_bigint_dig::BigUint;

/// A probable prime produced by the prime hasher.
///
/// Odd, with its top bit set so it lies in `[2^(n-1), 2^n)` for the
/// configured bit length `n`.
pub type Prime = BigUint;

/// Index of a bucket inside one side's table, always in `[0, table_size)`.
pub type BucketIndex = u64;

/// Which of the two sibling tables a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableSide {
    Left,
    Right,
}

impl TableSide {
    /// Both sides, left first. Iteration order matters for tie-breaking.
    pub const ALL: [TableSide; 2] = [TableSide::Left, TableSide::Right];

    /// Salt used by the bin hasher that addresses this side.
    pub fn salt(&self) -> &'static [u8] {
        match self {
            TableSide::Left => b"left",
            TableSide::Right => b"right",
        }
    }

    /// Name under which this side's table is persisted.
    pub fn table_name(&self) -> &'static str {
        match self {
            TableSide::Left => "leftTable",
            TableSide::Right => "rightTable",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TableSide::Left => "left",
            TableSide::Right => "right",
        }
    }
}

impl fmt::Display for TableSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serving view of a built bucket: the pair `(g, N)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketRecord {
    /// Quadratic-residue generator in `[2, N)`.
    pub generator: BigUint,
    /// Composite modulus `N = P * Q`.
    pub modulus: BigUint,
}

/// Construction view of a built bucket: `(P, Q, setP, setQ)`.
///
/// Each set holds the bucket's primes for that factor followed by the pad
/// prime that made the factor prime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorRecord {
    pub factor_p: BigUint,
    pub factor_q: BigUint,
    pub set_p: Vec<Prime>,
    pub set_q: Vec<Prime>,
}

impl FactorRecord {
    /// `P * Q`, which must equal the paired `BucketRecord::modulus`.
    pub fn modulus(&self) -> BigUint {
        &self.factor_p * &self.factor_q
    }

    /// Number of set members across both factors, pads included.
    pub fn member_count(&self) -> usize {
        self.set_p.len() + self.set_q.len()
    }
}

/// One side's table after the build phase.
///
/// `buckets[i]` and `factors[i]` describe the same bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltTable {
    side: TableSide,
    buckets: Vec<BucketRecord>,
    factors: Vec<FactorRecord>,
}

impl BuiltTable {
    /// Assemble a table from its parallel arrays.
    pub fn new(
        side: TableSide,
        buckets: Vec<BucketRecord>,
        factors: Vec<FactorRecord>,
    ) -> Result<Self, TableShapeError> {
        if buckets.len() != factors.len() {
            return Err(TableShapeError::ParallelLengthMismatch {
                table: side.table_name().to_string(),
                buckets: buckets.len(),
                factors: factors.len(),
            });
        }
        Ok(Self {
            side,
            buckets,
            factors,
        })
    }

    pub fn side(&self) -> TableSide {
        self.side
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn buckets(&self) -> &[BucketRecord] {
        &self.buckets
    }

    pub fn factors(&self) -> &[FactorRecord] {
        &self.factors
    }

    /// Mutable access for tooling that rewrites serving pairs.
    pub fn buckets_mut(&mut self) -> &mut [BucketRecord] {
        &mut self.buckets
    }

    /// Walk both arrays in lockstep.
    pub fn iter(&self) -> impl Iterator<Item = (&BucketRecord, &FactorRecord)> {
        self.buckets.iter().zip(self.factors.iter())
    }

    /// Total number of set members across every bucket.
    pub fn member_count(&self) -> usize {
        self.factors.iter().map(FactorRecord::member_count).sum()
    }

    pub fn into_parts(self) -> (TableSide, Vec<BucketRecord>, Vec<FactorRecord>) {
        (self.side, self.buckets, self.factors)
    }
}

/// Product of a sequence of primes; the empty product is 1.
pub fn product(values: &[Prime]) -> BigUint {
    values.iter().fold(BigUint::one(), |acc, v| acc * v)
}
