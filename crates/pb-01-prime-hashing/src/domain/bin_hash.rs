//! Salted bin hashing
//!
//! `KeyGen(x, size) = int_be(H_salt(x)) mod size`. One salted instance per
//! table side gives each prime two independent candidate buckets.

use shared_types::{BucketIndex, Prime, TableSide};

use super::keyed_hash::KeyedBlake2b;
use crate::error::HashError;

/// Maps a preimage to a bucket index in `[0, size)`.
#[derive(Debug, Clone)]
pub struct BinHasher {
    hash: KeyedBlake2b,
}

impl BinHasher {
    pub fn new(output_bits: usize, salt: &[u8]) -> Result<Self, HashError> {
        Ok(Self {
            hash: KeyedBlake2b::new(output_bits, Some(salt))?,
        })
    }

    /// Bucket index of `preimage` in a table of `size` buckets.
    pub fn key_gen(&self, preimage: &[u8], size: u64) -> Result<BucketIndex, HashError> {
        if size == 0 {
            return Err(HashError::EmptyCodomain);
        }
        Ok(reduce_be(&self.hash.digest(preimage), size))
    }
}

/// Big-endian digest reduced modulo `size` without materialising a bignum.
fn reduce_be(digest: &[u8], size: u64) -> u64 {
    let size = u128::from(size);
    let reduced = digest
        .iter()
        .fold(0u128, |acc, byte| ((acc << 8) | u128::from(*byte)) % size);
    // reduced < size <= u64::MAX
    reduced as u64
}

/// The left/right pair of bin hashers used by both tables.
#[derive(Debug, Clone)]
pub struct BinHasherPair {
    left: BinHasher,
    right: BinHasher,
}

impl BinHasherPair {
    /// Left and right hashers salted with the side names.
    pub fn new(output_bits: usize) -> Result<Self, HashError> {
        Ok(Self {
            left: BinHasher::new(output_bits, TableSide::Left.salt())?,
            right: BinHasher::new(output_bits, TableSide::Right.salt())?,
        })
    }

    pub fn side(&self, side: TableSide) -> &BinHasher {
        match side {
            TableSide::Left => &self.left,
            TableSide::Right => &self.right,
        }
    }

    /// `(leftIdx, rightIdx)` for a prime, hashing its decimal representation.
    pub fn candidates(&self, prime: &Prime, size: u64) -> Result<(BucketIndex, BucketIndex), HashError> {
        let preimage = prime.to_string();
        let left = self.left.key_gen(preimage.as_bytes(), size)?;
        let right = self.right.key_gen(preimage.as_bytes(), size)?;
        Ok((left, right))
    }
}
