//! One side's bucket array

use shared_types::{BucketIndex, Prime, TableSide};

use super::bucket::Bucket;
use crate::error::AllocationError;

/// Fixed-size array of growable buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashTable {
    side: TableSide,
    buckets: Vec<Bucket>,
}

impl HashTable {
    pub fn new(side: TableSide, size: usize) -> Self {
        Self {
            side,
            buckets: vec![Bucket::new(); size],
        }
    }

    pub fn side(&self) -> TableSide {
        self.side
    }

    /// Number of buckets.
    pub fn size(&self) -> u64 {
        self.buckets.len() as u64
    }

    /// Append `prime` to bucket `key`.
    pub fn add_value(&mut self, key: BucketIndex, prime: Prime) -> Result<(), AllocationError> {
        let index = self.check_key(key)?;
        self.buckets[index].push(prime);
        Ok(())
    }

    /// Current occupancy of bucket `key`.
    pub fn size_of_bin(&self, key: BucketIndex) -> Result<usize, AllocationError> {
        let index = self.check_key(key)?;
        Ok(self.buckets[index].len())
    }

    pub fn bucket(&self, key: BucketIndex) -> Result<&Bucket, AllocationError> {
        let index = self.check_key(key)?;
        Ok(&self.buckets[index])
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Total primes stored across all buckets.
    pub fn element_count(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }

    pub fn into_buckets(self) -> Vec<Bucket> {
        self.buckets
    }

    fn check_key(&self, key: BucketIndex) -> Result<usize, AllocationError> {
        if key >= self.size() {
            return Err(AllocationError::KeyOutOfRange {
                side: self.side,
                key,
                size: self.size(),
            });
        }
        Ok(key as usize)
    }
}
