//! Shard layout and per-shard state
//!
//! `table_size` buckets are split into contiguous runs of
//! `ceil(table_size / shards)` buckets. Bucket `key` lives in shard
//! `key / bins_per_shard` at offset `key % bins_per_shard`.

use num_bigint_dig::{BigUint, RandBigInt};
use num_traits::One;
use rand::Rng;
use shared_types::BuiltTable;

use crate::domain::job::Job;
use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShardLayout {
    table_size: usize,
    shards: usize,
    bins_per_shard: usize,
}

impl ShardLayout {
    pub fn new(table_size: usize, shards: usize) -> Result<Self, EngineError> {
        if table_size == 0 || shards == 0 {
            return Err(EngineError::InvalidConfig(format!(
                "cannot shard {} buckets across {} consumers",
                table_size, shards
            )));
        }
        Ok(Self {
            table_size,
            shards,
            bins_per_shard: table_size.div_ceil(shards),
        })
    }

    pub fn table_size(&self) -> usize {
        self.table_size
    }

    pub fn shards(&self) -> usize {
        self.shards
    }

    pub fn bins_per_shard(&self) -> usize {
        self.bins_per_shard
    }

    /// `(shard, offset)` of a bucket key below `table_size`.
    pub fn locate(&self, key: u64) -> Result<(usize, usize), EngineError> {
        if key >= self.table_size as u64 {
            return Err(EngineError::KeyOutOfRange {
                key,
                table_size: self.table_size,
            });
        }
        let key = key as usize;
        Ok((key / self.bins_per_shard, key % self.bins_per_shard))
    }

    /// Bucket range owned by `shard`.
    pub fn range(&self, shard: usize) -> std::ops::Range<usize> {
        let start = (shard * self.bins_per_shard).min(self.table_size);
        let end = ((shard + 1) * self.bins_per_shard).min(self.table_size);
        start..end
    }

    /// Split `entries` (one per bucket) into per-shard owned state.
    pub fn partition(&self, entries: Vec<ShardEntry>) -> Result<Vec<Shard>, EngineError> {
        if entries.len() != self.table_size {
            return Err(EngineError::InvalidConfig(format!(
                "{} entries for a table of {} buckets",
                entries.len(),
                self.table_size
            )));
        }
        let mut remaining = entries.into_iter();
        Ok((0..self.shards)
            .map(|id| Shard {
                id,
                entries: remaining.by_ref().take(self.range(id).len()).collect(),
            })
            .collect())
    }
}

/// One bucket's serving pair: modulus `N` and running value `A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardEntry {
    modulus: BigUint,
    value: BigUint,
}

impl ShardEntry {
    /// `value` is reduced modulo `modulus`, which must exceed 1.
    pub fn new(modulus: BigUint, value: BigUint) -> Result<Self, EngineError> {
        if modulus <= BigUint::one() {
            return Err(EngineError::InvalidConfig(format!(
                "shard modulus {} must exceed 1",
                modulus
            )));
        }
        let value = value % &modulus;
        Ok(Self { modulus, value })
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }
}

/// A consumer's exclusively owned slice of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shard {
    id: usize,
    entries: Vec<ShardEntry>,
}

impl Shard {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ShardEntry] {
        &self.entries
    }

    /// `A = A^exponent mod N` for the job's entry.
    pub fn apply(&mut self, job: &Job) -> Result<(), EngineError> {
        let shard = self.id;
        let entry = self
            .entries
            .get_mut(job.offset)
            .ok_or_else(|| {
                EngineError::InvalidConfig(format!(
                    "offset {} outside shard {}",
                    job.offset, shard
                ))
            })?;
        entry.value = entry.value.modpow(&job.exponent, &entry.modulus);
        Ok(())
    }
}

/// Random `(N, A)` pairs: `N` has exactly `modulus_bits` bits, `A` is drawn
/// from `[2, 2^modulus_bits)`.
pub fn random_entries<R: Rng + ?Sized>(
    count: usize,
    modulus_bits: usize,
    rng: &mut R,
) -> Result<Vec<ShardEntry>, EngineError> {
    if modulus_bits < 2 {
        return Err(EngineError::InvalidConfig(format!(
            "modulus_bits {} too small",
            modulus_bits
        )));
    }
    let top = BigUint::one() << (modulus_bits - 1);
    let upper = BigUint::one() << modulus_bits;
    let two = BigUint::from(2u32);

    (0..count)
        .map(|_| {
            let modulus = rng.gen_biguint_range(&top, &upper);
            let value = rng.gen_biguint_range(&two, &upper);
            ShardEntry::new(modulus, value)
        })
        .collect()
}

/// Serving pairs `(N, g)` of a built table.
pub fn entries_from_table(table: &BuiltTable) -> Result<Vec<ShardEntry>, EngineError> {
    table
        .buckets()
        .iter()
        .map(|record| ShardEntry::new(record.modulus.clone(), record.generator.clone()))
        .collect()
}
