//! Two-choice placement across the left/right tables

use pb_01_prime_hashing::BinHasherPair;
use shared_types::{BucketIndex, Prime, TableSide};

use super::stats::OccupancyStats;
use super::table::HashTable;
use crate::error::AllocationError;

/// Where a prime ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub side: TableSide,
    pub index: BucketIndex,
}

/// Left and right tables of equal size plus the salted bin hashers.
#[derive(Debug, Clone)]
pub struct BalancedTables {
    left: HashTable,
    right: HashTable,
    bins: BinHasherPair,
}

impl BalancedTables {
    pub fn new(table_size: usize, bins: BinHasherPair) -> Result<Self, AllocationError> {
        if table_size == 0 {
            return Err(AllocationError::EmptyTable);
        }
        Ok(Self {
            left: HashTable::new(TableSide::Left, table_size),
            right: HashTable::new(TableSide::Right, table_size),
            bins,
        })
    }

    pub fn table_size(&self) -> u64 {
        self.left.size()
    }

    /// Place `prime` into the less occupied of its two candidate buckets.
    ///
    /// Equal occupancy goes left.
    pub fn place(&mut self, prime: Prime) -> Result<Placement, AllocationError> {
        let (left_idx, right_idx) = self.bins.candidates(&prime, self.table_size())?;
        let size_left = self.left.size_of_bin(left_idx)?;
        let size_right = self.right.size_of_bin(right_idx)?;

        let placement = if size_left <= size_right {
            self.left.add_value(left_idx, prime)?;
            Placement {
                side: TableSide::Left,
                index: left_idx,
            }
        } else {
            self.right.add_value(right_idx, prime)?;
            Placement {
                side: TableSide::Right,
                index: right_idx,
            }
        };
        Ok(placement)
    }

    pub fn table(&self, side: TableSide) -> &HashTable {
        match side {
            TableSide::Left => &self.left,
            TableSide::Right => &self.right,
        }
    }

    pub fn element_count(&self) -> usize {
        self.left.element_count() + self.right.element_count()
    }

    /// Occupancy across both tables.
    pub fn occupancy(&self) -> OccupancyStats {
        OccupancyStats::from_lengths(
            self.left
                .buckets()
                .iter()
                .chain(self.right.buckets())
                .map(|bucket| bucket.len()),
        )
    }

    pub fn into_tables(self) -> (HashTable, HashTable) {
        (self.left, self.right)
    }
}
