//! Error types for the balanced allocation subsystem

use pb_01_prime_hashing::HashError;
use shared_types::{BucketIndex, TableSide};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("Key outside of table limits: {key} >= {size} ({side} table)")]
    KeyOutOfRange {
        side: TableSide,
        key: BucketIndex,
        size: u64,
    },

    #[error("Table size must be positive")]
    EmptyTable,

    #[error("Hashing error: {0}")]
    Hash(#[from] HashError),
}
