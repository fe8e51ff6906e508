//! # Error Types
//!
//! Errors raised while assembling shared records.

use thiserror::Error;

/// A built table whose two parallel arrays disagree in length.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableShapeError {
    /// Bucket and factor arrays must have one entry per bucket.
    #[error("Table {table}: {buckets} bucket records but {factors} factor records")]
    ParallelLengthMismatch {
        table: String,
        buckets: usize,
        factors: usize,
    },
}
