//! Error types for the prime hashing subsystem

use thiserror::Error;

/// Errors raised while configuring or using a hasher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    #[error("Invalid output bit length: {bits} (must be between {min} and {max})")]
    InvalidBitLength { bits: usize, min: usize, max: usize },

    #[error("Salt too long: {len} bytes > {max}")]
    SaltTooLong { len: usize, max: usize },

    #[error("Bin hash codomain is empty (size = 0)")]
    EmptyCodomain,

    #[error("Invalid hashing parameters: {0}")]
    InvalidParameters(String),
}
