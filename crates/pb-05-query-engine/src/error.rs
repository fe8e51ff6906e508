//! Error types for the query engine
//!
//! Queue-full backpressure and cancellation are normal operation and never
//! surface here.

use pb_01_prime_hashing::HashError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),

    #[error("Hasher setup failed: {0}")]
    Hash(#[from] HashError),

    #[error("Bucket key {key} out of range for a table of {table_size} buckets")]
    KeyOutOfRange { key: u64, table_size: usize },

    #[error("Queue for shard {shard} closed before shutdown")]
    QueueClosed { shard: usize },

    #[error("Worker task failed: {0}")]
    WorkerFailed(String),

    #[error("Failed to start runtime: {0}")]
    Runtime(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
