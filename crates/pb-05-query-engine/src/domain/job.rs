//! Queue messages

use num_bigint_dig::BigUint;

/// One exponentiation: raise the entry at `offset` in the receiving shard
/// to `exponent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub exponent: BigUint,
    pub offset: usize,
}

/// What travels on a consumer queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueMessage {
    Job(Job),
    /// Bounded mode sentinel: no more jobs will follow.
    Shutdown,
}
