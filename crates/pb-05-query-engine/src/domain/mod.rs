//! Domain Layer - Jobs, shards and cancellation
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod cancel;
pub mod factory;
pub mod job;
pub mod shard;

pub use cancel::CancellationSignal;
pub use factory::{JobFactory, RoutedJob};
pub use job::{Job, QueueMessage};
pub use shard::{entries_from_table, random_entries, Shard, ShardEntry, ShardLayout};
