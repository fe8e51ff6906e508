//! # PB-05 Query Engine
//!
//! Producers hash random preimages to primes and route one exponentiation
//! job per table side to the consumer owning that bucket. Consumers apply
//! `A = A^e mod N` to their shard's entry. Each consumer is the only
//! writer of its shard, so shards need no locking.
//!
//! ## Run modes
//!
//! - **Bounded**: every producer submits a fixed number of iterations, then
//!   one `Shutdown` message per queue drains the consumers.
//! - **Soak**: runs until a deadline, then raises the cancellation signal.
//!   Producers get a grace period to stop; stragglers are aborted.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): jobs, shard layout and state, the job
//!   factory, the cancellation signal
//! - **Service Layer** (`service/`): producer and consumer tasks, the
//!   engine driver and the parameter sweep
//! - **Reports** (`report.rs`): per-worker counts and sweep results
//!
//! ## Invariants
//!
//! - Completed plus abandoned jobs equals submitted jobs once every worker
//!   has been joined.
//! - In bounded mode nothing is abandoned.

pub mod config;
pub mod domain;
pub mod error;
pub mod report;
pub mod service;

pub use config::{EngineConfig, EngineConfigBuilder, RunMode, SweepConfig};
pub use domain::{
    entries_from_table, random_entries, CancellationSignal, Job, JobFactory, QueueMessage, RoutedJob,
    Shard, ShardEntry, ShardLayout,
};
pub use error::EngineError;
pub use report::{ConsumerReport, EngineReport, ProducerReport, SoakSummary, SweepResult};
pub use service::{append_results, run_sweep, EngineOutcome, QueryEngine};
