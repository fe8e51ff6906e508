//! Service Layer - Worker tasks and drivers

mod consumer;
mod engine;
mod producer;
mod sweep;

pub use engine::{EngineOutcome, QueryEngine};
pub use sweep::{append_results, run_sweep};
