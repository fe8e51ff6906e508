//! # PB-02 Balanced Allocation
//!
//! Places each hashed prime into the less occupied of its two candidate
//! buckets (power-of-two-choices), one candidate per sibling table.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`)
//!   - `Bucket`: ordered primes of one bucket before the build phase
//!   - `HashTable`: one side's array of buckets with bounds-checked access
//!   - `BalancedTables`: the left/right pair and the `place` rule
//!   - `OccupancyStats`: min / max / mean bucket occupancy
//! - **Service Layer** (`service.rs`)
//!   - `AllocationService`: hash preimages to primes and place them, with
//!     logging and metrics
//!
//! ## Invariants
//!
//! - Ties between the two candidate buckets go to the left table.
//! - A bucket keeps insertion order; it decides the later even/odd split.

pub mod domain;
pub mod error;
pub mod service;

pub use domain::{BalancedTables, Bucket, HashTable, OccupancyStats, Placement};
pub use error::AllocationError;
pub use service::{AllocationService, AllocationSummary};
