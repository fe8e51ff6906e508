//! Domain Layer - Pure allocation logic
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod balanced;
pub mod bucket;
pub mod stats;
pub mod table;

pub use balanced::{BalancedTables, Placement};
pub use bucket::Bucket;
pub use stats::OccupancyStats;
pub use table::HashTable;
