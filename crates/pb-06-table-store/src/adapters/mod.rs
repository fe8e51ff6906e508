//! Storage adapters

mod file;
mod memory;

pub use file::FileTableStore;
pub use memory::InMemoryTableStore;
