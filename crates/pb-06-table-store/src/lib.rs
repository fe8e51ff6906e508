//! # PB-06 Table Store
//!
//! Persists built tables and the pad-prime list as named byte blobs.
//!
//! ## Architecture
//!
//! - **Ports** (`ports.rs`): `TableStore` (named blobs) and `TableCodec`
//!   (records to bytes)
//! - **Adapters** (`adapters/`): `FileTableStore` (one file per name,
//!   atomic replace) and `InMemoryTableStore` (tests)
//! - **Repository** (`repository.rs`): `TableRepository` maps tables to
//!   names: `leftTable` / `PQleftTable`, `rightTable` / `PQrightTable`,
//!   and `primes` for the pad list
//!
//! ## Invariants
//!
//! - Round-trip is lossless for arbitrary-precision integers.
//! - A loaded table's two arrays have the same length.

pub mod adapters;
pub mod error;
pub mod ports;
pub mod repository;

pub use adapters::{FileTableStore, InMemoryTableStore};
pub use error::StoreError;
pub use ports::{BincodeTableCodec, TableCodec, TableStore};
pub use repository::{factor_table_name, TableRepository, PAD_PRIMES_NAME};
