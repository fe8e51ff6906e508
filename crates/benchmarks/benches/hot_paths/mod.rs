//! # Hot Path Benchmarks
//!
//! - `pb_01_hashing` - hash-to-prime retry loop and bin reduction
//! - `pb_02_allocation` - bulk insertion into the balanced tables
//! - `pb_03_bucket_build` - pad search and generator acceptance
//! - `pb_04_checker` - one modular exponentiation per set member
//! - `pb_05_query` - `A <- A^e mod N` at 1024 to 3072 bits

pub mod pb_01_hashing;
pub mod pb_02_allocation;
pub mod pb_03_bucket_build;
pub mod pb_04_checker;
pub mod pb_05_query;
