//! # Shared Types Crate
//!
//! Domain entities shared by all Prime-Bins subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the persisted `(generator, modulus)` and
//!   `(P, Q, setP, setQ)` record shapes are defined here and nowhere else.
//! - **Typed Transitions**: a pre-build bucket (a list of primes) and a built
//!   bucket (`BucketRecord` + `FactorRecord`) are distinct types; the modulus
//!   builder consumes one and produces the other.
//! - **No Ambient State**: tables are plain owned values handed between
//!   components.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
