//! Domain Layer - Pure number theory
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Randomness only through an injected `Rng`

pub mod bucket;
pub mod cofactor;
pub mod generator;
pub mod invariants;
pub mod pad;

pub use bucket::{build_bucket, BuiltBucket};
pub use cofactor::{split_cofactors, CofactorSets, Subset};
pub use generator::{draw_generator, find_generator, generator_is_valid, GeneratorSearch};
pub use invariants::check_bucket_invariants;
pub use pad::{find_pad, PadPrimeList, PadSelection};
