//! # PB-03 Bin Modulus
//!
//! Turns each pre-build bucket into a `(g, N)` serving pair plus the
//! `(P, Q, setP, setQ)` record used by the checker.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): pure number theory, no I/O
//!   - `cofactor`: even/odd split of a bucket into `setP` / `setQ`
//!   - `pad`: pad-prime list and the sequential-cursor factor search
//!   - `generator`: quadratic-residue generator draw and order checks
//!   - `bucket`: the full per-bucket build
//!   - `invariants`: post-build verification
//! - **Service Layer** (`service.rs`): `ModulusBuilder` builds whole tables,
//!   in parallel, with logging and metrics
//! - **Adapters** (`adapters/`): random pad-prime list generation
//!
//! ## Invariants
//!
//! - `P = 2 * pad_p * prod(setP) + 1` and `Q = 2 * pad_q * prod(setQ) + 1`
//!   are both probable primes.
//! - For every `p` in `setP`, `g^((P-1)/p) mod P != 1`; same for `setQ`/`Q`.
//! - A build either converts every bucket or fails as a whole.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;

pub use adapters::generate_pad_primes;
pub use config::{BuildConfig, BuildConfigBuilder};
pub use domain::{
    build_bucket, check_bucket_invariants, find_generator, find_pad, generator_is_valid,
    split_cofactors, BuiltBucket, CofactorSets, GeneratorSearch, PadPrimeList, PadSelection,
    Subset,
};
pub use error::{BuildError, InvariantViolation};
pub use service::{BuildSummary, ModulusBuilder};
