//! # PB-01 Prime Hashing
//!
//! Deterministic hash-to-prime and salted bin-index hashing.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): pure functions, no I/O
//!   - `KeyedBlake2b`: salted BLAKE2b with a configurable output length
//!   - `PrimeHasher`: preimage → prime in `[2^(n-1), 2^n)`
//!   - `BinHasher` / `BinHasherPair`: preimage → bucket index, one salt per side
//!   - `primality`: Miller-Rabin / Baillie-PSW wrapper and confidence levels
//! - **Config** (`config.rs`): bit lengths and primality confidence
//!
//! ## Invariants
//!
//! - Every output of `PrimeHasher` is odd, probably prime and has exactly
//!   `n` bits.
//! - The retry loop extends the hashed input by one marker byte per attempt,
//!   so the result depends only on the preimage and the salt.
//! - `BinHasher::key_gen(x, size)` is always `< size`.
//!
//! ## Usage Example
//!
//! ```ignore
//! use pb_01_prime_hashing::{BinHasherPair, PrimeHasher};
//!
//! let hasher = PrimeHasher::new(86)?;
//! let prime = hasher.hash_to_prime(b"1234");
//! let bins = BinHasherPair::new(80)?;
//! let (left, right) = bins.candidates(&prime, 902)?;
//! ```

pub mod config;
pub mod domain;
pub mod error;

pub use config::{HashingConfig, HashingConfigBuilder};
pub use domain::{
    is_probable_prime, BinHasher, BinHasherPair, HashState, KeyedBlake2b, PrimeHasher,
    PrimeWithRetries, FACTOR_ROUNDS, MAX_OUTPUT_BITS, MIN_OUTPUT_BITS, OFFLINE_ROUNDS,
    SERVING_ROUNDS,
};
pub use error::HashError;
