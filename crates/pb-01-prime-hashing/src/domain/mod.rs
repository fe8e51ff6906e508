//! Domain Layer - Pure hashing logic
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Outputs depend only on (salt, preimage)

pub mod bin_hash;
pub mod keyed_hash;
pub mod primality;
pub mod prime_hash;

pub use bin_hash::{BinHasher, BinHasherPair};
pub use keyed_hash::{HashState, KeyedBlake2b, MAX_OUTPUT_BITS, MIN_OUTPUT_BITS};
pub use primality::{is_probable_prime, FACTOR_ROUNDS, OFFLINE_ROUNDS, SERVING_ROUNDS};
pub use prime_hash::{PrimeHasher, PrimeWithRetries};
