//! Shared fixtures
//!
//! Small parameters keep every build in the millisecond range: 24-bit
//! signature primes and 32-bit pads.

use pb_01_prime_hashing::{HashingConfig, HashingConfigBuilder};
use pb_02_balanced_allocation::AllocationService;
use pb_03_bin_modulus::{generate_pad_primes, BuildConfigBuilder, ModulusBuilder, PadPrimeList};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_types::BuiltTable;

pub const PRIME_BITS: usize = 24;
pub const PAD_BITS: usize = 32;

pub fn hashing_config() -> HashingConfig {
    HashingConfigBuilder::new()
        .prime_bits(PRIME_BITS)
        .build()
        .expect("valid hashing config")
}

pub fn pad_primes(seed: u64) -> PadPrimeList {
    generate_pad_primes(2_000, PAD_BITS, &mut StdRng::seed_from_u64(seed))
        .expect("pad generation")
}

/// Hash `signatures` values into `table_size` buckets per side and build
/// both tables with invariant checking on.
pub fn built_tables(table_size: usize, signatures: u64, seed: u64) -> (BuiltTable, BuiltTable) {
    let mut allocation =
        AllocationService::new(&hashing_config(), table_size).expect("allocation service");
    let values: Vec<u64> = (0..signatures).map(|i| i * 7_919 + seed).collect();
    allocation.insert_values(&values).expect("placement");

    let config = BuildConfigBuilder::new()
        .verify(true)
        .rng_seed(seed)
        .build()
        .expect("build config");
    ModulusBuilder::new(config, pad_primes(seed))
        .expect("builder")
        .build_tables(allocation.into_tables())
        .expect("table build")
}
