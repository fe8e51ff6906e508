//! Benchmark utilities for the Prime-Bins hot paths
pub mod utils {
    use pb_01_prime_hashing::PrimeHasher;
    use pb_03_bin_modulus::{generate_pad_primes, PadPrimeList};
    use pb_05_query_engine::JobFactory;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared_types::Prime;

    /// Fixed seed so runs compare like with like.
    pub const BENCH_SEED: u64 = 0x5eed;

    pub fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(BENCH_SEED)
    }

    /// Hex preimages, the shape the query engine hashes.
    pub fn random_preimages(count: usize) -> Vec<Vec<u8>> {
        let mut rng = seeded_rng();
        (0..count)
            .map(|_| JobFactory::random_preimage(&mut rng).into_bytes())
            .collect()
    }

    /// `count` primes of `bits` bits, as one bucket would hold them.
    pub fn bucket_primes(count: usize, bits: usize) -> Vec<Prime> {
        let hasher = PrimeHasher::new(bits).expect("valid bit length");
        (0..count)
            .map(|i| hasher.hash_to_prime(i.to_string().as_bytes()))
            .collect()
    }

    pub fn pad_primes(count: usize, bits: usize) -> PadPrimeList {
        generate_pad_primes(count, bits, &mut seeded_rng()).expect("pad generation")
    }
}
