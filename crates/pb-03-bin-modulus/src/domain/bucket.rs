//! Per-bucket build: primes in, `(g, N)` and `(P, Q, setP, setQ)` out

use rand::Rng;
use shared_types::{product, BucketRecord, FactorRecord, Prime};

use super::cofactor::{split_cofactors, Subset};
use super::generator::find_generator;
use super::pad::{find_pad, PadPrimeList};
use crate::config::BuildConfig;
use crate::error::BuildError;

/// Output of one bucket build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltBucket {
    pub record: BucketRecord,
    pub factors: FactorRecord,
    pub generator_attempts: u32,
}

/// Build one bucket.
///
/// The `P` search scans the pad list from the start; the `Q` search resumes
/// after the pad chosen for `P`, so the two factors never share a list
/// position. Each chosen pad is appended to its set.
pub fn build_bucket<R: Rng + ?Sized>(
    primes: &[Prime],
    pads: &PadPrimeList,
    config: &BuildConfig,
    rng: &mut R,
) -> Result<BuiltBucket, BuildError> {
    let sets = split_cofactors(primes);
    let mut set_p = sets.set_p;
    let mut set_q = sets.set_q;

    let selection_p = find_pad(pads, 0, &product(&set_p), config.factor_rounds, Subset::P)?;
    let selection_q = find_pad(
        pads,
        selection_p.position + 1,
        &product(&set_q),
        config.factor_rounds,
        Subset::Q,
    )?;

    set_p.push(selection_p.pad);
    set_q.push(selection_q.pad);

    let factor_p = selection_p.factor;
    let factor_q = selection_q.factor;

    let search = find_generator(
        &set_p,
        &set_q,
        &factor_p,
        &factor_q,
        config.max_generator_attempts,
        rng,
    )?;

    Ok(BuiltBucket {
        record: BucketRecord {
            generator: search.generator,
            modulus: &factor_p * &factor_q,
        },
        factors: FactorRecord {
            factor_p,
            factor_q,
            set_p,
            set_q,
        },
        generator_attempts: search.attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::generate_pad_primes;
    use crate::domain::generator::generator_is_valid;
    use num_bigint_dig::BigUint;
    use num_traits::One;
    use pb_01_prime_hashing::{is_probable_prime, PrimeHasher};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bucket_primes(count: u32) -> Vec<Prime> {
        let hasher = PrimeHasher::new(16).unwrap();
        (0..count)
            .map(|i| hasher.hash_to_prime(format!("sig-{}", i).as_bytes()))
            .collect()
    }

    fn pads() -> PadPrimeList {
        let mut rng = StdRng::seed_from_u64(42);
        generate_pad_primes(1_000, 32, &mut rng).unwrap()
    }

    #[test]
    fn test_build_satisfies_factor_shape() {
        let primes = bucket_primes(5);
        let mut rng = StdRng::seed_from_u64(1);
        let built = build_bucket(&primes, &pads(), &BuildConfig::default(), &mut rng).unwrap();
        let f = &built.factors;

        // Original primes keep their parity positions, pad appended last
        assert_eq!(f.set_p.len(), 4);
        assert_eq!(f.set_q.len(), 3);
        assert_eq!(&f.set_p[..3], &[primes[0].clone(), primes[2].clone(), primes[4].clone()]);
        assert_eq!(&f.set_q[..2], &[primes[1].clone(), primes[3].clone()]);

        let two = BigUint::from(2u32);
        assert_eq!(f.factor_p, &two * product(&f.set_p) + BigUint::one());
        assert_eq!(f.factor_q, &two * product(&f.set_q) + BigUint::one());
        assert!(is_probable_prime(&f.factor_p, 40));
        assert!(is_probable_prime(&f.factor_q, 40));
        assert_eq!(built.record.modulus, f.modulus());
    }

    #[test]
    fn test_build_generator_invariant() {
        let primes = bucket_primes(6);
        let mut rng = StdRng::seed_from_u64(2);
        let built = build_bucket(&primes, &pads(), &BuildConfig::default(), &mut rng).unwrap();
        let f = &built.factors;

        assert!(built.generator_attempts >= 1);
        assert!(generator_is_valid(
            &built.record.generator,
            &f.set_p,
            &f.set_q,
            &f.factor_p,
            &f.factor_q
        ));
    }

    #[test]
    fn test_pad_positions_differ() {
        let pad_list = pads();
        let mut rng = StdRng::seed_from_u64(3);
        let built = build_bucket(&[], &pad_list, &BuildConfig::default(), &mut rng).unwrap();
        let f = &built.factors;

        // Empty bucket: each set holds only its pad
        assert_eq!(f.set_p.len(), 1);
        assert_eq!(f.set_q.len(), 1);
        let position = |pad: &BigUint| pad_list.as_slice().iter().position(|p| p == pad);
        assert!(position(&f.set_p[0]) < position(&f.set_q[0]));
        assert_ne!(f.factor_p, f.factor_q);
    }

    #[test]
    fn test_exhausted_pad_list_fails_bucket() {
        let mut rng = StdRng::seed_from_u64(4);
        let result = build_bucket(
            &bucket_primes(3),
            &PadPrimeList::default(),
            &BuildConfig::default(),
            &mut rng,
        );
        assert!(matches!(
            result,
            Err(BuildError::PadListExhausted {
                subset: Subset::P,
                ..
            })
        ));
    }
}
