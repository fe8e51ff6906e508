//! # Construction Flow
//!
//! Signature set → two-choice placement → per-bucket modulus build →
//! persistence → reload → signature check.

#[cfg(test)]
mod tests {
    use super::super::fixtures::{built_tables, pad_primes, PRIME_BITS};
    use pb_01_prime_hashing::{is_probable_prime, PrimeHasher};
    use pb_03_bin_modulus::{build_bucket, check_bucket_invariants, BuildConfig};
    use pb_04_signature_checker::SignatureChecker;
    use pb_06_table_store::{FileTableStore, InMemoryTableStore, TableRepository};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared_types::{BigUint, BuiltTable, TableSide};

    #[test]
    fn test_every_signature_lands_in_exactly_one_set() {
        let (left, right) = built_tables(6, 80, 1);

        assert_eq!(left.side(), TableSide::Left);
        assert_eq!(right.side(), TableSide::Right);
        // Each bucket carries one pad per subset on top of the signatures
        assert_eq!(left.member_count() + right.member_count(), 80 + 4 * 6);
    }

    #[test]
    fn test_every_bucket_satisfies_its_invariants() {
        let (left, right) = built_tables(5, 60, 2);
        for table in [&left, &right] {
            for (record, factors) in table.iter() {
                assert!(check_bucket_invariants(record, factors, 40).is_ok());
                assert!(is_probable_prime(&factors.factor_p, 40));
                assert!(is_probable_prime(&factors.factor_q, 40));
                assert!(record.generator >= BigUint::from(2u32));
                assert!(record.generator < record.modulus);
            }
        }
    }

    #[test]
    fn test_signature_members_have_configured_size() {
        let (left, _) = built_tables(4, 40, 3);
        let (_, factors) = left.iter().next().unwrap();
        // Signature primes precede the pad in each set
        let signatures = &factors.set_p[..factors.set_p.len() - 1];
        assert!(signatures.iter().all(|p| p.bits() == PRIME_BITS));
    }

    #[test]
    fn test_persisted_tables_check_clean_and_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let (left, right) = built_tables(6, 90, 4);

        let mut repository = TableRepository::new(FileTableStore::open(dir.path()).unwrap());
        repository.save_table(&left).unwrap();
        repository.save_table(&right).unwrap();

        let reopened = TableRepository::new(FileTableStore::open(dir.path()).unwrap());
        assert_eq!(reopened.load_table(TableSide::Left).unwrap(), left);
        assert_eq!(reopened.load_table(TableSide::Right).unwrap(), right);

        let checker = SignatureChecker::new();
        let first = checker.check_persisted(&reopened).unwrap();
        let second = checker.check_persisted(&reopened).unwrap();
        assert_eq!(first.hits, 0);
        assert_eq!(first.hits, second.hits);
        assert_eq!(first.members_checked, (90 + 4 * 6) as u64);
        assert_eq!(first.buckets_scanned, 12);
    }

    #[test]
    fn test_identity_generators_hit_every_member() {
        let (mut left, mut right) = built_tables(4, 50, 5);
        for table in [&mut left, &mut right] {
            for record in table.buckets_mut() {
                record.generator = BigUint::from(1u32);
            }
        }

        let mut repository = TableRepository::new(InMemoryTableStore::new());
        repository.save_table(&left).unwrap();
        repository.save_table(&right).unwrap();

        let report = SignatureChecker::new().check_persisted(&repository).unwrap();
        assert_eq!(report.hits, report.members_checked);
        assert_eq!(report.hits, (50 + 4 * 4) as u64);
    }

    // The same prime twice in one bucket: both copies land in setP, both
    // enter P - 1, and the checker's by-value exclusion drops both.
    #[test]
    fn test_repeated_prime_flows_through_build_and_check() {
        let hasher = PrimeHasher::new(PRIME_BITS).unwrap();
        let repeated = hasher.hash_to_prime(b"repeated");
        let (a, b) = (hasher.hash_to_prime(b"a"), hasher.hash_to_prime(b"b"));
        assert!(repeated != a && repeated != b && a != b);

        let primes = vec![repeated.clone(), a.clone(), repeated.clone(), b.clone()];
        let built = build_bucket(
            &primes,
            &pad_primes(6),
            &BuildConfig::default(),
            &mut StdRng::seed_from_u64(6),
        )
        .unwrap();
        let factors = &built.factors;

        assert_eq!(&factors.set_p[..2], &[repeated.clone(), repeated.clone()]);
        assert_eq!(&factors.set_q[..2], &[a, b]);
        let pad_p = &factors.set_p[2];
        assert_eq!(
            factors.factor_p,
            BigUint::from(2u32) * &repeated * &repeated * pad_p + BigUint::from(1u32)
        );
        assert!(check_bucket_invariants(&built.record, factors, 40).is_ok());

        let checker = SignatureChecker::new();
        let clean = BuiltTable::new(TableSide::Left, vec![built.record.clone()], vec![factors.clone()])
            .unwrap();
        let report = checker.check(&[clean]);
        assert_eq!(report.hits, 0);
        assert_eq!(report.members_checked, 6);

        // g^(r^2) strips both copies of r from g's order mod P, so the
        // exponent 2 * pad (every r excluded) collapses it for each copy.
        let mut stripped = built.record.clone();
        stripped.generator = built
            .record
            .generator
            .modpow(&(&repeated * &repeated), &built.record.modulus);
        let tampered =
            BuiltTable::new(TableSide::Left, vec![stripped], vec![factors.clone()]).unwrap();
        assert_eq!(checker.check(&[tampered]).hits, 2);
    }
}
