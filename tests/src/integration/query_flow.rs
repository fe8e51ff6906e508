//! # Query Flow
//!
//! The query engine driven through its blocking entry point, over random
//! tables and over tables produced by the modulus builder.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::super::fixtures::built_tables;
    use pb_05_query_engine::{
        entries_from_table, random_entries, EngineConfigBuilder, JobFactory, QueryEngine,
        ShardLayout,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bounded_run_over_random_table() {
        let config = EngineConfigBuilder::new()
            .producers(4)
            .consumers(8)
            .prime_bits(32)
            .bounded(100)
            .rng_seed(9)
            .build()
            .unwrap();
        let entries = random_entries(64, 128, &mut StdRng::seed_from_u64(9)).unwrap();

        let report = QueryEngine::new(config).unwrap().run(entries).unwrap().report;

        assert_eq!(report.mode, "bounded");
        assert_eq!(report.jobs_submitted(), 800);
        assert_eq!(report.jobs_completed(), 800);
        assert_eq!(report.remaining(), 0);
        assert_eq!(report.producers_terminated(), 0);
    }

    // Serving a built table must leave every modulus in place and match a
    // single-threaded replay of the same job stream.
    #[test]
    fn test_serving_built_table_matches_replay() {
        let (left, _) = built_tables(6, 60, 21);
        let entries = entries_from_table(&left).unwrap();
        assert_eq!(entries.len(), 6);

        let config = EngineConfigBuilder::new()
            .producers(1)
            .consumers(1)
            .prime_bits(32)
            .bounded(30)
            .rng_seed(5)
            .build()
            .unwrap();
        let outcome = QueryEngine::new(config.clone())
            .unwrap()
            .run(entries.clone())
            .unwrap();
        assert_eq!(outcome.report.jobs_completed(), 60);

        let layout = ShardLayout::new(entries.len(), 1).unwrap();
        let factory = JobFactory::new(&config, layout).unwrap();
        let mut expected = layout.partition(entries).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..30 {
            for routed in factory.next_jobs(&mut rng).unwrap() {
                expected[routed.shard].apply(&routed.job).unwrap();
            }
        }
        assert_eq!(outcome.shards, expected);

        let served = outcome.shards[0].entries();
        for (entry, record) in served.iter().zip(left.buckets()) {
            assert_eq!(entry.modulus(), &record.modulus);
            assert!(entry.value() < entry.modulus());
        }
    }

    #[test]
    fn test_soak_run_drains_cleanly() {
        let config = EngineConfigBuilder::new()
            .producers(3)
            .consumers(2)
            .queue_capacity(2)
            .prime_bits(32)
            .poll_interval(Duration::from_millis(10))
            .grace_period(Duration::from_secs(5))
            .soak(Duration::from_millis(200))
            .build()
            .unwrap();
        let entries = random_entries(16, 96, &mut StdRng::seed_from_u64(3)).unwrap();

        let report = QueryEngine::new(config).unwrap().run(entries).unwrap().report;

        assert_eq!(report.mode, "soak");
        assert_eq!(
            report.jobs_completed() + report.jobs_abandoned(),
            report.jobs_submitted()
        );
        assert_eq!(report.producers.len(), 3);
        assert_eq!(report.consumers.len(), 2);
    }
}
