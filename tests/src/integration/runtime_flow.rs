//! # Runtime Flow
//!
//! The `prime-bins` commands in the order an operator runs them:
//! `pads` → `build` → `check` → `query --from-table`, all against one
//! temporary data directory.

#[cfg(test)]
mod tests {
    use pb_runtime::cli::{
        BuildArgs, CheckArgs, EngineArgs, PadsArgs, QueryArgs, SideArg, SoakArgs, SweepArgs,
    };
    use pb_runtime::commands::{build, check, open_repository, pads, query, sweep};
    use pb_runtime::RuntimeConfig;
    use shared_types::TableSide;

    use super::super::fixtures::{PAD_BITS, PRIME_BITS};

    fn config_in(dir: &std::path::Path) -> RuntimeConfig {
        let mut config = RuntimeConfig {
            data_dir: dir.to_path_buf(),
            results_file: dir.join("qTests.txt"),
            table_size: 5,
            ..RuntimeConfig::default()
        };
        config.hashing.prime_bits = PRIME_BITS;
        config
    }

    fn engine_args(from_table: Option<SideArg>) -> EngineArgs {
        EngineArgs {
            producers: 2,
            consumers: 2,
            queue_capacity: 16,
            modulus_bits: 128,
            table_size: None,
            from_table,
            seed: Some(13),
        }
    }

    #[test]
    fn test_operator_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let pad_list = pads::execute(
            &PadsArgs {
                count: 1_500,
                bits: PAD_BITS,
                seed: Some(1),
            },
            &config,
        )
        .unwrap();
        assert_eq!(pad_list.len(), 1_500);

        let built = build::execute(
            &BuildArgs {
                table_size: None,
                sig_set_size: 70,
                value_range: 2_000_000,
                prime_bits: None,
                verify: true,
                sequential: false,
                seed: Some(2),
            },
            &config,
        )
        .unwrap();
        assert_eq!(built.buckets_per_side, 5);
        assert_eq!(built.allocation.inserted, 70);
        assert_eq!(built.members, 70 + 4 * 5);

        let repository = open_repository(&config).unwrap();
        assert!(repository.has_table(TableSide::Left).unwrap());
        assert!(repository.has_table(TableSide::Right).unwrap());

        let report = check::execute(&CheckArgs { sequential: true }, &config).unwrap();
        assert_eq!(report.hits, 0);
        assert_eq!(report.members_checked, built.members as u64);
        assert_eq!(report.buckets_scanned, 10);

        let served = query::execute_bounded(
            &QueryArgs {
                engine: engine_args(Some(SideArg::Right)),
                jobs: 10,
            },
            &config,
        )
        .unwrap();
        assert_eq!(served.jobs_completed(), 2 * 10 * 2);
        assert_eq!(served.remaining(), 0);
    }

    #[test]
    fn test_query_from_missing_table_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let err = query::execute_bounded(
            &QueryArgs {
                engine: engine_args(Some(SideArg::Left)),
                jobs: 1,
            },
            &config,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load"));
    }

    #[test]
    fn test_sweep_appends_one_line_per_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let args = SweepArgs {
            producers_min: 1,
            producers_max: 3,
            consumers_min: 1,
            consumers_cap: 5,
            bins_per_consumer: 2,
            modulus_bits: 64,
            total_jobs: 24,
            queue_capacity: 8,
            results_file: None,
            seed: Some(8),
        };

        let results = sweep::execute(&args, &config).unwrap();
        let written = std::fs::read_to_string(&config.results_file).unwrap();
        assert_eq!(written.lines().count(), results.len());
        assert!(written.lines().all(|line| line.starts_with("Producers: ")));
    }

    #[test]
    fn test_soak_writes_worker_counts_and_header() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let args = SoakArgs {
            engine: EngineArgs {
                table_size: Some(8),
                ..engine_args(None)
            },
            duration_secs: 1,
            grace_secs: 5,
            poll_ms: 20,
            results_file: None,
        };

        let report = query::execute_soak(&args, &config).unwrap();
        let written = std::fs::read_to_string(&config.results_file).unwrap();
        let lines: Vec<&str> = written.lines().collect();

        for consumer in &report.consumers {
            let line = format!("Consumer: {} completed: {} jobs", consumer.id, consumer.completed);
            assert!(lines.contains(&line.as_str()), "missing {:?}", line);
        }
        for producer in &report.producers {
            let line = format!("Producer: {} completed: {} jobs", producer.id, producer.iterations);
            assert!(lines.contains(&line.as_str()), "missing {:?}", line);
        }
        assert!(lines.iter().any(|line| line.starts_with("Number of CPUs: ")));
        assert!(lines.contains(&"Producers: 2, Consumers: 2"));
        assert!(lines.contains(&"Bins: 8"));
        assert_eq!(lines.last(), Some(&"N size: 128"));
        assert_eq!(lines.len(), 2 + 2 + 4);
    }
}
