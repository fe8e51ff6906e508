//! Signature checker service

use std::time::{Duration, Instant};

use pb_06_table_store::{TableCodec, TableRepository, TableStore};
use pb_telemetry::{SIGNATURE_HITS, SIGNATURE_MEMBERS_CHECKED};
use rayon::prelude::*;
use shared_types::BuiltTable;
use tracing::{debug, info};

use crate::domain::{bucket_hits, BucketHits};
use crate::error::CheckError;

/// Aggregate result of one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub hits: u64,
    pub members_checked: u64,
    pub buckets_scanned: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct SignatureChecker {
    parallel: bool,
}

impl Default for SignatureChecker {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl SignatureChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Scan every bucket of every table.
    pub fn check(&self, tables: &[BuiltTable]) -> CheckReport {
        let start = Instant::now();
        let mut total = BucketHits::default();
        let mut buckets_scanned = 0;

        for table in tables {
            let table_total = self.check_table(table);
            debug!(
                side = %table.side(),
                buckets = table.len(),
                members = table_total.members,
                hits = table_total.hits,
                "Scanned table"
            );
            total = total.merge(table_total);
            buckets_scanned += table.len();
        }

        SIGNATURE_MEMBERS_CHECKED.inc_by(total.members as f64);
        SIGNATURE_HITS.inc_by(total.hits as f64);

        let report = CheckReport {
            hits: total.hits,
            members_checked: total.members,
            buckets_scanned,
            elapsed: start.elapsed(),
        };
        info!(
            hits = report.hits,
            members = report.members_checked,
            buckets = report.buckets_scanned,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Signature check complete"
        );
        report
    }

    /// Load both sides from `repository` and scan them.
    pub fn check_persisted<S: TableStore, C: TableCodec>(
        &self,
        repository: &TableRepository<S, C>,
    ) -> Result<CheckReport, CheckError> {
        let tables = repository.load_tables()?;
        if tables.iter().all(BuiltTable::is_empty) {
            return Err(CheckError::NoTables);
        }
        Ok(self.check(&tables))
    }

    fn check_table(&self, table: &BuiltTable) -> BucketHits {
        if self.parallel {
            table
                .buckets()
                .par_iter()
                .zip(table.factors().par_iter())
                .map(|(record, factors)| bucket_hits(record, factors))
                .reduce(BucketHits::default, BucketHits::merge)
        } else {
            table
                .iter()
                .map(|(record, factors)| bucket_hits(record, factors))
                .fold(BucketHits::default(), BucketHits::merge)
        }
    }
}
