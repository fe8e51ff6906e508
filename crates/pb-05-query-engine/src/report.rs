//! Run reports

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerReport {
    pub id: usize,
    /// Preimages hashed and fully routed
    pub iterations: u64,
    /// Jobs accepted by a queue
    pub jobs_submitted: u64,
    /// Aborted after the grace period
    pub terminated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerReport {
    pub id: usize,
    pub completed: u64,
    /// Jobs still queued when the consumer stopped
    pub abandoned: u64,
    pub shard_len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineReport {
    pub mode: String,
    pub producers: Vec<ProducerReport>,
    pub consumers: Vec<ConsumerReport>,
    /// From start until every producer was joined
    pub producer_time: Duration,
    /// From start until every consumer was joined
    pub consumer_time: Duration,
}

impl EngineReport {
    pub fn jobs_submitted(&self) -> u64 {
        self.producers.iter().map(|p| p.jobs_submitted).sum()
    }

    pub fn jobs_completed(&self) -> u64 {
        self.consumers.iter().map(|c| c.completed).sum()
    }

    pub fn jobs_abandoned(&self) -> u64 {
        self.consumers.iter().map(|c| c.abandoned).sum()
    }

    /// Submitted jobs neither completed nor abandoned.
    pub fn remaining(&self) -> u64 {
        self.jobs_submitted()
            .saturating_sub(self.jobs_completed() + self.jobs_abandoned())
    }

    pub fn producers_terminated(&self) -> usize {
        self.producers.iter().filter(|p| p.terminated).count()
    }
}

/// One cell of the parameter sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    pub producers: usize,
    pub consumers: usize,
    pub consumer_time: Duration,
    pub producer_time: Duration,
}

impl fmt::Display for SweepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Producers: {}, Consumers: {}, Con Time: {:.6}, Prod Time: {:.6}",
            self.producers,
            self.consumers,
            self.consumer_time.as_secs_f64(),
            self.producer_time.as_secs_f64()
        )
    }
}

/// Results-file rendering of a soak run: one line per worker, then the run
/// header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoakSummary {
    pub cpus: usize,
    pub table_size: usize,
    pub modulus_bits: usize,
    pub report: EngineReport,
}

impl fmt::Display for SoakSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for consumer in &self.report.consumers {
            writeln!(f, "Consumer: {} completed: {} jobs", consumer.id, consumer.completed)?;
        }
        for producer in &self.report.producers {
            writeln!(f, "Producer: {} completed: {} jobs", producer.id, producer.iterations)?;
        }
        writeln!(f, "Number of CPUs: {}", self.cpus)?;
        writeln!(
            f,
            "Producers: {}, Consumers: {}",
            self.report.producers.len(),
            self.report.consumers.len()
        )?;
        writeln!(f, "Bins: {}", self.table_size)?;
        write!(f, "N size: {}", self.modulus_bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> EngineReport {
        EngineReport {
            mode: "soak".to_string(),
            producers: vec![
                ProducerReport {
                    id: 0,
                    iterations: 5,
                    jobs_submitted: 10,
                    terminated: false,
                },
                ProducerReport {
                    id: 1,
                    iterations: 3,
                    jobs_submitted: 7,
                    terminated: true,
                },
            ],
            consumers: vec![
                ConsumerReport {
                    id: 0,
                    completed: 12,
                    abandoned: 2,
                    shard_len: 4,
                },
                ConsumerReport {
                    id: 1,
                    completed: 3,
                    abandoned: 0,
                    shard_len: 4,
                },
            ],
            producer_time: Duration::from_millis(10),
            consumer_time: Duration::from_millis(12),
        }
    }

    #[test]
    fn test_totals() {
        let report = report();
        assert_eq!(report.jobs_submitted(), 17);
        assert_eq!(report.jobs_completed(), 15);
        assert_eq!(report.jobs_abandoned(), 2);
        assert_eq!(report.remaining(), 0);
        assert_eq!(report.producers_terminated(), 1);
    }

    #[test]
    fn test_sweep_result_line() {
        let result = SweepResult {
            producers: 2,
            consumers: 7,
            consumer_time: Duration::from_millis(1500),
            producer_time: Duration::from_millis(250),
        };
        assert_eq!(
            result.to_string(),
            "Producers: 2, Consumers: 7, Con Time: 1.500000, Prod Time: 0.250000"
        );
    }

    #[test]
    fn test_soak_summary_lines() {
        let summary = SoakSummary {
            cpus: 16,
            table_size: 64,
            modulus_bits: 3072,
            report: report(),
        };
        let rendered = summary.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Consumer: 0 completed: 12 jobs",
                "Consumer: 1 completed: 3 jobs",
                "Producer: 0 completed: 5 jobs",
                "Producer: 1 completed: 3 jobs",
                "Number of CPUs: 16",
                "Producers: 2, Consumers: 2",
                "Bins: 64",
                "N size: 3072",
            ]
        );
        assert!(!rendered.ends_with('\n'));
    }
}
