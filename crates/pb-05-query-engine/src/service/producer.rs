//! Producer task
//!
//! Counters live behind an `Arc` so the driver can still report them for a
//! producer it had to abort.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use pb_telemetry::{metric_inc, QUERY_JOBS_SUBMITTED, QUEUE_FULL_RETRIES};
use rand::rngs::StdRng;
use tokio::sync::mpsc::error::SendTimeoutError;
use tokio::sync::mpsc::Sender;
use tracing::debug;

use crate::domain::{CancellationSignal, JobFactory, QueueMessage, RoutedJob};
use crate::error::EngineError;
use crate::report::ProducerReport;

#[derive(Debug, Default)]
pub(crate) struct ProducerCounters {
    iterations: AtomicU64,
    jobs_submitted: AtomicU64,
}

impl ProducerCounters {
    pub(crate) fn report(&self, id: usize, terminated: bool) -> ProducerReport {
        ProducerReport {
            id,
            iterations: self.iterations.load(Ordering::Relaxed),
            jobs_submitted: self.jobs_submitted.load(Ordering::Relaxed),
            terminated,
        }
    }

    fn job_submitted(&self) {
        self.jobs_submitted.fetch_add(1, Ordering::Relaxed);
        metric_inc!(QUERY_JOBS_SUBMITTED);
    }
}

pub(crate) struct Producer {
    pub(crate) id: usize,
    pub(crate) factory: Arc<JobFactory>,
    pub(crate) senders: Vec<Sender<QueueMessage>>,
    pub(crate) counters: Arc<ProducerCounters>,
    pub(crate) rng: StdRng,
}

impl Producer {
    fn sender(&self, routed: &RoutedJob) -> Result<&Sender<QueueMessage>, EngineError> {
        self.senders
            .get(routed.shard)
            .ok_or(EngineError::QueueClosed {
                shard: routed.shard,
            })
    }

    /// Submit exactly `iterations` preimages, waiting on full queues.
    pub(crate) async fn run_bounded(mut self, iterations: u64) -> Result<(), EngineError> {
        for _ in 0..iterations {
            let jobs = self.factory.next_jobs(&mut self.rng)?;
            for routed in jobs {
                let shard = routed.shard;
                self.sender(&routed)?
                    .send(QueueMessage::Job(routed.job))
                    .await
                    .map_err(|_| EngineError::QueueClosed { shard })?;
                self.counters.job_submitted();
            }
            self.counters.iterations.fetch_add(1, Ordering::Relaxed);
        }
        debug!(producer = self.id, iterations, "Producer finished");
        Ok(())
    }

    /// Submit until cancelled. A push that waits longer than `poll` is
    /// retried after re-checking the signal; a closed queue ends the run.
    pub(crate) async fn run_soak(
        mut self,
        cancel: CancellationSignal,
        poll: Duration,
    ) -> Result<(), EngineError> {
        'produce: while !cancel.is_cancelled() {
            let jobs = self.factory.next_jobs(&mut self.rng)?;
            for routed in jobs {
                let sender = self.sender(&routed)?.clone();
                let mut message = QueueMessage::Job(routed.job);
                loop {
                    match sender.send_timeout(message, poll).await {
                        Ok(()) => {
                            self.counters.job_submitted();
                            break;
                        }
                        Err(SendTimeoutError::Timeout(returned)) => {
                            metric_inc!(QUEUE_FULL_RETRIES);
                            if cancel.is_cancelled() {
                                break 'produce;
                            }
                            message = returned;
                        }
                        Err(SendTimeoutError::Closed(_)) => break 'produce,
                    }
                }
            }
            self.counters.iterations.fetch_add(1, Ordering::Relaxed);
        }

        debug!(
            producer = self.id,
            iterations = self.counters.iterations.load(Ordering::Relaxed),
            "Producer observed cancellation"
        );
        Ok(())
    }
}
