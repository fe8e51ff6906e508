//! Engine driver
//!
//! Spawns one task per producer and per consumer on a multi-thread runtime
//! sized to the worker count, then drives the selected run mode to
//! completion.

use std::sync::Arc;
use std::time::Duration;

use pb_telemetry::{metric_inc, PRODUCERS_TERMINATED};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{info, warn};

use super::consumer::Consumer;
use super::producer::{Producer, ProducerCounters};
use crate::config::{EngineConfig, RunMode};
use crate::domain::{CancellationSignal, JobFactory, QueueMessage, Shard, ShardEntry, ShardLayout};
use crate::error::EngineError;
use crate::report::{ConsumerReport, EngineReport, ProducerReport};

/// Report plus the final shard state.
#[derive(Debug, Clone)]
pub struct EngineOutcome {
    pub report: EngineReport,
    pub shards: Vec<Shard>,
}

type ProducerHandle = JoinHandle<Result<(), EngineError>>;
type ConsumerHandle = JoinHandle<Result<(ConsumerReport, Shard), EngineError>>;

pub struct QueryEngine {
    config: EngineConfig,
    cancel: CancellationSignal,
}

impl QueryEngine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            cancel: CancellationSignal::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Handle for stopping a soak run early. The signal is monotone, so a
    /// cancelled engine stops any later soak run immediately.
    pub fn cancellation(&self) -> CancellationSignal {
        self.cancel.clone()
    }

    /// Run on a dedicated runtime. Must not be called from async context.
    pub fn run(&self, entries: Vec<ShardEntry>) -> Result<EngineOutcome, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.worker_threads())
            .thread_name("pb-query-worker")
            .enable_all()
            .build()
            .map_err(|e| EngineError::Runtime(e.to_string()))?;
        runtime.block_on(self.run_async(entries))
    }

    /// Run on the current runtime. `entries` holds one serving pair per
    /// bucket, in bucket order.
    pub async fn run_async(&self, entries: Vec<ShardEntry>) -> Result<EngineOutcome, EngineError> {
        let config = &self.config;
        let layout = ShardLayout::new(entries.len(), config.num_consumers)?;
        let factory = Arc::new(JobFactory::new(config, layout)?);
        let shards = layout.partition(entries)?;

        info!(
            mode = config.mode.name(),
            producers = config.num_producers,
            consumers = config.num_consumers,
            table_size = layout.table_size(),
            bins_per_shard = layout.bins_per_shard(),
            queue_capacity = config.queue_capacity,
            "Starting query engine"
        );

        let start = Instant::now();
        let (senders, receivers): (Vec<_>, Vec<_>) = (0..config.num_consumers)
            .map(|_| mpsc::channel::<QueueMessage>(config.queue_capacity))
            .unzip();

        let counters: Vec<Arc<ProducerCounters>> = (0..config.num_producers)
            .map(|_| Arc::new(ProducerCounters::default()))
            .collect();
        let producers: Vec<ProducerHandle> = counters
            .iter()
            .enumerate()
            .map(|(id, counters)| {
                let producer = Producer {
                    id,
                    factory: Arc::clone(&factory),
                    senders: senders.clone(),
                    counters: Arc::clone(counters),
                    rng: self.producer_rng(id),
                };
                match config.mode {
                    RunMode::Bounded { jobs_per_producer } => {
                        tokio::spawn(producer.run_bounded(jobs_per_producer))
                    }
                    RunMode::Soak { .. } => tokio::spawn(
                        producer.run_soak(self.cancel.clone(), config.poll_interval),
                    ),
                }
            })
            .collect();

        let consumers: Vec<ConsumerHandle> = shards
            .into_iter()
            .zip(receivers)
            .map(|(shard, receiver)| {
                let consumer = Consumer::new(shard, receiver);
                match config.mode {
                    RunMode::Bounded { .. } => tokio::spawn(consumer.run_bounded()),
                    RunMode::Soak { .. } => tokio::spawn(
                        consumer.run_soak(self.cancel.clone(), config.poll_interval),
                    ),
                }
            })
            .collect();

        let (producer_errors, terminated) = match config.mode {
            RunMode::Bounded { .. } => {
                let errors = join_producers(producers).await;
                for (shard, sender) in senders.iter().enumerate() {
                    if sender.send(QueueMessage::Shutdown).await.is_err() {
                        warn!(shard, "Consumer queue closed before shutdown");
                    }
                }
                (errors, vec![false; config.num_producers])
            }
            RunMode::Soak { duration } => {
                self.wait_then_cancel(duration).await;
                self.stop_producers(producers).await
            }
        };
        let producer_time = start.elapsed();
        drop(senders);

        let mut consumer_reports = Vec::with_capacity(config.num_consumers);
        let mut final_shards = Vec::with_capacity(config.num_consumers);
        let mut consumer_error = None;
        for handle in consumers {
            match flatten(handle.await) {
                Ok((report, shard)) => {
                    consumer_reports.push(report);
                    final_shards.push(shard);
                }
                Err(e) => {
                    consumer_error.get_or_insert(e);
                }
            }
        }
        let consumer_time = start.elapsed();

        // A failed consumer closes its queue, which is what producers report
        if let Some(e) = consumer_error.or(producer_errors.into_iter().next()) {
            return Err(e);
        }

        let report = EngineReport {
            mode: config.mode.name().to_string(),
            producers: counters
                .iter()
                .zip(terminated)
                .enumerate()
                .map(|(id, (counters, terminated))| counters.report(id, terminated))
                .collect::<Vec<ProducerReport>>(),
            consumers: consumer_reports,
            producer_time,
            consumer_time,
        };

        info!(
            mode = %report.mode,
            submitted = report.jobs_submitted(),
            completed = report.jobs_completed(),
            abandoned = report.jobs_abandoned(),
            terminated = report.producers_terminated(),
            producer_ms = report.producer_time.as_millis() as u64,
            consumer_ms = report.consumer_time.as_millis() as u64,
            "Query engine finished"
        );

        Ok(EngineOutcome {
            report,
            shards: final_shards,
        })
    }

    fn producer_rng(&self, id: usize) -> StdRng {
        match self.config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ id as u64),
            None => StdRng::from_entropy(),
        }
    }

    /// Sleep for `duration` (or until cancelled externally), then cancel.
    async fn wait_then_cancel(&self, duration: Duration) {
        let deadline = Instant::now() + duration;
        while !self.cancel.is_cancelled() {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            tokio::time::sleep((deadline - now).min(self.config.poll_interval)).await;
        }
        info!("Run duration elapsed, cancelling workers");
        self.cancel.cancel();
    }

    /// Give producers the grace period, then abort the rest.
    async fn stop_producers(&self, producers: Vec<ProducerHandle>) -> (Vec<EngineError>, Vec<bool>) {
        let grace_deadline = Instant::now() + self.config.grace_period;
        let mut errors = Vec::new();
        let mut terminated = Vec::with_capacity(producers.len());

        for (id, mut handle) in producers.into_iter().enumerate() {
            match tokio::time::timeout_at(grace_deadline, &mut handle).await {
                Ok(joined) => {
                    if let Err(e) = flatten(joined) {
                        errors.push(e);
                    }
                    terminated.push(false);
                }
                Err(_) => {
                    warn!(producer = id, "Producer still running after grace period, terminating");
                    handle.abort();
                    let _ = handle.await;
                    metric_inc!(PRODUCERS_TERMINATED);
                    terminated.push(true);
                }
            }
        }
        (errors, terminated)
    }
}

async fn join_producers(producers: Vec<ProducerHandle>) -> Vec<EngineError> {
    let mut errors = Vec::new();
    for handle in producers {
        if let Err(e) = flatten(handle.await) {
            errors.push(e);
        }
    }
    errors
}

fn flatten<T>(
    joined: Result<Result<T, EngineError>, tokio::task::JoinError>,
) -> Result<T, EngineError> {
    joined.map_err(|e| EngineError::WorkerFailed(e.to_string()))?
}
