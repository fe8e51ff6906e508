//! Consumer task
//!
//! Owns one shard and the receiving end of that shard's queue. Each
//! exponentiation runs on the blocking pool with the shard moved into it,
//! so async workers stay free for queue and timer polling.

use std::time::Duration;

use pb_telemetry::{
    metric_inc, time_histogram, EXPONENTIATION_DURATION, QUERY_JOBS_ABANDONED,
    QUERY_JOBS_COMPLETED,
};
use tokio::sync::mpsc::Receiver;
use tracing::debug;

use crate::domain::{CancellationSignal, Job, QueueMessage, Shard};
use crate::error::EngineError;
use crate::report::ConsumerReport;

pub(crate) struct Consumer {
    id: usize,
    /// Out only while a job is running on the blocking pool
    shard: Option<Shard>,
    receiver: Receiver<QueueMessage>,
    completed: u64,
}

impl Consumer {
    pub(crate) fn new(shard: Shard, receiver: Receiver<QueueMessage>) -> Self {
        Self {
            id: shard.id(),
            shard: Some(shard),
            receiver,
            completed: 0,
        }
    }

    /// Block on the queue until the shutdown sentinel arrives.
    pub(crate) async fn run_bounded(mut self) -> Result<(ConsumerReport, Shard), EngineError> {
        while let Some(message) = self.receiver.recv().await {
            match message {
                QueueMessage::Job(job) => self.process(job).await?,
                QueueMessage::Shutdown => break,
            }
        }
        self.finish().await
    }

    /// Poll the queue with a timeout so cancellation is seen within `poll`
    /// even when idle.
    pub(crate) async fn run_soak(
        mut self,
        cancel: CancellationSignal,
        poll: Duration,
    ) -> Result<(ConsumerReport, Shard), EngineError> {
        while !cancel.is_cancelled() {
            match tokio::time::timeout(poll, self.receiver.recv()).await {
                Ok(Some(QueueMessage::Job(job))) => self.process(job).await?,
                Ok(Some(QueueMessage::Shutdown)) | Ok(None) => break,
                Err(_) => continue,
            }
        }
        self.finish().await
    }

    async fn process(&mut self, job: Job) -> Result<(), EngineError> {
        let _timer = time_histogram!(EXPONENTIATION_DURATION);
        let mut shard = self.take_shard()?;
        let (shard, applied) = tokio::task::spawn_blocking(move || {
            let applied = shard.apply(&job);
            (shard, applied)
        })
        .await
        .map_err(|e| EngineError::WorkerFailed(e.to_string()))?;
        self.shard = Some(shard);
        applied?;
        self.completed += 1;
        metric_inc!(QUERY_JOBS_COMPLETED);
        Ok(())
    }

    fn take_shard(&mut self) -> Result<Shard, EngineError> {
        self.shard.take().ok_or_else(|| {
            EngineError::WorkerFailed(format!("consumer {} lost its shard", self.id))
        })
    }

    /// Close the queue and count whatever was still buffered.
    async fn finish(mut self) -> Result<(ConsumerReport, Shard), EngineError> {
        self.receiver.close();
        let mut abandoned = 0u64;
        while let Some(message) = self.receiver.recv().await {
            if let QueueMessage::Job(_) = message {
                abandoned += 1;
            }
        }
        QUERY_JOBS_ABANDONED.inc_by(abandoned as f64);

        let shard = self.take_shard()?;
        let report = ConsumerReport {
            id: self.id,
            completed: self.completed,
            abandoned,
            shard_len: shard.len(),
        };
        debug!(
            consumer = report.id,
            completed = report.completed,
            abandoned = report.abandoned,
            "Consumer finished"
        );
        Ok((report, shard))
    }
}
