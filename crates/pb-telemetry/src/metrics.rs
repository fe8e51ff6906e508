//! Prometheus metrics for Prime-Bins subsystems.
//!
//! All metrics follow the naming convention: `pb_<subsystem>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Histogram, HistogramOpts, Opts, Registry,
    TextEncoder,
};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // HASHING & ALLOCATION (Subsystems 1, 2)
    // =========================================================================

    /// Primes produced by the allocation service
    pub static ref PRIMES_HASHED: Counter = Counter::new(
        "pb_hashing_primes_total",
        "Total number of preimages hashed to primes during construction"
    ).expect("metric creation failed");

    /// Elements placed per side
    pub static ref ELEMENTS_PLACED: CounterVec = CounterVec::new(
        Opts::new("pb_allocation_elements_placed_total", "Elements placed by two-choice allocation"),
        &["side"]  // side: left/right
    ).expect("metric creation failed");

    // =========================================================================
    // MODULUS BUILDER (Subsystem 3)
    // =========================================================================

    /// Buckets converted to (g, N) pairs
    pub static ref BUCKETS_BUILT: CounterVec = CounterVec::new(
        Opts::new("pb_builder_buckets_built_total", "Buckets converted to generator/modulus pairs"),
        &["side"]
    ).expect("metric creation failed");

    /// Generator candidates drawn (accepted and rejected)
    pub static ref GENERATOR_DRAWS: Counter = Counter::new(
        "pb_builder_generator_draws_total",
        "Total generator candidates drawn"
    ).expect("metric creation failed");

    /// Per-bucket build duration
    pub static ref BUCKET_BUILD_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "pb_builder_bucket_duration_seconds",
            "Time spent building one bucket"
        ).buckets(exponential_buckets(0.0001, 2.0, 16).expect("valid buckets"))
    ).expect("metric creation failed");

    // =========================================================================
    // SIGNATURE CHECKER (Subsystem 4)
    // =========================================================================

    /// Set members tested by the checker
    pub static ref SIGNATURE_MEMBERS_CHECKED: Counter = Counter::new(
        "pb_checker_members_checked_total",
        "Total set members tested by the signature checker"
    ).expect("metric creation failed");

    /// Members whose cofactor exponent collapsed to 1
    pub static ref SIGNATURE_HITS: Counter = Counter::new(
        "pb_checker_hits_total",
        "Total signature checker hits"
    ).expect("metric creation failed");

    // =========================================================================
    // QUERY ENGINE (Subsystem 5)
    // =========================================================================

    /// Jobs pushed onto shard queues
    pub static ref QUERY_JOBS_SUBMITTED: Counter = Counter::new(
        "pb_query_jobs_submitted_total",
        "Total exponentiation jobs submitted to shard queues"
    ).expect("metric creation failed");

    /// Jobs applied by consumers
    pub static ref QUERY_JOBS_COMPLETED: Counter = Counter::new(
        "pb_query_jobs_completed_total",
        "Total exponentiation jobs completed by consumers"
    ).expect("metric creation failed");

    /// Jobs left in queues after cancellation
    pub static ref QUERY_JOBS_ABANDONED: Counter = Counter::new(
        "pb_query_jobs_abandoned_total",
        "Total jobs drained without completion after cancellation"
    ).expect("metric creation failed");

    /// Timed pushes that hit a full queue
    pub static ref QUEUE_FULL_RETRIES: Counter = Counter::new(
        "pb_query_queue_full_retries_total",
        "Total timed pushes retried because the queue was full"
    ).expect("metric creation failed");

    /// Producers aborted after the grace period
    pub static ref PRODUCERS_TERMINATED: Counter = Counter::new(
        "pb_query_producers_terminated_total",
        "Producers force-terminated after the grace period"
    ).expect("metric creation failed");

    /// Single modular exponentiation inside a consumer
    pub static ref EXPONENTIATION_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "pb_query_exponentiation_duration_seconds",
            "Time spent on one modular exponentiation"
        ).buckets(exponential_buckets(0.00001, 2.0, 16).expect("valid buckets"))
    ).expect("metric creation failed");
}

/// Handle for the registered metrics
pub struct MetricsHandle {
    _registry: Arc<Registry>,
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once; already registered collectors are skipped.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Hashing & allocation
        Box::new(PRIMES_HASHED.clone()),
        Box::new(ELEMENTS_PLACED.clone()),
        // Builder
        Box::new(BUCKETS_BUILT.clone()),
        Box::new(GENERATOR_DRAWS.clone()),
        Box::new(BUCKET_BUILD_DURATION.clone()),
        // Checker
        Box::new(SIGNATURE_MEMBERS_CHECKED.clone()),
        Box::new(SIGNATURE_HITS.clone()),
        // Query engine
        Box::new(QUERY_JOBS_SUBMITTED.clone()),
        Box::new(QUERY_JOBS_COMPLETED.clone()),
        Box::new(QUERY_JOBS_ABANDONED.clone()),
        Box::new(QUEUE_FULL_RETRIES.clone()),
        Box::new(PRODUCERS_TERMINATED.clone()),
        Box::new(EXPONENTIATION_DURATION.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(MetricsHandle {
        _registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        self.histogram.observe(duration);
    }
}
