//! # Prime-Bins Telemetry
//!
//! Logging and metrics shared by every subsystem.
//!
//! ## Components
//!
//! - **Logging**: `tracing-subscriber` registry with an `EnvFilter` and a
//!   pretty or JSON `fmt` layer.
//! - **Metrics**: Prometheus counters and histograms in a process registry,
//!   exported as text on demand.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pb_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     let _guard = init_telemetry(config).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PB_SERVICE_NAME` | `prime-bins` | Service name attached to logs |
//! | `PB_LOG_LEVEL` | `info` | Log level filter (`RUST_LOG` also honoured) |
//! | `PB_JSON_LOGS` | `false` | Emit JSON log lines |
//! | `PB_CONSOLE_OUTPUT` | `true` | Write logs to stderr at all |

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::{init_logging, LoggingGuard};
pub use metrics::{
    encode_metrics, register_metrics, HistogramTimer, MetricsHandle, BUCKETS_BUILT,
    BUCKET_BUILD_DURATION, ELEMENTS_PLACED, EXPONENTIATION_DURATION, GENERATOR_DRAWS,
    PRIMES_HASHED, PRODUCERS_TERMINATED, QUERY_JOBS_ABANDONED, QUERY_JOBS_COMPLETED,
    QUERY_JOBS_SUBMITTED, QUEUE_FULL_RETRIES, SIGNATURE_HITS, SIGNATURE_MEMBERS_CHECKED,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize log subscriber: {0}")]
    LoggingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging and register metrics.
///
/// Returns a guard that should be held for the lifetime of the process.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    // Metrics first so early log lines can already reference them
    let metrics_handle = register_metrics()?;
    let logging_guard = init_logging(&config)?;

    Ok(TelemetryGuard {
        _logging: logging_guard,
        _metrics: metrics_handle,
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    _logging: LoggingGuard,
    _metrics: MetricsHandle,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::debug!("Shutting down telemetry");
    }
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}

/// Start timing for a histogram. Observation happens on drop.
#[macro_export]
macro_rules! time_histogram {
    ($histogram:expr) => {
        $crate::metrics::HistogramTimer::new(&$histogram)
    };
}
