//! # Runtime Configuration
//!
//! Defaults, overridden by `PB_*` environment variables, overridden in turn
//! by command-line flags.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PB_DATA_DIR` | `./data` | Directory holding tables and the pad list |
//! | `PB_TABLE_SIZE` | `902` | Buckets per side |
//! | `PB_PRIME_BITS` | `86` | Prime hash output size |
//! | `PB_RESULTS_FILE` | `qTests.txt` | Sweep results file |

use std::path::PathBuf;

use pb_01_prime_hashing::HashingConfig;
use pb_03_bin_modulus::BuildConfig;
use pb_telemetry::TelemetryConfig;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub data_dir: PathBuf,
    pub table_size: usize,
    pub results_file: PathBuf,
    pub hashing: HashingConfig,
    pub build: BuildConfig,
    pub telemetry: TelemetryConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            table_size: 902,
            results_file: PathBuf::from("qTests.txt"),
            hashing: HashingConfig::default(),
            build: BuildConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            telemetry: TelemetryConfig::for_component("runtime"),
            ..Self::default()
        };

        if let Some(dir) = lookup("PB_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(value) = lookup("PB_TABLE_SIZE") {
            config.table_size = parse_positive("PB_TABLE_SIZE", &value)?;
        }
        if let Some(value) = lookup("PB_PRIME_BITS") {
            config.hashing.prime_bits = parse_positive("PB_PRIME_BITS", &value)?;
        }
        if let Some(file) = lookup("PB_RESULTS_FILE") {
            config.results_file = PathBuf::from(file);
        }
        Ok(config)
    }
}

fn parse_positive(var: &'static str, value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ConfigError::InvalidNumber {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = RuntimeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.table_size, 902);
        assert_eq!(config.hashing.prime_bits, 86);
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.telemetry.component, "runtime");
    }

    #[test]
    fn test_environment_overrides() {
        let config = RuntimeConfig::from_lookup(lookup(&[
            ("PB_DATA_DIR", "/tmp/pb"),
            ("PB_TABLE_SIZE", "715"),
            ("PB_PRIME_BITS", "64"),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/pb"));
        assert_eq!(config.table_size, 715);
        assert_eq!(config.hashing.prime_bits, 64);
    }

    #[test]
    fn test_invalid_number_rejected() {
        let result = RuntimeConfig::from_lookup(lookup(&[("PB_TABLE_SIZE", "0")]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidNumber {
                var: "PB_TABLE_SIZE",
                value: "0".to_string()
            }
        );
    }
}
