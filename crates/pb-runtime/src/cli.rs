//! Command-line interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use shared_types::TableSide;

use crate::config::RuntimeConfig;

/// Hash-to-prime signature tables: build, check and query benchmarks
#[derive(Parser, Debug)]
#[command(name = "prime-bins", version)]
#[command(about = "Build, check and benchmark hash-to-prime signature tables")]
pub struct Cli {
    /// Directory holding tables and the pad list
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit JSON log lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Print Prometheus metrics to stdout before exiting
    #[arg(long, global = true)]
    pub print_metrics: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Apply global flags on top of the environment configuration.
    pub fn apply(&self, config: &mut RuntimeConfig) {
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(level) = &self.log_level {
            config.telemetry.log_level = level.clone();
        }
        if self.json {
            config.telemetry.json_logs = true;
        }
        config.telemetry.component = self.command.name().to_string();
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the pad-prime list and store it
    Pads(PadsArgs),
    /// Hash a signature set, allocate it, build and store both tables
    Build(BuildArgs),
    /// Count signature hits in the stored tables
    Check(CheckArgs),
    /// Bounded query-engine run
    Query(QueryArgs),
    /// Time-boxed query-engine run ending in cancellation
    Soak(SoakArgs),
    /// Bounded runs over a producer/consumer grid
    Sweep(SweepArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Pads(_) => "pads",
            Command::Build(_) => "build",
            Command::Check(_) => "check",
            Command::Query(_) => "query",
            Command::Soak(_) => "soak",
            Command::Sweep(_) => "sweep",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct PadsArgs {
    /// Number of pad primes
    #[arg(long, default_value_t = 5000)]
    pub count: usize,

    /// Bit length of each pad prime
    #[arg(long, default_value_t = 32)]
    pub bits: usize,

    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Buckets per side (overrides PB_TABLE_SIZE)
    #[arg(long)]
    pub table_size: Option<usize>,

    /// Number of signatures hashed into the tables
    #[arg(long, default_value_t = 10_000)]
    pub sig_set_size: usize,

    /// Signatures are drawn from [0, value_range)
    #[arg(long, default_value_t = 2_000_000)]
    pub value_range: u64,

    /// Prime hash output size (overrides PB_PRIME_BITS)
    #[arg(long)]
    pub prime_bits: Option<usize>,

    /// Re-check every bucket's invariants after building it
    #[arg(long)]
    pub verify: bool,

    /// Build buckets on one thread
    #[arg(long)]
    pub sequential: bool,

    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Scan buckets on one thread
    #[arg(long)]
    pub sequential: bool,
}

/// Table side selector for `--from-table`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideArg {
    Left,
    Right,
}

impl From<SideArg> for TableSide {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Left => TableSide::Left,
            SideArg::Right => TableSide::Right,
        }
    }
}

/// Worker and table options shared by `query` and `soak`.
#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    #[arg(long, default_value_t = 4)]
    pub producers: usize,

    #[arg(long, default_value_t = 8)]
    pub consumers: usize,

    #[arg(long, default_value_t = 1000)]
    pub queue_capacity: usize,

    /// Bit length of random moduli
    #[arg(long, default_value_t = 3072)]
    pub modulus_bits: usize,

    /// Buckets in the random table (default: 8 per consumer)
    #[arg(long)]
    pub table_size: Option<usize>,

    /// Serve a stored table's (N, g) pairs instead of random ones
    #[arg(long, value_enum)]
    pub from_table: Option<SideArg>,

    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Iterations per producer (two jobs each)
    #[arg(long, default_value_t = 1000)]
    pub jobs: u64,
}

#[derive(Args, Debug, Clone)]
pub struct SoakArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Run length in seconds
    #[arg(long, default_value_t = 3600)]
    pub duration_secs: u64,

    /// Seconds producers get to exit after cancellation
    #[arg(long, default_value_t = 180)]
    pub grace_secs: u64,

    /// Queue poll interval in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub poll_ms: u64,

    /// Results file (overrides PB_RESULTS_FILE)
    #[arg(long)]
    pub results_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    #[arg(long, default_value_t = 1)]
    pub producers_min: usize,

    /// Exclusive
    #[arg(long, default_value_t = 12)]
    pub producers_max: usize,

    #[arg(long, default_value_t = 5)]
    pub consumers_min: usize,

    /// Consumers run up to this minus the producer count, exclusive
    #[arg(long, default_value_t = 49)]
    pub consumers_cap: usize,

    #[arg(long, default_value_t = 8)]
    pub bins_per_consumer: usize,

    #[arg(long, default_value_t = 3072)]
    pub modulus_bits: usize,

    /// Jobs per cell, split evenly across producers
    #[arg(long, default_value_t = 1_000_000)]
    pub total_jobs: u64,

    #[arg(long, default_value_t = 1000)]
    pub queue_capacity: usize,

    /// Results file (overrides PB_RESULTS_FILE)
    #[arg(long)]
    pub results_file: Option<PathBuf>,

    #[arg(long)]
    pub seed: Option<u64>,
}
