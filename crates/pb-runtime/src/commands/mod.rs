//! Command implementations
//!
//! Each command exposes an `execute` returning its report, used by tests,
//! and the dispatcher logs the outcome.

pub mod build;
pub mod check;
pub mod pads;
pub mod query;
pub mod sweep;

use anyhow::{Context, Result};
use pb_06_table_store::{FileTableStore, TableRepository};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::Command;
use crate::config::RuntimeConfig;

/// Run one command to completion.
pub fn run(command: &Command, config: &RuntimeConfig) -> Result<()> {
    match command {
        Command::Pads(args) => pads::execute(args, config).map(|_| ()),
        Command::Build(args) => build::execute(args, config).map(|_| ()),
        Command::Check(args) => check::execute(args, config).map(|_| ()),
        Command::Query(args) => query::execute_bounded(args, config).map(|_| ()),
        Command::Soak(args) => query::execute_soak(args, config).map(|_| ()),
        Command::Sweep(args) => sweep::execute(args, config).map(|_| ()),
    }
}

/// Repository over the configured data directory.
pub fn open_repository(config: &RuntimeConfig) -> Result<TableRepository<FileTableStore>> {
    let store = FileTableStore::open(&config.data_dir).with_context(|| {
        format!(
            "Failed to open table store at {}",
            config.data_dir.display()
        )
    })?;
    Ok(TableRepository::new(store))
}

pub(crate) fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
