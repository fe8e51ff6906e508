//! `check`: count signature hits in the stored tables

use anyhow::{Context, Result};
use pb_04_signature_checker::{CheckReport, SignatureChecker};

use super::open_repository;
use crate::cli::CheckArgs;
use crate::config::RuntimeConfig;

pub fn execute(args: &CheckArgs, config: &RuntimeConfig) -> Result<CheckReport> {
    let repository = open_repository(config)?;
    SignatureChecker::new()
        .with_parallel(!args.sequential)
        .check_persisted(&repository)
        .context("Signature check failed")
}
