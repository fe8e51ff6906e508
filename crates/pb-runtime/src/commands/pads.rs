//! `pads`: generate and store the pad-prime list

use std::time::Instant;

use anyhow::{Context, Result};
use pb_03_bin_modulus::{generate_pad_primes, PadPrimeList};
use tracing::info;

use super::{open_repository, rng_from};
use crate::cli::PadsArgs;
use crate::config::RuntimeConfig;

pub fn execute(args: &PadsArgs, config: &RuntimeConfig) -> Result<PadPrimeList> {
    let start = Instant::now();
    let mut rng = rng_from(args.seed);
    let pads = generate_pad_primes(args.count, args.bits, &mut rng)
        .context("Failed to generate pad primes")?;

    let mut repository = open_repository(config)?;
    repository
        .save_pad_primes(pads.as_slice())
        .context("Failed to store pad primes")?;

    info!(
        count = pads.len(),
        bits = args.bits,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Pad-prime list stored"
    );
    Ok(pads)
}
