//! # prime-bins
//!
//! Entry point for the signature-table tools.
//!
//! ## Startup Sequence
//!
//! 1. Parse the command line
//! 2. Load configuration from `PB_*` variables, then apply CLI flags
//! 3. Initialize logging and register metrics
//! 4. Run the command
//! 5. Optionally dump metrics

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use pb_runtime::{commands, Cli, RuntimeConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = RuntimeConfig::from_env().context("Invalid environment configuration")?;
    cli.apply(&mut config);

    let _telemetry = pb_telemetry::init_telemetry(config.telemetry.clone())
        .context("Failed to initialize telemetry")?;

    info!(
        command = cli.command.name(),
        data_dir = %config.data_dir.display(),
        table_size = config.table_size,
        "Starting prime-bins"
    );

    if let Err(e) = commands::run(&cli.command, &config) {
        error!(command = cli.command.name(), error = %format!("{:#}", e), "Command failed");
        return Err(e);
    }

    if cli.print_metrics {
        let metrics = pb_telemetry::encode_metrics().context("Failed to encode metrics")?;
        print!("{}", metrics);
    }
    Ok(())
}
