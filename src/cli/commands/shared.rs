//! Shared components for CLI commands
//!
//! This module contains logging setup and dataset loading glue used across
//! the command implementations.

use crate::app::services::dataset_loader::{self, StationTable};
use crate::{Error, Result};
use std::path::Path;
use tracing::info;

/// Set up structured logging for a command
///
/// Logging goes to stderr so that reports on stdout stay machine-readable.
/// `RUST_LOG` overrides the level selected by the verbosity flags.
pub fn setup_logging(verbose: bool, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ev_station_finder={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load the station dataset and log a load summary
pub fn load_table(dataset_path: &Path) -> Result<StationTable> {
    let table = dataset_loader::load_dataset(dataset_path)?;

    info!(
        "Dataset loaded successfully: {} stations ({} rows dropped)",
        table.len(),
        table.stats().rows_dropped
    );

    Ok(table)
}
