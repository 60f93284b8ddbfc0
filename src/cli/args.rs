//! Command-line argument definitions for the EV station finder
//!
//! This module defines the complete CLI interface using the clap derive API.
//! Query coordinates are validated by the core (`UserLocation`), so argument
//! validation here only covers CLI-level concerns.

use crate::constants::{DEFAULT_DATASET_FILE, DEFAULT_TOP_K};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the EV charging station finder
///
/// Finds the nearest EV charging stations to a coordinate over a static
/// CSV station dataset.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ev-station-finder",
    version,
    about = "Find the nearest EV charging stations to a location",
    long_about = "Loads a static EV charging station dataset from CSV, validates it, and ranks \
                  stations by great-circle distance from a supplied coordinate. Returns the \
                  single nearest station plus the top-K nearest in ascending distance order."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the station finder
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Find the nearest stations to a coordinate (main command)
    Nearest(NearestArgs),
    /// Report summary statistics for the station dataset
    Stations(StationsArgs),
}

/// Arguments for the nearest command (main query)
#[derive(Debug, Clone, Parser)]
pub struct NearestArgs {
    /// Query latitude in decimal degrees (-90 to 90)
    #[arg(long = "lat", value_name = "DEGREES", allow_hyphen_values = true)]
    pub latitude: f64,

    /// Query longitude in decimal degrees (-180 to 180)
    #[arg(long = "lon", value_name = "DEGREES", allow_hyphen_values = true)]
    pub longitude: f64,

    /// Number of stations to include in the ranking
    #[arg(
        short = 'k',
        long = "top-k",
        value_name = "N",
        default_value_t = DEFAULT_TOP_K,
        help = "Number of nearest stations to return"
    )]
    pub top_k: usize,

    /// Path to the station dataset CSV file
    ///
    /// Must contain the columns name, state, city, address, lattitude,
    /// longitude, type. Defaults to ev-charging-stations-india.csv in the
    /// working directory.
    #[arg(
        short = 'd',
        long = "dataset",
        value_name = "PATH",
        help = "Path to the station dataset CSV file"
    )]
    pub dataset_path: Option<PathBuf>,

    /// Output format for the ranking report
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        default_value = "human",
        help = "Output format: human or json"
    )]
    pub output_format: OutputFormat,

    /// Enable verbose logging output
    #[arg(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,

    /// Suppress all logging except errors
    #[arg(short = 'q', long = "quiet", help = "Suppress non-error logging")]
    pub quiet: bool,
}

impl NearestArgs {
    /// Validate CLI-level argument consistency
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(Error::configuration("--top-k must be at least 1"));
        }

        if self.verbose && self.quiet {
            return Err(Error::configuration(
                "--verbose and --quiet are mutually exclusive",
            ));
        }

        Ok(())
    }

    /// Resolve the dataset path, falling back to the default file
    pub fn get_dataset_path(&self) -> PathBuf {
        self.dataset_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_FILE))
    }
}

/// Arguments for the stations command (dataset report)
#[derive(Debug, Clone, Parser)]
pub struct StationsArgs {
    /// Path to the station dataset CSV file
    #[arg(
        short = 'd',
        long = "dataset",
        value_name = "PATH",
        help = "Path to the station dataset CSV file"
    )]
    pub dataset_path: Option<PathBuf>,

    /// Output format for the dataset report
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        default_value = "human",
        help = "Output format: human or json"
    )]
    pub output_format: OutputFormat,

    /// Enable verbose logging output
    #[arg(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,

    /// Suppress all logging except errors
    #[arg(short = 'q', long = "quiet", help = "Suppress non-error logging")]
    pub quiet: bool,
}

impl StationsArgs {
    /// Validate CLI-level argument consistency
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            return Err(Error::configuration(
                "--verbose and --quiet are mutually exclusive",
            ));
        }

        Ok(())
    }

    /// Resolve the dataset path, falling back to the default file
    pub fn get_dataset_path(&self) -> PathBuf {
        self.dataset_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_FILE))
    }
}

/// Output format for command reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored report
    Human,
    /// Machine-readable JSON report
    Json,
}

impl Args {
    /// Get the selected command, panicking if none was provided
    ///
    /// Callers must check `command.is_none()` first (the binary prints help
    /// in that case).
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}
