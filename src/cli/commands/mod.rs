//! Command implementations for the EV station finder CLI
//!
//! This module contains the command execution logic and report rendering for
//! the CLI interface. Each command is implemented in its own module.

pub mod nearest;
pub mod shared;
pub mod stations;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the EV station finder
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `nearest`: load the dataset and rank stations by distance from a point
/// - `stations`: load the dataset and report summary statistics
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Nearest(nearest_args) => nearest::run_nearest(nearest_args),
        Commands::Stations(stations_args) => stations::run_stations(stations_args),
    }
}
