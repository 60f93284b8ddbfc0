//! Stations command implementation for the EV station finder CLI
//!
//! Loads the station dataset and reports summary statistics: station count,
//! rows dropped during validation, and the geographic bounding box.

use super::shared::{load_table, setup_logging};
use crate::app::services::dataset_loader::{GeographicBounds, LoadStats, StationTable};
use crate::cli::args::{OutputFormat, StationsArgs};
use crate::config::FinderConfig;
use crate::Result;
use colored::*;
use serde::Serialize;
use tracing::{debug, info};

/// Dataset summary report
#[derive(Debug, Serialize)]
struct DatasetReport {
    source_path: String,
    station_count: usize,
    load_stats: LoadStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    geographic_bounds: Option<GeographicBounds>,
}

impl DatasetReport {
    fn from_table(table: &StationTable) -> Self {
        Self {
            source_path: table.source_path().display().to_string(),
            station_count: table.len(),
            load_stats: table.stats().clone(),
            geographic_bounds: table.geographic_bounds(),
        }
    }
}

/// Stations command runner
pub fn run_stations(args: StationsArgs) -> Result<()> {
    setup_logging(args.verbose, args.quiet)?;

    info!("Starting station dataset report");
    debug!("Stations arguments: {:?}", args);

    args.validate()?;

    let config = FinderConfig::new(args.dataset_path.clone(), None);
    config.validate()?;

    let table = load_table(&config.dataset_path)?;
    let report = DatasetReport::from_table(&table);

    match args.output_format {
        OutputFormat::Human => print_human_report(&report),
        OutputFormat::Json => print_json_report(&report)?,
    }

    Ok(())
}

/// Render the dataset report as colored human-readable output
fn print_human_report(report: &DatasetReport) {
    println!("\n{}", "Station Dataset Summary".bright_green().bold());
    println!("  Source:        {}", report.source_path);
    println!(
        "  Stations:      {}",
        report.station_count.to_string().bright_white().bold()
    );
    println!("  Rows read:     {}", report.load_stats.rows_read);

    let dropped = report.load_stats.rows_dropped;
    if dropped > 0 {
        println!(
            "  Rows dropped:  {}",
            dropped.to_string().bright_red().bold()
        );
    } else {
        println!("  Rows dropped:  0");
    }

    if let Some(bounds) = &report.geographic_bounds {
        println!(
            "  Latitude:      {:.4} to {:.4}",
            bounds.min_lat, bounds.max_lat
        );
        println!(
            "  Longitude:     {:.4} to {:.4}",
            bounds.min_lon, bounds.max_lon
        );
    }
    println!();
}

/// Render the dataset report as JSON on stdout
fn print_json_report(report: &DatasetReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}
