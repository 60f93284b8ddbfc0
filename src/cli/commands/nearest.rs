//! Nearest command implementation for the EV station finder CLI
//!
//! Loads the station dataset, runs the nearest-station query against the
//! supplied coordinate, and renders the ranking in human or JSON form.

use super::shared::{load_table, setup_logging};
use crate::app::models::UserLocation;
use crate::app::services::station_ranker::{Ranking, nearest_and_top_k};
use crate::cli::args::{NearestArgs, OutputFormat};
use crate::config::FinderConfig;
use crate::Result;
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Nearest command runner
pub fn run_nearest(args: NearestArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(args.verbose, args.quiet)?;

    info!("Starting nearest-station query");
    debug!("Nearest arguments: {:?}", args);

    args.validate()?;

    let config = FinderConfig::new(args.dataset_path.clone(), Some(args.top_k));
    config.validate()?;

    // Bad query coordinates are a recoverable caller error, reported before
    // any dataset I/O happens
    let user_location = UserLocation::new(args.latitude, args.longitude)?;

    let table = load_table(&config.dataset_path)?;

    let ranking = nearest_and_top_k(&user_location, &table, config.top_k)?;

    info!(
        "Query completed in {:.2?}: nearest '{}' at {:.2} km",
        start_time.elapsed(),
        ranking.nearest.station.name,
        ranking.nearest.distance_km
    );

    match args.output_format {
        OutputFormat::Human => print_human_report(&user_location, &ranking),
        OutputFormat::Json => print_json_report(&ranking)?,
    }

    Ok(())
}

/// Render the ranking as a colored human-readable report
fn print_human_report(user_location: &UserLocation, ranking: &Ranking) {
    println!(
        "\n{}",
        "Nearest EV Charging Station".bright_green().bold()
    );
    println!(
        "Query location: {:.4}, {:.4}",
        user_location.latitude(),
        user_location.longitude()
    );
    println!();

    let nearest = &ranking.nearest;
    println!("  {}", nearest.station.name.bright_white().bold());
    println!(
        "  Address:  {}, {}, {}",
        nearest.station.address, nearest.station.city, nearest.station.state
    );
    println!("  Type:     {}", nearest.station.station_type);
    println!(
        "  Distance: {}",
        format!("{:.2} km", nearest.distance_km).bright_yellow().bold()
    );

    println!(
        "\n{}",
        format!("Top {} Nearest Stations", ranking.top_k.len())
            .bright_green()
            .bold()
    );
    for (position, ranked) in ranking.top_k.iter().enumerate() {
        println!(
            "  {}. {} - {}, {} ({})",
            (position + 1).to_string().bright_yellow(),
            ranked.station.name.bright_white(),
            ranked.station.address,
            ranked.station.city,
            format!("{:.2} km", ranked.distance_km).bright_yellow()
        );
    }
    println!();
}

/// Render the ranking as JSON on stdout
fn print_json_report(ranking: &Ranking) -> Result<()> {
    let json = serde_json::to_string_pretty(ranking)?;
    println!("{}", json);
    Ok(())
}
