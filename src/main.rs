use clap::Parser;
use ev_station_finder::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("EV Station Finder - Nearest Charging Station Lookup");
    println!("===================================================");
    println!();
    println!("Find the nearest EV charging stations to a coordinate by ranking a");
    println!("static station dataset with great-circle distances.");
    println!();
    println!("USAGE:");
    println!("    ev-station-finder <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    nearest     Find the nearest stations to a coordinate (main command)");
    println!("    stations    Report summary statistics for the station dataset");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Find the 5 nearest stations to a point in Bengaluru:");
    println!("    ev-station-finder nearest --lat 12.9716 --lon 77.5946");
    println!();
    println!("    # Use a custom dataset and return the top 10 as JSON:");
    println!("    ev-station-finder nearest --lat 12.9716 --lon 77.5946 \\");
    println!("                              --dataset /data/stations.csv -k 10 --format json");
    println!();
    println!("    # Summarize the dataset:");
    println!("    ev-station-finder stations --dataset /data/stations.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    ev-station-finder <COMMAND> --help");
}
