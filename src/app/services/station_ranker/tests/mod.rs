//! Shared test utilities and fixtures for station ranker tests

use crate::app::models::StationRecord;
use crate::app::services::dataset_loader::{LoadStats, StationTable};
use std::path::PathBuf;

pub mod distance_tests;
pub mod ranker_tests;

/// Create a test station at the given coordinates
pub fn create_test_station(name: &str, lat: f64, lon: f64) -> StationRecord {
    StationRecord {
        name: name.to_string(),
        address: format!("{} address", name),
        city: "Bengaluru".to_string(),
        state: "Karnataka".to_string(),
        station_type: "AC".to_string(),
        latitude: lat,
        longitude: lon,
    }
}

/// Build an in-memory station table from records, preserving order
pub fn create_test_table(records: Vec<StationRecord>) -> StationTable {
    let stats = LoadStats {
        rows_read: records.len(),
        stations_loaded: records.len(),
        rows_dropped: 0,
        load_duration: std::time::Duration::ZERO,
    };

    StationTable {
        records,
        source_path: PathBuf::from("/test/stations.csv"),
        stats,
    }
}
