//! Dataset loader service for the EV charging station table
//!
//! This module loads the station dataset from a CSV file, validates that the
//! required columns are present (fail-fast), coerces coordinate fields to
//! numeric values, and drops rows with invalid coordinates (lenient). The
//! result is an immutable, insertion-ordered station table held for the
//! lifetime of the session.

use crate::app::models::StationRecord;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

pub mod loader;
pub mod schema;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use loader::load_dataset;
pub use schema::ColumnMapping;

/// Immutable, insertion-ordered collection of validated station records
///
/// Every record in the table has finite numeric coordinates. The table is
/// created once at load time and never mutated afterwards; ranking queries
/// operate on shared references and build their own query-local annotations.
#[derive(Debug, Clone)]
pub struct StationTable {
    /// Validated station records in original dataset order
    pub(crate) records: Vec<StationRecord>,

    /// Path the dataset was loaded from
    pub(crate) source_path: PathBuf,

    /// Statistics gathered while loading
    pub(crate) stats: LoadStats,
}

/// Statistics describing a dataset load
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadStats {
    /// Number of data rows read from the source
    pub rows_read: usize,

    /// Number of rows retained after coordinate validation
    pub stations_loaded: usize,

    /// Number of rows dropped due to invalid or missing coordinates
    pub rows_dropped: usize,

    /// Wall-clock time spent loading
    #[serde(skip)]
    pub load_duration: Duration,
}

/// Geographic bounding box covering every station in a table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeographicBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl StationTable {
    /// Get the number of stations in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the table contains no stations
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the station records in original dataset order
    pub fn records(&self) -> &[StationRecord] {
        &self.records
    }

    /// Iterate over station records in original dataset order
    pub fn iter(&self) -> std::slice::Iter<'_, StationRecord> {
        self.records.iter()
    }

    /// Get a station record by its original dataset position
    pub fn get(&self, index: usize) -> Option<&StationRecord> {
        self.records.get(index)
    }

    /// Path the dataset was loaded from
    pub fn source_path(&self) -> &PathBuf {
        &self.source_path
    }

    /// Statistics gathered while loading
    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }

    /// Compute the geographic bounding box of all stations
    ///
    /// Returns `None` for an empty table.
    pub fn geographic_bounds(&self) -> Option<GeographicBounds> {
        let first = self.records.first()?;

        let mut bounds = GeographicBounds {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lon: first.longitude,
            max_lon: first.longitude,
        };

        for station in &self.records[1..] {
            bounds.min_lat = bounds.min_lat.min(station.latitude);
            bounds.max_lat = bounds.max_lat.max(station.latitude);
            bounds.min_lon = bounds.min_lon.min(station.longitude);
            bounds.max_lon = bounds.max_lon.max(station.longitude);
        }

        Some(bounds)
    }
}
