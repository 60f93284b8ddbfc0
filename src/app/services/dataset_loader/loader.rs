//! Dataset loading and per-row coordinate coercion
//!
//! Loading follows a two-tier validation policy: a missing source or missing
//! required columns are fatal for the whole dataset, while rows whose
//! coordinates fail numeric coercion are dropped individually and loading
//! continues. Partial datasets remain useful.

use super::schema::ColumnMapping;
use super::{LoadStats, StationTable};
use crate::app::models::StationRecord;
use crate::constants::{LATITUDE_COLUMN, LONGITUDE_COLUMN};
use crate::{Error, Result};
use csv::StringRecord;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Load and validate the station dataset from a CSV file
///
/// # Arguments
/// * `path` - Path to the station dataset CSV file
///
/// # Returns
/// * `Result<StationTable>` - Validated station table, possibly smaller than
///   the input but never containing invalid coordinates. An empty table is a
///   valid result.
///
/// # Errors
/// * `Error::SourceNotFound` if the file does not exist or cannot be opened
/// * `Error::Schema` if any required column is absent from the header
/// * `Error::CsvParsing` if the header itself cannot be read
pub fn load_dataset(path: impl AsRef<Path>) -> Result<StationTable> {
    let path = path.as_ref();
    let start_time = Instant::now();

    info!("Loading station dataset from: {}", path.display());

    if !path.exists() {
        return Err(Error::source_not_found(path.display().to_string()));
    }

    let file = std::fs::File::open(path)
        .map_err(|_| Error::source_not_found(path.display().to_string()))?;

    // Flexible mode tolerates rows with a short field count; such rows fail
    // coordinate extraction and are dropped like any other invalid row.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                "failed to read dataset header",
                Some(e),
            )
        })?
        .clone();

    // Structural validation happens before any row is processed
    let mapping = ColumnMapping::analyze(&headers);
    mapping.validate_required()?;

    debug!(
        "Dataset header validated: {} columns mapped",
        mapping.column_count()
    );

    let mut stats = LoadStats::default();
    let mut records = Vec::new();

    for row in reader.records() {
        stats.rows_read += 1;

        let record = match row {
            Ok(record) => record,
            Err(e) => {
                // Malformed row, recovered locally
                debug!("Dropping unreadable row {}: {}", stats.rows_read, e);
                stats.rows_dropped += 1;
                continue;
            }
        };

        match parse_station_record(&record, &mapping) {
            Some(station) => records.push(station),
            None => {
                debug!(
                    "Dropping row {} with invalid coordinates",
                    stats.rows_read
                );
                stats.rows_dropped += 1;
            }
        }
    }

    stats.stations_loaded = records.len();
    stats.load_duration = start_time.elapsed();

    if stats.rows_dropped > 0 {
        warn!(
            "Dropped {} of {} rows with invalid coordinates",
            stats.rows_dropped, stats.rows_read
        );
    }

    info!(
        "Loaded {} stations from {} rows in {:.2?}",
        stats.stations_loaded, stats.rows_read, stats.load_duration
    );

    Ok(StationTable {
        records,
        source_path: path.to_path_buf(),
        stats,
    })
}

/// Parse a single station record from CSV data
///
/// Returns `None` when either coordinate is missing, fails numeric coercion,
/// or is non-finite. Text fields are always retained (trimmed), even when
/// empty: coordinate validity is the only row-drop criterion.
fn parse_station_record(record: &StringRecord, mapping: &ColumnMapping) -> Option<StationRecord> {
    let latitude = parse_coordinate(record, mapping, LATITUDE_COLUMN)?;
    let longitude = parse_coordinate(record, mapping, LONGITUDE_COLUMN)?;

    Some(StationRecord {
        name: text_field(record, mapping, "name"),
        address: text_field(record, mapping, "address"),
        city: text_field(record, mapping, "city"),
        state: text_field(record, mapping, "state"),
        station_type: text_field(record, mapping, "type"),
        latitude,
        longitude,
    })
}

/// Coerce a coordinate field to a finite f64, or `None` if it cannot be
fn parse_coordinate(
    record: &StringRecord,
    mapping: &ColumnMapping,
    column_name: &str,
) -> Option<f64> {
    let index = mapping.get_index(column_name)?;
    let raw = record.get(index)?.trim();

    if raw.is_empty() {
        return None;
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        Ok(value) => {
            debug!("Non-finite {} value '{}'", column_name, value);
            None
        }
        Err(_) => None,
    }
}

/// Extract a trimmed text field, defaulting to empty for short rows
fn text_field(record: &StringRecord, mapping: &ColumnMapping, column_name: &str) -> String {
    mapping
        .get_index(column_name)
        .and_then(|index| record.get(index))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}
