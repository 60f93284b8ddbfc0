//! Application constants for the EV station finder
//!
//! This module contains the dataset column contract, default values,
//! and geodetic constants used throughout the application.

// =============================================================================
// Dataset Column Contract
// =============================================================================

/// Column holding the station latitude in decimal degrees.
///
/// The non-standard "lattitude" spelling is how the column is named in the
/// ev-charging-stations-india.csv dataset and must be preserved for
/// compatibility with it.
pub const LATITUDE_COLUMN: &str = "lattitude";

/// Column holding the station longitude in decimal degrees
pub const LONGITUDE_COLUMN: &str = "longitude";

/// Columns that must be present (case-sensitive) before any row is processed.
///
/// A dataset missing any of these is rejected wholesale with a schema error.
/// Extra columns are ignored.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "name",
    "state",
    "city",
    "address",
    LATITUDE_COLUMN,
    LONGITUDE_COLUMN,
    "type",
];

/// Default dataset file, resolved relative to the working directory
pub const DEFAULT_DATASET_FILE: &str = "ev-charging-stations-india.csv";

// =============================================================================
// Ranking Defaults
// =============================================================================

/// Default number of stations returned in the top-K ranking
pub const DEFAULT_TOP_K: usize = 5;

// =============================================================================
// Geodetic Constants
// =============================================================================

/// Mean Earth radius in kilometers (IUGG mean radius), used by the
/// spherical haversine distance formula
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Valid latitude range in decimal degrees
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Valid longitude range in decimal degrees
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);
