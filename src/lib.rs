//! EV Station Finder Library
//!
//! A Rust library for locating the nearest electric-vehicle charging stations
//! to a user-supplied coordinate over a static CSV station dataset.
//!
//! This library provides tools for:
//! - Loading and validating a tabular station dataset with fail-fast schema checking
//! - Lenient per-row coordinate coercion (invalid rows are dropped, not fatal)
//! - Great-circle distance computation using the spherical haversine formula
//! - Ranking stations by distance: single nearest plus configurable top-K
//! - Comprehensive error handling for bad sources, schemas, and query inputs

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod dataset_loader;
        pub mod station_ranker;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{RankedStation, StationRecord, UserLocation};
pub use app::services::dataset_loader::{StationTable, load_dataset};
pub use app::services::station_ranker::{Ranking, nearest_and_top_k};
pub use config::FinderConfig;

/// Result type alias for the EV station finder
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for dataset loading and nearest-station queries
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Dataset file could not be opened
    #[error("Dataset not found: {path}")]
    SourceNotFound { path: String },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Required dataset columns are missing; the dataset is rejected wholesale
    #[error("Dataset schema invalid: missing required columns: {}", missing_columns.join(", "))]
    Schema { missing_columns: Vec<String> },

    /// Query location is out of range or non-finite
    #[error("Invalid user location ({latitude}, {longitude}): {reason}")]
    InvalidLocation {
        latitude: f64,
        longitude: f64,
        reason: String,
    },

    /// Station table contains no stations, so there is no nearest station
    #[error("Station table is empty: no stations to rank")]
    EmptyTable,

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report serialization error
    #[error("Report serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a source-not-found error
    pub fn source_not_found(path: impl Into<String>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a schema error naming the missing columns
    pub fn schema(missing_columns: Vec<String>) -> Self {
        Self::Schema { missing_columns }
    }

    /// Create an invalid-location error
    pub fn invalid_location(latitude: f64, longitude: f64, reason: impl Into<String>) -> Self {
        Self::InvalidLocation {
            latitude,
            longitude,
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a report serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
