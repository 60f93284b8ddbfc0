//! Data models for EV charging station queries
//!
//! This module contains the core data structures representing charging
//! stations, validated user locations, and per-query ranked results.

use crate::constants::{LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Station Record Structure
// =============================================================================

/// One charging station's identity, location, and metadata
///
/// Records are produced by the dataset loader, which guarantees that
/// `latitude` and `longitude` are finite after validation. Text fields are
/// stored trimmed; an empty text field does not disqualify a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    /// Human-readable station name
    pub name: String,

    /// Street address of the station
    pub address: String,

    /// City the station is located in
    pub city: String,

    /// State the station is located in
    pub state: String,

    /// Charger type descriptor (e.g., "AC", "DC", connector class)
    pub station_type: String,

    /// Station latitude in WGS84 decimal degrees
    pub latitude: f64,

    /// Station longitude in WGS84 decimal degrees
    pub longitude: f64,
}

impl StationRecord {
    /// Get station location as (latitude, longitude) tuple
    pub fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Check that the station coordinates are finite numbers
    pub fn has_finite_coordinates(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

// =============================================================================
// User Location Structure
// =============================================================================

/// A validated query point in WGS84 decimal degrees
///
/// The finder core does not acquire locations itself; callers supply a
/// resolved coordinate pair. Construction validates that both components are
/// finite and within range, so a `UserLocation` is always usable in a query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    latitude: f64,
    longitude: f64,
}

impl UserLocation {
    /// Create a validated user location
    ///
    /// # Errors
    /// Returns `Error::InvalidLocation` if either coordinate is non-finite,
    /// latitude is outside [-90, 90], or longitude is outside [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(Error::invalid_location(
                latitude,
                longitude,
                "coordinates must be finite numbers",
            ));
        }

        let (min_lat, max_lat) = LATITUDE_RANGE;
        if !(min_lat..=max_lat).contains(&latitude) {
            return Err(Error::invalid_location(
                latitude,
                longitude,
                format!("latitude must be between {} and {} degrees", min_lat, max_lat),
            ));
        }

        let (min_lon, max_lon) = LONGITUDE_RANGE;
        if !(min_lon..=max_lon).contains(&longitude) {
            return Err(Error::invalid_location(
                latitude,
                longitude,
                format!(
                    "longitude must be between {} and {} degrees",
                    min_lon, max_lon
                ),
            ));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Get the location as (latitude, longitude) tuple
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

// =============================================================================
// Ranked Station Structure
// =============================================================================

/// A station annotated with its distance from a specific query point
///
/// The distance annotation is query-scoped: each ranking query builds its own
/// ranked records and the shared station table is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedStation {
    /// The underlying station record
    pub station: StationRecord,

    /// Great-circle distance from the query point in kilometers (always >= 0)
    pub distance_km: f64,
}
