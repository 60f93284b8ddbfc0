//! Nearest-station ranking service
//!
//! Given a validated user location and an immutable station table, this
//! module computes the great-circle distance to every station and returns the
//! single nearest station plus the top-K nearest in ascending distance order.
//!
//! Ranking is a pure, self-contained computation: distances are written to a
//! query-local vector, the shared table is never mutated, and repeated
//! queries over the same inputs return identical results. Equal distances are
//! resolved by original table order (stable sort), so results are
//! deterministic even with duplicate station coordinates.
//!
//! Complexity is an O(n) distance scan plus an O(n log n) sort. No spatial
//! index is maintained; at a few thousand stations the linear scan is the
//! scalability boundary, and any index substituted later must preserve the
//! same ordering and tie-break semantics.

use crate::app::models::{RankedStation, UserLocation};
use crate::{Error, Result};
use serde::Serialize;
use tracing::debug;

use super::dataset_loader::StationTable;

pub mod distance;

#[cfg(test)]
pub mod tests;

pub use distance::haversine_distance_km;

/// Result of a nearest-station query
#[derive(Debug, Clone, Serialize)]
pub struct Ranking {
    /// The single nearest station
    pub nearest: RankedStation,

    /// The top-K nearest stations, ascending by distance
    pub top_k: Vec<RankedStation>,
}

/// Find the nearest station and the top-K nearest stations to a location
///
/// # Arguments
/// * `user_location` - Validated query point in decimal degrees
/// * `table` - Shared, immutable station table
/// * `top_k` - Number of stations to return in the ranking
///
/// # Returns
/// * `Result<Ranking>` - Nearest station plus `min(top_k, table.len())`
///   stations ordered ascending by distance, ties in original table order
///
/// # Errors
/// * `Error::EmptyTable` if the table contains no stations
pub fn nearest_and_top_k(
    user_location: &UserLocation,
    table: &StationTable,
    top_k: usize,
) -> Result<Ranking> {
    if table.is_empty() {
        return Err(Error::EmptyTable);
    }

    // Query-local distance annotation; the shared table is untouched
    let mut ranked: Vec<RankedStation> = table
        .iter()
        .map(|station| RankedStation {
            station: station.clone(),
            distance_km: haversine_distance_km(
                user_location.latitude(),
                user_location.longitude(),
                station.latitude,
                station.longitude,
            ),
        })
        .collect();

    // Stable sort keeps equal distances in original table order
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    let nearest = ranked[0].clone();
    ranked.truncate(top_k.min(ranked.len()));

    debug!(
        "Ranked {} stations; nearest '{}' at {:.2} km",
        table.len(),
        nearest.station.name,
        nearest.distance_km
    );

    Ok(Ranking {
        nearest,
        top_k: ranked,
    })
}
