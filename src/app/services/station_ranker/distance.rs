//! Great-circle distance computation
//!
//! Distances use the spherical haversine formula on the IUGG mean Earth
//! radius. This is a documented simplification of an ellipsoidal WGS-84
//! geodesic; the two differ at the sub-percent level, which is immaterial
//! for nearest-station ranking.

use crate::constants::EARTH_RADIUS_KM;

/// Compute the great-circle surface distance between two points in kilometers
///
/// Inputs are WGS84 decimal degrees. The result is non-negative and
/// deterministic for the same pair of points.
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
