//! Tests for the haversine distance formula

use crate::app::services::station_ranker::haversine_distance_km;
use crate::constants::EARTH_RADIUS_KM;

#[test]
fn test_zero_distance_for_identical_points() {
    let d = haversine_distance_km(12.90, 77.60, 12.90, 77.60);
    assert!(d.abs() < 1e-9);
}

#[test]
fn test_one_degree_of_longitude_at_equator() {
    // One degree of arc on the mean sphere is 2*pi*R/360 ~ 111.195 km
    let d = haversine_distance_km(0.0, 0.0, 0.0, 1.0);
    let expected = 2.0 * std::f64::consts::PI * EARTH_RADIUS_KM / 360.0;
    assert!((d - expected).abs() < 1e-6);
}

#[test]
fn test_antipodal_points() {
    let d = haversine_distance_km(0.0, 0.0, 0.0, 180.0);
    let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
    assert!((d - half_circumference).abs() < 1e-6);
}

#[test]
fn test_known_city_pair() {
    // Central London to the Eiffel Tower, ~341 km on the mean sphere
    let d = haversine_distance_km(51.5007, -0.1246, 48.8584, 2.2945);
    assert!((d - 340.6).abs() < 2.0, "unexpected distance: {}", d);
}

#[test]
fn test_distance_is_symmetric() {
    let forward = haversine_distance_km(12.90, 77.60, 28.61, 77.21);
    let backward = haversine_distance_km(28.61, 77.21, 12.90, 77.60);
    assert!((forward - backward).abs() < 1e-9);
}

#[test]
fn test_distance_is_non_negative_across_hemispheres() {
    let cases = [
        (51.50, -0.12, -33.86, 151.20),
        (-45.0, -70.0, 45.0, 70.0),
        (89.9, 0.0, -89.9, 0.0),
    ];

    for (lat1, lon1, lat2, lon2) in cases {
        let d = haversine_distance_km(lat1, lon1, lat2, lon2);
        assert!(d >= 0.0);
        assert!(d.is_finite());
    }
}
