//! Tests for nearest-station selection and top-K ranking

use super::{create_test_station, create_test_table};
use crate::Error;
use crate::app::models::UserLocation;
use crate::app::services::station_ranker::nearest_and_top_k;

#[test]
fn test_nearest_and_ordering_scenario() {
    let table = create_test_table(vec![
        create_test_station("A", 12.90, 77.60),
        create_test_station("B", 12.95, 77.65),
        create_test_station("C", 13.00, 77.70),
    ]);
    let user = UserLocation::new(12.90, 77.60).unwrap();

    let ranking = nearest_and_top_k(&user, &table, 5).unwrap();

    assert_eq!(ranking.nearest.station.name, "A");
    assert!(ranking.nearest.distance_km.abs() < 1e-6);

    let names: Vec<&str> = ranking
        .top_k
        .iter()
        .map(|r| r.station.name.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn test_empty_table_rejected() {
    let table = create_test_table(vec![]);
    let user = UserLocation::new(12.90, 77.60).unwrap();

    match nearest_and_top_k(&user, &table, 5) {
        Err(Error::EmptyTable) => {}
        other => panic!("Expected EmptyTable, got {:?}", other),
    }
}

#[test]
fn test_top_k_sorted_ascending() {
    let table = create_test_table(vec![
        create_test_station("Far", 14.00, 78.00),
        create_test_station("Near", 12.91, 77.61),
        create_test_station("Middle", 13.20, 77.80),
    ]);
    let user = UserLocation::new(12.90, 77.60).unwrap();

    let ranking = nearest_and_top_k(&user, &table, 3).unwrap();

    assert_eq!(ranking.top_k.len(), 3);
    for pair in ranking.top_k.windows(2) {
        assert!(pair[0].distance_km <= pair[1].distance_km);
    }
    assert_eq!(ranking.top_k[0].station.name, "Near");
    assert_eq!(ranking.top_k[2].station.name, "Far");
}

#[test]
fn test_top_k_length_clamped_to_table_size() {
    let table = create_test_table(vec![
        create_test_station("A", 12.90, 77.60),
        create_test_station("B", 12.95, 77.65),
    ]);
    let user = UserLocation::new(12.90, 77.60).unwrap();

    let ranking = nearest_and_top_k(&user, &table, 10).unwrap();
    assert_eq!(ranking.top_k.len(), 2);

    let ranking = nearest_and_top_k(&user, &table, 1).unwrap();
    assert_eq!(ranking.top_k.len(), 1);
    assert_eq!(ranking.top_k[0].station.name, "A");
}

#[test]
fn test_tie_break_uses_original_table_order() {
    // Twin stations at identical coordinates: insertion order must win,
    // for both nearest selection and the top-K sequence
    let table = create_test_table(vec![
        create_test_station("Twin First", 12.90, 77.60),
        create_test_station("Twin Second", 12.90, 77.60),
        create_test_station("Elsewhere", 13.50, 78.10),
    ]);
    let user = UserLocation::new(12.90, 77.60).unwrap();

    let ranking = nearest_and_top_k(&user, &table, 3).unwrap();

    assert_eq!(ranking.nearest.station.name, "Twin First");
    assert_eq!(ranking.top_k[0].station.name, "Twin First");
    assert_eq!(ranking.top_k[1].station.name, "Twin Second");
    assert_eq!(ranking.top_k[2].station.name, "Elsewhere");
}

#[test]
fn test_nearest_has_minimum_distance_over_whole_table() {
    let table = create_test_table(vec![
        create_test_station("S1", 13.10, 77.45),
        create_test_station("S2", 12.80, 77.72),
        create_test_station("S3", 12.93, 77.58),
        create_test_station("S4", 13.30, 77.90),
    ]);
    let user = UserLocation::new(12.95, 77.60).unwrap();

    let ranking = nearest_and_top_k(&user, &table, 2).unwrap();

    // Recompute every distance independently and check the minimum
    use crate::app::services::station_ranker::haversine_distance_km;
    for station in table.iter() {
        let d = haversine_distance_km(
            user.latitude(),
            user.longitude(),
            station.latitude,
            station.longitude,
        );
        assert!(ranking.nearest.distance_km <= d + 1e-12);
    }
}

#[test]
fn test_repeated_queries_are_deterministic() {
    let table = create_test_table(vec![
        create_test_station("A", 12.90, 77.60),
        create_test_station("B", 12.95, 77.65),
        create_test_station("C", 13.00, 77.70),
    ]);
    let user = UserLocation::new(12.97, 77.66).unwrap();

    let first = nearest_and_top_k(&user, &table, 3).unwrap();
    let second = nearest_and_top_k(&user, &table, 3).unwrap();

    assert_eq!(first.nearest, second.nearest);
    assert_eq!(first.top_k, second.top_k);
}

#[test]
fn test_query_does_not_mutate_shared_table() {
    let table = create_test_table(vec![
        create_test_station("A", 12.90, 77.60),
        create_test_station("B", 12.95, 77.65),
    ]);
    let before: Vec<_> = table.records().to_vec();
    let user = UserLocation::new(13.00, 77.70).unwrap();

    nearest_and_top_k(&user, &table, 2).unwrap();

    assert_eq!(table.records(), before.as_slice());
}

#[test]
fn test_distances_are_non_negative() {
    let table = create_test_table(vec![
        create_test_station("North", 51.50, -0.12),
        create_test_station("South", -33.86, 151.20),
    ]);
    let user = UserLocation::new(12.90, 77.60).unwrap();

    let ranking = nearest_and_top_k(&user, &table, 2).unwrap();
    for ranked in &ranking.top_k {
        assert!(ranked.distance_km >= 0.0);
    }
}
