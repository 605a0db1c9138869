mod support;

use fleet_insights::parsing::{parse_loads, parse_loads_file, UNKNOWN_DRIVER};
use fleet_insights::services::{aggregate_drivers, summarize_fleet, FleetReport};
use support::{fixture, fixture_path};

#[test]
fn test_fixture_loads() {
    let loads = parse_loads(&fixture("loads_export.csv"));

    let ids: Vec<&str> = loads.iter().map(|l| l.load_no.as_str()).collect();
    assert_eq!(ids, vec!["101", "102", "103", "104"]);

    let first = &loads[0];
    assert_eq!(first.stops.len(), 2);
    assert_eq!(first.total_pallets, 24);
    assert_eq!(first.total_distance, 50.0);
    assert_eq!(first.total_return_leg, 20.0);
    assert_eq!(first.expected_time_minutes, 130);
    assert_eq!(first.stops[1].store_name, "River Plaza");

    assert_eq!(loads[1].expected_time_minutes, 155);
    assert_eq!(loads[3].driver, UNKNOWN_DRIVER);
}

#[test]
fn test_fixture_drivers_and_summary() {
    let loads = parse_loads(&fixture("loads_export.csv"));
    let drivers = aggregate_drivers(&loads);

    let names: Vec<&str> = drivers.iter().map(|d| d.driver_name.as_str()).collect();
    assert_eq!(names, vec!["Ben Ortiz", "Ann Lee", UNKNOWN_DRIVER]);

    let ann = &drivers[1];
    assert_eq!(ann.total_kms, 110.0);
    assert_eq!(ann.total_pallets, 32);
    assert_eq!(ann.avg_time_between_loads_minutes, 330);
    assert_eq!(ann.avg_expected_time_minutes, 100.0);
    assert_eq!(drivers[0].avg_time_between_loads_minutes, 0);

    let summary = summarize_fleet(&drivers, &loads);
    assert_eq!(summary.total_loads, 4);
    assert_eq!(summary.driver_count, 3);
    assert_eq!(summary.total_distance_km, 250.0);
    assert_eq!(summary.total_pallets, 59);
    assert_eq!(summary.avg_expected_time_minutes, 100.0);
}

#[test]
fn test_file_and_text_agree() {
    let from_file = parse_loads_file(&fixture_path("loads_export.csv")).unwrap();
    assert_eq!(from_file, parse_loads(&fixture("loads_export.csv")));
}

#[test]
fn test_report_json_shape() {
    let report = FleetReport::from_csv(&fixture("loads_export.csv"));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["summary"]["total_loads"], 4);
    assert_eq!(json["drivers"][0]["driver_name"], "Ben Ortiz");
    assert_eq!(json["loads"][0]["stops"][0]["store_no"], "S100");
    assert_eq!(json["checksum"].as_str().unwrap().len(), 64);
    assert!(json["generated_at"].is_string());
}

#[test]
fn test_report_digests() {
    let digests = FleetReport::from_csv(&fixture("loads_export.csv")).digests();
    assert_eq!(digests.len(), 3);
    assert_eq!(digests[1].name, "Ann Lee");
    assert_eq!(digests[1].routes, vec!["R10", "R12"]);
    assert_eq!(digests[1].avg_gap_minutes, 330);
}

#[test]
fn test_checksum_tracks_content() {
    let text = fixture("loads_export.csv");
    let a = FleetReport::from_csv(&text);
    let b = FleetReport::from_csv(&text);
    let c = FleetReport::from_csv(&text.replace("Hilltop", "Hillside"));
    assert_eq!(a.checksum, b.checksum);
    assert_ne!(a.checksum, c.checksum);
}
