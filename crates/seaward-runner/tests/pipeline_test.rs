//! Full-pipeline integration tests: fixture files → loaders → fleet
//! computation → report and series projections.

use std::fs;
use std::path::PathBuf;

use rust_decimal_macros::dec;
use tempfile::TempDir;

use seaward_models::ImoNo;
use seaward_report::{
    build_chart, compute_fleet, FleetComplianceReport, FleetConfig, SkipReason, VesselSelection,
};
use seaward_runner::{load_emissions, load_reference, load_vessels};

const VESSELS_JSON: &str = r#"[
  { "Name": "Aurora Spirit", "IMONo": 9700001, "VesselType": 1, "MaxDeadWg": 50000 },
  { "Name": "Borealis", "IMONo": 9700002, "VesselType": 99, "MaxDeadWg": 81200 }
]"#;

const PP_REFERENCE_JSON: &str = r#"[
  { "RowID": 1, "Category": "PP", "VesselTypeID": 1, "Size": "0-999999", "Traj": " MIN ",
    "a": 0, "b": 0, "c": 0, "d": 100, "e": 0 },
  { "RowID": 2, "Category": "PP", "VesselTypeID": 1, "Size": "0-999999", "Traj": "STR",
    "a": 0, "b": 0, "c": 0, "d": 80, "e": 0 },
  { "RowID": 3, "Category": "IMO", "VesselTypeID": 99, "Size": "0-999999", "Traj": "MIN",
    "a": 0, "b": 0, "c": 0, "d": 55, "e": 0 }
]"#;

const EMISSIONS_JSON: &str = r#"[
  { "EID": 1, "LOGID": 10, "VesselID": 9700001,
    "FromUTC": "2024-03-30T00:00:00.000Z", "TOUTC": "2024-03-31T00:00:00.000Z",
    "AERCO2T2W": 100.0, "AERCO2eW2W": 110.0 },
  { "EID": 2, "LOGID": 11, "VesselID": 9700001,
    "FromUTC": "2024-06-29T00:00:00.000Z", "TOUTC": "2024-06-30T00:00:00.000Z",
    "AERCO2T2W": 100.0, "AERCO2eW2W": 90.0 },
  { "EID": 3, "LOGID": 12, "VesselID": 9700001,
    "FromUTC": "2024-07-14T00:00:00.000Z", "TOUTC": "2024-07-15T00:00:00.000Z",
    "AERCO2T2W": 100.0, "AERCO2eW2W": 500.0 },
  { "EID": 4, "LOGID": 13, "VesselID": 9700001,
    "FromUTC": "2024-09-29T00:00:00.000Z", "TOUTC": "not-a-timestamp",
    "AERCO2T2W": 100.0, "AERCO2eW2W": 120.0 },
  { "EID": 5, "LOGID": 14, "VesselID": 9700002,
    "FromUTC": "2024-03-30T00:00:00.000Z", "TOUTC": "2024-03-31T00:00:00.000Z",
    "AERCO2T2W": 100.0, "AERCO2eW2W": 60.0 }
]"#;

fn write_fixtures(dir: &TempDir) -> (PathBuf, PathBuf, PathBuf) {
    let vessels = dir.path().join("vessels.json");
    let reference = dir.path().join("pp-reference.json");
    let emissions = dir.path().join("daily-log-emissions.json");
    fs::write(&vessels, VESSELS_JSON).unwrap();
    fs::write(&reference, PP_REFERENCE_JSON).unwrap();
    fs::write(&emissions, EMISSIONS_JSON).unwrap();
    (vessels, reference, emissions)
}

#[test]
fn loaders_apply_the_source_data_contract() {
    let dir = TempDir::new().unwrap();
    let (vessels_path, reference_path, emissions_path) = write_fixtures(&dir);

    let vessels = load_vessels(&vessels_path).unwrap();
    assert_eq!(vessels.len(), 2);
    assert_eq!(vessels[0].imo_no, ImoNo(9700001));
    assert_eq!(vessels[0].max_deadweight, dec!(50000));

    let reference = load_reference(&reference_path).unwrap();
    assert_eq!(reference.len(), 3);
    // Labels arrive trimmed from the loader.
    assert_eq!(reference[0].traj, "MIN");

    let load = load_emissions(&emissions_path).unwrap();
    // Row 4 has a malformed period-end and is dropped, not fatal.
    assert_eq!(load.emissions.len(), 4);
    assert_eq!(load.skipped_malformed, 1);
}

#[test]
fn full_pipeline_from_fixtures_to_report() {
    let dir = TempDir::new().unwrap();
    let (vessels_path, reference_path, emissions_path) = write_fixtures(&dir);

    let vessels = load_vessels(&vessels_path).unwrap();
    let reference = load_reference(&reference_path).unwrap();
    let load = load_emissions(&emissions_path).unwrap();

    let config = FleetConfig::default();
    let fleet = compute_fleet(&vessels, &reference, &load.emissions, &config);

    // Aurora Spirit: baseline min = 100, quarter-end records in Q1 and Q2.
    assert_eq!(fleet.series.len(), 1);
    let aurora = &fleet.series[0];
    assert_eq!(aurora.vessel.imo_no, ImoNo(9700001));
    assert_eq!(aurora.baselines.min, dec!(100));
    assert_eq!(aurora.baselines.striving, dec!(80));
    assert_eq!(aurora.quarterly.len(), 2);
    assert_eq!(aurora.quarterly[0].quarter.label(), "Q1 2024");
    assert_eq!(aurora.quarterly[0].deviation_pct, dec!(10.00));
    assert_eq!(aurora.quarterly[1].quarter.label(), "Q2 2024");
    assert_eq!(aurora.quarterly[1].deviation_pct, dec!(-10.00));
    assert_eq!(aurora.avg_deviation_pct, dec!(0.00));

    // Borealis: its only reference row is category IMO, so MIN resolves
    // to zero factors and the vessel is skipped with a typed reason.
    assert_eq!(fleet.skipped.len(), 1);
    assert_eq!(fleet.skipped[0].imo_no, ImoNo(9700002));
    assert_eq!(fleet.skipped[0].reason, SkipReason::ZeroMinBaseline);

    let report = FleetComplianceReport::build(&fleet, &config);
    let metrics = report.vessels.get("9700001").unwrap();
    assert_eq!(metrics.baseline_min, "100.00");
    assert_eq!(metrics.quarters.len(), 2);

    let summary = report.to_text_summary();
    assert!(summary.contains("VESSEL: Aurora Spirit (IMO 9700001)"));
    assert!(summary.contains("Borealis"));
}

#[test]
fn category_filter_toggle_rescues_non_pp_rows() {
    let dir = TempDir::new().unwrap();
    let (vessels_path, reference_path, emissions_path) = write_fixtures(&dir);

    let vessels = load_vessels(&vessels_path).unwrap();
    let reference = load_reference(&reference_path).unwrap();
    let load = load_emissions(&emissions_path).unwrap();

    let mut config = FleetConfig::default();
    config.resolver.apply_category_filter = false;

    let fleet = compute_fleet(&vessels, &reference, &load.emissions, &config);

    // With the category filter off, Borealis picks up the IMO-category
    // MIN row (baseline 55) and joins the series.
    assert_eq!(fleet.series.len(), 2);
    let borealis = fleet
        .series
        .iter()
        .find(|s| s.vessel.imo_no == ImoNo(9700002))
        .unwrap();
    assert_eq!(borealis.baselines.min, dec!(55));
    // (60 - 55) / 55 * 100 = 9.0909...
    assert_eq!(borealis.quarterly[0].deviation_pct, dec!(9.09));
}

#[test]
fn chart_projection_follows_vessel_selection() {
    let dir = TempDir::new().unwrap();
    let (vessels_path, reference_path, emissions_path) = write_fixtures(&dir);

    let vessels = load_vessels(&vessels_path).unwrap();
    let reference = load_reference(&reference_path).unwrap();
    let load = load_emissions(&emissions_path).unwrap();

    let config = FleetConfig::default();
    let fleet = compute_fleet(&vessels, &reference, &load.emissions, &config);

    let all = build_chart(&fleet, VesselSelection::All);
    assert_eq!(all.categories, vec!["Q1 2024", "Q2 2024"]);
    assert_eq!(all.series.len(), 1);
    assert_eq!(all.series[0].name, "Aurora Spirit");
    assert_eq!(all.series[0].data, vec![Some(10.00), Some(-10.00)]);

    let none = build_chart(&fleet, VesselSelection::One(ImoNo(9700002)));
    assert!(none.series.is_empty());
}

#[test]
fn report_digest_is_stable_across_reloads() {
    let dir = TempDir::new().unwrap();
    let (vessels_path, reference_path, emissions_path) = write_fixtures(&dir);
    let config = FleetConfig::default();

    let build = || {
        let vessels = load_vessels(&vessels_path).unwrap();
        let reference = load_reference(&reference_path).unwrap();
        let load = load_emissions(&emissions_path).unwrap();
        let fleet = compute_fleet(&vessels, &reference, &load.emissions, &config);
        FleetComplianceReport::build(&fleet, &config)
    };

    let first = build();
    let second = build();
    assert_eq!(first, second);
    assert_eq!(first.digest, second.digest);
}
