// ==========================================
// DashboardApi Integration Tests
// ==========================================
// Scope:
// 1. Ingest: CSV fixture -> record stream + quality report
// 2. Series assembly: aligned bundles, overlays, bands
// 3. Annual projection over ingested records
// 4. Selection boundary: day-range filtering
// ==========================================

mod helpers;

use chrono::NaiveDate;
use h2_lastmanagement::engine::round_for_display;
use h2_lastmanagement::{ApiError, ChargeState, DashboardApi, ImportError};
use helpers::test_data_builder::{
    designated_days, fixture_config, two_day_workbook, WorkbookBuilder,
};

// ==========================================
// Ingest
// ==========================================

#[test]
fn test_ingest_two_day_workbook() {
    h2_lastmanagement::logging::init_test();

    let file = two_day_workbook();
    let api = DashboardApi::new(fixture_config());
    let batch = api.ingest_file(file.path()).expect("ingest failed");

    assert_eq!(batch.records.len(), 6);
    assert!(batch.report.is_clean());
    assert_eq!(
        batch.records[0].day(),
        NaiveDate::from_ymd_opt(2025, 2, 1)
    );
    assert!(batch.records.iter().all(|r| r.timestamp.is_some()));
}

#[test]
fn test_ingest_missing_column_fails_before_aggregation() {
    let file = WorkbookBuilder::new()
        .row("01.02.2025", "08:00–08:15", "1", "0.5", "0.4", "darf laden")
        .write();

    let mut config = fixture_config();
    config.charts[0]
        .metrics
        .push("Wasserverbrauch [l]".to_string());

    let api = DashboardApi::new(config);
    let err = api.ingest_file(file.path()).unwrap_err();
    match err {
        ApiError::Import(ImportError::MissingColumn { column, .. }) => {
            assert_eq!(column, "Wasserverbrauch [l]");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_ingest_reports_quality_findings() {
    let file = WorkbookBuilder::new()
        .row("01.02.2025", "08:00–08:15", "kaputt", "0.5", "0.4", "darf laden")
        .row("ohne Datum", "08:15–08:30", "2", "0.5", "0.4", "darf laden")
        .write();

    let api = DashboardApi::new(fixture_config());
    let batch = api.ingest_file(file.path()).unwrap();

    // both rows preserved, both findings observable
    assert_eq!(batch.records.len(), 2);
    assert_eq!(batch.report.non_numeric_cells.len(), 1);
    assert_eq!(batch.report.non_numeric_cells[0].row, 0);
    assert_eq!(batch.report.timestamp_gaps, vec![1]);
}

// ==========================================
// Series assembly
// ==========================================

#[test]
fn test_all_charts_aligned() {
    let file = two_day_workbook();
    let api = DashboardApi::new(fixture_config());
    let batch = api.ingest_file(file.path()).unwrap();

    let bundles = api.build_all_charts(&batch.records).unwrap();
    assert_eq!(bundles.len(), 2);
    for bundle in &bundles {
        assert!(bundle.is_aligned(), "bundle {} misaligned", bundle.chart_id);
        assert_eq!(bundle.len(), 6);
    }
}

#[test]
fn test_storage_chart_band_and_overlay() {
    let file = two_day_workbook();
    let api = DashboardApi::new(fixture_config());
    let batch = api.ingest_file(file.path()).unwrap();

    let bundle = &api.build_all_charts(&batch.records).unwrap()[0];

    // SOC on the secondary axis
    let overlay = bundle.overlay.as_ref().unwrap();
    assert_eq!(overlay.label, "SOC [%]");
    assert_eq!(overlay.values[0], Some(0.5));

    // release band follows the operator text
    let states = &bundle.bands[0].states;
    assert_eq!(states[0], ChargeState::Permitted);
    assert_eq!(states[1], ChargeState::Denied); // "darf nicht laden"
    assert_eq!(states[4], ChargeState::Denied); // "unbekannt"
}

#[test]
fn test_cost_chart_cumulative_resets_per_day() {
    let file = two_day_workbook();
    let api = DashboardApi::new(fixture_config());
    let batch = api.ingest_file(file.path()).unwrap();

    let bundle = &api.build_all_charts(&batch.records).unwrap()[1];
    let overlay = bundle.overlay.as_ref().unwrap();
    let values: Vec<f64> = overlay.values.iter().map(|v| v.unwrap()).collect();

    // day 1: 0.40, 0.50, 1.10; day 2 resets: 0.80, 0.85, 1.05
    let expected = [0.40, 0.50, 1.10, 0.80, 0.85, 1.05];
    for (value, expected) in values.iter().zip(expected) {
        assert!((value - expected).abs() < 1e-9, "{value} != {expected}");
    }
}

#[test]
fn test_serialized_bundle_for_charting_collaborator() {
    let file = two_day_workbook();
    let api = DashboardApi::new(fixture_config());
    let batch = api.ingest_file(file.path()).unwrap();

    let bundles = api.build_all_charts(&batch.records).unwrap();
    let json = serde_json::to_string(&bundles).unwrap();
    assert!(json.contains("speicherverlauf"));
    assert!(json.contains("PERMITTED"));
}

// ==========================================
// Selection boundary
// ==========================================

#[test]
fn test_day_range_filter_before_core() {
    let file = two_day_workbook();
    let api = DashboardApi::new(fixture_config());
    let batch = api.ingest_file(file.path()).unwrap();

    let day = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    let filtered = DashboardApi::filter_day_range(&batch.records, day, day);

    // the core only ever sees what it is given
    let bundle = api.build_chart(&filtered, &fixture_config().charts[1]).unwrap();
    let overlay = bundle.overlay.clone().unwrap();
    assert_eq!(bundle.len(), 3);
    let last = overlay.values.last().unwrap().unwrap();
    assert!((last - 1.10).abs() < 1e-9);
}

// ==========================================
// Annual projection
// ==========================================

#[test]
fn test_annual_projection_end_to_end() {
    // per-day cost totals: 10 / 5 / 2 / 3 over the designated days
    let file = WorkbookBuilder::new()
        .row("01.02.2025", "08:00–08:15", "0", "0", "10", "x")
        .row("02.02.2025", "08:00–08:15", "0", "0", "2", "x")
        .row("02.02.2025", "08:15–08:30", "0", "0", "3", "x")
        .row("03.02.2025", "08:00–08:15", "0", "0", "2", "x")
        .row("04.02.2025", "08:00–08:15", "0", "0", "3", "x")
        .write();

    let api = DashboardApi::new(fixture_config());
    let batch = api.ingest_file(file.path()).unwrap();

    let total = api
        .annual_projection(&batch.records, "Stromkosten [€]", &designated_days())
        .unwrap();
    assert_eq!(total, 1825.0);
    assert_eq!(round_for_display(total), 1825.0);
}

#[test]
fn test_annual_projection_missing_designated_day() {
    let file = WorkbookBuilder::new()
        .row("01.02.2025", "08:00–08:15", "0", "0", "10", "x")
        .write();

    let api = DashboardApi::new(fixture_config());
    let batch = api.ingest_file(file.path()).unwrap();

    let err = api
        .annual_projection(&batch.records, "Stromkosten [€]", &designated_days())
        .unwrap_err();
    assert!(matches!(err, ApiError::Projection(_)));
}
