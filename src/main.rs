// ==========================================
// Lastmanagement Wasserstoff - CLI Entry
// ==========================================
// Thin glue: load the workbook, run the engine, hand
// the series bundles to stdout as JSON for the
// charting collaborator and log the summary figures.
// ==========================================

use h2_lastmanagement::engine::round_for_display;
use h2_lastmanagement::{DashboardApi, DashboardConfig};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    h2_lastmanagement::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", h2_lastmanagement::APP_NAME);
    tracing::info!("version: {}", h2_lastmanagement::VERSION);
    tracing::info!("==================================================");

    let mut args = env::args().skip(1);
    let Some(source) = args.next() else {
        eprintln!("usage: h2-lastmanagement <workbook.xlsx|data.csv> [config.json]");
        return ExitCode::FAILURE;
    };
    let config_path = args.next();

    match run(&source, config_path.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(source: &str, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => DashboardConfig::from_json_file(path)?,
        None => DashboardConfig::default(),
    };

    let api = DashboardApi::new(config);
    let batch = api.ingest_file(source)?;

    let bundles = api.build_all_charts(&batch.records)?;
    for bundle in &bundles {
        tracing::info!(
            chart = %bundle.chart_id,
            points = bundle.len(),
            series = bundle.series.len(),
            bands = bundle.bands.len(),
            "chart assembled"
        );
    }

    if let Some(annual) = api.configured_annual_projection(&batch.records)? {
        tracing::info!(
            annual_total = round_for_display(annual),
            "annual cost projection"
        );
    }

    // the charting collaborator reads the bundles from stdout
    serde_json::to_writer_pretty(std::io::stdout().lock(), &bundles)?;
    println!();

    Ok(())
}
