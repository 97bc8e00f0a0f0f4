// ==========================================
// Lastmanagement Dashboard - Record Builder
// ==========================================
// Turns a bound raw table into the canonical
// timestamped record stream: typed days, reconstructed
// timestamps, numeric metrics, normalized status text.
// ==========================================
// One pass; recovered problems (non-numeric metrics,
// unparseable timestamps) land in the quality report,
// never abort the build.
// ==========================================

use crate::domain::record::{IntervalRecord, TimestampedRecord};
use crate::engine::timestamp;
use crate::importer::column_binding::ColumnBinding;
use crate::importer::file_parser::RawTable;
use crate::importer::quality::QualityReport;
use std::collections::HashMap;

/// A built ingest batch: the record stream plus its quality report.
#[derive(Debug, Clone)]
pub struct IngestBatch {
    pub records: Vec<TimestampedRecord>,
    pub report: QualityReport,
}

/// Parse a metric cell. Empty cells and non-numeric text both come
/// back as `None`; the caller decides whether that is a quality
/// finding (non-numeric text is, a blank cell is not).
fn parse_metric(text: Option<&str>) -> Result<Option<f64>, ()> {
    match text {
        None => Ok(None),
        Some(raw) => {
            // tolerate decimal commas from German locale exports
            let normalized = raw.replace(',', ".");
            normalized.trim().parse::<f64>().map(Some).map_err(|_| ())
        }
    }
}

/// Normalize a status cell: trimmed text, blank -> `None`.
fn normalize_status(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Build the canonical record stream from a bound table.
///
/// Records are emitted in source-row order (the workbook is
/// chronological); rows with unparseable days or interval starts
/// keep `timestamp = None` and are reported as gaps.
pub fn build_records(table: &RawTable, binding: &ColumnBinding) -> IngestBatch {
    let mut report = QualityReport::new(table.rows.len());
    let mut records = Vec::with_capacity(table.rows.len());

    for row in 0..table.rows.len() {
        let day_raw = table.cell(row, binding.day).unwrap_or("").to_string();
        let interval_label = table.cell(row, binding.interval).unwrap_or("").to_string();

        let mut metrics = HashMap::with_capacity(binding.metrics.len());
        for (name, column) in &binding.metrics {
            let value = match parse_metric(table.cell(row, *column)) {
                Ok(value) => value,
                Err(()) => {
                    report.record_non_numeric(row, name);
                    None
                }
            };
            metrics.insert(name.clone(), value);
        }

        let mut status_fields = HashMap::with_capacity(binding.status_fields.len());
        for (name, column) in &binding.status_fields {
            status_fields.insert(name.clone(), normalize_status(table.cell(row, *column)));
        }

        let reconstructed = timestamp::reconstruct(&day_raw, &interval_label);
        if reconstructed.is_none() {
            report.record_timestamp_gap(row);
        }

        records.push(TimestampedRecord {
            record: IntervalRecord {
                day: timestamp::parse_day(&day_raw),
                day_raw,
                interval_label,
                metrics,
                status_fields,
                source_row: row,
            },
            timestamp: reconstructed,
        });
    }

    IngestBatch { records, report }
}
