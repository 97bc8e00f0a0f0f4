// ==========================================
// Lastmanagement Dashboard - Interval Records
// ==========================================
// One record per (day, interval) pair of operational
// data: metric columns (storage delta, SOC, water,
// electricity, costs) plus free-text status fields.
// ==========================================
// All records are immutable value objects: the engine
// only ever recomputes, it never mutates.
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// IntervalRecord - one raw input row
// ==========================================

/// One row of operational data for a fixed sub-daily time slice.
///
/// Metric values are `None` when the source cell was empty or
/// non-numeric; such values are excluded from sums, never coerced
/// to zero. Status fields are `None` when the cell was blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalRecord {
    /// Calendar day (no time component); `None` when the day cell
    /// could not be parsed. Unparseable days are preserved so they
    /// surface as gaps instead of silently vanishing.
    pub day: Option<NaiveDate>,

    /// Raw day cell text, kept for timestamp reconstruction and
    /// diagnostics.
    pub day_raw: String,

    /// Textual interval range, e.g. `"08:00–08:15"`. Only the start
    /// is used for timestamp reconstruction.
    pub interval_label: String,

    /// Metric column name -> numeric value (`None` = no data).
    pub metrics: HashMap<String, Option<f64>>,

    /// Status column name -> free operator text (`None` = blank).
    pub status_fields: HashMap<String, Option<String>>,

    /// 0-based data-row index in the source table.
    pub source_row: usize,
}

impl IntervalRecord {
    /// Metric value for a named column (`None` when absent or non-numeric).
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied().flatten()
    }

    /// Status text for a named column.
    pub fn status(&self, name: &str) -> Option<&str> {
        self.status_fields.get(name).and_then(|v| v.as_deref())
    }
}

// ==========================================
// TimestampedRecord - reconstructed row
// ==========================================

/// An `IntervalRecord` augmented with its reconstructed absolute
/// point-in-time.
///
/// `timestamp` is `None` when either the day or the interval start
/// failed to parse; such records stay in the stream and render as
/// visible gaps downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimestampedRecord {
    pub record: IntervalRecord,
    pub timestamp: Option<NaiveDateTime>,
}

impl TimestampedRecord {
    /// Grouping key for per-day aggregation, independent of the
    /// reconstructed timestamp.
    pub fn day(&self) -> Option<NaiveDate> {
        self.record.day
    }

    pub fn metric(&self, name: &str) -> Option<f64> {
        self.record.metric(name)
    }

    pub fn status(&self, name: &str) -> Option<&str> {
        self.record.status(name)
    }
}
