// ==========================================
// Lastmanagement Dashboard - Ingest Quality Report
// ==========================================
// Locally recovered data problems never abort the
// pipeline, but they must stay observable: counts and
// affected row indices per ingest batch.
// ==========================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One non-numeric metric cell, identified by data row and column
/// name. The value is treated as "no data", never coerced to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonNumericCell {
    pub row: usize,
    pub column: String,
}

/// Data-quality findings for one ingest batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Ingest batch id, for correlating log lines and diagnostics.
    pub batch_id: Uuid,

    /// Data rows seen (blank rows excluded by the file parser).
    pub rows_total: usize,

    /// Metric cells that failed numeric parsing, excluded from sums.
    pub non_numeric_cells: Vec<NonNumericCell>,

    /// Rows whose day/interval text produced no valid timestamp;
    /// these records stay in the stream as gaps.
    pub timestamp_gaps: Vec<usize>,
}

impl QualityReport {
    pub fn new(rows_total: usize) -> Self {
        Self {
            batch_id: Uuid::new_v4(),
            rows_total,
            non_numeric_cells: Vec::new(),
            timestamp_gaps: Vec::new(),
        }
    }

    pub fn record_non_numeric(&mut self, row: usize, column: &str) {
        self.non_numeric_cells.push(NonNumericCell {
            row,
            column: column.to_string(),
        });
    }

    pub fn record_timestamp_gap(&mut self, row: usize) {
        self.timestamp_gaps.push(row);
    }

    pub fn is_clean(&self) -> bool {
        self.non_numeric_cells.is_empty() && self.timestamp_gaps.is_empty()
    }

    /// Emit the findings at warn level; silent for clean batches.
    pub fn log_summary(&self) {
        if self.is_clean() {
            tracing::debug!(
                batch_id = %self.batch_id,
                rows = self.rows_total,
                "ingest clean"
            );
            return;
        }

        tracing::warn!(
            batch_id = %self.batch_id,
            rows = self.rows_total,
            non_numeric = self.non_numeric_cells.len(),
            timestamp_gaps = self.timestamp_gaps.len(),
            "ingest recovered data-quality issues"
        );
    }
}
