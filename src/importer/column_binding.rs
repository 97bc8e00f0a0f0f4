// ==========================================
// Lastmanagement Dashboard - Column Binding
// ==========================================
// Binds the requested column names (day, interval,
// metrics, status fields) to positions in the raw
// table, before any aggregation runs.
// ==========================================
// A missing requested column is a configuration error,
// never silently skipped.
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawTable;

// ==========================================
// ColumnRequest - what the configuration asks for
// ==========================================

/// The set of named columns the configured charts need from the
/// source, by exact header name.
#[derive(Debug, Clone, Default)]
pub struct ColumnRequest {
    pub day: String,
    pub interval: String,
    pub metrics: Vec<String>,
    pub status_fields: Vec<String>,
}

// ==========================================
// ColumnBinding - resolved positions
// ==========================================

/// Resolved column positions for one source table.
#[derive(Debug, Clone)]
pub struct ColumnBinding {
    pub day: usize,
    pub interval: usize,
    /// (column name, index) pairs in request order.
    pub metrics: Vec<(String, usize)>,
    pub status_fields: Vec<(String, usize)>,
}

impl ColumnBinding {
    /// Bind a request against the table headers.
    ///
    /// # Returns
    /// - Err(ImportError::MissingColumn) for the first requested
    ///   column absent from the source; `context` names the
    ///   requesting role so the message is actionable.
    pub fn bind(table: &RawTable, request: &ColumnRequest) -> ImportResult<Self> {
        let find = |name: &str, context: &str| -> ImportResult<usize> {
            table
                .column_index(name)
                .ok_or_else(|| ImportError::MissingColumn {
                    column: name.to_string(),
                    context: context.to_string(),
                })
        };

        let day = find(&request.day, "day column")?;
        let interval = find(&request.interval, "interval column")?;

        let mut metrics = Vec::with_capacity(request.metrics.len());
        for name in &request.metrics {
            metrics.push((name.clone(), find(name, "metric column")?));
        }

        let mut status_fields = Vec::with_capacity(request.status_fields.len());
        for name in &request.status_fields {
            status_fields.push((name.clone(), find(name, "status column")?));
        }

        Ok(Self {
            day,
            interval,
            metrics,
            status_fields,
        })
    }
}
