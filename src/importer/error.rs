// ==========================================
// Lastmanagement Dashboard - Import Error Types
// ==========================================
// thiserror derive enums, grouped by concern.
// ==========================================

use thiserror::Error;

/// Import-layer error type
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== file errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (only .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    #[error("Excel parse failed: {0}")]
    ExcelParseError(String),

    #[error("CSV parse failed: {0}")]
    CsvParseError(String),

    #[error("workbook has no data rows: {0}")]
    EmptySheet(String),

    // ===== configuration-boundary errors =====
    // A requested column is absent from the source. Surfaced before
    // any aggregation runs; never silently skipped.
    #[error("requested column missing from source: {column} (required by {context})")]
    MissingColumn { column: String, context: String },

    // ===== generic tail =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result alias for the import layer
pub type ImportResult<T> = Result<T, ImportError>;
