// ==========================================
// Lastmanagement Dashboard - Import Layer
// ==========================================
// External input boundary: workbook/CSV reading, column
// binding and record building. Everything downstream of
// this layer works on typed in-memory records.
// ==========================================

// Module declarations
pub mod column_binding;
pub mod error;
pub mod file_parser;
pub mod quality;
pub mod record_builder;

// Re-export core types
pub use column_binding::{ColumnBinding, ColumnRequest};
pub use error::{ImportError, ImportResult};
pub use file_parser::{parse_csv, parse_excel, parse_file, RawTable};
pub use quality::{NonNumericCell, QualityReport};
pub use record_builder::{build_records, IngestBatch};
