// ==========================================
// Lastmanagement Dashboard - Domain Layer
// ==========================================
// Immutable value records: raw interval rows, their
// timestamped form, derived states and the series
// bundles handed to the charting collaborator.
// ==========================================
// No data access, no engine logic lives here.
// ==========================================

pub mod record;
pub mod series;
pub mod types;

// Re-export core types
pub use record::{IntervalRecord, TimestampedRecord};
pub use series::{AnnotationBand, LabeledSeries, SeriesBundle};
pub use types::ChargeState;
