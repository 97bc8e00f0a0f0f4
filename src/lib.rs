// ==========================================
// Lastmanagement Wasserstoff - Dashboard Data Engine
// ==========================================
// Turns interval-based operational records (hydrogen
// storage, water, electricity, costs) into the derived
// time series and summary figures the dashboard draws.
// ==========================================
// Rendering, page layout and navigation are external
// collaborators; this crate owns the reconstruction and
// aggregation semantics only.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - value records
pub mod domain;

// Engine layer - pure transforms
pub mod engine;

// Import layer - external data boundary
pub mod importer;

// Configuration layer
pub mod config;

// Logging setup
pub mod logging;

// API layer - facade for the UI glue
pub mod api;

// ==========================================
// Re-exports
// ==========================================

// Domain types
pub use domain::{
    AnnotationBand, ChargeState, IntervalRecord, LabeledSeries, SeriesBundle, TimestampedRecord,
};

// Engine surface
pub use engine::{
    classify, cumulative, project_annual, round_for_display, ClassifierKeywords, DesignatedDays,
    Partition, ProjectionError,
};

// Configuration
pub use config::{AnnualSpec, ChartSpec, DashboardConfig, OverlaySpec};

// API
pub use api::{ApiError, ApiResult, DashboardApi};

// Importer
pub use importer::{ImportError, IngestBatch, QualityReport};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Lastmanagement Wasserstoff";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
