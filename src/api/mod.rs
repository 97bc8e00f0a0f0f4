// ==========================================
// Lastmanagement Dashboard - API Layer
// ==========================================
// Facade surface consumed by the UI glue: chart
// bundles, scalar figures, ingest.
// ==========================================

pub mod dashboard_api;
pub mod error;

// Re-export core types
pub use dashboard_api::DashboardApi;
pub use error::{ApiError, ApiResult};
