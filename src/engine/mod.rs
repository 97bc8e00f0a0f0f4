// ==========================================
// Lastmanagement Dashboard - Engine Layer
// ==========================================
// The reconstruction and aggregation core: pure,
// synchronous transforms over in-memory records.
// ==========================================
// No I/O in this layer; loading and rendering are
// external collaborators.
// ==========================================

pub mod classifier;
pub mod cumulative;
pub mod projection;
pub mod timestamp;

// Re-export core engine surface
pub use classifier::{classify, ClassifierKeywords};
pub use cumulative::{cumulative, Partition};
pub use projection::{
    project_annual, round_for_display, DayRole, DesignatedDays, ProjectionError,
    ProjectionResult,
};
pub use timestamp::{interval_start, parse_day, parse_start_time, reconstruct};
