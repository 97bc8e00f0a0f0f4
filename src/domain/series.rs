// ==========================================
// Lastmanagement Dashboard - Series Bundle
// ==========================================
// The packaged output handed to the charting
// collaborator: a shared timestamp axis plus one or
// more aligned value series, an optional secondary-axis
// overlay and optional per-point annotation bands.
// ==========================================
// The engine never renders pixels; color, legend and
// axis decisions belong to the consumer.
// ==========================================

use crate::domain::types::ChargeState;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// LabeledSeries - one aligned value series
// ==========================================

/// A named numeric series aligned to the bundle's timestamp axis.
/// `None` points are gaps (missing or non-numeric source data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSeries {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

// ==========================================
// AnnotationBand - per-point categorical overlay
// ==========================================

/// Classified per-point states used by the consumer to band or
/// color the primary series (e.g. charge-release windows).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationBand {
    pub label: String,
    pub states: Vec<ChargeState>,
}

// ==========================================
// SeriesBundle - one chart's worth of data
// ==========================================

/// Everything an external charting collaborator needs to draw one
/// chart. All vectors have the same length as `timestamps`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesBundle {
    pub chart_id: String,
    pub title: String,

    /// Shared x-axis. `None` entries are unparseable timestamps,
    /// preserved so they surface as gaps.
    pub timestamps: Vec<Option<NaiveDateTime>>,

    /// Primary-axis series.
    pub series: Vec<LabeledSeries>,

    /// Optional secondary-axis series (e.g. SOC line or a
    /// per-day cumulative overlay).
    pub overlay: Option<LabeledSeries>,

    /// Optional per-point annotation bands.
    pub bands: Vec<AnnotationBand>,
}

impl SeriesBundle {
    /// Number of points on the shared axis.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Alignment invariant: every series and band matches the axis
    /// length. Checked by tests and debug assertions at the API
    /// boundary.
    pub fn is_aligned(&self) -> bool {
        let n = self.timestamps.len();
        self.series.iter().all(|s| s.values.len() == n)
            && self.overlay.as_ref().map_or(true, |s| s.values.len() == n)
            && self.bands.iter().all(|b| b.states.len() == n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_check() {
        let bundle = SeriesBundle {
            chart_id: "storage".to_string(),
            title: "Speicherverlauf".to_string(),
            timestamps: vec![None, None],
            series: vec![LabeledSeries {
                label: "delta".to_string(),
                values: vec![Some(1.0), None],
            }],
            overlay: None,
            bands: vec![],
        };
        assert!(bundle.is_aligned());
        assert_eq!(bundle.len(), 2);

        let misaligned = SeriesBundle {
            series: vec![LabeledSeries {
                label: "delta".to_string(),
                values: vec![Some(1.0)],
            }],
            ..bundle
        };
        assert!(!misaligned.is_aligned());
    }
}
