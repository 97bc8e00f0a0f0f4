// ==========================================
// Lastmanagement Dashboard - Annual Cost Extrapolator
// ==========================================
// Projects a one-year total from four designated
// representative days: a baseline day, a typical day
// repeated for the rest of the year, a maintenance day
// and the day right after maintenance.
// ==========================================
// The repetition multiplier is derived from the number
// of non-repeating designated days, never written as a
// free literal.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Days in the projected year.
const DAYS_PER_YEAR: i64 = 365;

// ==========================================
// DayRole - which designated day is which
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayRole {
    Baseline,
    Standard,
    Maintenance,
    PostMaintenance,
}

impl fmt::Display for DayRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayRole::Baseline => write!(f, "baseline"),
            DayRole::Standard => write!(f, "standard"),
            DayRole::Maintenance => write!(f, "maintenance"),
            DayRole::PostMaintenance => write!(f, "post_maintenance"),
        }
    }
}

// ==========================================
// DesignatedDays - named configuration
// ==========================================

/// The four hand-picked calendar days representing a "typical
/// year". Configuration, not embedded constants: the same engine
/// serves other calendars and datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignatedDays {
    /// Starting-situation day, counted once.
    pub baseline: NaiveDate,
    /// Typical day, repeated for the remainder of the year.
    pub standard: NaiveDate,
    /// Atypical maintenance day (e.g. reduced throughput).
    pub maintenance: NaiveDate,
    /// The day immediately following maintenance.
    pub post_maintenance: NaiveDate,
}

impl DesignatedDays {
    /// Designated days counted exactly once in the projection.
    /// The standard day is not in this list: it repeats.
    pub fn non_repeating(&self) -> [(DayRole, NaiveDate); 3] {
        [
            (DayRole::Baseline, self.baseline),
            (DayRole::Maintenance, self.maintenance),
            (DayRole::PostMaintenance, self.post_maintenance),
        ]
    }

    /// How often the standard day repeats: a full year minus the
    /// explicitly modeled non-repeating days. 362 for this four-day
    /// model; tracks the model if the day count ever changes.
    pub fn standard_repetitions(&self) -> i64 {
        DAYS_PER_YEAR - self.non_repeating().len() as i64
    }
}

// ==========================================
// ProjectionError
// ==========================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// A designated day is absent from the per-day total table. The
    /// projection never substitutes a default: a result computed
    /// from partial designated days would be silently wrong.
    #[error("designated day missing from totals: {role} = {day}")]
    MissingDay { role: DayRole, day: NaiveDate },
}

pub type ProjectionResult<T> = Result<T, ProjectionError>;

// ==========================================
// project_annual
// ==========================================

/// Project a one-year total from per-day metric totals.
///
/// # Parameters
/// - day_totals: fully materialized per-day total table
/// - days: the four designated days, supplied as configuration
///
/// # Returns
/// - Ok(total): `baseline + standard * repetitions + maintenance +
///   post_maintenance`, unrounded; rounding is a presentation
///   concern of the caller
/// - Err(ProjectionError::MissingDay): any designated day absent
///
/// Pure function; recomputed on demand whenever the underlying
/// dataset changes.
pub fn project_annual(
    day_totals: &HashMap<NaiveDate, f64>,
    days: &DesignatedDays,
) -> ProjectionResult<f64> {
    let lookup = |role: DayRole, day: NaiveDate| -> ProjectionResult<f64> {
        day_totals
            .get(&day)
            .copied()
            .ok_or(ProjectionError::MissingDay { role, day })
    };

    let standard = lookup(DayRole::Standard, days.standard)?;
    let once: f64 = days
        .non_repeating()
        .into_iter()
        .map(|(role, day)| lookup(role, day))
        .sum::<ProjectionResult<f64>>()?;

    Ok(once + standard * days.standard_repetitions() as f64)
}

/// Presentation rounding recommended at the display boundary
/// (2 decimal places). Kept out of the formula itself.
pub fn round_for_display(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn designated() -> DesignatedDays {
        DesignatedDays {
            baseline: date(2025, 2, 1),
            standard: date(2025, 2, 2),
            maintenance: date(2025, 2, 3),
            post_maintenance: date(2025, 2, 4),
        }
    }

    fn totals(values: [f64; 4]) -> HashMap<NaiveDate, f64> {
        let days = designated();
        HashMap::from([
            (days.baseline, values[0]),
            (days.standard, values[1]),
            (days.maintenance, values[2]),
            (days.post_maintenance, values[3]),
        ])
    }

    #[test]
    fn test_projection_formula() {
        // 10 + 5*362 + 2 + 3 = 1825
        let result = project_annual(&totals([10.0, 5.0, 2.0, 3.0]), &designated()).unwrap();
        assert_eq!(result, 1825.0);
    }

    #[test]
    fn test_multiplier_tracks_model() {
        assert_eq!(designated().standard_repetitions(), 362);
        assert_eq!(designated().non_repeating().len(), 3);
    }

    #[test]
    fn test_missing_day_is_an_error() {
        let days = designated();
        for missing in [
            days.baseline,
            days.standard,
            days.maintenance,
            days.post_maintenance,
        ] {
            let mut table = totals([1.0, 1.0, 1.0, 1.0]);
            table.remove(&missing);
            let err = project_annual(&table, &days).unwrap_err();
            let ProjectionError::MissingDay { day, .. } = err;
            assert_eq!(day, missing);
        }
    }

    #[test]
    fn test_no_rounding_inside_formula() {
        let result =
            project_annual(&totals([0.005, 0.001, 0.0, 0.0]), &designated()).unwrap();
        assert!((result - (0.005 + 0.001 * 362.0)).abs() < 1e-12);
    }

    #[test]
    fn test_round_for_display() {
        assert_eq!(round_for_display(1.005001), 1.01);
        assert_eq!(round_for_display(1825.0), 1825.0);
        assert_eq!(round_for_display(-2.346), -2.35);
    }
}
