// ==========================================
// Lastmanagement Dashboard - State Classifier
// ==========================================
// Maps free-text operator status fields ("darf laden",
// "darf nicht laden", ...) to a binary charge state by
// two-keyword substring matching.
// ==========================================
// Total function: every input, including blank or
// missing text, yields exactly one state. Anything not
// positively recognized is Denied.
// ==========================================

use crate::domain::types::ChargeState;
use serde::{Deserialize, Serialize};

// ==========================================
// ClassifierKeywords - configuration
// ==========================================

/// The two keywords driving classification. Data, not code: the
/// defaults match the source workbook's operator vocabulary but the
/// same engine serves other datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierKeywords {
    /// Text must contain this to be a candidate for Permitted.
    pub permission: String,
    /// Text containing this is always Denied.
    pub negation: String,
}

impl Default for ClassifierKeywords {
    fn default() -> Self {
        Self {
            permission: "darf".to_string(),
            negation: "nicht".to_string(),
        }
    }
}

impl ClassifierKeywords {
    pub fn classify(&self, text: Option<&str>) -> ChargeState {
        classify(text, &self.permission, &self.negation)
    }
}

/// Classify a status text.
///
/// # Parameters
/// - text: raw status cell, `None` for blank cells
/// - permission_keyword / negation_keyword: matched as
///   case-insensitive substrings
///
/// # Returns
/// - Permitted iff the permission keyword is present and the
///   negation keyword is not; Denied in every other case, including
///   missing text.
pub fn classify(
    text: Option<&str>,
    permission_keyword: &str,
    negation_keyword: &str,
) -> ChargeState {
    let Some(text) = text else {
        return ChargeState::Denied;
    };

    let normalized = text.to_lowercase();
    let permission = permission_keyword.to_lowercase();
    let negation = negation_keyword.to_lowercase();

    if normalized.contains(&permission) && !normalized.contains(&negation) {
        ChargeState::Permitted
    } else {
        ChargeState::Denied
    }
}
