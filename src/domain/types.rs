// ==========================================
// Lastmanagement Dashboard - Domain Types
// ==========================================
// Charge-release states derived from free-text
// operator status fields.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Charge State
// ==========================================
// Binary release state for an interval. Anything the
// classifier cannot positively recognize as a release
// is Denied (conservative default).
// Serialization format: SCREAMING_SNAKE_CASE, same as Display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargeState {
    Permitted,
    Denied,
}

impl ChargeState {
    /// True iff the interval allows operation (e.g. electrolyser may charge).
    pub fn is_permitted(&self) -> bool {
        matches!(self, ChargeState::Permitted)
    }
}

impl fmt::Display for ChargeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChargeState::Permitted => write!(f, "PERMITTED"),
            ChargeState::Denied => write!(f, "DENIED"),
        }
    }
}
