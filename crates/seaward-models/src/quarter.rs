//! Calendar-quarter keys.
//!
//! Quarter ordering is numeric on `(year, quarter)`; the display label
//! (`"Q3 2024"`) is never used as a sort key.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A calendar quarter. Field order gives the derived `Ord` the required
/// year-then-quarter comparison.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Quarter {
    pub year: i32,
    pub quarter: u8,
}

impl Quarter {
    pub fn new(year: i32, quarter: u8) -> Self {
        debug_assert!((1..=4).contains(&quarter), "quarter must be 1-4");
        Self { year, quarter }
    }

    /// Quarter containing the given instant (month 7 falls in Q3).
    pub fn from_date(at: DateTime<Utc>) -> Self {
        Self {
            year: at.year(),
            quarter: (at.month() as u8).div_ceil(3),
        }
    }

    /// Whether the instant falls exactly on a quarter-end calendar day:
    /// 3/31, 6/30, 9/30 or 12/31. No tolerance window; 2/29 and 12/30 are
    /// not quarter ends.
    pub fn is_quarter_end(at: DateTime<Utc>) -> bool {
        matches!(
            (at.month(), at.day()),
            (3, 31) | (6, 30) | (9, 30) | (12, 31)
        )
    }

    /// Display label, e.g. `"Q3 2024"`.
    pub fn label(&self) -> String {
        format!("Q{} {}", self.quarter, self.year)
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{} {}", self.quarter, self.year)
    }
}
