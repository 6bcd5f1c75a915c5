//! Poseidon Principles trajectory reference table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::vessel::VesselTypeId;

/// Minimum-compliance trajectory label.
pub const TRAJ_MIN: &str = "MIN";

/// Striving (ambitious) trajectory label.
pub const TRAJ_STR: &str = "STR";

/// Reference category carrying the Poseidon Principles rows.
pub const CATEGORY_PP: &str = "PP";

/// One row of the PP reference coefficient table.
///
/// Static regulatory data: per vessel type, per trajectory, the five
/// coefficients of the baseline formula
/// `(a·year³ + b·year² + c·year + d) · DWT^e`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpReferenceLine {
    pub row_id: i64,

    /// Reference category; PP baselines live under `"PP"`.
    pub category: String,

    pub vessel_type_id: VesselTypeId,

    /// Size-band label within the vessel type (e.g. deadweight range).
    pub size: String,

    /// Trajectory label, `"MIN"` or `"STR"` after normalization.
    pub traj: String,

    pub a: Decimal,
    pub b: Decimal,
    pub c: Decimal,
    pub d: Decimal,
    pub e: Decimal,
}

/// A resolved coefficient set for one trajectory.
///
/// The default value is the neutral zero line: empty trajectory, all
/// coefficients zero. It yields a zero baseline rather than an error when
/// the reference table has no row for a vessel type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorLine {
    pub traj: String,
    pub a: Decimal,
    pub b: Decimal,
    pub c: Decimal,
    pub d: Decimal,
    pub e: Decimal,
}

impl FactorLine {
    /// True when this is the neutral fallback rather than a matched row.
    pub fn is_neutral(&self) -> bool {
        self.traj.is_empty()
    }
}

impl From<&PpReferenceLine> for FactorLine {
    fn from(row: &PpReferenceLine) -> Self {
        Self {
            traj: row.traj.trim().to_ascii_uppercase(),
            a: row.a,
            b: row.b,
            c: row.c,
            d: row.d,
            e: row.e,
        }
    }
}

/// The MIN/STR pair resolved for one vessel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorSet {
    pub min_factors: FactorLine,
    pub str_factors: FactorLine,
}
