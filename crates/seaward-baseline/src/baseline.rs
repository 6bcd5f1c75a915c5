//! PP baseline evaluation.

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use seaward_models::{FactorLine, FactorSet};

use crate::decimal::dwt_pow;

/// Lower alignment band factor: `yx_low = 0.33 · min`.
fn yx_low_factor() -> Decimal {
    Decimal::new(33, 2)
}

/// Upper alignment band factor: `yx_up = 1.67 · min`.
fn yx_up_factor() -> Decimal {
    Decimal::new(167, 2)
}

/// The four baseline variants for one vessel and target year.
///
/// Derived values; never persisted, always recomputed from
/// (coefficient set, year, DWT).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baselines {
    /// Minimum-compliance trajectory baseline.
    pub min: Decimal,

    /// Striving trajectory baseline.
    pub striving: Decimal,

    /// Lower alignment band, `0.33 · min`.
    pub yx_low: Decimal,

    /// Upper alignment band, `1.67 · min`.
    pub yx_up: Decimal,
}

/// Evaluate `(a·year³ + b·year² + c·year + d) · DWT^e` for one
/// coefficient set.
///
/// `dwt` must be non-negative; the power term is not well-defined for
/// negative bases with fractional exponents. Callers own that guard.
pub fn calculate_baseline(factors: &FactorLine, year: i32, dwt: Decimal) -> Decimal {
    let y = Decimal::from(year);
    let poly = factors.a * y.powi(3) + factors.b * y.powi(2) + factors.c * y + factors.d;
    poly * dwt_pow(dwt, factors.e)
}

/// Evaluate all four baseline variants from a resolved factor set.
pub fn calculate_baselines(factors: &FactorSet, year: i32, dwt: Decimal) -> Baselines {
    let min = calculate_baseline(&factors.min_factors, year, dwt);
    let striving = calculate_baseline(&factors.str_factors, year, dwt);

    Baselines {
        min,
        striving,
        yx_low: min * yx_low_factor(),
        yx_up: min * yx_up_factor(),
    }
}
