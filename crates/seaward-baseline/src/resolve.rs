//! Trajectory factor resolution.
//!
//! Selects the MIN and STR coefficient rows for a vessel's type from the
//! PP reference table. Resolution is total: a missing row degrades to the
//! neutral zero-coefficient line instead of failing, so a vessel type
//! absent from the table simply gets a zero baseline.
//!
//! Matching policy (uniform): labels are trimmed, then compared
//! ASCII-case-insensitively. This applies to both the `"PP"` category
//! filter and the `"MIN"`/`"STR"` trajectory labels.

use serde::{Deserialize, Serialize};
use tracing::warn;

use seaward_models::reference::{CATEGORY_PP, TRAJ_MIN, TRAJ_STR};
use seaward_models::{FactorLine, FactorSet, PpReferenceLine, Vessel};

/// Factor resolver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Restrict to rows whose category is `"PP"`. Disable when the
    /// reference dataset is already filtered to a single category.
    #[serde(default = "default_true")]
    pub apply_category_filter: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            apply_category_filter: true,
        }
    }
}

fn label_matches(label: &str, expected: &str) -> bool {
    label.trim().eq_ignore_ascii_case(expected)
}

/// Resolve the MIN/STR coefficient pair for a vessel.
///
/// Never fails: either trajectory that has no matching row comes back as
/// the neutral zero line (`FactorLine::default()`), logged at WARN.
pub fn resolve_factors(
    reference: &[PpReferenceLine],
    vessel: &Vessel,
    config: &ResolverConfig,
) -> FactorSet {
    let candidates = reference.iter().filter(|row| {
        row.vessel_type_id == vessel.vessel_type
            && (!config.apply_category_filter || label_matches(&row.category, CATEGORY_PP))
    });

    let mut min_factors: Option<FactorLine> = None;
    let mut str_factors: Option<FactorLine> = None;
    for row in candidates {
        if min_factors.is_none() && label_matches(&row.traj, TRAJ_MIN) {
            min_factors = Some(FactorLine::from(row));
        } else if str_factors.is_none() && label_matches(&row.traj, TRAJ_STR) {
            str_factors = Some(FactorLine::from(row));
        }
    }

    if min_factors.is_none() {
        warn!(
            imo_no = %vessel.imo_no,
            vessel_type = %vessel.vessel_type,
            "no MIN trajectory row for vessel type, substituting zero factors"
        );
    }
    if str_factors.is_none() {
        warn!(
            imo_no = %vessel.imo_no,
            vessel_type = %vessel.vessel_type,
            "no STR trajectory row for vessel type, substituting zero factors"
        );
    }

    FactorSet {
        min_factors: min_factors.unwrap_or_default(),
        str_factors: str_factors.unwrap_or_default(),
    }
}
