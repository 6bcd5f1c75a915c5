//! Fleet catalog types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// IMO-style vessel identifier. Unique within a fleet catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ImoNo(pub i64);

impl ImoNo {
    pub fn new(imo: i64) -> Self {
        Self(imo)
    }
}

impl std::fmt::Display for ImoNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Categorical vessel-type code, shared between the fleet catalog and the
/// PP reference table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct VesselTypeId(pub i32);

impl VesselTypeId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for VesselTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One vessel in the fleet catalog.
///
/// Immutable reference data: created at load time, never mutated by the
/// computation crates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    /// IMO number (identity).
    pub imo_no: ImoNo,

    /// Display name.
    pub name: String,

    /// Vessel-type code, joins against `PpReferenceLine::vessel_type_id`.
    pub vessel_type: VesselTypeId,

    /// Maximum deadweight tonnage. Scales the baseline via the `DWT^e`
    /// term; must be non-negative for fractional exponents.
    pub max_deadweight: Decimal,
}
