//! # Seaward Models
//!
//! Shared domain types for the seaward compliance engine.
//!
//! Everything here is value-like reference data: vessels, Poseidon
//! Principles (PP) reference coefficient rows, and daily-log emission
//! records. The computation crates never mutate these inputs; they only
//! project derived values from them.
//!
//! ## Types
//! - `Vessel` - fleet catalog entry (IMO number, type, deadweight tonnage)
//! - `PpReferenceLine` - one row of the PP trajectory coefficient table
//! - `FactorLine` / `FactorSet` - resolved per-vessel coefficient sets
//! - `Emission` - one daily-log emission record with AER intensity
//! - `Quarter` - calendar-quarter ordering key and label

pub mod emission;
pub mod quarter;
pub mod reference;
pub mod vessel;

pub use emission::{parse_period_end, Emission, ModelError};
pub use quarter::Quarter;
pub use reference::{FactorLine, FactorSet, PpReferenceLine};
pub use vessel::{ImoNo, Vessel, VesselTypeId};
