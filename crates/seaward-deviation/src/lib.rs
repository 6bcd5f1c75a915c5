//! # Seaward Deviation
//!
//! Quarterly compliance deviation: folds a vessel's daily-log emission
//! series into per-quarter percentage deviations from its PP minimum
//! baseline.
//!
//! Two-stage pipeline, both stages pure:
//! 1. Filter to exact quarter-end records and compute a per-record
//!    deviation percentage against the minimum baseline.
//! 2. Group by (vessel, quarter), average, and order chronologically on
//!    the numeric `(year, quarter)` key.
//!
//! ## Invariants
//! - The quarter-end filter matches exactly 3/31, 6/30, 9/30, 12/31 on
//!   the record's own period-end day; nothing is snapped to a boundary.
//! - The baseline is normalized with `abs()` before use; a coefficient
//!   set can yield a negative figure that represents a magnitude.
//! - A zero minimum baseline is a typed error (`DivisionUndefined`),
//!   never a silent infinity.
//! - Ordering compares year then quarter number, never the label string.

pub mod aggregate;

pub use aggregate::{
    aggregate_quarterly_deviations, aggregate_quarters, deviation_points, DeviationConfig,
    DeviationError, DeviationPoint, QuarterlyDeviation,
};
