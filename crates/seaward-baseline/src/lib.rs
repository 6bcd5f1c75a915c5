//! # Seaward Baseline
//!
//! Poseidon Principles baseline computation: resolve the MIN/STR
//! trajectory coefficient sets for a vessel, then evaluate the PP
//! baseline formula
//!
//! ```text
//! baseline = (a·year³ + b·year² + c·year + d) · DWT^e
//! ```
//!
//! All arithmetic runs on `rust_decimal::Decimal`; baselines feed
//! compliance decisions, so binary floating-point drift across the cubic
//! polynomial and the fractional power term is not acceptable. `f64`
//! appears only after final rounding, in display layers.
//!
//! No I/O, no side effects, deterministic.

pub mod baseline;
pub mod decimal;
pub mod resolve;

pub use baseline::{calculate_baseline, calculate_baselines, Baselines};
pub use decimal::{dwt_pow, round2};
pub use resolve::{resolve_factors, ResolverConfig};
