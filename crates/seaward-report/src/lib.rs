//! # Seaward Report
//!
//! Fleet-level orchestration of the compliance pipeline and its
//! presentation-ready outputs:
//!
//! - `fleet` - run resolve → baselines → quarterly aggregation for every
//!   vessel in a catalog, with typed skip reasons for degenerate cases
//! - `series` - project the fleet result into chart-shaped line series
//!   (categorical quarter axis, numeric deviation axis)
//! - `report` - deterministic, digest-bearing compliance report
//!   (canonical JSON + text summary)
//!
//! The orchestration is as pure as its parts: it holds no state between
//! calls and performs no I/O.

pub mod fleet;
pub mod report;
pub mod series;

pub use fleet::{
    average_deviation, compute_fleet, FleetConfig, FleetDeviation, SkipReason, SkippedVessel,
    VesselDeviationSeries,
};
pub use report::{FleetComplianceReport, QuarterEntry, VesselComplianceMetrics};
pub use series::{build_chart, ChartSeries, DeviationChart, VesselSelection};
