//! # Seaward Runner
//!
//! I/O boundary of the seaward workspace: loads the vessel catalog, PP
//! reference table and daily-log emissions from JSON fixture files in the
//! source-data naming convention, and hands plain domain records to the
//! computation crates.

pub mod fixtures;

pub use fixtures::{load_emissions, load_reference, load_vessels, EmissionLoad};
