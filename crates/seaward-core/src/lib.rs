//! # Seaward Core
//!
//! Shared runtime concerns for seaward binaries. Currently just the
//! observability bootstrap; the computation crates stay free of any
//! process-level setup.

pub mod observability;

pub use observability::{init_tracing, TracingGuards};
