//! # Structured Logging Bootstrap
//!
//! Centralized `tracing` initialization for seaward binaries.
//!
//! ## Logging Architecture
//! - **stdout**: WARN only (keeps report output on stdout readable;
//!   factor-fallback warnings still surface)
//! - **file**: INFO for seaward crates, WARN for deps (daily rotation)
//! - **RUST_LOG**: honored for file logs only; stdout stays bounded

use std::{fs, path::Path};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Guards that must be held for the lifetime of the process.
/// Dropping this will cause buffered logs to be lost.
pub struct TracingGuards {
    _file_guard: WorkerGuard,
}

fn ensure_logs_dir() {
    let dir = Path::new("logs");
    if !dir.exists() {
        // Best effort: stdout logging still works if this fails.
        let _ = fs::create_dir_all(dir);
    }
}

/// Initializes tracing with bounded stdout and rotated file logs.
///
/// # Parameters
/// * `service_name` - Identifier for the current executing binary.
///
/// # Returns
/// `TracingGuards` - must outlive the process or buffered logs are lost.
pub fn init_tracing(service_name: &str) -> TracingGuards {
    ensure_logs_dir();

    let file_appender = tracing_appender::rolling::daily("logs", format!("{service_name}.log"));
    let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);

    // stdout: WARN only, ignores RUST_LOG. The CLI prints its report to
    // stdout; log lines must not drown it.
    let stdout_filter = EnvFilter::new("warn");

    // file: INFO for our crates, WARN for deps, RUST_LOG overridable.
    let default_file_filter = "seaward=info,warn";
    let file_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_file_filter));

    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .compact()
        .with_filter(stdout_filter);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_filter(file_filter);

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .init();

    tracing::info!(
        "observability initialized for service: {} (stdout=WARN, file=logs/{}.log)",
        service_name,
        service_name
    );

    TracingGuards {
        _file_guard: file_guard,
    }
}
