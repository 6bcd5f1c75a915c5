//! seaward CLI — Poseidon Principles compliance deviation over fixture data.
//!
//! ## Usage
//!
//! ```bash
//! # Fleet compliance report (text summary)
//! seaward report --vessels data/vessels.json \
//!                --pp-reference data/pp-reference.json \
//!                --emissions data/daily-log-emissions.json
//!
//! # Same report as canonical JSON for a different target year
//! seaward report --vessels data/vessels.json \
//!                --pp-reference data/pp-reference.json \
//!                --emissions data/daily-log-emissions.json \
//!                --year 2025 --format json
//!
//! # Chart-shaped series for one vessel
//! seaward series --vessels data/vessels.json \
//!                --pp-reference data/pp-reference.json \
//!                --emissions data/daily-log-emissions.json \
//!                --vessel 9700001
//! ```
//!
//! ## Exit Codes
//! - 0: Pipeline ran and at least one vessel produced a deviation series
//! - 1: Pipeline ran but every vessel was skipped (zero baseline / no data)
//! - 2: Error (missing files, invalid JSON, invalid arguments)

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use seaward_baseline::ResolverConfig;
use seaward_deviation::DeviationConfig;
use seaward_report::{build_chart, compute_fleet, FleetComplianceReport, FleetConfig, VesselSelection};
use seaward_runner::{load_emissions, load_reference, load_vessels};

/// seaward: Poseidon Principles compliance deviation engine.
///
/// Compares each vessel's quarter-end AER intensity against its
/// trajectory baseline and aggregates the deviation per quarter.
#[derive(Parser)]
#[command(name = "seaward")]
#[command(version = "0.1.0")]
#[command(about = "Poseidon Principles compliance deviation engine")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: text (default) or json
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Fleet compliance report with per-quarter deviations and digest
    Report {
        /// Path to the vessel catalog (vessels.json)
        #[arg(long)]
        vessels: PathBuf,

        /// Path to the PP reference table (pp-reference.json)
        #[arg(long = "pp-reference")]
        reference: PathBuf,

        /// Path to the daily-log emission series (daily-log-emissions.json)
        #[arg(long)]
        emissions: PathBuf,

        /// Target calendar year for baseline evaluation
        #[arg(long, default_value_t = 2024)]
        year: i32,

        /// Do not restrict reference rows to the "PP" category
        #[arg(long)]
        no_category_filter: bool,

        /// Drop records with non-positive intensity before computing deviation
        #[arg(long)]
        exclude_non_positive: bool,
    },

    /// Chart-shaped deviation series (quarter categories + line series)
    Series {
        /// Path to the vessel catalog (vessels.json)
        #[arg(long)]
        vessels: PathBuf,

        /// Path to the PP reference table (pp-reference.json)
        #[arg(long = "pp-reference")]
        reference: PathBuf,

        /// Path to the daily-log emission series (daily-log-emissions.json)
        #[arg(long)]
        emissions: PathBuf,

        /// Target calendar year for baseline evaluation
        #[arg(long, default_value_t = 2024)]
        year: i32,

        /// Restrict to one vessel by IMO number (default: all vessels)
        #[arg(long)]
        vessel: Option<i64>,

        /// Do not restrict reference rows to the "PP" category
        #[arg(long)]
        no_category_filter: bool,

        /// Drop records with non-positive intensity before computing deviation
        #[arg(long)]
        exclude_non_positive: bool,
    },
}

fn fleet_config(year: i32, no_category_filter: bool, exclude_non_positive: bool) -> FleetConfig {
    FleetConfig {
        year,
        resolver: ResolverConfig {
            apply_category_filter: !no_category_filter,
        },
        deviation: DeviationConfig {
            exclude_non_positive,
        },
    }
}

/// Returns whether at least one vessel produced a deviation series.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Report {
            vessels,
            reference,
            emissions,
            year,
            no_category_filter,
            exclude_non_positive,
        } => {
            let catalog = load_vessels(vessels)?;
            let reference = load_reference(reference)?;
            let load = load_emissions(emissions)?;

            let config = fleet_config(*year, *no_category_filter, *exclude_non_positive);
            let fleet = compute_fleet(&catalog, &reference, &load.emissions, &config);
            let report = FleetComplianceReport::build(&fleet, &config);

            match cli.format {
                OutputFormat::Text => print!("{}", report.to_text_summary()),
                OutputFormat::Json => println!("{}", report.to_json()),
            }

            Ok(!fleet.series.is_empty())
        }
        Commands::Series {
            vessels,
            reference,
            emissions,
            year,
            vessel,
            no_category_filter,
            exclude_non_positive,
        } => {
            let catalog = load_vessels(vessels)?;
            let reference = load_reference(reference)?;
            let load = load_emissions(emissions)?;

            let config = fleet_config(*year, *no_category_filter, *exclude_non_positive);
            let fleet = compute_fleet(&catalog, &reference, &load.emissions, &config);

            let selection = match vessel {
                Some(imo) => VesselSelection::One(seaward_models::ImoNo(*imo)),
                None => VesselSelection::All,
            };
            let chart = build_chart(&fleet, selection);

            match cli.format {
                OutputFormat::Text => {
                    println!("categories: {}", chart.categories.join(", "));
                    for series in &chart.series {
                        let values: Vec<String> = series
                            .data
                            .iter()
                            .map(|v| match v {
                                Some(v) => format!("{v:.2}"),
                                None => "-".to_string(),
                            })
                            .collect();
                        println!("{}: {}", series.name, values.join(", "));
                    }
                }
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&chart).expect("serialization should not fail")
                ),
            }

            Ok(!chart.series.is_empty())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guards = seaward_core::init_tracing("seaward");

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            eprintln!("no vessel produced a deviation series");
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
