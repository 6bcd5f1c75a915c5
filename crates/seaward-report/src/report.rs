//! Deterministic fleet compliance report.
//!
//! Pure builder converting a fleet pipeline result into:
//! - a canonical JSON report struct
//! - a deterministic text summary
//!
//! ## Invariants
//! - No file I/O (the runner writes files)
//! - Deterministic: BTreeMap ordering, canonical JSON
//! - All Decimal values serialized as 2 dp strings
//! - Digest = SHA-256 of canonical JSON with the digest field empty

use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use seaward_baseline::round2;
use seaward_models::Quarter;

use crate::fleet::{FleetConfig, FleetDeviation, SkippedVessel};

/// Schema version for compliance reports (frozen v1).
pub const COMPLIANCE_REPORT_SCHEMA_VERSION: &str = "1";

/// Fixed "123.45" rendering: round to 2 dp, then pad to 2 dp.
fn fmt2(value: rust_decimal::Decimal) -> String {
    format!("{:.2}", round2(value))
}

/// One averaged quarter in a vessel's section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuarterEntry {
    /// Label, e.g. `"Q3 2024"`.
    pub quarter: String,
    /// Numeric sort key behind the label.
    pub quarter_key: Quarter,
    pub period_end: DateTime<Utc>,
    /// Deviation percentage, 2 dp string.
    pub deviation_pct: String,
}

/// Per-vessel section of the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VesselComplianceMetrics {
    pub name: String,
    pub vessel_type: i32,
    pub max_deadweight: String,

    // Baseline variants, 2 dp strings.
    pub baseline_min: String,
    pub baseline_striving: String,
    pub baseline_yx_low: String,
    pub baseline_yx_up: String,

    pub avg_deviation_pct: String,
    pub quarters: Vec<QuarterEntry>,
}

/// The complete fleet compliance report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FleetComplianceReport {
    pub schema_version: String,
    pub target_year: i32,
    /// Keyed by IMO number rendered as a string; BTreeMap keeps the
    /// serialized key order stable.
    pub vessels: BTreeMap<String, VesselComplianceMetrics>,
    pub skipped: Vec<SkippedVessel>,
    pub digest: String,
}

impl FleetComplianceReport {
    /// Build a complete report from a fleet result.
    ///
    /// Procedure: assemble with an empty digest, compute SHA-256 over the
    /// canonical JSON, then set the digest.
    pub fn build(fleet: &FleetDeviation, config: &FleetConfig) -> Self {
        let vessels: BTreeMap<String, VesselComplianceMetrics> = fleet
            .series
            .iter()
            .map(|s| {
                let quarters = s
                    .quarterly
                    .iter()
                    .map(|q| QuarterEntry {
                        quarter: q.quarter.label(),
                        quarter_key: q.quarter,
                        period_end: q.period_end,
                        deviation_pct: fmt2(q.deviation_pct),
                    })
                    .collect();

                let metrics = VesselComplianceMetrics {
                    name: s.vessel.name.clone(),
                    vessel_type: s.vessel.vessel_type.0,
                    max_deadweight: s.vessel.max_deadweight.to_string(),
                    baseline_min: fmt2(s.baselines.min),
                    baseline_striving: fmt2(s.baselines.striving),
                    baseline_yx_low: fmt2(s.baselines.yx_low),
                    baseline_yx_up: fmt2(s.baselines.yx_up),
                    avg_deviation_pct: fmt2(s.avg_deviation_pct),
                    quarters,
                };

                (s.vessel.imo_no.to_string(), metrics)
            })
            .collect();

        let mut report = Self {
            schema_version: COMPLIANCE_REPORT_SCHEMA_VERSION.to_string(),
            target_year: config.year,
            vessels,
            skipped: fleet.skipped.clone(),
            digest: String::new(),
        };

        report.digest = report.compute_digest_hex();
        report
    }

    /// Canonical JSON with the digest field emptied; digest input.
    pub fn to_canonical_json_with_empty_digest(&self) -> String {
        let mut canonical = self.clone();
        canonical.digest = String::new();

        // serde_json with BTreeMap produces stable key order
        serde_json::to_string(&canonical).expect("serialization should not fail")
    }

    /// SHA-256 of the canonical JSON, hex encoded.
    pub fn compute_digest_hex(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.to_canonical_json_with_empty_digest().as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Serialize to pretty JSON (includes computed digest).
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).expect("serialization should not fail")
    }

    /// Deterministic text summary.
    pub fn to_text_summary(&self) -> String {
        let mut out = String::new();

        writeln!(
            out,
            "================================================================================"
        )
        .unwrap();
        writeln!(out, "POSEIDON PRINCIPLES COMPLIANCE REPORT").unwrap();
        writeln!(
            out,
            "================================================================================"
        )
        .unwrap();
        writeln!(out, "Target Year: {}", self.target_year).unwrap();
        writeln!(out, "Vessels:     {}", self.vessels.len()).unwrap();
        writeln!(out, "Skipped:     {}", self.skipped.len()).unwrap();
        writeln!(out).unwrap();

        for (imo_no, metrics) in &self.vessels {
            writeln!(
                out,
                "--------------------------------------------------------------------------------"
            )
            .unwrap();
            writeln!(out, "VESSEL: {} (IMO {})", metrics.name, imo_no).unwrap();
            writeln!(
                out,
                "--------------------------------------------------------------------------------"
            )
            .unwrap();
            writeln!(out, "  Type:          {}", metrics.vessel_type).unwrap();
            writeln!(out, "  DWT:           {}", metrics.max_deadweight).unwrap();
            writeln!(
                out,
                "  Baselines:     min={} striving={} yx_low={} yx_up={}",
                metrics.baseline_min,
                metrics.baseline_striving,
                metrics.baseline_yx_low,
                metrics.baseline_yx_up
            )
            .unwrap();
            writeln!(out, "  Avg Deviation: {}%", metrics.avg_deviation_pct).unwrap();
            for entry in &metrics.quarters {
                writeln!(
                    out,
                    "    {:<8} deviation={}%",
                    entry.quarter, entry.deviation_pct
                )
                .unwrap();
            }
            writeln!(out).unwrap();
        }

        if !self.skipped.is_empty() {
            writeln!(
                out,
                "--------------------------------------------------------------------------------"
            )
            .unwrap();
            writeln!(out, "SKIPPED VESSELS").unwrap();
            for skip in &self.skipped {
                writeln!(
                    out,
                    "  {} (IMO {}): {:?}",
                    skip.name, skip.imo_no, skip.reason
                )
                .unwrap();
            }
            writeln!(out).unwrap();
        }

        writeln!(
            out,
            "--------------------------------------------------------------------------------"
        )
        .unwrap();
        writeln!(out, "Report Digest: {}", self.digest).unwrap();
        writeln!(
            out,
            "================================================================================"
        )
        .unwrap();

        out
    }
}
