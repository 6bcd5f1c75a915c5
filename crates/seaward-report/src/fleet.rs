//! Whole-fleet pipeline runs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use seaward_baseline::{calculate_baselines, resolve_factors, round2, Baselines, ResolverConfig};
use seaward_deviation::{
    aggregate_quarterly_deviations, DeviationConfig, DeviationError, QuarterlyDeviation,
};
use seaward_models::{Emission, ImoNo, PpReferenceLine, Vessel};

/// Configuration for a fleet pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetConfig {
    /// Target calendar year the baselines are evaluated for.
    #[serde(default = "default_year")]
    pub year: i32,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub deviation: DeviationConfig,
}

fn default_year() -> i32 {
    2024
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            year: default_year(),
            resolver: ResolverConfig::default(),
            deviation: DeviationConfig::default(),
        }
    }
}

/// Why a vessel produced no deviation series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The MIN trajectory resolved to zero factors, so the percentage
    /// deviation is undefined.
    ZeroMinBaseline,
    /// No emission record landed on a quarter-end day.
    NoQuarterEndData,
}

/// A vessel excluded from the fleet result, with its reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedVessel {
    pub imo_no: ImoNo,
    pub name: String,
    pub reason: SkipReason,
}

/// One vessel's full pipeline output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselDeviationSeries {
    pub vessel: Vessel,
    pub baselines: Baselines,
    /// Chronologically ordered per-quarter deviations.
    pub quarterly: Vec<QuarterlyDeviation>,
    /// Mean of the quarterly deviations, 2 dp.
    pub avg_deviation_pct: Decimal,
}

/// Fleet-wide pipeline output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetDeviation {
    pub series: Vec<VesselDeviationSeries>,
    pub skipped: Vec<SkippedVessel>,
}

/// Mean of a quarterly deviation series, rounded to 2 dp. Zero for an
/// empty series.
pub fn average_deviation(quarterly: &[QuarterlyDeviation]) -> Decimal {
    if quarterly.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = quarterly.iter().map(|q| q.deviation_pct).sum();
    round2(sum / Decimal::from(quarterly.len() as u64))
}

/// Run the full compliance pipeline for every vessel in the catalog.
///
/// Vessels whose minimum baseline is zero (MIN trajectory missing from
/// the reference table) and vessels without quarter-end emission data are
/// reported in `skipped` rather than failing the run.
pub fn compute_fleet(
    vessels: &[Vessel],
    reference: &[PpReferenceLine],
    emissions: &[Emission],
    config: &FleetConfig,
) -> FleetDeviation {
    let mut series = Vec::new();
    let mut skipped = Vec::new();

    for vessel in vessels {
        let factors = resolve_factors(reference, vessel, &config.resolver);
        let baselines = calculate_baselines(&factors, config.year, vessel.max_deadweight);

        let quarterly = match aggregate_quarterly_deviations(
            emissions,
            vessel.imo_no,
            baselines.min,
            &config.deviation,
        ) {
            Ok(quarterly) => quarterly,
            Err(DeviationError::DivisionUndefined { .. }) => {
                warn!(
                    imo_no = %vessel.imo_no,
                    name = %vessel.name,
                    "skipping vessel: zero minimum baseline, deviation undefined"
                );
                skipped.push(SkippedVessel {
                    imo_no: vessel.imo_no,
                    name: vessel.name.clone(),
                    reason: SkipReason::ZeroMinBaseline,
                });
                continue;
            }
        };

        if quarterly.is_empty() {
            debug!(
                imo_no = %vessel.imo_no,
                name = %vessel.name,
                "skipping vessel: no quarter-end emission records"
            );
            skipped.push(SkippedVessel {
                imo_no: vessel.imo_no,
                name: vessel.name.clone(),
                reason: SkipReason::NoQuarterEndData,
            });
            continue;
        }

        let avg_deviation_pct = average_deviation(&quarterly);
        series.push(VesselDeviationSeries {
            vessel: vessel.clone(),
            baselines,
            quarterly,
            avg_deviation_pct,
        });
    }

    FleetDeviation { series, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use seaward_models::VesselTypeId;

    fn vessel(imo: i64, vessel_type: i32, name: &str) -> Vessel {
        Vessel {
            imo_no: ImoNo(imo),
            name: name.to_string(),
            vessel_type: VesselTypeId(vessel_type),
            max_deadweight: dec!(50000),
        }
    }

    fn min_row(vessel_type: i32, d: Decimal) -> PpReferenceLine {
        PpReferenceLine {
            row_id: vessel_type as i64,
            category: "PP".to_string(),
            vessel_type_id: VesselTypeId(vessel_type),
            size: "0-999999".to_string(),
            traj: "MIN".to_string(),
            a: dec!(0),
            b: dec!(0),
            c: dec!(0),
            d,
            e: dec!(0),
        }
    }

    fn emission(imo: i64, m: u32, d: u32, aer: Decimal) -> Emission {
        let to_utc = Utc.with_ymd_and_hms(2024, m, d, 0, 0, 0).unwrap();
        Emission {
            id: imo * 10000 + (m as i64) * 100 + d as i64,
            log_id: 1,
            imo_no: ImoNo(imo),
            from_utc: to_utc - chrono::Duration::days(1),
            to_utc,
            total_co2_t2w: dec!(100),
            total_co2_w2w: dec!(120),
            aer_co2_t2w: aer,
            aer_co2e_w2w: aer,
            eeoi_co2e_w2w: aer,
        }
    }

    #[test]
    fn fleet_run_produces_series_and_typed_skips() {
        let vessels = vec![
            vessel(9700001, 1, "Alpha"),
            // Type 2 has no reference row: zero baseline.
            vessel(9700002, 2, "Bravo"),
            // Type 1 but no quarter-end records.
            vessel(9700003, 1, "Charlie"),
        ];
        let reference = vec![min_row(1, dec!(10))];
        let emissions = vec![
            emission(9700001, 3, 31, dec!(11)),
            emission(9700001, 6, 30, dec!(13)),
            emission(9700003, 5, 17, dec!(13)),
        ];

        let fleet = compute_fleet(&vessels, &reference, &emissions, &FleetConfig::default());

        assert_eq!(fleet.series.len(), 1);
        let alpha = &fleet.series[0];
        assert_eq!(alpha.vessel.imo_no, ImoNo(9700001));
        assert_eq!(alpha.quarterly.len(), 2);
        // mean of 10.00 and 30.00
        assert_eq!(alpha.avg_deviation_pct, dec!(20.00));

        assert_eq!(fleet.skipped.len(), 2);
        assert_eq!(fleet.skipped[0].reason, SkipReason::ZeroMinBaseline);
        assert_eq!(fleet.skipped[1].reason, SkipReason::NoQuarterEndData);
    }

    #[test]
    fn average_deviation_of_empty_series_is_zero() {
        assert_eq!(average_deviation(&[]), Decimal::ZERO);
    }

    #[test]
    fn fleet_run_is_referentially_transparent() {
        let vessels = vec![vessel(9700001, 1, "Alpha")];
        let reference = vec![min_row(1, dec!(10))];
        let emissions = vec![emission(9700001, 3, 31, dec!(11))];
        let config = FleetConfig::default();

        let first = compute_fleet(&vessels, &reference, &emissions, &config);
        let second = compute_fleet(&vessels, &reference, &emissions, &config);
        assert_eq!(first, second);
    }
}
