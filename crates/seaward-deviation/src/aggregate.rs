//! Per-record deviation and per-quarter aggregation.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use seaward_baseline::round2;
use seaward_models::{Emission, ImoNo, Quarter};

/// Aggregator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviationConfig {
    /// Drop records with a non-positive emissions intensity before
    /// computing deviation. Defensive filter against malformed source
    /// data; off by default.
    #[serde(default)]
    pub exclude_non_positive: bool,
}

/// Aggregation error conditions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviationError {
    /// The minimum baseline is exactly zero, so a percentage deviation is
    /// undefined. In practice this means the MIN trajectory resolution
    /// fell back to zero factors; callers decide whether to skip the
    /// vessel or abort.
    #[error("deviation undefined: minimum baseline is zero for vessel {imo_no}")]
    DivisionUndefined { imo_no: ImoNo },
}

/// Stage-1 output: one deviation percentage per quarter-end record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviationPoint {
    pub imo_no: ImoNo,
    pub quarter: Quarter,
    pub period_end: DateTime<Utc>,
    pub deviation_pct: Decimal,
}

/// Stage-2 output: the averaged deviation for one (vessel, quarter) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterlyDeviation {
    pub imo_no: ImoNo,
    pub quarter: Quarter,
    /// Earliest period-end in the group; chronological sort key only,
    /// never part of the averaged value.
    pub period_end: DateTime<Utc>,
    pub deviation_pct: Decimal,
}

/// Stage 1: per-record deviation against the minimum baseline.
///
/// Filters `emissions` to the given vessel's quarter-end records and
/// computes `((actual − baseline) / baseline) · 100`, rounded to 2 dp.
/// The baseline is taken as `abs(baseline_min)`.
pub fn deviation_points(
    emissions: &[Emission],
    imo_no: ImoNo,
    baseline_min: Decimal,
    config: &DeviationConfig,
) -> Result<Vec<DeviationPoint>, DeviationError> {
    let baseline = baseline_min.abs();
    if baseline.is_zero() {
        return Err(DeviationError::DivisionUndefined { imo_no });
    }

    let hundred = Decimal::ONE_HUNDRED;
    let points = emissions
        .iter()
        .filter(|e| e.imo_no == imo_no)
        .filter(|e| Quarter::is_quarter_end(e.to_utc))
        .filter(|e| !config.exclude_non_positive || e.aer_co2e_w2w > Decimal::ZERO)
        .map(|e| {
            let deviation = (e.aer_co2e_w2w - baseline) / baseline * hundred;
            DeviationPoint {
                imo_no,
                quarter: Quarter::from_date(e.to_utc),
                period_end: e.to_utc,
                deviation_pct: round2(deviation),
            }
        })
        .collect();

    Ok(points)
}

/// Stage 2: group by (vessel, quarter) and average.
///
/// Output is sorted by vessel, then chronologically by the numeric
/// `(year, quarter)` key. Each group keeps its earliest period-end.
pub fn aggregate_quarters(points: &[DeviationPoint]) -> Vec<QuarterlyDeviation> {
    struct Group {
        sum: Decimal,
        count: u32,
        earliest: DateTime<Utc>,
    }

    let mut groups: BTreeMap<(ImoNo, Quarter), Group> = BTreeMap::new();
    for point in points {
        groups
            .entry((point.imo_no, point.quarter))
            .and_modify(|g| {
                g.sum += point.deviation_pct;
                g.count += 1;
                if point.period_end < g.earliest {
                    g.earliest = point.period_end;
                }
            })
            .or_insert(Group {
                sum: point.deviation_pct,
                count: 1,
                earliest: point.period_end,
            });
    }

    groups
        .into_iter()
        .map(|((imo_no, quarter), g)| QuarterlyDeviation {
            imo_no,
            quarter,
            period_end: g.earliest,
            deviation_pct: round2(g.sum / Decimal::from(g.count)),
        })
        .collect()
}

/// Both stages in one call: the full quarterly deviation series for one
/// vessel, sorted chronologically.
pub fn aggregate_quarterly_deviations(
    emissions: &[Emission],
    imo_no: ImoNo,
    baseline_min: Decimal,
    config: &DeviationConfig,
) -> Result<Vec<QuarterlyDeviation>, DeviationError> {
    let points = deviation_points(emissions, imo_no, baseline_min, config)?;
    Ok(aggregate_quarters(&points))
}
