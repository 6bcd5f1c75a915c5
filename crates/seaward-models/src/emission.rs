//! Daily-log emission records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::vessel::ImoNo;

/// Model-level error conditions.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelError {
    /// A period-end value could not be parsed as a calendar date. Records
    /// carrying one are excluded from quarter-end filtering by the loader;
    /// they never fail a whole pipeline run.
    #[error("malformed period-end timestamp: {0:?}")]
    MalformedTimestamp(String),
}

/// One daily-log emission record for a vessel.
///
/// Append-only time series, one record per reporting interval. Only
/// records whose `to_utc` lands exactly on a quarter-end day participate
/// in the compliance comparison; the rest are context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emission {
    pub id: i64,

    /// Source daily-log row this record was derived from.
    pub log_id: i64,

    /// Owning vessel, by IMO number.
    pub imo_no: ImoNo,

    /// Reporting interval start.
    pub from_utc: DateTime<Utc>,

    /// Reporting interval end; the quarter-end filter matches against
    /// this instant's own calendar day.
    pub to_utc: DateTime<Utc>,

    /// Total CO2 tank-to-wake, tonnes.
    pub total_co2_t2w: Decimal,

    /// Total CO2e well-to-wake, tonnes.
    pub total_co2_w2w: Decimal,

    /// AER on a tank-to-wake basis.
    pub aer_co2_t2w: Decimal,

    /// AER CO2e well-to-wake: the emissions intensity compared against
    /// the PP minimum baseline.
    pub aer_co2e_w2w: Decimal,

    /// EEOI CO2e well-to-wake, for reference overlays.
    pub eeoi_co2e_w2w: Decimal,
}

/// Parse a period-end timestamp from source data.
///
/// Accepts RFC 3339 (`2024-03-31T00:00:00.000Z`), a naive datetime
/// without offset, or a bare date; everything is interpreted as UTC.
pub fn parse_period_end(value: &str) -> Result<DateTime<Utc>, ModelError> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }

    Err(ModelError::MalformedTimestamp(value.to_string()))
}
