//! JSON fixture loading.
//!
//! The fixture files carry the upstream source-data field names
//! (`IMONo`, `MaxDeadWg`, `Traj`, `TOUTC`, `AERCO2eW2W`, ...); raw
//! structs here own that contract and convert into the domain types.
//! Unknown fields are ignored, so fuller daily-log exports load as-is.
//!
//! Timestamp handling is lenient: an emission row whose interval bounds
//! do not parse is skipped with a WARN, never failing the whole load.

use std::fs;
use std::path::Path;

use anyhow::Context;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, warn};

use seaward_models::{parse_period_end, Emission, ImoNo, PpReferenceLine, Vessel, VesselTypeId};

#[derive(Debug, Deserialize)]
struct RawVessel {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "IMONo")]
    imo_no: i64,
    #[serde(rename = "VesselType")]
    vessel_type: i32,
    #[serde(rename = "MaxDeadWg")]
    max_deadweight: Decimal,
}

#[derive(Debug, Deserialize)]
struct RawReferenceLine {
    #[serde(rename = "RowID")]
    row_id: i64,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "VesselTypeID")]
    vessel_type_id: i32,
    #[serde(rename = "Size")]
    size: String,
    #[serde(rename = "Traj")]
    traj: String,
    #[serde(default)]
    a: Decimal,
    #[serde(default)]
    b: Decimal,
    #[serde(default)]
    c: Decimal,
    #[serde(default)]
    d: Decimal,
    #[serde(default)]
    e: Decimal,
}

#[derive(Debug, Deserialize)]
struct RawEmission {
    #[serde(rename = "EID")]
    id: i64,
    #[serde(rename = "LOGID")]
    log_id: i64,
    #[serde(rename = "VesselID")]
    vessel_id: i64,
    #[serde(rename = "FromUTC")]
    from_utc: String,
    #[serde(rename = "TOUTC")]
    to_utc: String,
    #[serde(rename = "TotT2WCO2", default)]
    total_co2_t2w: Decimal,
    #[serde(rename = "ToTW2WCO2", default)]
    total_co2_w2w: Decimal,
    #[serde(rename = "AERCO2T2W", default)]
    aer_co2_t2w: Decimal,
    #[serde(rename = "AERCO2eW2W", default)]
    aer_co2e_w2w: Decimal,
    #[serde(rename = "EEOICO2eW2W", default)]
    eeoi_co2e_w2w: Decimal,
}

/// Emissions load result: parsed records plus the count of rows dropped
/// for malformed timestamps.
#[derive(Debug)]
pub struct EmissionLoad {
    pub emissions: Vec<Emission>,
    pub skipped_malformed: usize,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read fixture file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("could not parse fixture file: {}", path.display()))
}

/// Load the vessel catalog.
pub fn load_vessels(path: &Path) -> anyhow::Result<Vec<Vessel>> {
    let raw: Vec<RawVessel> = read_json(path)?;
    let vessels = raw
        .into_iter()
        .map(|v| Vessel {
            imo_no: ImoNo(v.imo_no),
            name: v.name,
            vessel_type: VesselTypeId(v.vessel_type),
            max_deadweight: v.max_deadweight,
        })
        .collect::<Vec<_>>();

    info!(count = vessels.len(), "loaded vessel catalog");
    Ok(vessels)
}

/// Load the PP reference coefficient table.
pub fn load_reference(path: &Path) -> anyhow::Result<Vec<PpReferenceLine>> {
    let raw: Vec<RawReferenceLine> = read_json(path)?;
    let reference = raw
        .into_iter()
        .map(|r| PpReferenceLine {
            row_id: r.row_id,
            category: r.category,
            vessel_type_id: VesselTypeId(r.vessel_type_id),
            size: r.size.trim().to_string(),
            traj: r.traj.trim().to_string(),
            a: r.a,
            b: r.b,
            c: r.c,
            d: r.d,
            e: r.e,
        })
        .collect::<Vec<_>>();

    info!(count = reference.len(), "loaded PP reference table");
    Ok(reference)
}

/// Load the daily-log emission series.
///
/// Rows with unparseable interval bounds are skipped and counted, not
/// fatal; everything else about the file must be well-formed JSON.
pub fn load_emissions(path: &Path) -> anyhow::Result<EmissionLoad> {
    let raw: Vec<RawEmission> = read_json(path)?;

    let mut emissions = Vec::with_capacity(raw.len());
    let mut skipped_malformed = 0usize;
    for row in raw {
        let from_utc = match parse_period_end(&row.from_utc) {
            Ok(dt) => dt,
            Err(err) => {
                warn!(emission_id = row.id, %err, "skipping emission row");
                skipped_malformed += 1;
                continue;
            }
        };
        let to_utc = match parse_period_end(&row.to_utc) {
            Ok(dt) => dt,
            Err(err) => {
                warn!(emission_id = row.id, %err, "skipping emission row");
                skipped_malformed += 1;
                continue;
            }
        };

        emissions.push(Emission {
            id: row.id,
            log_id: row.log_id,
            imo_no: ImoNo(row.vessel_id),
            from_utc,
            to_utc,
            total_co2_t2w: row.total_co2_t2w,
            total_co2_w2w: row.total_co2_w2w,
            aer_co2_t2w: row.aer_co2_t2w,
            aer_co2e_w2w: row.aer_co2e_w2w,
            eeoi_co2e_w2w: row.eeoi_co2e_w2w,
        });
    }

    info!(
        count = emissions.len(),
        skipped_malformed, "loaded emission series"
    );
    Ok(EmissionLoad {
        emissions,
        skipped_malformed,
    })
}
