//! Chart-shaped projection of a fleet result.
//!
//! Produces what a line chart needs and nothing more: an ordered list of
//! quarter categories for the x-axis and one named series per vessel,
//! padded with `None` where a vessel has no value for a category. No
//! rendering concern lives here.

use std::collections::BTreeSet;

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use seaward_models::{ImoNo, Quarter};

use crate::fleet::FleetDeviation;

/// Which vessels to project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VesselSelection {
    All,
    One(ImoNo),
}

/// One line series: vessel name plus per-category deviation values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    /// Aligned to `DeviationChart::categories`; `None` where the vessel
    /// has no data for that quarter.
    pub data: Vec<Option<f64>>,
}

/// Chart-ready deviation data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviationChart {
    /// Quarter labels in chronological order (numeric year/quarter sort,
    /// not label sort).
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// Project a fleet result into chart series for the given selection.
pub fn build_chart(fleet: &FleetDeviation, selection: VesselSelection) -> DeviationChart {
    let selected: Vec<_> = fleet
        .series
        .iter()
        .filter(|s| match selection {
            VesselSelection::All => true,
            VesselSelection::One(imo) => s.vessel.imo_no == imo,
        })
        .collect();

    // Union of quarters across the selection; BTreeSet gives the
    // chronological order for free via Quarter's Ord.
    let quarters: BTreeSet<Quarter> = selected
        .iter()
        .flat_map(|s| s.quarterly.iter().map(|q| q.quarter))
        .collect();
    let quarters: Vec<Quarter> = quarters.into_iter().collect();

    let series = selected
        .iter()
        .map(|s| ChartSeries {
            name: s.vessel.name.clone(),
            data: quarters
                .iter()
                .map(|quarter| {
                    s.quarterly
                        .iter()
                        .find(|q| q.quarter == *quarter)
                        .and_then(|q| q.deviation_pct.to_f64())
                })
                .collect(),
        })
        .collect();

    DeviationChart {
        categories: quarters.iter().map(Quarter::label).collect(),
        series,
    }
}
