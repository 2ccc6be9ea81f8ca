use itertools::Itertools;
use serde::Serialize;
use tracing::debug;

use crate::coverage::{RadiusLimit, resolve_radius};
use crate::error::Result;
use crate::io::NetworkParameters;
use crate::physics::capacity::{
    active_users, carrier_allocation, cell_area, channels_per_cell, subscribers_per_cell,
};

// Capacity-limited cells hold exactly their carriers, up to rounding
const CAPACITY_TOLERANCE: f64 = 1e-9;

/// Outcome of one planning run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub radius_km: f64,
    pub reuse_distance_km: f64,
    pub sir_db: f64,
    pub sir_min_db: f64,
    pub sir_ok: bool,
    pub cell_area_km2: f64,
    pub channels_per_cell: u32,
    pub subscribers_per_cell: f64,
    pub active_users_per_cell: f64,
    pub capacity_ok: bool,
    pub limit: RadiusLimit,
}

/// Corrective actions suggested for a failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Advisory {
    IncreaseClusterSize,
    ReduceClusterSize,
    ReduceCellRadius,
    IncreaseTransmitPower,
}

impl Advisory {
    pub fn describe(&self) -> &'static str {
        match self {
            Advisory::IncreaseClusterSize => "Increase N (reuse pattern size)",
            Advisory::ReduceClusterSize => "Reduce N (more channels per cell)",
            Advisory::ReduceCellRadius => "Reduce the cell radius R (more, smaller cells)",
            Advisory::IncreaseTransmitPower => "Increase transmit power",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatternComparison {
    pub cluster_size: u32,
    pub result: AnalysisResult,
}

/// Runs the full planning chain for one parameter set.
///
/// The resolver sizes capacity for the busiest cell of the balanced carrier
/// allocation, while the capacity check uses the plain `floor(N_f / N)` figure.
pub fn run_analysis(params: &NetworkParameters) -> Result<AnalysisResult> {
    params.validate()?;

    let allocation = carrier_allocation(params.total_channels, params.cluster_size)?;
    let resolution = resolve_radius(params, allocation.busiest())?;
    let radius = resolution.radius_km;

    let channels = channels_per_cell(params.total_channels, params.cluster_size)?;
    let subscribers = subscribers_per_cell(radius, params.subscriber_density);
    let active = active_users(subscribers, params.activity_ratio);

    let result = AnalysisResult {
        radius_km: radius,
        reuse_distance_km: resolution.reuse_distance_km,
        sir_db: resolution.sir_db,
        sir_min_db: params.sir_min_db,
        sir_ok: resolution.sir_db >= params.sir_min_db,
        cell_area_km2: cell_area(radius),
        channels_per_cell: channels,
        subscribers_per_cell: subscribers,
        active_users_per_cell: active,
        capacity_ok: active <= channels as f64 * (1.0 + CAPACITY_TOLERANCE),
        limit: resolution.limit,
    };
    debug!(?result, "analysis complete");
    Ok(result)
}

pub fn advisories(result: &AnalysisResult) -> Vec<Advisory> {
    let mut out = Vec::new();
    if !result.sir_ok {
        out.extend([
            Advisory::IncreaseClusterSize,
            Advisory::ReduceCellRadius,
            Advisory::IncreaseTransmitPower,
        ]);
    }
    if !result.capacity_ok {
        out.push(Advisory::ReduceClusterSize);
        if !out.contains(&Advisory::ReduceCellRadius) {
            out.push(Advisory::ReduceCellRadius);
        }
    }
    out
}

/// Analyses each distinct cluster size, smallest first.
pub fn compare_patterns(
    params: &NetworkParameters,
    cluster_sizes: &[u32],
) -> Result<Vec<PatternComparison>> {
    cluster_sizes
        .iter()
        .copied()
        .sorted_unstable()
        .dedup()
        .map(|cluster_size| {
            let result = run_analysis(&params.with_cluster_size(cluster_size))?;
            Ok(PatternComparison { cluster_size, result })
        })
        .collect()
}
