//! Joint cell-radius determination.
//!
//! The radius is the smallest of three bounds:
//! 1. coverage: the weaker of the downlink (BTS -> MS) and uplink (MS -> BTS) budgets,
//! 2. capacity: the largest hexagon whose active users fit the cell's carriers,
//! 3. interference: a shrink applied when the first-ring SIR misses its target.
//!
//! In the first-ring model SIR only depends on `D/R = sqrt(3N)`, so shrinking
//! R (and D with it) leaves the reported SIR unchanged; only the radius moves.

use serde::Serialize;
use tracing::debug;

use crate::error::{DomainError, Result};
use crate::io::NetworkParameters;
use crate::physics::capacity::HEXAGON_AREA_FACTOR;
use crate::physics::link_budget::coverage_radius;
use crate::physics::reuse::{required_reuse_ratio, reuse_distance, reuse_ratio, sir_from_rd};

/// Constraint that fixed the final radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RadiusLimit {
    Downlink,
    Uplink,
    Capacity,
    Interference,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadiusResolution {
    pub downlink_radius_km: f64,
    pub uplink_radius_km: f64,
    pub coverage_radius_km: f64,
    /// `f64::INFINITY` when there is no offered traffic.
    pub capacity_radius_km: f64,
    /// Set only when the SIR correction fired.
    pub sir_radius_km: Option<f64>,
    pub radius_km: f64,
    pub reuse_distance_km: f64,
    pub sir_db: f64,
    pub limit: RadiusLimit,
}

/// Largest radius whose active users fit in `carriers`:
/// `sqrt(carriers / (density * activity * 3 sqrt(3) / 2))`.
///
/// No offered traffic means no bound.
pub fn capacity_radius(carriers: u32, density: f64, activity_ratio: f64) -> f64 {
    let load = density * activity_ratio;
    if load <= 0.0 {
        return f64::INFINITY;
    }
    (carriers as f64 / (load * HEXAGON_AREA_FACTOR)).sqrt()
}

/// Resolves the cell radius for `params`, sizing capacity against `carriers` per cell.
pub fn resolve_radius(params: &NetworkParameters, carriers: u32) -> Result<RadiusResolution> {
    params.validate()?;
    let n = params.path_loss_exponent;
    let d0 = params.reference_distance_km;
    let gain = params.antenna_gain_db;

    let downlink = coverage_radius(params.bts_power_dbm, params.ms_sensitivity_dbm, n, d0, gain)?;
    let uplink = coverage_radius(params.ms_power_dbm, params.bts_sensitivity_dbm, n, d0, gain)?;
    let (coverage, mut limit) = if uplink < downlink {
        (uplink, RadiusLimit::Uplink)
    } else {
        (downlink, RadiusLimit::Downlink)
    };

    let capacity = capacity_radius(carriers, params.subscriber_density, params.activity_ratio);
    let mut radius = coverage;
    if capacity < radius {
        radius = capacity;
        limit = RadiusLimit::Capacity;
    }
    check_radius(radius)?;

    debug!(downlink, uplink, capacity, "radius bounds before SIR check");

    let mut sir_radius = None;
    let d = reuse_distance(radius, params.cluster_size)?;
    let sir = sir_from_rd(radius, d, n)?;
    if sir < params.sir_min_db {
        let ratio = required_reuse_ratio(params.sir_min_db, n)?;
        let shrunk = coverage * reuse_ratio(params.cluster_size)? / ratio;
        debug!(sir, target = params.sir_min_db, shrunk, "SIR below target, shrinking radius");
        if shrunk < radius {
            radius = shrunk;
            limit = RadiusLimit::Interference;
        }
        sir_radius = Some(shrunk);
        check_radius(radius)?;
    }

    let reuse_distance_km = reuse_distance(radius, params.cluster_size)?;
    let sir_db = sir_from_rd(radius, reuse_distance_km, n)?;

    Ok(RadiusResolution {
        downlink_radius_km: downlink,
        uplink_radius_km: uplink,
        coverage_radius_km: coverage,
        capacity_radius_km: capacity,
        sir_radius_km: sir_radius,
        radius_km: radius,
        reuse_distance_km,
        sir_db,
        limit,
    })
}

fn check_radius(radius_km: f64) -> Result<()> {
    if radius_km.is_infinite() {
        Err(DomainError::UnboundedRadius)
    } else if radius_km.is_nan() || radius_km <= 0.0 {
        Err(DomainError::NonPositiveRadius(radius_km))
    } else {
        Ok(())
    }
}
