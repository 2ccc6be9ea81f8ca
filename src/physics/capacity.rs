use serde::Serialize;

use crate::error::{DomainError, Result};

pub const HEXAGON_AREA_FACTOR: f64 = 1.5 * 1.732_050_807_568_877_2; // 3 * sqrt(3) / 2

// Model constant: 8 timeslots per carrier, one Erlang each
pub const ERLANGS_PER_CARRIER: f64 = 8.0;

pub fn cell_area(radius_km: f64) -> f64 {
    // (3 sqrt(3) / 2) R², km²
    HEXAGON_AREA_FACTOR * radius_km * radius_km
}

pub fn subscribers_per_cell(radius_km: f64, density: f64) -> f64 {
    cell_area(radius_km) * density
}

pub fn active_users(subscribers: f64, activity_ratio: f64) -> f64 {
    subscribers * activity_ratio
}

pub fn channels_per_cell(total_channels: u32, cluster_size: u32) -> Result<u32> {
    if cluster_size < 1 {
        return Err(DomainError::InvalidClusterSize(cluster_size));
    }
    // floor(N_f / N)
    Ok(total_channels / cluster_size)
}

pub fn traffic_capacity_erlangs(carriers: u32) -> f64 {
    carriers as f64 * ERLANGS_PER_CARRIER
}

/// Carriers of each cell in one reuse pattern, larger entries first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarrierAllocation(Vec<u32>);

impl CarrierAllocation {
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    pub fn busiest(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    pub fn lightest(&self) -> u32 {
        self.0.iter().copied().min().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

pub fn carrier_allocation(total_channels: u32, cluster_size: u32) -> Result<CarrierAllocation> {
    // The first N_f mod N cells take one extra carrier
    let base = channels_per_cell(total_channels, cluster_size)?;
    let remainder = total_channels % cluster_size;

    let carriers = (0..cluster_size)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect();
    Ok(CarrierAllocation(carriers))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellLoad {
    pub carriers: u32,
    pub capacity_erlangs: f64,
    pub active_users: f64,
}

impl CellLoad {
    pub fn is_overloaded(&self) -> bool {
        self.active_users > self.capacity_erlangs
    }
}

pub fn cell_loads(
    allocation: &CarrierAllocation,
    density: f64,
    activity_ratio: f64,
    radius_km: f64,
) -> Vec<CellLoad> {
    // Same area everywhere, only capacity varies
    let users = active_users(subscribers_per_cell(radius_km, density), activity_ratio);
    allocation
        .iter()
        .map(|carriers| CellLoad {
            carriers,
            capacity_erlangs: traffic_capacity_erlangs(carriers),
            active_users: users,
        })
        .collect()
}
