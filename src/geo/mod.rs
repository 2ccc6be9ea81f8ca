use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Planar position in the cell layout (km).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x_km: f64,
    pub y_km: f64,
}

/// One base-station site of the layout with its frequency group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSite {
    pub center: Point,
    pub frequency_group: u32, // in [0, N)
}

/// Centres of a `grid_size` x `grid_size` hexagonal layout.
///
/// Horizontal pitch is `R sqrt(3)`, vertical pitch `1.5 R`; odd rows are
/// shifted right by half a pitch. Row-major, starting at the origin.
pub fn hexagon_grid(radius_km: f64, grid_size: usize) -> Vec<Point> {
    let dx = radius_km * SQRT_3;
    let dy = radius_km * 1.5;

    (0..grid_size)
        .flat_map(|row| {
            (0..grid_size).map(move |col| Point {
                x_km: col as f64 * dx + (row % 2) as f64 * dx / 2.0,
                y_km: row as f64 * dy,
            })
        })
        .collect()
}

/// Frequency group of each of `count` cells by position: `i mod N`.
pub fn assign_frequency_groups(count: usize, cluster_size: u32) -> Result<Vec<u32>> {
    if cluster_size < 1 {
        return Err(DomainError::InvalidClusterSize(cluster_size));
    }
    let n = cluster_size as usize;
    Ok((0..count).map(|i| (i % n) as u32).collect())
}

pub fn layout_sites(radius_km: f64, grid_size: usize, cluster_size: u32) -> Result<Vec<CellSite>> {
    let centers = hexagon_grid(radius_km, grid_size);
    let groups = assign_frequency_groups(centers.len(), cluster_size)?;
    Ok(centers
        .into_iter()
        .zip(groups)
        .map(|(center, frequency_group)| CellSite { center, frequency_group })
        .collect())
}

/// Corners of the pointy-top hexagon around `center`, counter-clockwise from 30°.
pub fn hexagon_vertices(center: Point, radius_km: f64) -> [Point; 6] {
    std::array::from_fn(|k| {
        let angle = PI / 6.0 + PI / 3.0 * k as f64;
        Point {
            x_km: center.x_km + radius_km * angle.cos(),
            y_km: center.y_km + radius_km * angle.sin(),
        }
    })
}
