use crate::error::{DomainError, Result};

// Co-channel cells in the first interfering ring
pub const FIRST_RING_INTERFERERS: f64 = 6.0;

pub fn reuse_ratio(cluster_size: u32) -> Result<f64> {
    if cluster_size < 1 {
        return Err(DomainError::InvalidClusterSize(cluster_size));
    }
    // Q = D / R = sqrt(3N)
    Ok((3.0 * cluster_size as f64).sqrt())
}

pub fn reuse_distance(radius_km: f64, cluster_size: u32) -> Result<f64> {
    Ok(radius_km * reuse_ratio(cluster_size)?)
}

pub fn sir_from_geometry(cluster_size: u32, path_loss_exponent: f64) -> Result<f64> {
    check_exponent(path_loss_exponent)?;
    let q = reuse_ratio(cluster_size)?;
    Ok(sir_db(q, path_loss_exponent))
}

/// SIR seen at the cell edge for an explicit radius and reuse distance.
pub fn sir_from_rd(radius_km: f64, reuse_distance_km: f64, path_loss_exponent: f64) -> Result<f64> {
    if radius_km.is_nan() || radius_km <= 0.0 {
        return Err(DomainError::NonPositiveRadius(radius_km));
    }
    check_exponent(path_loss_exponent)?;
    Ok(sir_db(reuse_distance_km / radius_km, path_loss_exponent))
}

pub fn required_reuse_ratio(sir_min_db: f64, path_loss_exponent: f64) -> Result<f64> {
    check_exponent(path_loss_exponent)?;
    // D/R = (6 * 10^(SIR/10))^(1/n)
    Ok((FIRST_RING_INTERFERERS * 10.0f64.powf(sir_min_db / 10.0)).powf(1.0 / path_loss_exponent))
}

fn sir_db(ratio: f64, path_loss_exponent: f64) -> f64 {
    // SIR = 10 log10((D/R)^n / 6)
    10.0 * (ratio.powf(path_loss_exponent) / FIRST_RING_INTERFERERS).log10()
}

fn check_exponent(path_loss_exponent: f64) -> Result<()> {
    if path_loss_exponent > 0.0 {
        Ok(())
    } else {
        Err(DomainError::NonPositivePathLossExponent(path_loss_exponent))
    }
}
