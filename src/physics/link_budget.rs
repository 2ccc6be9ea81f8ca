use crate::error::{DomainError, Result};

pub fn max_path_loss(tx_power_dbm: f64, sensitivity_dbm: f64, antenna_gain_db: f64) -> f64 {
    // PL_max = P_tx + G_ant - P_sens
    tx_power_dbm + antenna_gain_db - sensitivity_dbm
}

pub fn path_loss_db(distance_km: f64, path_loss_exponent: f64, reference_distance_km: f64) -> f64 {
    // PL(d) = 10 n log10(d / d0), PL(d0) = 0
    10.0 * path_loss_exponent * (distance_km / reference_distance_km).log10()
}

/// Distance at which the log-distance loss consumes the whole link budget.
pub fn coverage_radius(
    tx_power_dbm: f64,
    sensitivity_dbm: f64,
    path_loss_exponent: f64,
    reference_distance_km: f64,
    antenna_gain_db: f64,
) -> Result<f64> {
    if path_loss_exponent <= 0.0 || path_loss_exponent.is_nan() {
        return Err(DomainError::NonPositivePathLossExponent(path_loss_exponent));
    }
    if reference_distance_km <= 0.0 || reference_distance_km.is_nan() {
        return Err(DomainError::NonPositiveReferenceDistance(reference_distance_km));
    }

    let pl_max = max_path_loss(tx_power_dbm, sensitivity_dbm, antenna_gain_db);
    // R = d0 * 10^(PL_max / (10 n))
    Ok(reference_distance_km * 10.0f64.powf(pl_max / (10.0 * path_loss_exponent)))
}
