use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::DomainError;

pub const DEFAULT_PARAMS_FILE: &str = "params.json";

/// Link-budget and traffic inputs of one planning run.
///
/// Serialized with the historic record keys. Missing keys are completed from
/// [`NetworkParameters::default`], except `P_sens_BTS_dBm` which follows
/// `P_sens_dBm`: older records carry a single sensitivity for both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ParamsRecord")]
pub struct NetworkParameters {
    #[serde(rename = "P_BTS_dBm")]
    pub bts_power_dbm: f64,          // dBm
    #[serde(rename = "P_MS_dBm")]
    pub ms_power_dbm: f64,           // dBm
    #[serde(rename = "P_sens_dBm")]
    pub ms_sensitivity_dbm: f64,     // dBm, receiver at the handset
    #[serde(rename = "P_sens_BTS_dBm")]
    pub bts_sensitivity_dbm: f64,    // dBm, receiver at the base station
    #[serde(rename = "N_f")]
    pub total_channels: u32,
    #[serde(rename = "f_port_MHz")]
    pub carrier_frequency_mhz: f64,  // informational only
    #[serde(rename = "N")]
    pub cluster_size: u32,
    #[serde(rename = "SIR_min_dB")]
    pub sir_min_db: f64,             // dB
    #[serde(rename = "Dst_ab")]
    pub subscriber_density: f64,     // subscribers / km²
    #[serde(rename = "T_act")]
    pub activity_ratio: f64,         // fraction in [0, 1]
    #[serde(rename = "Pathloss_exp")]
    pub path_loss_exponent: f64,
    #[serde(rename = "d0_km")]
    pub reference_distance_km: f64,  // km
    #[serde(rename = "G_ant_dB")]
    pub antenna_gain_db: f64,        // dB
}

impl Default for NetworkParameters {
    fn default() -> Self {
        Self {
            bts_power_dbm: 43.0,
            ms_power_dbm: 23.0,
            ms_sensitivity_dbm: -100.0,
            bts_sensitivity_dbm: -100.0,
            total_channels: 124,
            carrier_frequency_mhz: 900.0,
            cluster_size: 7,
            sir_min_db: 17.0,
            subscriber_density: 20.0,
            activity_ratio: 0.10,
            path_loss_exponent: 3.5,
            reference_distance_km: 1.0,
            antenna_gain_db: 2.0,
        }
    }
}

/// On-disk shape of [`NetworkParameters`] before the sensitivity fallback.
#[derive(Deserialize)]
#[serde(default)]
struct ParamsRecord {
    #[serde(rename = "P_BTS_dBm")]
    bts_power_dbm: f64,
    #[serde(rename = "P_MS_dBm")]
    ms_power_dbm: f64,
    #[serde(rename = "P_sens_dBm")]
    ms_sensitivity_dbm: f64,
    #[serde(rename = "P_sens_BTS_dBm")]
    bts_sensitivity_dbm: Option<f64>,
    #[serde(rename = "N_f")]
    total_channels: u32,
    #[serde(rename = "f_port_MHz")]
    carrier_frequency_mhz: f64,
    #[serde(rename = "N")]
    cluster_size: u32,
    #[serde(rename = "SIR_min_dB")]
    sir_min_db: f64,
    #[serde(rename = "Dst_ab")]
    subscriber_density: f64,
    #[serde(rename = "T_act")]
    activity_ratio: f64,
    #[serde(rename = "Pathloss_exp")]
    path_loss_exponent: f64,
    #[serde(rename = "d0_km")]
    reference_distance_km: f64,
    #[serde(rename = "G_ant_dB")]
    antenna_gain_db: f64,
}

impl Default for ParamsRecord {
    fn default() -> Self {
        let p = NetworkParameters::default();
        Self {
            bts_power_dbm: p.bts_power_dbm,
            ms_power_dbm: p.ms_power_dbm,
            ms_sensitivity_dbm: p.ms_sensitivity_dbm,
            bts_sensitivity_dbm: None,
            total_channels: p.total_channels,
            carrier_frequency_mhz: p.carrier_frequency_mhz,
            cluster_size: p.cluster_size,
            sir_min_db: p.sir_min_db,
            subscriber_density: p.subscriber_density,
            activity_ratio: p.activity_ratio,
            path_loss_exponent: p.path_loss_exponent,
            reference_distance_km: p.reference_distance_km,
            antenna_gain_db: p.antenna_gain_db,
        }
    }
}

impl From<ParamsRecord> for NetworkParameters {
    fn from(r: ParamsRecord) -> Self {
        Self {
            bts_power_dbm: r.bts_power_dbm,
            ms_power_dbm: r.ms_power_dbm,
            ms_sensitivity_dbm: r.ms_sensitivity_dbm,
            bts_sensitivity_dbm: r.bts_sensitivity_dbm.unwrap_or(r.ms_sensitivity_dbm),
            total_channels: r.total_channels,
            carrier_frequency_mhz: r.carrier_frequency_mhz,
            cluster_size: r.cluster_size,
            sir_min_db: r.sir_min_db,
            subscriber_density: r.subscriber_density,
            activity_ratio: r.activity_ratio,
            path_loss_exponent: r.path_loss_exponent,
            reference_distance_km: r.reference_distance_km,
            antenna_gain_db: r.antenna_gain_db,
        }
    }
}

impl NetworkParameters {
    /// Same parameters with another reuse-pattern size.
    pub fn with_cluster_size(&self, cluster_size: u32) -> Self {
        Self { cluster_size, ..*self }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let finite = [
            ("P_BTS_dBm", self.bts_power_dbm),
            ("P_MS_dBm", self.ms_power_dbm),
            ("P_sens_dBm", self.ms_sensitivity_dbm),
            ("P_sens_BTS_dBm", self.bts_sensitivity_dbm),
            ("SIR_min_dB", self.sir_min_db),
            ("Dst_ab", self.subscriber_density),
            ("T_act", self.activity_ratio),
            ("Pathloss_exp", self.path_loss_exponent),
            ("d0_km", self.reference_distance_km),
            ("G_ant_dB", self.antenna_gain_db),
        ];
        if let Some((name, value)) = finite.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(DomainError::NonFiniteParameter(name, value));
        }
        if self.path_loss_exponent <= 0.0 {
            return Err(DomainError::NonPositivePathLossExponent(self.path_loss_exponent));
        }
        if self.cluster_size < 1 {
            return Err(DomainError::InvalidClusterSize(self.cluster_size));
        }
        if self.reference_distance_km <= 0.0 {
            return Err(DomainError::NonPositiveReferenceDistance(self.reference_distance_km));
        }
        if self.subscriber_density < 0.0 {
            return Err(DomainError::NegativeDensity(self.subscriber_density));
        }
        if !(0.0..=1.0).contains(&self.activity_ratio) {
            return Err(DomainError::InvalidActivityRatio(self.activity_ratio));
        }
        Ok(())
    }
}

/// Loads parameters from a JSON file, falling back to defaults when the file does not exist.
pub fn load_params(path: impl AsRef<Path>) -> Result<NetworkParameters> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Parameter file {:?} not found, using defaults", path);
            return Ok(NetworkParameters::default());
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to open {:?}", path)),
    };
    let reader = BufReader::new(file);
    let params: NetworkParameters = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse parameters from {:?}", path))?;
    debug!(?params, "loaded parameters from {:?}", path);
    Ok(params)
}

pub fn save_params(params: &NetworkParameters, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, params)
        .with_context(|| format!("Failed to write parameters to {:?}", path))?;
    Ok(())
}
