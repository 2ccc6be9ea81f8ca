use std::io::Write;

use anyhow::Result;
use itertools::Itertools;
use serde::Serialize;

use crate::analysis::{AnalysisResult, PatternComparison, advisories};
use crate::io::NetworkParameters;

const RULE_WIDTH: usize = 60;
const TABLE_WIDTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub grid_size: usize,
    pub comparison_clusters: Vec<u32>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            grid_size: 7,
            comparison_clusters: vec![3, 4, 7, 9],
        }
    }
}

fn status(ok: bool, failure: &str) -> String {
    if ok { "OK".to_string() } else { failure.to_string() }
}

fn mark(ok: bool) -> &'static str {
    if ok { "yes" } else { "no" }
}

/// Human-readable report of one analysis.
pub fn render_report(result: &AnalysisResult, params: &NetworkParameters) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("{rule}\nCELLULAR NETWORK PLANNING RESULTS\n{rule}\n"));

    out.push_str("\nCONFIGURATION:\n");
    out.push_str(&format!("   Reuse pattern (N): {}\n", params.cluster_size));
    out.push_str(&format!("   Available channels: {}\n", params.total_channels));
    out.push_str(&format!("   Path-loss exponent: {}\n", params.path_loss_exponent));
    out.push_str(&format!("   Carrier frequency: {} MHz\n", params.carrier_frequency_mhz));

    out.push_str("\nDIMENSIONS:\n");
    out.push_str(&format!("   Cell radius (R): {:.3} km\n", result.radius_km));
    out.push_str(&format!("   Reuse distance (D): {:.3} km\n", result.reuse_distance_km));
    out.push_str(&format!("   Cell area: {:.3} km²\n", result.cell_area_km2));
    out.push_str(&format!("   Limited by: {:?}\n", result.limit));

    out.push_str("\nINTERFERENCE:\n");
    out.push_str(&format!("   Required SIR: {:.1} dB\n", result.sir_min_db));
    out.push_str(&format!("   Achieved SIR: {:.2} dB\n", result.sir_db));
    out.push_str(&format!("   Status: {}\n", status(result.sir_ok, "INSUFFICIENT")));

    out.push_str("\nCAPACITY:\n");
    out.push_str(&format!("   Channels per cell: {}\n", result.channels_per_cell));
    out.push_str(&format!("   Subscribers per cell: {:.0}\n", result.subscribers_per_cell));
    out.push_str(&format!("   Active users: {:.1}\n", result.active_users_per_cell));
    out.push_str(&format!("   Status: {}\n", status(result.capacity_ok, "OVERLOAD")));

    let advice = advisories(result);
    if !advice.is_empty() {
        out.push_str("\nRECOMMENDATIONS:\n");
        for advisory in advice {
            out.push_str(&format!("   - {}\n", advisory.describe()));
        }
    }

    out.push_str(&format!("{rule}\n"));
    out
}

/// Fixed-width comparison table, one row per reuse pattern.
pub fn render_comparison(rows: &[PatternComparison]) -> String {
    let rule = "=".repeat(TABLE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("{rule}\n"));
    out.push_str(&format!(
        "{:<5} {:<10} {:<10} {:<12} {:<10} {:<15} {:<10} {:<10}\n",
        "N", "R (km)", "D (km)", "SIR (dB)", "Channels", "Active users", "SIR OK", "Cap OK"
    ));
    out.push_str(&format!("{rule}\n"));

    for row in rows {
        let res = &row.result;
        out.push_str(&format!(
            "{:<5} {:<10.3} {:<10.3} {:<12.2} {:<10} {:<15.1} {:<10} {:<10}\n",
            row.cluster_size,
            res.radius_km,
            res.reuse_distance_km,
            res.sir_db,
            res.channels_per_cell,
            res.active_users_per_cell,
            mark(res.sir_ok),
            mark(res.capacity_ok),
        ));
    }

    out.push_str(&format!("{rule}\n"));
    out
}

pub fn cluster_list(rows: &[PatternComparison]) -> String {
    rows.iter().map(|row| row.cluster_size).join(", ")
}

#[derive(Serialize)]
struct ComparisonRecord {
    n: u32,
    radius_km: f64,
    reuse_distance_km: f64,
    sir_db: f64,
    sir_min_db: f64,
    channels_per_cell: u32,
    active_users_per_cell: f64,
    sir_ok: bool,
    capacity_ok: bool,
}

pub fn write_comparison_csv<W: Write>(rows: &[PatternComparison], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        let res = &row.result;
        wtr.serialize(ComparisonRecord {
            n: row.cluster_size,
            radius_km: res.radius_km,
            reuse_distance_km: res.reuse_distance_km,
            sir_db: res.sir_db,
            sir_min_db: res.sir_min_db,
            channels_per_cell: res.channels_per_cell,
            active_users_per_cell: res.active_users_per_cell,
            sir_ok: res.sir_ok,
            capacity_ok: res.capacity_ok,
        })?;
    }
    wtr.flush()?;
    Ok(())
}
