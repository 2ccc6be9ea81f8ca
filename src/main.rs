use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use cell_planner::analysis::{compare_patterns, run_analysis};
use cell_planner::geo::layout_sites;
use cell_planner::io::{DEFAULT_PARAMS_FILE, NetworkParameters, load_params, save_params};
use cell_planner::render::{
    ReportOptions, cluster_list, render_comparison, render_report, write_comparison_csv,
};

#[derive(Parser, Debug)]
#[command(name = "cell_planner", about = "Hexagonal GSM cell radius and capacity planning")]
struct Args {
    /// Parameter file (defaults are used when it does not exist)
    #[arg(short, long, global = true, default_value = DEFAULT_PARAMS_FILE)]
    params: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the cell radius and check SIR and capacity targets
    Analyze {
        /// Override the reuse pattern size N
        #[arg(short = 'n', long)]
        cluster_size: Option<u32>,

        /// Print the result as JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Compare several reuse pattern sizes
    Compare {
        #[arg(short, long, value_delimiter = ',')]
        clusters: Option<Vec<u32>>,

        /// Also write the table as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Emit the hexagonal cell layout with frequency groups as JSON
    Grid {
        #[arg(short, long)]
        size: Option<usize>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the default parameter file
    Init {
        #[arg(short, long, default_value = DEFAULT_PARAMS_FILE)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let options = ReportOptions::default();

    match args.command {
        Command::Init { output } => {
            save_params(&NetworkParameters::default(), &output)?;
            info!("Default parameters written to {:?}", output);
        }
        Command::Analyze { cluster_size, json } => {
            let mut params = load_params(&args.params)?;
            if let Some(n) = cluster_size {
                params = params.with_cluster_size(n);
            }
            info!("Analysing reuse pattern N={}", params.cluster_size);
            let result = run_analysis(&params)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render_report(&result, &params));
            }
            if !result.sir_ok {
                warn!("SIR target not met: {:.2} dB < {:.1} dB", result.sir_db, result.sir_min_db);
            }
            if !result.capacity_ok {
                warn!(
                    "Capacity overload: {:.1} active users for {} channels",
                    result.active_users_per_cell, result.channels_per_cell
                );
            }
        }
        Command::Compare { clusters, csv } => {
            let params = load_params(&args.params)?;
            let clusters = clusters.unwrap_or(options.comparison_clusters);
            let rows = compare_patterns(&params, &clusters)?;
            info!("Compared patterns N = {}", cluster_list(&rows));
            print!("{}", render_comparison(&rows));

            if let Some(path) = csv {
                let file = File::create(&path)?;
                write_comparison_csv(&rows, BufWriter::new(file))?;
                info!("Comparison written to {:?}", path);
            }
        }
        Command::Grid { size, output } => {
            let params = load_params(&args.params)?;
            let result = run_analysis(&params)?;
            let grid_size = size.unwrap_or(options.grid_size);
            let sites = layout_sites(result.radius_km, grid_size, params.cluster_size)?;
            info!(
                "Laid out {} cells of radius {:.3} km in a {}x{} grid",
                sites.len(),
                result.radius_km,
                grid_size,
                grid_size
            );

            match output {
                Some(path) => {
                    let file = File::create(&path)?;
                    serde_json::to_writer_pretty(BufWriter::new(file), &sites)?;
                    info!("Layout written to {:?}", path);
                }
                None => println!("{}", serde_json::to_string_pretty(&sites)?),
            }
        }
    }

    Ok(())
}
