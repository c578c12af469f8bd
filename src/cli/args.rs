//! Command-line argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{EngineSize, ErDesign, FuelStorage, Hullform};

/// Ship Prototype Testing Simulator
///
/// Monte Carlo estimation of full-scale performance metrics from a discrete
/// design configuration.
#[derive(Parser, Debug)]
#[command(name = "shipsim", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a prototype test campaign and report the results
    Run(RunArgs),

    /// List the selectable configuration options
    Options,
}

/// Output format for the test report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled report with per-metric charts
    Text,
    /// Machine-readable report (aggregate plus per-test series)
    Json,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Propulsion engine size
    #[arg(long, value_enum)]
    pub engine: Option<EngineSize>,

    /// Hullform block coefficient
    #[arg(long, value_enum)]
    pub hullform: Option<Hullform>,

    /// Fuel storage capacity
    #[arg(long, value_enum)]
    pub fuel_storage: Option<FuelStorage>,

    /// Engine-room component replacement design
    #[arg(long, value_enum)]
    pub er_design: Option<ErDesign>,

    /// Number of tests to run (overrides the access-code allocation)
    #[arg(long, short = 'n')]
    pub tests: Option<u32>,

    /// Access code whose allocation determines the test count
    #[arg(long, env = "SHIPSIM_ACCESS_CODE")]
    pub access_code: Option<String>,

    /// Seed the sampler for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Prompt for any unset selections interactively
    #[arg(long, short)]
    pub interactive: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress the per-metric charts
    #[arg(long)]
    pub no_charts: bool,

    /// Write the per-test series to a CSV file
    #[arg(long, value_name = "PATH")]
    pub export_csv: Option<PathBuf>,
}
