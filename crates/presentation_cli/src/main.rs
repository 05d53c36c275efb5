//! Mappy CLI
//!
//! Resolves place names and computes routes from the command line.
//! Results are printed to stdout as JSON; logs go to stderr.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use domain::{Coordinate, RouteRequest, TravelMode};
use infrastructure::{AppConfig, Services, init_logging};
use tracing::debug;

/// Mappy CLI
#[derive(Debug, Parser)]
#[command(name = "mappy-cli")]
#[command(author, version, about = "Geocode places and plan routes", long_about = None)]
struct Cli {
    /// Verbosity level (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, global = true, env = "MAPPY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a free-text place name to coordinates
    Geocode {
        /// Place to look up, e.g. "Lagos, Nigeria"
        query: String,
    },

    /// Compute a route between two points
    Route {
        /// Start point as LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        from: Coordinate,

        /// Destination as LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        to: Coordinate,

        /// Travel mode: driving, walking, cycling or riding
        #[arg(short, long, default_value_t = TravelMode::Driving, value_parser = parse_travel_mode)]
        mode: TravelMode,
    },
}

/// Strict mode parsing so typos are reported instead of defaulting
fn parse_travel_mode(name: &str) -> Result<TravelMode, String> {
    name.parse()
}

/// Map CLI verbosity to a log filter; `None` keeps the configured filter
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    init_logging(&config.telemetry, log_filter_from_verbosity(cli.verbose))?;

    let services = Services::from_config(&config)?;

    match cli.command {
        Commands::Geocode { query } => {
            let location = services.resolver.resolve(&query).await?;
            println!("{}", serde_json::to_string_pretty(&location)?);
        },

        Commands::Route { from, to, mode } => {
            let request = RouteRequest::new(from, to, mode);
            debug!(?request, "Routing");
            let route = services.router.get_route(&request).await?;
            println!("{}", serde_json::to_string_pretty(&route)?);
        },
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        },
    }
}
