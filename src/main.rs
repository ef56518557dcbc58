//! Soroban Cost Stats CLI
//!
//! Ranks contracts in a simulated transaction by estimated cost.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use soroban_cost_stats::commands::{
    build_cost_table, display_version, display_weights, execute_stats, validate_args,
    validate_report_file, StatsArgs, StatsInput,
};
use soroban_cost_stats::simulator::SimulationOverrides;
use soroban_cost_stats::utils::config::DEFAULT_SIMULATOR_BIN;

/// Soroban Cost Stats - which contract is burning the budget?
#[derive(Parser, Debug)]
#[command(name = "soroban-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Override the ledger header timestamp (Unix epoch)
    #[arg(long, global = true, default_value_t = 0, allow_negative_numbers = true)]
    timestamp: i64,

    /// Run range simulation across a time window (seconds)
    #[arg(long, global = true, default_value_t = 0, allow_negative_numbers = true)]
    window: i64,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank contracts by estimated cost
    Stats {
        /// Saved simulation response JSON ("-" for stdin)
        #[arg(short, long, conflicts_with = "request")]
        file: Option<PathBuf>,

        /// Simulation request JSON to run through the simulator
        #[arg(short, long)]
        request: Option<PathBuf>,

        /// Simulator binary
        #[arg(long, env = "SOROBAN_SIMULATOR", default_value = DEFAULT_SIMULATOR_BIN)]
        simulator: String,

        /// Number of contracts to display
        #[arg(long)]
        top: Option<usize>,

        /// Output path for JSON report (optional)
        #[arg(long)]
        json: Option<PathBuf>,

        /// Override an event weight, e.g. --weight storage_write=10
        #[arg(short, long = "weight", value_name = "TYPE=WEIGHT")]
        weights: Vec<String>,

        /// Don't print the ranking table
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show the event cost weights
    Weights {
        /// Override an event weight, e.g. --weight storage_write=10
        #[arg(short, long = "weight", value_name = "TYPE=WEIGHT")]
        weights: Vec<String>,
    },

    /// Validate a stats report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let overrides = SimulationOverrides {
        timestamp: cli.timestamp,
        window: cli.window,
    };

    // Execute command
    match cli.command {
        Commands::Stats {
            file,
            request,
            simulator,
            top,
            json,
            weights,
            quiet,
        } => {
            let input = match (file, request) {
                (Some(path), _) => StatsInput::File(path),
                (None, Some(request)) => StatsInput::Simulator {
                    request,
                    binary: simulator,
                },
                (None, None) => anyhow::bail!("Provide either --file or --request"),
            };

            let args = StatsArgs {
                input,
                overrides,
                weight_overrides: weights,
                top,
                output_json: json,
                print_table: !quiet,
            };

            // Validate args first
            validate_args(&args)?;

            execute_stats(&args)?;
        }

        Commands::Weights { weights } => {
            display_weights(&build_cost_table(&weights)?);
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
