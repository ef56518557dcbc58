//! Stats command implementation.
//!
//! The stats command:
//! 1. Loads a simulation response (file, stdin or simulator run)
//! 2. Builds the cost table
//! 3. Aggregates per-contract stats
//! 4. Prints the ranking and writes the JSON report

use super::models::{StatsArgs, StatsInput};
use crate::aggregator::{build_contract_stats_with, parse_weight_override, summarize, ContractStat, CostTable};
use crate::output::{render_stats_table, write_report, StatsReport};
use crate::simulator::{read_response, SimulationResponse, SimulatorProcess};
use crate::utils::config::MAX_TOP_CONTRACTS;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

/// Execute the stats command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The ranked stats, most expensive first
///
/// # Errors
/// * Input cannot be read or the simulator fails
/// * Invalid weight overrides
/// * Report write errors
///
/// An empty simulation is not an error: it yields an empty ranking.
pub fn execute_stats(args: &StatsArgs) -> Result<Vec<ContractStat>> {
    let start_time = Instant::now();
    let source = args.input.describe();

    info!("Collecting contract stats from: {}", source);

    // Step 1: Load simulation response
    info!("Step 1/4: Loading simulation response...");
    let response = load_response(args).context("Failed to load simulation response")?;

    if response.is_error() {
        warn!(
            "Simulation did not succeed ({}); ranking the events it produced",
            response.error.as_deref().unwrap_or("no error message")
        );
    }

    // Step 2: Cost table
    info!("Step 2/4: Building cost table...");
    let table = build_cost_table(&args.weight_overrides)?;
    debug!("Cost table: {:?}", table.entries());

    // Step 3: Aggregate
    info!("Step 3/4: Aggregating {} events...", response.categorized_events.len());
    let stats = build_contract_stats_with(&response, &table);
    let summary = summarize(&response, &stats);
    info!("Stats: {}", summary.summary());

    if summary.is_dominated() {
        if let Some(top) = stats.first() {
            info!(
                "{} accounts for {:.1}% of the estimated cost",
                top.contract_id, summary.top_contract_percentage
            );
        }
    }

    // Step 4: Output
    info!("Step 4/4: Writing output...");
    if let Some(path) = &args.output_json {
        let report = StatsReport::new(source, &stats, summary.clone());
        write_report(&report, path).context("Failed to write stats report")?;
        info!("✓ Report written to: {}", path.display());
    }

    if args.print_table {
        println!("\n{}", render_stats_table(&stats, &summary, args.top));
    }

    let elapsed = start_time.elapsed();
    info!("Stats completed in {:.2}s", elapsed.as_secs_f64());

    Ok(stats)
}

/// Default cost table with CLI overrides applied
///
/// **Public** - shared with the weights command
pub fn build_cost_table(weight_overrides: &[String]) -> Result<CostTable> {
    CostTable::default()
        .with_overrides(weight_overrides)
        .context("Invalid --weight override")
}

/// Load the simulation response from the configured input
///
/// **Private** - internal helper for execute_stats
fn load_response(args: &StatsArgs) -> Result<SimulationResponse> {
    match &args.input {
        StatsInput::File(path) => {
            if !args.overrides.is_empty() {
                warn!("--timestamp/--window only apply when running the simulator; ignoring");
            }
            read_response(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        StatsInput::Simulator { request, binary } => {
            let file = File::open(request)
                .with_context(|| format!("Failed to open request {}", request.display()))?;
            let request_json: serde_json::Value = serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Request {} is not valid JSON", request.display()))?;

            let response = SimulatorProcess::new(binary.as_str())
                .run(&request_json, &args.overrides)
                .with_context(|| format!("Simulation with {} failed", binary))?;
            Ok(response)
        }
    }
}

/// Validate stats arguments
///
/// **Public** - can be called before execute_stats for early validation
pub fn validate_args(args: &StatsArgs) -> Result<()> {
    match &args.input {
        StatsInput::File(path) => {
            if path.as_os_str().is_empty() {
                anyhow::bail!("Input file path cannot be empty");
            }
        }
        StatsInput::Simulator { request, binary } => {
            if request.as_os_str().is_empty() {
                anyhow::bail!("Request file path cannot be empty");
            }
            if binary.trim().is_empty() {
                anyhow::bail!("Simulator binary cannot be empty");
            }
        }
    }

    if args.overrides.timestamp < 0 {
        anyhow::bail!("--timestamp must be a non-negative Unix epoch");
    }

    if args.overrides.window < 0 {
        anyhow::bail!("--window must be a non-negative number of seconds");
    }

    if let Some(top) = args.top {
        if top == 0 {
            anyhow::bail!("--top must be greater than 0");
        }
        if top > MAX_TOP_CONTRACTS {
            anyhow::bail!("--top is too large (max {})", MAX_TOP_CONTRACTS);
        }
    }

    for raw in &args.weight_overrides {
        parse_weight_override(raw)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::SimulationOverrides;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn file_args(path: &str) -> StatsArgs {
        StatsArgs {
            input: StatsInput::File(PathBuf::from(path)),
            print_table: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&StatsArgs::default()).is_ok());
        assert!(validate_args(&file_args("sim.json")).is_ok());
    }

    #[test]
    fn test_validate_args_empty_file() {
        assert!(validate_args(&file_args("")).is_err());
    }

    #[test]
    fn test_validate_args_empty_binary() {
        let args = StatsArgs {
            input: StatsInput::Simulator {
                request: PathBuf::from("request.json"),
                binary: "  ".to_string(),
            },
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_negative_overrides() {
        let args = StatsArgs {
            overrides: SimulationOverrides {
                timestamp: -1,
                window: 0,
            },
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());

        let args = StatsArgs {
            overrides: SimulationOverrides {
                timestamp: 0,
                window: -60,
            },
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_top_bounds() {
        let args = StatsArgs {
            top: Some(0),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());

        let args = StatsArgs {
            top: Some(MAX_TOP_CONTRACTS + 1),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_bad_weight() {
        let args = StatsArgs {
            weight_overrides: vec!["storage_write".to_string()],
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_execute_stats_from_file() {
        let mut input = NamedTempFile::new().unwrap();
        write!(
            input,
            r#"{{"categorized_events": [
                {{"contract_id": "A", "event_type": "storage_write"}},
                {{"contract_id": "A", "event_type": "require_auth"}},
                {{"contract_id": "B", "event_type": "contract_call"}}
            ]}}"#
        )
        .unwrap();

        let args = file_args(input.path().to_str().unwrap());
        let stats = execute_stats(&args).unwrap();

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].contract_id, "A");
        assert_eq!(stats[0].estimated_cost, 5);
    }

    #[test]
    fn test_execute_stats_missing_file() {
        let args = file_args("/definitely/not/here.json");
        assert!(execute_stats(&args).is_err());
    }
}
