use crate::aggregator::CostTable;
use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a stats report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)
        .with_context(|| format!("Invalid report {}", file_path.display()))?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Total Cost: {}", report.summary.total_cost);
    println!("  Contracts: {}", report.contracts.len());
    if let Some(top) = report.contracts.first() {
        println!("  Most Expensive: {} ({})", top.contract_id, top.estimated_cost);
    }

    Ok(())
}

/// Display the effective cost table
pub fn display_weights(table: &CostTable) {
    println!("Event Cost Weights");
    println!();
    for (event_type, weight) in table.entries() {
        println!("  {:<24} {}", event_type, weight);
    }
    println!("  {:<24} {}", "(any other)", table.default_weight());
}

/// Display version information
pub fn display_version() {
    println!("Soroban Cost Stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Ranks contracts in a simulated Soroban transaction by estimated cost.");
}
