//! JSON report schema for contract cost statistics.
//!
//! Schema is versioned to allow future evolution.

use crate::aggregator::{cost_percentage, ContractStat, StatsSummary};
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Where the simulation response came from (file path, "stdin", simulator)
    pub source: String,

    /// Totals over the whole simulation
    pub summary: StatsSummary,

    /// Contracts ranked by estimated cost
    pub contracts: Vec<ContractCostEntry>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// One ranked contract in the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractCostEntry {
    pub contract_id: String,
    pub estimated_cost: u64,
    pub call_depth: u64,

    /// Percentage of total cost
    pub percentage: f64,
}

impl StatsReport {
    /// Assemble a report from ranked stats
    ///
    /// **Public** - used by the stats command
    pub fn new(source: impl Into<String>, stats: &[ContractStat], summary: StatsSummary) -> Self {
        let contracts = stats
            .iter()
            .map(|stat| ContractCostEntry {
                contract_id: stat.contract_id.clone(),
                estimated_cost: stat.estimated_cost,
                call_depth: stat.call_depth,
                percentage: cost_percentage(stat, summary.total_cost),
            })
            .collect();

        Self {
            version: SCHEMA_VERSION.to_string(),
            source: source.into(),
            summary,
            contracts,
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_percentages() {
        let stats = vec![
            ContractStat {
                contract_id: "A".to_string(),
                estimated_cost: 3,
                call_depth: 2,
            },
            ContractStat {
                contract_id: "B".to_string(),
                estimated_cost: 1,
                call_depth: 1,
            },
        ];
        let summary = StatsSummary {
            total_cost: 4,
            contract_count: 2,
            ..Default::default()
        };

        let report = StatsReport::new("fixture.json", &stats, summary);

        assert_eq!(report.version, SCHEMA_VERSION);
        assert_eq!(report.contracts.len(), 2);
        assert_eq!(report.contracts[0].percentage, 75.0);
        assert_eq!(report.contracts[1].percentage, 25.0);
        assert!(chrono::DateTime::parse_from_rfc3339(&report.generated_at).is_ok());
    }
}
