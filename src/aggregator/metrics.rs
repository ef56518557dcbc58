//! Summary metrics over aggregated contract statistics.
//!
//! Answers the follow-up questions after ranking: how much of the event
//! stream was attributable, and whether one contract dominates the cost.

use super::contract_stats::ContractStat;
use crate::simulator::SimulationResponse;
use crate::utils::config::DOMINANCE_THRESHOLD_PERCENT;
use log::debug;
use serde::{Deserialize, Serialize};

/// Totals for one aggregation
///
/// **Public** - returned from summarize
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Events in the simulation response
    pub total_events: u64,

    /// Events attributed to a contract
    pub attributed_events: u64,

    /// Events with no contract (host-level)
    pub unattributed_events: u64,

    /// Sum of all contract costs
    pub total_cost: u64,

    /// Number of distinct contracts
    pub contract_count: usize,

    /// Share of total cost held by the most expensive contract
    pub top_contract_percentage: f64,
}

/// Summarize a simulation and its ranked stats
///
/// **Public** - main entry point for metrics calculation
///
/// # Arguments
/// * `response` - The simulation the stats were built from
/// * `stats` - Output of build_contract_stats (sorted, most expensive first)
pub fn summarize(response: &SimulationResponse, stats: &[ContractStat]) -> StatsSummary {
    let total_events = response.categorized_events.len() as u64;
    let attributed_events: u64 = stats.iter().map(|s| s.call_depth).sum();
    let total_cost = stats
        .iter()
        .fold(0u64, |acc, s| acc.saturating_add(s.estimated_cost));

    let top_contract_percentage = stats
        .first()
        .map(|top| cost_percentage(top, total_cost))
        .unwrap_or(0.0);

    let summary = StatsSummary {
        total_events,
        attributed_events,
        unattributed_events: total_events.saturating_sub(attributed_events),
        total_cost,
        contract_count: stats.len(),
        top_contract_percentage,
    };

    debug!("{}", summary.summary());

    summary
}

/// Percentage of `total_cost` held by one contract
pub fn cost_percentage(stat: &ContractStat, total_cost: u64) -> f64 {
    if total_cost > 0 {
        (stat.estimated_cost as f64 / total_cost as f64) * 100.0
    } else {
        0.0
    }
}

impl StatsSummary {
    /// Check if one contract dominates the transaction's cost
    ///
    /// Returns true if the top contract holds more than 80% of total cost
    pub fn is_dominated(&self) -> bool {
        self.top_contract_percentage > DOMINANCE_THRESHOLD_PERCENT
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Events: {} ({} attributed, {} host) | Contracts: {} | Total cost: {} | Top: {:.1}%",
            self.total_events,
            self.attributed_events,
            self.unattributed_events,
            self.contract_count,
            self.total_cost,
            self.top_contract_percentage
        )
    }
}
