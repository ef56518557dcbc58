//! Per-contract cost aggregation.
//!
//! Folds the event stream of one simulation into one `ContractStat` per
//! contract, then ranks contracts by estimated cost (most expensive first).
//!
//! Ties are broken by first appearance in the event stream: the sort is
//! stable and accumulators are kept in first-seen order.

use super::cost::CostTable;
use crate::simulator::SimulationResponse;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregated activity of one contract within a single simulation
///
/// **Public** - returned from build_contract_stats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractStat {
    /// Contract identifier (never empty)
    pub contract_id: String,

    /// Sum of event weights attributed to this contract
    pub estimated_cost: u64,

    /// Number of events attributed to this contract.
    /// An activity proxy, not a real call-graph depth.
    pub call_depth: u64,
}

impl ContractStat {
    pub fn new(contract_id: impl Into<String>) -> Self {
        Self {
            contract_id: contract_id.into(),
            estimated_cost: 0,
            call_depth: 0,
        }
    }

    /// Account for one event of the given weight
    fn record(&mut self, weight: u64) {
        self.estimated_cost = self.estimated_cost.saturating_add(weight);
        self.call_depth += 1;
    }
}

/// Build ranked contract statistics with the default cost table
///
/// **Public** - main entry point for aggregation
pub fn build_contract_stats(response: &SimulationResponse) -> Vec<ContractStat> {
    build_contract_stats_with(response, &CostTable::default())
}

/// Build ranked contract statistics
///
/// **Public** - aggregation with a caller-supplied cost table
///
/// # Arguments
/// * `response` - Simulation response holding categorized events
/// * `table` - Cost weights per event type
///
/// # Returns
/// One entry per distinct attributed contract, sorted by
/// `estimated_cost` descending
///
/// # Algorithm
/// 1. Skip events without a contract
/// 2. Look up or create the contract's accumulator
/// 3. Add the event's weight and count the event
/// 4. Stable sort by cost (descending)
pub fn build_contract_stats_with(
    response: &SimulationResponse,
    table: &CostTable,
) -> Vec<ContractStat> {
    debug!(
        "Aggregating {} categorized events",
        response.categorized_events.len()
    );

    // contract id -> index into `stats`, which keeps first-seen order
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<ContractStat> = Vec::new();
    let mut skipped = 0usize;

    for event in &response.categorized_events {
        let Some(contract_id) = event.contract() else {
            skipped += 1;
            continue;
        };

        let slot = *index.entry(contract_id).or_insert_with(|| {
            stats.push(ContractStat::new(contract_id));
            stats.len() - 1
        });

        stats[slot].record(table.weight(&event.event_type));
    }

    if skipped > 0 {
        debug!("Skipped {} events with no contract", skipped);
    }

    // Stable: equal costs keep first-seen order
    stats.sort_by(|a, b| b.estimated_cost.cmp(&a.estimated_cost));

    debug!("Built stats for {} contracts", stats.len());

    stats
}
