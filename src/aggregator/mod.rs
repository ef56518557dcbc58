//! Aggregation of categorized events into per-contract statistics.
//!
//! This module transforms a simulation response into:
//! - Event cost weights (cost table)
//! - Ranked per-contract stats (most expensive first)
//! - Summary metrics over the ranking

pub mod contract_stats;
pub mod cost;
pub mod metrics;

// Re-export main types and functions
pub use contract_stats::{build_contract_stats, build_contract_stats_with, ContractStat};
pub use cost::{parse_weight_override, CostTable};
pub use metrics::{cost_percentage, summarize, StatsSummary};
