//! Soroban Cost Stats
//!
//! Ranks the contracts touched by a simulated Soroban transaction by
//! estimated execution cost, to answer "which contract is burning the
//! budget?".
//!
//! This crate provides the core implementation for the
//! `soroban-stats` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! soroban-stats stats --file simulation.json
//! soroban-stats --timestamp 1700000000 stats --request request.json
//! ```
//!
//! The aggregation is available as a library too:
//!
//! ```
//! use soroban_cost_stats::aggregator::build_contract_stats;
//! use soroban_cost_stats::simulator::{CategorizedEvent, SimulationResponse};
//!
//! let response = SimulationResponse::from_events(vec![
//!     CategorizedEvent::new("CA", "storage_write"),
//!     CategorizedEvent::new("CB", "contract_call"),
//! ]);
//! let stats = build_contract_stats(&response);
//! assert_eq!(stats[0].contract_id, "CA");
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod simulator;
pub mod utils;
