//! Simulation input: data model, JSON loading and the external simulator.
//!
//! This module handles:
//! - The `SimulationResponse` / `CategorizedEvent` model
//! - Tolerant parsing of simulator JSON
//! - Running the simulator binary with ledger overrides

pub mod loader;
pub mod process;
pub mod schema;

// Re-export main types
pub use loader::{parse_response, read_response, read_response_from};
pub use process::{SimulationOverrides, SimulatorProcess};
pub use schema::{CategorizedEvent, SimulationResponse};
