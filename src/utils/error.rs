//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//! The aggregator itself never fails and has no error type.

use thiserror::Error;

/// Errors that can occur while loading a simulation response
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to read simulation input: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Invalid simulation format: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur while running the external simulator
#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("Failed to start simulator '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Simulator I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Simulator exited with {status}: {stderr}")]
    NonZeroExit { status: String, stderr: String },

    #[error("Simulator produced invalid output: {0}")]
    InvalidOutput(#[from] ParseError),

    #[error("Simulation request must be a JSON object")]
    InvalidRequest,

    #[error("Timestamp {0} is out of range")]
    InvalidTimestamp(i64),
}

/// Errors that can occur when overriding cost weights
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CostTableError {
    #[error("Weight override '{0}' must have the form TYPE=WEIGHT")]
    MissingSeparator(String),

    #[error("Weight override '{0}' has an empty event type")]
    EmptyEventType(String),

    #[error("Weight override '{0}' has an invalid weight")]
    InvalidWeight(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
