//! Argument models shared by the CLI and the stats command.

use crate::simulator::SimulationOverrides;
use crate::utils::config::DEFAULT_SIMULATOR_BIN;
use std::path::PathBuf;

/// Where the simulation response comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsInput {
    /// Saved simulator output (`-` reads stdin)
    File(PathBuf),

    /// Run the simulator on a request document
    Simulator { request: PathBuf, binary: String },
}

impl StatsInput {
    /// Short description for logs and the report's `source` field
    pub fn describe(&self) -> String {
        match self {
            StatsInput::File(path) if path.as_os_str() == "-" => "stdin".to_string(),
            StatsInput::File(path) => path.display().to_string(),
            StatsInput::Simulator { request, binary } => {
                format!("{} < {}", binary, request.display())
            }
        }
    }
}

/// Arguments for the stats command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct StatsArgs {
    /// Simulation response source
    pub input: StatsInput,

    /// Ledger overrides forwarded to the simulator
    pub overrides: SimulationOverrides,

    /// Raw `TYPE=WEIGHT` cost overrides
    pub weight_overrides: Vec<String>,

    /// Number of contracts to display (None = all)
    pub top: Option<usize>,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print the ranking table to stdout
    pub print_table: bool,
}

impl Default for StatsArgs {
    fn default() -> Self {
        Self {
            input: StatsInput::Simulator {
                request: PathBuf::from("request.json"),
                binary: DEFAULT_SIMULATOR_BIN.to_string(),
            },
            overrides: SimulationOverrides::default(),
            weight_overrides: Vec::new(),
            top: None,
            output_json: None,
            print_table: true,
        }
    }
}
