//! Configuration and constants for the CLI.

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Weight applied to any event type missing from the cost table
pub const DEFAULT_EVENT_WEIGHT: u64 = 1;

// Relative cost weights per event category.
// A storage write plus an auth check must total 5.
pub const DEFAULT_COST_WEIGHTS: &[(&str, u64)] = &[
    ("storage_write", 4),
    ("require_auth", 1),
];

// Field names for the event list (different simulator builds use different names)
pub const EVENT_FIELD_NAMES: &[&str] = &[
    "categorized_events",
    "categorizedEvents",
    "CategorizedEvents",
    "events",
];

/// Simulator binary used when `--simulator` is not given
pub const DEFAULT_SIMULATOR_BIN: &str = "erst-sim";

pub const MAX_TOP_CONTRACTS: usize = 1000;

/// Share of total cost above which a single contract dominates the transaction
pub const DOMINANCE_THRESHOLD_PERCENT: f64 = 80.0;
