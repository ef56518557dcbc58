//! Event cost classifier.
//!
//! Maps an event category to a relative cost weight. The weights are a
//! ranking heuristic for developers, not the network's metering formula.
//! New categories are added as table entries.

use crate::utils::config::{DEFAULT_COST_WEIGHTS, DEFAULT_EVENT_WEIGHT};
use crate::utils::error::CostTableError;
use std::collections::HashMap;

/// Lookup table from event type to cost weight
///
/// **Public** - passed to the aggregator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    weights: HashMap<String, u64>,
    default_weight: u64,
}

impl CostTable {
    /// Create an empty table where every event costs `default_weight`
    pub fn new(default_weight: u64) -> Self {
        Self {
            weights: HashMap::new(),
            default_weight,
        }
    }

    /// Set the weight for one event type (builder style)
    pub fn with_weight(mut self, event_type: impl Into<String>, weight: u64) -> Self {
        self.set_weight(event_type, weight);
        self
    }

    pub fn set_weight(&mut self, event_type: impl Into<String>, weight: u64) {
        self.weights.insert(event_type.into(), weight);
    }

    /// Weight for an event type; unknown types get the default weight
    ///
    /// Matching is exact: case and surrounding whitespace are significant.
    pub fn weight(&self, event_type: &str) -> u64 {
        self.weights
            .get(event_type)
            .copied()
            .unwrap_or(self.default_weight)
    }

    pub fn default_weight(&self) -> u64 {
        self.default_weight
    }

    /// All explicit entries, sorted by event type
    pub fn entries(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .weights
            .iter()
            .map(|(event_type, weight)| (event_type.as_str(), *weight))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Apply `TYPE=WEIGHT` overrides on top of this table
    pub fn with_overrides<S: AsRef<str>>(mut self, overrides: &[S]) -> Result<Self, CostTableError> {
        for raw in overrides {
            let (event_type, weight) = parse_weight_override(raw.as_ref())?;
            self.set_weight(event_type, weight);
        }
        Ok(self)
    }
}

impl Default for CostTable {
    fn default() -> Self {
        DEFAULT_COST_WEIGHTS
            .iter()
            .fold(Self::new(DEFAULT_EVENT_WEIGHT), |table, (event_type, weight)| {
                table.with_weight(*event_type, *weight)
            })
    }
}

/// Parse a `TYPE=WEIGHT` override
///
/// **Public** - used by the CLI for `--weight`
pub fn parse_weight_override(raw: &str) -> Result<(String, u64), CostTableError> {
    let (event_type, weight) = raw
        .split_once('=')
        .ok_or_else(|| CostTableError::MissingSeparator(raw.to_string()))?;

    let event_type = event_type.trim();
    if event_type.is_empty() {
        return Err(CostTableError::EmptyEventType(raw.to_string()));
    }

    let weight = weight
        .trim()
        .parse::<u64>()
        .map_err(|_| CostTableError::InvalidWeight(raw.to_string()))?;

    Ok((event_type.to_string(), weight))
}
