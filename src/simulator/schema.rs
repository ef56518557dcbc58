//! Simulation response data model.
//!
//! These are the shapes handed to us by the external simulator after it has
//! already categorized the raw host events.

use serde::{Deserialize, Serialize};

/// A single categorized execution event observed during simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedEvent {
    /// Contract that performed the action (None for host-level events)
    #[serde(default, alias = "contractId", alias = "ContractID")]
    pub contract_id: Option<String>,

    /// Event category tag, e.g. `storage_write` or `require_auth`
    #[serde(alias = "eventType", alias = "EventType")]
    pub event_type: String,
}

impl CategorizedEvent {
    /// Create an event attributed to `contract_id`
    pub fn new(contract_id: impl Into<String>, event_type: impl Into<String>) -> Self {
        Self {
            contract_id: Some(contract_id.into()),
            event_type: event_type.into(),
        }
    }

    /// Create an event with no attributable contract
    pub fn unattributed(event_type: impl Into<String>) -> Self {
        Self {
            contract_id: None,
            event_type: event_type.into(),
        }
    }

    /// Contract this event is attributed to, if any.
    ///
    /// Blank identifiers count as absent. Other ids are returned verbatim,
    /// so `"CA"` and `"CA "` stay distinct contracts.
    pub fn contract(&self) -> Option<&str> {
        self.contract_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }
}

/// Result of dry-running a transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResponse {
    /// Simulator status string ("success", "error", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Simulator error message, if the run failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Events in the order they were observed
    #[serde(default, alias = "categorizedEvents", alias = "CategorizedEvents")]
    pub categorized_events: Vec<CategorizedEvent>,
}

impl SimulationResponse {
    /// Build a response holding only events
    pub fn from_events(categorized_events: Vec<CategorizedEvent>) -> Self {
        Self {
            categorized_events,
            ..Default::default()
        }
    }

    /// True if the simulator reported a failed run
    pub fn is_error(&self) -> bool {
        self.error.is_some()
            || self
                .status
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case("error"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_contract_is_unattributed() {
        let event = CategorizedEvent::new("   ", "storage_write");
        assert_eq!(event.contract(), None);

        let event = CategorizedEvent::unattributed("storage_write");
        assert_eq!(event.contract(), None);

        let event = CategorizedEvent::new("CABC", "storage_write");
        assert_eq!(event.contract(), Some("CABC"));
    }

    #[test]
    fn test_padded_contract_kept_verbatim() {
        let event = CategorizedEvent::new("CA ", "storage_write");
        assert_eq!(event.contract(), Some("CA "));
    }

    #[test]
    fn test_deserialize_field_aliases() {
        let event: CategorizedEvent = serde_json::from_value(json!({
            "ContractID": "CONTRACT_A",
            "EventType": "require_auth"
        }))
        .unwrap();
        assert_eq!(event.contract(), Some("CONTRACT_A"));
        assert_eq!(event.event_type, "require_auth");

        let event: CategorizedEvent = serde_json::from_value(json!({
            "contractId": null,
            "eventType": "log"
        }))
        .unwrap();
        assert_eq!(event.contract_id, None);
    }

    #[test]
    fn test_is_error() {
        let mut response = SimulationResponse::default();
        assert!(!response.is_error());

        response.status = Some("ERROR".to_string());
        assert!(response.is_error());

        let response = SimulationResponse {
            error: Some("budget exceeded".to_string()),
            ..Default::default()
        };
        assert!(response.is_error());
    }
}
