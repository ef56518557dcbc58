//! Loader for simulator output.
//!
//! Parses raw JSON into a `SimulationResponse`. Simulator builds disagree on
//! the envelope, so several shapes are accepted, and individual malformed
//! events are dropped instead of failing the whole load.

use super::schema::{CategorizedEvent, SimulationResponse};
use crate::utils::config::EVENT_FIELD_NAMES;
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Parse a simulation response from raw JSON
///
/// **Public** - main entry point for loading
///
/// Accepted shapes:
/// * an object holding the event list under one of `EVENT_FIELD_NAMES`
/// * a JSON-RPC envelope whose `result` is such an object
/// * a bare array of events
///
/// # Errors
/// * `ParseError::InvalidFormat` - top level is neither object nor array,
///   or a JSON-RPC envelope carries an error
pub fn parse_response(raw: &Value) -> Result<SimulationResponse, ParseError> {
    match raw {
        Value::Array(events) => {
            debug!("Simulation input is a bare event array");
            Ok(SimulationResponse::from_events(parse_events_array(events)))
        }
        Value::Object(obj) if obj.contains_key("jsonrpc") => parse_rpc_envelope(obj),
        Value::Object(obj) => Ok(parse_response_object(obj)),
        _ => Err(ParseError::InvalidFormat(
            "Simulation response must be a JSON object or array".to_string(),
        )),
    }
}

/// Read a simulation response from a file, or stdin when the path is `-`
pub fn read_response(input_path: impl AsRef<Path>) -> Result<SimulationResponse, ParseError> {
    let input_path = input_path.as_ref();

    if input_path == Path::new("-") {
        debug!("Reading simulation response from stdin");
        return read_response_from(io::stdin().lock());
    }

    debug!("Reading simulation response from: {}", input_path.display());
    let file = File::open(input_path)?;
    read_response_from(BufReader::new(file))
}

/// Read a simulation response from any reader
pub fn read_response_from<R: Read>(reader: R) -> Result<SimulationResponse, ParseError> {
    let raw: Value = serde_json::from_reader(reader)?;
    parse_response(&raw)
}

/// Unwrap a JSON-RPC response
///
/// **Private** - internal helper for parse_response
fn parse_rpc_envelope(obj: &Map<String, Value>) -> Result<SimulationResponse, ParseError> {
    if let Some(error) = obj.get("error").filter(|e| !e.is_null()) {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(ParseError::InvalidFormat(format!(
            "Simulator returned an RPC error: {}",
            message
        )));
    }

    match obj.get("result") {
        Some(result) if result.is_object() || result.is_array() => parse_response(result),
        _ => Err(ParseError::InvalidFormat(
            "Missing result field".to_string(),
        )),
    }
}

/// Build a response from a top-level object
///
/// **Private** - internal helper for parse_response
fn parse_response_object(obj: &Map<String, Value>) -> SimulationResponse {
    let status = obj.get("status").and_then(Value::as_str).map(str::to_string);
    let error = obj.get("error").and_then(Value::as_str).map(str::to_string);

    let events = EVENT_FIELD_NAMES
        .iter()
        .find_map(|field| obj.get(*field).and_then(Value::as_array))
        .map(|events| parse_events_array(events))
        .unwrap_or_else(|| {
            // A response without events is still a valid, empty simulation
            warn!("No event list found in simulation response");
            Vec::new()
        });

    if let Some(message) = &error {
        warn!("Simulator reported an error: {}", message);
    }

    SimulationResponse {
        status,
        error,
        categorized_events: events,
    }
}

/// Parse array of events, skipping malformed entries
///
/// **Private** - internal parsing logic
fn parse_events_array(events: &[Value]) -> Vec<CategorizedEvent> {
    let mut parsed = Vec::with_capacity(events.len());

    for (index, value) in events.iter().enumerate() {
        match parse_event(value) {
            Ok(event) => parsed.push(event),
            Err(e) => warn!("Skipping malformed event {} ({}): {}", index, e, value),
        }
    }

    debug!("Parsed {} of {} events", parsed.len(), events.len());
    parsed
}

/// Parse one event.
///
/// Flat `{contract_id, event_type}` objects are tried first, then the nested
/// `{category, event: {contract_id, ..}}` form emitted by the host simulator.
/// When neither matches, the flat-form serde error is returned.
fn parse_event(value: &Value) -> Result<CategorizedEvent, serde_json::Error> {
    let flat_err = match serde_json::from_value::<CategorizedEvent>(value.clone()) {
        Ok(event) => return Ok(event),
        Err(e) => e,
    };

    parse_nested_event(value).ok_or(flat_err)
}

fn parse_nested_event(value: &Value) -> Option<CategorizedEvent> {
    let category = value.get("category")?.as_str()?;
    let inner = value.get("event")?;
    let contract_id = inner
        .get("contract_id")
        .or_else(|| inner.get("contractId"))
        .and_then(Value::as_str)
        .map(str::to_string);

    Some(CategorizedEvent {
        contract_id,
        event_type: category.to_string(),
    })
}
