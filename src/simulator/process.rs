//! Adapter for the external simulator binary.
//!
//! The simulator reads one JSON request on stdin and prints one JSON
//! `SimulationResponse` on stdout. We only forward overrides; what they
//! mean to the ledger is the simulator's business.

use super::loader::parse_response;
use super::schema::SimulationResponse;
use crate::utils::error::{ParseError, SimulatorError};
use chrono::DateTime;
use log::{debug, info, warn};
use serde_json::Value;
use std::io::{self, ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;

/// Ledger overrides forwarded with the request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationOverrides {
    /// Ledger header timestamp (Unix epoch seconds, 0 = unset)
    pub timestamp: i64,

    /// Time window in seconds (0 = unset)
    pub window: i64,
}

impl SimulationOverrides {
    pub fn is_empty(&self) -> bool {
        self.timestamp == 0 && self.window == 0
    }

    /// Merge the overrides into a request object
    ///
    /// The timestamp is sent as RFC 3339, which is what the simulator expects.
    pub fn apply(&self, request: &Value) -> Result<Value, SimulatorError> {
        let mut obj = request
            .as_object()
            .cloned()
            .ok_or(SimulatorError::InvalidRequest)?;

        if self.timestamp != 0 {
            let ts = DateTime::from_timestamp(self.timestamp, 0)
                .ok_or(SimulatorError::InvalidTimestamp(self.timestamp))?;
            obj.insert("timestamp".to_string(), Value::String(ts.to_rfc3339()));
        }

        if self.window != 0 {
            obj.insert("time_window".to_string(), Value::from(self.window));
        }

        Ok(Value::Object(obj))
    }
}

/// Handle to an external simulator executable
#[derive(Debug, Clone)]
pub struct SimulatorProcess {
    binary: String,
    args: Vec<String>,
}

impl SimulatorProcess {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            args: Vec::new(),
        }
    }

    /// Extra command-line arguments for the simulator
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Run one simulation
    ///
    /// # Errors
    /// * `SimulatorError::Spawn` - binary missing or not executable
    /// * `SimulatorError::NonZeroExit` - simulator failed
    /// * `SimulatorError::InvalidOutput` - stdout was not a simulation response
    pub fn run(
        &self,
        request: &Value,
        overrides: &SimulationOverrides,
    ) -> Result<SimulationResponse, SimulatorError> {
        let request = overrides.apply(request)?;

        info!("Running simulator: {}", self.binary);
        debug!("Simulation request: {}", request);

        let mut child = Command::new(&self.binary)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SimulatorError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        // Feed stdin from its own thread so stdout/stderr are drained while we write
        let writer = child.stdin.take().map(|mut stdin| {
            let payload = request.to_string().into_bytes();
            thread::spawn(move || stdin.write_all(&payload))
        });

        let output = child.wait_with_output()?;

        if let Some(writer) = writer {
            let written = writer
                .join()
                .map_err(|_| io::Error::new(ErrorKind::Other, "stdin writer thread panicked"))?;

            // A simulator that exits early closes the pipe; its exit status tells the story
            if let Err(e) = written {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(SimulatorError::Io(e));
                }
                warn!("Simulator closed stdin before reading the request");
            }
        }

        if !output.status.success() {
            return Err(SimulatorError::NonZeroExit {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let raw: Value = serde_json::from_slice(&output.stdout).map_err(ParseError::from)?;
        let response = parse_response(&raw)?;

        debug!(
            "Simulator returned {} events",
            response.categorized_events.len()
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overrides_apply() {
        let overrides = SimulationOverrides {
            timestamp: 1_700_000_000,
            window: 3600,
        };

        let request = overrides.apply(&json!({ "envelope_xdr": "AAAA" })).unwrap();
        assert_eq!(request["envelope_xdr"], "AAAA");
        assert_eq!(request["timestamp"], "2023-11-14T22:13:20+00:00");
        assert_eq!(request["time_window"], 3600);
    }

    #[test]
    fn test_empty_overrides_leave_request_untouched() {
        let overrides = SimulationOverrides::default();
        assert!(overrides.is_empty());

        let request = json!({ "envelope_xdr": "AAAA" });
        assert_eq!(overrides.apply(&request).unwrap(), request);
    }

    #[test]
    fn test_overrides_require_object() {
        let overrides = SimulationOverrides::default();
        assert!(matches!(
            overrides.apply(&json!([1, 2])),
            Err(SimulatorError::InvalidRequest)
        ));
    }

    #[test]
    fn test_missing_binary() {
        let process = SimulatorProcess::new("definitely-not-a-simulator-binary");
        let result = process.run(&json!({}), &SimulationOverrides::default());
        assert!(matches!(result, Err(SimulatorError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_echo_simulator() {
        // `cat` echoes the request, which doubles as a valid response
        let process = SimulatorProcess::new("cat");
        let request = json!({
            "categorized_events": [
                { "contract_id": "CA", "event_type": "storage_write" }
            ]
        });

        let response = process.run(&request, &SimulationOverrides::default()).unwrap();
        assert_eq!(response.categorized_events.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_large_request_with_noisy_simulator() {
        // The child floods stderr past the pipe buffer before it reads stdin
        let script = "head -c 200000 /dev/zero >&2; cat >/dev/null; \
                      echo '{\"categorized_events\":[{\"contract_id\":\"CA\",\"event_type\":\"storage_write\"}]}'";
        let process = SimulatorProcess::new("sh").with_args(["-c", script]);
        let request = json!({ "envelope_xdr": "A".repeat(300_000) });

        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(process.run(&request, &SimulationOverrides::default()));
        });

        let response = rx
            .recv_timeout(std::time::Duration::from_secs(30))
            .expect("simulator run did not finish")
            .unwrap();
        assert_eq!(response.categorized_events.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_simulator() {
        let process = SimulatorProcess::new("sh").with_args(["-c", "echo boom >&2; exit 3"]);
        let result = process.run(&json!({}), &SimulationOverrides::default());

        match result {
            Err(SimulatorError::NonZeroExit { stderr, .. }) => assert_eq!(stderr, "boom"),
            other => panic!("expected NonZeroExit, got {:?}", other),
        }
    }
}
