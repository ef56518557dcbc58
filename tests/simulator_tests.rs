use soroban_cost_stats::aggregator::build_contract_stats;
use soroban_cost_stats::commands::{execute_stats, StatsArgs, StatsInput};
use soroban_cost_stats::output::read_report;
use soroban_cost_stats::simulator::read_response;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_read_response_from_file() {
    let fixture = write_fixture(
        r#"{
            "status": "success",
            "error": null,
            "events": ["AAAA"],
            "categorized_events": [
                { "contract_id": "CA", "event_type": "storage_write" },
                { "contract_id": null, "event_type": "core_metrics" },
                { "contract_id": "CB", "event_type": "require_auth" }
            ]
        }"#,
    );

    let response = read_response(fixture.path()).unwrap();
    assert!(!response.is_error());
    assert_eq!(response.categorized_events.len(), 3);

    let stats = build_contract_stats(&response);
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].contract_id, "CA");
}

#[test]
fn test_read_response_invalid_json() {
    let fixture = write_fixture("{ not json");
    assert!(read_response(fixture.path()).is_err());
}

#[test]
fn test_error_response_still_aggregates() {
    let fixture = write_fixture(
        r#"{
            "status": "error",
            "error": "HostError: budget exceeded",
            "categorized_events": [
                { "contract_id": "CA", "event_type": "storage_write" }
            ]
        }"#,
    );

    let response = read_response(fixture.path()).unwrap();
    assert!(response.is_error());
    assert_eq!(build_contract_stats(&response).len(), 1);
}

#[test]
fn test_stats_command_writes_report() {
    let fixture = write_fixture(
        r#"[
            { "contract_id": "CA", "event_type": "storage_write" },
            { "contract_id": "CA", "event_type": "require_auth" },
            { "contract_id": "CB", "event_type": "contract_call" }
        ]"#,
    );
    let out_dir = tempfile::tempdir().unwrap();
    let report_path = out_dir.path().join("reports/stats.json");

    let args = StatsArgs {
        input: StatsInput::File(fixture.path().to_path_buf()),
        output_json: Some(report_path.clone()),
        print_table: false,
        ..Default::default()
    };

    let stats = execute_stats(&args).unwrap();
    assert_eq!(stats.len(), 2);

    let report = read_report(&report_path).unwrap();
    assert_eq!(report.contracts.len(), 2);
    assert_eq!(report.contracts[0].contract_id, "CA");
    assert_eq!(report.contracts[0].estimated_cost, 5);
    assert_eq!(report.summary.total_cost, 6);
}

#[test]
fn test_stats_command_empty_simulation() {
    let fixture = write_fixture(r#"{ "status": "success", "categorized_events": [] }"#);

    let args = StatsArgs {
        input: StatsInput::File(fixture.path().to_path_buf()),
        print_table: false,
        ..Default::default()
    };

    assert!(execute_stats(&args).unwrap().is_empty());
}
