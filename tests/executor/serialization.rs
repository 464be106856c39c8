//! Serialization Tests
//!
//! The JSON envelope is the only externally observable encoding.

use crate::common::*;
use wmctl::{parse_json_results, results_to_json, CommandResult, CommandStatus, ServerState};

#[test]
fn invalid_result_has_all_fields() {
    let result = CommandResult::new(
        CommandStatus::Invalid,
        Some("foo"),
        Some("bar".to_string()),
    );
    let value: serde_json::Value = serde_json::from_str(&result.to_json()).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{ "success": false, "input": "foo", "error": "bar" }])
    );
}

#[test]
fn success_has_only_success_field() {
    let value: serde_json::Value =
        serde_json::from_str(&CommandResult::success().to_json()).unwrap();
    let object = value[0].as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object["success"], true);
}

#[test]
fn absent_fields_are_omitted_not_null() {
    let json = CommandResult::new(CommandStatus::Invalid, Some("x"), None).to_json();
    assert!(!json.contains("null"));
    assert!(!json.contains("error"));
}

#[test]
fn line_result_round_trips_through_wire_format() {
    let executor = create_executor();
    let result = executor.execute(&mut ServerState::new(), "bogus \"quoted\"");
    let decoded = parse_json_results(&result.to_json()).unwrap();
    assert_eq!(decoded, vec![result]);
}

#[test]
fn session_json_matches_results_to_json() {
    let mut session = create_session();
    let json = session.execute_json("exit");
    assert_eq!(json, results_to_json(&[CommandResult::success()]));
}
