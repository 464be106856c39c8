//! Error Handling Tests
//!
//! Failures are always reported as results, never as panics or `Err`.

use crate::common::*;
use wmctl::{CommandStatus, ErrorPolicy, Executor, InterpreterConfig, Registry, ServerState};

#[test]
fn unknown_command_stops_the_line() {
    let executor = create_recording_executor();
    let mut state = ServerState::new();
    let result = executor.execute(&mut state, "record 1; missing; record 2");
    assert_eq!(result.input.as_deref(), Some("missing"));
    assert_eq!(recorded(&state), vec!["1"]);
}

#[test]
fn argument_count_errors_name_the_command() {
    let executor = create_executor();
    let result = executor.execute(&mut ServerState::new(), "client.focused #111111 #222222");
    assert_eq!(result.status, CommandStatus::Invalid);
    assert_eq!(result.input.as_deref(), Some("client.focused"));
    assert_eq!(
        result.error.as_deref(),
        Some("Invalid client.focused command (expected at least 3 arguments, got 2)")
    );
}

#[test]
fn malformed_colors_are_invalid() {
    let executor = create_executor();
    for bad in ["AABBCC", "#ZZZZZZ", "#ABC"] {
        let result = executor.execute(
            &mut ServerState::new(),
            &format!("client.background {}", bad),
        );
        assert_eq!(result.status, CommandStatus::Invalid);
        assert_eq!(
            result.error.as_deref(),
            Some(format!("Invalid color definition {}", bad).as_str())
        );
    }
}

#[test]
fn unterminated_quote_is_reported_not_guessed() {
    let executor = create_recording_executor();
    let mut state = ServerState::new();
    let result = executor.execute(&mut state, "record 'half");
    assert_eq!(result.status, CommandStatus::Invalid);
    assert!(recorded(&state).is_empty());
}

#[test]
fn stray_quote_in_exec_does_not_hide_later_commands() {
    let executor = create_executor();
    for line in ["exec notify-send it's done; exit", r#"exec echo "hi; exit"#] {
        let mut state = ServerState::new();
        let result = executor.execute(&mut state, line);
        assert_eq!(result.status, CommandStatus::Invalid, "line {:?}", line);
        assert!(result.error.unwrap().contains("unterminated"));
        assert!(state.exec_queue.is_empty());
        assert!(!state.exit_requested);
    }
}

#[test]
fn dangling_escape_is_reported() {
    let executor = create_recording_executor();
    let result = executor.execute(&mut ServerState::new(), r"record end\");
    assert_eq!(result.status, CommandStatus::Invalid);
    assert!(result.error.unwrap().contains("dangling escape"));
}

#[test]
fn long_errors_are_truncated() {
    let executor = create_executor();
    let color = format!("#{}", "f".repeat(400));
    let result = executor.execute(
        &mut ServerState::new(),
        &format!("client.background {}", color),
    );
    let error = result.error.unwrap();
    assert_eq!(error.len(), wmctl::MAX_ERROR_LEN);
    assert!(error.starts_with("Invalid color definition #fff"));
}

#[test]
fn continue_policy_collects_every_failure() {
    let config = InterpreterConfig {
        on_error: ErrorPolicy::Continue,
        ..InterpreterConfig::default()
    };
    let mut session = wmctl::Session::new(Executor::with_config(Registry::shared(), config));
    let results = session.execute("nope1; exit; nope2");
    let statuses: Vec<_> = results.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            CommandStatus::Invalid,
            CommandStatus::Success,
            CommandStatus::Invalid
        ]
    );
    assert!(session.state().exit_requested);
}
