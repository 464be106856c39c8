//! Command Dispatch Tests
//!
//! Tests that lines are split, tokenized and dispatched to the right
//! handlers, and that the line-level result is correct.

use crate::common::*;
use wmctl::{CommandResult, CommandStatus, ServerState};

#[test]
fn many_lists_of_many_known_commands_succeed() {
    let executor = create_recording_executor();

    for lists in 1..4 {
        for per_list in 1..4 {
            let line = (0..lists)
                .map(|l| {
                    (0..per_list)
                        .map(|c| format!("record {}-{}", l, c))
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .collect::<Vec<_>>()
                .join("; ");

            let mut state = ServerState::new();
            let result = executor.execute(&mut state, &line);
            assert_eq!(result, CommandResult::success(), "line {:?}", line);
            assert!(result.error.is_none());
            assert_eq!(recorded(&state).len(), lists * per_list);
        }
    }
}

#[test]
fn empty_line_runs_nothing() {
    let executor = create_recording_executor();
    let mut state = ServerState::new();
    assert!(executor.execute(&mut state, "").is_success());
    assert!(recorded(&state).is_empty());
}

#[test]
fn bogus_is_unknown() {
    let executor = create_executor();
    let result = executor.execute(&mut ServerState::new(), "bogus");
    assert_eq!(result.status, CommandStatus::Invalid);
    assert_eq!(result.input.as_deref(), Some("bogus"));
    assert!(result
        .error
        .as_deref()
        .unwrap()
        .contains("Unknown/invalid command"));
}

#[test]
fn quoted_arguments_are_single_values() {
    let executor = create_recording_executor();
    let mut state = ServerState::new();
    executor.execute(&mut state, r#"record "arg with space" other"#);
    assert_eq!(recorded(&state), vec!["arg with space|other"]);
}

#[test]
fn exec_text_is_untouched() {
    let executor = create_executor();
    let mut state = ServerState::new();
    let result = executor.execute(&mut state, r#"exec sh -c 'echo "$HOME"'"#);
    assert!(result.is_success());
    assert_eq!(state.exec_queue[0].command, r#"sh -c 'echo "$HOME"'"#);
}

#[test]
fn separators_inside_quotes_stay_in_argument() {
    let executor = create_recording_executor();
    let mut state = ServerState::new();
    let result = executor.execute(&mut state, r#"record "a;b,c"; record d"#);
    assert!(result.is_success());
    assert_eq!(recorded(&state), vec!["a;b,c", "d"]);
}

#[test]
fn mixed_case_command_names_resolve() {
    let executor = create_executor();
    let mut state = ServerState::new();
    let result = executor.execute(&mut state, "Client.Background #000000; ExIt");
    assert!(result.is_success());
    assert!(state.exit_requested);
    assert!(state.colors.background.is_some());
}

#[test]
fn same_line_twice_gives_equal_results() {
    let executor = create_executor();
    let line = "exec foo; client.focused #1 #2 #3; exit";
    let first = executor.execute(&mut ServerState::new(), line);
    let second = executor.execute(&mut ServerState::new(), line);
    assert_eq!(first, second);
    assert_eq!(first.status, CommandStatus::Invalid);
}
