//! Session Script Tests
//!
//! Configuration and command scripts loaded from files.

use std::fs;

use tempfile::TempDir;
use wmctl::{
    CommandStatus, ErrorPolicy, Executor, InterpreterConfig, Registry, Session, CONFIG_FILE_NAME,
};

fn session_from_config(dir: &TempDir, toml: &str) -> Session {
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, toml).unwrap();
    let config = InterpreterConfig::from_file(&path).unwrap();
    Session::new(Executor::with_config(Registry::shared(), config))
}

#[test]
fn script_file_runs_every_line() {
    let dir = TempDir::new().unwrap();
    let mut session = session_from_config(&dir, "");

    let script = dir.path().join("config");
    fs::write(
        &script,
        "# colours\nclient.focused #4c7899 #285577 #ffffff\n\nexec foot\nbogus\nexit\n",
    )
    .unwrap();

    let report = session.run_file(&script).unwrap();
    let numbers: Vec<_> = report.iter().map(|l| l.line_number).collect();
    assert_eq!(numbers, vec![2, 4, 5, 6]);
    assert!(!report[2].is_success());
    assert_eq!(report[2].results[0].input.as_deref(), Some("bogus"));

    let state = session.state();
    assert!(state.colors.focused.is_some());
    assert_eq!(state.exec_queue.len(), 1);
    assert!(state.exit_requested);
}

#[test]
fn continue_policy_from_config_file() {
    let dir = TempDir::new().unwrap();
    let mut session = session_from_config(&dir, "on_error = \"continue\"\n");
    assert_eq!(session.executor().config().on_error, ErrorPolicy::Continue);

    let results = session.execute("bogus, exit");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].status, CommandStatus::Invalid);
    assert!(results[1].is_success());
}

#[test]
fn error_cap_from_config_file() {
    let dir = TempDir::new().unwrap();
    let mut session = session_from_config(&dir, "max_error_len = 1000\n");

    let color = format!("#{}", "a".repeat(400));
    let results = session.execute(&format!("client.background {}", color));
    let error = results[0].error.as_deref().unwrap();
    assert_eq!(error, format!("Invalid color definition {}", color));
    assert!(error.len() > wmctl::MAX_ERROR_LEN);
}

#[test]
fn invalid_config_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "max_error_len = 0\n").unwrap();
    assert!(InterpreterConfig::from_file(&path).is_err());
}
