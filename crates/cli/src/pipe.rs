//! Pipe and script modes.
//!
//! Pipe mode: read lines from stdin, execute each, print its results.
//! Script mode: execute a command file and print the results of every line.

use std::io::{self, BufRead};
use std::path::Path;

use wmctl_executor::Session;

use crate::format::{format_results, format_script_line, OutputMode};

/// Run in pipe mode. Returns the process exit code.
///
/// Stops early once a command requests exit.
pub fn run_pipe(session: &mut Session, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("(error) failed to read stdin: {}", e);
                return 1;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let results = session.execute(trimmed);
        if !results.iter().all(|r| r.is_success()) {
            exit_code = 1;
        }
        println!("{}", format_results(&results, mode));

        if session.state().exit_requested {
            break;
        }
    }

    exit_code
}

/// Run a command file. Returns the process exit code.
pub fn run_script(session: &mut Session, path: &Path, mode: OutputMode) -> i32 {
    let report = match session.run_file(path) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("(error) {}: {}", path.display(), e);
            return 1;
        }
    };

    let mut exit_code = 0;
    for line in &report {
        if !line.is_success() {
            exit_code = 1;
        }
        println!("{}", format_script_line(line, mode));
    }
    exit_code
}
