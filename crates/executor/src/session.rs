//! Stateful session.
//!
//! The [`Session`] wraps an [`Executor`] together with the [`ServerState`]
//! its handlers mutate, and applies the configured [`ErrorPolicy`]. It also
//! runs whole command scripts such as configuration files.
//!
//! # Usage
//!
//! ```ignore
//! use wmctl_executor::Session;
//!
//! let mut session = Session::default();
//! let results = session.execute("client.focused #4c7899 #285577 #ffffff; exit");
//! assert!(results.iter().all(|r| r.is_success()));
//! assert!(session.state().exit_requested);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};
use wmctl_core::{results_to_json, CommandResult, Result};

use crate::config::ErrorPolicy;
use crate::state::ServerState;
use crate::Executor;

/// Results of one executed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    /// 1-based line number in the script
    pub line_number: usize,
    /// The line as read, without its newline
    pub text: String,
    /// Results as reported by [`Session::execute`]
    pub results: Vec<CommandResult>,
}

impl ScriptLine {
    /// Check if every command on the line succeeded.
    pub fn is_success(&self) -> bool {
        self.results.iter().all(CommandResult::is_success)
    }
}

/// A stateful session over an [`Executor`].
#[derive(Debug, Clone)]
pub struct Session {
    executor: Executor,
    state: ServerState,
}

impl Session {
    /// Create a session with an empty state.
    pub fn new(executor: Executor) -> Self {
        Self {
            executor,
            state: ServerState::new(),
        }
    }

    /// Execute one line under the configured error policy.
    ///
    /// With [`ErrorPolicy::Abort`] the vector holds exactly one result; with
    /// [`ErrorPolicy::Continue`] it holds one result per non-empty command.
    pub fn execute(&mut self, line: &str) -> Vec<CommandResult> {
        match self.executor.config().on_error {
            ErrorPolicy::Abort => vec![self.executor.execute(&mut self.state, line)],
            ErrorPolicy::Continue => self.executor.execute_many(&mut self.state, line),
        }
    }

    /// Execute one line and encode its results in the wire format.
    pub fn execute_json(&mut self, line: &str) -> String {
        results_to_json(&self.execute(line))
    }

    /// Execute a script line by line.
    ///
    /// Blank lines and lines starting with `#` are skipped. A failing line
    /// does not stop the script.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading from `reader` fails.
    pub fn run_script<R: BufRead>(&mut self, reader: R) -> Result<Vec<ScriptLine>> {
        let mut report = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let results = self.execute(trimmed);
            let script_line = ScriptLine {
                line_number: index + 1,
                text: line.clone(),
                results,
            };
            if !script_line.is_success() {
                warn!(target: "wmctl::session", line = index + 1, text = %line, "Script line failed");
            }
            report.push(script_line);
        }
        debug!(target: "wmctl::session", lines = report.len(), "Script finished");
        Ok(report)
    }

    /// Execute a script file, see [`Session::run_script`].
    pub fn run_file(&mut self, path: &Path) -> Result<Vec<ScriptLine>> {
        let file = File::open(path)?;
        self.run_script(BufReader::new(file))
    }

    /// Run `f` with the state marked as reloading.
    pub fn reload<T>(&mut self, f: impl FnOnce(&mut Session) -> T) -> T {
        self.state.reloading = true;
        let out = f(self);
        self.state.reloading = false;
        out
    }

    /// The state mutated by executed commands.
    pub fn state(&self) -> &ServerState {
        &self.state
    }

    /// Mutable access to the state.
    pub fn state_mut(&mut self) -> &mut ServerState {
        &mut self.state
    }

    /// Get a reference to the underlying executor.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Executor::default())
    }
}
