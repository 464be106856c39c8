//! The Executor - single entry point for command lines.
//!
//! The Executor is a stateless dispatcher: it splits a line into commands,
//! tokenizes each one, resolves the command name in its registry and invokes
//! the handler against a caller-owned [`ServerState`].

use std::sync::Arc;

use tracing::{debug, info, warn};
use wmctl_core::{BlockContext, CommandResult};

use crate::config::InterpreterConfig;
use crate::registry::Registry;
use crate::split::split_line;
use crate::state::ServerState;
use crate::tokenize::parse_argv;

/// The command executor.
///
/// Holds a read-only [`Registry`] and configuration, and keeps no state of
/// its own between calls, so executing the same line twice against equal
/// states yields equal results.
///
/// # Example
///
/// ```ignore
/// use wmctl_executor::{Executor, ServerState};
///
/// let executor = Executor::default();
/// let mut state = ServerState::new();
///
/// let result = executor.execute(&mut state, "exec foot; exit");
/// assert!(result.is_success());
/// println!("{}", result.to_json());
/// ```
#[derive(Debug, Clone)]
pub struct Executor {
    registry: Arc<Registry>,
    config: InterpreterConfig,
}

impl Executor {
    /// Create an executor over `registry` with default configuration.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self::with_config(registry, InterpreterConfig::default())
    }

    /// Create an executor over `registry` with `config`.
    pub fn with_config(registry: Arc<Registry>, config: InterpreterConfig) -> Self {
        Self { registry, config }
    }

    /// The registry commands are resolved in.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The active configuration.
    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// The block context command names are looked up in.
    pub fn context(&self) -> BlockContext {
        self.config.context
    }

    /// Execute every command of `line`, stopping at the first failure.
    ///
    /// Returns the failing command's result, or a bare success when every
    /// command ran. Results of commands that ran before the failure are not
    /// reported.
    pub fn execute(&self, state: &mut ServerState, line: &str) -> CommandResult {
        let mut results = None;

        for cmd in split_line(line) {
            if cmd.trim_end().is_empty() {
                info!(target: "wmctl::executor", "Ignoring empty command.");
                continue;
            }
            let result = self.execute_command(state, cmd);
            if !result.is_success() {
                results = Some(result);
                break;
            }
        }

        results
            .unwrap_or_else(CommandResult::success)
            .with_error_limit(self.config.max_error_len)
    }

    /// Execute every command of `line` and report each one.
    ///
    /// A failing command does not stop the rest. Each result names the command
    /// that produced it; empty commands produce no result.
    pub fn execute_many(&self, state: &mut ServerState, line: &str) -> Vec<CommandResult> {
        split_line(line)
            .filter(|cmd| {
                let empty = cmd.trim_end().is_empty();
                if empty {
                    info!(target: "wmctl::executor", "Ignoring empty command.");
                }
                !empty
            })
            .map(|cmd| {
                self.execute_command(state, cmd)
                    .with_error_limit(self.config.max_error_len)
            })
            .collect()
    }

    /// Execute a single, already split, non-empty command.
    ///
    /// `cmd` has its leading whitespace stripped but keeps any trailing
    /// whitespace, which is reported as part of `input`.
    fn execute_command(&self, state: &mut ServerState, cmd: &str) -> CommandResult {
        info!(target: "wmctl::executor", command = cmd, "Handling command");

        let argv = match parse_argv(cmd) {
            Ok(argv) => argv,
            Err(e) => {
                warn!(target: "wmctl::executor", command = cmd, error = %e, "Failed to parse command");
                return CommandResult::invalid(cmd, e.to_string());
            }
        };
        let Some((name, args)) = argv.split_first() else {
            return CommandResult::success();
        };

        let Some(entry) = self.registry.lookup(name, self.config.context) else {
            warn!(target: "wmctl::executor", command = cmd, "Unknown/invalid command");
            return CommandResult::unknown_command(cmd);
        };

        let result = (entry.handler)(state, args).or_input(name);
        debug!(
            target: "wmctl::executor",
            command = %entry.name,
            status = ?result.status,
            "Handler finished"
        );
        result
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(Registry::shared())
    }
}
