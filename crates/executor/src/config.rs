//! Interpreter configuration via `wmctl.toml`
//!
//! Every key is optional; a missing file section falls back to the defaults
//! below.

use serde::{Deserialize, Serialize};
use std::path::Path;
use wmctl_core::{BlockContext, Error, Result, MAX_ERROR_LEN};

/// Config file name looked up by the CLI.
pub const CONFIG_FILE_NAME: &str = "wmctl.toml";

/// What a line does after one of its commands fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Stop at the first failing command and report only that failure
    #[default]
    Abort,
    /// Run every command and report one result per command
    Continue,
}

/// Interpreter configuration loaded from `wmctl.toml`.
///
/// # Example
///
/// ```toml
/// on_error = "abort"
/// max_error_len = 255
/// context = "end"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Failure policy for multi-command lines.
    #[serde(default)]
    pub on_error: ErrorPolicy,
    /// Maximum error message length in bytes.
    #[serde(default = "default_max_error_len")]
    pub max_error_len: usize,
    /// Block context commands are looked up in.
    #[serde(default)]
    pub context: BlockContext,
}

fn default_max_error_len() -> usize {
    MAX_ERROR_LEN
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::default(),
            max_error_len: default_max_error_len(),
            context: BlockContext::default(),
        }
    }
}

impl InterpreterConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# wmctl interpreter configuration
#
# Failure policy for lines holding several commands:
#   "abort"    = stop at the first failing command, report only that failure
#   "continue" = run every command, report one result per command
on_error = "abort"

# Error messages longer than this many bytes are truncated.
max_error_len = 255

# Block context used to look up command names:
#   "end" (top level), "general", "input", "bar", "bar-colors", "ipc", "ipc-events"
context = "end"
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: InterpreterConfig = toml::from_str(content)
            .map_err(|e| Error::config(format!("failed to parse configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config { reason } => {
                Error::config(format!("{} ({})", reason, path.display()))
            }
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.max_error_len == 0 {
            return Err(Error::config("max_error_len must be greater than 0"));
        }
        Ok(())
    }
}
