//! Command results and their wire format.
//!
//! Every executed line produces exactly one [`CommandResult`] (or one per
//! command when results are aggregated). The externally visible encoding is a
//! JSON array of objects:
//!
//! ```text
//! [ { "success": <bool>, "input": "<string>"?, "error": "<string>"? } ]
//! ```
//!
//! Absence is signalled by omitting the field, never by `null`.

use serde::{Deserialize, Serialize};

/// Default maximum length of an error message in bytes.
///
/// The executor truncates longer messages on a character boundary, see
/// [`CommandResult::with_error_limit`].
pub const MAX_ERROR_LEN: usize = 255;

/// Error message reported when a command name has no handler.
pub const UNKNOWN_COMMAND: &str = "Unknown/invalid command";

/// Envelope emitted if a result cannot be encoded.
const FALLBACK_JSON: &str = r#"[{"success":false,"error":"Unable to encode command result"}]"#;

/// Outcome category of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandStatus {
    /// The command ran
    Success,
    /// The command was rejected (unknown name, bad arguments, bad values)
    Invalid,
    /// The command was accepted but could not be carried out
    Failure,
}

/// Structured outcome of a command or a whole line.
///
/// `input` is the command that produced the result; it is absent for the
/// synthetic success of a whole line. `error` is normally present only when
/// `status` is not `Success`, but this is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    /// Outcome category
    pub status: CommandStatus,
    /// Command that produced this result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Human-readable error message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandResult {
    /// Create a result.
    pub fn new(status: CommandStatus, input: Option<&str>, error: Option<String>) -> Self {
        CommandResult {
            status,
            input: input.map(str::to_string),
            error,
        }
    }

    /// Synthetic success with neither input nor error.
    pub fn success() -> Self {
        Self::new(CommandStatus::Success, None, None)
    }

    /// Invalid-command result for `input`.
    pub fn invalid(input: &str, error: impl Into<String>) -> Self {
        Self::new(CommandStatus::Invalid, Some(input), Some(error.into()))
    }

    /// Failure result for `input`.
    pub fn failure(input: &str, error: impl Into<String>) -> Self {
        Self::new(CommandStatus::Failure, Some(input), Some(error.into()))
    }

    /// Result for a command name that did not resolve to a handler.
    pub fn unknown_command(input: &str) -> Self {
        Self::invalid(input, UNKNOWN_COMMAND)
    }

    /// Check if the status is `Success`.
    pub fn is_success(&self) -> bool {
        self.status == CommandStatus::Success
    }

    /// Set `input` if it is not already present.
    pub fn or_input(mut self, input: &str) -> Self {
        if self.input.is_none() {
            self.input = Some(input.to_string());
        }
        self
    }

    /// Truncate the error message to at most `max` bytes.
    pub fn with_error_limit(mut self, max: usize) -> Self {
        self.error = self.error.map(|e| truncate_message(e, max));
        self
    }

    /// Encode this result as a one-element JSON array.
    pub fn to_json(&self) -> String {
        results_to_json(std::slice::from_ref(self))
    }
}

impl Default for CommandResult {
    fn default() -> Self {
        Self::success()
    }
}

#[derive(Serialize, Deserialize)]
struct WireResult<'a> {
    success: bool,
    #[serde(borrow, default, skip_serializing_if = "Option::is_none")]
    input: Option<std::borrow::Cow<'a, str>>,
    #[serde(borrow, default, skip_serializing_if = "Option::is_none")]
    error: Option<std::borrow::Cow<'a, str>>,
}

impl<'a> From<&'a CommandResult> for WireResult<'a> {
    fn from(result: &'a CommandResult) -> Self {
        WireResult {
            success: result.is_success(),
            input: result.input.as_deref().map(Into::into),
            error: result.error.as_deref().map(Into::into),
        }
    }
}

/// Encode results as a JSON array, one object per result.
///
/// Always returns a well-formed envelope: if encoding fails a fixed failure
/// object is returned instead.
pub fn results_to_json(results: &[CommandResult]) -> String {
    let wire: Vec<WireResult<'_>> = results.iter().map(WireResult::from).collect();
    serde_json::to_string(&wire).unwrap_or_else(|_| FALLBACK_JSON.to_string())
}

/// Decode a JSON envelope produced by [`results_to_json`].
///
/// The wire format only carries a success flag, so every failed entry decodes
/// as `Invalid`.
pub fn parse_json_results(json: &str) -> serde_json::Result<Vec<CommandResult>> {
    let wire: Vec<WireResult<'_>> = serde_json::from_str(json)?;
    Ok(wire
        .into_iter()
        .map(|w| CommandResult {
            status: if w.success {
                CommandStatus::Success
            } else {
                CommandStatus::Invalid
            },
            input: w.input.map(|s| s.into_owned()),
            error: w.error.map(|s| s.into_owned()),
        })
        .collect())
}

fn truncate_message(mut message: String, max: usize) -> String {
    if message.len() > max {
        let mut cut = max;
        while !message.is_char_boundary(cut) {
            cut -= 1;
        }
        message.truncate(cut);
    }
    message
}
