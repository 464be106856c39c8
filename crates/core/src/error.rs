//! Error types for wmctl
//!
//! These errors never cross the dispatcher boundary as panics: the executor
//! turns parse errors into `Invalid` command results, and only configuration
//! and I/O problems are surfaced to callers as `Err`.

use std::io;
use thiserror::Error;

use crate::{BlockContext, ColorError};

/// Result type alias for wmctl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the interpreter
#[derive(Debug, Error)]
pub enum Error {
    /// A quoted region was opened but never closed
    #[error("unterminated {quote} quote in '{input}'")]
    UnterminatedQuote {
        /// The opening quote character
        quote: char,
        /// The command text being tokenized
        input: String,
    },

    /// A backslash was the last character of the command
    #[error("dangling escape at end of '{input}'")]
    DanglingEscape {
        /// The command text being tokenized
        input: String,
    },

    /// Two handlers with the same (case-insensitive) name in one table
    #[error("handler '{name}' registered twice in {context} block")]
    DuplicateHandler {
        /// Conflicting handler name
        name: String,
        /// Table the conflict was found in
        context: BlockContext,
    },

    /// Malformed colour literal
    #[error(transparent)]
    InvalidColor(#[from] ColorError),

    /// Invalid or unreadable interpreter configuration
    #[error("configuration error: {reason}")]
    Config {
        /// Human-readable reason
        reason: String,
    },

    /// I/O error while reading scripts or configuration
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }

    /// Check if this error came from tokenizing a command
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::UnterminatedQuote { .. } | Error::DanglingEscape { .. }
        )
    }
}
