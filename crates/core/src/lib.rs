//! Core types for wmctl
//!
//! This crate defines the foundational types shared by the interpreter:
//! - CommandResult: structured outcome of a command or a whole line, with its wire format
//! - ExpectedArgs / checkarg: argument-count contract used by handlers
//! - Color: validated `#RRGGBBAA` colour value
//! - BlockContext: execution context selecting a handler table
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod block;
pub mod checkarg;
pub mod color;
pub mod error;
pub mod result;

pub use block::BlockContext;
pub use checkarg::{checkarg, ExpectedArgs};
pub use color::{Color, ColorError};
pub use error::{Error, Result};
pub use result::{
    parse_json_results, results_to_json, CommandResult, CommandStatus, MAX_ERROR_LEN,
    UNKNOWN_COMMAND,
};
