//! # wmctl Executor
//!
//! Interpreter for the window manager command language used by configuration
//! files and IPC control messages.
//!
//! A line holds one or more commands:
//!
//! ```text
//! exec foot, exec waybar; client.focused #4c7899 #285577 #ffffff
//! ```
//!
//! It is split on `;` and `,`, each command is tokenized (honoring quotes),
//! the command name is resolved case-insensitively in a [`Registry`], and the
//! handler's outcome is reported as a [`CommandResult`] whose wire format is
//!
//! ```text
//! [ { "success": <bool>, "input": "<string>"?, "error": "<string>"? } ]
//! ```
//!
//! ## Quick Start
//!
//! ```text
//! use wmctl_executor::{Executor, ServerState};
//!
//! let executor = Executor::default();
//! let mut state = ServerState::new();
//!
//! let result = executor.execute(&mut state, "bogus");
//! assert_eq!(result.to_json(),
//!     r#"[{"success":false,"input":"bogus","error":"Unknown/invalid command"}]"#);
//! ```

#![warn(missing_docs)]

mod config;
mod executor;
pub mod handlers;
mod registry;
mod session;
pub mod split;
mod state;
pub mod tokenize;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use config::{ErrorPolicy, InterpreterConfig, CONFIG_FILE_NAME};
pub use executor::Executor;
pub use registry::{compare_names, Handler, HandlerEntry, Registry, RegistryBuilder};
pub use session::{ScriptLine, Session};
pub use state::{BorderColors, ClientColors, ExecRequest, ServerState};

// Re-export core types so users don't need wmctl-core directly
pub use wmctl_core::{
    checkarg, parse_json_results, results_to_json, BlockContext, Color, ColorError,
    CommandResult, CommandStatus, Error, ExpectedArgs, MAX_ERROR_LEN, UNKNOWN_COMMAND,
};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
