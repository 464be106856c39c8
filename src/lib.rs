//! wmctl - command-language interpreter for window manager control
//!
//! Configuration files and IPC control messages share one language: lines of
//! `;`/`,`-separated commands whose arguments may be quoted. This crate
//! re-exports the interpreter.
//!
//! # Quick Start
//!
//! ```ignore
//! use wmctl::{Session, results_to_json};
//!
//! let mut session = Session::default();
//! let results = session.execute("exec foot; client.background #1d2021");
//! println!("{}", results_to_json(&results));
//! ```
//!
//! # Architecture
//!
//! All lines go through the [`Executor`], which splits, tokenizes, resolves
//! and dispatches commands. [`Session`] adds the mutable state handlers act
//! on, plus script execution.

// Re-export the public API from wmctl-executor
pub use wmctl_executor::*;
