//! Executor Layer Tests
//!
//! Tests for the wmctl interpreter through its public API:
//! - Executor - stateless line dispatch
//! - Session - error policies and scripts
//! - Registry - per-context handler tables
//! - CommandResult - wire format
//! - Config and script files

mod common;

mod command_dispatch;
mod error_handling;
mod registry_contexts;
mod serialization;
mod session_scripts;
