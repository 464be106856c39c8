//! Common test utilities for executor tests

use std::sync::Arc;
use wmctl::{
    BlockContext, CommandResult, ExecRequest, Executor, InterpreterConfig, Registry, ServerState,
    Session,
};

/// Create an executor over the shared builtin registry
pub fn create_executor() -> Executor {
    Executor::default()
}

/// Create a session with default configuration
#[allow(dead_code)]
pub fn create_session() -> Session {
    Session::default()
}

/// Handler that records its arguments in the exec queue
pub fn record(state: &mut ServerState, args: &[String]) -> CommandResult {
    state.exec_queue.push(ExecRequest {
        command: args.join("|"),
        always: false,
    });
    CommandResult::success()
}

/// Create an executor with an extra `record` command in the general table
#[allow(dead_code)]
pub fn create_recording_executor() -> Executor {
    let registry = Registry::builder()
        .with_builtins()
        .register(BlockContext::General, "record", record)
        .build()
        .unwrap();
    Executor::with_config(Arc::new(registry), InterpreterConfig::default())
}

/// Arguments recorded by `record`, in call order
#[allow(dead_code)]
pub fn recorded(state: &ServerState) -> Vec<String> {
    state.exec_queue.iter().map(|r| r.command.clone()).collect()
}
