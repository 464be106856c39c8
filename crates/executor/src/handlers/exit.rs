//! `exit` command handler.

use tracing::info;
use wmctl_core::{checkarg, CommandResult, ExpectedArgs};

use crate::state::ServerState;

/// Handle `exit`: request that the server shut down.
pub fn cmd_exit(state: &mut ServerState, args: &[String]) -> CommandResult {
    if let Some(error) = checkarg(args.len(), "exit", ExpectedArgs::EqualTo, 0) {
        return error;
    }
    info!(target: "wmctl::handlers", "Exit requested");
    state.exit_requested = true;
    CommandResult::success()
}
