//! `exec` and `exec_always` command handlers.
//!
//! Both receive the rest of the command verbatim (see
//! [`parse_argv`](crate::tokenize::parse_argv)) and queue it for an external
//! spawner. `exec` is skipped while a configuration is being reloaded.

use tracing::{debug, info};
use wmctl_core::{checkarg, CommandResult, ExpectedArgs};

use crate::state::{ExecRequest, ServerState};

/// Handle `exec`.
pub fn cmd_exec(state: &mut ServerState, args: &[String]) -> CommandResult {
    if let Some(error) = checkarg(args.len(), "exec", ExpectedArgs::MoreThan, 0) {
        return error;
    }
    if state.reloading {
        debug!(target: "wmctl::handlers", command = %args.join(" "), "Ignoring exec during reload");
        return CommandResult::success();
    }
    queue(state, args, false)
}

/// Handle `exec_always`.
pub fn cmd_exec_always(state: &mut ServerState, args: &[String]) -> CommandResult {
    if let Some(error) = checkarg(args.len(), "exec_always", ExpectedArgs::MoreThan, 0) {
        return error;
    }
    queue(state, args, true)
}

fn queue(state: &mut ServerState, args: &[String], always: bool) -> CommandResult {
    let command = args.join(" ");
    info!(target: "wmctl::handlers", %command, always, "Queued exec");
    state.exec_queue.push(ExecRequest { command, always });
    CommandResult::success()
}
