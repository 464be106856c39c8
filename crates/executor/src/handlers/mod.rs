//! Builtin command handlers.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `exit` | `exit` |
//! | `exec` | `exec`, `exec_always` |
//! | `client` | `client.background`, `client.focused`, `client.focused_inactive`, `client.placeholder`, `client.unfocused`, `client.urgent` |
//!
//! Handlers receive the arguments after the command name and validate them
//! with [`checkarg`](wmctl_core::checkarg) before touching the state.

pub mod client;
pub mod exec;
pub mod exit;

use crate::registry::HandlerEntry;

/// Every builtin handler of the general table, unsorted.
pub fn builtin() -> Vec<HandlerEntry> {
    vec![
        HandlerEntry::new("client.background", client::cmd_client_background),
        HandlerEntry::new("client.focused", client::cmd_client_focused),
        HandlerEntry::new("client.focused_inactive", client::cmd_client_focused_inactive),
        HandlerEntry::new("client.placeholder", client::cmd_client_placeholder),
        HandlerEntry::new("client.unfocused", client::cmd_client_unfocused),
        HandlerEntry::new("client.urgent", client::cmd_client_urgent),
        HandlerEntry::new("exec", exec::cmd_exec),
        HandlerEntry::new("exec_always", exec::cmd_exec_always),
        HandlerEntry::new("exit", exit::cmd_exit),
    ]
}
