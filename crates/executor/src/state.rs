//! State mutated by command handlers.
//!
//! Handlers do not act on a compositor directly; they record what was
//! requested here, and the embedder applies it.

use serde::{Deserialize, Serialize};
use wmctl_core::Color;

/// A command line queued by `exec` or `exec_always`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecRequest {
    /// Shell command line, quoting intact
    pub command: String,
    /// Whether it was queued by `exec_always`
    pub always: bool,
}

/// Colours for one window class (focused, unfocused, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderColors {
    /// Title bar border
    pub border: Color,
    /// Title bar background
    pub background: Color,
    /// Title text
    pub text: Color,
    /// Split indicator
    pub indicator: Color,
    /// Window border
    pub child_border: Color,
}

/// Window decoration colours set by the `client.*` commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientColors {
    /// `client.focused`
    pub focused: Option<BorderColors>,
    /// `client.focused_inactive`
    pub focused_inactive: Option<BorderColors>,
    /// `client.unfocused`
    pub unfocused: Option<BorderColors>,
    /// `client.urgent`
    pub urgent: Option<BorderColors>,
    /// `client.placeholder`
    pub placeholder: Option<BorderColors>,
    /// `client.background`
    pub background: Option<Color>,
}

/// Effects requested by executed commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerState {
    /// Set by `exit`
    pub exit_requested: bool,
    /// True while a configuration is being reloaded; `exec` is skipped then
    pub reloading: bool,
    /// Commands queued for spawning, in order
    pub exec_queue: Vec<ExecRequest>,
    /// Decoration colours
    pub colors: ClientColors,
}

impl ServerState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the queued exec requests, leaving the queue empty.
    pub fn drain_exec_queue(&mut self) -> Vec<ExecRequest> {
        std::mem::take(&mut self.exec_queue)
    }
}
