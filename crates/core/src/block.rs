//! Execution contexts
//!
//! A command is always interpreted inside some syntactic block: the top level
//! of a config file, an `input { }` block, a `bar { }` block and so on. The
//! block decides which handler table a command name is looked up in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Block kind a command is executed in.
///
/// `End` is the "no open block" marker used for top-level dispatch and shares
/// the general table.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum BlockContext {
    /// General configuration commands
    General,
    /// `input <identifier> { }` block
    Input,
    /// `bar { }` block
    Bar,
    /// `colors { }` block nested in a bar block
    BarColors,
    /// IPC command block
    Ipc,
    /// IPC event subscription block
    IpcEvents,
    /// No open block
    #[default]
    End,
}

impl BlockContext {
    /// Every context, in declaration order.
    pub const ALL: [BlockContext; 7] = [
        BlockContext::General,
        BlockContext::Input,
        BlockContext::Bar,
        BlockContext::BarColors,
        BlockContext::Ipc,
        BlockContext::IpcEvents,
        BlockContext::End,
    ];

    /// The context whose handler table this context uses.
    pub fn table_key(self) -> BlockContext {
        match self {
            BlockContext::End => BlockContext::General,
            other => other,
        }
    }

    /// Stable lowercase name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockContext::General => "general",
            BlockContext::Input => "input",
            BlockContext::Bar => "bar",
            BlockContext::BarColors => "bar-colors",
            BlockContext::Ipc => "ipc",
            BlockContext::IpcEvents => "ipc-events",
            BlockContext::End => "end",
        }
    }
}

impl fmt::Display for BlockContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
