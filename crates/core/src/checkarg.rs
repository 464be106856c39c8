//! Argument-count validation for command handlers.
//!
//! Handlers call [`checkarg`] with the number of arguments they received
//! (not counting the command name) and the relation they require. The
//! dispatcher never calls it itself.

use serde::{Deserialize, Serialize};

use crate::CommandResult;

/// Relation an argument count must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedArgs {
    /// `argc > threshold`
    MoreThan,
    /// `argc >= threshold`
    AtLeast,
    /// `argc < threshold`
    LessThan,
    /// `argc == threshold`
    EqualTo,
}

impl ExpectedArgs {
    /// Check whether `argc` satisfies this relation against `threshold`.
    pub fn holds(self, argc: usize, threshold: usize) -> bool {
        match self {
            ExpectedArgs::MoreThan => argc > threshold,
            ExpectedArgs::AtLeast => argc >= threshold,
            ExpectedArgs::LessThan => argc < threshold,
            ExpectedArgs::EqualTo => argc == threshold,
        }
    }

    fn words(self) -> &'static str {
        match self {
            ExpectedArgs::MoreThan => "more than ",
            ExpectedArgs::AtLeast => "at least ",
            ExpectedArgs::LessThan => "less than ",
            ExpectedArgs::EqualTo => "",
        }
    }
}

/// Validate an argument count.
///
/// Returns `None` when the count is acceptable, or an `Invalid` result naming
/// the command, the relation, the threshold and the actual count.
pub fn checkarg(
    argc: usize,
    name: &str,
    expected: ExpectedArgs,
    threshold: usize,
) -> Option<CommandResult> {
    if expected.holds(argc, threshold) {
        return None;
    }
    let noun = if threshold == 1 { "argument" } else { "arguments" };
    Some(CommandResult::invalid(
        name,
        format!(
            "Invalid {} command (expected {}{} {}, got {})",
            name,
            expected.words(),
            threshold,
            noun,
            argc
        ),
    ))
}
