//! `client.*` colour command handlers.
//!
//! ```text
//! client.<class> <border> <background> <text> [<indicator> [<child_border>]]
//! client.background <color>
//! ```
//!
//! An omitted indicator keeps the class's previous indicator (or falls back
//! to the background colour), and an omitted child border uses the
//! background colour.

use tracing::debug;
use wmctl_core::{checkarg, Color, ColorError, CommandResult, ExpectedArgs};

use crate::state::{BorderColors, ClientColors, ServerState};

/// Handle `client.background`.
pub fn cmd_client_background(state: &mut ServerState, args: &[String]) -> CommandResult {
    const NAME: &str = "client.background";
    if let Some(error) = checkarg(args.len(), NAME, ExpectedArgs::EqualTo, 1) {
        return error;
    }
    match Color::parse(&args[0]) {
        Ok(color) => {
            state.colors.background = Some(color);
            CommandResult::success()
        }
        Err(e) => invalid_color(NAME, e),
    }
}

/// Handle `client.focused`.
pub fn cmd_client_focused(state: &mut ServerState, args: &[String]) -> CommandResult {
    set_class(state, "client.focused", args, |c| &mut c.focused)
}

/// Handle `client.focused_inactive`.
pub fn cmd_client_focused_inactive(state: &mut ServerState, args: &[String]) -> CommandResult {
    set_class(state, "client.focused_inactive", args, |c| {
        &mut c.focused_inactive
    })
}

/// Handle `client.placeholder`.
pub fn cmd_client_placeholder(state: &mut ServerState, args: &[String]) -> CommandResult {
    set_class(state, "client.placeholder", args, |c| &mut c.placeholder)
}

/// Handle `client.unfocused`.
pub fn cmd_client_unfocused(state: &mut ServerState, args: &[String]) -> CommandResult {
    set_class(state, "client.unfocused", args, |c| &mut c.unfocused)
}

/// Handle `client.urgent`.
pub fn cmd_client_urgent(state: &mut ServerState, args: &[String]) -> CommandResult {
    set_class(state, "client.urgent", args, |c| &mut c.urgent)
}

fn invalid_color(name: &str, error: ColorError) -> CommandResult {
    debug!(target: "wmctl::handlers", command = name, color = error.input(), "Rejected colour");
    CommandResult::invalid(name, error.to_string())
}

fn set_class(
    state: &mut ServerState,
    name: &str,
    args: &[String],
    class: fn(&mut ClientColors) -> &mut Option<BorderColors>,
) -> CommandResult {
    if let Some(error) = checkarg(args.len(), name, ExpectedArgs::AtLeast, 3) {
        return error;
    }
    if let Some(error) = checkarg(args.len(), name, ExpectedArgs::LessThan, 6) {
        return error;
    }

    // Nothing is stored unless every colour parses.
    let colors = match args
        .iter()
        .map(|arg| Color::parse(arg))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(colors) => colors,
        Err(e) => return invalid_color(name, e),
    };

    let slot = class(&mut state.colors);
    let background = colors[1];
    let indicator = colors
        .get(3)
        .copied()
        .or_else(|| slot.map(|previous| previous.indicator))
        .unwrap_or(background);
    *slot = Some(BorderColors {
        border: colors[0],
        background,
        text: colors[2],
        indicator,
        child_border: colors.get(4).copied().unwrap_or(background),
    });
    CommandResult::success()
}
