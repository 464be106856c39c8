//! Clap command definition.

use clap::{Arg, ArgAction, Command};

/// Build the CLI command.
pub fn build_cli() -> Command {
    Command::new("wmctl")
        .about("Execute window manager commands and report JSON results")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Interpreter configuration (default: ./wmctl.toml if present)"),
        )
        .arg(
            Arg::new("script")
                .long("script")
                .short('s')
                .value_name("FILE")
                .help("Execute a command file line by line")
                .conflicts_with("command"),
        )
        .arg(
            Arg::new("continue")
                .long("continue")
                .help("Run every command of a line even after one fails")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("human")
                .long("human")
                .help("Human-readable output instead of JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (repeatable)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("command")
                .help("Command line to execute; read from stdin when omitted")
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
}
