//! wmctl: execute window manager commands from the command line.
//!
//! Three modes:
//! - **Command mode**: `wmctl [flags] COMMAND...`: words are joined into one line
//! - **Script mode**: `wmctl --script FILE`: execute a command file
//! - **Pipe mode**: `echo "exec foot; exit" | wmctl`: line-by-line from stdin
//!
//! Exit code: 0 when every command succeeded, 1 otherwise, 2 on a
//! configuration error.

mod commands;
mod format;
mod pipe;

use std::path::Path;
use std::process;

use tracing_subscriber::EnvFilter;
use wmctl_executor::{
    ErrorPolicy, Executor, InterpreterConfig, Registry, Session, CONFIG_FILE_NAME,
};

use commands::build_cli;
use format::{format_results, OutputMode};

fn main() {
    let matches = build_cli().get_matches();

    init_tracing(matches.get_count("verbose"));

    let output_mode = if matches.get_flag("human") {
        OutputMode::Human
    } else {
        OutputMode::Json
    };

    let mut config = match load_config(matches.get_one::<String>("config").map(Path::new)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };
    if matches.get_flag("continue") {
        config.on_error = ErrorPolicy::Continue;
    }

    let mut session = Session::new(Executor::with_config(Registry::shared(), config));

    let exit_code = if let Some(words) = matches.get_many::<String>("command") {
        let line = words.map(String::as_str).collect::<Vec<_>>().join(" ");
        let results = session.execute(&line);
        println!("{}", format_results(&results, output_mode));
        i32::from(!results.iter().all(|r| r.is_success()))
    } else if let Some(script) = matches.get_one::<String>("script") {
        pipe::run_script(&mut session, Path::new(script), output_mode)
    } else {
        pipe::run_pipe(&mut session, output_mode)
    };

    tracing::debug!(target: "wmctl::cli", exit_code, "Done");
    process::exit(exit_code);
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(explicit: Option<&Path>) -> wmctl_executor::Result<InterpreterConfig> {
    if let Some(path) = explicit {
        return InterpreterConfig::from_file(path);
    }
    let local = Path::new(CONFIG_FILE_NAME);
    if local.exists() {
        InterpreterConfig::from_file(local)
    } else {
        Ok(InterpreterConfig::default())
    }
}
