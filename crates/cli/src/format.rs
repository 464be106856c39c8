//! Result → JSON/human string formatting.
//!
//! Two modes:
//! - **JSON** (default): the wire envelope, one array per executed line
//! - **Human** (`--human`): `ok` or `(error) <input>: <error>` per result

use wmctl_executor::{results_to_json, CommandResult, ScriptLine};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    Human,
}

/// Format the results of one line.
pub fn format_results(results: &[CommandResult], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => results_to_json(results),
        OutputMode::Human => results
            .iter()
            .map(format_human)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Format one script line, prefixed with its line number in human mode.
pub fn format_script_line(line: &ScriptLine, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => results_to_json(&line.results),
        OutputMode::Human => format!(
            "{}: {}",
            line.line_number,
            format_results(&line.results, mode)
        ),
    }
}

fn format_human(result: &CommandResult) -> String {
    if result.is_success() {
        return "ok".to_string();
    }
    match (&result.input, &result.error) {
        (Some(input), Some(error)) => format!("(error) {}: {}", input, error),
        (None, Some(error)) => format!("(error) {}", error),
        (Some(input), None) => format!("(error) {}", input),
        (None, None) => "(error)".to_string(),
    }
}
