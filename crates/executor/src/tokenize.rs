//! Argument tokenizing and quote stripping.
//!
//! Tokens are split on whitespace. Single- and double-quoted regions are
//! atomic, and a backslash escapes the next character. Tokenizing keeps the
//! quotes and backslashes in the token text; [`strip_quotes`] removes them
//! afterwards for commands that want plain values.
//!
//! `exec` and `exec_always` are never split beyond their name: the rest of the
//! command is handed over verbatim as a single argument so that a shell can
//! interpret its own quoting. The remainder must still be well quoted, since
//! an unterminated quote would otherwise have swallowed the commands after it.

use wmctl_core::{Error, Result};

/// Commands whose arguments are passed through untouched.
const PASSTHROUGH_COMMANDS: [&str; 2] = ["exec", "exec_always"];

/// Check if `name` passes its arguments through untouched.
pub fn is_passthrough(name: &str) -> bool {
    PASSTHROUGH_COMMANDS
        .iter()
        .any(|cmd| cmd.eq_ignore_ascii_case(name))
}

/// Split a command into whitespace-separated tokens, honoring quotes.
///
/// # Errors
///
/// Fails on an unterminated quote or a trailing backslash.
pub fn tokenize(cmd: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = cmd.chars();
    let mut quote = None::<char>;

    while let Some(ch) = chars.next() {
        match quote {
            _ if ch == '\\' => {
                let Some(next) = chars.next() else {
                    return Err(Error::DanglingEscape {
                        input: cmd.to_string(),
                    });
                };
                current.push(ch);
                current.push(next);
            }
            Some(active) if ch == active => {
                current.push(ch);
                quote = None;
            }
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                current.push(ch);
                quote = Some(ch);
            }
            None if ch.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            None => current.push(ch),
        }
    }

    if let Some(quote) = quote {
        return Err(Error::UnterminatedQuote {
            quote,
            input: cmd.to_string(),
        });
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    Ok(tokens)
}

/// Remove one layer of quoting from a token.
///
/// Quote characters that open or close a region are dropped, quotes of the
/// other kind inside a region are kept, and `\x` becomes `x`.
pub fn strip_quotes(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars();
    let mut quote = None::<char>;

    while let Some(ch) = chars.next() {
        match quote {
            _ if ch == '\\' => {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            Some(active) if ch == active => quote = None,
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            _ => out.push(ch),
        }
    }
    out
}

/// Build the argument vector for one command.
///
/// `argv[0]` is the command name. Arguments that begin with a quote are
/// stripped with [`strip_quotes`]; passthrough commands get the remainder of
/// the command as a single verbatim argument instead.
///
/// # Errors
///
/// Fails on an unterminated quote or a trailing backslash, passthrough
/// commands included.
pub fn parse_argv(cmd: &str) -> Result<Vec<String>> {
    let cmd = cmd.trim();
    let (name, rest) = cmd
        .split_once(char::is_whitespace)
        .unwrap_or((cmd, ""));

    if is_passthrough(name) {
        tokenize(cmd)?;
        let mut argv = vec![name.to_string()];
        let rest = rest.trim();
        if !rest.is_empty() {
            argv.push(rest.to_string());
        }
        return Ok(argv);
    }

    let mut argv = tokenize(cmd)?;
    for arg in argv.iter_mut().skip(1) {
        if arg.starts_with('"') || arg.starts_with('\'') {
            *arg = strip_quotes(arg);
        }
    }
    Ok(argv)
}
