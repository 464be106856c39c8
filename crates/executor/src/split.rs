//! Command-list splitting.
//!
//! A line is a `;`-separated sequence of command lists, and each command list
//! is a `,`-separated sequence of commands:
//!
//! ```text
//! exec foo, exit; client.background #000000
//! ```
//!
//! Separators inside single or double quotes, or preceded by a backslash, do
//! not split. Every produced piece has its leading whitespace stripped.

use std::iter::FusedIterator;

/// Separator between command lists.
pub const COMMAND_LIST_SEPARATOR: char = ';';

/// Separator between commands within a list.
pub const COMMAND_SEPARATOR: char = ',';

/// Lazy single-pass splitter over one separator.
///
/// Always yields at least one piece, so an empty line yields one empty
/// command.
#[derive(Debug, Clone)]
pub struct Split<'a> {
    rest: Option<&'a str>,
    separator: char,
}

impl<'a> Split<'a> {
    fn new(input: &'a str, separator: char) -> Self {
        Split {
            rest: Some(input),
            separator,
        }
    }
}

impl<'a> Iterator for Split<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        let piece = match find_unquoted(rest, self.separator) {
            Some(at) => {
                self.rest = Some(&rest[at + self.separator.len_utf8()..]);
                &rest[..at]
            }
            None => {
                self.rest = None;
                rest
            }
        };
        Some(piece.trim_start())
    }
}

impl FusedIterator for Split<'_> {}

/// Split a line into `;`-separated command lists.
pub fn command_lists(line: &str) -> Split<'_> {
    Split::new(line, COMMAND_LIST_SEPARATOR)
}

/// Split a command list into `,`-separated commands.
pub fn commands(list: &str) -> Split<'_> {
    Split::new(list, COMMAND_SEPARATOR)
}

/// Every command of a line, in order, empty ones included.
pub fn split_line(line: &str) -> impl Iterator<Item = &str> {
    command_lists(line).flat_map(commands)
}

/// Byte offset of the first `separator` outside quotes and escapes.
fn find_unquoted(input: &str, separator: char) -> Option<usize> {
    let mut quote = None::<char>;
    let mut escaped = false;

    for (at, ch) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match quote {
            _ if ch == '\\' => escaped = true,
            Some(active) if ch == active => quote = None,
            Some(_) => {}
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            None if ch == separator => return Some(at),
            None => {}
        }
    }
    None
}
