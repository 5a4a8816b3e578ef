//! Finding the command the cursor is in inside multi-line editor text.
//!
//! ```text
//! 1  [timeout=100]
//! 2  FT.SEARCH idx
//! 3    "@title:hello"      <- cursor
//! 4    LIMIT 0 10
//! 5
//! 6  FT.INFO idx
//! ```
//!
//! Walking up from line 3 reaches `FT.SEARCH` on line 2; walking down stops
//! at the blank line 5. The query spans lines 2 to 4.

use tracing::trace;
use workbench_core::{Command, CommandSet};

use crate::tokenizer::{TokenizedQuery, Tokenizer};

/// A command located around the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedQuery<'c> {
    /// Command name as defined in the grammar.
    pub name: String,
    /// Lines of the command joined by `\n`.
    pub full_query: String,
    /// Char offset of the cursor within `full_query`.
    pub cursor_offset: usize,
    pub split: TokenizedQuery,
    pub all_args: Vec<String>,
    pub command: &'c Command,
    /// 1-based, inclusive.
    pub start_line: usize,
    pub end_line: usize,
}

impl LocatedQuery<'_> {
    /// Index of the argument under the cursor in `all_args`.
    pub fn cursor_arg_index(&self) -> Option<usize> {
        let before = self.split.before.len();
        let cursor = &self.split.cursor;
        if !self.split.after.is_empty() && cursor.arg_left_offset <= self.cursor_offset {
            Some(before)
        } else if cursor.prev_char.is_some() {
            before.checked_sub(1)
        } else {
            None
        }
    }
}

/// Locate the command at 1-based `line` and `column` of `text`.
///
/// Returns `None` when the cursor line is blank or a comment, or when no line
/// above it starts with a known command.
pub fn locate_query<'c>(
    text: &str,
    line: usize,
    column: usize,
    commands: &'c CommandSet,
    tokenizer: &Tokenizer,
) -> Option<LocatedQuery<'c>> {
    let lines: Vec<&str> = text.split('\n').collect();
    if line == 0 || line > lines.len() {
        return None;
    }

    let mut found = None;
    for number in (1..=line).rev() {
        let content = lines[number - 1];
        if is_separator(content) || (number == 1 && is_params_line(content)) {
            return None;
        }
        if let Some(command) = commands.match_prefix(content.trim_start()) {
            found = Some((number, command));
            break;
        }
    }
    let (start_line, command) = found?;

    let mut end_line = line;
    while let Some(&next) = lines.get(end_line) {
        if is_separator(next) || commands.match_prefix(next.trim_start()).is_some() {
            break;
        }
        end_line += 1;
    }

    let query_lines = &lines[start_line - 1..end_line];
    let full_query = query_lines.join("\n");

    let preceding: usize = query_lines[..line - start_line]
        .iter()
        .map(|content| content.chars().count() + 1)
        .sum();
    let line_length = lines[line - 1].chars().count();
    let cursor_offset = preceding + column.saturating_sub(1).min(line_length);

    let split = tokenizer.split(&full_query, cursor_offset);
    let all_args = split.all_args();
    trace!(
        command = command.name.as_str(),
        start_line,
        end_line,
        cursor_offset,
        "located query"
    );

    Some(LocatedQuery {
        name: command.name.clone(),
        full_query,
        cursor_offset,
        split,
        all_args,
        command,
        start_line,
        end_line,
    })
}

/// Blank lines and `//` comments end a query.
fn is_separator(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with("//")
}

/// `[param=value ...]` on the first line of the editor.
fn is_params_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with('[') && trimmed.contains(']')
}
