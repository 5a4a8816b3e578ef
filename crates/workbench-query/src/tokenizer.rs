//! Cursor-aware splitting of a command line into arguments.
//!
//! The scan keeps quoted text together (quotes included), honors backslash
//! escapes and sorts every argument to one side of the cursor:
//!
//! ```text
//! FT.SEARCH idx "hello wor|ld" LIMIT
//! before: [FT.SEARCH, idx]   after: ["hello world", LIMIT]
//! ```
//!
//! An argument that is still being typed (no closing delimiter yet) always
//! lands on the after side: it is the argument under the cursor.

use crate::config::DEFAULT_COMPOSITE_ARGS;

/// Quoting and neighborhood of the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorContext {
    /// The character left of the cursor is inside an open quote.
    pub in_quotes: bool,
    /// Non-whitespace character left of the cursor.
    pub prev_char: Option<char>,
    /// Non-whitespace character right of the cursor.
    pub next_char: Option<char>,
    /// Char span of the first argument at or after the cursor; `0..0` if there is none.
    pub arg_left_offset: usize,
    pub arg_right_offset: usize,
}

/// Arguments split at the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedQuery {
    pub before: Vec<String>,
    pub after: Vec<String>,
    pub cursor: CursorContext,
}

impl TokenizedQuery {
    /// The argument the cursor is on, if any.
    pub fn current_arg(&self) -> Option<&str> {
        self.after.first().map(String::as_str)
    }

    /// All arguments in order.
    pub fn all_args(&self) -> Vec<String> {
        self.before.iter().chain(&self.after).cloned().collect()
    }
}

/// Splits queries, merging keyword pairs from an allow-list.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Uppercase, single-space separated pairs.
    composite: Vec<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_COMPOSITE_ARGS)
    }
}

impl Tokenizer {
    pub fn new<S: AsRef<str>>(composite: &[S]) -> Self {
        Self {
            composite: composite
                .iter()
                .map(|pair| pair.as_ref().to_uppercase())
                .collect(),
        }
    }

    /// Whether `prev arg` is a known two-word keyword.
    pub fn is_composite(&self, arg: &str, prev: &str) -> bool {
        let joined = format!("{} {}", prev.to_uppercase(), arg.to_uppercase());
        self.composite.iter().any(|pair| *pair == joined)
    }

    /// Split `query` at char offset `cursor`. Offsets past the end clamp to the end.
    pub fn split(&self, query: &str, cursor: usize) -> TokenizedQuery {
        let chars: Vec<char> = query.chars().collect();
        let cursor = cursor.min(chars.len());
        let mut scan = Scan::new(self);

        for (i, &ch) in chars.iter().enumerate() {
            let is_after = i >= cursor;

            if scan.escape_next {
                scan.arg.push(ch);
                scan.escape_next = false;
            } else if ch == '\\' {
                scan.escape_next = true;
            } else if let Some(quote) = scan.quote {
                scan.arg.push(ch);
                if ch == quote {
                    scan.quote = None;
                    // The span covers both quotes.
                    let len = scan.arg.chars().count();
                    scan.flush(is_after, i + 1 - len, i + 1);
                }
            } else if ch == '"' || ch == '\'' {
                scan.quote = Some(ch);
                scan.arg.push(ch);
            } else if ch == ' ' || ch == '\n' {
                if !scan.arg.is_empty() {
                    let len = scan.arg.chars().count();
                    scan.flush(is_after, i - len, i);
                }
            } else {
                scan.arg.push(ch);
            }

            if i + 1 == cursor {
                scan.cursor_in_quotes = scan.quote.is_some();
            }
        }

        if !scan.arg.is_empty() {
            let len = scan.arg.chars().count();
            scan.offsets.get_or_insert((chars.len() - len, chars.len()));
            let arg = std::mem::take(&mut scan.arg);
            scan.push(true, arg);
        }

        let visible = |index: Option<usize>| {
            index
                .and_then(|i| chars.get(i).copied())
                .filter(|c| !c.is_whitespace())
        };
        let (arg_left_offset, arg_right_offset) = scan.offsets.unwrap_or_default();

        TokenizedQuery {
            before: scan.before,
            after: scan.after,
            cursor: CursorContext {
                in_quotes: scan.cursor_in_quotes,
                prev_char: visible(cursor.checked_sub(1)),
                next_char: visible(Some(cursor)),
                arg_left_offset,
                arg_right_offset,
            },
        }
    }
}

/// Split with the default composite allow-list.
pub fn split_query_by_args(query: &str, cursor: usize) -> TokenizedQuery {
    Tokenizer::default().split(query, cursor)
}

struct Scan<'t> {
    tokenizer: &'t Tokenizer,
    before: Vec<String>,
    after: Vec<String>,
    arg: String,
    quote: Option<char>,
    escape_next: bool,
    cursor_in_quotes: bool,
    /// Last pushed argument. Merges do not update it.
    last_arg: String,
    offsets: Option<(usize, usize)>,
}

impl<'t> Scan<'t> {
    fn new(tokenizer: &'t Tokenizer) -> Self {
        Self {
            tokenizer,
            before: Vec::new(),
            after: Vec::new(),
            arg: String::new(),
            quote: None,
            escape_next: false,
            cursor_in_quotes: false,
            last_arg: String::new(),
            offsets: None,
        }
    }

    /// Emit the accumulated argument spanning `left..right`.
    fn flush(&mut self, is_after: bool, left: usize, right: usize) {
        if is_after {
            self.offsets.get_or_insert((left, right));
        }

        let arg = std::mem::take(&mut self.arg);
        if self.tokenizer.is_composite(&arg, &self.last_arg) {
            self.merge(arg);
        } else {
            self.push(is_after, arg);
        }
    }

    fn push(&mut self, is_after: bool, arg: String) {
        self.last_arg.clone_from(&arg);
        if is_after {
            self.after.push(arg);
        } else {
            self.before.push(arg);
        }
    }

    /// Append to the most recent argument on whichever side holds it.
    fn merge(&mut self, arg: String) {
        let side = if self.after.is_empty() {
            &mut self.before
        } else {
            &mut self.after
        };
        match side.last_mut() {
            Some(last) => {
                last.push(' ');
                last.push_str(&arg);
            }
            None => side.push(arg),
        }
    }
}
