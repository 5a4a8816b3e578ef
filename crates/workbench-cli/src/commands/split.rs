use serde::Serialize;
use workbench_core::Colors;
use workbench_query::{TokenizedQuery, Tokenizer};

use super::loader::{CliError, Sources, load_query};
use super::{finish, resolve_cursor, to_json};

pub struct SplitArgs {
    pub query: String,
    pub cursor: Option<usize>,
    pub sources: Sources,
    pub json: bool,
    pub color: bool,
}

#[derive(Serialize)]
struct SplitOutput<'a> {
    before: &'a [String],
    after: &'a [String],
    current: Option<&'a str>,
    in_quotes: bool,
    prev_char: Option<char>,
    next_char: Option<char>,
    arg_left_offset: usize,
    arg_right_offset: usize,
}

pub fn run(args: SplitArgs) {
    finish(execute(&args));
}

fn execute(args: &SplitArgs) -> Result<String, CliError> {
    let query = load_query(&args.query)?;
    let config = args.sources.load_config()?;
    let cursor = resolve_cursor(&query, args.cursor);
    let split = Tokenizer::new(config.composite()).split(&query, cursor);

    if args.json {
        let cursor = &split.cursor;
        return to_json(&SplitOutput {
            before: &split.before,
            after: &split.after,
            current: split.current_arg(),
            in_quotes: cursor.in_quotes,
            prev_char: cursor.prev_char,
            next_char: cursor.next_char,
            arg_left_offset: cursor.arg_left_offset,
            arg_right_offset: cursor.arg_right_offset,
        });
    }
    Ok(render(&split, Colors::new(args.color)))
}

/// Arguments on each side of the cursor, one per line, then the cursor context.
pub fn render(split: &TokenizedQuery, colors: Colors) -> String {
    let mut out = String::new();

    out.push_str(&colors.paint(colors.dim, "before:"));
    out.push('\n');
    push_args(&mut out, &split.before, |_| colors.green, colors);

    out.push_str(&colors.paint(colors.dim, "after:"));
    out.push('\n');
    // The first argument after the cursor is the one being typed.
    push_args(
        &mut out,
        &split.after,
        |i| if i == 0 { colors.yellow } else { colors.green },
        colors,
    );

    let cursor = &split.cursor;
    let context = format!(
        "cursor: prev={} next={} in_quotes={} span={}..{}",
        show_char(cursor.prev_char),
        show_char(cursor.next_char),
        cursor.in_quotes,
        cursor.arg_left_offset,
        cursor.arg_right_offset,
    );
    out.push_str(&colors.paint(colors.dim, &context));
    out.push('\n');
    out
}

fn push_args(
    out: &mut String,
    args: &[String],
    color: impl Fn(usize) -> &'static str,
    colors: Colors,
) {
    if args.is_empty() {
        out.push_str("  ");
        out.push_str(&colors.paint(colors.dim, "(none)"));
        out.push('\n');
    }
    for (i, arg) in args.iter().enumerate() {
        out.push_str("  ");
        out.push_str(&colors.paint(color(i), arg));
        out.push('\n');
    }
}

fn show_char(ch: Option<char>) -> String {
    ch.map_or_else(|| "none".to_string(), |ch| format!("{ch:?}"))
}
