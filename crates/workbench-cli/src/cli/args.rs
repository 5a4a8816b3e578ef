//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so one definition serves every
//! subcommand that takes it.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Query text (positional). `-` reads stdin.
pub fn query_arg() -> Arg {
    Arg::new("query")
        .value_name("QUERY")
        .required(true)
        .help("Query text, or '-' to read it from stdin")
}

/// Cursor position as a char offset into the query (-c/--cursor).
pub fn cursor_arg() -> Arg {
    Arg::new("cursor")
        .short('c')
        .long("cursor")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Cursor offset in characters (defaults to the end of the query)")
}

/// Known index name (--index, repeatable).
pub fn index_arg() -> Arg {
    Arg::new("index")
        .long("index")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Index name to offer as completion")
}

/// Field of the selected index (--field, repeatable).
pub fn field_arg() -> Arg {
    Arg::new("field")
        .long("field")
        .value_name("NAME[:TYPE]")
        .action(ArgAction::Append)
        .help("Index field to offer after the field symbol")
}

/// Command name prefix that receives suggestions (--prefix, repeatable).
pub fn prefix_arg() -> Arg {
    Arg::new("prefix")
        .long("prefix")
        .value_name("PREFIX")
        .action(ArgAction::Append)
        .help("Command prefix that receives argument suggestions (overrides config)")
}

/// Command group filter (-g/--group).
pub fn group_arg() -> Arg {
    Arg::new("group")
        .short('g')
        .long("group")
        .value_name("GROUP")
        .help("Only list commands of this group")
}

/// Main command specification (--spec).
pub fn spec_arg() -> Arg {
    Arg::new("spec")
        .long("spec")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Command specification JSON (replaces the bundled one)")
}

/// Search command specification (--search-spec).
pub fn search_spec_arg() -> Arg {
    Arg::new("search_spec")
        .long("search-spec")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Search command specification JSON (replaces the bundled one)")
}

/// Engine configuration file (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Configuration JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of text")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Log matcher decisions to stderr (-vv for more)")
}
