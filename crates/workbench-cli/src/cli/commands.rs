//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Grammar and configuration sources shared by every subcommand.
fn with_grammar_args(cmd: Command) -> Command {
    cmd.arg(spec_arg())
        .arg(search_spec_arg())
        .arg(config_arg())
        .arg(color_arg())
        .arg(json_arg())
        .arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("workbench")
        .about("Cursor-aware completion for Redis-style commands")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(split_command())
        .subcommand(match_command())
        .subcommand(complete_command())
        .subcommand(commands_command())
}

/// Split a query into the arguments before and after the cursor.
pub fn split_command() -> Command {
    let cmd = Command::new("split")
        .about("Split a query into arguments around the cursor")
        .after_help(
            r#"EXAMPLES:
  workbench split 'FT.SEARCH idx "hello world"'
  workbench split 'FT.SEARCH idx "hello world"' -c 15
  echo 'GET key' | workbench split -"#,
        )
        .arg(query_arg())
        .arg(cursor_arg());

    with_grammar_args(cmd)
}

/// Show where the matcher stops for the arguments before the cursor.
pub fn match_command() -> Command {
    let cmd = Command::new("match")
        .about("Show the grammar node the cursor is at")
        .after_help(
            r#"EXAMPLES:
  workbench match 'FT.SEARCH idx "q" LIMIT '
  workbench match 'FT.AGGREGATE idx * GROUPBY 2 @a ' --json"#,
        )
        .arg(query_arg())
        .arg(cursor_arg());

    with_grammar_args(cmd)
}

/// Run the editor completion pipeline at the cursor.
pub fn complete_command() -> Command {
    let cmd = Command::new("complete")
        .about("Show completions and signature help at the cursor")
        .after_help(
            r#"EXAMPLES:
  workbench complete 'FT.SEARCH ' --index books --index movies
  workbench complete 'FT.SEARCH books "@' --field title:TEXT
  workbench complete 'JSON.GET ' --prefix FT. --prefix JSON."#,
        )
        .arg(query_arg())
        .arg(cursor_arg())
        .arg(index_arg())
        .arg(field_arg())
        .arg(prefix_arg());

    with_grammar_args(cmd)
}

/// List known commands.
pub fn commands_command() -> Command {
    let cmd = Command::new("commands")
        .about("List known commands with their syntax")
        .arg(group_arg());

    with_grammar_args(cmd)
}
