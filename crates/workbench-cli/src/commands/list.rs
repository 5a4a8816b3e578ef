use serde::Serialize;
use workbench_core::{Colors, Command, CommandSet};

use super::loader::{CliError, Sources};
use super::{finish, to_json};

pub struct ListArgs {
    pub group: Option<String>,
    pub sources: Sources,
    pub json: bool,
    pub color: bool,
}

#[derive(Serialize)]
struct CommandEntry<'a> {
    name: &'a str,
    group: Option<&'a str>,
    summary: Option<&'a str>,
    syntax: String,
}

pub fn run(args: ListArgs) {
    finish(execute(&args));
}

fn execute(args: &ListArgs) -> Result<String, CliError> {
    let commands = args.sources.load_commands()?;
    let selected = select(&commands, args.group.as_deref());

    if args.json {
        let entries: Vec<CommandEntry<'_>> = selected
            .iter()
            .map(|command| CommandEntry {
                name: &command.name,
                group: command.group.as_deref(),
                summary: command.summary.as_deref(),
                syntax: command.syntax(),
            })
            .collect();
        return to_json(&entries);
    }
    Ok(render(&selected, Colors::new(args.color)))
}

/// Commands in specification order, optionally of one group (case-insensitive).
pub fn select<'c>(commands: &'c CommandSet, group: Option<&str>) -> Vec<&'c Command> {
    commands
        .iter()
        .filter(|command| match group {
            Some(group) => command
                .group
                .as_deref()
                .is_some_and(|g| g.eq_ignore_ascii_case(group)),
            None => true,
        })
        .collect()
}

/// One command per line: syntax, then the summary dimmed underneath.
pub fn render(commands: &[&Command], colors: Colors) -> String {
    let mut out = String::new();
    for command in commands {
        let syntax = command.syntax();
        let args = syntax.strip_prefix(command.name.as_str()).unwrap_or(&syntax);
        out.push_str(&colors.paint(colors.blue, &command.name));
        out.push_str(args);
        out.push('\n');
        if let Some(summary) = &command.summary {
            out.push_str("  ");
            out.push_str(&colors.paint(colors.dim, summary));
            out.push('\n');
        }
    }
    out
}
