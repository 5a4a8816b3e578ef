use serde::Serialize;
use workbench_core::Colors;
use workbench_query::{FoundArgument, Tokenizer, find_current_argument};

use super::loader::{CliError, Sources, load_query};
use super::{finish, resolve_cursor, to_json};

pub struct MatchArgs {
    pub query: String,
    pub cursor: Option<usize>,
    pub sources: Sources,
    pub json: bool,
    pub color: bool,
}

#[derive(Serialize)]
struct MatchOutput {
    parent: String,
    stop: Option<String>,
    is_complete: bool,
    is_blocked: bool,
    /// Insertable keywords, nearest level first.
    append: Vec<Vec<String>>,
}

impl From<&FoundArgument<'_>> for MatchOutput {
    fn from(found: &FoundArgument<'_>) -> Self {
        Self {
            parent: found.parent.name.clone(),
            stop: found.stop_arg.map(|arg| arg.name.clone()),
            is_complete: found.is_complete,
            is_blocked: found.is_blocked,
            append: found
                .append
                .iter()
                .map(|level| level.iter().map(|c| c.keyword().to_string()).collect())
                .collect(),
        }
    }
}

pub fn run(args: MatchArgs) {
    finish(execute(&args));
}

fn execute(args: &MatchArgs) -> Result<String, CliError> {
    let query = load_query(&args.query)?;
    let commands = args.sources.load_commands()?;
    let config = args.sources.load_config()?;
    let cursor = resolve_cursor(&query, args.cursor);
    let split = Tokenizer::new(config.composite()).split(&query, cursor);

    let found = find_current_argument(commands.trees(), &split.before);
    if args.json {
        return to_json(&found.as_ref().map(MatchOutput::from));
    }
    Ok(render(found.as_ref(), Colors::new(args.color)))
}

pub fn render(found: Option<&FoundArgument<'_>>, colors: Colors) -> String {
    let Some(found) = found else {
        return format!("{}\n", colors.paint(colors.dim, "no command matched"));
    };

    let mut out = String::new();
    let stop = found.stop_arg.map_or("-", |arg| arg.name.as_str());
    let state = match (found.is_blocked, found.is_complete) {
        (true, _) => "blocked",
        (false, true) => "complete",
        (false, false) => "incomplete",
    };

    push_row(&mut out, "parent", &colors.paint(colors.blue, &found.parent.name), colors);
    push_row(&mut out, "stop", &colors.paint(colors.yellow, stop), colors);
    push_row(&mut out, "state", state, colors);

    for (level, candidates) in found.append.iter().enumerate() {
        let labels: Vec<String> = candidates
            .iter()
            .map(|candidate| colors.paint(colors.green, candidate.keyword()))
            .collect();
        push_row(&mut out, &format!("level {level}"), &labels.join(" "), colors);
    }
    out
}

fn push_row(out: &mut String, label: &str, value: &str, colors: Colors) {
    let label = format!("{label:<8}");
    out.push_str(&colors.paint(colors.dim, &label));
    out.push_str(value);
    out.push('\n');
}
