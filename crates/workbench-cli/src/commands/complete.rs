use std::sync::Arc;

use serde::Serialize;
use workbench_core::Colors;
use workbench_query::{
    CompletionKind, CursorUpdate, EditorAction, EditorSession, Field, Metadata, SignatureHelp,
};

use super::loader::{CliError, Sources, load_query};
use super::{finish, line_column, resolve_cursor, to_json};

pub struct CompleteArgs {
    pub query: String,
    pub cursor: Option<usize>,
    pub indexes: Vec<String>,
    /// `NAME` or `NAME:TYPE`.
    pub fields: Vec<String>,
    pub prefixes: Vec<String>,
    pub sources: Sources,
    pub json: bool,
    pub color: bool,
}

#[derive(Serialize)]
struct CompleteOutput<'a> {
    #[serde(flatten)]
    update: &'a CursorUpdate,
    signature_help: Option<SignatureHelp>,
    selected_index: &'a str,
}

pub fn run(args: CompleteArgs) {
    finish(execute(&args));
}

fn execute(args: &CompleteArgs) -> Result<String, CliError> {
    let text = load_query(&args.query)?;
    let commands = args.sources.load_commands()?;
    let mut config = args.sources.load_config()?;
    if !args.prefixes.is_empty() {
        config = config.suggestion_prefixes(args.prefixes.iter().cloned());
    }

    let mut session = EditorSession::new(Arc::new(commands), config);
    session.set_metadata(Metadata {
        indexes: args.indexes.clone(),
        fields: args.fields.iter().map(|field| parse_field(field)).collect(),
    });

    let (line, column) = line_column(&text, resolve_cursor(&text, args.cursor));
    let update = session.on_cursor_move(&text, line, column);
    let signature = session.signature_help();

    if args.json {
        return to_json(&CompleteOutput {
            update: &update,
            signature_help: signature,
            selected_index: session.selected_index(),
        });
    }
    Ok(render(&update, signature.as_ref(), Colors::new(args.color)))
}

/// `title:TEXT` names attribute `title` of type `TEXT`; the type defaults to `TEXT`.
pub fn parse_field(spec: &str) -> Field {
    let (name, kind) = spec.split_once(':').unwrap_or((spec, "TEXT"));
    Field {
        identifier: name.to_string(),
        attribute: name.to_string(),
        kind: kind.to_uppercase(),
    }
}

pub fn render(update: &CursorUpdate, signature: Option<&SignatureHelp>, colors: Colors) -> String {
    let mut out = String::new();
    let suggestions = &update.suggestions;

    push_row(&mut out, "action", action_name(update.action), colors);
    let flags = format!(
        "force_hide={} force_show={}",
        suggestions.force_hide, suggestions.force_show
    );
    push_row(&mut out, "flags", &flags, colors);

    let width = suggestions
        .items
        .iter()
        .map(|item| item.label.chars().count())
        .max()
        .unwrap_or(0);
    for item in &suggestions.items {
        let label = format!("{:<width$}", item.label);
        let kind = format!("{:<11}", kind_name(item.kind));
        let line = format!(
            "  {} {}{}",
            colors.paint(colors.green, &label),
            colors.paint(colors.dim, &kind),
            colors.paint(colors.dim, &item.detail),
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }

    if let Some(help) = signature {
        push_row(&mut out, "signature", &colors.paint(colors.blue, &help.label), colors);
        if let Some(param) = help.active_parameter.and_then(|i| help.parameters.get(i)) {
            push_row(&mut out, "active", &colors.paint(colors.yellow, param), colors);
        }
    }

    if let Some(dsl) = &update.dsl {
        let value = format!("{} {} (argument {})", dsl.dsl, dsl.argument, dsl.index);
        push_row(&mut out, "dsl", &value, colors);
    }
    out
}

fn push_row(out: &mut String, label: &str, value: &str, colors: Colors) {
    let label = format!("{label:<10}");
    out.push_str(&colors.paint(colors.dim, &label));
    out.push_str(value);
    out.push('\n');
}

fn action_name(action: EditorAction) -> &'static str {
    match action {
        EditorAction::ShowSuggestions => "show suggestions",
        EditorAction::TriggerParameterHints => "trigger parameter hints",
        EditorAction::HideSuggestions => "hide suggestions",
    }
}

fn kind_name(kind: CompletionKind) -> &'static str {
    match kind {
        CompletionKind::Command => "command",
        CompletionKind::Keyword => "keyword",
        CompletionKind::Index => "index",
        CompletionKind::Field => "field",
        CompletionKind::Function => "function",
        CompletionKind::Placeholder => "info",
    }
}
