//! Completion item constructors, one per suggestion mode.

use indexmap::IndexMap;
use workbench_core::{CommandArg, CommandSet};

use super::{CompletionItem, CompletionKind, Field};
use crate::matcher::Candidate;

/// Id of the placeholder shown when the server has no indexes.
pub const NO_INDEXES_ID: &str = "no-indexes";

fn item(label: impl Into<String>, insert_text: impl Into<String>, kind: CompletionKind) -> CompletionItem {
    CompletionItem {
        label: label.into(),
        insert_text: insert_text.into(),
        kind,
        detail: String::new(),
        documentation: None,
        sort_text: String::new(),
        id: None,
    }
}

fn rank(position: usize) -> String {
    format!("{position:04}")
}

/// Every known command, in definition order.
pub fn command_items(commands: &CommandSet) -> Vec<CompletionItem> {
    commands
        .iter()
        .enumerate()
        .map(|(position, command)| CompletionItem {
            detail: command.syntax(),
            documentation: command.summary.clone(),
            sort_text: rank(position),
            ..item(&command.name, format!("{} ", command.name), CompletionKind::Command)
        })
        .collect()
}

/// Index names, quoted. When the query follows, its opening quote is inserted too.
pub fn index_items(indexes: &[String], is_next_query: bool) -> Vec<CompletionItem> {
    let suffix = if is_next_query { "'" } else { "" };
    indexes
        .iter()
        .enumerate()
        .map(|(position, index)| CompletionItem {
            detail: "Index".to_string(),
            sort_text: rank(position),
            ..item(index, format!("'{index}' {suffix}"), CompletionKind::Index)
        })
        .collect()
}

pub fn no_indexes_item() -> CompletionItem {
    CompletionItem {
        detail: "Create an index to get suggestions".to_string(),
        id: Some(NO_INDEXES_ID.to_string()),
        ..item("No indexes to display", "", CompletionKind::Placeholder)
    }
}

/// Attributes of the selected index. Inside a query an attribute is followed by `:`.
pub fn field_items(fields: &[Field], in_query: bool) -> Vec<CompletionItem> {
    let separator = if in_query { ':' } else { ' ' };
    fields
        .iter()
        .enumerate()
        .map(|(position, field)| CompletionItem {
            detail: field.kind.clone(),
            documentation: Some(field.identifier.clone()),
            sort_text: rank(position),
            ..item(
                &field.attribute,
                format!("{}{separator}", field.attribute),
                CompletionKind::Field,
            )
        })
        .collect()
}

/// Functions of an expression argument.
pub fn function_items(functions: &[CommandArg]) -> Vec<CompletionItem> {
    functions
        .iter()
        .enumerate()
        .map(|(position, function)| {
            let name = function.token.as_deref().unwrap_or(&function.name);
            let params: Vec<&str> = function.arguments.iter().map(|a| a.name.as_str()).collect();
            CompletionItem {
                detail: format!("{name}({})", params.join(", ")),
                documentation: function.summary.clone(),
                sort_text: rank(position),
                ..item(name, format!("{name}()"), CompletionKind::Function)
            }
        })
        .collect()
}

/// Keyword items from matcher levels, nearest level first.
///
/// A keyword offered on several levels keeps its nearest occurrence.
pub fn argument_items(levels: &[Vec<Candidate<'_>>]) -> Vec<CompletionItem> {
    let mut unique: IndexMap<String, CompletionItem> = IndexMap::new();

    for (level, candidates) in levels.iter().enumerate() {
        for (position, candidate) in candidates.iter().enumerate() {
            let keyword = candidate.keyword();
            unique.entry(keyword.to_uppercase()).or_insert_with(|| {
                let opened = opened_node(candidate);
                CompletionItem {
                    detail: opened.syntax(),
                    documentation: opened.summary.clone().or_else(|| candidate.arg.summary.clone()),
                    sort_text: format!("{level:02}{}", rank(position)),
                    ..item(keyword, format!("{keyword} "), CompletionKind::Keyword)
                }
            });
        }
    }

    unique.into_values().collect()
}

/// The first child of a keyword-less block stands for the whole block.
fn opened_node<'g>(candidate: &Candidate<'g>) -> &'g CommandArg {
    match candidate.parent {
        Some(parent)
            if parent.is_block()
                && parent.token.is_none()
                && parent
                    .arguments
                    .first()
                    .is_some_and(|first| std::ptr::eq(first, candidate.arg)) =>
        {
            parent
        }
        _ => candidate.arg,
    }
}
