//! Per-editor state: metadata snapshot, execution history and hint widget.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;
use workbench_core::CommandSet;

use crate::config::Config;
use crate::dsl::{DslArgument, dsl_argument};
use crate::locator::locate_query;
use crate::signature::{HelpWidget, SignatureHelp, signature_help};
use crate::suggestions::{INDEX_INFO_COMMANDS, Metadata, SuggestionBuilder, Suggestions};
use crate::tokenizer::Tokenizer;

/// What the editor should do after the cursor moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorAction {
    ShowSuggestions,
    TriggerParameterHints,
    HideSuggestions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CursorUpdate {
    pub suggestions: Suggestions,
    pub action: EditorAction,
    /// Embedded-language argument under the cursor, when no popup is shown.
    pub dsl: Option<DslArgument>,
}

/// State of one query editor.
#[derive(Debug, Clone)]
pub struct EditorSession {
    commands: Arc<CommandSet>,
    config: Config,
    tokenizer: Tokenizer,
    metadata: Metadata,
    history: Vec<String>,
    history_pos: usize,
    help: HelpWidget,
    selected_index: String,
}

impl EditorSession {
    pub fn new(commands: Arc<CommandSet>, config: Config) -> Self {
        Self {
            tokenizer: Tokenizer::new(config.composite()),
            commands,
            config,
            metadata: Metadata::default(),
            history: Vec::new(),
            history_pos: 0,
            help: HelpWidget::default(),
            selected_index: String::new(),
        }
    }

    pub fn commands(&self) -> &CommandSet {
        &self.commands
    }

    pub fn set_metadata(&mut self, metadata: Metadata) {
        self.metadata = metadata;
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Replace the executed commands, most recent first.
    pub fn set_history(&mut self, history: Vec<String>) {
        self.history = history;
        self.history_pos = 0;
    }

    pub fn on_change(&mut self, value: &str) {
        // Scrolled past the oldest entry and cleared the editor: start over.
        if value.is_empty() && self.history_pos >= self.history.len() {
            self.history_pos = 0;
        }
    }

    pub fn on_submit(&mut self) {
        self.history_pos = 0;
    }

    /// Next history entry to load into the editor. Only at the very start of the text.
    pub fn quick_history_access(&mut self, line: usize, column: usize) -> Option<String> {
        if line != 1 || column != 1 {
            return None;
        }
        while let Some(entry) = self.history.get(self.history_pos) {
            self.history_pos += 1;
            if !entry.is_empty() {
                return Some(entry.clone());
            }
        }
        None
    }

    pub fn on_cursor_move(&mut self, text: &str, line: usize, column: usize) -> CursorUpdate {
        let located = locate_query(text, line, column, &self.commands, &self.tokenizer);

        if column != 1
            && let Some(query) = &located
            && INDEX_INFO_COMMANDS.contains(&query.name.as_str())
        {
            self.selected_index = query.all_args.get(1).cloned().unwrap_or_default();
        }

        let suggestions = SuggestionBuilder::new(&self.commands, &self.config, &self.metadata)
            .build(located.as_ref(), column, &mut self.help);

        let action = if !suggestions.force_show {
            EditorAction::TriggerParameterHints
        } else if !suggestions.is_empty() {
            self.help.close();
            EditorAction::ShowSuggestions
        } else if suggestions.force_hide {
            EditorAction::HideSuggestions
        } else {
            EditorAction::TriggerParameterHints
        };

        let dsl = match action {
            EditorAction::ShowSuggestions => None,
            _ if !suggestions.force_show => None,
            _ => located.as_ref().and_then(dsl_argument),
        };
        debug!(?action, items = suggestions.items.len(), dsl = dsl.is_some(), "cursor moved");

        CursorUpdate {
            suggestions,
            action,
            dsl,
        }
    }

    pub fn help_widget(&self) -> &HelpWidget {
        &self.help
    }

    pub fn signature_help(&self) -> Option<SignatureHelp> {
        signature_help(&self.help)
    }

    /// Index argument of the last index command the cursor was in, as typed.
    pub fn selected_index(&self) -> &str {
        &self.selected_index
    }

    /// Unquoted name of the selected index, once it is fully typed.
    pub fn selected_index_name(&self) -> Option<&str> {
        is_index_complete(&self.selected_index).then(|| unquote(&self.selected_index))
    }
}

/// Whether an index argument is typed completely: non-empty, and closed when quoted.
pub fn is_index_complete(index: &str) -> bool {
    let mut chars = index.chars();
    match chars.next() {
        None => false,
        Some(quote @ ('"' | '\'')) => chars.next_back() == Some(quote),
        Some(_) => true,
    }
}

fn unquote(text: &str) -> &str {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first @ ('"' | '\'')), Some(last)) if first == last => chars.as_str(),
        _ => text,
    }
}
