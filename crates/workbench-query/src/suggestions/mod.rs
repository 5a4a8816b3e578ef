//! Completion items for the argument under the cursor.
//!
//! [`SuggestionBuilder`] picks one mode per cursor position: command names,
//! field names, index names, expression functions or grammar keywords. Each
//! outcome carries `force_show` and `force_hide` hints for the editor.

mod builder;
mod items;

#[cfg(test)]
mod builder_tests;

use serde::{Deserialize, Serialize};

pub use builder::{INDEX_INFO_COMMANDS, SuggestionBuilder};
pub use items::{
    NO_INDEXES_ID, argument_items, command_items, field_items, function_items, index_items,
    no_indexes_item,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionKind {
    Command,
    Keyword,
    Index,
    Field,
    Function,
    /// Informational entry that inserts nothing.
    Placeholder,
}

/// One entry of the completion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionItem {
    pub label: String,
    pub insert_text: String,
    pub kind: CompletionKind,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    /// Lexicographic rank; lower sorts first.
    pub sort_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Completion items plus popup hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    pub items: Vec<CompletionItem>,
    /// Dismiss an open completion popup.
    pub force_hide: bool,
    /// Show the popup now instead of deferring to parameter hints.
    pub force_show: bool,
}

impl Default for Suggestions {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Suggestions {
    pub fn new(items: Vec<CompletionItem>) -> Self {
        Self {
            items,
            force_hide: true,
            force_show: true,
        }
    }

    pub fn force_hide(mut self, force_hide: bool) -> Self {
        self.force_hide = force_hide;
        self
    }

    pub fn force_show(mut self, force_show: bool) -> Self {
        self.force_show = force_show;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Attribute of a search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub identifier: String,
    pub attribute: String,
    /// Field type as reported by the server (`TEXT`, `NUMERIC`, ...).
    #[serde(rename = "type")]
    pub kind: String,
}

/// Server knowledge supplied by the caller, refreshed out of band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub indexes: Vec<String>,
    /// Fields of the selected index.
    pub fields: Vec<Field>,
}
