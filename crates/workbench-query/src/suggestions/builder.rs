//! Choosing the suggestion mode for a cursor position.

use tracing::debug;
use workbench_core::{CommandArg, CommandSet};

use super::items::{
    argument_items, command_items, field_items, function_items, index_items, no_indexes_item,
};
use super::{Metadata, Suggestions};
use crate::config::Config;
use crate::locator::LocatedQuery;
use crate::matcher::{FoundArgument, find_current_argument};
use crate::signature::HelpWidget;
use crate::tokenizer::Tokenizer;

/// Commands whose first argument names the index to fetch fields for.
pub const INDEX_INFO_COMMANDS: &[&str] = &[
    "FT.SEARCH",
    "FT.AGGREGATE",
    "FT.EXPLAIN",
    "FT.EXPLAINCLI",
    "FT.PROFILE",
    "FT.SPELLCHECK",
    "FT.TAGVALS",
    "FT.ALTER",
    "FT.INFO",
];

/// Computes suggestions from a located query and the metadata snapshot.
#[derive(Debug)]
pub struct SuggestionBuilder<'a> {
    commands: &'a CommandSet,
    config: &'a Config,
    metadata: &'a Metadata,
    tokenizer: Tokenizer,
}

impl<'a> SuggestionBuilder<'a> {
    pub fn new(commands: &'a CommandSet, config: &'a Config, metadata: &'a Metadata) -> Self {
        Self {
            commands,
            config,
            metadata,
            tokenizer: Tokenizer::new(config.composite()),
        }
    }

    /// Suggestions at 1-based `column` of the cursor line.
    ///
    /// `help` receives the node to show parameter hints for.
    pub fn build(
        &self,
        query: Option<&LocatedQuery<'_>>,
        column: usize,
        help: &mut HelpWidget,
    ) -> Suggestions {
        if column == 1 {
            if query.is_some() {
                return Suggestions::default();
            }
            debug!(mode = "commands", "suggestions");
            return Suggestions::new(command_items(self.commands)).force_hide(false);
        }

        let Some(query) = query else {
            return Suggestions::default().force_hide(false);
        };

        let found = find_current_argument(self.commands.trees(), &query.split.before);
        let stop = found.as_ref().and_then(|found| found.stop_arg);

        if !self.config.suggests_for(&query.name) {
            debug!(command = query.name.as_str(), mode = "hints", "suggestions");
            help.update(true, found.as_ref().map(|found| found.parent), stop);
            return Suggestions::default();
        }

        if query.split.cursor.prev_char == Some(self.config.field_start_symbol) {
            debug!(mode = "fields", "suggestions");
            let in_query = stop.is_some_and(|arg| arg.name == self.config.query_arg_name);
            return Suggestions::new(field_items(&self.metadata.fields, in_query));
        }

        let tree = self.commands.tree(&query.name);
        match stop {
            Some(stop) if stop.name == self.config.index_arg_name => {
                self.index_suggestions(query, tree, stop, help)
            }
            Some(stop) if stop.name == self.config.query_arg_name => {
                debug!(mode = "query", "suggestions");
                help.update(true, tree, Some(stop));
                Suggestions::default().force_hide(false)
            }
            _ => self.common_suggestions(query, found.as_ref(), help),
        }
    }

    fn index_suggestions(
        &self,
        query: &LocatedQuery<'_>,
        tree: Option<&CommandArg>,
        stop: &CommandArg,
        help: &mut HelpWidget,
    ) -> Suggestions {
        let has_indexes = !self.metadata.indexes.is_empty();
        let current = query.split.current_arg();
        debug!(mode = "indexes", has_indexes, typing = current.is_some(), "suggestions");
        help.update(has_indexes, tree, Some(stop));

        if !has_indexes {
            help.update(current.is_some(), None, None);
            return match current {
                Some(_) => Suggestions::default(),
                None => Suggestions::new(vec![no_indexes_item()]),
            };
        }

        if current.is_some() {
            return Suggestions::default().force_hide(false);
        }

        let args = &query.command.arguments;
        let is_next_query = args
            .iter()
            .position(|arg| arg.name == stop.name)
            .and_then(|position| args.get(position + 1))
            .is_some_and(|next| next.name == self.config.query_arg_name);

        Suggestions::new(index_items(&self.metadata.indexes, is_next_query))
    }

    fn common_suggestions(
        &self,
        query: &LocatedQuery<'_>,
        found: Option<&FoundArgument<'_>>,
        help: &mut HelpWidget,
    ) -> Suggestions {
        if let Some(found) = found
            && let Some(stop) = found.stop_arg.filter(|stop| stop.expression)
        {
            return self.expression_suggestions(query, found, stop, help);
        }

        let cursor = &query.split.cursor;
        if cursor.in_quotes || cursor.next_char.is_some() || cursor.prev_char.is_some() {
            return Suggestions::default();
        }

        let Some(found) = found else {
            return Suggestions::default();
        };

        let items = if found.is_blocked {
            Vec::new()
        } else {
            argument_items(&found.append)
        };
        debug!(mode = "arguments", blocked = found.is_blocked, items = items.len(), "suggestions");

        help.update(items.is_empty(), Some(found.parent), found.stop_arg);
        let force_hide = items.is_empty();
        Suggestions::new(items).force_hide(force_hide)
    }

    /// Function names inside a quoted expression argument.
    fn expression_suggestions(
        &self,
        query: &LocatedQuery<'_>,
        found: &FoundArgument<'_>,
        stop: &CommandArg,
        help: &mut HelpWidget,
    ) -> Suggestions {
        help.update(true, Some(found.parent), Some(stop));

        let cursor = &query.split.cursor;
        if !cursor.in_quotes {
            return Suggestions::default();
        }

        let left = cursor.arg_left_offset;
        let typed: String = query
            .full_query
            .chars()
            .skip(left)
            .take(query.cursor_offset.saturating_sub(left))
            .collect();
        let expression = strip_quotes(&typed);
        let nested = self
            .tokenizer
            .split(expression, query.cursor_offset.saturating_sub(left));

        let starts_function = nested.current_arg().is_some_and(|current| {
            let current = current.to_lowercase();
            stop.arguments.iter().any(|function| {
                function
                    .token
                    .as_deref()
                    .is_some_and(|token| token.to_lowercase().starts_with(&current))
            })
        });
        debug!(mode = "functions", starts_function, "suggestions");

        Suggestions::new(function_items(&stop.arguments)).force_show(starts_function)
    }
}

/// Drop one leading and one trailing quote.
fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix(['"', '\'']).unwrap_or(text);
    text.strip_suffix(['"', '\'']).unwrap_or(text)
}
