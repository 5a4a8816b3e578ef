use workbench_core::CommandSet;

use super::*;
use crate::config::Config;
use crate::locator::locate_query;
use crate::signature::HelpWidget;
use crate::tokenizer::Tokenizer;

struct Outcome {
    suggestions: Suggestions,
    help: HelpWidget,
}

impl Outcome {
    fn labels(&self) -> Vec<&str> {
        self.suggestions
            .items
            .iter()
            .map(|item| item.label.as_str())
            .collect()
    }

    fn flags(&self) -> (bool, bool) {
        (self.suggestions.force_hide, self.suggestions.force_show)
    }

    fn help_parent(&self) -> Option<&str> {
        self.help.parent.as_ref().map(|parent| parent.name.as_str())
    }

    fn help_arg(&self) -> Option<&str> {
        self.help.current_arg.as_ref().map(|arg| arg.name.as_str())
    }
}

fn metadata() -> Metadata {
    Metadata {
        indexes: vec!["idx".to_string(), "books".to_string()],
        fields: vec![Field {
            identifier: "$.title".to_string(),
            attribute: "title".to_string(),
            kind: "TEXT".to_string(),
        }],
    }
}

fn suggest_at(text: &str, column: usize, metadata: &Metadata) -> Outcome {
    let set = CommandSet::bundled().unwrap();
    let config = Config::default();
    let located = locate_query(text, 1, column, &set, &Tokenizer::default());
    let mut help = HelpWidget::default();

    let suggestions = SuggestionBuilder::new(&set, &config, metadata).build(
        located.as_ref(),
        column,
        &mut help,
    );
    Outcome { suggestions, help }
}

/// Cursor at the end of a single-line query.
fn suggest(text: &str, metadata: &Metadata) -> Outcome {
    suggest_at(text, text.chars().count() + 1, metadata)
}

#[test]
fn empty_line_offers_commands() {
    let outcome = suggest("", &Metadata::default());

    assert_eq!(outcome.labels().first(), Some(&"SET"));
    assert_eq!(outcome.flags(), (false, true));
}

#[test]
fn line_start_of_command_offers_nothing() {
    let outcome = suggest_at("FT.INFO idx", 1, &metadata());

    assert!(outcome.suggestions.is_empty());
    assert_eq!(outcome.flags(), (true, true));
}

#[test]
fn unknown_text_offers_nothing() {
    let outcome = suggest("hello", &metadata());

    assert!(outcome.suggestions.is_empty());
    assert_eq!(outcome.flags(), (false, true));
}

#[test]
fn other_commands_only_update_hints() {
    let outcome = suggest("SET key ", &metadata());

    assert!(outcome.suggestions.is_empty());
    assert!(outcome.help.is_open);
    assert_eq!(outcome.help_parent(), Some("SET"));
    assert_eq!(outcome.help_arg(), Some("value"));
}

#[test]
fn missing_indexes_show_placeholder() {
    let outcome = suggest("FT.SEARCH ", &Metadata::default());

    assert_eq!(outcome.suggestions.items.len(), 1);
    assert_eq!(
        outcome.suggestions.items[0].id.as_deref(),
        Some(NO_INDEXES_ID)
    );
    assert_eq!(outcome.flags(), (true, true));
    assert!(!outcome.help.is_open);

    let outcome = suggest("FT.SEARCH id", &Metadata::default());
    assert!(outcome.suggestions.is_empty());
    assert!(outcome.help.is_open);
}

#[test]
fn known_indexes_are_offered() {
    let outcome = suggest("FT.SEARCH ", &metadata());

    assert_eq!(outcome.labels(), ["idx", "books"]);
    assert_eq!(outcome.suggestions.items[0].insert_text, "'idx' '");
    assert!(outcome.help.is_open);
    assert_eq!(outcome.help_parent(), Some("FT.SEARCH"));
    assert_eq!(outcome.help_arg(), Some("index"));

    let outcome = suggest("FT.INFO ", &metadata());
    assert_eq!(outcome.suggestions.items[0].insert_text, "'idx' ");
}

#[test]
fn typed_index_stops_index_suggestions() {
    let outcome = suggest("FT.SEARCH i", &metadata());

    assert!(outcome.suggestions.is_empty());
    assert_eq!(outcome.flags(), (false, true));
}

#[test]
fn query_defers_to_hints() {
    let outcome = suggest("FT.SEARCH idx ", &metadata());

    assert!(outcome.suggestions.is_empty());
    assert_eq!(outcome.flags(), (false, true));
    assert!(outcome.help.is_open);
    assert_eq!(outcome.help_arg(), Some("query"));
}

#[test]
fn field_symbol_offers_fields() {
    let outcome = suggest(r#"FT.SEARCH idx "@"#, &metadata());
    assert_eq!(outcome.labels(), ["title"]);
    assert_eq!(outcome.suggestions.items[0].insert_text, "title:");
    assert_eq!(outcome.flags(), (true, true));

    let outcome = suggest(r#"FT.SEARCH idx "q" SORTBY @"#, &metadata());
    assert_eq!(outcome.suggestions.items[0].insert_text, "title ");
}

#[test]
fn keywords_after_query() {
    let outcome = suggest(r#"FT.SEARCH idx "q" "#, &metadata());

    assert_eq!(outcome.labels().first(), Some(&"NOCONTENT"));
    assert_eq!(outcome.labels().last(), Some(&"DIALECT"));
    assert_eq!(outcome.suggestions.items[0].insert_text, "NOCONTENT ");
    assert_eq!(outcome.flags(), (false, true));
    assert!(!outcome.help.is_open);
}

#[test]
fn blocked_keyword_opens_hints() {
    let outcome = suggest(r#"FT.SEARCH idx "q" LIMIT "#, &metadata());

    assert!(outcome.suggestions.is_empty());
    assert_eq!(outcome.flags(), (true, true));
    assert!(outcome.help.is_open);
    assert_eq!(outcome.help_parent(), Some("FT.SEARCH"));
    assert_eq!(outcome.help_arg(), Some("offset"));
}

#[test]
fn typing_next_to_cursor_hides() {
    let outcome = suggest(r#"FT.SEARCH idx "q" NOC"#, &metadata());

    assert!(outcome.suggestions.is_empty());
    assert_eq!(outcome.flags(), (true, true));
}

#[test]
fn expression_offers_functions() {
    let outcome = suggest(r#"FT.AGGREGATE idx * APPLY "up"#, &metadata());

    assert_eq!(outcome.suggestions.items.len(), 13);
    assert_eq!(outcome.labels()[0], "exists");
    assert_eq!(outcome.flags(), (true, true));
    assert_eq!(outcome.help_parent(), Some("apply"));

    let outcome = suggest(r#"FT.AGGREGATE idx * APPLY "zz"#, &metadata());
    assert_eq!(outcome.flags(), (true, false));
}

#[test]
fn expression_outside_quotes_offers_nothing() {
    let outcome = suggest("FT.AGGREGATE idx * APPLY ", &metadata());

    assert!(outcome.suggestions.is_empty());
    assert!(outcome.help.is_open);
    assert_eq!(outcome.help_parent(), Some("apply"));
}
