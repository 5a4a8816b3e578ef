use std::sync::Arc;

use workbench_core::{Colors, CommandSet};
use workbench_query::{Config, EditorSession, Metadata};

use super::complete::{parse_field, render};

fn render_at_end(text: &str, metadata: Metadata) -> String {
    let mut session = EditorSession::new(Arc::new(CommandSet::bundled().unwrap()), Config::default());
    session.set_metadata(metadata);
    let update = session.on_cursor_move(text, 1, text.chars().count() + 1);
    render(&update, session.signature_help().as_ref(), Colors::OFF)
}

#[test]
fn field_type_defaults_to_text() {
    let field = parse_field("title");
    assert_eq!(field.attribute, "title");
    assert_eq!(field.identifier, "title");
    assert_eq!(field.kind, "TEXT");

    assert_eq!(parse_field("price:numeric").kind, "NUMERIC");
}

#[test]
fn index_completions() {
    let metadata = Metadata {
        indexes: vec!["books".to_string()],
        fields: Vec::new(),
    };
    let out = render_at_end("FT.SEARCH ", metadata);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "action    show suggestions");
    assert_eq!(lines[1], "flags     force_hide=true force_show=true");
    assert!(lines[2].starts_with("  books index"));
    assert_eq!(lines.len(), 3);
}

#[test]
fn hints_for_commands_without_suggestions() {
    let out = render_at_end("SET key ", Metadata::default());
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "action    hide suggestions");
    assert_eq!(lines[1], "flags     force_hide=true force_show=true");
    assert!(lines[2].starts_with("signature SET key value"));
    assert_eq!(lines[3], "active    value");
}

#[test]
fn dsl_argument_is_reported() {
    let mut session = EditorSession::new(Arc::new(CommandSet::bundled().unwrap()), Config::default());
    let update = session.on_cursor_move(r#"FT.SEARCH idx "@title:hi""#, 1, 18);
    let out = render(&update, session.signature_help().as_ref(), Colors::OFF);

    assert!(out.contains("dsl       redisearch \"@title:hi\" (argument 2)\n"));
}
