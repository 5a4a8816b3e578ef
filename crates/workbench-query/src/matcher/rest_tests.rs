use workbench_core::{CommandArg, ValueType};

use super::*;

fn value(name: &str) -> CommandArg {
    CommandArg::value(name, ValueType::String)
}

fn typed(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn keywords(candidates: &[Candidate<'_>]) -> Vec<String> {
    candidates
        .iter()
        .map(|c| c.keyword().to_string())
        .collect()
}

/// `CMD key [A a] [B] C c [D]`
fn command() -> CommandArg {
    CommandArg::block(
        "CMD",
        vec![
            CommandArg::own_token("CMD"),
            value("key"),
            value("a").with_token("A").optional(),
            CommandArg::pure_token("B").optional(),
            value("c").with_token("C"),
            CommandArg::pure_token("D").optional(),
        ],
    )
    .with_token("CMD")
}

#[test]
fn window_ends_at_next_mandatory_keyword() {
    let tree = command();
    let scope = Scope::root(&tree);

    let rest = get_rest_arguments(Some(&scope), Some(&tree.arguments[2]));

    assert_eq!(keywords(&rest), ["C", "key", "A", "B"]);
    assert!(rest.iter().all(|c| c.parent == Some(&tree)));
}

#[test]
fn window_after_last_mandatory_runs_to_end() {
    let tree = command();
    let scope = Scope::root(&tree);

    let rest = get_rest_arguments(Some(&scope), Some(&tree.arguments[5]));

    assert_eq!(keywords(&rest), ["D"]);
}

#[test]
fn missing_scope_has_no_rest() {
    let tree = command();
    assert!(get_rest_arguments(None, Some(&tree.arguments[1])).is_empty());
}

#[test]
fn next_mandatory_one_of_leads_with_alternatives() {
    let tree = CommandArg::block(
        "CMD",
        vec![
            CommandArg::own_token("CMD"),
            value("key"),
            CommandArg::pure_token("X").optional(),
            CommandArg::one_of(
                "mode",
                vec![CommandArg::pure_token("ON"), CommandArg::pure_token("OFF")],
            ),
        ],
    );
    let scope = Scope::root(&tree);

    let rest = get_rest_arguments(Some(&scope), Some(&tree.arguments[2]));

    assert_eq!(keywords(&rest), ["ON", "OFF", "key", "X"]);
}

#[test]
fn typed_keywords_are_removed() {
    let tree = command();
    let candidates: Vec<_> = tree.arguments.iter().map(|a| Candidate::new(a, None)).collect();

    let kept = remove_not_suggested_args(&typed(&["cmd", "k", "a", "1"]), candidates);

    assert_eq!(keywords(&kept), ["B", "C", "D"]);
}

#[test]
fn repeatable_keywords_stay() {
    let repeated = value("field").with_token("FILTER").multiple();
    let block = CommandArg::block("apply", vec![value("expr").with_token("APPLY")])
        .optional()
        .multiple();
    let once = CommandArg::block("limit", vec![value("offset")]).with_token("LIMIT");

    let kept = remove_not_suggested_args(
        &typed(&["FILTER", "APPLY", "LIMIT"]),
        vec![
            Candidate::new(&repeated, None),
            Candidate::new(&block, None),
            Candidate::new(&once, None),
        ],
    );

    assert_eq!(keywords(&kept), ["FILTER", "apply"]);
}

#[test]
fn one_of_is_removed_once_any_alternative_is_typed() {
    let order = CommandArg::one_of(
        "order",
        vec![CommandArg::pure_token("ASC"), CommandArg::pure_token("DESC")],
    );

    let kept = remove_not_suggested_args(&typed(&["desc"]), vec![Candidate::new(&order, None)]);
    assert!(kept.is_empty());

    let kept = remove_not_suggested_args(&typed(&["x"]), vec![Candidate::new(&order, None)]);
    assert_eq!(kept.len(), 1);
}

#[test]
fn keywordless_block_needs_first_keyword() {
    let plain = CommandArg::block("pairs", vec![value("x"), value("y")]);

    let kept = remove_not_suggested_args(&[], vec![Candidate::new(&plain, None)]);

    assert!(kept.is_empty());
}

#[test]
fn fill_expands_wrappers() {
    let order = CommandArg::one_of(
        "order",
        vec![CommandArg::pure_token("ASC"), CommandArg::pure_token("DESC")],
    );
    let filter = CommandArg::block(
        "filter",
        vec![value("field").with_token("FILTER"), value("min")],
    )
    .optional()
    .multiple();
    let limit = CommandArg::block("limit", vec![value("offset")]).with_token("LIMIT");
    let plain = value("plain");

    let filled = fill_args_by_type(vec![
        Candidate::new(&order, None),
        Candidate::new(&filter, None),
        Candidate::new(&limit, None),
        Candidate::new(&plain, None),
    ]);

    assert_eq!(keywords(&filled), ["ASC", "DESC", "FILTER", "LIMIT"]);
    assert_eq!(filled[0].parent, Some(&order));

    let first = filled[2];
    assert_eq!(first.parent, Some(&filter));
    assert!(first.optional);
    assert!(first.multiple);
    assert!(!first.arg.optional);
}

#[test]
fn all_levels_walk_parent_chain() {
    let inner = CommandArg::block(
        "sortby",
        vec![
            value("field").with_token("SORTBY"),
            CommandArg::one_of(
                "order",
                vec![CommandArg::pure_token("ASC"), CommandArg::pure_token("DESC")],
            )
            .optional(),
        ],
    )
    .optional();
    let tree = CommandArg::block(
        "CMD",
        vec![
            CommandArg::own_token("CMD"),
            value("key"),
            inner.clone(),
            CommandArg::pure_token("WITHCOUNT").optional(),
        ],
    )
    .with_token("CMD");

    let root = Scope::root(&tree);
    let nested = Scope::child(&tree.arguments[2], &root);
    let words = typed(&["CMD", "k", "SORTBY", "f"]);

    let levels = get_all_rest_arguments(
        Some(&nested),
        Some(&tree.arguments[2].arguments[1]),
        &words,
        false,
    );

    let levels: Vec<_> = levels.iter().map(|level| keywords(level)).collect();
    assert_eq!(levels, [vec!["ASC", "DESC"], vec!["WITHCOUNT"]]);

    let skipped = get_all_rest_arguments(Some(&nested), None, &words, true);
    assert_eq!(skipped.len(), 1);
    assert_eq!(nested.parent_node(), Some(&tree));
}
