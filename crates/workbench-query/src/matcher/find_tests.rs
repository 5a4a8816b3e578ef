use workbench_core::{Command, CommandArg, CommandSet, ValueType};

use super::*;

fn words(query: &str) -> Vec<String> {
    crate::split_query_by_args(query, query.chars().count()).before
}

fn find<'g>(set: &'g CommandSet, query: &str) -> Option<FoundArgument<'g>> {
    find_current_argument(set.trees(), &words(query))
}

fn keywords(found: &FoundArgument<'_>) -> Vec<String> {
    found
        .candidates()
        .iter()
        .map(|candidate| candidate.keyword().to_string())
        .collect()
}

fn level_keywords(found: &FoundArgument<'_>) -> Vec<Vec<String>> {
    found
        .append
        .iter()
        .map(|level| level.iter().map(|c| c.keyword().to_string()).collect())
        .collect()
}

fn stop_name(found: &FoundArgument<'_>) -> Option<String> {
    found.stop_arg.map(|arg| arg.name.clone())
}

/// `CMD [FLAG] TOKEN value`
fn flag_then_token() -> CommandSet {
    CommandSet::from_commands([Command::new(
        "CMD",
        vec![
            CommandArg::pure_token("FLAG").optional(),
            CommandArg::value("tok", ValueType::String).with_token("TOKEN"),
        ],
    )])
}

/// `CMD count pair [pair ...]`
fn counted_pairs() -> CommandSet {
    CommandSet::from_commands([Command::new(
        "CMD",
        vec![
            CommandArg::value("count", ValueType::Integer),
            CommandArg::block(
                "pairs",
                vec![
                    CommandArg::value("x", ValueType::String),
                    CommandArg::value("y", ValueType::String),
                ],
            )
            .multiple(),
        ],
    )])
}

#[test]
fn unknown_command_has_no_argument() {
    let set = CommandSet::bundled().unwrap();

    assert!(find(&set, "NOPE a b ").is_none());
    assert!(find(&set, "").is_none());
}

#[test]
fn command_name_offers_mandatory_keyword_first() {
    let set = flag_then_token();
    let found = find(&set, "CMD ").unwrap();

    assert_eq!(keywords(&found), ["TOKEN", "FLAG"]);
    assert!(!found.is_complete);
    assert!(!found.is_blocked);
    assert_eq!(found.parent.name, "CMD");
}

#[test]
fn keyword_blocks_until_its_value() {
    let set = flag_then_token();
    let found = find(&set, "cmd FLAG TOKEN ").unwrap();

    assert!(found.is_blocked);
    assert!(found.append.is_empty());
    assert_eq!(stop_name(&found).as_deref(), Some("tok"));
}

#[test]
fn omitted_optional_still_completes() {
    let set = flag_then_token();
    let found = find(&set, "CMD TOKEN v ").unwrap();

    assert!(found.is_complete);
    assert!(!found.is_blocked);
    assert_eq!(keywords(&found), ["FLAG"]);
}

#[test]
fn counted_block_is_complete() {
    let set = counted_pairs();
    let found = find(&set, "CMD 2 a b c d ").unwrap();

    assert!(found.is_complete);
    assert_eq!(found.append, vec![Vec::new()]);
}

#[test]
fn counted_block_ends_after_count_positions() {
    let set = counted_pairs();

    for query in ["CMD 2 a b ", "CMD 2 a b c "] {
        let found = find(&set, query).unwrap();
        assert!(found.is_complete, "{query}");
        assert_eq!(found.append, vec![Vec::new()], "{query}");
    }
}

#[test]
fn same_input_same_result() {
    let set = CommandSet::bundled().unwrap();
    let query = r#"FT.SEARCH idx "q" SORTBY price "#;

    assert_eq!(find(&set, query), find(&set, query));
}

#[test]
fn index_is_mandatory_after_command() {
    let set = CommandSet::bundled().unwrap();
    let found = find(&set, "FT.SEARCH ").unwrap();

    assert_eq!(stop_name(&found).as_deref(), Some("index"));
    assert!(found.is_blocked);
    assert_eq!(found.parent.name, "FT.SEARCH");
}

#[test]
fn query_follows_index() {
    let set = CommandSet::bundled().unwrap();
    let found = find(&set, "ft.search idx ").unwrap();

    assert_eq!(stop_name(&found).as_deref(), Some("query"));
    assert!(found.is_blocked);
    assert!(found.append.is_empty());
}

#[test]
fn options_after_query() {
    let set = CommandSet::bundled().unwrap();
    let found = find(&set, r#"FT.SEARCH idx "q" "#).unwrap();

    assert_eq!(stop_name(&found).as_deref(), Some("nocontent"));
    assert!(found.is_complete);
    assert_eq!(found.append.len(), 1);
    insta::assert_snapshot!(keywords(&found).join(" "), @"NOCONTENT VERBATIM NOSTOPWORDS WITHSCORES WITHPAYLOADS WITHSORTKEYS FILTER GEOFILTER INKEYS INFIELDS RETURN SLOP TIMEOUT INORDER LANGUAGE EXPANDER SCORER EXPLAINSCORE SORTBY LIMIT PARAMS DIALECT");
}

#[test]
fn typed_keywords_are_not_offered_again() {
    let set = CommandSet::bundled().unwrap();
    let found = find(&set, r#"FT.SEARCH idx "q" NOCONTENT LIMIT 0 10 "#).unwrap();

    assert_eq!(stop_name(&found).as_deref(), Some("params"));
    assert!(found.is_complete);
    let offered = keywords(&found);
    assert!(!offered.contains(&"NOCONTENT".to_string()));
    assert!(!offered.contains(&"LIMIT".to_string()));
    assert_eq!(offered.first().map(String::as_str), Some("VERBATIM"));
    assert_eq!(offered.last().map(String::as_str), Some("DIALECT"));
}

#[test]
fn keyword_block_waits_for_each_value() {
    let set = CommandSet::bundled().unwrap();

    let found = find(&set, r#"FT.SEARCH idx "q" LIMIT "#).unwrap();
    assert!(found.is_blocked);
    assert_eq!(stop_name(&found).as_deref(), Some("offset"));

    let found = find(&set, r#"FT.SEARCH idx "q" LIMIT 0 "#).unwrap();
    assert!(found.is_blocked);
    assert_eq!(stop_name(&found).as_deref(), Some("num"));
}

#[test]
fn nested_block_offers_own_level_first() {
    let set = CommandSet::bundled().unwrap();
    let found = find(&set, r#"FT.SEARCH idx "q" SORTBY price "#).unwrap();

    assert_eq!(found.parent.name, "sortby");
    assert_eq!(stop_name(&found).as_deref(), Some("order"));
    assert!(found.is_complete);

    let levels = level_keywords(&found);
    assert_eq!(levels.len(), 2);
    assert_eq!(levels[0], ["ASC", "DESC"]);
    assert!(!levels[1].contains(&"SORTBY".to_string()));
    assert!(levels[1].contains(&"LIMIT".to_string()));
}

#[test]
fn expression_keyword_blocks() {
    let set = CommandSet::bundled().unwrap();
    let found = find(&set, "FT.AGGREGATE idx * APPLY ").unwrap();

    let stop = found.stop_arg.unwrap();
    assert!(stop.expression);
    assert!(found.is_blocked);
    assert_eq!(found.parent.name, "apply");
}

#[test]
fn finished_block_offers_parent_level() {
    let set = CommandSet::bundled().unwrap();
    let found = find(&set, r#"FT.AGGREGATE idx * APPLY "upper(@x)" AS n "#).unwrap();

    assert!(found.is_complete);
    let levels = level_keywords(&found);
    assert_eq!(levels.len(), 2);
    assert!(levels[0].is_empty());
    insta::assert_snapshot!(levels[1].join(" "), @"VERBATIM LOAD LOAD * TIMEOUT GROUPBY SORTBY APPLY LIMIT FILTER WITHCURSOR PARAMS DIALECT");
}

#[test]
fn arg_by_token_finds_blocks_and_one_ofs() {
    let set = CommandSet::bundled().unwrap();
    let search = set.tree("FT.SEARCH").unwrap();

    let filter = find_arg_by_token(&search.arguments, "filter").unwrap();
    assert_eq!(filter.name, "filter");
    assert!(find_arg_by_token(&search.arguments, "LIMIT").is_none());

    let profile = set.tree("FT.PROFILE").unwrap();
    let querytype = find_arg_by_token(&profile.arguments, "aggregate").unwrap();
    assert_eq!(querytype.name, "querytype");
}
