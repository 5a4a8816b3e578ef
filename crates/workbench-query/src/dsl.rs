//! Arguments written in an embedded language, edited outside the command line.

use serde::Serialize;

use crate::locator::LocatedQuery;

/// Quoted argument under the cursor whose grammar node names a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DslArgument {
    /// Argument text including its quotes.
    pub argument: String,
    /// Language name from the grammar (`redisearch`, `sqliteFunctions`).
    pub dsl: String,
    /// Position in the query's arguments, command name included.
    pub index: usize,
}

pub fn dsl_argument(query: &LocatedQuery<'_>) -> Option<DslArgument> {
    let index = query.cursor_arg_index()?;
    let argument = query.all_args.get(index)?;
    // Query arguments count the command name, grammar arguments do not.
    let grammar = query.command.arguments.get(index.checked_sub(1)?)?;
    let dsl = grammar.dsl.as_ref()?;

    is_quoted(argument).then(|| DslArgument {
        argument: argument.clone(),
        dsl: dsl.clone(),
        index,
    })
}

/// Replace the first occurrence of `argument` in `full_query` by `value`,
/// wrapped in the quote `argument` starts with.
pub fn replace_argument(full_query: &str, argument: &str, value: &str) -> String {
    let Some(quote) = argument.chars().next() else {
        return full_query.to_string();
    };
    full_query.replacen(argument, &format!("{quote}{value}{quote}"), 1)
}

fn is_quoted(argument: &str) -> bool {
    let mut chars = argument.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first @ ('"' | '\'')), Some(last)) => first == last,
        _ => false,
    }
}
