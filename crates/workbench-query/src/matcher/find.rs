//! Locating the argument the cursor is about to fill.

use indexmap::IndexMap;
use tracing::debug;
use workbench_core::CommandArg;

use super::rest::{Candidate, Scope, get_all_rest_arguments};
use super::state::Matcher;

/// What may be typed after the arguments preceding the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentSuggestions<'g> {
    /// No mandatory argument is left at the stop level.
    pub is_complete: bool,
    /// Grammar node at the stop position.
    pub stop_arg: Option<&'g CommandArg>,
    /// A value is owed before anything else can be suggested.
    pub is_blocked: bool,
    /// Insertable arguments, one group per level, nearest level first.
    pub append: Vec<Vec<Candidate<'g>>>,
}

/// [`ArgumentSuggestions`] plus the node they were computed in.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundArgument<'g> {
    pub stop_arg: Option<&'g CommandArg>,
    /// Command tree or block that holds the stop argument.
    pub parent: &'g CommandArg,
    pub is_complete: bool,
    pub is_blocked: bool,
    pub append: Vec<Vec<Candidate<'g>>>,
}

/// Match `prev` (the arguments before the cursor) against command trees.
///
/// Returns `None` when no argument names a known command.
pub fn find_current_argument<'g>(
    trees: &'g [CommandArg],
    prev: &[String],
) -> Option<FoundArgument<'g>> {
    let found = find_in(trees, prev, &[], None);
    if let Some(found) = &found {
        debug!(
            parent = found.parent.name.as_str(),
            stop = found.stop_arg.map(|arg| arg.name.as_str()),
            complete = found.is_complete,
            blocked = found.is_blocked,
            levels = found.append.len(),
            "current argument"
        );
    }
    found
}

/// Walk `prev` from the end to the nearest keyword of `args`, descending into
/// blocks opened by that keyword.
fn find_in<'g>(
    args: &'g [CommandArg],
    prev: &[String],
    typed: &[String],
    parent: Option<&Scope<'g, '_>>,
) -> Option<FoundArgument<'g>> {
    for (i, word) in prev.iter().enumerate().rev() {
        if let Some(block) = find_arg_by_token(args, word).filter(|arg| arg.is_block()) {
            let scope = Scope {
                node: block,
                parent,
            };
            return find_in(&block.arguments, &prev[i..], prev, Some(&scope));
        }

        let Some(token_index) = args.iter().position(|arg| arg.has_token(word)) else {
            continue;
        };
        let token = &args[token_index];
        let candidates = match parent {
            Some(_) => &args[token_index..],
            None => std::slice::from_ref(token),
        };

        let suggestions = get_argument_suggestions(&prev[i..], typed, candidates, parent);
        return Some(FoundArgument {
            stop_arg: suggestions.stop_arg,
            parent: parent.map_or(token, |scope| scope.node),
            is_complete: suggestions.is_complete,
            is_blocked: suggestions.is_blocked,
            append: suggestions.append,
        });
    }

    None
}

/// First node introduced by `word`: a one-of with that alternative, or a
/// node whose first child is that keyword.
pub fn find_arg_by_token<'g>(args: &'g [CommandArg], word: &str) -> Option<&'g CommandArg> {
    args.iter().find(|arg| {
        if arg.is_one_of() {
            arg.has_alternative(word)
        } else {
            arg.first_token()
                .is_some_and(|token| token.eq_ignore_ascii_case(word))
        }
    })
}

/// Match `token_args` against `args` and collect what may follow.
///
/// `typed` holds every argument typed in the enclosing command; keywords in
/// it are not suggested again.
pub fn get_argument_suggestions<'g>(
    token_args: &[String],
    typed: &[String],
    args: &'g [CommandArg],
    current: Option<&Scope<'g, '_>>,
) -> ArgumentSuggestions<'g> {
    let stop = Matcher::over(token_args, args).run();
    let stop_arg = stop.stop_arg();

    let is_one_of = stop_arg.is_some_and(|arg| {
        arg.is_one_of()
            || (arg.is_pure_token()
                && current
                    .and_then(|scope| scope.parent_node())
                    .is_some_and(CommandArg::is_one_of))
    });
    let alternatives = |arg: &'g CommandArg| -> Vec<Candidate<'g>> {
        arg.arguments
            .iter()
            .map(|alt| Candidate::new(alt, Some(arg)))
            .collect()
    };

    if stop.is_blocked {
        return ArgumentSuggestions {
            is_complete: false,
            stop_arg,
            is_blocked: !is_one_of,
            append: stop_arg
                .filter(|_| is_one_of)
                .map(alternatives)
                .into_iter()
                .collect(),
        };
    }

    // A mandatory argument after a mandatory one is the only thing offered.
    let prev_mandatory = stop.prev_slot().is_some_and(|slot| !slot.is_optional());
    if let Some(next) = stop_arg.filter(|arg| prev_mandatory && !arg.optional) {
        let can_append = next.token.is_some() || is_one_of;
        let group = if is_one_of {
            alternatives(next)
        } else {
            vec![Candidate::new(next, current.map(|scope| scope.node))]
        };
        return ArgumentSuggestions {
            is_complete: false,
            stop_arg,
            is_blocked: !can_append,
            append: if can_append { vec![group] } else { Vec::new() },
        };
    }

    // A finished argument list has no stop; its first node stands in.
    let last = stop_arg.or_else(|| stop.rest.first().and_then(|slot| slot.arg()));

    let nested;
    let found_parent = match (stop.parent, current) {
        (Some(block), Some(current))
            if !block.name.is_empty()
                && current.node.arguments.iter().any(|arg| arg.name == block.name) =>
        {
            nested = Scope::child(block, current);
            Some(&nested)
        }
        (Some(block), _) => {
            nested = Scope::root(block);
            Some(&nested)
        }
        (None, current) => current,
    };

    let is_level_done = stop_arg.is_none()
        && current
            .zip(last)
            .is_some_and(|(scope, last)| scope.node.name == last.name);
    let append = get_all_rest_arguments(found_parent, last, typed, is_level_done);
    let is_complete = stop.rest[stop.stop_index.min(stop.rest.len())..]
        .iter()
        .all(|slot| slot.is_optional());

    ArgumentSuggestions {
        is_complete,
        stop_arg,
        is_blocked: false,
        append,
    }
}

impl<'g> FoundArgument<'g> {
    /// All candidates in ranking order, first occurrence of each keyword only.
    pub fn candidates(&self) -> Vec<Candidate<'g>> {
        let mut unique: IndexMap<String, Candidate<'g>> = IndexMap::new();
        for candidate in self.append.iter().flatten() {
            unique
                .entry(candidate.keyword().to_uppercase())
                .or_insert(*candidate);
        }
        unique.into_values().collect()
    }
}
