//! Arguments that may follow a stop point, collected level by level.

use workbench_core::CommandArg;

/// A grammar node together with the chain of nodes it was reached through.
///
/// Grammar trees carry no back-references; matching builds this chain on the
/// stack while descending so suggestions can walk back up.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'g, 's> {
    pub node: &'g CommandArg,
    pub parent: Option<&'s Scope<'g, 's>>,
}

impl<'g, 's> Scope<'g, 's> {
    pub fn root(node: &'g CommandArg) -> Self {
        Self { node, parent: None }
    }

    pub fn child(node: &'g CommandArg, parent: &'s Scope<'g, 's>) -> Self {
        Self {
            node,
            parent: Some(parent),
        }
    }

    /// Node of the enclosing scope.
    pub fn parent_node(&self) -> Option<&'g CommandArg> {
        self.parent.map(|parent| parent.node)
    }
}

/// An argument offered for insertion.
///
/// `optional` and `multiple` may be inherited from the block the argument
/// opens, so they can differ from the flags on `arg`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'g> {
    pub arg: &'g CommandArg,
    /// Node whose argument list `arg` was taken from.
    pub parent: Option<&'g CommandArg>,
    pub optional: bool,
    pub multiple: bool,
}

impl<'g> Candidate<'g> {
    pub fn new(arg: &'g CommandArg, parent: Option<&'g CommandArg>) -> Self {
        Self {
            arg,
            parent,
            optional: arg.optional,
            multiple: arg.multiple,
        }
    }

    /// Text the user types to insert the candidate.
    pub fn keyword(&self) -> &'g str {
        self.arg.token.as_deref().unwrap_or(&self.arg.name)
    }
}

/// Arguments of `current` around `stop` that may be typed next.
///
/// The window runs from the last mandatory argument before `stop` up to the
/// next mandatory one; when the next mandatory argument is a keyword or a
/// one-of, it (or its alternatives) leads the list.
pub fn get_rest_arguments<'g>(
    current: Option<&Scope<'g, '_>>,
    stop: Option<&CommandArg>,
) -> Vec<Candidate<'g>> {
    let Some(current) = current else {
        return Vec::new();
    };
    let node: &'g CommandArg = current.node;
    let args = &node.arguments;
    let parent = Some(node);

    // A missing name matches the unnamed own token of a command.
    let index_of = |name: Option<&str>| match name {
        Some(name) => args.iter().position(|arg| arg.name == name),
        None => args.iter().position(|arg| arg.name.is_empty()),
    };

    let stop_index = index_of(stop.map(|stop| stop.name.as_str()));

    let next_mandatory = match (stop, stop_index) {
        (Some(stop), _) if !stop.optional => stop_index,
        (_, Some(index)) if index > 0 => args
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, arg)| !arg.optional)
            .map(|(i, _)| i),
        _ => None,
    }
    .filter(|&index| index > 0);

    // Mandatory argument left of the stop. Without a stop index the search
    // covers every argument but the last.
    let search_end = stop_index.unwrap_or(args.len().saturating_sub(1));
    let prev_mandatory = index_of(
        args[..search_end]
            .iter()
            .rev()
            .find(|arg| !arg.optional)
            .map(|prev| prev.name.as_str()),
    );

    let window = match (next_mandatory, prev_mandatory) {
        (Some(next), Some(prev)) => &args[prev.min(next)..next],
        // Nothing mandatory before the stop: the window starts at the last argument.
        (Some(next), None) => &args[args.len().saturating_sub(1).min(next)..next],
        (None, Some(prev)) => &args[prev + 1..],
        (None, None) => &args[..],
    };

    let mut rest: Vec<Candidate<'g>> = Vec::new();
    if let Some(next) = next_mandatory.map(|index| &args[index]) {
        if next.is_one_of() {
            rest.extend(next.arguments.iter().map(|alt| Candidate::new(alt, parent)));
        }
        if next.token.is_some() {
            rest.push(Candidate::new(next, parent));
        }
    }
    rest.extend(window.iter().map(|arg| Candidate::new(arg, parent)));
    rest
}

/// Rest arguments of every level from `current` up to the root.
///
/// Each level is filtered by [`remove_not_suggested_args`] and expanded by
/// [`fill_args_by_type`]. The first level is left out when `skip_level` is set.
pub fn get_all_rest_arguments<'g>(
    current: Option<&Scope<'g, '_>>,
    stop: Option<&CommandArg>,
    typed: &[String],
    skip_level: bool,
) -> Vec<Vec<Candidate<'g>>> {
    let mut levels = Vec::new();

    if !skip_level {
        let level = remove_not_suggested_args(typed, get_rest_arguments(current, stop));
        levels.push(fill_args_by_type(level));
    }

    if let Some(scope) = current
        && let Some(parent) = scope.parent
    {
        levels.extend(get_all_rest_arguments(
            Some(parent),
            Some(scope.node),
            typed,
            false,
        ));
    }

    levels
}

/// Drop candidates whose keyword the user already typed. Repeatable keywords stay.
pub fn remove_not_suggested_args<'g>(
    typed: &[String],
    candidates: Vec<Candidate<'g>>,
) -> Vec<Candidate<'g>> {
    let was_typed = |token: &str| typed.iter().any(|word| word.eq_ignore_ascii_case(token));

    candidates
        .into_iter()
        .filter(|candidate| {
            let arg = candidate.arg;
            if arg.token.is_some() && candidate.multiple {
                return true;
            }
            if arg.is_one_of() {
                return !arg
                    .arguments
                    .iter()
                    .filter_map(|alt| alt.token.as_deref())
                    .any(|token| was_typed(token));
            }
            if arg.is_block() {
                let keyword = arg.token.as_deref().or_else(|| arg.first_token());
                return keyword.is_some_and(|token| !was_typed(token) || candidate.multiple);
            }
            arg.token.as_deref().is_some_and(|token| !was_typed(token))
        })
        .collect()
}

/// Replace wrappers by what the user actually types: one-of alternatives and
/// the first child of a keyword-less block.
pub fn fill_args_by_type(candidates: Vec<Candidate<'_>>) -> Vec<Candidate<'_>> {
    let mut result = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let arg = candidate.arg;

        if arg.is_one_of() && arg.token.is_none() {
            result.extend(
                arg.arguments
                    .iter()
                    .map(|alt| Candidate::new(alt, Some(arg))),
            );
            continue;
        }

        if arg.token.is_some() {
            result.push(candidate);
            continue;
        }

        if arg.is_block()
            && let Some(first) = arg.arguments.first()
        {
            result.push(Candidate {
                arg: first,
                parent: Some(arg),
                optional: first.optional || candidate.optional,
                multiple: first.multiple || candidate.multiple,
            });
        }
    }

    result
}
