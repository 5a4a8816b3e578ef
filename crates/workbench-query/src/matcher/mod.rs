//! Argument matching against command trees.
//!
//! [`find_current_argument`] is the entry point: given the arguments before
//! the cursor it finds the command and the grammar node the cursor sits at,
//! and collects the arguments that may be inserted next.

mod find;
mod rest;
mod state;

#[cfg(test)]
mod find_tests;
#[cfg(test)]
mod rest_tests;

pub use find::{
    ArgumentSuggestions, FoundArgument, find_arg_by_token, find_current_argument,
    get_argument_suggestions,
};
pub use rest::{
    Candidate, Scope, fill_args_by_type, get_all_rest_arguments, get_rest_arguments,
    remove_not_suggested_args,
};
pub use state::{COUNT_ARG_NAMES, Matcher, Slot, StopPoint, parse_count};
