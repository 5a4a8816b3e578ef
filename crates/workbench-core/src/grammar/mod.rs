//! Command grammar model.
//!
//! A command is a tree of [`CommandArg`] nodes loaded from the JSON command
//! reference. The tree is immutable after loading; consumers that need to walk
//! upwards carry their own parent chain.

mod json;
mod set;
mod syntax;
mod types;


pub use json::GrammarError;
pub use set::CommandSet;
pub use types::{ArgKind, Command, CommandArg, CommandProvider, ValueType};
