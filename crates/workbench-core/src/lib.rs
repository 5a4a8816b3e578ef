#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the workbench query editor.
//!
//! - [`grammar`]: declarative command grammar (`CommandArg` trees) and the
//!   process-wide [`CommandSet`] loaded from the JSON command reference.
//! - [`Colors`]: ANSI palette shared by terminal front-ends.

mod colors;
pub mod grammar;

pub use colors::Colors;
pub use grammar::{
    ArgKind, Command, CommandArg, CommandProvider, CommandSet, GrammarError, ValueType,
};
