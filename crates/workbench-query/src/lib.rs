//! Workbench query engine: cursor-aware completion for Redis-style commands.
//!
//! # Example
//!
//! ```
//! use workbench_core::CommandSet;
//! use workbench_query::{find_current_argument, split_query_by_args};
//!
//! let commands = CommandSet::bundled().unwrap();
//! let query = r#"FT.SEARCH idx "hello" LIMIT "#;
//! let split = split_query_by_args(query, query.chars().count());
//!
//! let found = find_current_argument(commands.trees(), &split.before).unwrap();
//! assert!(found.is_blocked);
//! assert_eq!(found.stop_arg.unwrap().name, "offset");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod dsl;
pub mod locator;
pub mod matcher;
pub mod session;
pub mod signature;
pub mod suggestions;
pub mod tokenizer;

#[cfg(test)]
mod signature_tests;

pub use config::{Config, ConfigError};
pub use dsl::{DslArgument, dsl_argument, replace_argument};
pub use locator::{LocatedQuery, locate_query};
pub use matcher::{Candidate, FoundArgument, find_current_argument};
pub use session::{CursorUpdate, EditorAction, EditorSession, is_index_complete};
pub use signature::{HelpWidget, SignatureHelp, signature_help};
pub use suggestions::{
    CompletionItem, CompletionKind, Field, Metadata, SuggestionBuilder, Suggestions,
};
pub use tokenizer::{CursorContext, TokenizedQuery, Tokenizer, split_query_by_args};
