//! Configuration for the completion engine.

use serde::Deserialize;

/// Two-word keywords the tokenizer merges into one argument.
pub const DEFAULT_COMPOSITE_ARGS: &[&str] = &["LOAD *"];

/// Command name prefixes that receive argument suggestions.
pub const DEFAULT_SUGGESTION_PREFIXES: &[&str] = &["FT."];

/// Error while reading a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("invalid configuration: {0}")]
pub struct ConfigError(#[from] serde_json::Error);

/// Configuration for tokenizing and suggesting.
///
/// Every field has a default, so a JSON file only needs the keys it changes:
///
/// ```json
/// { "composite_args": ["LOAD *", "WITH SCORES"], "suggestion_prefixes": ["FT.", "JSON."] }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub(crate) composite_args: Vec<String>,
    pub(crate) suggestion_prefixes: Vec<String>,
    /// Character that starts a field reference inside a query (`@title`).
    pub(crate) field_start_symbol: char,
    /// Argument name that triggers index suggestions.
    pub(crate) index_arg_name: String,
    /// Argument name that defers to signature help.
    pub(crate) query_arg_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            composite_args: to_owned(DEFAULT_COMPOSITE_ARGS),
            suggestion_prefixes: to_owned(DEFAULT_SUGGESTION_PREFIXES),
            field_start_symbol: '@',
            index_arg_name: "index".to_string(),
            query_arg_name: "query".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the composite keyword allow-list.
    pub fn composite_args<S: Into<String>>(mut self, args: impl IntoIterator<Item = S>) -> Self {
        self.composite_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the command prefixes that receive argument suggestions.
    pub fn suggestion_prefixes<S: Into<String>>(
        mut self,
        prefixes: impl IntoIterator<Item = S>,
    ) -> Self {
        self.suggestion_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the field start symbol.
    pub fn field_start_symbol(mut self, symbol: char) -> Self {
        self.field_start_symbol = symbol;
        self
    }

    /// Set the argument name that triggers index suggestions.
    pub fn index_arg_name(mut self, name: impl Into<String>) -> Self {
        self.index_arg_name = name.into();
        self
    }

    /// Set the argument name that defers to signature help.
    pub fn query_arg_name(mut self, name: impl Into<String>) -> Self {
        self.query_arg_name = name.into();
        self
    }

    pub fn composite(&self) -> &[String] {
        &self.composite_args
    }

    /// Whether argument suggestions are computed for `command`.
    pub fn suggests_for(&self, command: &str) -> bool {
        let upper = command.to_uppercase();
        self.suggestion_prefixes
            .iter()
            .any(|prefix| upper.starts_with(&prefix.to_uppercase()))
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
