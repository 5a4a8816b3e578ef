//! JSON deserialization for command reference files.
//!
//! The reference is an object keyed by command name. Argument nodes use a
//! lowercase `type` string (`pure-token`, `block`, `oneof`, `integer`, ...).

use indexmap::IndexMap;
use serde::Deserialize;

use super::types::{ArgKind, Command, CommandArg, CommandProvider, ValueType};

/// Error during command reference loading.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{command}: argument '{argument}' is a {kind} without arguments")]
    EmptyGroup {
        command: String,
        argument: String,
        kind: &'static str,
    },
}

/// Parse one reference file into commands, preserving definition order.
pub(crate) fn parse_commands(
    json: &str,
    provider: CommandProvider,
) -> Result<Vec<Command>, GrammarError> {
    let raw: IndexMap<String, RawCommand> = serde_json::from_str(json)?;
    raw.into_iter()
        .map(|(name, command)| command.into_command(name, provider))
        .collect()
}

/// Raw command matching the reference JSON format.
#[derive(Debug, Deserialize)]
struct RawCommand {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    since: Option<String>,
    #[serde(default)]
    group: Option<String>,
    #[serde(default)]
    arguments: Vec<RawArg>,
}

impl RawCommand {
    fn into_command(
        self,
        name: String,
        provider: CommandProvider,
    ) -> Result<Command, GrammarError> {
        let arguments = self
            .arguments
            .into_iter()
            .map(|arg| arg.into_arg(&name))
            .collect::<Result<_, _>>()?;

        Ok(Command {
            name,
            summary: self.summary,
            since: self.since,
            group: self.group,
            provider,
            arguments,
        })
    }
}

/// Raw argument node. Unknown fields (`key_spec_index`, `display_text`) are ignored.
#[derive(Debug, Deserialize)]
struct RawArg {
    #[serde(default)]
    name: String,
    #[serde(default, rename = "type")]
    type_name: Option<String>,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    multiple: bool,
    #[serde(default)]
    expression: bool,
    #[serde(default)]
    dsl: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default, rename = "enum")]
    variants: Vec<String>,
    #[serde(default)]
    arguments: Vec<RawArg>,
}

impl RawArg {
    fn into_arg(self, command: &str) -> Result<CommandArg, GrammarError> {
        let kind = match self.type_name.as_deref() {
            Some("pure-token") => ArgKind::PureToken,
            Some("block") => ArgKind::Block,
            // `enum` lists bare keywords; it behaves as a one-of of pure tokens.
            Some("oneof") | Some("enum") => ArgKind::OneOf,
            Some("string") | None => ArgKind::Value(ValueType::String),
            Some("integer") => ArgKind::Value(ValueType::Integer),
            Some("double") => ArgKind::Value(ValueType::Double),
            Some("key") => ArgKind::Value(ValueType::Key),
            Some("pattern") => ArgKind::Value(ValueType::Pattern),
            Some("unix-time") => ArgKind::Value(ValueType::UnixTime),
            Some("function") => ArgKind::Value(ValueType::Function),
            Some(_) => ArgKind::Value(ValueType::Unknown),
        };

        let mut arguments = self
            .arguments
            .into_iter()
            .map(|arg| arg.into_arg(command))
            .collect::<Result<Vec<_>, _>>()?;
        arguments.extend(self.variants.into_iter().map(CommandArg::pure_token));

        let group_kind = match kind {
            ArgKind::Block => Some("block"),
            ArgKind::OneOf => Some("oneof"),
            _ => None,
        };
        if let Some(group_kind) = group_kind.filter(|_| arguments.is_empty()) {
            return Err(GrammarError::EmptyGroup {
                command: command.to_string(),
                argument: self.name,
                kind: group_kind,
            });
        }

        Ok(CommandArg {
            name: self.name,
            kind,
            token: self.token,
            optional: self.optional,
            multiple: self.multiple,
            expression: self.expression,
            dsl: self.dsl,
            summary: self.summary,
            arguments,
        })
    }
}
