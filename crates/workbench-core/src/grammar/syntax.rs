//! Reference-style rendering of argument syntax.
//!
//! ```text
//! SET key value [NX | XX] [GET]
//! ZADD key [NX | XX] score member [score member ...]
//! ```

use super::types::{ArgKind, Command, CommandArg};

impl CommandArg {
    /// Render the argument as it appears in command documentation.
    pub fn syntax(&self) -> String {
        let mut body = match self.kind {
            ArgKind::PureToken => self
                .token
                .clone()
                .unwrap_or_else(|| self.name.to_uppercase()),
            ArgKind::Value(_) => with_token(self.token.as_deref(), &self.name),
            ArgKind::Block => with_token(self.token.as_deref(), &join(&self.arguments, " ")),
            ArgKind::OneOf => with_token(self.token.as_deref(), &join(&self.arguments, " | ")),
        };

        if self.multiple {
            body = format!("{body} [{body} ...]");
        }

        if self.optional {
            format!("[{body}]")
        } else if self.kind == ArgKind::OneOf {
            format!("<{body}>")
        } else {
            body
        }
    }
}

impl Command {
    /// Render the full command line: name followed by all arguments.
    pub fn syntax(&self) -> String {
        if self.arguments.is_empty() {
            return self.name.clone();
        }
        format!("{} {}", self.name, join(&self.arguments, " "))
    }
}

fn with_token(token: Option<&str>, body: &str) -> String {
    match token {
        Some(token) if !body.is_empty() => format!("{token} {body}"),
        Some(token) => token.to_string(),
        None => body.to_string(),
    }
}

fn join(args: &[CommandArg], separator: &str) -> String {
    args.iter()
        .map(CommandArg::syntax)
        .collect::<Vec<_>>()
        .join(separator)
}
