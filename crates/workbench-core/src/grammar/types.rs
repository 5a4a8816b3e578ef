//! Grammar type definitions.

use serde::Serialize;

/// Leaf value types of the command reference format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueType {
    String,
    Integer,
    Double,
    Key,
    Pattern,
    UnixTime,
    /// Function of a nested expression language (`APPLY`, `FILTER`).
    Function,
    /// Any type name the loader does not know.
    Unknown,
}

/// Grammar node variants.
///
/// A node whose `token` is set and whose kind is not [`ArgKind::PureToken`]
/// is a keyword that demands a following value (`LIMIT offset num`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArgKind {
    /// Keyword with no value (`NOCONTENT`).
    PureToken,
    /// Ordered sequence of child arguments.
    Block,
    /// Exactly one of the child arguments.
    OneOf,
    /// Leaf argument typed by the user.
    Value(ValueType),
}

/// One node of a command grammar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandArg {
    /// Argument name, unique among siblings. Empty for a command's own token.
    pub name: String,
    pub kind: ArgKind,
    /// Literal keyword (case-insensitive).
    pub token: Option<String>,
    pub optional: bool,
    pub multiple: bool,
    /// The argument body is a nested expression language; `arguments` lists its functions.
    pub expression: bool,
    /// Name of an external syntax the argument is written in.
    pub dsl: Option<String>,
    pub summary: Option<String>,
    /// Block children, one-of alternatives, or expression functions.
    pub arguments: Vec<CommandArg>,
}

impl CommandArg {
    fn new(name: impl Into<String>, kind: ArgKind) -> Self {
        Self {
            name: name.into(),
            kind,
            token: None,
            optional: false,
            multiple: false,
            expression: false,
            dsl: None,
            summary: None,
            arguments: Vec::new(),
        }
    }

    /// Leaf argument.
    pub fn value(name: impl Into<String>, value_type: ValueType) -> Self {
        Self::new(name, ArgKind::Value(value_type))
    }

    /// Keyword without a value. The token doubles as the name.
    pub fn pure_token(token: impl Into<String>) -> Self {
        let token = token.into();
        let mut arg = Self::new(token.to_lowercase(), ArgKind::PureToken);
        arg.token = Some(token);
        arg
    }

    /// Unnamed pure token, used for a command's own keyword.
    pub fn own_token(token: impl Into<String>) -> Self {
        let mut arg = Self::new(String::new(), ArgKind::PureToken);
        arg.token = Some(token.into());
        arg
    }

    pub fn block(name: impl Into<String>, arguments: Vec<CommandArg>) -> Self {
        let mut arg = Self::new(name, ArgKind::Block);
        arg.arguments = arguments;
        arg
    }

    pub fn one_of(name: impl Into<String>, arguments: Vec<CommandArg>) -> Self {
        let mut arg = Self::new(name, ArgKind::OneOf);
        arg.arguments = arguments;
        arg
    }

    /// Set the literal keyword.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Mark as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark as repeatable.
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Mark as a nested expression with the given functions.
    pub fn expression(mut self, functions: Vec<CommandArg>) -> Self {
        self.expression = true;
        self.arguments = functions;
        self
    }

    /// Set the external syntax name.
    pub fn with_dsl(mut self, dsl: impl Into<String>) -> Self {
        self.dsl = Some(dsl.into());
        self
    }

    /// Set the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn is_block(&self) -> bool {
        self.kind == ArgKind::Block
    }

    pub fn is_one_of(&self) -> bool {
        self.kind == ArgKind::OneOf
    }

    pub fn is_pure_token(&self) -> bool {
        self.kind == ArgKind::PureToken
    }

    /// Whether the node's own keyword equals `word`, ignoring case.
    pub fn has_token(&self, word: &str) -> bool {
        self.token
            .as_deref()
            .is_some_and(|token| token.eq_ignore_ascii_case(word))
    }

    /// Keyword of the first child, if any.
    pub fn first_token(&self) -> Option<&str> {
        self.arguments.first().and_then(|arg| arg.token.as_deref())
    }

    /// Whether any one-of alternative has the keyword `word`.
    pub fn has_alternative(&self, word: &str) -> bool {
        self.arguments.iter().any(|alt| alt.has_token(word))
    }
}

/// Which specification a command was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum CommandProvider {
    #[default]
    Main,
    /// Search module specification; overrides same-named main entries.
    Search,
}

/// Root grammar entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    pub name: String,
    pub summary: Option<String>,
    pub since: Option<String>,
    pub group: Option<String>,
    pub provider: CommandProvider,
    pub arguments: Vec<CommandArg>,
}

impl Command {
    pub fn new(name: impl Into<String>, arguments: Vec<CommandArg>) -> Self {
        Self {
            name: name.into(),
            summary: None,
            since: None,
            group: None,
            provider: CommandProvider::Main,
            arguments,
        }
    }

    /// Block form of the command: its name as token and an own
    /// [`CommandArg::own_token`] in front of the arguments.
    pub fn tree(&self) -> CommandArg {
        let mut arguments = Vec::with_capacity(self.arguments.len() + 1);
        arguments.push(CommandArg::own_token(self.name.clone()));
        arguments.extend(self.arguments.iter().cloned());

        let mut tree = CommandArg::block(self.name.clone(), arguments).with_token(self.name.clone());
        tree.summary = self.summary.clone();
        tree
    }
}
