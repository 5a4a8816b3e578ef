mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::{CommandsParams, CompleteParams, MatchParams, SplitParams, parse_verbosity};

/// Value of `--color`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Unknown values fall back to `Auto`; clap rejects them before this runs.
    pub fn from_arg(value: Option<&str>) -> Self {
        match value {
            Some("always") => Self::Always,
            Some("never") => Self::Never,
            _ => Self::Auto,
        }
    }

    /// Results are the only colored output and go to stdout.
    pub fn should_colorize(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}
