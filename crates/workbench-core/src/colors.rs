//! ANSI color codes for terminal output.
//!
//! - Blue: command names and keywords
//! - Green: argument values and completion labels
//! - Yellow: the argument the cursor sits on
//! - Dim: details, flags, offsets

/// ANSI color palette for CLI output. Standard 16-color codes only.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        yellow: "\x1b[33m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        yellow: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    /// Wrap `text` in `color` and a reset.
    pub fn paint(&self, color: &'static str, text: &str) -> String {
        format!("{color}{text}{}", self.reset)
    }
}
