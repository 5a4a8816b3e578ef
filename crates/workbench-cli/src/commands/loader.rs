//! Reading the query, the command specification and the configuration.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;
use workbench_core::{CommandSet, GrammarError};
use workbench_query::{Config, ConfigError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("invalid command specification: {0}")]
    Grammar(#[from] GrammarError),

    #[error("{}: {source}", path.display())]
    Config { path: PathBuf, source: ConfigError },

    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Files the grammar and the configuration come from. `None` means built-in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sources {
    pub spec: Option<PathBuf>,
    pub search_spec: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl Sources {
    /// The bundled command set, or the given specifications.
    ///
    /// Once either file is given, the other one defaults to an empty object.
    pub fn load_commands(&self) -> Result<CommandSet, CliError> {
        if self.spec.is_none() && self.search_spec.is_none() {
            return Ok(CommandSet::bundled()?);
        }

        let main = read_or_empty(self.spec.as_deref())?;
        let search = read_or_empty(self.search_spec.as_deref())?;
        let commands = CommandSet::from_json(&main, &search)?;
        debug!(commands = commands.len(), "loaded command specification");
        Ok(commands)
    }

    pub fn load_config(&self) -> Result<Config, CliError> {
        let Some(path) = &self.config else {
            return Ok(Config::default());
        };
        let json = read_file(path)?;
        Config::from_json(&json).map_err(|source| CliError::Config {
            path: path.clone(),
            source,
        })
    }
}

/// Query text from the command line, or stdin for `-`.
pub fn load_query(query: &str) -> Result<String, CliError> {
    if query != "-" {
        return Ok(query.to_string());
    }

    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(CliError::Stdin)?;
    Ok(trim_final_newline(&buf).to_string())
}

/// Drop one trailing line break, so the default cursor stays on the last line.
pub fn trim_final_newline(text: &str) -> &str {
    match text.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => text,
    }
}

fn read_or_empty(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => read_file(path),
        None => Ok("{}".to_string()),
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
