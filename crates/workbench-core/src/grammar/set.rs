//! Process-wide command index.

use indexmap::IndexMap;

use super::json::{GrammarError, parse_commands};
use super::types::{Command, CommandArg, CommandProvider};

const BUNDLED_COMMANDS: &str = include_str!("../../data/commands.json");
const BUNDLED_SEARCH_COMMANDS: &str = include_str!("../../data/search_commands.json");

/// All known commands, indexed by uppercase name.
///
/// Built once and shared read-only. Alongside each [`Command`] the set keeps
/// its block form ([`Command::tree`]) so the matcher can walk commands and
/// nested blocks uniformly.
#[derive(Debug, Clone, Default)]
pub struct CommandSet {
    commands: IndexMap<String, Command>,
    trees: Vec<CommandArg>,
}

impl CommandSet {
    /// Parse the main reference and the search reference.
    ///
    /// Search entries replace main entries with the same name.
    pub fn from_json(main: &str, search: &str) -> Result<Self, GrammarError> {
        let mut commands = parse_commands(main, CommandProvider::Main)?;
        commands.extend(parse_commands(search, CommandProvider::Search)?);
        Ok(Self::from_commands(commands))
    }

    /// Reference compiled into the binary.
    pub fn bundled() -> Result<Self, GrammarError> {
        Self::from_json(BUNDLED_COMMANDS, BUNDLED_SEARCH_COMMANDS)
    }

    /// Later commands replace earlier ones with the same name.
    pub fn from_commands(commands: impl IntoIterator<Item = Command>) -> Self {
        let mut map: IndexMap<String, Command> = IndexMap::new();
        for command in commands {
            map.insert(command.name.to_uppercase(), command);
        }
        let trees = map.values().map(Command::tree).collect();
        Self {
            commands: map,
            trees,
        }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(&name.to_uppercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    /// Command names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.values().map(|c| c.name.as_str())
    }

    /// Block forms of all commands, in definition order.
    pub fn trees(&self) -> &[CommandArg] {
        &self.trees
    }

    /// Block form of one command, case-insensitive.
    pub fn tree(&self, name: &str) -> Option<&CommandArg> {
        self.commands
            .get_index_of(&name.to_uppercase())
            .map(|index| &self.trees[index])
    }

    /// Longest command name that `line` starts with, followed by whitespace or end of line.
    pub fn match_prefix(&self, line: &str) -> Option<&Command> {
        let upper = line.to_uppercase();
        self.commands
            .iter()
            .filter(|(name, _)| {
                upper.starts_with(name.as_str())
                    && upper[name.len()..]
                        .chars()
                        .next()
                        .is_none_or(char::is_whitespace)
            })
            .max_by_key(|(name, _)| name.len())
            .map(|(_, command)| command)
    }
}
