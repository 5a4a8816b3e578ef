//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the command `*Args` but keep the raw [`ColorChoice`];
//! the `From` impls resolve it against the terminal.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::complete::CompleteArgs;
use crate::commands::list::ListArgs;
use crate::commands::loader::Sources;
use crate::commands::matching::MatchArgs;
use crate::commands::split::SplitArgs;

pub struct SplitParams {
    pub query: String,
    pub cursor: Option<usize>,
    pub sources: Sources,
    pub json: bool,
    pub color: ColorChoice,
}

impl SplitParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query: parse_query(m),
            cursor: m.get_one::<usize>("cursor").copied(),
            sources: parse_sources(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<SplitParams> for SplitArgs {
    fn from(p: SplitParams) -> Self {
        Self {
            query: p.query,
            cursor: p.cursor,
            sources: p.sources,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct MatchParams {
    pub query: String,
    pub cursor: Option<usize>,
    pub sources: Sources,
    pub json: bool,
    pub color: ColorChoice,
}

impl MatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query: parse_query(m),
            cursor: m.get_one::<usize>("cursor").copied(),
            sources: parse_sources(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<MatchParams> for MatchArgs {
    fn from(p: MatchParams) -> Self {
        Self {
            query: p.query,
            cursor: p.cursor,
            sources: p.sources,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CompleteParams {
    pub query: String,
    pub cursor: Option<usize>,
    pub indexes: Vec<String>,
    pub fields: Vec<String>,
    pub prefixes: Vec<String>,
    pub sources: Sources,
    pub json: bool,
    pub color: ColorChoice,
}

impl CompleteParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query: parse_query(m),
            cursor: m.get_one::<usize>("cursor").copied(),
            indexes: parse_many(m, "index"),
            fields: parse_many(m, "field"),
            prefixes: parse_many(m, "prefix"),
            sources: parse_sources(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<CompleteParams> for CompleteArgs {
    fn from(p: CompleteParams) -> Self {
        Self {
            query: p.query,
            cursor: p.cursor,
            indexes: p.indexes,
            fields: p.fields,
            prefixes: p.prefixes,
            sources: p.sources,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CommandsParams {
    pub group: Option<String>,
    pub sources: Sources,
    pub json: bool,
    pub color: ColorChoice,
}

impl CommandsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            group: m.get_one::<String>("group").cloned(),
            sources: parse_sources(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<CommandsParams> for ListArgs {
    fn from(p: CommandsParams) -> Self {
        Self {
            group: p.group,
            sources: p.sources,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

/// Verbosity requested with `-v`, for the log filter.
pub fn parse_verbosity(m: &ArgMatches) -> u8 {
    m.get_count("verbose")
}

fn parse_query(m: &ArgMatches) -> String {
    m.get_one::<String>("query").cloned().unwrap_or_default()
}

fn parse_many(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_sources(m: &ArgMatches) -> Sources {
    Sources {
        spec: m.get_one::<PathBuf>("spec").cloned(),
        search_spec: m.get_one::<PathBuf>("search_spec").cloned(),
        config: m.get_one::<PathBuf>("config").cloned(),
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    ColorChoice::from_arg(m.get_one::<String>("color").map(String::as_str))
}
