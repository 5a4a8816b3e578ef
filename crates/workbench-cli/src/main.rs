#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod cli;
mod commands;

use clap::ArgMatches;
use tracing_subscriber::EnvFilter;

use cli::{CommandsParams, CompleteParams, MatchParams, SplitParams, build_cli, parse_verbosity};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("split", m)) => {
            init_logging(m);
            commands::split::run(SplitParams::from_matches(m).into());
        }
        Some(("match", m)) => {
            init_logging(m);
            commands::matching::run(MatchParams::from_matches(m).into());
        }
        Some(("complete", m)) => {
            init_logging(m);
            commands::complete::run(CompleteParams::from_matches(m).into());
        }
        Some(("commands", m)) => {
            init_logging(m);
            commands::list::run(CommandsParams::from_matches(m).into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Log to stderr. `-v` flags win over `RUST_LOG`, which wins over `warn`.
fn init_logging(m: &ArgMatches) {
    let filter = match parse_verbosity(m) {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
