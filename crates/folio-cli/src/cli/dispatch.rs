//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror the command `*Args` but are populated from clap
//! - `from_matches()` pulls the fields a command uses
//! - `From<*Params>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::events::EventsArgs;
use crate::commands::input::InputArgs;

/// Flags shared by every command.
pub struct InputParams {
    pub path: Option<PathBuf>,
    pub limits: Option<PathBuf>,
    pub max_depth: Option<u32>,
    pub source: Option<PathBuf>,
    pub color: ColorChoice,
}

impl InputParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: m.get_one::<PathBuf>("input").cloned(),
            limits: m.get_one::<PathBuf>("limits").cloned(),
            max_depth: m.get_one::<u32>("max_depth").copied(),
            source: m.get_one::<PathBuf>("source").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<InputParams> for InputArgs {
    fn from(p: InputParams) -> Self {
        Self {
            path: p.path,
            limits: p.limits,
            max_depth: p.max_depth,
            source: p.source,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub input: InputParams,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input.into(),
        }
    }
}

pub struct DumpParams {
    pub input: InputParams,
    pub parsed: bool,
    pub positions: bool,
    pub numbers: bool,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            parsed: m.get_flag("parsed"),
            positions: m.get_flag("positions"),
            numbers: !m.get_flag("no_numbers"),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input: p.input.into(),
            parsed: p.parsed,
            positions: p.positions,
            numbers: p.numbers,
        }
    }
}

pub struct EventsParams {
    pub input: InputParams,
}

impl EventsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
        }
    }
}

impl From<EventsParams> for EventsArgs {
    fn from(p: EventsParams) -> Self {
        Self {
            input: p.input.into(),
        }
    }
}

/// Number of `-v` flags given anywhere on the command line.
pub fn verbosity(m: &ArgMatches) -> u8 {
    m.get_count("verbose")
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
