//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Event stream file (positional).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON event stream (stdin when absent or \"-\")")
}

/// Document text the event positions refer to (--source).
pub fn source_arg() -> Arg {
    Arg::new("source")
        .long("source")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Document text, used to show diagnostics in context")
}

/// Limits file (--limits).
pub fn limits_arg() -> Arg {
    Arg::new("limits")
        .long("limits")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Load parser limits from a JSON file")
}

/// Nesting limit override (--max-depth).
pub fn max_depth_arg() -> Arg {
    Arg::new("max_depth")
        .long("max-depth")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Maximum element nesting depth")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log phase boundaries (-v) or every event and node (-vv)")
}

/// Dump the parsed tree instead of the compiled one (--parsed).
pub fn parsed_arg() -> Arg {
    Arg::new("parsed")
        .long("parsed")
        .action(ArgAction::SetTrue)
        .help("Show the parsed tree, skipping compilation")
}

/// Show source positions (--positions).
pub fn positions_arg() -> Arg {
    Arg::new("positions")
        .long("positions")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Hide content numbers (--no-numbers).
pub fn no_numbers_arg() -> Arg {
    Arg::new("no_numbers")
        .long("no-numbers")
        .action(ArgAction::SetTrue)
        .help("Hide content numbers")
}
