//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, dump_command, events_command};

#[test]
fn check_reads_stdin_by_default() {
    let m = check_command().try_get_matches_from(["check"]).unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.input.path, None);
    assert_eq!(params.input.limits, None);
    assert_eq!(params.input.max_depth, None);
    assert_eq!(params.input.color, ColorChoice::Auto);
}

#[test]
fn check_extracts_input_flags() {
    let m = check_command()
        .try_get_matches_from([
            "check",
            "book.json",
            "--limits",
            "limits.json",
            "--max-depth",
            "12",
            "--source",
            "book.xml",
            "--color",
            "never",
        ])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.input.path, Some(PathBuf::from("book.json")));
    assert_eq!(params.input.limits, Some(PathBuf::from("limits.json")));
    assert_eq!(params.input.max_depth, Some(12));
    assert_eq!(params.input.source, Some(PathBuf::from("book.xml")));
    assert_eq!(params.input.color, ColorChoice::Never);
}

#[test]
fn max_depth_must_be_a_number() {
    let result = check_command().try_get_matches_from(["check", "--max-depth", "deep"]);
    assert!(result.is_err());
}

#[test]
fn color_rejects_unknown_values() {
    let result = check_command().try_get_matches_from(["check", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn dump_flags() {
    let m = dump_command()
        .try_get_matches_from(["dump", "book.json", "--parsed", "--positions", "--no-numbers"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.input.path, Some(PathBuf::from("book.json")));
    assert!(params.parsed);
    assert!(params.positions);
    assert!(!params.numbers);
}

#[test]
fn dump_defaults_to_numbered_compiled_tree() {
    let m = dump_command().try_get_matches_from(["dump"]).unwrap();
    let params = DumpParams::from_matches(&m);

    assert!(!params.parsed);
    assert!(!params.positions);
    assert!(params.numbers);
}

#[test]
fn events_takes_no_dump_flags() {
    let result = events_command().try_get_matches_from(["events", "--parsed"]);
    assert!(result.is_err());
}

#[test]
fn verbosity_is_global() {
    let m = build_cli()
        .try_get_matches_from(["folio", "check", "-vv", "book.json"])
        .unwrap();
    let (name, sub) = m.subcommand().unwrap();
    assert_eq!(name, "check");
    assert_eq!(verbosity(sub), 2);
}

#[test]
fn subcommand_is_required() {
    assert!(build_cli().try_get_matches_from(["folio"]).is_err());
}

#[test]
fn check_help_lists_input_flags() {
    let help = check_command().render_help().to_string();
    assert!(help.contains("--max-depth"));
    assert!(help.contains("--limits"));
    assert!(help.contains("--source"));
    assert!(!help.contains("--parsed"));
}

#[test]
fn explicit_color_choice_ignores_the_terminal() {
    assert!(ColorChoice::Always.should_colorize());
    assert!(!ColorChoice::Never.should_colorize());
}
