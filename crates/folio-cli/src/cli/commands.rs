//! Command builders for the CLI.
//!
//! Every command reads an event stream and accepts the same input flags.

use clap::Command;

use super::args::*;

/// Add the input, limit and rendering flags every command shares.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(input_arg())
        .arg(limits_arg())
        .arg(max_depth_arg())
        .arg(source_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("folio")
        .about("Parse, number and check structured documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(events_command())
}

/// Parse and compile, reporting every problem found.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Check a document")
        .override_usage(
            "\
  folio check [FILE]
  folio check [FILE] --source <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  folio check book.json                     # silent when the document is valid
  folio check book.json --source book.xml   # show problems in the document text
  cat book.json | folio check               # read events from stdin"#,
        );

    with_input_args(cmd)
}

/// Print the tree outline.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the document tree")
        .override_usage(
            "\
  folio dump [FILE]
  folio dump [FILE] --parsed",
        )
        .after_help(
            r#"EXAMPLES:
  folio dump book.json                  # compiled tree with content numbers
  folio dump book.json --positions      # include line:column of every node
  folio dump book.json --parsed         # tree as parsed, before compilation"#,
        )
        .arg(parsed_arg())
        .arg(positions_arg())
        .arg(no_numbers_arg());

    with_input_args(cmd)
}

/// Re-emit the canonical event stream.
pub fn events_command() -> Command {
    let cmd = Command::new("events")
        .about("Print the canonical event stream of a document")
        .after_help(
            r#"EXAMPLES:
  folio events book.json > canonical.json"#,
        );

    with_input_args(cmd)
}
