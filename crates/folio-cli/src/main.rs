mod cli;
mod commands;
mod logging;


use cli::{CheckParams, DumpParams, EventsParams, build_cli, verbosity};

fn main() {
    let matches = build_cli().get_matches();

    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this")
    };
    logging::init(verbosity(m));

    match name {
        "check" => commands::check::run(CheckParams::from_matches(m).into()),
        "dump" => commands::dump::run(DumpParams::from_matches(m).into()),
        "events" => commands::events::run(EventsParams::from_matches(m).into()),
        _ => unreachable!("clap should have caught this"),
    }
}
