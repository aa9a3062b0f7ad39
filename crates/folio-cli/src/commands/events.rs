use folio_lib::event::to_json;
use folio_lib::to_events;

use super::CliError;
use super::input::{InputArgs, parse_input};

pub struct EventsArgs {
    pub input: InputArgs,
}

pub fn execute(args: &EventsArgs) -> Result<String, CliError> {
    let parsed = parse_input(&args.input)?;
    let mut out = to_json(&to_events(&parsed)).map_err(CliError::Emit)?;
    out.push('\n');
    Ok(out)
}

pub fn run(args: EventsArgs) {
    match execute(&args) {
        Ok(out) => print!("{out}"),
        Err(err) => super::fail(&err, args.input.source.as_deref(), args.input.color),
    }
}
