use tracing::debug;

use folio_lib::compile;

use super::CliError;
use super::input::{InputArgs, parse_input};

pub struct CheckArgs {
    pub input: InputArgs,
}

pub fn execute(args: &CheckArgs) -> Result<(), CliError> {
    let parsed = parse_input(&args.input)?;
    let compiled = compile(&parsed)?;
    debug!(nodes = compiled.len(), "document is valid");
    Ok(())
}

pub fn run(args: CheckArgs) {
    // Silent on success
    if let Err(err) = execute(&args) {
        super::fail(&err, args.input.source.as_deref(), args.input.color);
    }
}
