use folio_core::Colors;
use folio_lib::{DumpPrinter, compile};

use super::CliError;
use super::input::{InputArgs, parse_input};

pub struct DumpArgs {
    pub input: InputArgs,
    pub parsed: bool,
    pub positions: bool,
    pub numbers: bool,
}

pub fn execute(args: &DumpArgs) -> Result<String, CliError> {
    let parsed = parse_input(&args.input)?;
    let colors = Colors::new(args.input.color);

    if args.parsed {
        return Ok(DumpPrinter::new(&parsed)
            .positions(args.positions)
            .colors(colors)
            .render());
    }

    let compiled = compile(&parsed)?;
    Ok(DumpPrinter::new(compiled.document())
        .numbers(args.numbers)
        .positions(args.positions)
        .colors(colors)
        .render())
}

pub fn run(args: DumpArgs) {
    match execute(&args) {
        Ok(out) => print!("{out}"),
        Err(err) => super::fail(&err, args.input.source.as_deref(), args.input.color),
    }
}
