pub mod check;
pub mod dump;
pub mod events;
pub mod input;


use std::io;
use std::path::Path;

use folio_lib::Error;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to write event stream: {0}")]
    Emit(#[source] serde_json::Error),

    #[error(transparent)]
    Folio(#[from] Error),
}

/// Text printed to stderr for a failed command.
///
/// Compile diagnostics are shown against `source` when it can be read.
pub fn render_error(err: &CliError, source: Option<&Path>, color: bool) -> String {
    let mut out = match err {
        CliError::Folio(Error::CompileFailed(diagnostics)) => {
            let text = source.and_then(|path| match input::read_file(path) {
                Ok(text) => Some(text),
                Err(err) => {
                    tracing::warn!(%err, "showing diagnostics without source");
                    None
                }
            });
            let printer = diagnostics.printer().colored(color);
            match &text {
                Some(text) => printer.source(text).render(),
                None => printer.render(),
            }
        }
        CliError::Folio(Error::Parse(parse)) => {
            format!("{}: error: {}", parse.lexical, parse.kind)
        }
        other => format!("error: {other}"),
    };

    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Print the error for a failed command and exit with status 1.
pub fn fail(err: &CliError, source: Option<&Path>, color: bool) -> ! {
    eprint!("{}", render_error(err, source, color));
    std::process::exit(1);
}
