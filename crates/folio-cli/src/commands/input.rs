use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use folio_core::Parsed;
use folio_core::ast::Document;
use folio_lib::{Limits, parse_json};

use super::CliError;

/// Input flags shared by every command.
pub struct InputArgs {
    pub path: Option<PathBuf>,
    pub limits: Option<PathBuf>,
    pub max_depth: Option<u32>,
    pub source: Option<PathBuf>,
    pub color: bool,
}

/// Event stream text and the name positions should carry.
pub struct Input {
    pub text: String,
    pub name: Option<String>,
}

pub fn read_input(path: Option<&Path>) -> Result<Input, CliError> {
    let Some(path) = path.filter(|p| p.as_os_str() != "-") else {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(CliError::Stdin)?;
        debug!(bytes = text.len(), "read event stream from stdin");
        return Ok(Input { text, name: None });
    };

    let text = read_file(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read event stream");
    Ok(Input {
        text,
        name: Some(path.to_string_lossy().into_owned()),
    })
}

pub fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Limits from `--limits`, then `--max-depth` on top.
pub fn load_limits(args: &InputArgs) -> Result<Limits, CliError> {
    let mut limits = match &args.limits {
        Some(path) => Limits::from_json(&read_file(path)?).map_err(folio_lib::Error::from)?,
        None => Limits::default(),
    };
    if let Some(depth) = args.max_depth {
        limits = limits.with_max_depth(depth);
    }
    limits.validate().map_err(folio_lib::Error::from)?;
    Ok(limits)
}

/// Read and parse the event stream named by `args`.
pub fn parse_input(args: &InputArgs) -> Result<Document<Parsed>, CliError> {
    let limits = load_limits(args)?;
    let input = read_input(args.path.as_deref())?;
    Ok(parse_json(&input.text, input.name.as_deref(), &limits)?)
}
