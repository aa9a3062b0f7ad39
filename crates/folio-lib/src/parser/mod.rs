//! Incremental parser from structural events to a parsed document tree.
//!
//! # Architecture
//!
//! The parser keeps a stack of builder frames, one per open element. A
//! start event vets the new element against the frame beneath it (kind,
//! section shape, table part order) and pushes a frame; text is routed to
//! the top frame; an end event pops the top frame, finishes it into an
//! immutable node and hands that node to the new top frame.
//!
//! Structural problems are fatal: parsing stops at the first one and the
//! parser keeps returning it. Attribute values are validated as the element
//! opens, table rows are checked against the header as they complete and
//! once more when the table closes.

mod attributes;
mod core;
mod element;
mod error;
mod frame;
mod invariants;

#[cfg(test)]
mod attributes_tests;
#[cfg(test)]
mod stream_tests;

pub use core::Parser;
pub use element::Element;
pub use error::{ParseError, ParseErrorKind};

use folio_core::Parsed;
use folio_core::ast::Document;

use crate::Limits;
use crate::event::{self, Event};

/// Parse a complete event sequence.
pub fn parse_events(
    events: impl IntoIterator<Item = Event>,
    limits: &Limits,
) -> Result<Document<Parsed>, ParseError> {
    let mut parser = Parser::new(limits.clone());
    for event in events {
        parser.feed(event)?;
    }
    parser.finish()
}

/// Parse the JSON event transport. `file` names the source in positions.
pub fn parse_json(
    json: &str,
    file: Option<&str>,
    limits: &Limits,
) -> crate::Result<Document<Parsed>> {
    let events = event::from_json(json)?;
    let mut parser = Parser::new(limits.clone());
    if let Some(file) = file {
        parser = parser.with_file(file);
    }
    for event in events {
        parser.feed(event)?;
    }
    Ok(parser.finish()?)
}
