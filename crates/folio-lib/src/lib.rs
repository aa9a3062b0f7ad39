//! folio: incremental parser and tree compiler for structured documents.
//!
//! # Example
//!
//! ```
//! use folio_lib::{Event, Limits, compile, parse_events};
//!
//! let events = vec![
//!     Event::start("document", [("title", "Notes")]),
//!     Event::start("section", [("title", "One")]),
//!     Event::start("paragraph", []),
//!     Event::text("Hello."),
//!     Event::end("paragraph"),
//!     Event::end("section"),
//!     Event::end("document"),
//! ];
//!
//! let parsed = parse_events(events, &Limits::default()).expect("well-formed");
//! let compiled = compile(&parsed).expect("valid");
//! assert_eq!(compiled.document().sections[0].data.number.to_string(), "1");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod checked;
pub mod compile;
pub mod diagnostics;
pub mod dump;
pub mod emit;
pub mod event;
pub mod numbering;
pub mod parser;

mod fault;
mod limits;

#[cfg(test)]
mod checked_tests;
#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod numbering_tests;
#[cfg(test)]
mod test_support;

pub use checked::Checked;
pub use compile::{CompiledDocument, compile};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use dump::DumpPrinter;
pub use emit::to_events;
pub use event::{Attributes, Event};
pub use fault::InternalFault;
pub use limits::{LimitError, Limits};
pub use parser::{ParseError, ParseErrorKind, Parser, parse_events, parse_json};

pub use folio_core as core;

/// Errors that can occur while turning an event stream into a compiled tree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structural error in the event stream; the parse was aborted.
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("compilation failed with {} errors", .0.error_count())]
    CompileFailed(Diagnostics),

    /// Defect in the compiler itself, never caused by input.
    #[error("internal compiler fault: {0}")]
    Internal(#[from] InternalFault),

    #[error("malformed event stream: {0}")]
    Events(#[from] serde_json::Error),

    #[error(transparent)]
    Limits(#[from] LimitError),
}

pub type Result<T> = std::result::Result<T, Error>;
