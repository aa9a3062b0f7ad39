//! Tree compiler: turns a parsed document into a numbered, parent-linked one.
//!
//! The compiled tree mirrors the parsed one node for node. Each non-root node
//! gets a dense [`NodeId`](folio_core::NodeId) in pre-order and a content
//! number from a [`Numbering`](crate::numbering::Numbering) stack. The parent
//! of every node is its nearest enclosing block.
//!
//! Siblings are compiled independently, so one bad table row does not hide
//! problems in the rows and sections after it. Compilation fails with all
//! [`Diagnostics`](crate::Diagnostics) found, in document order.
//!
//! # Module Organization
//!
//! - `core`: compiler state, numbering scopes, block ids, parent assignment
//! - `blocks`: document, sections, subsections, subsection content
//! - `inline`: inline, link and table-cell content
//! - `table`: tables and row arity checks
//! - `compiled`: the result and its lookups

mod blocks;
mod compiled;
mod core;
mod inline;
mod parents;
mod table;

#[cfg(test)]
mod lookup_tests;

use tracing::debug;

use folio_core::Parsed;
use folio_core::ast::Document;

pub use compiled::CompiledDocument;

use self::core::Compiler;

/// Compile a parsed document.
///
/// Fails with [`Error::CompileFailed`](crate::Error::CompileFailed) when the
/// document has diagnostics and with [`Error::Internal`](crate::Error::Internal)
/// when the compiler broke one of its own invariants.
pub fn compile(document: &Document<Parsed>) -> crate::Result<CompiledDocument> {
    debug!(sections = document.sections.len(), "compiling document");
    let mut compiler = Compiler::new();
    let result = compiler.document(document);
    compiler.finish(result)
}
