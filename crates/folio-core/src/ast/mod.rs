//! Document tree.
//!
//! Every node is generic over a phase payload `D` carried in its `data`
//! field. Node families that share a position in the tree (inline content,
//! table-cell content, link content, subsection content, section bodies) are
//! enums, so every dispatch over them is exhaustive.
//!
//! Kind tags in [`kinds`] name variants for logs, diagnostics and tests; they
//! are derived from the variants and never stored.

mod block;
mod inline;
mod kinds;
mod node_ref;
mod table;

#[cfg(test)]
mod kinds_tests;
#[cfg(test)]
mod node_ref_tests;

pub use block::{
    Document, Footnote, FormalItem, Paragraph, Section, SectionBody, Subsection, SubsectionContent,
};
pub use inline::{
    FootnoteReference, FormalItemReference, Image, ImageSize, Inline, Link, LinkContent,
    LinkExternal, ListItem, ListOrdered, ListUnordered, TableCellContent, Term, Text, Verbatim,
};
pub use kinds::{
    BlockKind, ContentKind, InlineKind, LinkContentKind, SectionKind, SubsectionContentKind,
    TableCellContentKind,
};
pub use node_ref::{NodeRef, Walk};
pub use table::{Table, TableBody, TableCell, TableColumnName, TableHeader, TableRow};

use crate::{ContentNumber, Lexical};

/// Access to what every payload carries.
pub trait Payload {
    fn lexical(&self) -> &Lexical;

    /// Content number, once one has been assigned.
    fn number(&self) -> Option<&ContentNumber> {
        None
    }
}

/// Parse-phase payload: source position only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Parsed {
    pub lexical: Lexical,
}

impl Parsed {
    pub fn at(lexical: Lexical) -> Self {
        Self { lexical }
    }
}

impl Payload for Parsed {
    fn lexical(&self) -> &Lexical {
        &self.lexical
    }
}

/// Dense identifier of a compiled node.
///
/// Ids are handed out in pre-order, so the document is always `NodeId(0)`
/// and an id indexes the pre-order walk of the compiled tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Compile-phase payload.
///
/// The parent back-reference is not stored here: it lives in the compiled
/// document's parent table, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Compiled {
    pub id: NodeId,
    pub number: ContentNumber,
    pub lexical: Lexical,
}

impl Payload for Compiled {
    fn lexical(&self) -> &Lexical {
        &self.lexical
    }

    fn number(&self) -> Option<&ContentNumber> {
        Some(&self.number)
    }
}
