use std::fmt;

use super::block::{SectionBody, SubsectionContent};
use super::inline::{Inline, LinkContent, TableCellContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Inline,
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    SubsectionContent,
    Subsection,
    Section,
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    WithSections,
    WithSubsections,
    WithSubsectionContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubsectionContentKind {
    Paragraph,
    FormalItem,
    Footnote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineKind {
    Text,
    Term,
    Image,
    Link,
    LinkExternal,
    FootnoteReference,
    FormalItemReference,
    Verbatim,
    ListOrdered,
    ListUnordered,
    Table,
}

/// Inline kinds permitted inside a table cell: everything but `Table`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableCellContentKind {
    Text,
    Term,
    Image,
    Link,
    LinkExternal,
    FootnoteReference,
    FormalItemReference,
    Verbatim,
    ListOrdered,
    ListUnordered,
}

/// Inline kinds permitted inside a link body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkContentKind {
    Text,
    Image,
}

impl InlineKind {
    pub fn name(self) -> &'static str {
        match self {
            InlineKind::Text => "text",
            InlineKind::Term => "term",
            InlineKind::Image => "image",
            InlineKind::Link => "link",
            InlineKind::LinkExternal => "link-external",
            InlineKind::FootnoteReference => "footnote-ref",
            InlineKind::FormalItemReference => "formal-item-ref",
            InlineKind::Verbatim => "verbatim",
            InlineKind::ListOrdered => "list-ordered",
            InlineKind::ListUnordered => "list-unordered",
            InlineKind::Table => "table",
        }
    }
}

impl From<TableCellContentKind> for InlineKind {
    fn from(kind: TableCellContentKind) -> Self {
        match kind {
            TableCellContentKind::Text => InlineKind::Text,
            TableCellContentKind::Term => InlineKind::Term,
            TableCellContentKind::Image => InlineKind::Image,
            TableCellContentKind::Link => InlineKind::Link,
            TableCellContentKind::LinkExternal => InlineKind::LinkExternal,
            TableCellContentKind::FootnoteReference => InlineKind::FootnoteReference,
            TableCellContentKind::FormalItemReference => InlineKind::FormalItemReference,
            TableCellContentKind::Verbatim => InlineKind::Verbatim,
            TableCellContentKind::ListOrdered => InlineKind::ListOrdered,
            TableCellContentKind::ListUnordered => InlineKind::ListUnordered,
        }
    }
}

impl From<LinkContentKind> for InlineKind {
    fn from(kind: LinkContentKind) -> Self {
        match kind {
            LinkContentKind::Text => InlineKind::Text,
            LinkContentKind::Image => InlineKind::Image,
        }
    }
}

impl fmt::Display for InlineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TableCellContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(InlineKind::from(*self).name())
    }
}

impl fmt::Display for LinkContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(InlineKind::from(*self).name())
    }
}

impl fmt::Display for SubsectionContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SubsectionContentKind::Paragraph => "paragraph",
            SubsectionContentKind::FormalItem => "formal-item",
            SubsectionContentKind::Footnote => "footnote",
        })
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SectionKind::WithSections => "sections",
            SectionKind::WithSubsections => "subsections",
            SectionKind::WithSubsectionContent => "subsection content",
        })
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockKind::SubsectionContent => "subsection content",
            BlockKind::Subsection => "subsection",
            BlockKind::Section => "section",
            BlockKind::Document => "document",
        })
    }
}

impl<D> Inline<D> {
    pub fn kind(&self) -> InlineKind {
        match self {
            Inline::Text(_) => InlineKind::Text,
            Inline::Term(_) => InlineKind::Term,
            Inline::Image(_) => InlineKind::Image,
            Inline::Link(_) => InlineKind::Link,
            Inline::LinkExternal(_) => InlineKind::LinkExternal,
            Inline::FootnoteReference(_) => InlineKind::FootnoteReference,
            Inline::FormalItemReference(_) => InlineKind::FormalItemReference,
            Inline::Verbatim(_) => InlineKind::Verbatim,
            Inline::ListOrdered(_) => InlineKind::ListOrdered,
            Inline::ListUnordered(_) => InlineKind::ListUnordered,
            Inline::Table(_) => InlineKind::Table,
        }
    }
}

impl<D> TableCellContent<D> {
    pub fn kind(&self) -> TableCellContentKind {
        match self {
            TableCellContent::Text(_) => TableCellContentKind::Text,
            TableCellContent::Term(_) => TableCellContentKind::Term,
            TableCellContent::Image(_) => TableCellContentKind::Image,
            TableCellContent::Link(_) => TableCellContentKind::Link,
            TableCellContent::LinkExternal(_) => TableCellContentKind::LinkExternal,
            TableCellContent::FootnoteReference(_) => TableCellContentKind::FootnoteReference,
            TableCellContent::FormalItemReference(_) => TableCellContentKind::FormalItemReference,
            TableCellContent::Verbatim(_) => TableCellContentKind::Verbatim,
            TableCellContent::ListOrdered(_) => TableCellContentKind::ListOrdered,
            TableCellContent::ListUnordered(_) => TableCellContentKind::ListUnordered,
        }
    }
}

impl<D> LinkContent<D> {
    pub fn kind(&self) -> LinkContentKind {
        match self {
            LinkContent::Text(_) => LinkContentKind::Text,
            LinkContent::Image(_) => LinkContentKind::Image,
        }
    }
}

impl<D> SubsectionContent<D> {
    pub fn kind(&self) -> SubsectionContentKind {
        match self {
            SubsectionContent::Paragraph(_) => SubsectionContentKind::Paragraph,
            SubsectionContent::FormalItem(_) => SubsectionContentKind::FormalItem,
            SubsectionContent::Footnote(_) => SubsectionContentKind::Footnote,
        }
    }
}

impl<D> SectionBody<D> {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionBody::Sections(_) => SectionKind::WithSections,
            SectionBody::Subsections(_) => SectionKind::WithSubsections,
            SectionBody::Content(_) => SectionKind::WithSubsectionContent,
        }
    }
}
