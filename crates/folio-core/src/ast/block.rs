use super::inline::Inline;
use crate::{BlockId, TypeName};

/// Root of a document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<D> {
    pub data: D,
    pub title: String,
    pub sections: Vec<Section<D>>,
}

/// A section in one of three disjoint shapes, see [`SectionBody`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub id: Option<BlockId>,
    pub title: String,
    pub table_of_contents: bool,
    pub body: SectionBody<D>,
}

/// Children of a section. Homogeneous by construction.
///
/// An empty section is represented as `Sections(vec![])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody<D> {
    Sections(Vec<Section<D>>),
    Subsections(Vec<Subsection<D>>),
    Content(Vec<SubsectionContent<D>>),
}

impl<D> SectionBody<D> {
    pub fn len(&self) -> usize {
        match self {
            SectionBody::Sections(v) => v.len(),
            SectionBody::Subsections(v) => v.len(),
            SectionBody::Content(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subsection<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub id: Option<BlockId>,
    pub title: String,
    pub content: Vec<SubsectionContent<D>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubsectionContent<D> {
    Paragraph(Paragraph<D>),
    FormalItem(FormalItem<D>),
    Footnote(Footnote<D>),
}

impl<D> SubsectionContent<D> {
    pub fn data(&self) -> &D {
        match self {
            SubsectionContent::Paragraph(p) => &p.data,
            SubsectionContent::FormalItem(f) => &f.data,
            SubsectionContent::Footnote(f) => &f.data,
        }
    }

    pub fn id(&self) -> Option<&BlockId> {
        match self {
            SubsectionContent::Paragraph(p) => p.id.as_ref(),
            SubsectionContent::FormalItem(f) => f.id.as_ref(),
            SubsectionContent::Footnote(f) => Some(&f.id),
        }
    }

    pub fn content(&self) -> &[Inline<D>] {
        match self {
            SubsectionContent::Paragraph(p) => &p.content,
            SubsectionContent::FormalItem(f) => &f.content,
            SubsectionContent::Footnote(f) => &f.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub id: Option<BlockId>,
    pub content: Vec<Inline<D>>,
}

/// A titled, numbered item such as a figure or listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormalItem<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub id: Option<BlockId>,
    pub title: String,
    pub content: Vec<Inline<D>>,
}

/// Footnotes are only reachable through references, so the id is mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footnote<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub id: BlockId,
    pub content: Vec<Inline<D>>,
}
