use super::table::Table;
use crate::{BlockId, TypeName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text<D> {
    pub data: D,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub text: Vec<Text<D>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// An image; the text runs are its alternative text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub source: String,
    pub size: Option<ImageSize>,
    pub text: Vec<Text<D>>,
}

/// Preformatted text, kept as a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verbatim<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub text: Text<D>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub target: BlockId,
    pub content: Vec<LinkContent<D>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkExternal<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub target: String,
    pub content: Vec<LinkContent<D>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootnoteReference<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub target: BlockId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormalItemReference<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub target: BlockId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOrdered<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub items: Vec<ListItem<D>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListUnordered<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub items: Vec<ListItem<D>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem<D> {
    pub data: D,
    pub type_name: Option<TypeName>,
    pub content: Vec<Inline<D>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline<D> {
    Text(Text<D>),
    Term(Term<D>),
    Image(Image<D>),
    Link(Link<D>),
    LinkExternal(LinkExternal<D>),
    FootnoteReference(FootnoteReference<D>),
    FormalItemReference(FormalItemReference<D>),
    Verbatim(Verbatim<D>),
    ListOrdered(ListOrdered<D>),
    ListUnordered(ListUnordered<D>),
    Table(Table<D>),
}

/// Inline content of a table cell. Tables do not nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableCellContent<D> {
    Text(Text<D>),
    Term(Term<D>),
    Image(Image<D>),
    Link(Link<D>),
    LinkExternal(LinkExternal<D>),
    FootnoteReference(FootnoteReference<D>),
    FormalItemReference(FormalItemReference<D>),
    Verbatim(Verbatim<D>),
    ListOrdered(ListOrdered<D>),
    ListUnordered(ListUnordered<D>),
}

/// Content of a link body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkContent<D> {
    Text(Text<D>),
    Image(Image<D>),
}

impl<D> From<TableCellContent<D>> for Inline<D> {
    fn from(content: TableCellContent<D>) -> Self {
        match content {
            TableCellContent::Text(n) => Inline::Text(n),
            TableCellContent::Term(n) => Inline::Term(n),
            TableCellContent::Image(n) => Inline::Image(n),
            TableCellContent::Link(n) => Inline::Link(n),
            TableCellContent::LinkExternal(n) => Inline::LinkExternal(n),
            TableCellContent::FootnoteReference(n) => Inline::FootnoteReference(n),
            TableCellContent::FormalItemReference(n) => Inline::FormalItemReference(n),
            TableCellContent::Verbatim(n) => Inline::Verbatim(n),
            TableCellContent::ListOrdered(n) => Inline::ListOrdered(n),
            TableCellContent::ListUnordered(n) => Inline::ListUnordered(n),
        }
    }
}

impl<D> From<LinkContent<D>> for Inline<D> {
    fn from(content: LinkContent<D>) -> Self {
        match content {
            LinkContent::Text(n) => Inline::Text(n),
            LinkContent::Image(n) => Inline::Image(n),
        }
    }
}

/// Narrowing fails with the original value so callers can report its kind.
impl<D> TryFrom<Inline<D>> for TableCellContent<D> {
    type Error = Inline<D>;

    fn try_from(inline: Inline<D>) -> Result<Self, Self::Error> {
        Ok(match inline {
            Inline::Text(n) => TableCellContent::Text(n),
            Inline::Term(n) => TableCellContent::Term(n),
            Inline::Image(n) => TableCellContent::Image(n),
            Inline::Link(n) => TableCellContent::Link(n),
            Inline::LinkExternal(n) => TableCellContent::LinkExternal(n),
            Inline::FootnoteReference(n) => TableCellContent::FootnoteReference(n),
            Inline::FormalItemReference(n) => TableCellContent::FormalItemReference(n),
            Inline::Verbatim(n) => TableCellContent::Verbatim(n),
            Inline::ListOrdered(n) => TableCellContent::ListOrdered(n),
            Inline::ListUnordered(n) => TableCellContent::ListUnordered(n),
            table @ Inline::Table(_) => return Err(table),
        })
    }
}

impl<D> TryFrom<Inline<D>> for LinkContent<D> {
    type Error = Inline<D>;

    fn try_from(inline: Inline<D>) -> Result<Self, Self::Error> {
        match inline {
            Inline::Text(n) => Ok(LinkContent::Text(n)),
            Inline::Image(n) => Ok(LinkContent::Image(n)),
            other => Err(other),
        }
    }
}
