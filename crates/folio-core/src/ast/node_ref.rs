use super::block::{
    Document, Footnote, FormalItem, Paragraph, Section, SectionBody, Subsection, SubsectionContent,
};
use super::inline::{
    FootnoteReference, FormalItemReference, Image, Inline, Link, LinkContent, LinkExternal,
    ListItem, ListOrdered, ListUnordered, TableCellContent, Term, Text, Verbatim,
};
use super::kinds::{BlockKind, ContentKind};
use super::table::{Table, TableBody, TableCell, TableColumnName, TableHeader, TableRow};
use crate::{BlockId, TypeName};

/// Borrowed view over any node of a tree.
///
/// Used wherever code needs to treat nodes uniformly: walks, printers,
/// lookups by id.
pub enum NodeRef<'a, D> {
    Document(&'a Document<D>),
    Section(&'a Section<D>),
    Subsection(&'a Subsection<D>),
    Paragraph(&'a Paragraph<D>),
    FormalItem(&'a FormalItem<D>),
    Footnote(&'a Footnote<D>),
    Text(&'a Text<D>),
    Term(&'a Term<D>),
    Image(&'a Image<D>),
    Verbatim(&'a Verbatim<D>),
    Link(&'a Link<D>),
    LinkExternal(&'a LinkExternal<D>),
    FootnoteReference(&'a FootnoteReference<D>),
    FormalItemReference(&'a FormalItemReference<D>),
    ListOrdered(&'a ListOrdered<D>),
    ListUnordered(&'a ListUnordered<D>),
    ListItem(&'a ListItem<D>),
    Table(&'a Table<D>),
    TableHeader(&'a TableHeader<D>),
    TableColumnName(&'a TableColumnName<D>),
    TableBody(&'a TableBody<D>),
    TableRow(&'a TableRow<D>),
    TableCell(&'a TableCell<D>),
}

impl<D> Clone for NodeRef<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for NodeRef<'_, D> {}

impl<D: std::fmt::Debug> std::fmt::Debug for NodeRef<'_, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("NodeRef")
            .field(&self.element_name())
            .field(self.data())
            .finish()
    }
}

impl<'a, D> NodeRef<'a, D> {
    pub fn data(&self) -> &'a D {
        match *self {
            NodeRef::Document(n) => &n.data,
            NodeRef::Section(n) => &n.data,
            NodeRef::Subsection(n) => &n.data,
            NodeRef::Paragraph(n) => &n.data,
            NodeRef::FormalItem(n) => &n.data,
            NodeRef::Footnote(n) => &n.data,
            NodeRef::Text(n) => &n.data,
            NodeRef::Term(n) => &n.data,
            NodeRef::Image(n) => &n.data,
            NodeRef::Verbatim(n) => &n.data,
            NodeRef::Link(n) => &n.data,
            NodeRef::LinkExternal(n) => &n.data,
            NodeRef::FootnoteReference(n) => &n.data,
            NodeRef::FormalItemReference(n) => &n.data,
            NodeRef::ListOrdered(n) => &n.data,
            NodeRef::ListUnordered(n) => &n.data,
            NodeRef::ListItem(n) => &n.data,
            NodeRef::Table(n) => &n.data,
            NodeRef::TableHeader(n) => &n.data,
            NodeRef::TableColumnName(n) => &n.data,
            NodeRef::TableBody(n) => &n.data,
            NodeRef::TableRow(n) => &n.data,
            NodeRef::TableCell(n) => &n.data,
        }
    }

    /// Element name used in event streams.
    pub fn element_name(&self) -> &'static str {
        match self {
            NodeRef::Document(_) => "document",
            NodeRef::Section(_) => "section",
            NodeRef::Subsection(_) => "subsection",
            NodeRef::Paragraph(_) => "paragraph",
            NodeRef::FormalItem(_) => "formal-item",
            NodeRef::Footnote(_) => "footnote",
            NodeRef::Text(_) => "text",
            NodeRef::Term(_) => "term",
            NodeRef::Image(_) => "image",
            NodeRef::Verbatim(_) => "verbatim",
            NodeRef::Link(_) => "link",
            NodeRef::LinkExternal(_) => "link-external",
            NodeRef::FootnoteReference(_) => "footnote-ref",
            NodeRef::FormalItemReference(_) => "formal-item-ref",
            NodeRef::ListOrdered(_) => "list-ordered",
            NodeRef::ListUnordered(_) => "list-unordered",
            NodeRef::ListItem(_) => "list-item",
            NodeRef::Table(_) => "table",
            NodeRef::TableHeader(_) => "table-head",
            NodeRef::TableColumnName(_) => "table-column-name",
            NodeRef::TableBody(_) => "table-body",
            NodeRef::TableRow(_) => "table-row",
            NodeRef::TableCell(_) => "table-cell",
        }
    }

    pub fn block_kind(&self) -> Option<BlockKind> {
        match self {
            NodeRef::Document(_) => Some(BlockKind::Document),
            NodeRef::Section(_) => Some(BlockKind::Section),
            NodeRef::Subsection(_) => Some(BlockKind::Subsection),
            NodeRef::Paragraph(_) | NodeRef::FormalItem(_) | NodeRef::Footnote(_) => {
                Some(BlockKind::SubsectionContent)
            }
            _ => None,
        }
    }

    pub fn content_kind(&self) -> ContentKind {
        if self.block_kind().is_some() {
            ContentKind::Block
        } else {
            ContentKind::Inline
        }
    }

    pub fn is_block(&self) -> bool {
        self.content_kind() == ContentKind::Block
    }

    pub fn type_name(&self) -> Option<&'a TypeName> {
        match *self {
            NodeRef::Document(_) | NodeRef::Text(_) => None,
            NodeRef::Section(n) => n.type_name.as_ref(),
            NodeRef::Subsection(n) => n.type_name.as_ref(),
            NodeRef::Paragraph(n) => n.type_name.as_ref(),
            NodeRef::FormalItem(n) => n.type_name.as_ref(),
            NodeRef::Footnote(n) => n.type_name.as_ref(),
            NodeRef::Term(n) => n.type_name.as_ref(),
            NodeRef::Image(n) => n.type_name.as_ref(),
            NodeRef::Verbatim(n) => n.type_name.as_ref(),
            NodeRef::Link(n) => n.type_name.as_ref(),
            NodeRef::LinkExternal(n) => n.type_name.as_ref(),
            NodeRef::FootnoteReference(n) => n.type_name.as_ref(),
            NodeRef::FormalItemReference(n) => n.type_name.as_ref(),
            NodeRef::ListOrdered(n) => n.type_name.as_ref(),
            NodeRef::ListUnordered(n) => n.type_name.as_ref(),
            NodeRef::ListItem(n) => n.type_name.as_ref(),
            NodeRef::Table(n) => n.type_name.as_ref(),
            NodeRef::TableHeader(n) => n.type_name.as_ref(),
            NodeRef::TableColumnName(n) => n.type_name.as_ref(),
            NodeRef::TableBody(n) => n.type_name.as_ref(),
            NodeRef::TableRow(n) => n.type_name.as_ref(),
            NodeRef::TableCell(n) => n.type_name.as_ref(),
        }
    }

    /// Block identifier declared by this node, if any.
    pub fn block_id(&self) -> Option<&'a BlockId> {
        match *self {
            NodeRef::Section(n) => n.id.as_ref(),
            NodeRef::Subsection(n) => n.id.as_ref(),
            NodeRef::Paragraph(n) => n.id.as_ref(),
            NodeRef::FormalItem(n) => n.id.as_ref(),
            NodeRef::Footnote(n) => Some(&n.id),
            _ => None,
        }
    }

    /// Direct children in document order.
    pub fn children(&self) -> Vec<NodeRef<'a, D>> {
        match *self {
            NodeRef::Document(n) => n.sections.iter().map(NodeRef::Section).collect(),
            NodeRef::Section(n) => match &n.body {
                SectionBody::Sections(v) => v.iter().map(NodeRef::Section).collect(),
                SectionBody::Subsections(v) => v.iter().map(NodeRef::Subsection).collect(),
                SectionBody::Content(v) => v.iter().map(NodeRef::from).collect(),
            },
            NodeRef::Subsection(n) => n.content.iter().map(NodeRef::from).collect(),
            NodeRef::Paragraph(n) => n.content.iter().map(NodeRef::from).collect(),
            NodeRef::FormalItem(n) => n.content.iter().map(NodeRef::from).collect(),
            NodeRef::Footnote(n) => n.content.iter().map(NodeRef::from).collect(),
            NodeRef::Term(n) => n.text.iter().map(NodeRef::Text).collect(),
            NodeRef::Image(n) => n.text.iter().map(NodeRef::Text).collect(),
            NodeRef::Verbatim(n) => vec![NodeRef::Text(&n.text)],
            NodeRef::Link(n) => n.content.iter().map(NodeRef::from).collect(),
            NodeRef::LinkExternal(n) => n.content.iter().map(NodeRef::from).collect(),
            NodeRef::ListOrdered(n) => n.items.iter().map(NodeRef::ListItem).collect(),
            NodeRef::ListUnordered(n) => n.items.iter().map(NodeRef::ListItem).collect(),
            NodeRef::ListItem(n) => n.content.iter().map(NodeRef::from).collect(),
            NodeRef::Table(n) => {
                let mut children = Vec::with_capacity(2);
                if let Some(header) = &n.header {
                    children.push(NodeRef::TableHeader(header));
                }
                children.push(NodeRef::TableBody(&n.body));
                children
            }
            NodeRef::TableHeader(n) => n.names.iter().map(NodeRef::TableColumnName).collect(),
            NodeRef::TableBody(n) => n.rows.iter().map(NodeRef::TableRow).collect(),
            NodeRef::TableRow(n) => n.cells.iter().map(NodeRef::TableCell).collect(),
            NodeRef::TableCell(n) => n.content.iter().map(NodeRef::from).collect(),
            NodeRef::Text(_)
            | NodeRef::FootnoteReference(_)
            | NodeRef::FormalItemReference(_)
            | NodeRef::TableColumnName(_) => Vec::new(),
        }
    }

    /// The `index`-th direct child, without collecting the others.
    pub fn child(&self, index: usize) -> Option<NodeRef<'a, D>> {
        match *self {
            NodeRef::Document(n) => n.sections.get(index).map(NodeRef::Section),
            NodeRef::Section(n) => match &n.body {
                SectionBody::Sections(v) => v.get(index).map(NodeRef::Section),
                SectionBody::Subsections(v) => v.get(index).map(NodeRef::Subsection),
                SectionBody::Content(v) => v.get(index).map(NodeRef::from),
            },
            NodeRef::Subsection(n) => n.content.get(index).map(NodeRef::from),
            NodeRef::Paragraph(n) => n.content.get(index).map(NodeRef::from),
            NodeRef::FormalItem(n) => n.content.get(index).map(NodeRef::from),
            NodeRef::Footnote(n) => n.content.get(index).map(NodeRef::from),
            NodeRef::Term(n) => n.text.get(index).map(NodeRef::Text),
            NodeRef::Image(n) => n.text.get(index).map(NodeRef::Text),
            NodeRef::Verbatim(n) => (index == 0).then_some(NodeRef::Text(&n.text)),
            NodeRef::Link(n) => n.content.get(index).map(NodeRef::from),
            NodeRef::LinkExternal(n) => n.content.get(index).map(NodeRef::from),
            NodeRef::ListOrdered(n) => n.items.get(index).map(NodeRef::ListItem),
            NodeRef::ListUnordered(n) => n.items.get(index).map(NodeRef::ListItem),
            NodeRef::ListItem(n) => n.content.get(index).map(NodeRef::from),
            NodeRef::Table(n) => match (&n.header, index) {
                (Some(header), 0) => Some(NodeRef::TableHeader(header)),
                (Some(_), 1) | (None, 0) => Some(NodeRef::TableBody(&n.body)),
                _ => None,
            },
            NodeRef::TableHeader(n) => n.names.get(index).map(NodeRef::TableColumnName),
            NodeRef::TableBody(n) => n.rows.get(index).map(NodeRef::TableRow),
            NodeRef::TableRow(n) => n.cells.get(index).map(NodeRef::TableCell),
            NodeRef::TableCell(n) => n.content.get(index).map(NodeRef::from),
            NodeRef::Text(_)
            | NodeRef::FootnoteReference(_)
            | NodeRef::FormalItemReference(_)
            | NodeRef::TableColumnName(_) => None,
        }
    }

    /// Pre-order walk starting at (and including) this node.
    pub fn walk(self) -> Walk<'a, D> {
        Walk { stack: vec![self] }
    }
}

impl<'a, D> From<&'a Document<D>> for NodeRef<'a, D> {
    fn from(document: &'a Document<D>) -> Self {
        NodeRef::Document(document)
    }
}

impl<'a, D> From<&'a SubsectionContent<D>> for NodeRef<'a, D> {
    fn from(content: &'a SubsectionContent<D>) -> Self {
        match content {
            SubsectionContent::Paragraph(n) => NodeRef::Paragraph(n),
            SubsectionContent::FormalItem(n) => NodeRef::FormalItem(n),
            SubsectionContent::Footnote(n) => NodeRef::Footnote(n),
        }
    }
}

impl<'a, D> From<&'a Inline<D>> for NodeRef<'a, D> {
    fn from(inline: &'a Inline<D>) -> Self {
        match inline {
            Inline::Text(n) => NodeRef::Text(n),
            Inline::Term(n) => NodeRef::Term(n),
            Inline::Image(n) => NodeRef::Image(n),
            Inline::Link(n) => NodeRef::Link(n),
            Inline::LinkExternal(n) => NodeRef::LinkExternal(n),
            Inline::FootnoteReference(n) => NodeRef::FootnoteReference(n),
            Inline::FormalItemReference(n) => NodeRef::FormalItemReference(n),
            Inline::Verbatim(n) => NodeRef::Verbatim(n),
            Inline::ListOrdered(n) => NodeRef::ListOrdered(n),
            Inline::ListUnordered(n) => NodeRef::ListUnordered(n),
            Inline::Table(n) => NodeRef::Table(n),
        }
    }
}

impl<'a, D> From<&'a TableCellContent<D>> for NodeRef<'a, D> {
    fn from(content: &'a TableCellContent<D>) -> Self {
        match content {
            TableCellContent::Text(n) => NodeRef::Text(n),
            TableCellContent::Term(n) => NodeRef::Term(n),
            TableCellContent::Image(n) => NodeRef::Image(n),
            TableCellContent::Link(n) => NodeRef::Link(n),
            TableCellContent::LinkExternal(n) => NodeRef::LinkExternal(n),
            TableCellContent::FootnoteReference(n) => NodeRef::FootnoteReference(n),
            TableCellContent::FormalItemReference(n) => NodeRef::FormalItemReference(n),
            TableCellContent::Verbatim(n) => NodeRef::Verbatim(n),
            TableCellContent::ListOrdered(n) => NodeRef::ListOrdered(n),
            TableCellContent::ListUnordered(n) => NodeRef::ListUnordered(n),
        }
    }
}

impl<'a, D> From<&'a LinkContent<D>> for NodeRef<'a, D> {
    fn from(content: &'a LinkContent<D>) -> Self {
        match content {
            LinkContent::Text(n) => NodeRef::Text(n),
            LinkContent::Image(n) => NodeRef::Image(n),
        }
    }
}

/// Pre-order iterator over a subtree.
pub struct Walk<'a, D> {
    stack: Vec<NodeRef<'a, D>>,
}

impl<'a, D> Iterator for Walk<'a, D> {
    type Item = NodeRef<'a, D>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().into_iter().rev());
        Some(node)
    }
}
