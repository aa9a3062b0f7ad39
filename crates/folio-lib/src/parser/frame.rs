//! Builder frames: one per open element.
//!
//! A frame holds the node under construction. Frames reuse the tree's own
//! node types where the node can grow in place; tables and verbatim blocks
//! need extra state and get dedicated shapes.

use folio_core::ast::{
    Document, Footnote, FootnoteReference, FormalItem, FormalItemReference, Image, Inline, Link,
    LinkContent, LinkExternal, ListItem, ListOrdered, ListUnordered, Paragraph, Section,
    SectionBody, Subsection, SubsectionContent, Table, TableBody, TableCell, TableCellContent,
    TableColumnName, TableHeader, TableRow, Term, Text, Verbatim,
};
use folio_core::{Lexical, Parsed, TypeName};

use super::attributes::AttributeReader;
use super::element::Element;
use super::error::{ParseError, ParseErrorKind};
use super::invariants;

pub(super) struct Frame {
    pub element: Element,
    pub lexical: Lexical,
    pub state: FrameState,
}

pub(super) enum FrameState {
    Document(Document<Parsed>),
    Section(Section<Parsed>),
    Subsection(Subsection<Parsed>),
    Paragraph(Paragraph<Parsed>),
    FormalItem(FormalItem<Parsed>),
    Footnote(Footnote<Parsed>),
    FootnoteRef(FootnoteReference<Parsed>),
    FormalItemRef(FormalItemReference<Parsed>),
    Term(Term<Parsed>),
    Image(Image<Parsed>),
    Link(Link<Parsed>),
    LinkExternal(LinkExternal<Parsed>),
    Verbatim(VerbatimFrame),
    ListOrdered(ListOrdered<Parsed>),
    ListUnordered(ListUnordered<Parsed>),
    ListItem(ListItem<Parsed>),
    Table(TableFrame),
    TableHead(TableHeader<Parsed>),
    TableColumnName(TableColumnName<Parsed>),
    TableBody(TableBody<Parsed>),
    TableRow(TableRow<Parsed>),
    TableCell(TableCell<Parsed>),
}

pub(super) struct VerbatimFrame {
    type_name: Option<TypeName>,
    text: Option<Text<Parsed>>,
}

/// A table either has an explicit `table-body` or direct rows, never both.
pub(super) struct TableFrame {
    type_name: Option<TypeName>,
    pub header: Option<TableHeader<Parsed>>,
    body: Option<TableBody<Parsed>>,
    rows: Vec<TableRow<Parsed>>,
}

/// A finished node, ready to be handed to its parent frame.
pub(super) enum Node {
    Document(Document<Parsed>),
    Section(Section<Parsed>),
    Subsection(Subsection<Parsed>),
    Content(SubsectionContent<Parsed>),
    Inline(Inline<Parsed>),
    ListItem(ListItem<Parsed>),
    TableHead(TableHeader<Parsed>),
    TableColumnName(TableColumnName<Parsed>),
    TableBody(TableBody<Parsed>),
    TableRow(TableRow<Parsed>),
    TableCell(TableCell<Parsed>),
}

impl Node {
    pub fn describe(&self) -> &'static str {
        match self {
            Node::Document(_) => "document",
            Node::Section(_) => "section",
            Node::Subsection(_) => "subsection",
            Node::Content(_) => "subsection content",
            Node::Inline(_) => "inline content",
            Node::ListItem(_) => "list-item",
            Node::TableHead(_) => "table-head",
            Node::TableColumnName(_) => "table-column-name",
            Node::TableBody(_) => "table-body",
            Node::TableRow(_) => "table-row",
            Node::TableCell(_) => "table-cell",
        }
    }
}

impl Frame {
    pub fn open(
        element: Element,
        attrs: &AttributeReader<'_>,
        lexical: Lexical,
    ) -> Result<Frame, ParseErrorKind> {
        let data = Parsed::at(lexical.clone());
        let state = match element {
            Element::Document => FrameState::Document(Document {
                data,
                title: attrs.required("title")?.to_string(),
                sections: Vec::new(),
            }),
            Element::Section => FrameState::Section(Section {
                data,
                type_name: attrs.optional_type()?,
                id: attrs.optional_id()?,
                title: attrs.required("title")?.to_string(),
                table_of_contents: attrs.toc()?,
                body: SectionBody::Sections(Vec::new()),
            }),
            Element::Subsection => FrameState::Subsection(Subsection {
                data,
                type_name: attrs.optional_type()?,
                id: attrs.optional_id()?,
                title: attrs.required("title")?.to_string(),
                content: Vec::new(),
            }),
            Element::Paragraph => FrameState::Paragraph(Paragraph {
                data,
                type_name: attrs.optional_type()?,
                id: attrs.optional_id()?,
                content: Vec::new(),
            }),
            Element::FormalItem => FrameState::FormalItem(FormalItem {
                data,
                type_name: attrs.optional_type()?,
                id: attrs.optional_id()?,
                title: attrs.required("title")?.to_string(),
                content: Vec::new(),
            }),
            Element::Footnote => FrameState::Footnote(Footnote {
                data,
                type_name: attrs.optional_type()?,
                id: attrs.required_block_id("id")?,
                content: Vec::new(),
            }),
            Element::FootnoteRef => FrameState::FootnoteRef(FootnoteReference {
                data,
                type_name: attrs.optional_type()?,
                target: attrs.required_block_id("target")?,
            }),
            Element::FormalItemRef => FrameState::FormalItemRef(FormalItemReference {
                data,
                type_name: attrs.optional_type()?,
                target: attrs.required_block_id("target")?,
            }),
            Element::Term => FrameState::Term(Term {
                data,
                type_name: attrs.optional_type()?,
                text: Vec::new(),
            }),
            Element::Image => FrameState::Image(Image {
                data,
                type_name: attrs.optional_type()?,
                source: attrs.required("source")?.to_string(),
                size: attrs.size()?,
                text: Vec::new(),
            }),
            Element::Link => FrameState::Link(Link {
                data,
                type_name: attrs.optional_type()?,
                target: attrs.required_block_id("target")?,
                content: Vec::new(),
            }),
            Element::LinkExternal => FrameState::LinkExternal(LinkExternal {
                data,
                type_name: attrs.optional_type()?,
                target: attrs.required("target")?.to_string(),
                content: Vec::new(),
            }),
            Element::Verbatim => FrameState::Verbatim(VerbatimFrame {
                type_name: attrs.optional_type()?,
                text: None,
            }),
            Element::ListOrdered => FrameState::ListOrdered(ListOrdered {
                data,
                type_name: attrs.optional_type()?,
                items: Vec::new(),
            }),
            Element::ListUnordered => FrameState::ListUnordered(ListUnordered {
                data,
                type_name: attrs.optional_type()?,
                items: Vec::new(),
            }),
            Element::ListItem => FrameState::ListItem(ListItem {
                data,
                type_name: attrs.optional_type()?,
                content: Vec::new(),
            }),
            Element::Table => FrameState::Table(TableFrame {
                type_name: attrs.optional_type()?,
                header: None,
                body: None,
                rows: Vec::new(),
            }),
            Element::TableHead => FrameState::TableHead(TableHeader {
                data,
                type_name: attrs.optional_type()?,
                names: Vec::new(),
            }),
            Element::TableColumnName => FrameState::TableColumnName(TableColumnName {
                data,
                type_name: attrs.optional_type()?,
                name: String::new(),
            }),
            Element::TableBody => FrameState::TableBody(TableBody {
                data,
                type_name: attrs.optional_type()?,
                rows: Vec::new(),
            }),
            Element::TableRow => FrameState::TableRow(TableRow {
                data,
                type_name: attrs.optional_type()?,
                cells: Vec::new(),
            }),
            Element::TableCell => FrameState::TableCell(TableCell {
                data,
                type_name: attrs.optional_type()?,
                content: Vec::new(),
            }),
        };

        Ok(Frame {
            element,
            lexical,
            state,
        })
    }

    /// Check that `child` may open here, given the children seen so far.
    pub fn admit(&self, child: Element) -> Result<(), ParseErrorKind> {
        let parent = self.element.name();
        if !self.element.accepts_child(child) {
            return Err(ParseErrorKind::UnexpectedChild {
                parent,
                child: child.name(),
            });
        }

        match &self.state {
            FrameState::Section(section) => section_shape(&section.body, child),
            FrameState::Table(table) => table.admit(child),
            _ => Ok(()),
        }
    }

    /// Append a text run. The element must accept text.
    pub fn text(&mut self, text: &str, lexical: Lexical) {
        let run = Text {
            data: Parsed::at(lexical),
            text: text.to_string(),
        };
        match &mut self.state {
            FrameState::Paragraph(n) => n.content.push(Inline::Text(run)),
            FrameState::FormalItem(n) => n.content.push(Inline::Text(run)),
            FrameState::Footnote(n) => n.content.push(Inline::Text(run)),
            FrameState::ListItem(n) => n.content.push(Inline::Text(run)),
            FrameState::TableCell(n) => n.content.push(TableCellContent::Text(run)),
            FrameState::Term(n) => n.text.push(run),
            FrameState::Image(n) => n.text.push(run),
            FrameState::Link(n) => n.content.push(LinkContent::Text(run)),
            FrameState::LinkExternal(n) => n.content.push(LinkContent::Text(run)),
            FrameState::Verbatim(n) => match &mut n.text {
                Some(existing) => existing.text.push_str(text),
                None => n.text = Some(run),
            },
            FrameState::TableColumnName(n) => n.name.push_str(text),
            _ => invariants::text_in(self.element),
        }
    }

    /// Take a finished child. [`Frame::admit`] has already vetted its kind.
    pub fn accept(&mut self, node: Node) {
        match (&mut self.state, node) {
            (FrameState::Document(n), Node::Section(child)) => n.sections.push(child),
            (FrameState::Section(n), Node::Section(child)) => match &mut n.body {
                SectionBody::Sections(v) => v.push(child),
                _ => invariants::mixed_section(),
            },
            (FrameState::Section(n), Node::Subsection(child)) => {
                if n.body.is_empty() {
                    n.body = SectionBody::Subsections(Vec::new());
                }
                match &mut n.body {
                    SectionBody::Subsections(v) => v.push(child),
                    _ => invariants::mixed_section(),
                }
            }
            (FrameState::Section(n), Node::Content(child)) => {
                if n.body.is_empty() {
                    n.body = SectionBody::Content(Vec::new());
                }
                match &mut n.body {
                    SectionBody::Content(v) => v.push(child),
                    _ => invariants::mixed_section(),
                }
            }
            (FrameState::Subsection(n), Node::Content(child)) => n.content.push(child),
            (FrameState::Paragraph(n), Node::Inline(child)) => n.content.push(child),
            (FrameState::FormalItem(n), Node::Inline(child)) => n.content.push(child),
            (FrameState::Footnote(n), Node::Inline(child)) => n.content.push(child),
            (FrameState::ListItem(n), Node::Inline(child)) => n.content.push(child),
            (FrameState::TableCell(n), Node::Inline(child)) => match child.try_into() {
                Ok(content) => n.content.push(content),
                Err(rejected) => invariants::unexpected_node(self.element, kind_of(&rejected)),
            },
            (FrameState::Link(n), Node::Inline(child)) => match child.try_into() {
                Ok(content) => n.content.push(content),
                Err(rejected) => invariants::unexpected_node(self.element, kind_of(&rejected)),
            },
            (FrameState::LinkExternal(n), Node::Inline(child)) => match child.try_into() {
                Ok(content) => n.content.push(content),
                Err(rejected) => invariants::unexpected_node(self.element, kind_of(&rejected)),
            },
            (FrameState::ListOrdered(n), Node::ListItem(child)) => n.items.push(child),
            (FrameState::ListUnordered(n), Node::ListItem(child)) => n.items.push(child),
            (FrameState::Table(n), Node::TableHead(child)) => n.header = Some(child),
            (FrameState::Table(n), Node::TableBody(child)) => n.body = Some(child),
            (FrameState::Table(n), Node::TableRow(child)) => n.rows.push(child),
            (FrameState::TableHead(n), Node::TableColumnName(child)) => n.names.push(child),
            (FrameState::TableBody(n), Node::TableRow(child)) => n.rows.push(child),
            (FrameState::TableRow(n), Node::TableCell(child)) => n.cells.push(child),
            (_, node) => invariants::unexpected_node(self.element, node.describe()),
        }
    }

    /// Turn the frame into its finished node.
    pub fn finish(self) -> Result<Node, ParseError> {
        let lexical = self.lexical;
        Ok(match self.state {
            FrameState::Document(n) => Node::Document(n),
            FrameState::Section(n) => Node::Section(n),
            FrameState::Subsection(n) => Node::Subsection(n),
            FrameState::Paragraph(n) => Node::Content(SubsectionContent::Paragraph(n)),
            FrameState::FormalItem(n) => Node::Content(SubsectionContent::FormalItem(n)),
            FrameState::Footnote(n) => Node::Content(SubsectionContent::Footnote(n)),
            FrameState::FootnoteRef(n) => Node::Inline(Inline::FootnoteReference(n)),
            FrameState::FormalItemRef(n) => Node::Inline(Inline::FormalItemReference(n)),
            FrameState::Term(n) => Node::Inline(Inline::Term(n)),
            FrameState::Image(n) => Node::Inline(Inline::Image(n)),
            FrameState::Link(n) => Node::Inline(Inline::Link(n)),
            FrameState::LinkExternal(n) => Node::Inline(Inline::LinkExternal(n)),
            FrameState::Verbatim(n) => {
                let text = n.text.unwrap_or_else(|| Text {
                    data: Parsed::at(lexical.clone()),
                    text: String::new(),
                });
                Node::Inline(Inline::Verbatim(Verbatim {
                    data: Parsed::at(lexical),
                    type_name: n.type_name,
                    text,
                }))
            }
            FrameState::ListOrdered(n) => Node::Inline(Inline::ListOrdered(n)),
            FrameState::ListUnordered(n) => Node::Inline(Inline::ListUnordered(n)),
            FrameState::ListItem(n) => Node::ListItem(n),
            FrameState::Table(n) => Node::Inline(Inline::Table(n.finish(lexical)?)),
            FrameState::TableHead(n) => Node::TableHead(n),
            FrameState::TableColumnName(n) => Node::TableColumnName(n),
            FrameState::TableBody(n) => Node::TableBody(n),
            FrameState::TableRow(n) => Node::TableRow(n),
            FrameState::TableCell(n) => Node::TableCell(n),
        })
    }
}

impl TableFrame {
    fn admit(&self, child: Element) -> Result<(), ParseErrorKind> {
        let out_of_order = |after: Element| ParseErrorKind::ChildOutOfOrder {
            parent: Element::Table.name(),
            child: child.name(),
            after: after.name(),
        };
        let duplicate = ParseErrorKind::DuplicateChild {
            parent: Element::Table.name(),
            child: child.name(),
        };

        match child {
            Element::TableHead if self.header.is_some() => Err(duplicate),
            Element::TableHead if self.body.is_some() => Err(out_of_order(Element::TableBody)),
            Element::TableHead if !self.rows.is_empty() => Err(out_of_order(Element::TableRow)),
            Element::TableBody if self.body.is_some() => Err(duplicate),
            Element::TableBody if !self.rows.is_empty() => Err(out_of_order(Element::TableRow)),
            Element::TableRow if self.body.is_some() => Err(out_of_order(Element::TableBody)),
            _ => Ok(()),
        }
    }

    /// Build the table, synthesizing a body for direct rows, and re-check
    /// every row against the header.
    fn finish(self, lexical: Lexical) -> Result<Table<Parsed>, ParseError> {
        let body = match self.body {
            Some(body) => body,
            None => TableBody {
                data: Parsed::at(lexical.clone()),
                type_name: None,
                rows: self.rows,
            },
        };

        if let Some(header) = &self.header {
            for row in &body.rows {
                check_row(header, row)?;
            }
        }

        Ok(Table {
            data: Parsed::at(lexical),
            type_name: self.type_name,
            header: self.header,
            body,
        })
    }
}

/// A row must have one cell per header column.
pub(super) fn check_row(
    header: &TableHeader<Parsed>,
    row: &TableRow<Parsed>,
) -> Result<(), ParseError> {
    let expected = header.names.len();
    let received = row.cells.len();
    if expected == received {
        return Ok(());
    }
    Err(ParseError::new(
        ParseErrorKind::TableRowArity { expected, received },
        row.data.lexical.clone(),
    ))
}

/// A section's first child fixes its shape.
fn section_shape(body: &SectionBody<Parsed>, child: Element) -> Result<(), ParseErrorKind> {
    if body.is_empty() {
        return Ok(());
    }

    let existing = match body {
        SectionBody::Sections(_) if child != Element::Section => "sections",
        SectionBody::Subsections(_) if child != Element::Subsection => "subsections",
        SectionBody::Content(_) if !child.is_subsection_content() => "subsection content",
        _ => return Ok(()),
    };

    Err(ParseErrorKind::MixedSectionContent {
        existing,
        child: child.name(),
    })
}

fn kind_of(inline: &Inline<Parsed>) -> &'static str {
    inline.kind().name()
}
