//! Indented outline of a document tree, one node per line.

use std::fmt::Write;

use folio_core::ast::{Document, NodeRef};
use folio_core::{Colors, Payload};

pub struct DumpPrinter<'d, D> {
    document: &'d Document<D>,
    numbers: bool,
    positions: bool,
    colors: Colors,
}

impl<'d, D: Payload> DumpPrinter<'d, D> {
    pub fn new(document: &'d Document<D>) -> Self {
        Self {
            document,
            numbers: true,
            positions: false,
            colors: Colors::OFF,
        }
    }

    /// Show content numbers of compiled trees. On by default.
    pub fn numbers(mut self, value: bool) -> Self {
        self.numbers = value;
        self
    }

    pub fn positions(mut self, value: bool) -> Self {
        self.positions = value;
        self
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(NodeRef::from(self.document), 0, w)
    }

    fn format_node(&self, node: NodeRef<'d, D>, depth: usize, w: &mut impl Write) -> std::fmt::Result {
        let c = &self.colors;
        write!(w, "{}{}{}{}", "  ".repeat(depth), c.element, node.element_name(), c.reset)?;
        self.format_details(node, w)?;

        if self.numbers
            && let Some(number) = node.data().number()
        {
            write!(w, " {}[{}]{}", c.number, number, c.reset)?;
        }

        if self.positions {
            let lexical = node.data().lexical();
            write!(w, " {}@{}:{}{}", c.dim, lexical.line, lexical.column, c.reset)?;
        }
        writeln!(w)?;

        for child in node.children() {
            self.format_node(child, depth + 1, w)?;
        }
        Ok(())
    }

    fn format_details(&self, node: NodeRef<'d, D>, w: &mut impl Write) -> std::fmt::Result {
        let c = &self.colors;

        if let Some(id) = node.block_id() {
            write!(w, " {}#{}{}", c.value, id, c.reset)?;
        }
        if let Some(type_name) = node.type_name() {
            write!(w, " :{}", type_name)?;
        }

        match node {
            NodeRef::Document(n) => self.quoted(w, &n.title)?,
            NodeRef::Section(n) => {
                self.quoted(w, &n.title)?;
                if !n.table_of_contents {
                    write!(w, " notoc")?;
                }
            }
            NodeRef::Subsection(n) => self.quoted(w, &n.title)?,
            NodeRef::FormalItem(n) => self.quoted(w, &n.title)?,
            NodeRef::Text(n) => self.quoted(w, &n.text)?,
            NodeRef::TableColumnName(n) => self.quoted(w, &n.name)?,
            NodeRef::Image(n) => {
                write!(w, " <{}>", n.source)?;
                if let Some(size) = n.size {
                    write!(w, " {}x{}", size.width, size.height)?;
                }
            }
            NodeRef::Link(n) => write!(w, " -> {}", n.target)?,
            NodeRef::LinkExternal(n) => write!(w, " -> <{}>", n.target)?,
            NodeRef::FootnoteReference(n) => write!(w, " -> {}", n.target)?,
            NodeRef::FormalItemReference(n) => write!(w, " -> {}", n.target)?,
            NodeRef::Paragraph(_)
            | NodeRef::Footnote(_)
            | NodeRef::Term(_)
            | NodeRef::Verbatim(_)
            | NodeRef::ListOrdered(_)
            | NodeRef::ListUnordered(_)
            | NodeRef::ListItem(_)
            | NodeRef::Table(_)
            | NodeRef::TableHeader(_)
            | NodeRef::TableBody(_)
            | NodeRef::TableRow(_)
            | NodeRef::TableCell(_) => {}
        }
        Ok(())
    }

    fn quoted(&self, w: &mut impl Write, s: &str) -> std::fmt::Result {
        let c = &self.colors;
        write!(w, " {}{:?}{}", c.value, s, c.reset)
    }
}
