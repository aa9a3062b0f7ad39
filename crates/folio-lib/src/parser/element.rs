use std::fmt;

/// Recognized element names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Document,
    Section,
    Subsection,
    Paragraph,
    FormalItem,
    Footnote,
    FootnoteRef,
    FormalItemRef,
    Term,
    Image,
    Link,
    LinkExternal,
    Verbatim,
    ListOrdered,
    ListUnordered,
    ListItem,
    Table,
    TableHead,
    TableColumnName,
    TableBody,
    TableRow,
    TableCell,
}

impl Element {
    pub const ALL: [Element; 22] = [
        Element::Document,
        Element::Section,
        Element::Subsection,
        Element::Paragraph,
        Element::FormalItem,
        Element::Footnote,
        Element::FootnoteRef,
        Element::FormalItemRef,
        Element::Term,
        Element::Image,
        Element::Link,
        Element::LinkExternal,
        Element::Verbatim,
        Element::ListOrdered,
        Element::ListUnordered,
        Element::ListItem,
        Element::Table,
        Element::TableHead,
        Element::TableColumnName,
        Element::TableBody,
        Element::TableRow,
        Element::TableCell,
    ];

    pub fn from_name(name: &str) -> Option<Element> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Document => "document",
            Element::Section => "section",
            Element::Subsection => "subsection",
            Element::Paragraph => "paragraph",
            Element::FormalItem => "formal-item",
            Element::Footnote => "footnote",
            Element::FootnoteRef => "footnote-ref",
            Element::FormalItemRef => "formal-item-ref",
            Element::Term => "term",
            Element::Image => "image",
            Element::Link => "link",
            Element::LinkExternal => "link-external",
            Element::Verbatim => "verbatim",
            Element::ListOrdered => "list-ordered",
            Element::ListUnordered => "list-unordered",
            Element::ListItem => "list-item",
            Element::Table => "table",
            Element::TableHead => "table-head",
            Element::TableColumnName => "table-column-name",
            Element::TableBody => "table-body",
            Element::TableRow => "table-row",
            Element::TableCell => "table-cell",
        }
    }

    /// Attributes this element may carry.
    pub fn attributes(self) -> &'static [&'static str] {
        match self {
            Element::Document => &["title"],
            Element::Section => &["title", "type", "id", "toc"],
            Element::Subsection | Element::FormalItem => &["title", "type", "id"],
            Element::Paragraph => &["type", "id"],
            Element::Footnote => &["id", "type"],
            Element::FootnoteRef
            | Element::FormalItemRef
            | Element::Link
            | Element::LinkExternal => &["target", "type"],
            Element::Image => &["source", "width", "height", "type"],
            Element::Term
            | Element::Verbatim
            | Element::ListOrdered
            | Element::ListUnordered
            | Element::ListItem
            | Element::Table
            | Element::TableHead
            | Element::TableColumnName
            | Element::TableBody
            | Element::TableRow
            | Element::TableCell => &["type"],
        }
    }

    pub fn accepts_text(self) -> bool {
        matches!(
            self,
            Element::Paragraph
                | Element::FormalItem
                | Element::Footnote
                | Element::Term
                | Element::Image
                | Element::Link
                | Element::LinkExternal
                | Element::Verbatim
                | Element::ListItem
                | Element::TableCell
                | Element::TableColumnName
        )
    }

    /// Elements that become inline content.
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            Element::Term
                | Element::Image
                | Element::Link
                | Element::LinkExternal
                | Element::FootnoteRef
                | Element::FormalItemRef
                | Element::Verbatim
                | Element::ListOrdered
                | Element::ListUnordered
                | Element::Table
        )
    }

    pub fn is_subsection_content(self) -> bool {
        matches!(
            self,
            Element::Paragraph | Element::FormalItem | Element::Footnote
        )
    }

    /// Whether `child` may appear directly inside `self`, regardless of siblings.
    pub fn accepts_child(self, child: Element) -> bool {
        match self {
            Element::Document => child == Element::Section,
            Element::Section => {
                matches!(child, Element::Section | Element::Subsection)
                    || child.is_subsection_content()
            }
            Element::Subsection => child.is_subsection_content(),
            Element::Paragraph | Element::FormalItem | Element::Footnote | Element::ListItem => {
                child.is_inline()
            }
            Element::TableCell => child.is_inline() && child != Element::Table,
            Element::Link | Element::LinkExternal => child == Element::Image,
            Element::ListOrdered | Element::ListUnordered => child == Element::ListItem,
            Element::Table => matches!(
                child,
                Element::TableHead | Element::TableBody | Element::TableRow
            ),
            Element::TableHead => child == Element::TableColumnName,
            Element::TableBody => child == Element::TableRow,
            Element::TableRow => child == Element::TableCell,
            Element::FootnoteRef
            | Element::FormalItemRef
            | Element::Term
            | Element::Image
            | Element::Verbatim
            | Element::TableColumnName => false,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
