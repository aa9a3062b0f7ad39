//! Inline content. Only tables can fail, so everything that may contain a
//! table returns [`Checked`].

use folio_core::ast::{
    FootnoteReference, FormalItemReference, Image, Inline, Link, LinkContent, LinkExternal,
    ListItem, ListOrdered, ListUnordered, TableCellContent, Term, Text, Verbatim,
};
use folio_core::{Compiled, Parsed};

use super::core::Compiler;
use crate::checked::{Checked, collect_all};

impl Compiler {
    pub(super) fn inlines(&mut self, content: &[Inline<Parsed>]) -> Checked<Vec<Inline<Compiled>>> {
        collect_all(content.iter().map(|inline| self.inline(inline)))
    }

    fn inline(&mut self, inline: &Inline<Parsed>) -> Checked<Inline<Compiled>> {
        Ok(match inline {
            Inline::Text(n) => Inline::Text(self.text(n)),
            Inline::Term(n) => Inline::Term(self.term(n)),
            Inline::Image(n) => Inline::Image(self.image(n)),
            Inline::Link(n) => Inline::Link(self.link(n)),
            Inline::LinkExternal(n) => Inline::LinkExternal(self.link_external(n)),
            Inline::FootnoteReference(n) => Inline::FootnoteReference(self.footnote_reference(n)),
            Inline::FormalItemReference(n) => {
                Inline::FormalItemReference(self.formal_item_reference(n))
            }
            Inline::Verbatim(n) => Inline::Verbatim(self.verbatim(n)),
            Inline::ListOrdered(n) => Inline::ListOrdered(self.list_ordered(n)?),
            Inline::ListUnordered(n) => Inline::ListUnordered(self.list_unordered(n)?),
            Inline::Table(n) => Inline::Table(self.table(n)?),
        })
    }

    pub(super) fn table_cell_content(
        &mut self,
        content: &TableCellContent<Parsed>,
    ) -> Checked<TableCellContent<Compiled>> {
        Ok(match content {
            TableCellContent::Text(n) => TableCellContent::Text(self.text(n)),
            TableCellContent::Term(n) => TableCellContent::Term(self.term(n)),
            TableCellContent::Image(n) => TableCellContent::Image(self.image(n)),
            TableCellContent::Link(n) => TableCellContent::Link(self.link(n)),
            TableCellContent::LinkExternal(n) => {
                TableCellContent::LinkExternal(self.link_external(n))
            }
            TableCellContent::FootnoteReference(n) => {
                TableCellContent::FootnoteReference(self.footnote_reference(n))
            }
            TableCellContent::FormalItemReference(n) => {
                TableCellContent::FormalItemReference(self.formal_item_reference(n))
            }
            TableCellContent::Verbatim(n) => TableCellContent::Verbatim(self.verbatim(n)),
            TableCellContent::ListOrdered(n) => TableCellContent::ListOrdered(self.list_ordered(n)?),
            TableCellContent::ListUnordered(n) => {
                TableCellContent::ListUnordered(self.list_unordered(n)?)
            }
        })
    }

    fn link_content(&mut self, content: &LinkContent<Parsed>) -> LinkContent<Compiled> {
        match content {
            LinkContent::Text(n) => LinkContent::Text(self.text(n)),
            LinkContent::Image(n) => LinkContent::Image(self.image(n)),
        }
    }

    pub(super) fn text(&mut self, text: &Text<Parsed>) -> Text<Compiled> {
        Text {
            data: self.leaf(&text.data),
            text: text.text.clone(),
        }
    }

    fn texts(&mut self, texts: &[Text<Parsed>]) -> Vec<Text<Compiled>> {
        texts.iter().map(|text| self.text(text)).collect()
    }

    fn term(&mut self, term: &Term<Parsed>) -> Term<Compiled> {
        let (data, text) = self.within(&term.data, |this, _| this.texts(&term.text));
        Term {
            data,
            type_name: term.type_name.clone(),
            text,
        }
    }

    fn image(&mut self, image: &Image<Parsed>) -> Image<Compiled> {
        let (data, text) = self.within(&image.data, |this, _| this.texts(&image.text));
        Image {
            data,
            type_name: image.type_name.clone(),
            source: image.source.clone(),
            size: image.size,
            text,
        }
    }

    fn verbatim(&mut self, verbatim: &Verbatim<Parsed>) -> Verbatim<Compiled> {
        let (data, text) = self.within(&verbatim.data, |this, _| this.text(&verbatim.text));
        Verbatim {
            data,
            type_name: verbatim.type_name.clone(),
            text,
        }
    }

    fn link(&mut self, link: &Link<Parsed>) -> Link<Compiled> {
        let (data, content) = self.within(&link.data, |this, _| {
            link.content.iter().map(|c| this.link_content(c)).collect()
        });
        Link {
            data,
            type_name: link.type_name.clone(),
            target: link.target.clone(),
            content,
        }
    }

    fn link_external(&mut self, link: &LinkExternal<Parsed>) -> LinkExternal<Compiled> {
        let (data, content) = self.within(&link.data, |this, _| {
            link.content.iter().map(|c| this.link_content(c)).collect()
        });
        LinkExternal {
            data,
            type_name: link.type_name.clone(),
            target: link.target.clone(),
            content,
        }
    }

    fn footnote_reference(
        &mut self,
        reference: &FootnoteReference<Parsed>,
    ) -> FootnoteReference<Compiled> {
        FootnoteReference {
            data: self.leaf(&reference.data),
            type_name: reference.type_name.clone(),
            target: reference.target.clone(),
        }
    }

    fn formal_item_reference(
        &mut self,
        reference: &FormalItemReference<Parsed>,
    ) -> FormalItemReference<Compiled> {
        FormalItemReference {
            data: self.leaf(&reference.data),
            type_name: reference.type_name.clone(),
            target: reference.target.clone(),
        }
    }

    fn list_ordered(&mut self, list: &ListOrdered<Parsed>) -> Checked<ListOrdered<Compiled>> {
        let (data, items) = self.within(&list.data, |this, _| this.list_items(&list.items));
        Ok(ListOrdered {
            data,
            type_name: list.type_name.clone(),
            items: items?,
        })
    }

    fn list_unordered(&mut self, list: &ListUnordered<Parsed>) -> Checked<ListUnordered<Compiled>> {
        let (data, items) = self.within(&list.data, |this, _| this.list_items(&list.items));
        Ok(ListUnordered {
            data,
            type_name: list.type_name.clone(),
            items: items?,
        })
    }

    fn list_items(&mut self, items: &[ListItem<Parsed>]) -> Checked<Vec<ListItem<Compiled>>> {
        collect_all(items.iter().map(|item| {
            let (data, content) = self.within(&item.data, |this, _| this.inlines(&item.content));
            Ok(ListItem {
                data,
                type_name: item.type_name.clone(),
                content: content?,
            })
        }))
    }
}
