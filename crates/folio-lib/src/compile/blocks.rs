//! Document, sections, subsections and subsection content.

use folio_core::ast::{
    Document, Footnote, FormalItem, Paragraph, Section, SectionBody, Subsection,
    SubsectionContent,
};
use folio_core::{Compiled, NodeRef, Parsed};

use super::core::Compiler;
use crate::checked::{Checked, collect_all, zip};

impl Compiler {
    pub(super) fn document(&mut self, document: &Document<Parsed>) -> Checked<Document<Compiled>> {
        let data = self.root(&document.data);
        let sections = collect_all(document.sections.iter().map(|s| self.section(s)))?;

        let node = Document {
            data,
            title: document.title.clone(),
            sections,
        };
        self.adopt(NodeRef::Document(&node));
        Ok(node)
    }

    fn section(&mut self, section: &Section<Parsed>) -> Checked<Section<Compiled>> {
        let (data, checked) = self.within(&section.data, |this, data| {
            zip(
                this.declare(section.id.as_ref(), data),
                this.section_body(&section.body),
            )
        });
        let ((), body) = checked?;

        let node = Section {
            data,
            type_name: section.type_name.clone(),
            id: section.id.clone(),
            title: section.title.clone(),
            table_of_contents: section.table_of_contents,
            body,
        };
        self.adopt(NodeRef::Section(&node));
        Ok(node)
    }

    fn section_body(&mut self, body: &SectionBody<Parsed>) -> Checked<SectionBody<Compiled>> {
        Ok(match body {
            SectionBody::Sections(sections) => {
                SectionBody::Sections(collect_all(sections.iter().map(|s| self.section(s)))?)
            }
            SectionBody::Subsections(subsections) => SectionBody::Subsections(collect_all(
                subsections.iter().map(|s| self.subsection(s)),
            )?),
            SectionBody::Content(content) => SectionBody::Content(collect_all(
                content.iter().map(|c| self.subsection_content(c)),
            )?),
        })
    }

    fn subsection(&mut self, subsection: &Subsection<Parsed>) -> Checked<Subsection<Compiled>> {
        let (data, checked) = self.within(&subsection.data, |this, data| {
            zip(
                this.declare(subsection.id.as_ref(), data),
                collect_all(
                    subsection
                        .content
                        .iter()
                        .map(|c| this.subsection_content(c)),
                ),
            )
        });
        let ((), content) = checked?;

        let node = Subsection {
            data,
            type_name: subsection.type_name.clone(),
            id: subsection.id.clone(),
            title: subsection.title.clone(),
            content,
        };
        self.adopt(NodeRef::Subsection(&node));
        Ok(node)
    }

    fn subsection_content(
        &mut self,
        content: &SubsectionContent<Parsed>,
    ) -> Checked<SubsectionContent<Compiled>> {
        match content {
            SubsectionContent::Paragraph(n) => self.paragraph(n).map(SubsectionContent::Paragraph),
            SubsectionContent::FormalItem(n) => {
                self.formal_item(n).map(SubsectionContent::FormalItem)
            }
            SubsectionContent::Footnote(n) => self.footnote(n).map(SubsectionContent::Footnote),
        }
    }

    fn paragraph(&mut self, paragraph: &Paragraph<Parsed>) -> Checked<Paragraph<Compiled>> {
        let (data, checked) = self.within(&paragraph.data, |this, data| {
            zip(
                this.declare(paragraph.id.as_ref(), data),
                this.inlines(&paragraph.content),
            )
        });
        let ((), content) = checked?;

        let node = Paragraph {
            data,
            type_name: paragraph.type_name.clone(),
            id: paragraph.id.clone(),
            content,
        };
        self.adopt(NodeRef::Paragraph(&node));
        Ok(node)
    }

    fn formal_item(&mut self, item: &FormalItem<Parsed>) -> Checked<FormalItem<Compiled>> {
        let (data, checked) = self.within(&item.data, |this, data| {
            zip(
                this.declare(item.id.as_ref(), data),
                this.inlines(&item.content),
            )
        });
        let ((), content) = checked?;

        let node = FormalItem {
            data,
            type_name: item.type_name.clone(),
            id: item.id.clone(),
            title: item.title.clone(),
            content,
        };
        self.adopt(NodeRef::FormalItem(&node));
        Ok(node)
    }

    fn footnote(&mut self, footnote: &Footnote<Parsed>) -> Checked<Footnote<Compiled>> {
        let (data, checked) = self.within(&footnote.data, |this, data| {
            zip(
                this.declare_footnote(&footnote.id, data),
                this.inlines(&footnote.content),
            )
        });
        let ((), content) = checked?;

        let node = Footnote {
            data,
            type_name: footnote.type_name.clone(),
            id: footnote.id.clone(),
            content,
        };
        self.adopt(NodeRef::Footnote(&node));
        Ok(node)
    }
}
