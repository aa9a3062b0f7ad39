use super::*;
use crate::Lexical;

fn text(s: &str) -> Text<Parsed> {
    Text {
        data: Parsed::default(),
        text: s.to_string(),
    }
}

fn table() -> Table<Parsed> {
    Table {
        data: Parsed::default(),
        type_name: None,
        header: None,
        body: TableBody {
            data: Parsed::default(),
            type_name: None,
            rows: Vec::new(),
        },
    }
}

#[test]
fn inline_kind_names_match_elements() {
    let names: Vec<&str> = [
        InlineKind::Text,
        InlineKind::Term,
        InlineKind::Image,
        InlineKind::Link,
        InlineKind::LinkExternal,
        InlineKind::FootnoteReference,
        InlineKind::FormalItemReference,
        InlineKind::Verbatim,
        InlineKind::ListOrdered,
        InlineKind::ListUnordered,
        InlineKind::Table,
    ]
    .into_iter()
    .map(InlineKind::name)
    .collect();

    insta::assert_snapshot!(names.join(" "), @"text term image link link-external footnote-ref formal-item-ref verbatim list-ordered list-unordered table");
}

#[test]
fn table_cell_content_rejects_table() {
    let inline = Inline::Table(table());
    let rejected = TableCellContent::try_from(inline).unwrap_err();
    assert_eq!(rejected.kind(), InlineKind::Table);

    let accepted = TableCellContent::try_from(Inline::Text(text("x"))).unwrap();
    assert_eq!(accepted.kind(), TableCellContentKind::Text);
}

#[test]
fn link_content_accepts_text_and_image_only() {
    let image = Inline::Image(Image {
        data: Parsed::default(),
        type_name: None,
        source: "cat.png".to_string(),
        size: Some(ImageSize {
            width: 10,
            height: 20,
        }),
        text: vec![text("a cat")],
    });
    assert_eq!(
        LinkContent::try_from(image).unwrap().kind(),
        LinkContentKind::Image
    );

    let term = Inline::Term(Term {
        data: Parsed::default(),
        type_name: None,
        text: vec![text("word")],
    });
    let rejected = LinkContent::try_from(term).unwrap_err();
    assert_eq!(rejected.kind(), InlineKind::Term);
}

#[test]
fn widening_preserves_kind() {
    let cell = TableCellContent::Verbatim(Verbatim {
        data: Parsed::default(),
        type_name: None,
        text: text("fn main() {}"),
    });
    let kind = InlineKind::from(cell.kind());
    assert_eq!(Inline::from(cell).kind(), kind);
    assert_eq!(
        Inline::from(LinkContent::Text(text("t"))).kind(),
        InlineKind::Text
    );
}

#[test]
fn section_kind_follows_body() {
    let section = |body| Section {
        data: Parsed::at(Lexical::new(1, 1)),
        type_name: None,
        id: None,
        title: "s".to_string(),
        table_of_contents: true,
        body,
    };

    assert_eq!(
        section(SectionBody::Sections(Vec::new())).body.kind(),
        SectionKind::WithSections
    );
    assert_eq!(
        section(SectionBody::Subsections(Vec::new())).body.kind(),
        SectionKind::WithSubsections
    );
    assert_eq!(
        section(SectionBody::Content(Vec::new())).body.kind(),
        SectionKind::WithSubsectionContent
    );
    assert!(SectionBody::<Parsed>::Sections(Vec::new()).is_empty());
}
