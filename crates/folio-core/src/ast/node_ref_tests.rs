use super::*;
use crate::{BlockId, Lexical};

fn at(line: u32) -> Parsed {
    Parsed::at(Lexical::new(line, 1))
}

fn text(line: u32, s: &str) -> Text<Parsed> {
    Text {
        data: at(line),
        text: s.to_string(),
    }
}

fn cell(line: u32, s: &str) -> TableCell<Parsed> {
    TableCell {
        data: at(line),
        type_name: None,
        content: vec![TableCellContent::Text(text(line, s))],
    }
}

fn sample() -> Document<Parsed> {
    let table = Table {
        data: at(4),
        type_name: None,
        header: Some(TableHeader {
            data: at(5),
            type_name: None,
            names: vec![TableColumnName {
                data: at(6),
                type_name: None,
                name: "A".to_string(),
            }],
        }),
        body: TableBody {
            data: at(7),
            type_name: None,
            rows: vec![TableRow {
                data: at(8),
                type_name: None,
                cells: vec![cell(9, "a1")],
            }],
        },
    };

    Document {
        data: at(1),
        title: "Doc".to_string(),
        sections: vec![Section {
            data: at(2),
            type_name: None,
            id: Some(BlockId::new("intro").unwrap()),
            title: "Intro".to_string(),
            table_of_contents: true,
            body: SectionBody::Content(vec![SubsectionContent::Paragraph(Paragraph {
                data: at(3),
                type_name: None,
                id: None,
                content: vec![Inline::Table(table), Inline::Text(text(10, "tail"))],
            })]),
        }],
    }
}

#[test]
fn walk_is_preorder() {
    let doc = sample();
    let names: Vec<String> = NodeRef::from(&doc)
        .walk()
        .map(|n| format!("{}@{}", n.element_name(), n.data().lexical.line))
        .collect();

    insta::assert_snapshot!(names.join("\n"), @r"
    document@1
    section@2
    paragraph@3
    table@4
    table-head@5
    table-column-name@6
    table-body@7
    table-row@8
    table-cell@9
    text@9
    text@10
    ");
}

#[test]
fn content_kinds() {
    let doc = sample();
    let blocks: Vec<&str> = NodeRef::from(&doc)
        .walk()
        .filter(NodeRef::is_block)
        .map(|n| n.element_name())
        .collect();
    assert_eq!(blocks, ["document", "section", "paragraph"]);

    let root = NodeRef::from(&doc);
    assert_eq!(root.block_kind(), Some(BlockKind::Document));
    assert_eq!(root.content_kind(), ContentKind::Block);
}

#[test]
fn block_ids_exposed() {
    let doc = sample();
    let ids: Vec<&str> = NodeRef::from(&doc)
        .walk()
        .filter_map(|n| n.block_id())
        .map(BlockId::as_str)
        .collect();
    assert_eq!(ids, ["intro"]);
}

#[test]
fn leaves_have_no_children() {
    let t = text(1, "x");
    assert!(NodeRef::Text(&t).children().is_empty());
    assert_eq!(NodeRef::Text(&t).walk().count(), 1);
}

#[test]
fn child_matches_children() {
    let doc = sample();
    let label = |n: NodeRef<'_, Parsed>| format!("{}@{}", n.element_name(), n.data().lexical.line);

    for node in NodeRef::from(&doc).walk() {
        let children = node.children();
        for (index, child) in children.iter().enumerate() {
            assert_eq!(node.child(index).map(label), Some(label(*child)));
        }
        assert!(node.child(children.len()).is_none());
    }
}
