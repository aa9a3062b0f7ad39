use indoc::indoc;

use folio_core::{BlockId, NodeId};

use super::parents::ParentTable;
use crate::InternalFault;
use crate::test_support::compile_src;

const BOOK: &str = indoc! {r#"
    <document title="Book">
      <section title="Intro" id="intro">
        <paragraph id="p1">See<footnote-ref target="n2"/></paragraph>
        <footnote id="n1">first</footnote>
        <formal-item title="Listing" id="l1"><verbatim>x</verbatim></formal-item>
      </section>
      <section title="Body">
        <subsection title="Part" id="part"><footnote id="n2">second</footnote></subsection>
      </section>
    </document>
"#};

fn id(s: &str) -> BlockId {
    BlockId::new(s).unwrap()
}

#[test]
fn find_block_by_id() {
    let compiled = compile_src(BOOK);

    let block = compiled.find_block(&id("p1")).unwrap();
    assert_eq!(block.element_name(), "paragraph");
    assert_eq!(block.data().number.to_string(), "1.1");

    assert_eq!(compiled.find_section(&id("intro")).unwrap().title, "Intro");
    assert_eq!(compiled.find_subsection(&id("part")).unwrap().title, "Part");
    assert_eq!(compiled.find_formal_item(&id("l1")).unwrap().title, "Listing");
    assert!(compiled.find_footnote(&id("n2")).is_some());

    assert!(compiled.find_block(&id("missing")).is_none());
    assert!(compiled.find_section(&id("p1")).is_none());
}

#[test]
fn footnotes_in_document_order() {
    let compiled = compile_src(BOOK);

    assert_eq!(compiled.footnote_index(&id("n1")), Some(1));
    assert_eq!(compiled.footnote_index(&id("n2")), Some(2));
    assert_eq!(compiled.footnote_index(&id("p1")), None);
}

#[test]
fn node_and_number_by_id() {
    let compiled = compile_src(BOOK);

    let root = compiled.node(NodeId::ROOT).unwrap();
    assert_eq!(root.element_name(), "document");
    assert_eq!(compiled.number(NodeId::ROOT).unwrap().to_string(), "0");

    let last = NodeId::from_raw(compiled.len() as u32 - 1);
    assert_eq!(compiled.node(last).unwrap().element_name(), "text");
    assert!(compiled.node(NodeId::from_raw(compiled.len() as u32)).is_none());
    assert!(compiled.number(NodeId::from_raw(999)).is_none());
}

#[test]
fn every_node_reachable_by_id() {
    let compiled = compile_src(BOOK);

    for (index, walked) in compiled.root().walk().enumerate() {
        let id = NodeId::from_raw(index as u32);
        let found = compiled.node(id).unwrap();
        assert_eq!(found.data().id, id);
        assert_eq!(found.element_name(), walked.element_name());
        assert_eq!(compiled.number(id), Some(&walked.data().number));
    }
}

#[test]
fn block_found_by_id_has_its_parent() {
    let compiled = compile_src(BOOK);
    let footnote = compiled.find_block(&id("n2")).unwrap();
    let subsection = compiled.find_block(&id("part")).unwrap();

    assert_eq!(
        compiled.parent(footnote.data().id),
        Some(subsection.data().id)
    );
}

#[test]
fn parent_assigned_once() {
    let mut parents = ParentTable::new();
    let node = NodeId::from_raw(4);
    parents.assign(node, NodeId::ROOT).unwrap();

    let err = parents.assign(node, NodeId::from_raw(1)).unwrap_err();
    assert_eq!(err, InternalFault::ParentReassigned { node });
    assert_eq!(parents.get(node), Some(NodeId::ROOT));
    assert_eq!(parents.get(NodeId::from_raw(2)), None);
    assert_eq!(parents.get(NodeId::from_raw(40)), None);
}
