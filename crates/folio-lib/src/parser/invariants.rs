//! Invariant checks excluded from coverage reports.
//!
//! Every case here is ruled out by [`Frame::admit`](super::frame::Frame::admit)
//! or by the text routing in the parser core before a frame is touched.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::element::Element;

#[cold]
pub(super) fn text_in(element: Element) -> ! {
    panic!("broken parser invariant: text delivered to `{element}`, which takes none")
}

#[cold]
pub(super) fn mixed_section() -> ! {
    panic!("broken parser invariant: section shape changed after its first child")
}

#[cold]
pub(super) fn unexpected_node(parent: Element, child: &str) -> ! {
    panic!("broken parser invariant: {child} delivered to `{parent}` without being admitted")
}

#[cold]
pub(super) fn root_not_document(found: &str) -> ! {
    panic!("broken parser invariant: root frame finished as {found}")
}
