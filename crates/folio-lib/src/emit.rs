//! Event stream of a tree, the inverse of parsing.
//!
//! Attributes come out in a fixed order: the element's identifying attribute
//! (`title`, `target` or `source`/`width`/`height`), then `id`, `type` and
//! `toc`. `toc` is only written when it is `false`. Tables always get an
//! explicit `table-body`. Known positions are carried over, so parsing the
//! output of a parsed tree gives the same tree back.

use tracing::debug;

use folio_core::Payload;
use folio_core::ast::{Document, NodeRef};

use crate::event::{Attributes, Event};

pub fn to_events<D: Payload>(document: &Document<D>) -> Vec<Event> {
    let mut events = Vec::new();
    emit(NodeRef::from(document), &mut events);
    debug!(events = events.len(), "emitted event stream");
    events
}

fn emit<D: Payload>(node: NodeRef<'_, D>, events: &mut Vec<Event>) {
    let lexical = node.data().lexical();

    if let NodeRef::Text(text) = node {
        events.push(Event::text(text.text.as_str()).at(lexical.line, lexical.column));
        return;
    }

    let name = node.element_name();
    events.push(Event::Start {
        name: name.to_string(),
        attributes: attributes(node),
        line: lexical.line,
        column: lexical.column,
    });

    match node {
        NodeRef::TableColumnName(column) => {
            if !column.name.is_empty() {
                events.push(Event::text(column.name.as_str()));
            }
        }
        _ => {
            for child in node.children() {
                emit(child, events);
            }
        }
    }

    events.push(Event::end(name));
}

fn attributes<D>(node: NodeRef<'_, D>) -> Attributes {
    let mut attributes = Attributes::new();
    let mut put = |key: &str, value: &str| {
        attributes.insert(key.to_string(), value.to_string());
    };

    match node {
        NodeRef::Document(n) => put("title", &n.title),
        NodeRef::Section(n) => put("title", &n.title),
        NodeRef::Subsection(n) => put("title", &n.title),
        NodeRef::FormalItem(n) => put("title", &n.title),
        NodeRef::Link(n) => put("target", n.target.as_str()),
        NodeRef::LinkExternal(n) => put("target", &n.target),
        NodeRef::FootnoteReference(n) => put("target", n.target.as_str()),
        NodeRef::FormalItemReference(n) => put("target", n.target.as_str()),
        NodeRef::Image(n) => {
            put("source", &n.source);
            if let Some(size) = n.size {
                put("width", &size.width.to_string());
                put("height", &size.height.to_string());
            }
        }
        _ => {}
    }

    if let Some(id) = node.block_id() {
        put("id", id.as_str());
    }
    if let Some(type_name) = node.type_name() {
        put("type", type_name.as_str());
    }
    if let NodeRef::Section(n) = node
        && !n.table_of_contents
    {
        put("toc", "false");
    }

    attributes
}
