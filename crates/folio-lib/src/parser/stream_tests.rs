use indoc::indoc;

use crate::event::Attributes;
use crate::parser::{ParseErrorKind, Parser, parse_json};
use crate::{Error, Event, Limits, parse_events};
use folio_core::Lexical;

fn start(name: &str, title: Option<&str>) -> Event {
    match title {
        Some(title) => Event::start(name, [("title", title)]),
        None => Event::start(name, []),
    }
}

#[test]
fn incremental_calls() {
    let mut parser = Parser::new(Limits::default());
    let mut title = Attributes::new();
    title.insert("title".into(), "T".into());

    parser
        .start_element("document", &title, Lexical::new(1, 1))
        .unwrap();
    parser
        .start_element("section", &title, Lexical::new(2, 3))
        .unwrap();
    assert_eq!(parser.depth(), 2);
    parser.characters("\n    ", Lexical::new(2, 20)).unwrap();
    parser.end_element("section").unwrap();
    parser.end_element("document").unwrap();
    assert_eq!(parser.depth(), 0);

    let doc = parser.finish().unwrap();
    assert_eq!(doc.title, "T");
    assert_eq!(doc.sections.len(), 1);
    assert_eq!(doc.sections[0].data.lexical, Lexical::new(2, 3));
}

#[test]
fn empty_stream() {
    let err = parse_events(Vec::new(), &Limits::default()).unwrap_err();
    insta::assert_snapshot!(err, @"0:0: event stream contains no document");
}

#[test]
fn unmatched_end() {
    let err = parse_events([Event::end("document")], &Limits::default()).unwrap_err();
    insta::assert_snapshot!(err, @"0:0: end of `document` without an open element");
}

#[test]
fn first_error_is_sticky() {
    let mut parser = Parser::new(Limits::default());
    parser.feed(start("document", Some("T")).at(1, 1)).unwrap();

    let first = parser.feed(Event::start("chapter", []).at(2, 1)).unwrap_err();
    assert_eq!(
        first.kind,
        ParseErrorKind::UnknownElement {
            name: "chapter".into()
        }
    );

    // Well-formed events after the failure still report the first error.
    let again = parser.feed(start("section", Some("S")).at(3, 1)).unwrap_err();
    assert_eq!(again, first);
    assert_eq!(parser.depth(), 1);
    assert_eq!(parser.finish().unwrap_err(), first);
}

#[test]
fn depth_limit() {
    let limits = Limits::default().with_max_depth(2);
    let events = [
        start("document", Some("T")).at(1, 1),
        start("section", Some("A")).at(2, 1),
        start("section", Some("B")).at(3, 1),
    ];
    let err = parse_events(events, &limits).unwrap_err();
    insta::assert_snapshot!(err, @"3:1: elements nested deeper than 2 levels");
}

#[test]
fn depth_limit_allows_exact_depth() {
    let limits = Limits::default().with_max_depth(2);
    let events = [
        start("document", Some("T")),
        start("section", Some("A")),
        Event::end("section"),
        Event::end("document"),
    ];
    assert!(parse_events(events, &limits).is_ok());
}

#[test]
fn event_limit() {
    let limits = Limits::default().with_max_events(Some(2));
    let events = [
        start("document", Some("T")).at(1, 1),
        start("section", Some("A")).at(2, 1),
        Event::end("section"),
        Event::end("document"),
    ];
    let err = parse_events(events, &limits).unwrap_err();
    insta::assert_snapshot!(err, @"2:1: event stream longer than 2 events");
}

#[test]
fn positions_carry_file_name() {
    let mut parser = Parser::new(Limits::default()).with_file("book.json");
    let err = parser.feed(Event::start("chapter", []).at(1, 1)).unwrap_err();
    insta::assert_snapshot!(err, @"book.json:1:1: unknown element `chapter`");
}

#[test]
fn unclosed_root_reports_file() {
    let mut parser = Parser::new(Limits::default()).with_file("book.json");
    parser.feed(start("document", Some("T")).at(1, 1)).unwrap();
    insta::assert_snapshot!(parser.finish().unwrap_err(), @"book.json:1:1: `document` was never closed");
}

#[test]
fn json_transport() {
    let json = indoc! {r#"
        [
          {"start": {"name": "document", "attributes": {"title": "T"}, "line": 1, "column": 1}},
          {"start": {"name": "section", "attributes": {"title": "S"}, "line": 2, "column": 3}},
          {"start": {"name": "paragraph", "line": 3, "column": 5}},
          {"text": {"text": "Hi", "line": 3, "column": 16}},
          {"end": {"name": "paragraph"}},
          {"end": {"name": "section"}},
          {"end": {"name": "document"}}
        ]
    "#};

    let doc = parse_json(json, Some("doc.json"), &Limits::default()).unwrap();
    let lexical = &doc.sections[0].data.lexical;
    assert_eq!(lexical.to_string(), "doc.json:2:3");
}

#[test]
fn json_transport_errors() {
    let err = parse_json("[{\"start\": {}}]", None, &Limits::default()).unwrap_err();
    assert!(matches!(err, Error::Events(_)), "{err}");

    let err = parse_json(
        r#"[{"start": {"name": "chapter", "line": 1, "column": 1}}]"#,
        None,
        &Limits::default(),
    )
    .unwrap_err();
    insta::assert_snapshot!(err, @"1:1: unknown element `chapter`");
}
