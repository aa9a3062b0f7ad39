//! Fixtures for unit tests.
//!
//! Documents are written as compact markup and read into events with real
//! line and column positions:
//!
//! ```text
//! <document title="T">
//!   <section title="A"><paragraph>Hello</paragraph></section>
//! </document>
//! ```
//!
//! Tags may self-close (`<footnote-ref target="n"/>`). Attribute values are
//! double-quoted. There are no entities and no comments.

use folio_core::ast::Document;
use folio_core::{Lexical, Parsed};

use crate::event::{Attributes, Event};
use crate::{CompiledDocument, DumpPrinter, Limits, ParseError, compile, parse_events};

struct Reader {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
}

impl Reader {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn take_while(&mut self, keep: impl Fn(char) -> bool) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if !keep(c) {
                break;
            }
            out.push(c);
            self.bump();
        }
        out
    }

    fn expect(&mut self, expected: char) {
        let found = self.bump();
        assert_eq!(found, Some(expected), "fixture: expected {expected:?}");
    }
}

pub fn events(src: &str) -> Vec<Event> {
    let mut reader = Reader {
        chars: src.chars().collect(),
        pos: 0,
        line: 1,
        column: 1,
    };
    let mut out = Vec::new();

    while let Some(c) = reader.peek() {
        let (line, column) = (reader.line, reader.column);

        if c != '<' {
            let text = reader.take_while(|c| c != '<');
            out.push(Event::Text { text, line, column });
            continue;
        }

        reader.expect('<');
        if reader.peek() == Some('/') {
            reader.expect('/');
            let name = reader.take_while(|c| c != '>');
            reader.expect('>');
            out.push(Event::end(name.trim()));
            continue;
        }

        let name = reader.take_while(|c| !c.is_whitespace() && c != '/' && c != '>');
        let mut attributes = Attributes::new();
        loop {
            reader.take_while(char::is_whitespace);
            match reader.peek() {
                Some('/') => {
                    reader.expect('/');
                    reader.expect('>');
                    out.push(Event::Start {
                        name: name.clone(),
                        attributes,
                        line,
                        column,
                    });
                    out.push(Event::end(&name));
                    break;
                }
                Some('>') => {
                    reader.expect('>');
                    out.push(Event::Start {
                        name,
                        attributes,
                        line,
                        column,
                    });
                    break;
                }
                Some(_) => {
                    let key = reader.take_while(|c| c != '=');
                    reader.expect('=');
                    reader.expect('"');
                    let value = reader.take_while(|c| c != '"');
                    reader.expect('"');
                    attributes.insert(key.trim().to_string(), value);
                }
                None => panic!("fixture: unterminated tag `{name}`"),
            }
        }
    }

    out
}

pub fn parse(src: &str) -> Document<Parsed> {
    parse_events(events(src), &Limits::default()).expect("fixture should parse")
}

pub fn parse_err(src: &str) -> ParseError {
    parse_events(events(src), &Limits::default()).expect_err("fixture should not parse")
}

pub fn compile_src(src: &str) -> CompiledDocument {
    compile(&parse(src)).expect("fixture should compile")
}

pub fn dump_parsed(src: &str) -> String {
    DumpPrinter::new(&parse(src)).render()
}

pub fn dump(src: &str) -> String {
    let compiled = compile_src(src);
    DumpPrinter::new(compiled.document()).render()
}

/// Parse-phase payload at a position, for trees built in code.
pub fn at(line: u32, column: u32) -> Parsed {
    Parsed::at(Lexical::new(line, column))
}
