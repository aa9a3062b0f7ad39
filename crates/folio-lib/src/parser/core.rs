//! Parser state machine.

use std::sync::Arc;

use folio_core::ast::{Document, TableHeader};
use folio_core::{Lexical, Parsed};
use tracing::{debug, trace};

use super::attributes::AttributeReader;
use super::element::Element;
use super::error::{ParseError, ParseErrorKind};
use super::frame::{self, Frame, FrameState, Node};
use super::invariants;
use crate::event::{Attributes, Event};
use crate::limits::Limits;

/// Incremental parser: feed it events one at a time, then call [`Parser::finish`].
///
/// The first error is sticky. Every later call returns it again and no
/// further state changes.
pub struct Parser {
    limits: Limits,
    file: Option<Arc<str>>,
    stack: Vec<Frame>,
    root: Option<Document<Parsed>>,
    events: u64,
    failed: Option<ParseError>,
}

impl Parser {
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            file: None,
            stack: Vec::with_capacity(16),
            root: None,
            events: 0,
            failed: None,
        }
    }

    /// Attach a file name to every position that does not carry one.
    pub fn with_file(mut self, file: impl Into<Arc<str>>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn feed(&mut self, event: Event) -> Result<(), ParseError> {
        match event {
            Event::Start {
                name,
                attributes,
                line,
                column,
            } => self.start_element(&name, &attributes, Lexical::new(line, column)),
            Event::Text { text, line, column } => {
                self.characters(&text, Lexical::new(line, column))
            }
            Event::End { name } => self.end_element(&name),
        }
    }

    pub fn start_element(
        &mut self,
        name: &str,
        attributes: &Attributes,
        lexical: Lexical,
    ) -> Result<(), ParseError> {
        let lexical = self.locate(lexical);
        let result = self
            .count_event(&lexical)
            .and_then(|()| self.open(name, attributes, lexical));
        self.record(result)
    }

    pub fn characters(&mut self, text: &str, lexical: Lexical) -> Result<(), ParseError> {
        let lexical = self.locate(lexical);
        let result = self
            .count_event(&lexical)
            .and_then(|()| self.text(text, lexical));
        self.record(result)
    }

    pub fn end_element(&mut self, name: &str) -> Result<(), ParseError> {
        let lexical = match self.stack.last() {
            Some(top) => top.lexical.clone(),
            None => self.locate(Lexical::default()),
        };
        let result = self
            .count_event(&lexical)
            .and_then(|()| self.close(name, lexical));
        self.record(result)
    }

    /// The parsed document, once the root element has been closed.
    pub fn finish(self) -> Result<Document<Parsed>, ParseError> {
        if let Some(err) = self.failed {
            return Err(err);
        }

        if let Some(open) = self.stack.last() {
            return Err(ParseError::new(
                ParseErrorKind::UnclosedElement {
                    element: open.element.name(),
                },
                open.lexical.clone(),
            ));
        }

        let eof = self.locate(Lexical::default());
        self.root
            .ok_or_else(|| ParseError::new(ParseErrorKind::EmptyStream, eof))
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn open(
        &mut self,
        name: &str,
        attributes: &Attributes,
        lexical: Lexical,
    ) -> Result<(), ParseError> {
        let at = |kind| ParseError::new(kind, lexical.clone());

        let Some(element) = Element::from_name(name) else {
            return Err(at(ParseErrorKind::UnknownElement {
                name: name.to_string(),
            }));
        };

        match self.stack.last() {
            None if self.root.is_some() => return Err(at(ParseErrorKind::ContentAfterRoot)),
            None if element != Element::Document => {
                return Err(at(ParseErrorKind::RootNotDocument {
                    found: element.name(),
                }));
            }
            None => {}
            Some(parent) => parent.admit(element).map_err(at)?,
        }

        let limit = self.limits.max_depth.min(Limits::MAX_DEPTH);
        if self.stack.len() >= limit as usize {
            return Err(at(ParseErrorKind::DepthLimitExceeded { limit }));
        }

        let reader = AttributeReader::new(element, attributes).map_err(at)?;
        let frame = Frame::open(element, &reader, lexical.clone()).map_err(at)?;

        trace!(element = %element, depth = self.stack.len() + 1, %lexical, "open");
        self.stack.push(frame);
        Ok(())
    }

    fn text(&mut self, text: &str, lexical: Lexical) -> Result<(), ParseError> {
        let blank = text.chars().all(char::is_whitespace);

        let Some(top) = self.stack.last_mut() else {
            if blank {
                return Ok(());
            }
            let kind = if self.root.is_some() {
                ParseErrorKind::ContentAfterRoot
            } else {
                ParseErrorKind::TextOutsideRoot
            };
            return Err(ParseError::new(kind, lexical));
        };

        if !top.element.accepts_text() {
            if blank {
                return Ok(());
            }
            return Err(ParseError::new(
                ParseErrorKind::TextNotAllowed {
                    element: top.element.name(),
                },
                lexical,
            ));
        }

        trace!(element = %top.element, len = text.len(), %lexical, "text");
        top.text(text, lexical);
        Ok(())
    }

    fn close(&mut self, name: &str, lexical: Lexical) -> Result<(), ParseError> {
        let Some(frame) = self.stack.pop() else {
            return Err(ParseError::new(
                ParseErrorKind::UnmatchedEnd {
                    name: name.to_string(),
                },
                lexical,
            ));
        };

        if frame.element.name() != name {
            let err = ParseError::new(
                ParseErrorKind::MismatchedEnd {
                    expected: frame.element.name(),
                    found: name.to_string(),
                },
                lexical,
            );
            self.stack.push(frame);
            return Err(err);
        }

        trace!(element = %frame.element, %lexical, "close");
        let node = frame.finish()?;

        if let Node::TableRow(row) = &node
            && let Some(header) = self.enclosing_header()
        {
            frame::check_row(header, row)?;
        }

        match self.stack.last_mut() {
            Some(parent) => parent.accept(node),
            None => match node {
                Node::Document(document) => {
                    debug!(
                        sections = document.sections.len(),
                        title = %document.title,
                        "document parsed"
                    );
                    self.root = Some(document);
                }
                other => invariants::root_not_document(other.describe()),
            },
        }
        Ok(())
    }

    /// Header of the table a just-finished row belongs to, if already known.
    fn enclosing_header(&self) -> Option<&TableHeader<Parsed>> {
        let mut frames = self.stack.iter().rev();
        let table = match &frames.next()?.state {
            FrameState::Table(table) => table,
            FrameState::TableBody(_) => match &frames.next()?.state {
                FrameState::Table(table) => table,
                _ => return None,
            },
            _ => return None,
        };
        table.header.as_ref()
    }

    fn count_event(&mut self, lexical: &Lexical) -> Result<(), ParseError> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }

        self.events += 1;
        if let Some(limit) = self.limits.max_events
            && self.events > limit
        {
            return Err(ParseError::new(
                ParseErrorKind::EventLimitExceeded { limit },
                lexical.clone(),
            ));
        }
        Ok(())
    }

    fn record(&mut self, result: Result<(), ParseError>) -> Result<(), ParseError> {
        if let Err(err) = &result
            && self.failed.is_none()
        {
            debug!(error = %err, "parse failed");
            self.failed = Some(err.clone());
        }
        result
    }

    fn locate(&self, lexical: Lexical) -> Lexical {
        match (&self.file, &lexical.file) {
            (Some(file), None) => lexical.with_file(Arc::clone(file)),
            _ => lexical,
        }
    }
}
