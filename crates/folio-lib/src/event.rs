//! Structural events consumed by the parser.
//!
//! The JSON transport is an array of externally tagged objects:
//!
//! ```json
//! [
//!   {"start": {"name": "document", "attributes": {"title": "Notes"}, "line": 1, "column": 1}},
//!   {"text": {"text": "Hello.", "line": 2, "column": 3}},
//!   {"end": {"name": "document"}}
//! ]
//! ```
//!
//! Positions are optional; a missing position reads as unknown (`0:0`).

use folio_core::Lexical;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Element attributes in document order.
pub type Attributes = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    Start {
        name: String,
        #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
        attributes: Attributes,
        #[serde(default, skip_serializing_if = "is_zero")]
        line: u32,
        #[serde(default, skip_serializing_if = "is_zero")]
        column: u32,
    },
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "is_zero")]
        line: u32,
        #[serde(default, skip_serializing_if = "is_zero")]
        column: u32,
    },
    End {
        name: String,
    },
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl Event {
    pub fn start<'a>(
        name: &str,
        attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Event::Start {
            name: name.to_string(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            line: 0,
            column: 0,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Event::Text {
            text: text.into(),
            line: 0,
            column: 0,
        }
    }

    pub fn end(name: &str) -> Self {
        Event::End {
            name: name.to_string(),
        }
    }

    /// Set the position of a start or text event. End events carry none.
    pub fn at(mut self, at_line: u32, at_column: u32) -> Self {
        match &mut self {
            Event::Start { line, column, .. } | Event::Text { line, column, .. } => {
                *line = at_line;
                *column = at_column;
            }
            Event::End { .. } => {}
        }
        self
    }

    /// Position of the event, unknown for end events.
    pub fn lexical(&self) -> Lexical {
        match self {
            Event::Start { line, column, .. } | Event::Text { line, column, .. } => {
                Lexical::new(*line, *column)
            }
            Event::End { .. } => Lexical::default(),
        }
    }
}

pub fn from_json(json: &str) -> Result<Vec<Event>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serialize as a JSON array with one event per line.
pub fn to_json(events: &[Event]) -> Result<String, serde_json::Error> {
    let mut out = String::from("[\n");
    for (i, event) in events.iter().enumerate() {
        out.push_str("  ");
        out.push_str(&serde_json::to_string(event)?);
        if i + 1 < events.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push(']');
    Ok(out)
}
