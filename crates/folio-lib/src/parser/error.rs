use folio_core::Lexical;

/// A fatal structural error. The parse stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{lexical}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub lexical: Lexical,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, lexical: Lexical) -> Self {
        Self { kind, lexical }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unknown element `{name}`")]
    UnknownElement { name: String },

    #[error("the root element must be `document`, found `{found}`")]
    RootNotDocument { found: &'static str },

    #[error("`{child}` is not allowed inside `{parent}`")]
    UnexpectedChild {
        parent: &'static str,
        child: &'static str,
    },

    #[error("`{child}` cannot follow {existing} in the same section")]
    MixedSectionContent {
        existing: &'static str,
        child: &'static str,
    },

    #[error("`{parent}` already has a `{child}`")]
    DuplicateChild {
        parent: &'static str,
        child: &'static str,
    },

    #[error("`{child}` cannot follow `{after}` inside `{parent}`")]
    ChildOutOfOrder {
        parent: &'static str,
        child: &'static str,
        after: &'static str,
    },

    #[error("text is not allowed inside `{element}`")]
    TextNotAllowed { element: &'static str },

    #[error("text outside the document element")]
    TextOutsideRoot,

    #[error("`{element}` requires attribute `{attribute}`")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("`{element}` does not take attribute `{attribute}`")]
    UnknownAttribute {
        element: &'static str,
        attribute: String,
    },

    #[error("invalid value {value:?} for attribute `{attribute}` of `{element}`: {reason}")]
    InvalidAttribute {
        element: &'static str,
        attribute: &'static str,
        value: String,
        reason: String,
    },

    #[error("end of `{found}` does not match the open `{expected}`")]
    MismatchedEnd {
        expected: &'static str,
        found: String,
    },

    #[error("end of `{name}` without an open element")]
    UnmatchedEnd { name: String },

    #[error("`{element}` was never closed")]
    UnclosedElement { element: &'static str },

    #[error("event stream contains no document")]
    EmptyStream,

    #[error("content after the document element")]
    ContentAfterRoot,

    #[error("table row has {received} cells but the header declares {expected} columns")]
    TableRowArity { expected: usize, received: usize },

    #[error("elements nested deeper than {limit} levels")]
    DepthLimitExceeded { limit: u32 },

    #[error("event stream longer than {limit} events")]
    EventLimitExceeded { limit: u64 },
}
