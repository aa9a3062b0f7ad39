use std::fmt;
use std::sync::Arc;

/// Position of an element or text run in the source document.
///
/// Lines and columns are 1-based. Zero means "unknown", which is what
/// programmatically built trees carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Lexical {
    pub file: Option<Arc<str>>,
    pub line: u32,
    pub column: u32,
}

impl Lexical {
    pub fn new(line: u32, column: u32) -> Self {
        Self {
            file: None,
            line,
            column,
        }
    }

    pub fn with_file(mut self, file: Arc<str>) -> Self {
        self.file = Some(file);
        self
    }

    pub fn is_known(&self) -> bool {
        self.line != 0
    }
}

impl fmt::Display for Lexical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(file) = &self.file {
            write!(f, "{file}:")?;
        }
        write!(f, "{}:{}", self.line, self.column)
    }
}
