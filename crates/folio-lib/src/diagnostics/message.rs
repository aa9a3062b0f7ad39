use std::fmt;

use folio_core::Lexical;

/// Compile-time diagnostic kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    /// A table row whose cell count differs from the header's column count.
    TableRowArity,
    /// A block id declared by more than one block.
    DuplicateBlockId,
}

impl DiagnosticKind {
    /// Default severity for this kind. Can be overridden per diagnostic.
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::TableRowArity | Self::DuplicateBlockId => Severity::Error,
        }
    }

    /// Default hint for this kind, used when the call site provides none.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::TableRowArity => Some("every row needs exactly one cell per header column"),
            Self::DuplicateBlockId => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::TableRowArity => "table row does not match the table header",
            Self::DuplicateBlockId => "duplicate block id",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::DuplicateBlockId => "block id `{}` is already in use".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One diagnostic record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub(crate) kind: DiagnosticKind,
    pub(crate) lexical: Lexical,
    pub(crate) severity: Severity,
    pub(crate) message: String,
    pub(crate) hint: Option<String>,
}

impl Diagnostic {
    pub(crate) fn with_default_message(kind: DiagnosticKind, lexical: Lexical) -> Self {
        Self {
            kind,
            lexical,
            severity: kind.default_severity(),
            message: kind.fallback_message().to_string(),
            hint: kind.default_hint().map(str::to_string),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn lexical(&self) -> &Lexical {
        &self.lexical
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.lexical, self.severity, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}
