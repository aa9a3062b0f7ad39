//! Resource limits for parsing.
//!
//! Element nesting bounds the recursion depth of every later pass, and the
//! event budget bounds total work on hostile input.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Maximum element nesting depth, the document element counting as 1.
    pub max_depth: u32,
    /// Maximum number of events a single parse accepts. `None` is unbounded.
    pub max_events: Option<u64>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 256,
            max_events: None,
        }
    }
}

impl Limits {
    /// Deepest nesting any limits may allow. The compiler recurses once per
    /// level, and this depth fits the main thread's stack.
    pub const MAX_DEPTH: u32 = 1024;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_max_events(mut self, events: Option<u64>) -> Self {
        self.max_events = events;
        self
    }

    /// Parse limits from JSON, e.g. `{"max_depth": 64}`. Missing keys keep
    /// their defaults; unknown keys are rejected.
    pub fn from_json(json: &str) -> Result<Self, LimitError> {
        let limits: Limits =
            serde_json::from_str(json).map_err(|e| LimitError::Malformed(e.to_string()))?;
        limits.validate()?;
        Ok(limits)
    }

    pub fn validate(&self) -> Result<(), LimitError> {
        if self.max_depth == 0 || self.max_depth > Self::MAX_DEPTH {
            return Err(LimitError::OutOfRange {
                name: "max_depth",
                value: u64::from(self.max_depth),
            });
        }
        if self.max_events == Some(0) {
            return Err(LimitError::OutOfRange {
                name: "max_events",
                value: 0,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LimitError {
    #[error("invalid limit `{name}`: {value} (must be positive and reasonable)")]
    OutOfRange { name: &'static str, value: u64 },

    #[error("malformed limits: {0}")]
    Malformed(String),
}
