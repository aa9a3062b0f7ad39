//! Validated identifier values.
//!
//! Type names classify blocks and inline content for renderers; block ids
//! name blocks so that links and references can target them. Both share one
//! lexical grammar: one to [`NAME_MAX_LEN`] characters, each alphanumeric,
//! `_`, `-` or `.`.

use std::fmt;

pub const NAME_MAX_LEN: usize = 256;

/// Why a candidate name was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    TooLong { len: usize },
    InvalidChar { ch: char, offset: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Empty => write!(f, "must not be empty"),
            Rejection::TooLong { len } => {
                write!(f, "is {len} characters long (maximum {NAME_MAX_LEN})")
            }
            Rejection::InvalidChar { ch, offset } => {
                write!(f, "contains {ch:?} at offset {offset}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {what} `{value}`: {reason}")]
pub struct ValueRejected {
    pub what: &'static str,
    pub value: String,
    pub reason: Rejection,
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}

fn check(what: &'static str, value: &str) -> Result<(), ValueRejected> {
    let reject = |reason| ValueRejected {
        what,
        value: value.to_string(),
        reason,
    };

    if value.is_empty() {
        return Err(reject(Rejection::Empty));
    }

    let len = value.chars().count();
    if len > NAME_MAX_LEN {
        return Err(reject(Rejection::TooLong { len }));
    }

    if let Some((offset, ch)) = value.char_indices().find(|&(_, c)| !is_name_char(c)) {
        return Err(reject(Rejection::InvalidChar { ch, offset }));
    }

    Ok(())
}

macro_rules! validated_name {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self, ValueRejected> {
                let value = value.into();
                check($what, &value)?;
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ValueRejected;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

validated_name!(
    /// Renderer-facing classification of a node, e.g. `warning` or `code.rust`.
    TypeName,
    "type name"
);

validated_name!(
    /// Document-unique name of a block, targeted by links and references.
    BlockId,
    "block id"
);
