//! Hierarchical counter stack used to number nodes during compilation.

use folio_core::ContentNumber;

use crate::InternalFault;

/// A stack of counters that always holds at least one component.
///
/// The top counter is kept apart from the rest so that emptiness cannot be
/// represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numbering {
    outer: Vec<u64>,
    top: u64,
}

impl Default for Numbering {
    fn default() -> Self {
        Self::new()
    }
}

impl Numbering {
    /// A stack with a single zero component.
    pub fn new() -> Self {
        Self {
            outer: Vec::new(),
            top: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.outer.len() + 1
    }

    /// Add one to the top component.
    pub fn increment(&mut self) -> Result<(), InternalFault> {
        self.top = self
            .top
            .checked_add(1)
            .ok_or(InternalFault::NumberingOverflow {
                depth: self.depth(),
            })?;
        Ok(())
    }

    /// Open a new level starting at zero.
    pub fn push(&mut self) {
        self.outer.push(self.top);
        self.top = 0;
    }

    /// Close the current level. The last remaining component cannot be removed.
    pub fn pop(&mut self) -> Result<(), InternalFault> {
        let Some(previous) = self.outer.pop() else {
            return Err(InternalFault::NumberingUnderflow);
        };
        self.top = previous;
        Ok(())
    }

    pub fn current(&self) -> ContentNumber {
        ContentNumber::from_parts(&self.outer, self.top)
    }
}
