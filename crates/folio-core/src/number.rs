use std::fmt;

/// Hierarchical position of a node in document order, e.g. `2.1.4`.
///
/// Ordering is lexicographic over components, which for numbers handed out
/// by one compilation coincides with document order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentNumber(Vec<u64>);

impl ContentNumber {
    /// Returns `None` for an empty component list.
    pub fn new(components: Vec<u64>) -> Option<Self> {
        if components.is_empty() {
            return None;
        }
        Some(Self(components))
    }

    /// `prefix` followed by `last`. Never empty.
    pub fn from_parts(prefix: &[u64], last: u64) -> Self {
        let mut components = Vec::with_capacity(prefix.len() + 1);
        components.extend_from_slice(prefix);
        components.push(last);
        Self(components)
    }

    pub fn components(&self) -> &[u64] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn last(&self) -> u64 {
        self.0[self.0.len() - 1]
    }

    /// Number of the enclosing level, `None` at depth 1.
    pub fn parent(&self) -> Option<ContentNumber> {
        if self.0.len() == 1 {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    pub fn starts_with(&self, prefix: &ContentNumber) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for ContentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}
