use folio_core::NodeId;

/// Internal-consistency violations of the compiler.
///
/// Well-formed or not, no input document can cause one of these; they are
/// kept apart from [`Diagnostics`](crate::Diagnostics) so callers never show
/// them as user errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternalFault {
    #[error("cannot remove the last component of a numbering stack")]
    NumberingUnderflow,

    #[error("numbering counter overflowed at depth {depth}")]
    NumberingOverflow { depth: usize },

    #[error("numbering stack has depth {depth} after compilation, expected 1")]
    NumberingImbalance { depth: usize },

    #[error("node id space exhausted")]
    NodeIdOverflow,

    #[error("parent of node {node} assigned more than once")]
    ParentReassigned { node: NodeId },
}
