use folio_core::NodeId;

use crate::InternalFault;

/// Assign-once parent table indexed by [`NodeId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentTable {
    parents: Vec<Option<NodeId>>,
}

impl ParentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `parent` for `node`. A second assignment for the same node is a fault.
    pub fn assign(&mut self, node: NodeId, parent: NodeId) -> Result<(), InternalFault> {
        let index = node.index();
        if index >= self.parents.len() {
            self.parents.resize(index + 1, None);
        }

        let slot = &mut self.parents[index];
        if slot.is_some() {
            return Err(InternalFault::ParentReassigned { node });
        }
        *slot = Some(parent);
        Ok(())
    }

    pub fn get(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(node.index()).copied().flatten()
    }
}
