use indexmap::IndexMap;

use folio_core::ast::{Document, Footnote, FormalItem, Section, Subsection};
use folio_core::{BlockId, Compiled, ContentNumber, NodeId, NodeRef};

use super::parents::ParentTable;

/// Result of a successful compilation.
///
/// Immutable. Every node is reachable from the root, every parent chain ends
/// at the root, and numbers are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDocument {
    pub(super) document: Document<Compiled>,
    pub(super) parents: ParentTable,
    pub(super) blocks: IndexMap<BlockId, NodeId>,
    pub(super) footnotes: IndexMap<BlockId, NodeId>,
    pub(super) slots: Slots,
    pub(super) len: usize,
}

impl CompiledDocument {
    pub fn document(&self) -> &Document<Compiled> {
        &self.document
    }

    pub fn root(&self) -> NodeRef<'_, Compiled> {
        NodeRef::Document(&self.document)
    }

    /// Number of nodes, the document included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Node with the given id, reached by descending from the root along
    /// its recorded child positions.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, Compiled>> {
        let mut path = Vec::new();
        let mut current = id;
        while current != NodeId::ROOT {
            let slot = self.slots.get(current)?;
            path.push(slot.index);
            current = slot.container;
        }
        path.iter()
            .rev()
            .try_fold(self.root(), |node, &index| node.child(index))
    }

    /// Nearest enclosing block. `None` for the document and unknown ids.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(id)
    }

    /// Parent chain from the node's parent up to the document.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), |&node| self.parent(node))
    }

    pub fn number(&self, id: NodeId) -> Option<&ContentNumber> {
        self.node(id).map(|node| &node.data().number)
    }

    /// Block that declared `id`.
    pub fn find_block(&self, id: &BlockId) -> Option<NodeRef<'_, Compiled>> {
        self.node(*self.blocks.get(id)?)
    }

    pub fn find_section(&self, id: &BlockId) -> Option<&Section<Compiled>> {
        match self.find_block(id)? {
            NodeRef::Section(section) => Some(section),
            _ => None,
        }
    }

    pub fn find_subsection(&self, id: &BlockId) -> Option<&Subsection<Compiled>> {
        match self.find_block(id)? {
            NodeRef::Subsection(subsection) => Some(subsection),
            _ => None,
        }
    }

    pub fn find_formal_item(&self, id: &BlockId) -> Option<&FormalItem<Compiled>> {
        match self.find_block(id)? {
            NodeRef::FormalItem(item) => Some(item),
            _ => None,
        }
    }

    pub fn find_footnote(&self, id: &BlockId) -> Option<&Footnote<Compiled>> {
        match self.find_block(id)? {
            NodeRef::Footnote(footnote) => Some(footnote),
            _ => None,
        }
    }

    /// 1-based position of a footnote among all footnotes in document order.
    pub fn footnote_index(&self, id: &BlockId) -> Option<usize> {
        self.footnotes.get_index_of(id).map(|index| index + 1)
    }
}

/// Where a node sits inside its tree parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    container: NodeId,
    index: usize,
}

/// Child positions of every non-root node, indexed by node id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Slots(Vec<Option<Slot>>);

impl Slots {
    pub(super) fn build(root: NodeRef<'_, Compiled>, len: usize) -> Self {
        let mut slots = vec![None; len];
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let container = node.data().id;
            for (index, child) in node.children().into_iter().enumerate() {
                if let Some(slot) = slots.get_mut(child.data().id.index()) {
                    *slot = Some(Slot { container, index });
                }
                stack.push(child);
            }
        }
        Self(slots)
    }

    fn get(&self, id: NodeId) -> Option<Slot> {
        self.0.get(id.index()).copied().flatten()
    }
}
