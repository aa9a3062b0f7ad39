use indexmap::IndexMap;
use tracing::{debug, trace};

use folio_core::ast::Document;
use folio_core::{BlockId, Compiled, Lexical, NodeId, NodeRef, Parsed};

use super::compiled::{CompiledDocument, Slots};
use super::parents::ParentTable;
use crate::checked::Checked;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::numbering::Numbering;
use crate::{Error, InternalFault};

/// Call-scoped state of one compilation.
pub(super) struct Compiler {
    numbering: Numbering,
    next_id: u32,
    parents: ParentTable,
    /// First internal fault; later ones are dropped.
    fault: Option<InternalFault>,
    blocks: IndexMap<BlockId, (NodeId, Lexical)>,
    footnotes: IndexMap<BlockId, NodeId>,
}

impl Compiler {
    pub(super) fn new() -> Self {
        Self {
            numbering: Numbering::new(),
            next_id: 0,
            parents: ParentTable::new(),
            fault: None,
            blocks: IndexMap::new(),
            footnotes: IndexMap::new(),
        }
    }

    pub(super) fn record(&mut self, fault: InternalFault) {
        if self.fault.is_none() {
            self.fault = Some(fault);
        }
    }

    fn allocate(&mut self) -> NodeId {
        let id = NodeId::from_raw(self.next_id);
        match self.next_id.checked_add(1) {
            Some(next) => self.next_id = next,
            None => self.record(InternalFault::NodeIdOverflow),
        }
        id
    }

    /// Payload of the document: the current number, without opening a level.
    pub(super) fn root(&mut self, parsed: &Parsed) -> Compiled {
        Compiled {
            id: self.allocate(),
            number: self.numbering.current(),
            lexical: parsed.lexical.clone(),
        }
    }

    /// Number a node and open the level its children are numbered in.
    pub(super) fn enter(&mut self, parsed: &Parsed) -> Compiled {
        let id = self.allocate();
        if let Err(fault) = self.numbering.increment() {
            self.record(fault);
        }
        let number = self.numbering.current();
        self.numbering.push();

        trace!(%id, %number, "numbered node");
        Compiled {
            id,
            number,
            lexical: parsed.lexical.clone(),
        }
    }

    pub(super) fn leave(&mut self) {
        if let Err(fault) = self.numbering.pop() {
            self.record(fault);
        }
    }

    /// `enter`, compile the children with `children`, then `leave`.
    pub(super) fn within<T>(
        &mut self,
        parsed: &Parsed,
        children: impl FnOnce(&mut Self, &Compiled) -> T,
    ) -> (Compiled, T) {
        let data = self.enter(parsed);
        let result = children(self, &data);
        self.leave();
        (data, result)
    }

    /// A node without children.
    pub(super) fn leaf(&mut self, parsed: &Parsed) -> Compiled {
        self.within(parsed, |_, _| ()).0
    }

    /// Register a block id. Repeats are diagnosed against the first declaration.
    pub(super) fn declare(&mut self, id: Option<&BlockId>, data: &Compiled) -> Checked<()> {
        let Some(id) = id else {
            return Ok(());
        };

        if let Some((_, first)) = self.blocks.get(id) {
            let mut diagnostics = Diagnostics::new();
            diagnostics
                .report(DiagnosticKind::DuplicateBlockId, data.lexical.clone())
                .message(id.as_str())
                .hint(format!("first declared at {first}"))
                .emit();
            return Err(diagnostics);
        }

        self.blocks
            .insert(id.clone(), (data.id, data.lexical.clone()));
        Ok(())
    }

    pub(super) fn declare_footnote(&mut self, id: &BlockId, data: &Compiled) -> Checked<()> {
        self.declare(Some(id), data)?;
        self.footnotes.insert(id.clone(), data.id);
        Ok(())
    }

    /// Make the block `parent` the parent of its direct children and of every
    /// inline node below it that has no nearer block.
    pub(super) fn adopt(&mut self, parent: NodeRef<'_, Compiled>) {
        let parent_id = parent.data().id;
        for child in parent.children() {
            self.adopt_into(parent_id, child);
        }
    }

    fn adopt_into(&mut self, parent: NodeId, node: NodeRef<'_, Compiled>) {
        if let Err(fault) = self.parents.assign(node.data().id, parent) {
            self.record(fault);
        }
        if node.is_block() {
            return;
        }
        for child in node.children() {
            self.adopt_into(parent, child);
        }
    }

    /// Check post-conditions and package the result.
    ///
    /// Internal faults take precedence over diagnostics.
    pub(super) fn finish(
        mut self,
        result: Checked<Document<Compiled>>,
    ) -> crate::Result<CompiledDocument> {
        let depth = self.numbering.depth();
        if depth != 1 {
            self.record(InternalFault::NumberingImbalance { depth });
        }
        if let Some(fault) = self.fault {
            debug!(%fault, "compilation aborted by internal fault");
            return Err(Error::Internal(fault));
        }

        let document = match result {
            Ok(document) => document,
            Err(diagnostics) => {
                debug!(
                    errors = diagnostics.error_count(),
                    warnings = diagnostics.warning_count(),
                    "compilation failed"
                );
                return Err(Error::CompileFailed(diagnostics));
            }
        };

        let len = self.next_id as usize;
        debug!(nodes = len, blocks = self.blocks.len(), "compiled document");

        let slots = Slots::build(NodeRef::Document(&document), len);
        Ok(CompiledDocument {
            document,
            parents: self.parents,
            blocks: self
                .blocks
                .into_iter()
                .map(|(id, (node, _))| (id, node))
                .collect(),
            footnotes: self.footnotes,
            slots,
            len,
        })
    }
}
