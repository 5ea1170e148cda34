//! NodeArena storage and creation methods (add_* methods).
//!
//! Nodes are appended leaf-first: a parent is added after its children, so
//! every child index is smaller than its parent's.

use crate::base::NodeIndex;
use crate::node::*;
use effinal_common::interner::{Atom, Interner};
use effinal_common::span::Span;
use std::sync::Arc;

/// Flat storage for the nodes of one compilation unit.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
    interner: Interner,
    file_name: String,
    source_text: Option<Arc<str>>,
}

/// A lowered compilation unit: its arena plus the `SourceFile` root.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub arena: NodeArena,
    pub root: NodeIndex,
}

impl SourceUnit {
    pub fn file_name(&self) -> &str {
        self.arena.file_name()
    }
}

impl NodeArena {
    pub fn new(file_name: impl Into<String>) -> NodeArena {
        NodeArena {
            file_name: file_name.into(),
            ..NodeArena::default()
        }
    }

    /// Arena for a unit whose original source text is known. Assignment text
    /// in diagnostics is then sliced from the source instead of re-printed.
    pub fn with_source(file_name: impl Into<String>, source: impl Into<Arc<str>>) -> NodeArena {
        NodeArena {
            file_name: file_name.into(),
            source_text: Some(source.into()),
            ..NodeArena::default()
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn source_text(&self) -> Option<&str> {
        self.source_text.as_deref()
    }

    pub fn set_source_text(&mut self, source: impl Into<Arc<str>>) {
        self.source_text = Some(source.into());
    }

    /// Get a reference to the interner
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    #[inline]
    pub fn intern(&mut self, name: &str) -> Atom {
        self.interner.intern(name)
    }

    #[inline]
    pub fn resolve(&self, atom: Atom) -> &str {
        self.interner.resolve(atom)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node. Total over any index: stale or `NONE` handles give `None`.
    #[inline]
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        if idx.is_none() {
            return None;
        }
        self.nodes.get(idx.0 as usize)
    }

    /// Iterate all nodes with their indices, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeIndex(i as u32), node))
    }

    fn push(&mut self, span: Span, data: NodeData) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node { span, data });
        idx
    }

    // =========================================================================
    // Builders
    // =========================================================================

    pub fn add_source_file(&mut self, span: Span, statements: Vec<NodeIndex>) -> NodeIndex {
        let file_name = self.file_name.clone();
        self.push(
            span,
            NodeData::SourceFile(SourceFileData {
                file_name,
                statements,
            }),
        )
    }

    /// `name` may be empty for anonymous callables; `body` may be `NONE`.
    pub fn add_callable(
        &mut self,
        span: Span,
        kind: CallableKind,
        name: &str,
        parameters: Vec<NodeIndex>,
        body: NodeIndex,
    ) -> NodeIndex {
        let name = self.intern(name);
        self.push(
            span,
            NodeData::Callable(CallableData {
                kind,
                name,
                parameters,
                body,
            }),
        )
    }

    pub fn add_parameter(&mut self, span: Span, name: &str, is_final: bool) -> NodeIndex {
        let name = self.intern(name);
        self.push(span, NodeData::Parameter(ParameterData { name, is_final }))
    }

    pub fn add_assignment(
        &mut self,
        span: Span,
        operator: AssignOp,
        target: NodeIndex,
        value: NodeIndex,
    ) -> NodeIndex {
        self.push(
            span,
            NodeData::Assignment(AssignmentData {
                operator,
                target,
                value,
            }),
        )
    }

    pub fn add_update(
        &mut self,
        span: Span,
        operator: UpdateOp,
        prefix: bool,
        operand: NodeIndex,
    ) -> NodeIndex {
        self.push(
            span,
            NodeData::Update(UpdateData {
                operator,
                prefix,
                operand,
            }),
        )
    }

    pub fn add_identifier(&mut self, span: Span, name: &str) -> NodeIndex {
        let name = self.intern(name);
        self.push(span, NodeData::Identifier(IdentifierData { name }))
    }

    pub fn add_property_access(
        &mut self,
        span: Span,
        expression: NodeIndex,
        name: &str,
    ) -> NodeIndex {
        let name = self.intern(name);
        self.push(
            span,
            NodeData::PropertyAccess(PropertyAccessData { expression, name }),
        )
    }

    pub fn add_element_access(
        &mut self,
        span: Span,
        expression: NodeIndex,
        argument: NodeIndex,
    ) -> NodeIndex {
        self.push(
            span,
            NodeData::ElementAccess(ElementAccessData {
                expression,
                argument,
            }),
        )
    }

    pub fn add_block(&mut self, span: Span, statements: Vec<NodeIndex>) -> NodeIndex {
        self.push(span, NodeData::Block(BlockData { statements }))
    }

    pub fn add_literal(&mut self, span: Span, text: impl Into<String>) -> NodeIndex {
        self.push(span, NodeData::Literal(LiteralData { text: text.into() }))
    }

    pub fn add_other(
        &mut self,
        span: Span,
        label: impl Into<String>,
        children: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.push(
            span,
            NodeData::Other(OtherData {
                label: label.into(),
                children,
            }),
        )
    }
}

#[cfg(test)]
#[path = "../tests/node_arena_tests.rs"]
mod tests;
