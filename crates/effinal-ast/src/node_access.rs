//! Typed node accessors and child enumeration.

use crate::base::NodeIndex;
use crate::node::*;
use crate::node_arena::NodeArena;
use smallvec::SmallVec;

/// Direct children of a node. Most nodes have at most four.
pub type Children = SmallVec<[NodeIndex; 4]>;

impl NodeArena {
    #[inline]
    pub fn get_source_file<'a>(&self, node: &'a Node) -> Option<&'a SourceFileData> {
        match &node.data {
            NodeData::SourceFile(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    pub fn get_callable<'a>(&self, node: &'a Node) -> Option<&'a CallableData> {
        match &node.data {
            NodeData::Callable(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    pub fn get_parameter<'a>(&self, node: &'a Node) -> Option<&'a ParameterData> {
        match &node.data {
            NodeData::Parameter(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    pub fn get_assignment<'a>(&self, node: &'a Node) -> Option<&'a AssignmentData> {
        match &node.data {
            NodeData::Assignment(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    pub fn get_identifier<'a>(&self, node: &'a Node) -> Option<&'a IdentifierData> {
        match &node.data {
            NodeData::Identifier(data) => Some(data),
            _ => None,
        }
    }

    /// Parameter data for a parameter handle, `None` if the handle is stale or
    /// points at some other kind of node.
    pub fn parameter_at(&self, idx: NodeIndex) -> Option<&ParameterData> {
        self.get(idx).and_then(|node| self.get_parameter(node))
    }

    /// Source text covered by a node, when the unit carries source text and the
    /// node's span fits inside it.
    pub fn text_of(&self, idx: NodeIndex) -> Option<&str> {
        let node = self.get(idx)?;
        node.span.slice(self.source_text()?)
    }

    /// Direct children of `idx` in source order. `NONE` slots (a missing body)
    /// are skipped; an invalid `idx` has no children.
    pub fn children(&self, idx: NodeIndex) -> Children {
        let mut out = Children::new();
        let Some(node) = self.get(idx) else {
            return out;
        };

        match &node.data {
            NodeData::SourceFile(data) => out.extend(data.statements.iter().copied()),
            NodeData::Callable(data) => {
                out.extend(data.parameters.iter().copied());
                out.push(data.body);
            }
            NodeData::Assignment(data) => {
                out.push(data.target);
                out.push(data.value);
            }
            NodeData::Update(data) => out.push(data.operand),
            NodeData::PropertyAccess(data) => out.push(data.expression),
            NodeData::ElementAccess(data) => {
                out.push(data.expression);
                out.push(data.argument);
            }
            NodeData::Block(data) => out.extend(data.statements.iter().copied()),
            NodeData::Other(data) => out.extend(data.children.iter().copied()),
            NodeData::Parameter(_) | NodeData::Identifier(_) | NodeData::Literal(_) => {}
        }

        out.retain(|child| child.is_some());
        out
    }
}
