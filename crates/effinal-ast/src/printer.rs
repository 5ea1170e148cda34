//! Compact source-like rendering of sub-trees.
//!
//! Used for diagnostic text when a unit was handed over without its source.
//! Output is single-line: `x = y + 1`, `(a, b) -> { a = b; }`.

use crate::base::NodeIndex;
use crate::node::{CallableKind, NodeData};
use crate::node_arena::NodeArena;
use effinal_common::limits::{STACK_GROWTH, STACK_RED_ZONE};

/// Render the sub-tree rooted at `idx`. Invalid indices render as `<missing>`.
pub fn print_node(arena: &NodeArena, idx: NodeIndex) -> String {
    let mut printer = Printer {
        arena,
        out: String::new(),
    };
    printer.print(idx);
    printer.out
}

struct Printer<'a> {
    arena: &'a NodeArena,
    out: String,
}

impl Printer<'_> {
    fn print(&mut self, idx: NodeIndex) {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || self.print_inner(idx));
    }

    fn print_inner(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let Some(node) = arena.get(idx) else {
            self.out.push_str("<missing>");
            return;
        };

        match &node.data {
            NodeData::SourceFile(data) => {
                for (i, &stmt) in data.statements.iter().enumerate() {
                    if i > 0 {
                        self.out.push(' ');
                    }
                    self.print_statement(stmt);
                }
            }
            NodeData::Callable(data) => {
                if data.kind != CallableKind::Lambda && !data.name.is_none() {
                    self.out.push_str(arena.resolve(data.name));
                }
                if data.kind != CallableKind::Initializer {
                    self.out.push('(');
                    self.print_list(&data.parameters);
                    self.out.push(')');
                }
                if data.body.is_none() {
                    self.out.push(';');
                    return;
                }
                if data.kind == CallableKind::Lambda {
                    self.out.push_str(" ->");
                }
                self.out.push(' ');
                self.print(data.body);
            }
            NodeData::Parameter(data) => {
                if data.is_final {
                    self.out.push_str("final ");
                }
                self.out.push_str(arena.resolve(data.name));
            }
            NodeData::Assignment(data) => {
                self.print(data.target);
                self.out.push(' ');
                self.out.push_str(data.operator.as_str());
                self.out.push(' ');
                self.print(data.value);
            }
            NodeData::Update(data) => {
                if data.prefix {
                    self.out.push_str(data.operator.as_str());
                    self.print(data.operand);
                } else {
                    self.print(data.operand);
                    self.out.push_str(data.operator.as_str());
                }
            }
            NodeData::Identifier(data) => self.out.push_str(arena.resolve(data.name)),
            NodeData::PropertyAccess(data) => {
                self.print(data.expression);
                self.out.push('.');
                self.out.push_str(arena.resolve(data.name));
            }
            NodeData::ElementAccess(data) => {
                self.print(data.expression);
                self.out.push('[');
                self.print(data.argument);
                self.out.push(']');
            }
            NodeData::Block(data) => {
                if data.statements.is_empty() {
                    self.out.push_str("{}");
                    return;
                }
                self.out.push_str("{ ");
                for &stmt in &data.statements {
                    self.print_statement(stmt);
                    self.out.push(' ');
                }
                self.out.push('}');
            }
            NodeData::Literal(data) => self.out.push_str(&data.text),
            NodeData::Other(data) => {
                self.out.push_str(&data.label);
                if !data.children.is_empty() {
                    self.out.push('(');
                    self.print_list(&data.children);
                    self.out.push(')');
                }
            }
        }
    }

    /// Blocks and callables with bodies stand on their own; anything else is
    /// an expression statement and gets a `;`.
    fn print_statement(&mut self, idx: NodeIndex) {
        let needs_semicolon = match self.arena.get(idx).map(|node| &node.data) {
            Some(NodeData::Block(_)) => false,
            Some(NodeData::Callable(data)) => data.kind == CallableKind::Lambda,
            _ => true,
        };
        self.print(idx);
        if needs_semicolon {
            self.out.push(';');
        }
    }

    fn print_list(&mut self, items: &[NodeIndex]) {
        for (i, &item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.print(item);
        }
    }
}

#[cfg(test)]
#[path = "../tests/printer_tests.rs"]
mod tests;
