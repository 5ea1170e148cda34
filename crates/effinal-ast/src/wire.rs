//! JSON interchange format.
//!
//! Front ends hand over already-checked trees as JSON. A document is either one
//! unit or an array of units:
//!
//! ```json
//! {
//!   "fileName": "src/Foo.java",
//!   "source": "class Foo { void f(int x) { x = 1; } }",
//!   "statements": [
//!     { "kind": "callable", "callableKind": "method", "name": "f",
//!       "parameters": [ { "name": "x", "span": { "start": 18, "end": 23 } } ],
//!       "body": { "kind": "block", "statements": [
//!         { "kind": "assignment", "operator": "=",
//!           "target": { "kind": "identifier", "name": "x" },
//!           "value": { "kind": "literal", "text": "1" } } ] } }
//!   ]
//! }
//! ```
//!
//! `parameters` may be absent or `null` (no parameters) and `body` may be
//! absent (abstract or native declaration). Spans are optional everywhere.

use crate::base::NodeIndex;
use crate::node::{AssignOp, CallableKind, UpdateOp};
use crate::node_arena::{NodeArena, SourceUnit};
use effinal_common::limits::{STACK_GROWTH, STACK_RED_ZONE};
use effinal_common::span::Span;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: invalid AST document: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{}: document contains no compilation units", .path.display())]
    Empty { path: PathBuf },
}

/// One compilation unit as handed over by the front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireUnit {
    #[serde(default)]
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub statements: Vec<WireNode>,
    /// Set when `file_name` was absent and the unit took the document's path.
    /// Spans of such a unit do not index into that file.
    #[serde(skip)]
    pub name_from_document: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct WireNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    #[serde(flatten)]
    pub kind: WireKind,
}

#[derive(Deserialize)]
struct FlatWireNode {
    #[serde(default)]
    span: Option<Span>,
    #[serde(flatten)]
    kind: WireKind,
}

impl<'de> Deserialize<'de> for WireNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || {
            let flat = FlatWireNode::deserialize(deserializer)?;
            Ok(WireNode {
                span: flat.span,
                kind: flat.kind,
            })
        })
    }
}

impl Drop for WireNode {
    fn drop(&mut self) {
        let kind = std::mem::replace(
            &mut self.kind,
            WireKind::Block {
                statements: Vec::new(),
            },
        );
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, move || drop(kind));
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireParameter {
    pub name: String,
    #[serde(default, rename = "final")]
    pub is_final: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum WireKind {
    Callable {
        #[serde(default)]
        callable_kind: CallableKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default)]
        parameters: Option<Vec<WireParameter>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        body: Option<Box<WireNode>>,
    },
    Assignment {
        #[serde(default)]
        operator: AssignOp,
        target: Box<WireNode>,
        value: Box<WireNode>,
    },
    Update {
        operator: UpdateOp,
        #[serde(default)]
        prefix: bool,
        operand: Box<WireNode>,
    },
    Identifier {
        name: String,
    },
    PropertyAccess {
        expression: Box<WireNode>,
        name: String,
    },
    ElementAccess {
        expression: Box<WireNode>,
        argument: Box<WireNode>,
    },
    Block {
        #[serde(default)]
        statements: Vec<WireNode>,
    },
    Literal {
        text: String,
    },
    Other {
        label: String,
        #[serde(default)]
        children: Vec<WireNode>,
    },
}

/// Parse a JSON document holding one unit or an array of units.
///
/// Nesting depth is unbounded; the stack grows on demand instead.
pub fn parse_units(text: &str) -> Result<Vec<WireUnit>, serde_json::Error> {
    let mut json = serde_json::Deserializer::from_str(text);
    json.disable_recursion_limit();
    let units = {
        let deserializer = serde_stacker::Deserializer::new(&mut json);
        if text.trim_start().starts_with('[') {
            Vec::<WireUnit>::deserialize(deserializer)?
        } else {
            vec![WireUnit::deserialize(deserializer)?]
        }
    };
    json.end()?;
    Ok(units)
}

/// Read a JSON document from disk. Units without a `fileName` are named after
/// the document.
pub fn read_units(path: &Path) -> Result<Vec<WireUnit>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut units = parse_units(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if units.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    for unit in &mut units {
        if unit.file_name.is_empty() {
            unit.file_name = path.display().to_string();
            unit.name_from_document = true;
        }
    }
    debug!(path = %path.display(), units = units.len(), "loaded AST document");
    Ok(units)
}

impl WireUnit {
    /// Lower into an arena. Names are interned into the unit's own interner.
    pub fn lower(&self) -> SourceUnit {
        let mut arena = match &self.source {
            Some(source) => NodeArena::with_source(self.file_name.clone(), source.as_str()),
            None => NodeArena::new(self.file_name.clone()),
        };
        let statements = {
            let mut lowering = Lowering { arena: &mut arena };
            self.statements
                .iter()
                .map(|stmt| lowering.lower(stmt))
                .collect()
        };
        let span = self
            .source
            .as_ref()
            .map_or(Span::DUMMY, |source| Span::new(0, source.len() as u32));
        let root = arena.add_source_file(span, statements);
        SourceUnit { arena, root }
    }
}

struct Lowering<'a> {
    arena: &'a mut NodeArena,
}

impl Lowering<'_> {
    fn lower(&mut self, node: &WireNode) -> NodeIndex {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || self.lower_inner(node))
    }

    fn lower_inner(&mut self, node: &WireNode) -> NodeIndex {
        let span = node.span.unwrap_or_default();
        match &node.kind {
            WireKind::Callable {
                callable_kind,
                name,
                parameters,
                body,
            } => {
                let params = parameters
                    .iter()
                    .flatten()
                    .map(|param| {
                        self.arena.add_parameter(
                            param.span.unwrap_or_default(),
                            &param.name,
                            param.is_final,
                        )
                    })
                    .collect();
                let body = body
                    .as_deref()
                    .map_or(NodeIndex::NONE, |body| self.lower(body));
                self.arena.add_callable(
                    span,
                    *callable_kind,
                    name.as_deref().unwrap_or(""),
                    params,
                    body,
                )
            }
            WireKind::Assignment {
                operator,
                target,
                value,
            } => {
                let target = self.lower(target);
                let value = self.lower(value);
                self.arena.add_assignment(span, *operator, target, value)
            }
            WireKind::Update {
                operator,
                prefix,
                operand,
            } => {
                let operand = self.lower(operand);
                self.arena.add_update(span, *operator, *prefix, operand)
            }
            WireKind::Identifier { name } => self.arena.add_identifier(span, name),
            WireKind::PropertyAccess { expression, name } => {
                let expression = self.lower(expression);
                self.arena.add_property_access(span, expression, name)
            }
            WireKind::ElementAccess {
                expression,
                argument,
            } => {
                let expression = self.lower(expression);
                let argument = self.lower(argument);
                self.arena.add_element_access(span, expression, argument)
            }
            WireKind::Block { statements } => {
                let statements = statements.iter().map(|stmt| self.lower(stmt)).collect();
                self.arena.add_block(span, statements)
            }
            WireKind::Literal { text } => self.arena.add_literal(span, text.as_str()),
            WireKind::Other { label, children } => {
                let children = children.iter().map(|child| self.lower(child)).collect();
                self.arena.add_other(span, label.as_str(), children)
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/wire_tests.rs"]
mod tests;
