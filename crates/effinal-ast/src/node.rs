//! Node variants.
//!
//! Only the shapes the parameter check distinguishes get their own variant.
//! Everything else the front end produces (returns, calls, conditionals, class
//! bodies, ...) is carried as [`NodeData::Other`] with its children in order.

use crate::base::NodeIndex;
use effinal_common::{Atom, Span};
use serde::{Deserialize, Serialize};

/// What kind of parameter-accepting declaration a callable node is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallableKind {
    Function,
    #[default]
    Method,
    Constructor,
    Lambda,
    /// Static or instance initializer block: a body without parameters.
    Initializer,
}

impl CallableKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            CallableKind::Function => "function",
            CallableKind::Method => "method",
            CallableKind::Constructor => "constructor",
            CallableKind::Lambda => "lambda",
            CallableKind::Initializer => "initializer",
        }
    }
}

/// Assignment operator. `Assign` is the plain `=`; the rest are compound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignOp {
    #[default]
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+=")]
    Add,
    #[serde(rename = "-=")]
    Sub,
    #[serde(rename = "*=")]
    Mul,
    #[serde(rename = "/=")]
    Div,
    #[serde(rename = "%=")]
    Rem,
    #[serde(rename = "<<=")]
    Shl,
    #[serde(rename = ">>=")]
    Shr,
    #[serde(rename = ">>>=")]
    UShr,
    #[serde(rename = "&=")]
    BitAnd,
    #[serde(rename = "|=")]
    BitOr,
    #[serde(rename = "^=")]
    BitXor,
}

impl AssignOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::Add => "+=",
            AssignOp::Sub => "-=",
            AssignOp::Mul => "*=",
            AssignOp::Div => "/=",
            AssignOp::Rem => "%=",
            AssignOp::Shl => "<<=",
            AssignOp::Shr => ">>=",
            AssignOp::UShr => ">>>=",
            AssignOp::BitAnd => "&=",
            AssignOp::BitOr => "|=",
            AssignOp::BitXor => "^=",
        }
    }

    #[inline]
    pub const fn is_compound(self) -> bool {
        !matches!(self, AssignOp::Assign)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdateOp {
    #[serde(rename = "++")]
    Increment,
    #[serde(rename = "--")]
    Decrement,
}

impl UpdateOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            UpdateOp::Increment => "++",
            UpdateOp::Decrement => "--",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFileData {
    pub file_name: String,
    pub statements: Vec<NodeIndex>,
}

/// A function, method, constructor, lambda or initializer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallableData {
    pub kind: CallableKind,
    /// `Atom::NONE` for anonymous callables.
    pub name: Atom,
    /// Parameter nodes in declaration order.
    pub parameters: Vec<NodeIndex>,
    /// `NodeIndex::NONE` for abstract and native declarations.
    pub body: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterData {
    pub name: Atom,
    pub is_final: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssignmentData {
    pub operator: AssignOp,
    pub target: NodeIndex,
    pub value: NodeIndex,
}

/// `++x`, `x--` and friends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpdateData {
    pub operator: UpdateOp,
    pub prefix: bool,
    pub operand: NodeIndex,
}

/// A bare reference to a resolved name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdentifierData {
    pub name: Atom,
}

/// `expression.name`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyAccessData {
    pub expression: NodeIndex,
    pub name: Atom,
}

/// `expression[argument]`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementAccessData {
    pub expression: NodeIndex,
    pub argument: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockData {
    pub statements: Vec<NodeIndex>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralData {
    pub text: String,
}

/// Catch-all for node kinds the checker only walks through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtherData {
    /// Front-end kind name, used by the printer (`return`, `call`, `class Foo`).
    pub label: String,
    pub children: Vec<NodeIndex>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeData {
    SourceFile(SourceFileData),
    Callable(CallableData),
    Parameter(ParameterData),
    Assignment(AssignmentData),
    Update(UpdateData),
    Identifier(IdentifierData),
    PropertyAccess(PropertyAccessData),
    ElementAccess(ElementAccessData),
    Block(BlockData),
    Literal(LiteralData),
    Other(OtherData),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub span: Span,
    pub data: NodeData,
}

impl Node {
    pub fn kind_name(&self) -> &'static str {
        match &self.data {
            NodeData::SourceFile(_) => "SourceFile",
            NodeData::Callable(_) => "Callable",
            NodeData::Parameter(_) => "Parameter",
            NodeData::Assignment(_) => "Assignment",
            NodeData::Update(_) => "Update",
            NodeData::Identifier(_) => "Identifier",
            NodeData::PropertyAccess(_) => "PropertyAccess",
            NodeData::ElementAccess(_) => "ElementAccess",
            NodeData::Block(_) => "Block",
            NodeData::Literal(_) => "Literal",
            NodeData::Other(_) => "Other",
        }
    }

    #[inline]
    pub fn is_callable(&self) -> bool {
        matches!(self.data, NodeData::Callable(_))
    }
}
