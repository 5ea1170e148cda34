//! Abstract syntax tree consumed by the effinal checker.
//!
//! The tree is produced by an upstream front end that has already parsed,
//! resolved and type-checked the source. This crate only stores it:
//! - `base` - `NodeIndex` handles
//! - `node` - the closed set of node variants
//! - `node_arena` - arena storage and `add_*` builders
//! - `node_access` - typed accessors and child enumeration
//! - `printer` - compact source-like rendering of sub-trees
//! - `wire` - JSON interchange format and loader

pub mod base;
pub mod node;
pub mod node_access;
pub mod node_arena;
pub mod printer;
pub mod wire;

pub use base::NodeIndex;
pub use node::{
    AssignOp, AssignmentData, BlockData, CallableData, CallableKind, ElementAccessData,
    IdentifierData, LiteralData, Node, NodeData, OtherData, ParameterData, PropertyAccessData,
    SourceFileData, UpdateData, UpdateOp,
};
pub use node_arena::{NodeArena, SourceUnit};
pub use printer::print_node;
pub use wire::{LoadError, WireUnit};
