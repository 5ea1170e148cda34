//! Common types and utilities for the effinal checker.
//!
//! This crate provides foundational types used across all effinal crates:
//! - String interning (`Atom`, `Interner`)
//! - Source spans (`Span`)
//! - Line/column positions (`LineMap`, `Position`)
//! - Diagnostics (`Diagnostic`, codes and message templates)
//! - Traversal limits

// String interning for resolved names
pub mod interner;
pub use interner::{Atom, Interner};

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Position types for line/column source locations
pub mod position;
pub use position::{LineMap, Position};

pub mod diagnostics;

// Centralized limits and thresholds
pub mod limits;
