//! Non-final parameter names of a callable.

use effinal_ast::{CallableData, NodeArena};
use effinal_common::Atom;
use rustc_hash::FxHashSet;

/// Names of the innermost callable's parameters that were not declared final.
pub type WatchedNames = FxHashSet<Atom>;

/// Collect the names of `callable`'s non-final parameters.
///
/// Duplicate names collapse into one entry. Parameter handles that do not
/// point at a parameter node are skipped, so a malformed declaration simply
/// watches fewer names.
pub fn extract_watched_names(arena: &NodeArena, callable: &CallableData) -> WatchedNames {
    callable
        .parameters
        .iter()
        .filter_map(|&param| arena.parameter_at(param))
        .filter(|param| !param.is_final && !param.name.is_none())
        .map(|param| param.name)
        .collect()
}

#[cfg(test)]
#[path = "../tests/scope_extractor_tests.rs"]
mod tests;
