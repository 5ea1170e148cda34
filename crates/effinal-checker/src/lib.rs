//! Effectively-final parameter check.
//!
//! Flags every assignment whose target is a bare reference to a parameter of
//! the innermost enclosing callable that was not declared final.
//!
//! - `scope_extractor` - non-final parameter names of one callable
//! - `scanner` - the scope-resetting tree walk
//! - `violation` - violation records and their diagnostics
//! - `sink` - where diagnostics go
//! - `options` - rule switches and plugin argument parsing
//! - `plugin` - compiler-plugin host integration (task events and listeners)

pub mod options;
pub mod plugin;
pub mod scanner;
pub mod scope_extractor;
pub mod sink;
pub mod violation;

pub use options::{PluginError, RuleOptions};
pub use plugin::{
    CompilationTask, EffectivelyFinalPlugin, EffectivelyFinalTaskListener, Plugin, TaskEvent,
    TaskKind, TaskListener, UnitOutcome,
};
pub use scanner::ParameterAssignmentScanner;
pub use scope_extractor::{WatchedNames, extract_watched_names};
pub use sink::DiagnosticSink;
pub use violation::Violation;

pub mod diagnostics {
    pub use effinal_common::diagnostics::{
        Diagnostic, DiagnosticCategory, diagnostic_codes, diagnostic_messages, format_message,
    };
}

use effinal_ast::SourceUnit;

/// Scan one compilation unit, reporting every violation to `sink`.
///
/// Returns the number of violations reported.
pub fn check_source_unit<S: DiagnosticSink + ?Sized>(
    unit: &SourceUnit,
    options: RuleOptions,
    sink: &mut S,
) -> usize {
    let _span = tracing::debug_span!("check_source_unit", file = unit.file_name()).entered();
    let mut scanner = ParameterAssignmentScanner::new(&unit.arena, options, sink);
    scanner.scan(unit.root, None);
    let reported = scanner.reported();
    tracing::debug!(reported, "scan finished");
    reported
}

#[cfg(test)]
#[path = "../tests/fixtures.rs"]
mod fixtures;
