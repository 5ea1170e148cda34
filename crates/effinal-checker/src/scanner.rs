//! Parameter assignment scanner.
//!
//! A pre-order walk of one compilation unit. The only context carried downward
//! is the set of watched names, passed as an argument to every recursive call:
//!
//! - At the top of a unit nothing is watched (`None`).
//! - Entering a callable discards the incoming set and watches exactly that
//!   callable's non-final parameters. Outer parameters captured by a nested
//!   callable are never checked there; the front end already requires captured
//!   variables to be effectively final.
//! - An assignment whose target is a bare identifier in the watched set is a
//!   violation. Both sides are still walked, so nested writes are found.
//! - Every other node passes the set through unchanged.

use crate::options::RuleOptions;
use crate::scope_extractor::{WatchedNames, extract_watched_names};
use crate::sink::DiagnosticSink;
use crate::violation::Violation;
use effinal_ast::{AssignmentData, CallableData, NodeArena, NodeData, NodeIndex, UpdateData, print_node};
use effinal_common::diagnostics::diagnostic_codes;
use effinal_common::limits::{STACK_GROWTH, STACK_RED_ZONE};
use effinal_common::{Atom, Span};
use tracing::trace;

pub struct ParameterAssignmentScanner<'a, S: DiagnosticSink + ?Sized> {
    arena: &'a NodeArena,
    options: RuleOptions,
    sink: &'a mut S,
    /// File of the source unit being walked, for diagnostic locations.
    file_name: &'a str,
    reported: usize,
}

impl<'a, S: DiagnosticSink + ?Sized> ParameterAssignmentScanner<'a, S> {
    pub fn new(arena: &'a NodeArena, options: RuleOptions, sink: &'a mut S) -> Self {
        ParameterAssignmentScanner {
            arena,
            options,
            sink,
            file_name: arena.file_name(),
            reported: 0,
        }
    }

    /// Number of violations reported so far.
    pub fn reported(&self) -> usize {
        self.reported
    }

    /// Walk the sub-tree at `idx` with `watched` as the active scope.
    pub fn scan(&mut self, idx: NodeIndex, watched: Option<&WatchedNames>) {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || self.scan_node(idx, watched));
    }

    fn scan_node(&mut self, idx: NodeIndex, watched: Option<&WatchedNames>) {
        let arena = self.arena;
        let Some(node) = arena.get(idx) else {
            return;
        };

        match &node.data {
            NodeData::SourceFile(file) => {
                self.file_name = &file.file_name;
                for &stmt in &file.statements {
                    self.scan(stmt, watched);
                }
            }
            NodeData::Callable(callable) => self.scan_callable(callable),
            NodeData::Assignment(assignment) => {
                self.check_assignment(idx, assignment, watched);
                self.scan(assignment.target, watched);
                self.scan(assignment.value, watched);
            }
            NodeData::Update(update) => {
                self.check_update(idx, update, watched);
                self.scan(update.operand, watched);
            }
            NodeData::Parameter(_)
            | NodeData::Identifier(_)
            | NodeData::PropertyAccess(_)
            | NodeData::ElementAccess(_)
            | NodeData::Block(_)
            | NodeData::Literal(_)
            | NodeData::Other(_) => {
                for child in arena.children(idx) {
                    self.scan(child, watched);
                }
            }
        }
    }

    /// The incoming scope is dropped here; only this callable's own
    /// parameters are watched inside its body.
    fn scan_callable(&mut self, callable: &CallableData) {
        if callable.body.is_none() {
            return;
        }
        let watched = extract_watched_names(self.arena, callable);
        trace!(
            kind = callable.kind.as_str(),
            name = self.arena.resolve(callable.name),
            watched = watched.len(),
            "entering callable scope"
        );
        self.scan(callable.body, Some(&watched));
    }

    fn check_assignment(
        &mut self,
        idx: NodeIndex,
        assignment: &AssignmentData,
        watched: Option<&WatchedNames>,
    ) {
        let code = if assignment.operator.is_compound() {
            if !self.options.check_compound_assignments {
                return;
            }
            diagnostic_codes::COMPOUND_ASSIGNMENT_TO_PARAMETER
        } else {
            diagnostic_codes::ASSIGNMENT_TO_PARAMETER
        };
        if let Some((parameter, span)) = self.watched_target(assignment.target, watched) {
            self.report(code, idx, parameter, span);
        }
    }

    fn check_update(&mut self, idx: NodeIndex, update: &UpdateData, watched: Option<&WatchedNames>) {
        if !self.options.check_update_expressions {
            return;
        }
        if let Some((parameter, span)) = self.watched_target(update.operand, watched) {
            self.report(diagnostic_codes::UPDATE_OF_PARAMETER, idx, parameter, span);
        }
    }

    /// The watched name written by `target`, if `target` is a bare identifier.
    /// Field writes, element writes and any other expression shape never match.
    fn watched_target(
        &self,
        target: NodeIndex,
        watched: Option<&WatchedNames>,
    ) -> Option<(Atom, Span)> {
        let watched = watched.filter(|names| !names.is_empty())?;
        let node = self.arena.get(target)?;
        let ident = self.arena.get_identifier(node)?;
        watched
            .contains(&ident.name)
            .then_some((ident.name, node.span))
    }

    fn report(&mut self, code: u32, write_idx: NodeIndex, parameter: Atom, target_span: Span) {
        let arena = self.arena;
        let span = if target_span.is_empty() {
            arena.get(write_idx).map_or(target_span, |node| node.span)
        } else {
            target_span
        };
        let assignment_text = match arena.text_of(write_idx) {
            Some(text) => text.to_string(),
            None => print_node(arena, write_idx),
        };
        trace!(
            parameter = arena.resolve(parameter),
            start = span.start,
            "write to non-final parameter"
        );
        let violation = Violation {
            code,
            span,
            parameter,
            assignment_text,
        };
        self.sink.report(violation.into_diagnostic(self.file_name));
        self.reported += 1;
    }
}

#[cfg(test)]
#[path = "../tests/scanner_tests.rs"]
mod tests;
