//! Tree builders shared by the checker tests.

use crate::{DiagnosticSink, RuleOptions, check_source_unit};
use effinal_ast::{AssignOp, CallableKind, NodeArena, NodeIndex, SourceUnit, UpdateOp};
use effinal_common::Span;
use effinal_common::diagnostics::Diagnostic;

pub(crate) struct UnitBuilder {
    pub arena: NodeArena,
}

impl UnitBuilder {
    pub fn new() -> Self {
        UnitBuilder {
            arena: NodeArena::new("Test.java"),
        }
    }

    pub fn ident(&mut self, name: &str) -> NodeIndex {
        self.arena.add_identifier(Span::DUMMY, name)
    }

    pub fn lit(&mut self, text: &str) -> NodeIndex {
        self.arena.add_literal(Span::DUMMY, text)
    }

    /// `name = value`
    pub fn assign(&mut self, name: &str, value: NodeIndex) -> NodeIndex {
        let target = self.ident(name);
        self.assign_to(target, value)
    }

    pub fn assign_to(&mut self, target: NodeIndex, value: NodeIndex) -> NodeIndex {
        self.arena
            .add_assignment(Span::DUMMY, AssignOp::Assign, target, value)
    }

    pub fn assign_op(&mut self, op: AssignOp, name: &str, value: NodeIndex) -> NodeIndex {
        let target = self.ident(name);
        self.arena.add_assignment(Span::DUMMY, op, target, value)
    }

    pub fn update(&mut self, op: UpdateOp, prefix: bool, name: &str) -> NodeIndex {
        let operand = self.ident(name);
        self.arena.add_update(Span::DUMMY, op, prefix, operand)
    }

    pub fn field(&mut self, object: &str, name: &str) -> NodeIndex {
        let object = self.ident(object);
        self.arena.add_property_access(Span::DUMMY, object, name)
    }

    pub fn index(&mut self, array: &str, argument: NodeIndex) -> NodeIndex {
        let array = self.ident(array);
        self.arena.add_element_access(Span::DUMMY, array, argument)
    }

    pub fn param(&mut self, name: &str) -> NodeIndex {
        self.arena.add_parameter(Span::DUMMY, name, false)
    }

    pub fn final_param(&mut self, name: &str) -> NodeIndex {
        self.arena.add_parameter(Span::DUMMY, name, true)
    }

    pub fn block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.arena.add_block(Span::DUMMY, statements)
    }

    pub fn other(&mut self, label: &str, children: Vec<NodeIndex>) -> NodeIndex {
        self.arena.add_other(Span::DUMMY, label, children)
    }

    /// Method whose body is a block of `statements`.
    pub fn method(&mut self, name: &str, params: Vec<NodeIndex>, statements: Vec<NodeIndex>) -> NodeIndex {
        let body = self.block(statements);
        self.arena
            .add_callable(Span::DUMMY, CallableKind::Method, name, params, body)
    }

    pub fn lambda(&mut self, params: Vec<NodeIndex>, statements: Vec<NodeIndex>) -> NodeIndex {
        let body = self.block(statements);
        self.arena
            .add_callable(Span::DUMMY, CallableKind::Lambda, "", params, body)
    }

    pub fn abstract_method(&mut self, name: &str, params: Vec<NodeIndex>) -> NodeIndex {
        self.arena
            .add_callable(Span::DUMMY, CallableKind::Method, name, params, NodeIndex::NONE)
    }

    pub fn finish(mut self, statements: Vec<NodeIndex>) -> SourceUnit {
        let root = self.arena.add_source_file(Span::DUMMY, statements);
        SourceUnit {
            arena: self.arena,
            root,
        }
    }
}

pub(crate) fn check(unit: &SourceUnit) -> Vec<Diagnostic> {
    check_with(unit, RuleOptions::default())
}

pub(crate) fn check_with(unit: &SourceUnit, options: RuleOptions) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let reported = check_source_unit(unit, options, &mut diagnostics);
    assert_eq!(reported, diagnostics.len());
    diagnostics
}

pub(crate) fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.message_text.as_str()).collect()
}

/// Sink that only counts.
#[derive(Default)]
pub(crate) struct CountingSink {
    pub count: usize,
}

impl DiagnosticSink for CountingSink {
    fn report(&mut self, _diagnostic: Diagnostic) {
        self.count += 1;
    }
}
