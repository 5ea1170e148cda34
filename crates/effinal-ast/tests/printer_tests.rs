use super::*;
use crate::node::{AssignOp, UpdateOp};
use effinal_common::Span;

#[test]
fn test_print_assignment_forms() {
    let mut arena = NodeArena::new("Foo.java");
    let obj = arena.add_identifier(Span::DUMMY, "this");
    let field = arena.add_property_access(Span::DUMMY, obj, "x");
    let x = arena.add_identifier(Span::DUMMY, "x");
    let assign = arena.add_assignment(Span::DUMMY, AssignOp::Assign, field, x);
    assert_eq!(print_node(&arena, assign), "this.x = x");

    let arr = arena.add_identifier(Span::DUMMY, "array");
    let zero = arena.add_literal(Span::DUMMY, "0");
    let elem = arena.add_element_access(Span::DUMMY, arr, zero);
    let one = arena.add_literal(Span::DUMMY, "1");
    let compound = arena.add_assignment(Span::DUMMY, AssignOp::Add, elem, one);
    assert_eq!(print_node(&arena, compound), "array[0] += 1");
}

#[test]
fn test_print_updates() {
    let mut arena = NodeArena::new("Foo.java");
    let x = arena.add_identifier(Span::DUMMY, "x");
    let post = arena.add_update(Span::DUMMY, UpdateOp::Increment, false, x);
    let y = arena.add_identifier(Span::DUMMY, "y");
    let pre = arena.add_update(Span::DUMMY, UpdateOp::Decrement, true, y);
    assert_eq!(print_node(&arena, post), "x++");
    assert_eq!(print_node(&arena, pre), "--y");
}

#[test]
fn test_print_lambda_and_other() {
    let mut arena = NodeArena::new("Foo.java");
    let a = arena.add_parameter(Span::DUMMY, "a", false);
    let b = arena.add_parameter(Span::DUMMY, "b", true);
    let target = arena.add_identifier(Span::DUMMY, "a");
    let value = arena.add_identifier(Span::DUMMY, "b");
    let assign = arena.add_assignment(Span::DUMMY, AssignOp::Assign, target, value);
    let body = arena.add_block(Span::DUMMY, vec![assign]);
    let lambda = arena.add_callable(Span::DUMMY, CallableKind::Lambda, "", vec![a, b], body);
    assert_eq!(print_node(&arena, lambda), "(a, final b) -> { a = b; }");

    let callee = arena.add_identifier(Span::DUMMY, "run");
    let call = arena.add_other(Span::DUMMY, "call", vec![callee, lambda]);
    assert_eq!(print_node(&arena, call), "call(run, (a, final b) -> { a = b; })");
}

#[test]
fn test_print_abstract_method_and_missing_nodes() {
    let mut arena = NodeArena::new("Foo.java");
    let x = arena.add_parameter(Span::DUMMY, "x", false);
    let method = arena.add_callable(Span::DUMMY, CallableKind::Method, "f", vec![x], NodeIndex::NONE);
    assert_eq!(print_node(&arena, method), "f(x);");
    assert_eq!(print_node(&arena, NodeIndex(99)), "<missing>");
}

#[test]
fn test_print_deep_assignment_chain() {
    let mut arena = NodeArena::new("Foo.java");
    let mut value = arena.add_literal(Span::DUMMY, "0");
    for _ in 0..20_000 {
        let target = arena.add_identifier(Span::DUMMY, "x");
        value = arena.add_assignment(Span::DUMMY, AssignOp::Assign, target, value);
    }
    let text = print_node(&arena, value);
    assert!(text.starts_with("x = x = "));
    assert!(text.ends_with("= 0"));
}
