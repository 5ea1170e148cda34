use super::*;

#[test]
fn test_builders_intern_names_per_arena() {
    let mut arena = NodeArena::new("Foo.java");
    let a = arena.add_identifier(Span::new(0, 1), "x");
    let b = arena.add_identifier(Span::new(4, 5), "x");
    let name_a = arena.get(a).and_then(|n| arena.get_identifier(n)).unwrap().name;
    let name_b = arena.get(b).and_then(|n| arena.get_identifier(n)).unwrap().name;
    assert_eq!(name_a, name_b);
    assert_eq!(arena.resolve(name_a), "x");
    assert_eq!(arena.len(), 2);
}

#[test]
fn test_get_is_total() {
    let mut arena = NodeArena::new("Foo.java");
    arena.add_literal(Span::DUMMY, "1");
    assert!(arena.get(NodeIndex(0)).is_some());
    assert!(arena.get(NodeIndex(7)).is_none());
    assert!(arena.get(NodeIndex::NONE).is_none());
    assert!(arena.children(NodeIndex(7)).is_empty());
}

#[test]
fn test_children_in_source_order() {
    let mut arena = NodeArena::new("Foo.java");
    let param = arena.add_parameter(Span::DUMMY, "x", false);
    let target = arena.add_identifier(Span::DUMMY, "x");
    let value = arena.add_literal(Span::DUMMY, "1");
    let assign = arena.add_assignment(Span::DUMMY, AssignOp::Assign, target, value);
    let body = arena.add_block(Span::DUMMY, vec![assign]);
    let method = arena.add_callable(Span::DUMMY, CallableKind::Method, "f", vec![param], body);

    assert_eq!(arena.children(assign).as_slice(), &[target, value]);
    assert_eq!(arena.children(method).as_slice(), &[param, body]);
    assert!(arena.children(param).is_empty());
}

#[test]
fn test_children_skip_missing_body() {
    let mut arena = NodeArena::new("Foo.java");
    let param = arena.add_parameter(Span::DUMMY, "x", false);
    let method = arena.add_callable(
        Span::DUMMY,
        CallableKind::Method,
        "abstractOne",
        vec![param],
        NodeIndex::NONE,
    );
    assert_eq!(arena.children(method).as_slice(), &[param]);
}

#[test]
fn test_source_file_takes_arena_file_name() {
    let mut arena = NodeArena::new("pkg/Foo.java");
    let root = arena.add_source_file(Span::DUMMY, Vec::new());
    let node = arena.get(root).unwrap();
    assert_eq!(arena.get_source_file(node).unwrap().file_name, "pkg/Foo.java");
}

#[test]
fn test_text_of_uses_source_slice() {
    let mut arena = NodeArena::with_source("Foo.java", "x = 1;");
    let target = arena.add_identifier(Span::new(0, 1), "x");
    let value = arena.add_literal(Span::new(4, 5), "1");
    let assign = arena.add_assignment(Span::new(0, 5), AssignOp::Assign, target, value);
    let unspanned = arena.add_literal(Span::DUMMY, "2");
    assert_eq!(arena.text_of(assign), Some("x = 1"));
    assert_eq!(arena.text_of(unspanned), None);
}

#[test]
fn test_parameter_at_rejects_other_nodes() {
    let mut arena = NodeArena::new("Foo.java");
    let ident = arena.add_identifier(Span::DUMMY, "x");
    let param = arena.add_parameter(Span::DUMMY, "y", true);
    assert!(arena.parameter_at(ident).is_none());
    assert!(arena.parameter_at(param).unwrap().is_final);
    assert!(arena.parameter_at(NodeIndex::NONE).is_none());
}
