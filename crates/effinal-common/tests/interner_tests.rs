use super::*;

#[test]
fn test_intern_deduplicates() {
    let mut interner = Interner::new();
    let a = interner.intern("param");
    let b = interner.intern("param");
    let c = interner.intern("other");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.resolve(a), "param");
    assert_eq!(interner.resolve(c), "other");
}

#[test]
fn test_empty_string_is_none_atom() {
    let mut interner = Interner::new();
    assert!(interner.is_empty());
    assert_eq!(interner.intern(""), Atom::NONE);
    assert!(Atom::NONE.is_none());
    assert!(interner.is_empty());
}

#[test]
fn test_resolve_out_of_range_is_total() {
    let interner = Interner::new();
    assert_eq!(interner.resolve(Atom(42)), "");
    assert_eq!(interner.try_resolve(Atom(42)), None);
}

#[test]
fn test_lookup_does_not_intern() {
    let mut interner = Interner::new();
    assert_eq!(interner.lookup("x"), None);
    let x = interner.intern("x");
    assert_eq!(interner.lookup("x"), Some(x));
    assert_eq!(interner.len(), 2);
}
