use super::*;

#[test]
fn test_slice_in_bounds() {
    let source = "x = 1;";
    assert_eq!(Span::new(0, 5).slice(source), Some("x = 1"));
    assert_eq!(Span::new(0, 5).len(), 5);
}

#[test]
fn test_slice_rejects_bad_spans() {
    let source = "héllo";
    assert_eq!(Span::new(0, 0).slice(source), None);
    assert_eq!(Span::new(3, 1).slice(source), None);
    assert_eq!(Span::new(0, 99).slice(source), None);
    // 'é' is two bytes; offset 2 is inside it
    assert_eq!(Span::new(0, 2).slice(source), None);
}

#[test]
fn test_merge_ignores_empty_spans() {
    let a = Span::new(4, 8);
    let b = Span::new(10, 12);
    assert_eq!(a.merge(b), Span::new(4, 12));
    assert_eq!(Span::DUMMY.merge(b), b);
    assert_eq!(a.merge(Span::DUMMY), a);
}

#[test]
fn test_span_deserializes_from_object() {
    let span: Span = serde_json::from_str(r#"{"start": 3, "end": 9}"#).unwrap();
    assert_eq!(span, Span::new(3, 9));
}
