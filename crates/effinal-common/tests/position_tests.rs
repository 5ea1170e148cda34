use super::*;

#[test]
fn test_offsets_map_to_lines() {
    let source = "void f(int x) {\n  x = 1;\n}\n";
    let map = LineMap::build(source);
    assert_eq!(map.line_count(), 4);
    assert_eq!(map.offset_to_position(0, source), Position::new(0, 0));
    assert_eq!(map.offset_to_position(18, source), Position::new(1, 2));
    assert_eq!(map.line_start(2), Some(25));
}

#[test]
fn test_crlf_and_lone_cr() {
    let source = "a\r\nb\rc";
    let map = LineMap::build(source);
    assert_eq!(map.line_count(), 3);
    assert_eq!(map.offset_to_position(3, source), Position::new(1, 0));
    assert_eq!(map.offset_to_position(5, source), Position::new(2, 0));
}

#[test]
fn test_offset_past_end_is_clamped() {
    let source = "ab";
    let map = LineMap::build(source);
    assert_eq!(map.offset_to_position(50, source), Position::new(0, 2));
}
