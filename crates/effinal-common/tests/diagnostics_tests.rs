use super::*;

#[test]
fn test_format_message_fills_placeholders() {
    let text = format_message(diagnostic_messages::ASSIGNMENT_TO_PARAM_IN_0, &["x = 1"]);
    assert_eq!(text, "EFFECTIVELY_FINAL: Assignment to param in `x = 1`");
}

#[test]
fn test_message_table_lookup() {
    assert_eq!(
        get_message_template(diagnostic_codes::ASSIGNMENT_TO_PARAMETER),
        Some(diagnostic_messages::ASSIGNMENT_TO_PARAM_IN_0)
    );
    assert_eq!(
        get_diagnostic_category(diagnostic_codes::UPDATE_OF_PARAMETER),
        Some(DiagnosticCategory::Error)
    );
    assert!(get_diagnostic_message(1).is_none());
}

#[test]
fn test_error_constructor_and_display_code() {
    let diag = Diagnostic::error("A.java".to_string(), 10, 1, "boom".to_string(), 9001);
    assert!(diag.is_error());
    assert_eq!(diag.display_code(), "EF9001");
}

#[test]
fn test_diagnostic_serializes_camel_case() {
    let diag = Diagnostic::error("A.java".to_string(), 10, 1, "boom".to_string(), 9001);
    let json = serde_json::to_value(&diag).unwrap();
    assert_eq!(json["messageText"], "boom");
    assert_eq!(json["category"], "error");
    assert_eq!(json["start"], 10);
}
