//! Violation records.

use effinal_common::diagnostics::{Diagnostic, diagnostic_messages, format_message, get_message_template};
use effinal_common::limits::MAX_MESSAGE_SNIPPET_CHARS;
use effinal_common::{Atom, Span};

/// A write to a watched parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// One of the `diagnostic_codes` constants.
    pub code: u32,
    /// Span of the offending identifier.
    pub span: Span,
    pub parameter: Atom,
    /// Text of the whole assignment (or update) expression.
    pub assignment_text: String,
}

impl Violation {
    pub fn message(&self) -> String {
        let template = get_message_template(self.code)
            .unwrap_or(diagnostic_messages::ASSIGNMENT_TO_PARAM_IN_0);
        format_message(template, &[&snippet(&self.assignment_text)])
    }

    pub fn into_diagnostic(self, file_name: &str) -> Diagnostic {
        let message = self.message();
        Diagnostic::error(
            file_name.to_string(),
            self.span.start,
            self.span.len(),
            message,
            self.code,
        )
    }
}

/// Single-line form of the assignment text, capped in length.
fn snippet(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= MAX_MESSAGE_SNIPPET_CHARS {
        return collapsed;
    }
    let mut cut: String = collapsed.chars().take(MAX_MESSAGE_SNIPPET_CHARS).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
#[path = "../tests/violation_tests.rs"]
mod tests;
