use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const ASSIGNMENT_TO_PARAMETER: u32 = 9001;
    pub const COMPOUND_ASSIGNMENT_TO_PARAMETER: u32 = 9002;
    pub const UPDATE_OF_PARAMETER: u32 = 9003;
}

pub mod diagnostic_messages {
    pub const ASSIGNMENT_TO_PARAM_IN_0: &str = "EFFECTIVELY_FINAL: Assignment to param in `{0}`";
    pub const COMPOUND_ASSIGNMENT_TO_PARAM_IN_0: &str =
        "EFFECTIVELY_FINAL: Compound assignment to param in `{0}`";
    pub const UPDATE_OF_PARAM_IN_0: &str = "EFFECTIVELY_FINAL: Increment or decrement of param in `{0}`";
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::ASSIGNMENT_TO_PARAMETER,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::ASSIGNMENT_TO_PARAM_IN_0,
    },
    DiagnosticMessage {
        code: diagnostic_codes::COMPOUND_ASSIGNMENT_TO_PARAMETER,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::COMPOUND_ASSIGNMENT_TO_PARAM_IN_0,
    },
    DiagnosticMessage {
        code: diagnostic_codes::UPDATE_OF_PARAMETER,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::UPDATE_OF_PARAM_IN_0,
    },
];
