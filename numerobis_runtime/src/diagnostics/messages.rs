//! The runtime error message table

/// One entry of the message table.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeMessage {
    /// Numeric error code.
    pub code: i32,
    /// The error kind shown in the heading, e.g. `IndexError`.
    pub kind: &'static str,
    /// The one-line description.
    pub message: &'static str,
}

/// Messages for the codes the runtime raises. The code space is open;
/// unknown codes fall back to a generic entry.
pub const MESSAGES: &[RuntimeMessage] = &[
    RuntimeMessage {
        code: 301,
        kind: "ValueError",
        message: "invalid literal for integer conversion",
    },
    RuntimeMessage {
        code: 302,
        kind: "ZeroDivisionError",
        message: "integer division by zero",
    },
    RuntimeMessage {
        code: 901,
        kind: "IndexError",
        message: "list index out of range",
    },
    RuntimeMessage {
        code: 902,
        kind: "IndexError",
        message: "string index out of range",
    },
];

const FALLBACK: RuntimeMessage = RuntimeMessage {
    code: 0,
    kind: "RuntimeError",
    message: "runtime error",
};

/// Finds the message for a code, falling back to a generic entry.
#[must_use]
pub fn lookup(code: i32) -> RuntimeMessage {
    MESSAGES
        .iter()
        .find(|m| m.code == code)
        .copied()
        .unwrap_or(FALLBACK)
}
