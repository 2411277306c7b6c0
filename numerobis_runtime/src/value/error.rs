//! Runtime error values carried up to the diagnostic throw path

use numerobis_shared::span::SourceSpan;

/// Error codes reported through the diagnostic throw interface.
///
/// The code space is open; these are the codes the runtime itself raises.
pub mod codes {
    /// A string could not be converted to an integer.
    pub const INT_PARSE: i32 = 301;
    /// Integer division by zero.
    pub const INT_DIVISION_BY_ZERO: i32 = 302;
    /// List index out of range.
    pub const LIST_INDEX: i32 = 901;
    /// String index out of range.
    pub const STR_INDEX: i32 = 902;
}

/// A user-facing runtime error: a numeric code plus the source span of the
/// operation that raised it.
///
/// Checked operations construct these without a span; the dispatch surface
/// attaches the span the compiler passed at the call site before handing
/// the error to diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeError {
    code: i32,
    span: SourceSpan,
}

impl RuntimeError {
    /// Creates an error with no source location.
    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self {
            code,
            span: SourceSpan::unset(),
        }
    }

    /// Attaches a source span.
    #[must_use]
    pub const fn with_span(self, span: SourceSpan) -> Self {
        Self {
            code: self.code,
            span,
        }
    }

    /// Returns the error code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// Returns the source span, possibly unset.
    #[must_use]
    pub const fn span(&self) -> SourceSpan {
        self.span
    }
}
