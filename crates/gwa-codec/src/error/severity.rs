//! Severity levels for diagnostics.

use std::fmt;

/// The severity level of a diagnostic.
///
/// The codec itself only produces errors. Warnings are raised by callers
/// that choose to tolerate a line, such as a document reader skipping an
/// unknown keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The line could not be decoded or encoded.
    Error,

    /// The line was skipped or accepted with reservations.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
