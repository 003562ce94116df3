//! The core diagnostic type for the codec error system.
//!
//! A [`Diagnostic`] represents a single error or warning with optional
//! error code, multiple labeled spans, and help text.

use std::fmt;

use crate::{
    error::{ErrorCode, ErrorKind, Label, Severity},
    span::Span,
};

/// A diagnostic message with locations in the offending line.
///
/// # Example
///
/// ```text
/// error[E204]: invalid release code `RRQFFF`
///    |
///  1 | EL.4  SET  3    NO_RGB  BEAM  1  1  4  5  0  0  RLS  RRQFFF  ...
///    |                                                       ^^^^^^ unknown code letter `Q`
///    |
///    = help: each letter is one of `F`, `R` or `K`
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use gwa_codec::error::{Diagnostic, ErrorCode};
    /// # use gwa_codec::Span;
    ///
    /// let diag = Diagnostic::error("unknown set command `PUT`")
    ///     .with_code(ErrorCode::E100)
    ///     .with_label(Span::new(7..10), "expected SET, SET_AT or SET_NOINDEX");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the error category, derived from the code.
    pub fn kind(&self) -> Option<ErrorKind> {
        self.code.map(|code| code.kind())
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Turn this diagnostic into a warning, keeping everything else.
    pub fn into_warning(mut self) -> Self {
        self.severity = Severity::Warning;
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: message" or "error: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
