//! miette rendering for [`GwaError`].
//!
//! Codec diagnostics point into a single line, so each one is rendered with
//! that line as its source. A [`GwaError::Document`] yields one report per
//! failing line, prefixed with the line number.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use gwa::GwaError;
use gwa_codec::error::Diagnostic;

/// One codec [`Diagnostic`] paired with the line its spans index into.
pub struct DiagnosticAdapter<'a> {
    /// Diagnostic being rendered
    diag: &'a Diagnostic,
    /// The line the diagnostic's spans point into
    src: &'a str,
    /// 1-based line number within the document, if known
    line_number: Option<usize>,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Render `diag` against `src`.
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self {
            diag,
            src,
            line_number: None,
        }
    }

    /// Attach the line number the source line has in its document.
    pub fn with_line_number(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .field("line_number", &self.line_number)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line_number {
            Some(line_number) => write!(f, "line {line_number}: {}", self.diag.message()),
            None => write!(f, "{}", self.diag.message()),
        }
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        if self.diag.severity().is_warning() {
            Some(miette::Severity::Warning)
        } else {
            Some(miette::Severity::Error)
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// I/O and configuration errors, which have no line to point into.
pub struct ErrorAdapter<'a>(pub &'a GwaError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            GwaError::Io(_) => "gwa::io",
            GwaError::Config(_) => "gwa::config",
            GwaError::Codec { .. } | GwaError::Document { .. } => return None,
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        None
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// One report for the graphical handler.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A codec diagnostic with its line.
    Diagnostic(DiagnosticAdapter<'a>),
    /// Anything without a line.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn severity(&self) -> Option<miette::Severity> {
        match self {
            Reportable::Diagnostic(d) => d.severity(),
            Reportable::Error(e) => e.severity(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a codec [`Span`](gwa_codec::Span) to a miette [`SourceSpan`].
fn span_to_miette(span: gwa_codec::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`GwaError`] into a list of reportable errors.
///
/// [`GwaError::Document`] yields one [`Reportable`] per failing line. Other
/// variants yield a single [`Reportable`].
pub fn to_reportables(err: &GwaError) -> Vec<Reportable<'_>> {
    match err {
        GwaError::Codec { err: diag, src } => {
            vec![Reportable::Diagnostic(DiagnosticAdapter::new(diag, src))]
        }
        GwaError::Document { failures } => failures
            .iter()
            .map(|failure| {
                Reportable::Diagnostic(
                    DiagnosticAdapter::new(failure.diagnostic(), failure.line())
                        .with_line_number(failure.line_number()),
                )
            })
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use gwa::{LineFailure, config::ConfigError};
    use gwa_codec::{Span, error::ErrorCode};

    use super::*;

    #[test]
    fn test_single_diagnostic() {
        let diag = Diagnostic::error("expected a number")
            .with_code(ErrorCode::E202)
            .with_label(Span::new(0..3), "here")
            .with_help("try this");
        let err = GwaError::new_codec_error(diag, "abc");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Diagnostic(d) => {
                assert_eq!(d.to_string(), "expected a number");
                assert_eq!(d.code().unwrap().to_string(), "E202");
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_document_failures_are_separate() {
        let failures = vec![
            LineFailure::new(
                2,
                "NODE.3\tSET\tx",
                Diagnostic::error("invalid index").with_code(ErrorCode::E101),
            ),
            LineFailure::new(
                7,
                "EL.4\tPUT",
                Diagnostic::error("unknown set command").with_code(ErrorCode::E100),
            ),
        ];
        let err = GwaError::Document { failures };

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 2);
        assert_eq!(reportables[0].to_string(), "line 2: invalid index");
        assert_eq!(reportables[1].to_string(), "line 7: unknown set command");
    }

    #[test]
    fn test_non_diagnostic_error() {
        let err = GwaError::Config(ConfigError::Validation("bad delimiter".to_string()));

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(
                    e.to_string(),
                    "Configuration error: Validation error: bad delimiter"
                );
                assert_eq!(e.code().unwrap().to_string(), "gwa::config");
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_primary_flag_on_labels() {
        let diag = Diagnostic::error("error with labels")
            .with_label(Span::new(0..5), "primary")
            .with_secondary_label(Span::new(10..15), "secondary");

        let adapter = DiagnosticAdapter::new(&diag, "some source code");

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].label(), Some("primary"));
        assert!(labels[0].primary());
        assert!(!labels[1].primary());
    }

    #[test]
    fn test_warning_severity() {
        let diag = Diagnostic::error("unknown keyword").into_warning();
        let adapter = DiagnosticAdapter::new(&diag, "PROP_SEC.3");

        assert_eq!(adapter.severity(), Some(miette::Severity::Warning));
    }
}
