//! Error types for GWA operations.
//!
//! [`GwaError`] wraps the failures of the facade. Codec failures keep the
//! line they came from so callers can render the labelled spans.

use std::{fmt, io};

use thiserror::Error;

use gwa_codec::error::Diagnostic;

use crate::config::ConfigError;

/// The main error type for GWA operations.
///
/// # Diagnostic Variants
///
/// `Codec` carries one diagnostic and the line it points into. `Document`
/// carries every failing line of a document.
#[derive(Debug, Error)]
pub enum GwaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Codec { err: Diagnostic, src: String },

    #[error("{} line(s) failed", failures.len())]
    Document { failures: Vec<LineFailure> },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl GwaError {
    /// Create a new `Codec` error with the line it refers to.
    pub fn new_codec_error(err: Diagnostic, src: impl Into<String>) -> Self {
        Self::Codec {
            err,
            src: src.into(),
        }
    }
}

/// A diagnostic tied to one line of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct LineFailure {
    line_number: usize,
    line: String,
    diagnostic: Diagnostic,
}

impl LineFailure {
    /// Create a failure for the 1-based `line_number`.
    pub fn new(line_number: usize, line: impl Into<String>, diagnostic: Diagnostic) -> Self {
        Self {
            line_number,
            line: line.into(),
            diagnostic,
        }
    }

    /// 1-based line number.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Text of the line. Diagnostic spans index into it.
    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }
}

impl fmt::Display for LineFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.diagnostic)
    }
}
