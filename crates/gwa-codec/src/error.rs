//! Error and diagnostic system for the GWA codec.
//!
//! Every failure to decode or encode a line is reported as a single
//! [`Diagnostic`]: an [`ErrorCode`], a message, labelled byte spans into the
//! line, and optional help. Each code belongs to one [`ErrorKind`], the
//! coarse taxonomy callers branch on.
//!
//! Failures are whole-line: a diagnostic is never accompanied by a partial
//! record or a partial line.
//!
//! # Example
//!
//! ```
//! # use gwa_codec::error::{Diagnostic, ErrorCode, ErrorKind};
//! # use gwa_codec::Span;
//!
//! let diag = Diagnostic::error("expected an integer, found `abc`")
//!     .with_code(ErrorCode::E201)
//!     .with_label(Span::new(14..17), "not an integer")
//!     .with_help("index fields hold whole numbers");
//!
//! assert_eq!(diag.kind(), Some(ErrorKind::Decode));
//! ```

mod diagnostic;
mod error_code;
mod label;
mod severity;

pub use diagnostic::Diagnostic;
pub use error_code::{ErrorCode, ErrorKind};
pub use label::Label;
pub use severity::Severity;

/// A type alias for `Result<T, Diagnostic>`.
pub type Result<T> = std::result::Result<T, Diagnostic>;
