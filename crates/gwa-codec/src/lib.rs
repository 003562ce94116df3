//! # GWA Codec
//!
//! Line codec for GWA records. A line is split into tokens, the keyword and
//! header are read off the front, and the record type's step table consumes
//! the rest. Encoding runs the same table in reverse and joins the fields.
//!
//! ## Usage
//!
//! ```
//! # use gwa_codec::{Context, decode_record, encode_record};
//! # use gwa_codec::error::Diagnostic;
//! # use gwa_core::{entity::IndexUniverse, record::Node};
//!
//! fn main() -> Result<(), Diagnostic> {
//!     let universe = IndexUniverse::new();
//!     let context = Context::new('\t', &universe);
//!
//!     let line = "NODE.3\tSET\t12\tN1\tNO_RGB\t1.5\t2.5\t0\tfix";
//!     let node: Node = decode_record(line, &context)?;
//!     assert_eq!(node.header.index(), Some(12));
//!
//!     assert_eq!(encode_record(&node, &context)?, line);
//!     Ok(())
//! }
//! ```
//!
//! The codec never owns the index universe. Every call takes a [`Context`]
//! that borrows an [`IndexResolver`] for `all` expansion.

pub mod error;
pub mod fields;
pub mod groups;
pub mod header;
pub mod list;
pub mod pipeline;
pub mod record;
pub mod release;
pub mod tokenizer;

mod span;

pub use record::GwaRecord;
pub use span::Span;

use gwa_core::{entity::IndexResolver, header::RecordHeader};
use log::{debug, trace};

use error::{Diagnostic, ErrorCode, Result};
use fields::{FieldCursor, FieldWriter};
use header::{KeywordToken, decode_header, encode_header, parse_keyword};
use tokenizer::tokenize;

/// Per-call settings: the field delimiter and the index universe.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    delimiter: char,
    resolver: &'a dyn IndexResolver,
}

impl<'a> Context<'a> {
    /// Create a context splitting on `delimiter` and resolving `all` through `resolver`.
    pub fn new(delimiter: char, resolver: &'a dyn IndexResolver) -> Self {
        Self {
            delimiter,
            resolver,
        }
    }

    /// Field delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Index universe used for list fields.
    pub fn resolver(&self) -> &'a dyn IndexResolver {
        self.resolver
    }
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("delimiter", &self.delimiter)
            .finish_non_exhaustive()
    }
}

/// Read the keyword token of `line` without decoding the rest.
///
/// # Errors
///
/// Returns `E0xx` if the line does not tokenize and `E102` for an invalid
/// keyword token.
pub fn peek_keyword(line: &str, delimiter: char) -> Result<(String, i32)> {
    let tokens = tokenize(line, delimiter)?;
    let Some(first) = tokens.first() else {
        return Err(Diagnostic::error("empty line").with_code(ErrorCode::E102));
    };
    let KeywordToken { keyword, version } = parse_keyword(*first)?;
    Ok((keyword.to_string(), version))
}

/// Read the keyword and header of `line`, leaving the record fields alone.
///
/// Used to learn which indices a document defines before decoding it.
///
/// # Errors
///
/// Returns the `E0xx` and `E1xx` errors of [`decode_record`], except that
/// the keyword and version are not checked against any record type.
pub fn peek_header(line: &str, delimiter: char) -> Result<(String, RecordHeader)> {
    let tokens = tokenize(line, delimiter)?;
    let mut cursor = FieldCursor::new(tokens, line.len());

    let KeywordToken { keyword, version } = parse_keyword(cursor.next("keyword")?)?;
    let header = decode_header(&mut cursor, version)?;
    Ok((keyword.to_string(), header))
}

/// Decode one line into a record of type `R`.
///
/// # Errors
///
/// Returns a diagnostic for any failure. No partial record is ever
/// returned:
/// - `E0xx` when the line does not tokenize;
/// - `E1xx` for the keyword, version, command, index or name;
/// - `E2xx` and `E300` for the record's fields.
pub fn decode_record<R: GwaRecord>(line: &str, context: &Context<'_>) -> Result<R> {
    let tokens = tokenize(line, context.delimiter())?;
    let mut cursor = FieldCursor::new(tokens, line.len());

    let keyword_token = cursor.next("keyword")?;
    let KeywordToken { keyword, version } = parse_keyword(keyword_token)?;
    debug!(keyword = keyword, version = version; "Decoding record");

    let Some(canonical) = R::KEYWORDS
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(keyword))
    else {
        return Err(Diagnostic::error(format!("unexpected keyword `{keyword}`"))
            .with_code(ErrorCode::E104)
            .with_label(keyword_token.span(), "not handled here")
            .with_help(format!("expected {}", R::KEYWORDS.join(", "))));
    };
    if version != R::VERSION {
        return Err(Diagnostic::error(format!(
            "`{canonical}` version {version} is not supported"
        ))
        .with_code(ErrorCode::E103)
        .with_label(keyword_token.span(), "unsupported version")
        .with_help(format!("this codec reads `{canonical}.{}`", R::VERSION)));
    }

    let header = decode_header(&mut cursor, version)?;
    let mut record = R::blank(canonical, header).ok_or_else(|| {
        Diagnostic::error(format!("unexpected keyword `{keyword}`"))
            .with_code(ErrorCode::E104)
            .with_label(keyword_token.span(), "not handled here")
    })?;

    pipeline::run_decode(&mut record, &mut cursor, R::STEPS, context)?;
    trace!(keyword = canonical; "Record decoded");
    Ok(record)
}

/// Encode a record into one line.
///
/// # Errors
///
/// Returns an `E4xx` diagnostic if the record cannot be written as a line
/// that decodes back to it.
pub fn encode_record<R: GwaRecord>(record: &R, context: &Context<'_>) -> Result<String> {
    let keyword = record.keyword();
    let version = record.header().version();
    if version != R::VERSION {
        return Err(Diagnostic::error(format!(
            "`{keyword}` version {version} cannot be written"
        ))
        .with_code(ErrorCode::E407)
        .with_help(format!("this codec writes `{keyword}.{}`", R::VERSION)));
    }
    debug!(keyword = keyword, version = version; "Encoding record");

    let mut writer = FieldWriter::new();
    writer.push("keyword", format!("{keyword}.{version}"));
    encode_header(record.header(), &mut writer)?;
    pipeline::run_encode(record, &mut writer, R::STEPS, context)?;
    writer.finish(context.delimiter())
}
