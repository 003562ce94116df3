//! Typed access to the fields of one line.
//!
//! [`FieldCursor`] walks the tokens left after the header and turns them into
//! typed values, reporting failures against the token's span. [`FieldWriter`]
//! collects emitted fields and joins them, refusing any field that would not
//! tokenize back into itself.

use gwa_core::{record::Measure, wire::WireEnum};

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    span::Span,
    tokenizer::{Token, tokenize},
};

/// Remaining fields of a line being decoded.
#[derive(Debug, Clone)]
pub struct FieldCursor<'a> {
    tokens: Vec<Token<'a>>,
    position: usize,
    line_end: usize,
}

impl<'a> FieldCursor<'a> {
    /// Create a cursor over `tokens`, which were split from a line of `line_len` bytes.
    pub fn new(tokens: Vec<Token<'a>>, line_len: usize) -> Self {
        Self {
            tokens,
            position: 0,
            line_end: line_len,
        }
    }

    /// Number of tokens not consumed yet.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }

    /// `true` when every token has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The next token, without consuming it.
    pub fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.position).copied()
    }

    /// Consume the next token as `field`.
    ///
    /// # Errors
    ///
    /// Returns `E200` when the line has no more fields.
    pub fn next(&mut self, field: &str) -> Result<Token<'a>> {
        match self.tokens.get(self.position) {
            Some(token) => {
                self.position += 1;
                Ok(*token)
            }
            None => Err(Diagnostic::error(format!("missing field `{field}`"))
                .with_code(ErrorCode::E200)
                .with_label(
                    Span::new(self.line_end..self.line_end),
                    "line ends here",
                )),
        }
    }

    /// Consume every remaining token.
    pub fn take_rest(&mut self) -> Vec<Token<'a>> {
        let rest = self.tokens[self.position..].to_vec();
        self.position = self.tokens.len();
        rest
    }

    /// Fail if any token is left.
    ///
    /// # Errors
    ///
    /// Returns `E205` labelling every unconsumed token.
    pub fn finish(&self) -> Result<()> {
        let Some(first) = self.peek() else {
            return Ok(());
        };
        let last = self.tokens[self.tokens.len() - 1];
        Err(Diagnostic::error(format!(
            "unexpected trailing field{} `{}`",
            if self.remaining() > 1 { "s starting at" } else { "" },
            first.text()
        ))
        .with_code(ErrorCode::E205)
        .with_label(first.span().union(last.span()), "not part of this record")
        .with_help("remove the extra fields or check the record version"))
    }

    /// Consume a field as raw text.
    pub fn text(&mut self, field: &str) -> Result<&'a str> {
        self.next(field).map(|token| token.text())
    }

    /// Consume an integer field.
    pub fn int(&mut self, field: &str) -> Result<i32> {
        let token = self.next(field)?;
        parse_int(token, field)
    }

    /// Consume a finite number field.
    pub fn float(&mut self, field: &str) -> Result<f64> {
        let token = self.next(field)?;
        parse_float(token, field)
    }

    /// Consume an index field, where `0` means no reference.
    pub fn index(&mut self, field: &str) -> Result<Option<i32>> {
        let token = self.next(field)?;
        parse_index(token, field)
    }

    /// Consume a number field, where `0` means unset.
    pub fn optional_float(&mut self, field: &str) -> Result<Option<f64>> {
        let value = self.float(field)?;
        Ok((value != 0.0).then_some(value))
    }

    /// Consume an enum field. Unknown strings are fatal.
    pub fn wire<E: WireEnum>(&mut self, field: &str) -> Result<E> {
        let token = self.next(field)?;
        parse_wire(token, field)
    }

    /// Consume a `YES`/`NO` field.
    pub fn yes_no(&mut self, field: &str) -> Result<bool> {
        self.wire::<gwa_core::enums::YesNo>(field).map(bool::from)
    }

    /// Consume a length that may be a percentage.
    pub fn measure(&mut self, field: &str) -> Result<Measure> {
        let token = self.next(field)?;
        parse_measure(token, field)
    }
}

/// Parse `token` as an `i32`.
pub fn parse_int(token: Token<'_>, field: &str) -> Result<i32> {
    token.text().trim().parse().map_err(|_| {
        Diagnostic::error(format!(
            "expected an integer for `{field}`, found `{}`",
            token.text()
        ))
        .with_code(ErrorCode::E201)
        .with_label(token.span(), "not an integer")
    })
}

/// Parse `token` as a finite `f64`.
pub fn parse_float(token: Token<'_>, field: &str) -> Result<f64> {
    let value: f64 = token.text().trim().parse().map_err(|_| {
        Diagnostic::error(format!(
            "expected a number for `{field}`, found `{}`",
            token.text()
        ))
        .with_code(ErrorCode::E202)
        .with_label(token.span(), "not a number")
    })?;
    if !value.is_finite() {
        return Err(Diagnostic::error(format!(
            "`{field}` must be finite, found `{}`",
            token.text()
        ))
        .with_code(ErrorCode::E202)
        .with_label(token.span(), "not finite"));
    }
    Ok(value)
}

/// Parse `token` as an index reference; `0` is no reference.
pub fn parse_index(token: Token<'_>, field: &str) -> Result<Option<i32>> {
    let value = parse_int(token, field)?;
    if value < 0 {
        return Err(Diagnostic::error(format!(
            "`{field}` must not be negative, found {value}"
        ))
        .with_code(ErrorCode::E201)
        .with_label(token.span(), "negative index"));
    }
    Ok((value != 0).then_some(value))
}

/// Parse `token` with an enum's wire table.
pub fn parse_wire<E: WireEnum>(token: Token<'_>, field: &str) -> Result<E> {
    E::parse_wire(token.text().trim()).map_err(|err| {
        Diagnostic::error(format!("{err} for `{field}`"))
            .with_code(ErrorCode::E300)
            .with_label(token.span(), format!("unknown {}", err.type_name()))
            .with_help(expected_values::<E>())
    })
}

/// Parse `n` or `n%`.
pub fn parse_measure(token: Token<'_>, field: &str) -> Result<Measure> {
    let text = token.text().trim();
    match text.strip_suffix('%') {
        Some(number) => {
            let inner = Token::new(number, token.span());
            parse_float(inner, field).map(Measure::Percentage)
        }
        None => parse_float(token, field).map(Measure::Absolute),
    }
}

fn expected_values<E: WireEnum>() -> String {
    let values: Vec<String> = E::TABLE
        .iter()
        .take(8)
        .map(|(_, wire)| format!("`{wire}`"))
        .collect();
    let more = if E::TABLE.len() > values.len() {
        ", ..."
    } else {
        ""
    };
    format!("expected one of {}{more}", values.join(", "))
}

/// Write a number in its shortest round-trip form.
pub fn format_float(value: f64) -> String {
    format!("{value}")
}

/// Write a finite number, failing with `E403` otherwise.
pub fn format_finite(field: &str, value: f64) -> Result<String> {
    if value.is_finite() {
        Ok(format_float(value))
    } else {
        Err(
            Diagnostic::error(format!("`{field}` is {value}, only finite numbers can be written"))
                .with_code(ErrorCode::E403),
        )
    }
}

/// Write an index reference; `None` is `0`.
///
/// # Errors
///
/// Returns `E400` for zero or negative references, which would not decode
/// back.
pub fn format_index(field: &str, value: Option<i32>) -> Result<String> {
    match value {
        None => Ok("0".to_string()),
        Some(index) if index > 0 => Ok(index.to_string()),
        Some(index) => Err(Diagnostic::error(format!(
            "`{field}` holds {index}, references must be positive"
        ))
        .with_code(ErrorCode::E400)
        .with_help("use `None` for no reference")),
    }
}

/// Fields of a line being encoded.
#[derive(Debug, Default, Clone)]
pub struct FieldWriter {
    fields: Vec<(&'static str, String)>,
}

impl FieldWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields written so far.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// `true` if nothing was written.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Append a raw field.
    pub fn push(&mut self, field: &'static str, text: impl Into<String>) {
        self.fields.push((field, text.into()));
    }

    pub fn push_int(&mut self, field: &'static str, value: i32) {
        self.push(field, value.to_string());
    }

    /// Append a finite number.
    ///
    /// # Errors
    ///
    /// Returns `E403` for NaN or infinity.
    pub fn push_float(&mut self, field: &'static str, value: f64) -> Result<()> {
        self.push(field, format_finite(field, value)?);
        Ok(())
    }

    /// Append an index reference; `None` is written as `0`.
    ///
    /// # Errors
    ///
    /// Returns `E400` for zero or negative references, which would not
    /// decode back.
    pub fn push_index(&mut self, field: &'static str, value: Option<i32>) -> Result<()> {
        self.push(field, format_index(field, value)?);
        Ok(())
    }

    /// Append an optional number; `None` is written as `0`.
    pub fn push_optional_float(&mut self, field: &'static str, value: Option<f64>) -> Result<()> {
        match value {
            Some(value) if value == 0.0 => Err(Diagnostic::error(format!(
                "`{field}` holds 0, which reads back as unset"
            ))
            .with_code(ErrorCode::E400)
            .with_help("use `None` for an unset value")),
            Some(value) => self.push_float(field, value),
            None => {
                self.push(field, "0");
                Ok(())
            }
        }
    }

    /// Append an enum in its canonical spelling.
    pub fn push_wire<E: WireEnum>(&mut self, field: &'static str, value: E) {
        self.push(field, value.to_wire());
    }

    pub fn push_yes_no(&mut self, field: &'static str, value: bool) {
        self.push_wire(field, gwa_core::enums::YesNo::from(value));
    }

    /// Append a length, `n%` for percentages.
    pub fn push_measure(&mut self, field: &'static str, value: Measure) -> Result<()> {
        let text = match value {
            Measure::Absolute(v) => format_finite(field, v)?,
            Measure::Percentage(v) => format!("{}%", format_finite(field, v)?),
        };
        self.push(field, text);
        Ok(())
    }

    /// Join the fields into one line.
    ///
    /// # Errors
    ///
    /// Returns `E400` if a field contains a line break or would not
    /// tokenize back into exactly itself with `delimiter`.
    pub fn finish(self, delimiter: char) -> Result<String> {
        for (field, text) in &self.fields {
            check_writable(field, text, delimiter)?;
        }
        let line = self
            .fields
            .iter()
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join(&delimiter.to_string());
        log::trace!(fields = self.fields.len(); "Joined line");
        Ok(line)
    }
}

fn check_writable(field: &str, text: &str, delimiter: char) -> Result<()> {
    let not_writable = |reason: &str| {
        Diagnostic::error(format!("`{field}` cannot be written: {reason}"))
            .with_code(ErrorCode::E400)
            .with_help(format!("`{text}`"))
    };

    if text.contains(['\n', '\r']) {
        return Err(not_writable("it contains a line break"));
    }
    match tokenize(text, delimiter) {
        Ok(tokens) if tokens.len() == 1 && tokens[0].text() == text => Ok(()),
        Ok(_) => Err(not_writable("it contains the delimiter")),
        Err(_) => Err(not_writable("its brackets are unbalanced or nested")),
    }
}
