//! Splits a GWA line into positional fields.
//!
//! Fields are separated by a single delimiter character. A bracket group
//! such as `V(45 46 47 48)` is atomic: delimiters inside it do not split,
//! and it stays attached to whatever precedes it in the same field. Groups
//! do not nest and there is no quoting or escaping.

use winnow::{
    Parser as _,
    combinator::{alt, cut_err, preceded, repeat, terminated},
    error::{ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::take_while,
};

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    span::Span,
};

/// Diagnostic details attached to winnow errors through `.context()`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TokenizerDiagnostic {
    code: ErrorCode,
    message: &'static str,
    help: Option<&'static str>,
    /// The error span covers from `start` to the error position.
    start: usize,
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<'a, O> = ModalResult<O, ContextError<TokenizerDiagnostic>>;

/// One field of a line, borrowed from the line with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    text: &'a str,
    span: Span,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, span: Span) -> Self {
        Self { text, span }
    }

    /// The field text, including any bracket group.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte range of the field in the line.
    pub fn span(&self) -> Span {
        self.span
    }
}

/// Parse a `(...)` group. Nested `(` or a missing `)` is fatal.
fn bracket_group<'a>(input: &mut Input<'a>) -> IResult<'a, ()> {
    let start = input.current_token_start();

    preceded(
        '(',
        cut_err(terminated(
            take_while(0.., |c: char| c != '(' && c != ')'),
            ')',
        ))
        .context(TokenizerDiagnostic {
            code: ErrorCode::E001,
            message: "unclosed bracket group",
            help: Some("close the group with `)`; groups cannot be nested"),
            start,
        }),
    )
    .void()
    .parse_next(input)
}

/// Parse one field: plain text runs and bracket groups up to the next
/// delimiter or stray `)`.
fn field<'a>(input: &mut Input<'a>, delimiter: char) -> IResult<'a, &'a str> {
    repeat::<_, _, (), _, _>(
        0..,
        alt((
            bracket_group,
            take_while(1.., move |c: char| c != delimiter && c != '(' && c != ')').void(),
        )),
    )
    .take()
    .parse_next(input)
}

/// Convert an ErrMode and error position to a Diagnostic.
///
/// Falls back to E002 when no context is attached, which only happens for a
/// stray closing bracket.
fn convert_err_mode(err: ErrMode<ContextError<TokenizerDiagnostic>>, error_pos: usize) -> Diagnostic {
    let context_error = match err {
        ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
        ErrMode::Incomplete(_) => ContextError::new(),
    };

    if let Some(TokenizerDiagnostic {
        code,
        message,
        help,
        start,
    }) = context_error.context().next()
    {
        let mut diag = Diagnostic::error(*message)
            .with_code(*code)
            .with_label(Span::new(*start..error_pos), code.description());
        if let Some(h) = help {
            diag = diag.with_help(*h);
        }
        return diag;
    }

    unmatched_close(error_pos)
}

fn unmatched_close(pos: usize) -> Diagnostic {
    Diagnostic::error("unmatched `)`")
        .with_code(ErrorCode::E002)
        .with_label(
            Span::new(pos..pos.saturating_add(1)),
            ErrorCode::E002.description(),
        )
        .with_help("remove the `)` or open the group with `(`")
}

/// Split `line` into fields on `delimiter`.
///
/// Always yields at least one token; an empty line is one empty field.
///
/// # Errors
///
/// Returns a MalformedLine diagnostic (`E001`/`E002`) when brackets are
/// unbalanced or nested. No tokens are returned in that case.
///
/// # Example
///
/// ```
/// # use gwa_codec::tokenizer::tokenize;
/// let tokens = tokenize("MEMB.8\t1 2 3 4 V(5 6\t7)\tNO", '\t').unwrap();
///
/// let texts: Vec<_> = tokens.iter().map(|t| t.text()).collect();
/// assert_eq!(texts, ["MEMB.8", "1 2 3 4 V(5 6\t7)", "NO"]);
/// ```
pub fn tokenize(line: &str, delimiter: char) -> Result<Vec<Token<'_>>> {
    let mut input = LocatingSlice::new(line);
    let mut tokens = Vec::new();

    loop {
        let start = input.current_token_start();
        let text = field(&mut input, delimiter)
            .map_err(|e| convert_err_mode(e, input.current_token_start()))?;
        let end = input.current_token_start();
        tokens.push(Token::new(text, Span::new(start..end)));

        if input.is_empty() {
            break;
        }
        match input.next_token() {
            Some(c) if c == delimiter => {}
            _ => return Err(unmatched_close(end)),
        }
    }

    log::trace!(fields = tokens.len(); "Tokenized line");
    Ok(tokens)
}
