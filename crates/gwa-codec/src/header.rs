//! Keyword token and record preamble.
//!
//! ```text
//! KEYWORD.N | COMMAND | [index] | name[{key:value}...] | fields...
//! ```

use gwa_core::{enums::SetCommand, header::RecordHeader, wire::WireEnum};
use winnow::{
    Parser as _,
    combinator::{delimited, repeat, separated_pair},
    error::ModalResult,
    token::take_while,
};

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    fields::{FieldCursor, FieldWriter},
    tokenizer::Token,
};

/// Tag key carrying the stream id.
pub const STREAM_TAG: &str = "speckle_stream_id";

/// Tag key carrying an application id without a type key.
pub const APPLICATION_TAG: &str = "speckle_app_id";

/// Keyword and schema version of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordToken<'a> {
    pub keyword: &'a str,
    pub version: i32,
}

/// Split `KEYWORD.N` into keyword and version. A missing suffix is version 1.
///
/// # Errors
///
/// Returns `E102` if the keyword is empty, contains characters other than
/// ASCII letters, digits and `_`, or the version is not a positive integer.
pub fn parse_keyword(token: Token<'_>) -> Result<KeywordToken<'_>> {
    let text = token.text();
    let (keyword, version) = match text.split_once('.') {
        Some((keyword, version)) => (keyword, version.parse::<i32>().ok()),
        None => (text, Some(1)),
    };

    let keyword_ok = !keyword.is_empty()
        && keyword
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    match version {
        Some(version) if keyword_ok && version > 0 => Ok(KeywordToken { keyword, version }),
        _ => Err(Diagnostic::error(format!("invalid keyword token `{text}`"))
            .with_code(ErrorCode::E102)
            .with_label(token.span(), "expected `KEYWORD` or `KEYWORD.N`")),
    }
}

/// Read command, index and name into a header for schema `version`.
///
/// # Errors
///
/// Returns `E100` for an unknown command, `E101` for a missing or
/// non-positive index, and `E200` if the line ends early.
pub fn decode_header(cursor: &mut FieldCursor<'_>, version: i32) -> Result<RecordHeader> {
    let command_token = cursor.next("command")?;
    let command = SetCommand::from_wire(command_token.text().trim()).ok_or_else(|| {
        Diagnostic::error(format!("unknown set command `{}`", command_token.text()))
            .with_code(ErrorCode::E100)
            .with_label(command_token.span(), "not a set command")
            .with_help("expected `SET`, `SET_AT` or `SET_NOINDEX`")
    })?;

    let mut header = RecordHeader::new(version);

    if command != SetCommand::SetNoIndex {
        let index_token = cursor.next("index").map_err(|err| err.with_code(ErrorCode::E101))?;
        let index = index_token
            .text()
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|index| *index > 0)
            .ok_or_else(|| {
                Diagnostic::error(format!(
                    "invalid record index `{}`",
                    index_token.text()
                ))
                .with_code(ErrorCode::E101)
                .with_label(index_token.span(), "expected a positive integer")
                .with_secondary_label(command_token.span(), "index required by this command")
            })?;
        header
            .assign_index(index)
            .and_then(|()| header.set_command(command))
            .map_err(|err| {
                Diagnostic::error(err.to_string())
                    .with_code(ErrorCode::E101)
                    .with_label(index_token.span(), "invalid index")
            })?;
    }

    let name = cursor.text("name")?;
    apply_name(&mut header, name);
    Ok(header)
}

/// Write command, index and name.
///
/// # Errors
///
/// Returns `E406` when the name or ids would be read back differently.
pub fn encode_header(header: &RecordHeader, writer: &mut FieldWriter) -> Result<()> {
    writer.push_wire("command", header.command());
    if let Some(index) = header.index() {
        writer.push_int("index", index);
    }
    writer.push("name", format_name(header)?);
    Ok(())
}

/// Split embedded tags off the name field.
fn apply_name(header: &mut RecordHeader, text: &str) {
    let (name, tags) = split_name(text);
    header.name = (!name.is_empty()).then(|| name.to_string());

    for (key, value) in tags {
        let value = (!value.is_empty()).then(|| value.to_string());
        match key {
            STREAM_TAG => header.stream_id = value,
            APPLICATION_TAG => {
                header.sid = None;
                header.application_id = value;
            }
            _ => {
                header.sid = Some(key.to_string());
                header.application_id = value;
            }
        }
    }
}

fn tag<'a>(input: &mut &'a str) -> ModalResult<(&'a str, &'a str)> {
    delimited(
        '{',
        separated_pair(
            take_while(1.., |c: char| c != ':' && c != '{' && c != '}'),
            ':',
            take_while(0.., |c: char| c != '{' && c != '}'),
        ),
        '}',
    )
    .parse_next(input)
}

fn tags<'a>(input: &mut &'a str) -> ModalResult<Vec<(&'a str, &'a str)>> {
    repeat(1.., tag).parse_next(input)
}

/// Split `text` at the first `{` whose suffix is made only of tags.
fn split_name(text: &str) -> (&str, Vec<(&str, &str)>) {
    for (position, _) in text.match_indices('{') {
        if let Ok(parsed) = tags.parse(&text[position..]) {
            return (&text[..position], parsed);
        }
    }
    (text, Vec::new())
}

fn format_name(header: &RecordHeader) -> Result<String> {
    let name = header.name.as_deref().unwrap_or_default();
    if header.name.as_deref() == Some("") {
        return Err(tag_error("name is empty and would read back as no name"));
    }
    if !split_name(name).1.is_empty() {
        return Err(tag_error(format!(
            "name `{name}` ends in `{{key:value}}` groups and would be read as tags"
        )));
    }

    let mut text = name.to_string();
    if header.sid.is_some() || header.application_id.is_some() {
        let key = header.sid.as_deref().unwrap_or(APPLICATION_TAG);
        if key == STREAM_TAG || (key == APPLICATION_TAG && header.sid.is_some()) {
            return Err(tag_error(format!("`{key}` is reserved and cannot be a type key")));
        }
        check_tag_part(key, true)?;
        let value = header.application_id.as_deref().unwrap_or_default();
        if header.application_id.is_some() {
            check_tag_part(value, false)?;
        }
        text.push_str(&format!("{{{key}:{value}}}"));
    }
    if let Some(stream_id) = header.stream_id.as_deref() {
        check_tag_part(stream_id, false)?;
        text.push_str(&format!("{{{STREAM_TAG}:{stream_id}}}"));
    }
    Ok(text)
}

fn check_tag_part(text: &str, is_key: bool) -> Result<()> {
    if text.is_empty() {
        return Err(tag_error("tag keys and values must not be empty"));
    }
    if text.contains(['{', '}']) || (is_key && text.contains(':')) {
        return Err(tag_error(format!("`{text}` cannot be written inside a tag")));
    }
    Ok(())
}

fn tag_error(message: impl Into<String>) -> Diagnostic {
    Diagnostic::error(message)
        .with_code(ErrorCode::E406)
        .with_help("tags are written as `{key:value}` after the name")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{span::Span, tokenizer::tokenize};

    fn decode(line: &str) -> Result<RecordHeader> {
        let mut cursor = FieldCursor::new(tokenize(line, '\t')?, line.len());
        decode_header(&mut cursor, 3)
    }

    fn encode(header: &RecordHeader) -> Result<String> {
        let mut writer = FieldWriter::new();
        encode_header(header, &mut writer)?;
        writer.finish('\t')
    }

    #[test]
    fn test_parse_keyword() {
        let token = Token::new("NODE.3", Span::new(0..6));
        assert_eq!(
            parse_keyword(token).unwrap(),
            KeywordToken {
                keyword: "NODE",
                version: 3
            }
        );

        let token = Token::new("LOAD_BEAM_UDL", Span::new(0..13));
        assert_eq!(parse_keyword(token).unwrap().version, 1);

        for bad in ["", "NODE.", "NODE.x", "NODE.0", "NO DE.3"] {
            let token = Token::new(bad, Span::new(0..bad.len()));
            assert_eq!(
                parse_keyword(token).unwrap_err().code(),
                Some(ErrorCode::E102),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_decode_indexed_header() {
        let header = decode("SET\t12\tN1").unwrap();

        assert_eq!(header.command(), SetCommand::Set);
        assert_eq!(header.index(), Some(12));
        assert_eq!(header.name.as_deref(), Some("N1"));
        assert_eq!(header.version(), 3);
    }

    #[test]
    fn test_decode_noindex_header() {
        let header = decode("SET_NOINDEX\t\tNO_RGB").unwrap();

        assert_eq!(header.index(), None);
        assert_eq!(header.name, None);
    }

    #[test]
    fn test_header_errors() {
        assert_eq!(decode("PUT\t1\tN").unwrap_err().code(), Some(ErrorCode::E100));
        assert_eq!(decode("SET\t0\tN").unwrap_err().code(), Some(ErrorCode::E101));
        assert_eq!(decode("SET\tx\tN").unwrap_err().code(), Some(ErrorCode::E101));
        assert_eq!(decode("SET_AT").unwrap_err().code(), Some(ErrorCode::E101));
        assert_eq!(decode("SET\t4").unwrap_err().code(), Some(ErrorCode::E200));
    }

    #[test]
    fn test_name_tags() {
        let header = decode("SET\t1\tBeam A{speckle_app_id:abc-1}{speckle_stream_id:s9}").unwrap();
        assert_eq!(header.name.as_deref(), Some("Beam A"));
        assert_eq!(header.sid, None);
        assert_eq!(header.application_id.as_deref(), Some("abc-1"));
        assert_eq!(header.stream_id.as_deref(), Some("s9"));

        let header = decode("SET\t1\tN{Objects.Node:x:y}").unwrap();
        assert_eq!(header.sid.as_deref(), Some("Objects.Node"));
        assert_eq!(header.application_id.as_deref(), Some("x:y"));
    }

    #[test]
    fn test_braces_that_are_not_tags_stay_in_name() {
        let header = decode("SET\t1\tslab {east} {a:b}").unwrap();

        assert_eq!(header.name.as_deref(), Some("slab {east} "));
        assert_eq!(header.sid.as_deref(), Some("a"));
    }

    #[test]
    fn test_encode_picks_command() {
        let mut header = RecordHeader::with_index(3, 7).unwrap().named("N");
        assert_eq!(encode(&header).unwrap(), "SET\t7\tN");

        header.set_command(SetCommand::SetAt).unwrap();
        assert_eq!(encode(&header).unwrap(), "SET_AT\t7\tN");
        assert_eq!(decode("SET_AT\t7\tN").unwrap(), header);

        let header = RecordHeader::new(3);
        assert_eq!(encode(&header).unwrap(), "SET_NOINDEX\t");
    }

    #[test]
    fn test_unindexed_header_round_trip() {
        let header = RecordHeader::new(3).named("Draft");

        let line = encode(&header).unwrap();
        assert_eq!(line, "SET_NOINDEX\tDraft");
        assert_eq!(decode(&line).unwrap(), header);

        let mut header = header;
        header.assign_index(9).unwrap();
        assert_eq!(decode(&encode(&header).unwrap()).unwrap(), header);
    }

    #[test]
    fn test_encode_tags_round_trip() {
        let mut header = RecordHeader::with_index(3, 2).unwrap().named("Col");
        header.sid = Some("Objects.Column".to_string());
        header.application_id = Some("c-2".to_string());
        header.stream_id = Some("abc".to_string());

        let line = encode(&header).unwrap();
        assert_eq!(line, "SET\t2\tCol{Objects.Column:c-2}{speckle_stream_id:abc}");
        assert_eq!(decode(&line).unwrap(), header);
    }

    #[test]
    fn test_name_that_looks_like_tag_is_rejected() {
        let header = RecordHeader::new(3).named("A{b:c}");

        assert_eq!(encode(&header).unwrap_err().code(), Some(ErrorCode::E406));
    }
}
