//! Error codes for the codec diagnostic system.
//!
//! Error codes are organized by failure kind:
//! - `E0xx` - Malformed line
//! - `E1xx` - Header parse errors
//! - `E2xx` - Field decode errors
//! - `E3xx` - Unknown enum values
//! - `E4xx` - Encode errors

use std::fmt;

/// The coarse error taxonomy every [`ErrorCode`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The line could not be split into tokens.
    MalformedLine,
    /// The keyword, command, index or name could not be read.
    HeaderParse,
    /// A field was missing or its token did not parse.
    Decode,
    /// A wire string is not part of the enum's table.
    UnknownEnumValue,
    /// The record is not in a state that can be written.
    Encode,
}

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Malformed Line (E0xx)
    // =========================================================================
    /// Unclosed bracket group.
    ///
    /// A `(` was opened but the field ended before the matching `)`. Nested
    /// brackets are reported here as well.
    E001,

    /// Unmatched closing bracket.
    E002,

    // =========================================================================
    // Header Parse (E1xx)
    // =========================================================================
    /// Unknown set command.
    ///
    /// The command token is not `SET`, `SET_AT` or `SET_NOINDEX`.
    E100,

    /// Invalid record index.
    ///
    /// The index is missing, not an integer, or not positive.
    E101,

    /// Invalid keyword token.
    ///
    /// The first token is not `KEYWORD` or `KEYWORD.N`.
    E102,

    /// Unsupported schema version.
    E103,

    /// Unknown keyword.
    ///
    /// The keyword does not belong to the record type being decoded, or is
    /// not handled at all.
    E104,

    // =========================================================================
    // Field Decode (E2xx)
    // =========================================================================
    /// Missing field.
    ///
    /// The line ended before a required field.
    E200,

    /// Invalid integer.
    E201,

    /// Invalid number.
    ///
    /// Not a decimal number, or not finite.
    E202,

    /// Invalid list.
    ///
    /// Bad list item, reversed or oversized range, or mixed group items.
    E203,

    /// Invalid release code.
    ///
    /// The code is not six characters of `F`, `R` and `K`.
    E204,

    /// Unexpected trailing field.
    E205,

    /// Invalid topology.
    E206,

    /// Invalid node restraint code.
    E207,

    // =========================================================================
    // Unknown Enum Value (E3xx)
    // =========================================================================
    /// Unknown enum value.
    E300,

    // =========================================================================
    // Encode (E4xx)
    // =========================================================================
    /// Field not writable.
    ///
    /// The value contains the delimiter, a line break, or brackets that
    /// would not tokenize back into the same field.
    E400,

    /// Missing stiffness for a stiff axis.
    E401,

    /// Stiffness given for an axis that is not stiff.
    E402,

    /// Non-finite number.
    E403,

    /// Release block does not match its inclusion flag.
    E404,

    /// Topology does not fit the record type.
    ///
    /// Too many nodes for an element type, or dimension-specific member
    /// fields that disagree with the member type.
    E405,

    /// Name collides with the tag syntax.
    E406,

    /// Unsupported schema version.
    E407,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
            ErrorCode::E205 => "E205",
            ErrorCode::E206 => "E206",
            ErrorCode::E207 => "E207",
            ErrorCode::E300 => "E300",
            ErrorCode::E400 => "E400",
            ErrorCode::E401 => "E401",
            ErrorCode::E402 => "E402",
            ErrorCode::E403 => "E403",
            ErrorCode::E404 => "E404",
            ErrorCode::E405 => "E405",
            ErrorCode::E406 => "E406",
            ErrorCode::E407 => "E407",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unclosed bracket group",
            ErrorCode::E002 => "unmatched closing bracket",
            ErrorCode::E100 => "unknown set command",
            ErrorCode::E101 => "invalid record index",
            ErrorCode::E102 => "invalid keyword token",
            ErrorCode::E103 => "unsupported schema version",
            ErrorCode::E104 => "unknown keyword",
            ErrorCode::E200 => "missing field",
            ErrorCode::E201 => "invalid integer",
            ErrorCode::E202 => "invalid number",
            ErrorCode::E203 => "invalid list",
            ErrorCode::E204 => "invalid release code",
            ErrorCode::E205 => "unexpected trailing field",
            ErrorCode::E206 => "invalid topology",
            ErrorCode::E207 => "invalid restraint code",
            ErrorCode::E300 => "unknown enum value",
            ErrorCode::E400 => "field not writable",
            ErrorCode::E401 => "missing stiffness",
            ErrorCode::E402 => "unexpected stiffness",
            ErrorCode::E403 => "non-finite number",
            ErrorCode::E404 => "release block mismatch",
            ErrorCode::E405 => "topology mismatch",
            ErrorCode::E406 => "name collides with tag syntax",
            ErrorCode::E407 => "unsupported schema version",
        }
    }

    /// Returns the failure kind this code belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::E001 | ErrorCode::E002 => ErrorKind::MalformedLine,
            ErrorCode::E100
            | ErrorCode::E101
            | ErrorCode::E102
            | ErrorCode::E103
            | ErrorCode::E104 => ErrorKind::HeaderParse,
            ErrorCode::E200
            | ErrorCode::E201
            | ErrorCode::E202
            | ErrorCode::E203
            | ErrorCode::E204
            | ErrorCode::E205
            | ErrorCode::E206
            | ErrorCode::E207 => ErrorKind::Decode,
            ErrorCode::E300 => ErrorKind::UnknownEnumValue,
            ErrorCode::E400
            | ErrorCode::E401
            | ErrorCode::E402
            | ErrorCode::E403
            | ErrorCode::E404
            | ErrorCode::E405
            | ErrorCode::E406
            | ErrorCode::E407 => ErrorKind::Encode,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E205.to_string(), "E205");
        assert_eq!(ErrorCode::E407.to_string(), "E407");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "unclosed bracket group");
        assert_eq!(ErrorCode::E300.description(), "unknown enum value");
    }

    #[test]
    fn test_error_code_kind_matches_prefix() {
        assert_eq!(ErrorCode::E002.kind(), ErrorKind::MalformedLine);
        assert_eq!(ErrorCode::E103.kind(), ErrorKind::HeaderParse);
        assert_eq!(ErrorCode::E207.kind(), ErrorKind::Decode);
        assert_eq!(ErrorCode::E300.kind(), ErrorKind::UnknownEnumValue);
        assert_eq!(ErrorCode::E404.kind(), ErrorKind::Encode);
    }
}
