//! Ordered decode/encode step tables.
//!
//! Each record type declares its grammar as a `const` slice of [`Step`]s.
//! The order of the slice is the order of the fields on the wire. Decoding
//! runs every step against the remaining tokens, encoding runs the same
//! steps against the record, and both skip steps whose [`Presence`] says the
//! field is absent.

use crate::{
    Context,
    error::Result,
    fields::{FieldCursor, FieldWriter},
};

/// Reads one field (or a fixed run of fields) into the record.
pub type DecodeFn<R> = fn(&mut R, &mut FieldCursor<'_>, &Context<'_>) -> Result<()>;

/// Writes one field (or a fixed run of fields) from the record.
pub type EncodeFn<R> = fn(&R, &mut FieldWriter, &Context<'_>) -> Result<()>;

/// When a step's field is present on the wire.
pub enum Presence<R> {
    /// Always present.
    Required,

    /// Present when the already-decoded part of the record says so.
    When(fn(&R) -> bool),

    /// Optional trailing field.
    ///
    /// Decoded while tokens remain, if `applies`. Encoded only up to the last
    /// applicable trailing step whose `is_set` holds; earlier trailing steps
    /// are written with whatever value they carry.
    Trailing {
        applies: fn(&R) -> bool,
        is_set: fn(&R) -> bool,
    },
}

impl<R> Clone for Presence<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Presence<R> {}

/// One grammar step of a record type.
pub struct Step<R> {
    /// Field name used in logs and diagnostics.
    pub field: &'static str,
    pub presence: Presence<R>,
    pub decode: DecodeFn<R>,
    pub encode: EncodeFn<R>,
}

impl<R> Step<R> {
    /// A step that is always present.
    pub const fn required(field: &'static str, decode: DecodeFn<R>, encode: EncodeFn<R>) -> Self {
        Self {
            field,
            presence: Presence::Required,
            decode,
            encode,
        }
    }

    /// A step present only when `condition` holds.
    pub const fn when(
        field: &'static str,
        condition: fn(&R) -> bool,
        decode: DecodeFn<R>,
        encode: EncodeFn<R>,
    ) -> Self {
        Self {
            field,
            presence: Presence::When(condition),
            decode,
            encode,
        }
    }

    /// An optional trailing step that applies to every record of the type.
    pub const fn trailing(
        field: &'static str,
        is_set: fn(&R) -> bool,
        decode: DecodeFn<R>,
        encode: EncodeFn<R>,
    ) -> Self {
        Self {
            field,
            presence: Presence::Trailing {
                applies: always,
                is_set,
            },
            decode,
            encode,
        }
    }

    /// An optional trailing step that only applies when `applies` holds.
    pub const fn trailing_when(
        field: &'static str,
        applies: fn(&R) -> bool,
        is_set: fn(&R) -> bool,
        decode: DecodeFn<R>,
        encode: EncodeFn<R>,
    ) -> Self {
        Self {
            field,
            presence: Presence::Trailing { applies, is_set },
            decode,
            encode,
        }
    }
}

fn always<R>(_: &R) -> bool {
    true
}

/// Run `steps` in order against the remaining tokens.
///
/// # Errors
///
/// Fails on the first step that fails, or with `E205` if tokens are left
/// after the last step. The record is left partially filled in either case
/// and must be discarded.
pub fn run_decode<R>(
    record: &mut R,
    cursor: &mut FieldCursor<'_>,
    steps: &[Step<R>],
    context: &Context<'_>,
) -> Result<()> {
    for step in steps {
        let present = match step.presence {
            Presence::Required => true,
            Presence::When(condition) => condition(record),
            Presence::Trailing { applies, .. } => applies(record) && !cursor.is_empty(),
        };
        if !present {
            continue;
        }
        log::trace!(field = step.field, remaining = cursor.remaining(); "Decoding field");
        (step.decode)(record, cursor, context)?;
    }
    cursor.finish()
}

/// Run `steps` in order, writing the record's fields.
///
/// # Errors
///
/// Fails on the first step that fails.
pub fn run_encode<R>(
    record: &R,
    writer: &mut FieldWriter,
    steps: &[Step<R>],
    context: &Context<'_>,
) -> Result<()> {
    let last_trailing = steps.iter().rposition(|step| match step.presence {
        Presence::Trailing { applies, is_set } => applies(record) && is_set(record),
        _ => false,
    });

    for (position, step) in steps.iter().enumerate() {
        let present = match step.presence {
            Presence::Required => true,
            Presence::When(condition) => condition(record),
            Presence::Trailing { applies, .. } => {
                applies(record) && last_trailing.is_some_and(|last| position <= last)
            }
        };
        if !present {
            continue;
        }
        log::trace!(field = step.field; "Encoding field");
        (step.encode)(record, writer, context)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use gwa_core::entity::IndexUniverse;

    use super::*;
    use crate::{error::ErrorCode, tokenizer::tokenize};

    #[derive(Debug, Default, PartialEq)]
    struct Sample {
        wide: bool,
        a: i32,
        b: Option<i32>,
        c: Option<i32>,
    }

    const STEPS: &[Step<Sample>] = &[
        Step::required(
            "wide",
            |r, f, _| {
                r.wide = f.yes_no("wide")?;
                Ok(())
            },
            |r, w, _| {
                w.push_yes_no("wide", r.wide);
                Ok(())
            },
        ),
        Step::when(
            "a",
            |r| r.wide,
            |r, f, _| {
                r.a = f.int("a")?;
                Ok(())
            },
            |r, w, _| {
                w.push_int("a", r.a);
                Ok(())
            },
        ),
        Step::trailing(
            "b",
            |r| r.b.is_some(),
            |r, f, _| {
                r.b = f.index("b")?;
                Ok(())
            },
            |r, w, _| w.push_index("b", r.b),
        ),
        Step::trailing(
            "c",
            |r| r.c.is_some(),
            |r, f, _| {
                r.c = f.index("c")?;
                Ok(())
            },
            |r, w, _| w.push_index("c", r.c),
        ),
    ];

    fn decode(line: &str) -> Result<Sample> {
        let universe = IndexUniverse::new();
        let context = Context::new('|', &universe);
        let mut cursor = FieldCursor::new(tokenize(line, '|')?, line.len());
        let mut sample = Sample::default();
        run_decode(&mut sample, &mut cursor, STEPS, &context)?;
        Ok(sample)
    }

    fn encode(sample: &Sample) -> String {
        let universe = IndexUniverse::new();
        let context = Context::new('|', &universe);
        let mut writer = FieldWriter::new();
        run_encode(sample, &mut writer, STEPS, &context).unwrap();
        writer.finish('|').unwrap()
    }

    #[test]
    fn test_conditional_step() {
        assert_eq!(decode("NO").unwrap(), Sample::default());
        assert_eq!(decode("YES|4").unwrap().a, 4);
    }

    #[test]
    fn test_trailing_steps_decode_while_tokens_remain() {
        let sample = decode("NO|3").unwrap();
        assert_eq!(sample.b, Some(3));
        assert_eq!(sample.c, None);

        let sample = decode("NO|0|7").unwrap();
        assert_eq!(sample.b, None);
        assert_eq!(sample.c, Some(7));
    }

    #[test]
    fn test_trailing_steps_are_suppressed_after_last_set() {
        assert_eq!(encode(&Sample::default()), "NO");
        assert_eq!(
            encode(&Sample {
                b: Some(2),
                ..Sample::default()
            }),
            "NO|2"
        );
        assert_eq!(
            encode(&Sample {
                c: Some(5),
                ..Sample::default()
            }),
            "NO|0|5"
        );
    }

    #[test]
    fn test_leftover_tokens_fail() {
        let err = decode("NO|1|2|3").unwrap_err();

        assert_eq!(err.code(), Some(ErrorCode::E205));
    }

    #[test]
    fn test_missing_required_field_fails() {
        let err = decode("YES").unwrap_err();

        assert_eq!(err.code(), Some(ErrorCode::E200));
    }
}
