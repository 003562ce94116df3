//! Release blocks.
//!
//! ```text
//! NO_RLS
//! RLS   | FFFRRK | k_zz                  (one end)
//! STIFF | KFFFFF | k_x | FFFFFR           (two ends)
//! ```
//!
//! Each end is a six-letter code in `X Y Z XX YY ZZ` order followed by one
//! stiffness per `K` letter, in axis order. The stiffness list is as long as
//! the number of stiff axes, never padded.

use gwa_core::{
    enums::{AxisDirection6, ReleaseCode, ReleaseInclusion},
    release::{ReleaseEnd, Releases},
    wire::WireEnum,
};

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    fields::{FieldCursor, FieldWriter},
};

/// Read one end: the code then its stiffnesses.
///
/// # Errors
///
/// Returns `E204` for a code that is not six letters of `F`, `R` and `K`,
/// and the usual number errors for stiffnesses.
pub fn decode_release_end(cursor: &mut FieldCursor<'_>, field: &str) -> Result<ReleaseEnd> {
    let token = cursor.next(field)?;
    let text = token.text().trim();

    let invalid = |reason: String| {
        Diagnostic::error(format!("invalid release code `{text}` in `{field}`"))
            .with_code(ErrorCode::E204)
            .with_label(token.span(), reason)
            .with_help("a release code is six letters, each `F`, `R` or `K`")
    };

    if text.chars().count() != 6 {
        return Err(invalid(format!(
            "expected 6 letters, found {}",
            text.chars().count()
        )));
    }
    let mut codes = [ReleaseCode::Free; 6];
    for (slot, letter) in codes.iter_mut().zip(text.chars()) {
        let mut buffer = [0; 4];
        *slot = ReleaseCode::from_wire(letter.encode_utf8(&mut buffer))
            .ok_or_else(|| invalid(format!("unknown code letter `{letter}`")))?;
    }

    let mut end = ReleaseEnd::new(codes);
    for axis in AxisDirection6::ALL {
        if end.code(*axis) == ReleaseCode::Stiff {
            end.stiffnesses[axis.position()] = Some(cursor.float(field)?);
        }
    }
    Ok(end)
}

/// Write one end: the code then one stiffness per stiff axis.
///
/// # Errors
///
/// Returns `E401` when a stiff axis has no stiffness and `E402` when a
/// stiffness is given for an axis that is not stiff.
pub fn encode_release_end(end: &ReleaseEnd, writer: &mut FieldWriter, field: &'static str) -> Result<()> {
    let code: String = end.codes.iter().map(|code| code.to_wire()).collect();

    let mut stiffnesses = Vec::new();
    for axis in AxisDirection6::ALL {
        match (end.code(*axis), end.stiffness(*axis)) {
            (ReleaseCode::Stiff, Some(stiffness)) => stiffnesses.push(stiffness),
            (ReleaseCode::Stiff, None) => {
                return Err(Diagnostic::error(format!(
                    "`{field}` axis {axis} is stiff but has no stiffness"
                ))
                .with_code(ErrorCode::E401)
                .with_help("give a stiffness for every `K` axis"));
            }
            (_, Some(_)) => {
                return Err(Diagnostic::error(format!(
                    "`{field}` axis {axis} has a stiffness but is not stiff"
                ))
                .with_code(ErrorCode::E402)
                .with_help("only `K` axes carry a stiffness"));
            }
            (_, None) => {}
        }
    }

    writer.push(field, code);
    for stiffness in stiffnesses {
        writer.push_float(field, stiffness)?;
    }
    Ok(())
}

/// Read a flagged release block covering `N` ends.
///
/// # Errors
///
/// Returns `E300` for an unknown flag and the errors of
/// [`decode_release_end`] for each end.
pub fn parse_releases<const N: usize>(
    cursor: &mut FieldCursor<'_>,
    field: &str,
) -> Result<Releases<N>> {
    let inclusion: ReleaseInclusion = cursor.wire(field)?;
    let mut releases = Releases {
        inclusion,
        ends: None,
    };
    if inclusion.is_included() {
        let mut ends = [ReleaseEnd::fixed(); N];
        for end in &mut ends {
            *end = decode_release_end(cursor, field)?;
        }
        releases.ends = Some(ends);
    }
    Ok(releases)
}

/// Write a flagged release block covering `N` ends.
///
/// # Errors
///
/// Returns `E404` when the flag and the presence of ends disagree, and the
/// errors of [`encode_release_end`] for each end.
pub fn format_releases<const N: usize>(
    releases: &Releases<N>,
    writer: &mut FieldWriter,
    field: &'static str,
) -> Result<()> {
    match (releases.inclusion.is_included(), &releases.ends) {
        (true, Some(ends)) => {
            writer.push_wire(field, releases.inclusion);
            for end in ends {
                encode_release_end(end, writer, field)?;
            }
            Ok(())
        }
        (false, None) => {
            writer.push_wire(field, releases.inclusion);
            Ok(())
        }
        (included, _) => Err(Diagnostic::error(format!(
            "`{field}` is flagged `{}` but {}",
            releases.inclusion,
            if included {
                "has no release ends"
            } else {
                "carries release ends"
            }
        ))
        .with_code(ErrorCode::E404)),
    }
}
