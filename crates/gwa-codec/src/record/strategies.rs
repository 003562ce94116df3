//! Generators shared by the record property tests.

use gwa_core::{
    enums::{ReleaseCode, SetCommand},
    header::RecordHeader,
    release::ReleaseEnd,
};
use proptest::prelude::*;

/// A header for schema `version` under any of the three set commands.
///
/// `None` indices stay `SET_NOINDEX`; indexed headers are `SET` or `SET_AT`.
pub(crate) fn header(version: i32) -> impl Strategy<Value = RecordHeader> {
    (
        prop::option::of((1..10_000i32, any::<bool>())),
        prop::option::of("[A-Za-z][A-Za-z0-9 _-]{0,12}"),
    )
        .prop_map(move |(index, name)| {
            let mut header = RecordHeader::new(version);
            if let Some((index, at)) = index {
                let _ = header.assign_index(index);
                if at {
                    let _ = header.set_command(SetCommand::SetAt);
                }
            }
            header.name = name;
            header
        })
}

/// A multiple of 1/8 that formats and parses back exactly.
pub(crate) fn decimal() -> impl Strategy<Value = f64> {
    (-80_000i32..80_000).prop_map(|v| f64::from(v) / 8.0)
}

/// A non-zero [`decimal`], for fields where `0` reads back as unset.
pub(crate) fn nonzero_decimal() -> impl Strategy<Value = f64> {
    decimal().prop_filter("zero reads back as unset", |v| *v != 0.0)
}

pub(crate) fn optional_index() -> impl Strategy<Value = Option<i32>> {
    prop::option::of(1..1_000i32)
}

/// An end whose stiffnesses line up with its `K` codes.
pub(crate) fn release_end() -> impl Strategy<Value = ReleaseEnd> {
    (
        prop::array::uniform6(prop::sample::select(ReleaseCode::ALL)),
        prop::array::uniform6(decimal()),
    )
        .prop_map(|(codes, values)| {
            let mut end = ReleaseEnd::new(codes);
            for (position, code) in codes.iter().enumerate() {
                if *code == ReleaseCode::Stiff {
                    end.stiffnesses[position] = Some(values[position]);
                }
            }
            end
        })
}
