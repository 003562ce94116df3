//! `LOAD_BEAM_*.2 | name | entities | case | axis | projected | direction | values...`
//!
//! The five beam load keywords share one index space and one grammar up to
//! the values, which depend on the keyword.

use gwa_core::{
    entity::EntityKind,
    enums::{LoadBeamAxisKeyword, LoadBeamKind},
    header::RecordHeader,
    record::{LoadBeam, LoadBeamAxis, LoadBeamValues, LoadTarget},
    wire::WireEnum,
};

use super::{GwaRecord, read_list, write_list};
use crate::{
    Context,
    error::{Diagnostic, ErrorCode, Result},
    fields::{FieldCursor, FieldWriter, parse_int},
    list::ListScope,
    pipeline::Step,
};

/// Plain items are elements, `G` items are members.
const TARGETS: ListScope = ListScope::split(EntityKind::Element, EntityKind::Member);

impl GwaRecord for LoadBeam {
    const VERSION: i32 = LoadBeam::VERSION;
    const KEYWORDS: &'static [&'static str] = &[
        "LOAD_BEAM_POINT",
        "LOAD_BEAM_UDL",
        "LOAD_BEAM_LINE",
        "LOAD_BEAM_PATCH",
        "LOAD_BEAM_TRILIN",
    ];
    const STEPS: &'static [Step<Self>] = &[
        Step::required("entities", decode_target, encode_target),
        Step::required("load_case", decode_case, encode_case),
        Step::required("axis", decode_axis, encode_axis),
        Step::required("projected", decode_projected, encode_projected),
        Step::required("direction", decode_direction, encode_direction),
        Step::required("values", decode_values, encode_values),
    ];

    fn blank(keyword: &str, header: RecordHeader) -> Option<Self> {
        let kind = LoadBeamKind::from_wire(keyword)?;
        Some(LoadBeam::with_header(header, LoadBeamValues::zero(kind)))
    }

    fn header(&self) -> &RecordHeader {
        &self.header
    }

    fn keyword(&self) -> &'static str {
        LoadBeam::keyword(self)
    }
}

fn decode_target(load: &mut LoadBeam, f: &mut FieldCursor<'_>, ctx: &Context<'_>) -> Result<()> {
    let list = read_list(f, "entities", TARGETS, ctx)?;
    load.target = if list.group {
        LoadTarget::Members(list.indices)
    } else {
        LoadTarget::Elements(list.indices)
    };
    Ok(())
}

fn encode_target(load: &LoadBeam, w: &mut FieldWriter, ctx: &Context<'_>) -> Result<()> {
    let (indices, group) = match &load.target {
        LoadTarget::Elements(indices) => (indices, false),
        LoadTarget::Members(indices) => (indices, true),
    };
    write_list(w, "entities", indices, group, TARGETS, ctx)
}

fn decode_case(load: &mut LoadBeam, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    load.load_case = f.index("load_case")?;
    Ok(())
}

fn encode_case(load: &LoadBeam, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_index("load_case", load.load_case)
}

fn decode_axis(load: &mut LoadBeam, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    let token = f.next("axis")?;
    load.axis = match LoadBeamAxisKeyword::from_wire(token.text().trim()) {
        Some(LoadBeamAxisKeyword::Global) => LoadBeamAxis::Global,
        Some(LoadBeamAxisKeyword::Local) => LoadBeamAxis::Local,
        Some(LoadBeamAxisKeyword::Natural) => LoadBeamAxis::Natural,
        None => match parse_int(token, "axis") {
            Ok(0) => LoadBeamAxis::Global,
            Ok(index) if index > 0 => LoadBeamAxis::Reference(index),
            _ => {
                return Err(Diagnostic::error(format!(
                    "invalid load axis `{}`",
                    token.text()
                ))
                .with_code(ErrorCode::E300)
                .with_label(token.span(), "not an axis")
                .with_help("expected `GLOBAL`, `LOCAL`, `NATURAL` or an axis index"));
            }
        },
    };
    Ok(())
}

fn encode_axis(load: &LoadBeam, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    let keyword = match load.axis {
        LoadBeamAxis::Global => LoadBeamAxisKeyword::Global,
        LoadBeamAxis::Local => LoadBeamAxisKeyword::Local,
        LoadBeamAxis::Natural => LoadBeamAxisKeyword::Natural,
        LoadBeamAxis::Reference(index) => return w.push_index("axis", Some(index)),
    };
    w.push_wire("axis", keyword);
    Ok(())
}

fn decode_projected(load: &mut LoadBeam, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    load.projected = f.yes_no("projected")?;
    Ok(())
}

fn encode_projected(load: &LoadBeam, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_yes_no("projected", load.projected);
    Ok(())
}

fn decode_direction(load: &mut LoadBeam, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    load.direction = f.wire("direction")?;
    Ok(())
}

fn encode_direction(load: &LoadBeam, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_wire("direction", load.direction);
    Ok(())
}

/// The blank record already carries the variant of its keyword.
fn decode_values(load: &mut LoadBeam, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    load.values = match load.values.kind() {
        LoadBeamKind::Point => LoadBeamValues::Point {
            position: f.measure("position")?,
            value: f.float("value")?,
        },
        LoadBeamKind::Udl => LoadBeamValues::Udl {
            value: f.float("value")?,
        },
        LoadBeamKind::Line => LoadBeamValues::Line {
            value_1: f.float("value_1")?,
            value_2: f.float("value_2")?,
        },
        LoadBeamKind::Patch => LoadBeamValues::Patch {
            position_1: f.measure("position_1")?,
            value_1: f.float("value_1")?,
            position_2: f.measure("position_2")?,
            value_2: f.float("value_2")?,
        },
        LoadBeamKind::Trilinear => LoadBeamValues::Trilinear {
            position_1: f.measure("position_1")?,
            value_1: f.float("value_1")?,
            position_2: f.measure("position_2")?,
            value_2: f.float("value_2")?,
        },
    };
    Ok(())
}

fn encode_values(load: &LoadBeam, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    match load.values {
        LoadBeamValues::Point { position, value } => {
            w.push_measure("position", position)?;
            w.push_float("value", value)
        }
        LoadBeamValues::Udl { value } => w.push_float("value", value),
        LoadBeamValues::Line { value_1, value_2 } => {
            w.push_float("value_1", value_1)?;
            w.push_float("value_2", value_2)
        }
        LoadBeamValues::Patch {
            position_1,
            value_1,
            position_2,
            value_2,
        }
        | LoadBeamValues::Trilinear {
            position_1,
            value_1,
            position_2,
            value_2,
        } => {
            w.push_measure("position_1", position_1)?;
            w.push_float("value_1", value_1)?;
            w.push_measure("position_2", position_2)?;
            w.push_float("value_2", value_2)
        }
    }
}

#[cfg(test)]
mod tests {
    use gwa_core::{entity::IndexUniverse, enums::AxisDirection6, record::Measure};

    use super::*;
    use crate::{decode_record, encode_record};

    fn universe() -> IndexUniverse {
        IndexUniverse::new()
            .with(EntityKind::Element, [1, 2, 3])
            .with(EntityKind::Member, [10, 11])
    }

    #[test]
    fn test_point_load() {
        let universe = universe();
        let context = Context::new('\t', &universe);
        let line = "LOAD_BEAM_POINT.2\tSET\t1\tP1\t1 2\t3\tGLOBAL\tNO\tZ\t50%\t-10";

        let load: LoadBeam = decode_record(line, &context).unwrap();
        assert_eq!(load.target, LoadTarget::Elements(vec![1, 2]));
        assert_eq!(load.load_case, Some(3));
        assert_eq!(load.axis, LoadBeamAxis::Global);
        assert_eq!(load.direction, AxisDirection6::Z);
        assert_eq!(
            load.values,
            LoadBeamValues::Point {
                position: Measure::Percentage(50.0),
                value: -10.0
            }
        );
        assert_eq!(encode_record(&load, &context).unwrap(), line);
    }

    #[test]
    fn test_member_targets() {
        let universe = universe();
        let context = Context::new('\t', &universe);

        let line = "LOAD_BEAM_UDL.2\tSET\t2\t\tG_all\t1\tLOCAL\tYES\tY\t-2.5";
        let load: LoadBeam = decode_record(line, &context).unwrap();
        assert_eq!(load.target, LoadTarget::Members(vec![10, 11]));
        assert!(load.projected);
        assert_eq!(load.values, LoadBeamValues::Udl { value: -2.5 });
        assert_eq!(encode_record(&load, &context).unwrap(), line);

        let line = "LOAD_BEAM_UDL.2\tSET\t2\t\tG10\t1\tLOCAL\tYES\tY\t-2.5";
        let load: LoadBeam = decode_record(line, &context).unwrap();
        assert_eq!(load.target, LoadTarget::Members(vec![10]));
        assert_eq!(encode_record(&load, &context).unwrap(), line);
    }

    #[test]
    fn test_keyword_selects_values() {
        let universe = universe();
        let context = Context::new('\t', &universe);
        let line = "load_beam_patch.2\tSET\t4\t\tall\t1\t7\tNO\tX\t0\t1\t2.5\t2";

        let load: LoadBeam = decode_record(line, &context).unwrap();
        assert_eq!(load.axis, LoadBeamAxis::Reference(7));
        assert_eq!(
            load.values,
            LoadBeamValues::Patch {
                position_1: Measure::Absolute(0.0),
                value_1: 1.0,
                position_2: Measure::Absolute(2.5),
                value_2: 2.0
            }
        );
        assert_eq!(
            encode_record(&load, &context).unwrap(),
            "LOAD_BEAM_PATCH.2\tSET\t4\t\tall\t1\t7\tNO\tX\t0\t1\t2.5\t2"
        );
    }

    #[test]
    fn test_mixed_targets_are_rejected() {
        let universe = universe();
        let context = Context::new('\t', &universe);

        for targets in ["G10 1", "1 G10"] {
            let line = format!("LOAD_BEAM_UDL.2\tSET\t1\t\t{targets}\t1\tGLOBAL\tNO\tZ\t-1");
            let err = decode_record::<LoadBeam>(&line, &context).unwrap_err();
            assert_eq!(err.code(), Some(ErrorCode::E203), "{targets}");
        }
    }

    #[test]
    fn test_missing_value() {
        let universe = universe();
        let context = Context::new('\t', &universe);
        let line = "LOAD_BEAM_LINE.2\tSET\t1\t\t1\t1\tGLOBAL\tNO\tZ\t1";

        let err = decode_record::<LoadBeam>(line, &context).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E200));
    }

    #[test]
    fn test_bad_axis() {
        let universe = universe();
        let context = Context::new('\t', &universe);
        let line = "LOAD_BEAM_UDL.2\tSET\t1\t\t1\t1\tSIDEWAYS\tNO\tZ\t1";

        let err = decode_record::<LoadBeam>(line, &context).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E300));
    }
}

#[cfg(test)]
mod proptest_tests {
    use gwa_core::{entity::IndexUniverse, enums::AxisDirection6, record::Measure};
    use proptest::prelude::*;

    use super::*;
    use crate::{decode_record, encode_record, record::strategies::header};

    fn value() -> impl Strategy<Value = f64> {
        (-100_000i32..100_000).prop_map(|v| f64::from(v) / 4.0)
    }

    fn position() -> impl Strategy<Value = Measure> {
        prop_oneof![
            value().prop_map(Measure::Absolute),
            (0..=100i32).prop_map(|v| Measure::Percentage(f64::from(v))),
        ]
    }

    fn values() -> impl Strategy<Value = LoadBeamValues> {
        prop_oneof![
            (position(), value()).prop_map(|(position, value)| LoadBeamValues::Point { position, value }),
            value().prop_map(|value| LoadBeamValues::Udl { value }),
            (value(), value()).prop_map(|(value_1, value_2)| LoadBeamValues::Line { value_1, value_2 }),
            (position(), value(), position(), value()).prop_map(|(position_1, value_1, position_2, value_2)| {
                LoadBeamValues::Patch {
                    position_1,
                    value_1,
                    position_2,
                    value_2,
                }
            }),
            (position(), value(), position(), value()).prop_map(|(position_1, value_1, position_2, value_2)| {
                LoadBeamValues::Trilinear {
                    position_1,
                    value_1,
                    position_2,
                    value_2,
                }
            }),
        ]
    }

    fn target() -> impl Strategy<Value = LoadTarget> {
        prop_oneof![
            prop::collection::vec(1..500i32, 1..6).prop_map(LoadTarget::Elements),
            prop::collection::vec(1..500i32, 1..6).prop_map(LoadTarget::Members),
        ]
    }

    fn load() -> impl Strategy<Value = LoadBeam> {
        (
            header(LoadBeam::VERSION),
            values(),
            target(),
            prop::option::of(1..100i32),
            prop_oneof![
                Just(LoadBeamAxis::Global),
                Just(LoadBeamAxis::Local),
                Just(LoadBeamAxis::Natural),
                (1..20i32).prop_map(LoadBeamAxis::Reference),
            ],
            any::<bool>(),
            prop::sample::select(AxisDirection6::ALL),
        )
            .prop_map(|(header, values, target, load_case, axis, projected, direction)| {
                let mut load = LoadBeam::with_header(header, values);
                load.target = target;
                load.load_case = load_case;
                load.axis = axis;
                load.projected = projected;
                load.direction = direction;
                load
            })
    }

    fn check_load_round_trip(load: &LoadBeam) -> std::result::Result<(), TestCaseError> {
        let universe = IndexUniverse::new()
            .with(EntityKind::Element, 1..=1_000)
            .with(EntityKind::Member, [1_000]);
        let context = Context::new('\t', &universe);

        let line = encode_record(load, &context).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let decoded: LoadBeam =
            decode_record(&line, &context).map_err(|e| TestCaseError::fail(format!("{line}: {e}")))?;
        prop_assert_eq!(&decoded, load);
        Ok(())
    }

    proptest! {
        #[test]
        fn load_round_trip(load in load()) {
            check_load_round_trip(&load)?;
        }
    }
}
