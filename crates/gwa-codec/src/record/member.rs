//! `MEMB.8`
//!
//! ```text
//! name | colour | type | [exposure] | prop | group | topology | node | angle | mesh_size
//!      | is_intersector | analysis_type | fire | [limiting_temperature] | t1 | t2 | t3 | t4 | dummy
//! 1D:  | end_1 | end_2 | restraint_1 | restraint_2 | effective_length... | load_height | load_ref
//!      | OFF/NO_OFF [| AUTO/MAN | AUTO/MAN | off_x1 | off_x2 | off_y | off_z]
//! 2D:  | off_z | auto_internal | reinforcement...
//! ```
//!
//! `exposure` and `limiting_temperature` are written for 1D and 2D members
//! only. The member type decides which continuation follows.

use gwa_core::{
    enums::{Activity, EffectiveLengthType, MemberDimension, OffsetFlag, OffsetMode},
    header::RecordHeader,
    record::{
        EffectiveLength, Member, Member1d, Member2d, MemberOffsets, RestraintDefinition,
    },
};

use super::GwaRecord;
use crate::{
    Context,
    error::{Diagnostic, ErrorCode, Result},
    fields::{FieldCursor, FieldWriter},
    groups::{GroupError, format_topology, parse_topology},
    pipeline::Step,
    release::{decode_release_end, encode_release_end},
};

impl GwaRecord for Member {
    const VERSION: i32 = Member::VERSION;
    const KEYWORDS: &'static [&'static str] = &[Member::KEYWORD];
    const STEPS: &'static [Step<Self>] = &[
        Step::required("colour", decode_colour, encode_colour),
        Step::required("type", decode_type, encode_type),
        Step::when("exposure", is_not_3d, decode_exposure, encode_exposure),
        Step::required("property", decode_property, encode_property),
        Step::required("group", decode_group, encode_group),
        Step::required("topology", decode_topology, encode_topology),
        Step::required("orientation_node", decode_node, encode_node),
        Step::required("angle", decode_angle, encode_angle),
        Step::required("mesh_size", decode_mesh, encode_mesh),
        Step::required("is_intersector", decode_intersector, encode_intersector),
        Step::required("analysis_type", decode_analysis, encode_analysis),
        Step::required("fire", decode_fire, encode_fire),
        Step::when(
            "limiting_temperature",
            is_not_3d,
            decode_temperature,
            encode_temperature,
        ),
        Step::required("stages", decode_stages, encode_stages),
        Step::required("dummy", decode_dummy, encode_dummy),
        Step::when("releases", is_1d, decode_releases, encode_releases),
        Step::when("end_restraints", is_1d, decode_restraints, encode_restraints),
        Step::when(
            "effective_length",
            is_1d,
            decode_effective_length,
            encode_effective_length,
        ),
        Step::when("load_height", is_1d, decode_load_height, encode_load_height),
        Step::when("offsets", is_1d, decode_offsets, encode_offsets),
        Step::when("offset_z", is_2d, decode_offset_2d, encode_offset_2d),
        Step::when(
            "reinforcement",
            is_2d,
            decode_reinforcement,
            encode_reinforcement,
        ),
    ];

    fn blank(_keyword: &str, header: RecordHeader) -> Option<Self> {
        Some(Member::with_header(header))
    }

    fn header(&self) -> &RecordHeader {
        &self.header
    }

    fn keyword(&self) -> &'static str {
        Member::KEYWORD
    }
}

fn is_1d(member: &Member) -> bool {
    member.member_type.dimension() == MemberDimension::One
}

fn is_2d(member: &Member) -> bool {
    member.member_type.dimension() == MemberDimension::Two
}

fn is_not_3d(member: &Member) -> bool {
    member.member_type.dimension() != MemberDimension::Three
}

fn dimension_name(dimension: MemberDimension) -> &'static str {
    match dimension {
        MemberDimension::One => "1D",
        MemberDimension::Two => "2D",
        MemberDimension::Three => "3D",
    }
}

fn detail_mismatch(member: &Member) -> Diagnostic {
    Diagnostic::error(format!(
        "`{}` is a {} member type but the member carries {} fields",
        member.member_type,
        dimension_name(member.member_type.dimension()),
        dimension_name(member.detail.dimension())
    ))
    .with_code(ErrorCode::E405)
    .with_help("use `Member::set_member_type` to change the type")
}

fn one_d(member: &Member) -> Result<&Member1d> {
    member.one_d().ok_or_else(|| detail_mismatch(member))
}

fn one_d_mut(member: &mut Member) -> Result<&mut Member1d> {
    if member.one_d().is_none() {
        return Err(detail_mismatch(member));
    }
    member.one_d_mut().ok_or_else(|| Diagnostic::error("missing 1D fields"))
}

fn two_d(member: &Member) -> Result<&Member2d> {
    member.two_d().ok_or_else(|| detail_mismatch(member))
}

fn two_d_mut(member: &mut Member) -> Result<&mut Member2d> {
    if member.two_d().is_none() {
        return Err(detail_mismatch(member));
    }
    member.two_d_mut().ok_or_else(|| Diagnostic::error("missing 2D fields"))
}

fn decode_colour(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    m.colour = f.wire("colour")?;
    Ok(())
}

fn encode_colour(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_wire("colour", m.colour);
    Ok(())
}

fn decode_type(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    let member_type = f.wire("type")?;
    m.set_member_type(member_type);
    Ok(())
}

fn encode_type(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    if m.detail.dimension() != m.member_type.dimension() {
        return Err(detail_mismatch(m));
    }
    w.push_wire("type", m.member_type);
    Ok(())
}

fn decode_exposure(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    m.exposure = f.wire("exposure")?;
    Ok(())
}

fn encode_exposure(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_wire("exposure", m.exposure);
    Ok(())
}

fn decode_property(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    m.property = f.index("property")?;
    Ok(())
}

fn encode_property(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_index("property", m.property)
}

fn decode_group(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    m.group = f.index("group")?;
    Ok(())
}

fn encode_group(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_index("group", m.group)
}

fn decode_topology(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    let token = f.next("topology")?;
    m.topology = parse_topology(token.text()).map_err(|err| {
        let span = match err {
            GroupError::Syntax { offset } => {
                let start = token.span().start() + offset;
                crate::Span::new(start..token.span().end())
            }
            GroupError::NegativeIndex(_) => token.span(),
        };
        Diagnostic::error(format!("invalid topology `{}`: {err}", token.text()))
            .with_code(ErrorCode::E206)
            .with_label(span, "unexpected here")
            .with_secondary_label(token.span(), "in this topology")
            .with_help("a topology is node indices followed by `V(..)`, `P(..)`, `L(..)` or `A(..)` groups")
    })?;
    Ok(())
}

fn encode_topology(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    let text = format_topology(&m.topology).map_err(|err| {
        Diagnostic::error(format!("`topology` cannot be written: {err}")).with_code(ErrorCode::E400)
    })?;
    w.push("topology", text);
    Ok(())
}

fn decode_node(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    m.orientation_node = f.index("orientation_node")?;
    Ok(())
}

fn encode_node(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_index("orientation_node", m.orientation_node)
}

fn decode_angle(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    m.angle = f.float("angle")?;
    Ok(())
}

fn encode_angle(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_float("angle", m.angle)
}

fn decode_mesh(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    m.mesh_size = f.optional_float("mesh_size")?;
    Ok(())
}

fn encode_mesh(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_optional_float("mesh_size", m.mesh_size)
}

fn decode_intersector(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    m.is_intersector = f.yes_no("is_intersector")?;
    Ok(())
}

fn encode_intersector(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_yes_no("is_intersector", m.is_intersector);
    Ok(())
}

fn decode_analysis(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    m.analysis_type = f.wire("analysis_type")?;
    Ok(())
}

fn encode_analysis(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_wire("analysis_type", m.analysis_type);
    Ok(())
}

fn decode_fire(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    m.fire = f.wire("fire")?;
    Ok(())
}

fn encode_fire(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_wire("fire", m.fire);
    Ok(())
}

fn decode_temperature(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    m.limiting_temperature = f.optional_float("limiting_temperature")?;
    Ok(())
}

fn encode_temperature(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_optional_float("limiting_temperature", m.limiting_temperature)
}

fn decode_stages(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    m.stages.creation_from_start = f.int("t1")?;
    m.stages.start_of_drying = f.int("t2")?;
    m.stages.age_at_loading = f.int("t3")?;
    m.stages.removed_at = f.int("t4")?;
    Ok(())
}

fn encode_stages(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_int("t1", m.stages.creation_from_start);
    w.push_int("t2", m.stages.start_of_drying);
    w.push_int("t3", m.stages.age_at_loading);
    w.push_int("t4", m.stages.removed_at);
    Ok(())
}

fn decode_dummy(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    m.dummy = f.wire::<Activity>("dummy")? == Activity::Dummy;
    Ok(())
}

fn encode_dummy(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    let activity = if m.dummy {
        Activity::Dummy
    } else {
        Activity::Active
    };
    w.push_wire("dummy", activity);
    Ok(())
}

fn decode_releases(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    let end_1 = decode_release_end(f, "end_1_release")?;
    let end_2 = decode_release_end(f, "end_2_release")?;
    one_d_mut(m)?.releases = [end_1, end_2];
    Ok(())
}

fn encode_releases(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    let [end_1, end_2] = &one_d(m)?.releases;
    encode_release_end(end_1, w, "end_1_release")?;
    encode_release_end(end_2, w, "end_2_release")
}

fn decode_restraints(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    let restraint_end_1 = f.wire("restraint_end_1")?;
    let restraint_end_2 = f.wire("restraint_end_2")?;
    let detail = one_d_mut(m)?;
    detail.restraint_end_1 = restraint_end_1;
    detail.restraint_end_2 = restraint_end_2;
    Ok(())
}

fn encode_restraints(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    let detail = one_d(m)?;
    w.push_wire("restraint_end_1", detail.restraint_end_1);
    w.push_wire("restraint_end_2", detail.restraint_end_2);
    Ok(())
}

fn decode_effective_length(
    m: &mut Member,
    f: &mut FieldCursor<'_>,
    _: &Context<'_>,
) -> Result<()> {
    let effective_length = match f.wire("effective_length")? {
        EffectiveLengthType::Automatic => EffectiveLength::Automatic,
        EffectiveLengthType::EffectiveLength => EffectiveLength::Specified {
            yy: f.measure("length_yy")?,
            zz: f.measure("length_zz")?,
            lateral_torsional: f.measure("length_lt")?,
        },
        EffectiveLengthType::Explicit => EffectiveLength::Explicit {
            points: decode_restraint_definitions(f, "point")?,
            spans: decode_restraint_definitions(f, "span")?,
        },
    };
    one_d_mut(m)?.effective_length = effective_length;
    Ok(())
}

/// `count | {index | restraint}`, where index `0` means every point or span.
fn decode_restraint_definitions(
    f: &mut FieldCursor<'_>,
    field: &str,
) -> Result<Vec<RestraintDefinition>> {
    let count_field = format!("{field}_count");
    let token = f.next(&count_field)?;
    let count = crate::fields::parse_int(token, &count_field)?;
    let count = usize::try_from(count).map_err(|_| {
        Diagnostic::error(format!("`{count_field}` must not be negative, found {count}"))
            .with_code(ErrorCode::E201)
            .with_label(token.span(), "negative count")
    })?;

    let mut definitions = Vec::new();
    for _ in 0..count {
        definitions.push(RestraintDefinition {
            index: f.index(field)?,
            restraint: f.wire(field)?,
        });
    }
    Ok(definitions)
}

fn encode_effective_length(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    let effective_length = &one_d(m)?.effective_length;
    w.push_wire("effective_length", effective_length.kind());
    match effective_length {
        EffectiveLength::Automatic => {}
        EffectiveLength::Specified {
            yy,
            zz,
            lateral_torsional,
        } => {
            w.push_measure("length_yy", *yy)?;
            w.push_measure("length_zz", *zz)?;
            w.push_measure("length_lt", *lateral_torsional)?;
        }
        EffectiveLength::Explicit { points, spans } => {
            encode_restraint_definitions(w, "point_count", "point", points)?;
            encode_restraint_definitions(w, "span_count", "span", spans)?;
        }
    }
    Ok(())
}

fn encode_restraint_definitions(
    w: &mut FieldWriter,
    count_field: &'static str,
    field: &'static str,
    definitions: &[RestraintDefinition],
) -> Result<()> {
    let count = i32::try_from(definitions.len()).map_err(|_| {
        Diagnostic::error(format!("too many `{field}` restraints")).with_code(ErrorCode::E400)
    })?;
    w.push_int(count_field, count);
    for definition in definitions {
        w.push_index(field, definition.index)?;
        w.push_wire(field, definition.restraint);
    }
    Ok(())
}

fn decode_load_height(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    let load_height = f.float("load_height")?;
    let reference = f.wire("load_height_reference")?;
    let detail = one_d_mut(m)?;
    detail.load_height = load_height;
    detail.load_height_reference = reference;
    Ok(())
}

fn encode_load_height(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    let detail = one_d(m)?;
    w.push_float("load_height", detail.load_height)?;
    w.push_wire("load_height_reference", detail.load_height_reference);
    Ok(())
}

fn decode_offsets(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    let offsets = match f.wire("offset_flag")? {
        OffsetFlag::NoOffset => None,
        OffsetFlag::Offset => Some(MemberOffsets {
            end_1_automatic: f.wire::<OffsetMode>("offset_end_1")? == OffsetMode::Automatic,
            end_2_automatic: f.wire::<OffsetMode>("offset_end_2")? == OffsetMode::Automatic,
            end_1_x: f.float("offset_x1")?,
            end_2_x: f.float("offset_x2")?,
            y: f.float("offset_y")?,
            z: f.float("offset_z")?,
        }),
    };
    one_d_mut(m)?.offsets = offsets;
    Ok(())
}

fn encode_offsets(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    let mode = |automatic: bool| {
        if automatic {
            OffsetMode::Automatic
        } else {
            OffsetMode::Manual
        }
    };

    match one_d(m)?.offsets {
        None => w.push_wire("offset_flag", OffsetFlag::NoOffset),
        Some(offsets) => {
            w.push_wire("offset_flag", OffsetFlag::Offset);
            w.push_wire("offset_end_1", mode(offsets.end_1_automatic));
            w.push_wire("offset_end_2", mode(offsets.end_2_automatic));
            w.push_float("offset_x1", offsets.end_1_x)?;
            w.push_float("offset_x2", offsets.end_2_x)?;
            w.push_float("offset_y", offsets.y)?;
            w.push_float("offset_z", offsets.z)?;
        }
    }
    Ok(())
}

fn decode_offset_2d(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    let offset_z = f.float("offset_z")?;
    let automatic = f.yes_no("offset_automatic_internal")?;
    let detail = two_d_mut(m)?;
    detail.offset_z = offset_z;
    detail.offset_automatic_internal = automatic;
    Ok(())
}

fn encode_offset_2d(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    let detail = two_d(m)?;
    w.push_float("offset_z", detail.offset_z)?;
    w.push_yes_no("offset_automatic_internal", detail.offset_automatic_internal);
    Ok(())
}

/// The reinforcement tail is carried verbatim.
fn decode_reinforcement(m: &mut Member, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    let reinforcement = f
        .take_rest()
        .into_iter()
        .map(|token| token.text().to_string())
        .collect();
    two_d_mut(m)?.reinforcement = reinforcement;
    Ok(())
}

fn encode_reinforcement(m: &Member, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    for field in &two_d(m)?.reinforcement {
        w.push("reinforcement", field.as_str());
    }
    Ok(())
}


#[cfg(test)]
mod proptest_tests {
    use gwa_core::{
        entity::IndexUniverse,
        enums::{
            AnalysisType, Colour, ExposedSurfaces, FireResistance, LoadHeightReference,
            MemberRestraint, MemberType,
        },
        record::{ConstructionStages, Measure, MemberDetail},
        topology::Topology,
    };
    use proptest::prelude::*;

    use super::*;
    use crate::{
        decode_record, encode_record,
        record::strategies::{decimal, header, nonzero_decimal, optional_index, release_end},
    };

    fn node_list(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<i32>> {
        prop::collection::vec(1..1_000i32, len)
    }

    fn topology() -> impl Strategy<Value = Topology> {
        (
            node_list(1..6),
            prop::collection::vec(node_list(3..6), 0..2),
            node_list(0..3),
        )
            .prop_map(|(perimeter, voids, points)| Topology {
                perimeter,
                voids,
                points,
                ..Topology::default()
            })
    }

    fn measure() -> impl Strategy<Value = Measure> {
        prop_oneof![
            decimal().prop_map(Measure::Absolute),
            (0..800i32).prop_map(|v| Measure::Percentage(f64::from(v) / 8.0)),
        ]
    }

    fn restraint_definitions() -> impl Strategy<Value = Vec<RestraintDefinition>> {
        prop::collection::vec(
            (optional_index(), prop::sample::select(MemberRestraint::ALL))
                .prop_map(|(index, restraint)| RestraintDefinition { index, restraint }),
            0..4,
        )
    }

    fn effective_length() -> impl Strategy<Value = EffectiveLength> {
        prop_oneof![
            Just(EffectiveLength::Automatic),
            (measure(), measure(), measure()).prop_map(|(yy, zz, lateral_torsional)| {
                EffectiveLength::Specified {
                    yy,
                    zz,
                    lateral_torsional,
                }
            }),
            (restraint_definitions(), restraint_definitions())
                .prop_map(|(points, spans)| EffectiveLength::Explicit { points, spans }),
        ]
    }

    fn offsets() -> impl Strategy<Value = MemberOffsets> {
        (any::<bool>(), any::<bool>(), prop::array::uniform4(decimal())).prop_map(
            |(end_1_automatic, end_2_automatic, [end_1_x, end_2_x, y, z])| MemberOffsets {
                end_1_automatic,
                end_2_automatic,
                end_1_x,
                end_2_x,
                y,
                z,
            },
        )
    }

    fn line_detail() -> impl Strategy<Value = Member1d> {
        (
            prop::array::uniform2(release_end()),
            prop::array::uniform2(prop::sample::select(MemberRestraint::ALL)),
            effective_length(),
            decimal(),
            prop::sample::select(LoadHeightReference::ALL),
            prop::option::of(offsets()),
        )
            .prop_map(
                |(
                    releases,
                    [restraint_end_1, restraint_end_2],
                    effective_length,
                    load_height,
                    load_height_reference,
                    offsets,
                )| Member1d {
                    releases,
                    restraint_end_1,
                    restraint_end_2,
                    effective_length,
                    load_height,
                    load_height_reference,
                    offsets,
                },
            )
    }

    fn area_detail() -> impl Strategy<Value = Member2d> {
        (
            decimal(),
            any::<bool>(),
            prop::collection::vec("[A-Z0-9_.]{1,10}", 0..5),
        )
            .prop_map(|(offset_z, offset_automatic_internal, reinforcement)| Member2d {
                offset_z,
                offset_automatic_internal,
                reinforcement,
            })
    }

    /// A member type with a detail of the same dimension.
    fn typed_detail() -> impl Strategy<Value = (MemberType, MemberDetail)> {
        prop::sample::select(MemberType::ALL).prop_flat_map(|member_type| {
            let detail = match member_type.dimension() {
                MemberDimension::One => line_detail().prop_map(MemberDetail::OneD).boxed(),
                MemberDimension::Two => area_detail().prop_map(MemberDetail::TwoD).boxed(),
                MemberDimension::Three => Just(MemberDetail::ThreeD).boxed(),
            };
            (Just(member_type), detail)
        })
    }

    fn member() -> impl Strategy<Value = Member> {
        (
            (header(Member::VERSION), prop::sample::select(Colour::ALL)),
            typed_detail(),
            (
                prop::sample::select(ExposedSurfaces::ALL),
                optional_index(),
                optional_index(),
                topology(),
            ),
            (optional_index(), decimal(), prop::option::of(nonzero_decimal())),
            (
                any::<bool>(),
                prop::sample::select(AnalysisType::ALL),
                prop::sample::select(FireResistance::ALL),
                prop::option::of(nonzero_decimal()),
            ),
            prop::array::uniform4(-1_000..1_000i32),
            any::<bool>(),
        )
            .prop_map(
                |(
                    (header, colour),
                    (member_type, detail),
                    (exposure, property, group, topology),
                    (orientation_node, angle, mesh_size),
                    (is_intersector, analysis_type, fire, limiting_temperature),
                    [creation_from_start, start_of_drying, age_at_loading, removed_at],
                    dummy,
                )| {
                    let volume = member_type.dimension() == MemberDimension::Three;
                    let mut member = Member::with_header(header);
                    member.colour = colour;
                    member.member_type = member_type;
                    member.detail = detail;
                    // Volume members do not write these.
                    member.exposure = if volume {
                        ExposedSurfaces::default()
                    } else {
                        exposure
                    };
                    member.limiting_temperature = if volume {
                        None
                    } else {
                        limiting_temperature
                    };
                    member.property = property;
                    member.group = group;
                    member.topology = topology;
                    member.orientation_node = orientation_node;
                    member.angle = angle;
                    member.mesh_size = mesh_size;
                    member.is_intersector = is_intersector;
                    member.analysis_type = analysis_type;
                    member.fire = fire;
                    member.stages = ConstructionStages {
                        creation_from_start,
                        start_of_drying,
                        age_at_loading,
                        removed_at,
                    };
                    member.dummy = dummy;
                    member
                },
            )
    }

    fn check_member_round_trip(member: &Member) -> std::result::Result<(), TestCaseError> {
        let universe = IndexUniverse::new();
        let context = Context::new('\t', &universe);

        let line =
            encode_record(member, &context).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let decoded: Member = decode_record(&line, &context)
            .map_err(|e| TestCaseError::fail(format!("`{line}`: {e}")))?;
        prop_assert_eq!(&decoded, member);

        let again =
            encode_record(&decoded, &context).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(again, line);
        Ok(())
    }

    proptest! {
        #[test]
        fn member_round_trip(member in member()) {
            check_member_round_trip(&member)?;
        }
    }
}
