//! `ASSEMBLY.3 | name | type | entities | topo_1 | topo_2 | orient_node | int_topo | size_y
//! | size_z | curve_type | curve_order | point_definition | values`

use gwa_core::{
    entity::EntityKind,
    enums::PointDefinition,
    header::RecordHeader,
    record::{Assembly, AssemblyPoints},
};

use super::{GwaRecord, read_list, write_list};
use crate::{
    Context,
    error::Result,
    fields::{FieldCursor, FieldWriter, format_finite, parse_float},
    list::ListScope,
    pipeline::Step,
    tokenizer::Token,
};

impl GwaRecord for Assembly {
    const VERSION: i32 = Assembly::VERSION;
    const KEYWORDS: &'static [&'static str] = &[Assembly::KEYWORD];
    const STEPS: &'static [Step<Self>] = &[
        Step::required("type", decode_type, encode_type),
        Step::required("entities", decode_entities, encode_entities),
        Step::required("topology", decode_topology, encode_topology),
        Step::required("orientation_node", decode_node, encode_node),
        Step::required("intermediate_nodes", decode_intermediate, encode_intermediate),
        Step::required("size", decode_size, encode_size),
        Step::required("curve", decode_curve, encode_curve),
        Step::required("points", decode_points, encode_points),
    ];

    fn blank(_keyword: &str, header: RecordHeader) -> Option<Self> {
        Some(Assembly::with_header(header))
    }

    fn header(&self) -> &RecordHeader {
        &self.header
    }

    fn keyword(&self) -> &'static str {
        Assembly::KEYWORD
    }
}

fn entity_scope(assembly: &Assembly) -> ListScope {
    ListScope::of(assembly.entity_type.entity_kind())
}

fn decode_type(a: &mut Assembly, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    a.entity_type = f.wire("type")?;
    Ok(())
}

fn encode_type(a: &Assembly, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_wire("type", a.entity_type);
    Ok(())
}

/// Resolved against elements or members, depending on the assembly type.
fn decode_entities(a: &mut Assembly, f: &mut FieldCursor<'_>, ctx: &Context<'_>) -> Result<()> {
    a.entities = read_list(f, "entities", entity_scope(a), ctx)?.indices;
    Ok(())
}

fn encode_entities(a: &Assembly, w: &mut FieldWriter, ctx: &Context<'_>) -> Result<()> {
    write_list(w, "entities", &a.entities, false, entity_scope(a), ctx)
}

fn decode_topology(a: &mut Assembly, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    a.topology_1 = f.index("topology_1")?;
    a.topology_2 = f.index("topology_2")?;
    Ok(())
}

fn encode_topology(a: &Assembly, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_index("topology_1", a.topology_1)?;
    w.push_index("topology_2", a.topology_2)
}

fn decode_node(a: &mut Assembly, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    a.orientation_node = f.index("orientation_node")?;
    Ok(())
}

fn encode_node(a: &Assembly, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_index("orientation_node", a.orientation_node)
}

fn decode_intermediate(a: &mut Assembly, f: &mut FieldCursor<'_>, ctx: &Context<'_>) -> Result<()> {
    let scope = ListScope::of(EntityKind::Node);
    a.intermediate_nodes = read_list(f, "intermediate_nodes", scope, ctx)?.indices;
    Ok(())
}

fn encode_intermediate(a: &Assembly, w: &mut FieldWriter, ctx: &Context<'_>) -> Result<()> {
    let scope = ListScope::of(EntityKind::Node);
    write_list(w, "intermediate_nodes", &a.intermediate_nodes, false, scope, ctx)
}

fn decode_size(a: &mut Assembly, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    a.size_y = f.float("size_y")?;
    a.size_z = f.float("size_z")?;
    Ok(())
}

fn encode_size(a: &Assembly, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_float("size_y", a.size_y)?;
    w.push_float("size_z", a.size_z)
}

fn decode_curve(a: &mut Assembly, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    a.curve_type = f.wire("curve_type")?;
    a.curve_order = f.int("curve_order")?;
    Ok(())
}

fn encode_curve(a: &Assembly, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_wire("curve_type", a.curve_type);
    w.push_int("curve_order", a.curve_order);
    Ok(())
}

fn decode_points(a: &mut Assembly, f: &mut FieldCursor<'_>, ctx: &Context<'_>) -> Result<()> {
    a.points = match f.wire("point_definition")? {
        PointDefinition::Points => AssemblyPoints::Count(f.int("point_count")?),
        PointDefinition::Spacing => AssemblyPoints::Spacing(f.float("point_spacing")?),
        PointDefinition::Storey => {
            let scope = ListScope::of(EntityKind::GridPlane);
            AssemblyPoints::Storeys(read_list(f, "storeys", scope, ctx)?.indices)
        }
        PointDefinition::Explicit => {
            let token = f.next("positions")?;
            let positions = token
                .text()
                .split_whitespace()
                .map(|position| parse_float(Token::new(position, token.span()), "positions"))
                .collect::<Result<Vec<_>>>()?;
            AssemblyPoints::Explicit(positions)
        }
    };
    Ok(())
}

fn encode_points(a: &Assembly, w: &mut FieldWriter, ctx: &Context<'_>) -> Result<()> {
    w.push_wire("point_definition", a.points.kind());
    match &a.points {
        AssemblyPoints::Count(count) => w.push_int("point_count", *count),
        AssemblyPoints::Spacing(spacing) => w.push_float("point_spacing", *spacing)?,
        AssemblyPoints::Storeys(storeys) => {
            let scope = ListScope::of(EntityKind::GridPlane);
            write_list(w, "storeys", storeys, false, scope, ctx)?;
        }
        AssemblyPoints::Explicit(positions) => {
            let positions = positions
                .iter()
                .map(|&position| format_finite("positions", position))
                .collect::<Result<Vec<_>>>()?;
            w.push("positions", positions.join(" "));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use gwa_core::{
        entity::IndexUniverse,
        enums::{AssemblyEntityType, CurveType},
    };

    use super::*;
    use crate::{decode_record, encode_record, error::ErrorCode};

    fn universe() -> IndexUniverse {
        IndexUniverse::new()
            .with(EntityKind::Element, [1, 2, 3])
            .with(EntityKind::Member, [7, 8])
            .with(EntityKind::GridPlane, [1, 2, 3, 4])
    }

    #[test]
    fn test_assembly_line() {
        let universe = universe();
        let context = Context::new('\t', &universe);
        let line = "ASSEMBLY.3\tSET\t1\tA1\tELEMENT\tall\t1\t2\t0\t5 6\t0.5\t0.25\tLAGRANGE\t2\tPOINTS\t10";

        let assembly: Assembly = decode_record(line, &context).unwrap();
        assert_eq!(assembly.entity_type, AssemblyEntityType::Element);
        assert_eq!(assembly.entities, vec![1, 2, 3]);
        assert_eq!(assembly.topology_1, Some(1));
        assert_eq!(assembly.topology_2, Some(2));
        assert_eq!(assembly.orientation_node, None);
        assert_eq!(assembly.intermediate_nodes, vec![5, 6]);
        assert_eq!(assembly.curve_type, CurveType::Lagrange);
        assert_eq!(assembly.points, AssemblyPoints::Count(10));
        assert_eq!(encode_record(&assembly, &context).unwrap(), line);
    }

    #[test]
    fn test_entities_follow_type() {
        let universe = universe();
        let context = Context::new('\t', &universe);

        let mut assembly = Assembly::new(AssemblyEntityType::Member);
        assembly.entities = vec![7, 8];
        let line = encode_record(&assembly, &context).unwrap();
        assert!(line.contains("\tMEMBER\tall\t"), "{line}");

        assembly.entities = vec![1, 2, 3];
        let line = encode_record(&assembly, &context).unwrap();
        assert!(line.contains("\tMEMBER\t1 2 3\t"), "{line}");
    }

    #[test]
    fn test_point_definitions() {
        let universe = universe();
        let context = Context::new('\t', &universe);
        let cases = [
            (AssemblyPoints::Spacing(0.5), "SPACING\t0.5"),
            (AssemblyPoints::Storeys(vec![1, 2]), "STOREY\t1 2"),
            (AssemblyPoints::Storeys(vec![1, 2, 3, 4]), "STOREY\tall"),
            (AssemblyPoints::Explicit(vec![0.0, 1.5, 3.0]), "EXPLICIT\t0 1.5 3"),
        ];

        for (points, tail) in cases {
            let mut assembly = Assembly::new(AssemblyEntityType::Element);
            assembly.points = points;

            let line = encode_record(&assembly, &context).unwrap();
            assert!(line.ends_with(tail), "{line}");
            let decoded: Assembly = decode_record(&line, &context).unwrap();
            assert_eq!(decoded, assembly);
        }
    }

    #[test]
    fn test_bad_explicit_position() {
        let universe = universe();
        let context = Context::new('\t', &universe);
        let line = "ASSEMBLY.3\tSET\t1\t\tELEMENT\t1\t1\t2\t0\t\t0\t0\tLAGRANGE\t2\tEXPLICIT\t0 x 3";

        let err = decode_record::<Assembly>(line, &context).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E202));
    }

    #[test]
    fn test_unknown_point_definition() {
        let universe = universe();
        let context = Context::new('\t', &universe);
        let line = "ASSEMBLY.3\tSET\t1\t\tELEMENT\t1\t1\t2\t0\t\t0\t0\tLAGRANGE\t2\tSOMETIMES\t3";

        let err = decode_record::<Assembly>(line, &context).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E300));
    }
}

#[cfg(test)]
mod proptest_tests {
    use gwa_core::{
        entity::IndexUniverse,
        enums::{AssemblyEntityType, CurveType},
    };
    use proptest::prelude::*;

    use super::*;
    use crate::{
        decode_record, encode_record,
        record::strategies::{decimal, header, optional_index},
    };

    const ELEMENTS: [i32; 6] = [1, 2, 3, 4, 5, 6];
    const MEMBERS: [i32; 4] = [10, 11, 12, 13];
    const NODES: [i32; 8] = [1, 2, 3, 4, 5, 6, 7, 8];
    const GRID_PLANES: [i32; 4] = [1, 2, 3, 4];

    fn universe() -> IndexUniverse {
        IndexUniverse::new()
            .with(EntityKind::Element, ELEMENTS)
            .with(EntityKind::Member, MEMBERS)
            .with(EntityKind::Node, NODES)
            .with(EntityKind::GridPlane, GRID_PLANES)
    }

    /// Any subset of `known`, in ascending order as `all` expands to.
    fn subset(known: &'static [i32]) -> impl Strategy<Value = Vec<i32>> {
        prop::sample::subsequence(known.to_vec(), 0..=known.len())
    }

    fn typed_entities() -> impl Strategy<Value = (AssemblyEntityType, Vec<i32>)> {
        prop::sample::select(AssemblyEntityType::ALL).prop_flat_map(|entity_type| {
            let known: &'static [i32] = match entity_type {
                AssemblyEntityType::Element => &ELEMENTS,
                AssemblyEntityType::Member => &MEMBERS,
            };
            (Just(entity_type), subset(known))
        })
    }

    fn points() -> impl Strategy<Value = AssemblyPoints> {
        prop_oneof![
            (1..200i32).prop_map(AssemblyPoints::Count),
            decimal().prop_map(AssemblyPoints::Spacing),
            subset(&GRID_PLANES).prop_map(AssemblyPoints::Storeys),
            prop::collection::vec(decimal(), 0..5).prop_map(AssemblyPoints::Explicit),
        ]
    }

    fn assembly() -> impl Strategy<Value = Assembly> {
        (
            header(Assembly::VERSION),
            typed_entities(),
            (optional_index(), optional_index(), optional_index()),
            subset(&NODES),
            (decimal(), decimal()),
            (prop::sample::select(CurveType::ALL), 1..5i32),
            points(),
        )
            .prop_map(
                |(
                    header,
                    (entity_type, entities),
                    (topology_1, topology_2, orientation_node),
                    intermediate_nodes,
                    (size_y, size_z),
                    (curve_type, curve_order),
                    points,
                )| {
                    let mut assembly = Assembly::with_header(header);
                    assembly.entity_type = entity_type;
                    assembly.entities = entities;
                    assembly.topology_1 = topology_1;
                    assembly.topology_2 = topology_2;
                    assembly.orientation_node = orientation_node;
                    assembly.intermediate_nodes = intermediate_nodes;
                    assembly.size_y = size_y;
                    assembly.size_z = size_z;
                    assembly.curve_type = curve_type;
                    assembly.curve_order = curve_order;
                    assembly.points = points;
                    assembly
                },
            )
    }

    fn check_assembly_round_trip(assembly: &Assembly) -> std::result::Result<(), TestCaseError> {
        let universe = universe();
        let context = Context::new('\t', &universe);

        let line =
            encode_record(assembly, &context).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let decoded: Assembly = decode_record(&line, &context)
            .map_err(|e| TestCaseError::fail(format!("`{line}`: {e}")))?;
        prop_assert_eq!(&decoded, assembly);

        let again =
            encode_record(&decoded, &context).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(again, line);
        Ok(())
    }

    proptest! {
        #[test]
        fn assembly_round_trip(assembly in assembly()) {
            check_assembly_round_trip(&assembly)?;
        }
    }
}
