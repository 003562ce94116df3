//! `NODE.3 | name | colour | x | y | z | [restraint | axis | mesh_size | spring | mass | damper]`

use gwa_core::{
    enums::{AxisDirection6, NodeAxisKeyword, NodeRestraintKeyword},
    header::RecordHeader,
    record::{Node, NodeAxis, NodeRestraint},
    wire::WireEnum,
};

use super::GwaRecord;
use crate::{
    Context,
    error::{Diagnostic, ErrorCode, Result},
    fields::{FieldCursor, FieldWriter, parse_int},
    pipeline::Step,
};

impl GwaRecord for Node {
    const VERSION: i32 = Node::VERSION;
    const KEYWORDS: &'static [&'static str] = &[Node::KEYWORD];
    const STEPS: &'static [Step<Self>] = &[
        Step::required("colour", decode_colour, encode_colour),
        Step::required("x", decode_x, encode_x),
        Step::required("y", decode_y, encode_y),
        Step::required("z", decode_z, encode_z),
        Step::trailing("restraint", restraint_is_set, decode_restraint, encode_restraint),
        Step::trailing("axis", axis_is_set, decode_axis, encode_axis),
        Step::trailing("mesh_size", |n| n.mesh_size.is_some(), decode_mesh, encode_mesh),
        Step::trailing(
            "spring_property",
            |n| n.spring_property.is_some(),
            decode_spring,
            encode_spring,
        ),
        Step::trailing(
            "mass_property",
            |n| n.mass_property.is_some(),
            decode_mass,
            encode_mass,
        ),
        Step::trailing(
            "damper_property",
            |n| n.damper_property.is_some(),
            decode_damper,
            encode_damper,
        ),
    ];

    fn blank(_keyword: &str, header: RecordHeader) -> Option<Self> {
        Some(Node::with_header(header))
    }

    fn header(&self) -> &RecordHeader {
        &self.header
    }

    fn keyword(&self) -> &'static str {
        Node::KEYWORD
    }
}

fn decode_colour(node: &mut Node, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    node.colour = f.wire("colour")?;
    Ok(())
}

fn encode_colour(node: &Node, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_wire("colour", node.colour);
    Ok(())
}

fn decode_x(node: &mut Node, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    node.x = f.float("x")?;
    Ok(())
}

fn encode_x(node: &Node, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_float("x", node.x)
}

fn decode_y(node: &mut Node, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    node.y = f.float("y")?;
    Ok(())
}

fn encode_y(node: &Node, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_float("y", node.y)
}

fn decode_z(node: &mut Node, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    node.z = f.float("z")?;
    Ok(())
}

fn encode_z(node: &Node, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_float("z", node.z)
}

fn restraint_is_set(node: &Node) -> bool {
    node.restraint != NodeRestraint::FREE
}

fn decode_restraint(node: &mut Node, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    let token = f.next("restraint")?;
    let text = token.text().trim();
    node.restraint = match NodeRestraintKeyword::from_wire(text) {
        Some(keyword) => NodeRestraint::from(keyword),
        None => parse_restraint_code(text).ok_or_else(|| {
            Diagnostic::error(format!("invalid restraint code `{text}`"))
                .with_code(ErrorCode::E207)
                .with_label(token.span(), "not a restraint")
                .with_help("expected `free`, `pin`, `fix` or runs of `x`, `y` and `z`")
        })?,
    };
    Ok(())
}

fn encode_restraint(node: &Node, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push("restraint", format_restraint(node.restraint));
    Ok(())
}

/// Parse a custom restraint such as `xyzxx`.
///
/// Each run of one letter names an axis: one letter is the translation, two
/// the rotation, three both.
fn parse_restraint_code(code: &str) -> Option<NodeRestraint> {
    if code.is_empty() {
        return None;
    }
    let mut axes = Vec::new();
    let mut chars = code.chars().peekable();
    while let Some(letter) = chars.next() {
        let mut run = 1;
        while chars.next_if_eq(&letter).is_some() {
            run += 1;
        }
        let (translation, rotation) = match letter.to_ascii_lowercase() {
            'x' => (AxisDirection6::X, AxisDirection6::XX),
            'y' => (AxisDirection6::Y, AxisDirection6::YY),
            'z' => (AxisDirection6::Z, AxisDirection6::ZZ),
            _ => return None,
        };
        match run {
            1 => axes.push(translation),
            2 => axes.push(rotation),
            3 => axes.extend([translation, rotation]),
            _ => return None,
        }
    }
    Some(NodeRestraint::from_axes(axes))
}

fn format_restraint(restraint: NodeRestraint) -> String {
    match restraint.keyword() {
        Some(keyword) => keyword.to_wire().to_string(),
        None => restraint
            .axes()
            .map(|axis| axis.to_wire().to_ascii_lowercase())
            .collect(),
    }
}

fn axis_is_set(node: &Node) -> bool {
    node.axis != NodeAxis::Global
}

fn decode_axis(node: &mut Node, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    let token = f.next("axis")?;
    node.axis = match NodeAxisKeyword::from_wire(token.text().trim()) {
        Some(NodeAxisKeyword::Global) => NodeAxis::Global,
        Some(NodeAxisKeyword::XElevation) => NodeAxis::XElevation,
        Some(NodeAxisKeyword::YElevation) => NodeAxis::YElevation,
        Some(NodeAxisKeyword::Vertical) => NodeAxis::Vertical,
        None => match parse_int(token, "axis") {
            Ok(0) => NodeAxis::Global,
            Ok(index) if index > 0 => NodeAxis::Reference(index),
            _ => {
                return Err(Diagnostic::error(format!(
                    "invalid node axis `{}`",
                    token.text()
                ))
                .with_code(ErrorCode::E300)
                .with_label(token.span(), "not an axis")
                .with_help("expected `GLOBAL`, `X_ELEV`, `Y_ELEV`, `VERTICAL` or an axis index"));
            }
        },
    };
    Ok(())
}

fn encode_axis(node: &Node, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    let keyword = match node.axis {
        NodeAxis::Global => NodeAxisKeyword::Global,
        NodeAxis::XElevation => NodeAxisKeyword::XElevation,
        NodeAxis::YElevation => NodeAxisKeyword::YElevation,
        NodeAxis::Vertical => NodeAxisKeyword::Vertical,
        NodeAxis::Reference(index) => return w.push_index("axis", Some(index)),
    };
    w.push_wire("axis", keyword);
    Ok(())
}

fn decode_mesh(node: &mut Node, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    node.mesh_size = f.optional_float("mesh_size")?;
    Ok(())
}

fn encode_mesh(node: &Node, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_optional_float("mesh_size", node.mesh_size)
}

fn decode_spring(node: &mut Node, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    node.spring_property = f.index("spring_property")?;
    Ok(())
}

fn encode_spring(node: &Node, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_index("spring_property", node.spring_property)
}

fn decode_mass(node: &mut Node, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    node.mass_property = f.index("mass_property")?;
    Ok(())
}

fn encode_mass(node: &Node, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_index("mass_property", node.mass_property)
}

fn decode_damper(node: &mut Node, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    node.damper_property = f.index("damper_property")?;
    Ok(())
}

fn encode_damper(node: &Node, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_index("damper_property", node.damper_property)
}
