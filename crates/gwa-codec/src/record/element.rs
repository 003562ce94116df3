//! `EL.4 | name | colour | type | prop[taper] | group | topology... | orient_node | orient_angle
//! | releases | off_x1 | off_x2 | off_y | off_z | [dummy | parent]`

use gwa_core::{
    header::RecordHeader,
    record::{Element, Taper},
};

use super::GwaRecord;
use crate::{
    Context,
    error::{Diagnostic, ErrorCode, Result},
    fields::{FieldCursor, FieldWriter, format_finite, format_index, parse_float, parse_index},
    pipeline::Step,
    release::{format_releases, parse_releases},
    tokenizer::Token,
};

impl GwaRecord for Element {
    const VERSION: i32 = Element::VERSION;
    const KEYWORDS: &'static [&'static str] = &[Element::KEYWORD];
    const STEPS: &'static [Step<Self>] = &[
        Step::required("colour", decode_colour, encode_colour),
        Step::required("type", decode_type, encode_type),
        Step::required("property", decode_property, encode_property),
        Step::required("group", decode_group, encode_group),
        Step::required("topology", decode_topology, encode_topology),
        Step::required("orientation_node", decode_orient_node, encode_orient_node),
        Step::required("orientation_angle", decode_orient_angle, encode_orient_angle),
        Step::required("releases", decode_releases, encode_releases),
        Step::required("offsets", decode_offsets, encode_offsets),
        Step::trailing("dummy", |e| e.dummy, decode_dummy, encode_dummy),
        Step::trailing("parent", |e| e.parent.is_some(), decode_parent, encode_parent),
    ];

    fn blank(_keyword: &str, header: RecordHeader) -> Option<Self> {
        Some(Element::with_header(header))
    }

    fn header(&self) -> &RecordHeader {
        &self.header
    }

    fn keyword(&self) -> &'static str {
        Element::KEYWORD
    }
}

fn decode_colour(el: &mut Element, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    el.colour = f.wire("colour")?;
    Ok(())
}

fn encode_colour(el: &Element, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_wire("colour", el.colour);
    Ok(())
}

fn decode_type(el: &mut Element, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    el.element_type = f.wire("type")?;
    Ok(())
}

fn encode_type(el: &Element, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_wire("type", el.element_type);
    Ok(())
}

/// `prop` or `prop[start:end]`.
fn decode_property(el: &mut Element, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    let token = f.next("property")?;
    let text = token.text().trim();

    let Some((property, rest)) = text.split_once('[') else {
        el.property = parse_index(token, "property")?;
        el.taper = None;
        return Ok(());
    };

    let invalid = || {
        Diagnostic::error(format!("invalid tapered property `{text}`"))
            .with_code(ErrorCode::E202)
            .with_label(token.span(), "expected `prop[start:end]`")
    };
    let taper = rest.strip_suffix(']').ok_or_else(invalid)?;
    el.property = parse_index(Token::new(property, token.span()), "property")?;
    el.taper = match taper.trim() {
        "" => None,
        taper => {
            let (start, end) = taper.split_once(':').ok_or_else(invalid)?;
            Some(Taper {
                start: parse_float(Token::new(start, token.span()), "taper")?,
                end: parse_float(Token::new(end, token.span()), "taper")?,
            })
        }
    };
    Ok(())
}

fn encode_property(el: &Element, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    let Some(taper) = el.taper else {
        return w.push_index("property", el.property);
    };
    let property = format_index("property", el.property)?;
    let start = format_finite("taper", taper.start)?;
    let end = format_finite("taper", taper.end)?;
    w.push("property", format!("{property}[{start}:{end}]"));
    Ok(())
}

fn decode_group(el: &mut Element, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    el.group = f.index("group")?;
    Ok(())
}

fn encode_group(el: &Element, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_index("group", el.group)
}

/// One field per node of the element type; `0` fields are dropped.
fn decode_topology(el: &mut Element, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    el.topology.clear();
    for _ in 0..el.element_type.node_count() {
        if let Some(node) = f.index("topology")? {
            el.topology.push(node);
        }
    }
    Ok(())
}

fn encode_topology(el: &Element, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    let count = el.element_type.node_count();
    if el.topology.len() > count {
        return Err(Diagnostic::error(format!(
            "`{}` elements have {count} nodes, topology holds {}",
            el.element_type,
            el.topology.len()
        ))
        .with_code(ErrorCode::E405)
        .with_help("remove nodes or change the element type"));
    }
    for position in 0..count {
        w.push_index("topology", el.topology.get(position).copied())?;
    }
    Ok(())
}

fn decode_orient_node(el: &mut Element, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    el.orientation_node = f.index("orientation_node")?;
    Ok(())
}

fn encode_orient_node(el: &Element, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_index("orientation_node", el.orientation_node)
}

fn decode_orient_angle(el: &mut Element, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    el.orientation_angle = f.float("orientation_angle")?;
    Ok(())
}

fn encode_orient_angle(el: &Element, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_float("orientation_angle", el.orientation_angle)
}

fn decode_releases(el: &mut Element, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    el.releases = parse_releases::<2>(f, "releases")?;
    Ok(())
}

fn encode_releases(el: &Element, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    format_releases(&el.releases, w, "releases")
}

fn decode_offsets(el: &mut Element, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    el.offsets.end_1_x = f.float("offset_x1")?;
    el.offsets.end_2_x = f.float("offset_x2")?;
    el.offsets.y = f.float("offset_y")?;
    el.offsets.z = f.float("offset_z")?;
    Ok(())
}

fn encode_offsets(el: &Element, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_float("offset_x1", el.offsets.end_1_x)?;
    w.push_float("offset_x2", el.offsets.end_2_x)?;
    w.push_float("offset_y", el.offsets.y)?;
    w.push_float("offset_z", el.offsets.z)
}

fn decode_dummy(el: &mut Element, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    el.dummy = f.text("dummy")?.trim().eq_ignore_ascii_case("DUMMY");
    Ok(())
}

fn encode_dummy(el: &Element, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push("dummy", if el.dummy { "DUMMY" } else { "" });
    Ok(())
}

fn decode_parent(el: &mut Element, f: &mut FieldCursor<'_>, _: &Context<'_>) -> Result<()> {
    el.parent = f.index("parent")?;
    Ok(())
}

fn encode_parent(el: &Element, w: &mut FieldWriter, _: &Context<'_>) -> Result<()> {
    w.push_index("parent", el.parent)
}

#[cfg(test)]
mod tests {
    use gwa_core::{
        entity::IndexUniverse,
        enums::{AxisDirection6, ElementType, ReleaseInclusion},
        release::{ReleaseEnd, Releases},
    };

    use super::*;
    use crate::{decode_record, encode_record};

    fn decode(line: &str) -> Result<Element> {
        let universe = IndexUniverse::new();
        decode_record(line, &Context::new('\t', &universe))
    }

    fn encode(element: &Element) -> Result<String> {
        let universe = IndexUniverse::new();
        encode_record(element, &Context::new('\t', &universe))
    }

    #[test]
    fn test_beam_element() {
        let line = "EL.4\tSET\t3\tB3\tNO_RGB\tBEAM\t2\t1\t10\t11\t0\t45\tNO_RLS\t0\t0\t0.1\t0";
        let element = decode(line).unwrap();

        assert_eq!(element.element_type, ElementType::Beam);
        assert_eq!(element.property, Some(2));
        assert_eq!(element.group, Some(1));
        assert_eq!(element.topology, vec![10, 11]);
        assert_eq!(element.orientation_node, None);
        assert_eq!(element.orientation_angle, 45.0);
        assert_eq!(element.offsets.y, 0.1);
        assert!(!element.dummy);
        assert_eq!(encode(&element).unwrap(), line);
    }

    #[test]
    fn test_quad_topology_is_padded() {
        let mut element = Element::new(ElementType::Quad4);
        element.topology = vec![1, 2, 3];

        let line = encode(&element).unwrap();
        assert_eq!(
            line,
            "EL.4\tSET_NOINDEX\t\tNO_RGB\tQUAD4\t0\t0\t1\t2\t3\t0\t0\t0\tNO_RLS\t0\t0\t0\t0"
        );
        assert_eq!(decode(&line).unwrap().topology, vec![1, 2, 3]);
    }

    #[test]
    fn test_too_many_nodes() {
        let mut element = Element::new(ElementType::Bar);
        element.topology = vec![1, 2, 3];

        assert_eq!(encode(&element).unwrap_err().code(), Some(ErrorCode::E405));
    }

    #[test]
    fn test_taper_and_releases() {
        let line = "EL.4\tSET\t1\t\tNO_RGB\tBEAM\t5[0.25:0.75]\t0\t1\t2\t0\t0\tSTIFF\tFFFFFK\t100\tFFFFRR\t0\t0\t0\t0";
        let element = decode(line).unwrap();

        assert_eq!(element.property, Some(5));
        assert_eq!(
            element.taper,
            Some(Taper {
                start: 0.25,
                end: 0.75
            })
        );
        assert_eq!(element.releases.inclusion, ReleaseInclusion::Stiff);
        let [first, second] = element.releases.ends.unwrap();
        assert_eq!(first.stiffness(AxisDirection6::ZZ), Some(100.0));
        assert_eq!(second, ReleaseEnd::fixed().released(AxisDirection6::YY).released(AxisDirection6::ZZ));
        assert_eq!(encode(&element).unwrap(), line);
    }

    #[test]
    fn test_dummy_and_parent() {
        let base = "EL.4\tSET\t1\t\tNO_RGB\tBAR\t1\t0\t1\t2\t0\t0\tNO_RLS\t0\t0\t0\t0";

        let element = decode(&format!("{base}\tDUMMY")).unwrap();
        assert!(element.dummy);
        assert_eq!(encode(&element).unwrap(), format!("{base}\tDUMMY"));

        let element = decode(&format!("{base}\t\t8")).unwrap();
        assert!(!element.dummy);
        assert_eq!(element.parent, Some(8));
        assert_eq!(encode(&element).unwrap(), format!("{base}\t\t8"));
    }

    #[test]
    fn test_release_block_must_match_flag() {
        let mut element = Element::new(ElementType::Beam);
        element.releases = Releases {
            inclusion: ReleaseInclusion::Included,
            ends: None,
        };

        assert_eq!(encode(&element).unwrap_err().code(), Some(ErrorCode::E404));
    }

    #[test]
    fn test_bad_taper() {
        let line = "EL.4\tSET\t1\t\tNO_RGB\tBEAM\t5[0.25]\t0\t1\t2\t0\t0\tNO_RLS\t0\t0\t0\t0";

        assert_eq!(decode(line).unwrap_err().code(), Some(ErrorCode::E202));
    }
}
