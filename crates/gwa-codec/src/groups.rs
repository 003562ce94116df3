//! Composite topology fields.
//!
//! ```text
//! 41 42 43 44 V(45 46 47 48) P(50) L(51 52) A(53 54 55)
//! ```
//!
//! A perimeter of plain indices is followed by bracketed groups, each tagged
//! with one letter. Group contents are plain indices; `all` and `to` are not
//! accepted in any group.

use gwa_core::{enums::GroupTag, topology::Topology, wire::WireEnum};
use thiserror::Error;
use winnow::{
    Parser as _,
    ascii::{digit1, space0},
    combinator::{delimited, preceded, repeat, terminated},
    error::ModalResult,
    token::one_of,
};

/// A topology field that does not follow the group grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    #[error("unexpected input at offset {offset}")]
    Syntax { offset: usize },

    #[error("index {0} cannot be written, topology indices must be positive")]
    NegativeIndex(i32),
}

/// Perimeter and groups in input order.
pub type ParsedGroups = (Vec<i32>, Vec<(GroupTag, Vec<i32>)>);

fn index(input: &mut &str) -> ModalResult<i32> {
    terminated(digit1.try_map(str::parse::<i32>), space0).parse_next(input)
}

fn indices(input: &mut &str) -> ModalResult<Vec<i32>> {
    repeat(0.., index).parse_next(input)
}

fn group_tag(input: &mut &str) -> ModalResult<GroupTag> {
    one_of(['V', 'v', 'P', 'p', 'L', 'l', 'A', 'a'])
        .verify_map(|tag: char| {
            let mut buffer = [0; 4];
            GroupTag::from_wire(tag.encode_utf8(&mut buffer))
        })
        .parse_next(input)
}

fn group(input: &mut &str) -> ModalResult<(GroupTag, Vec<i32>)> {
    (
        group_tag,
        terminated(delimited(('(', space0), indices, ')'), space0),
    )
        .parse_next(input)
}

fn topology(input: &mut &str) -> ModalResult<ParsedGroups> {
    preceded(space0, (indices, repeat(0.., group))).parse_next(input)
}

/// Parse a topology field into its perimeter and groups.
///
/// Zero indices are dropped. Groups come back in input order, empty ones
/// included; [`parse_topology`] drops them.
///
/// # Errors
///
/// Returns [`GroupError::Syntax`] with the byte offset of the first
/// character that does not fit the grammar.
pub fn parse_groups(text: &str) -> Result<ParsedGroups, GroupError> {
    let (mut perimeter, mut groups) = topology
        .parse(text)
        .map_err(|err| GroupError::Syntax {
            offset: err.offset(),
        })?;

    perimeter.retain(|index| *index != 0);
    for (_, members) in &mut groups {
        members.retain(|index| *index != 0);
    }
    Ok((perimeter, groups))
}

/// Parse a topology field into a [`Topology`].
///
/// # Example
///
/// ```
/// # use gwa_codec::groups::parse_topology;
/// let topology = parse_topology("41 42 43 44 V(45 46 47 48)").unwrap();
///
/// assert_eq!(topology.perimeter, vec![41, 42, 43, 44]);
/// assert_eq!(topology.voids, vec![vec![45, 46, 47, 48]]);
/// ```
pub fn parse_topology(text: &str) -> Result<Topology, GroupError> {
    let (perimeter, groups) = parse_groups(text)?;
    let mut topology = Topology::from_perimeter(perimeter);
    for (tag, members) in groups {
        topology.push_group(tag, members);
    }
    Ok(topology)
}

/// Format a topology in canonical `V`, `P`, `L`, `A` order.
///
/// Zero indices and empty groups are left out.
///
/// # Errors
///
/// Returns [`GroupError::NegativeIndex`] for negative indices.
pub fn format_topology(topology: &Topology) -> Result<String, GroupError> {
    let join = |indices: &[i32]| -> Result<String, GroupError> {
        let mut parts = Vec::new();
        for index in indices {
            match *index {
                0 => {}
                i if i < 0 => return Err(GroupError::NegativeIndex(i)),
                i => parts.push(i.to_string()),
            }
        }
        Ok(parts.join(" "))
    };

    let mut parts = Vec::new();
    let perimeter = join(&topology.perimeter)?;
    if !perimeter.is_empty() {
        parts.push(perimeter);
    }
    for (tag, members) in topology.groups() {
        let members = join(members)?;
        if !members.is_empty() {
            parts.push(format!("{}({members})", tag.to_wire()));
        }
    }
    Ok(parts.join(" "))
}
