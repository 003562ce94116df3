//! Composite topology of area members.

use crate::enums::GroupTag;

/// A perimeter node list plus the bracketed groups that may follow it.
///
/// Groups are stored per tag, so the canonical `V`, `P`, `L`, `A` order is a
/// property of the type rather than of the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    pub perimeter: Vec<i32>,
    pub voids: Vec<Vec<i32>>,
    pub points: Vec<i32>,
    pub polylines: Vec<Vec<i32>>,
    pub additional_areas: Vec<Vec<i32>>,
}

impl Topology {
    /// A topology with only a perimeter.
    pub fn from_perimeter(perimeter: impl Into<Vec<i32>>) -> Self {
        Self {
            perimeter: perimeter.into(),
            ..Self::default()
        }
    }

    /// Append a group's indices under `tag`. Empty groups are ignored.
    pub fn push_group(&mut self, tag: GroupTag, indices: Vec<i32>) {
        if indices.is_empty() {
            return;
        }
        match tag {
            GroupTag::Void => self.voids.push(indices),
            GroupTag::Points => self.points.extend(indices),
            GroupTag::Polyline => self.polylines.push(indices),
            GroupTag::AdditionalArea => self.additional_areas.push(indices),
        }
    }

    /// Groups in canonical order, skipping empty ones.
    pub fn groups(&self) -> Vec<(GroupTag, &[i32])> {
        let mut groups: Vec<(GroupTag, &[i32])> = Vec::new();
        groups.extend(self.voids.iter().map(|g| (GroupTag::Void, g.as_slice())));
        if !self.points.is_empty() {
            groups.push((GroupTag::Points, self.points.as_slice()));
        }
        groups.extend(self.polylines.iter().map(|g| (GroupTag::Polyline, g.as_slice())));
        groups.extend(
            self.additional_areas
                .iter()
                .map(|g| (GroupTag::AdditionalArea, g.as_slice())),
        );
        groups.retain(|(_, indices)| !indices.is_empty());
        groups
    }
}
