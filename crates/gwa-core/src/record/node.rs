use crate::{
    enums::{AxisDirection6, Colour, NodeRestraintKeyword},
    header::RecordHeader,
};

/// Which of the six degrees of freedom of a node are restrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeRestraint {
    restrained: [bool; 6],
}

impl NodeRestraint {
    /// No degree of freedom restrained.
    pub const FREE: Self = Self {
        restrained: [false; 6],
    };

    /// Translations restrained.
    pub const PIN: Self = Self {
        restrained: [true, true, true, false, false, false],
    };

    /// Every degree of freedom restrained.
    pub const FIX: Self = Self {
        restrained: [true; 6],
    };

    /// Restraint of exactly the given axes.
    pub fn from_axes(axes: impl IntoIterator<Item = AxisDirection6>) -> Self {
        let mut restrained = [false; 6];
        for axis in axes {
            restrained[axis.position()] = true;
        }
        Self { restrained }
    }

    /// Whether `axis` is restrained.
    pub fn is_restrained(&self, axis: AxisDirection6) -> bool {
        self.restrained[axis.position()]
    }

    /// Restrained axes in wire order.
    pub fn axes(&self) -> impl Iterator<Item = AxisDirection6> + '_ {
        AxisDirection6::ALL
            .iter()
            .copied()
            .filter(|axis| self.is_restrained(*axis))
    }

    /// The named restraint matching this one, if any.
    pub fn keyword(&self) -> Option<NodeRestraintKeyword> {
        match *self {
            Self::FREE => Some(NodeRestraintKeyword::Free),
            Self::PIN => Some(NodeRestraintKeyword::Pin),
            Self::FIX => Some(NodeRestraintKeyword::Fix),
            _ => None,
        }
    }
}

impl From<NodeRestraintKeyword> for NodeRestraint {
    fn from(keyword: NodeRestraintKeyword) -> Self {
        match keyword {
            NodeRestraintKeyword::Free => Self::FREE,
            NodeRestraintKeyword::Pin => Self::PIN,
            NodeRestraintKeyword::Fix => Self::FIX,
        }
    }
}

/// Local axis of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeAxis {
    #[default]
    Global,
    XElevation,
    YElevation,
    Vertical,
    /// Index of an axis record.
    Reference(i32),
}

/// `NODE`: a point in the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub header: RecordHeader,
    pub colour: Colour,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub restraint: NodeRestraint,
    pub axis: NodeAxis,
    pub mesh_size: Option<f64>,
    pub spring_property: Option<i32>,
    pub mass_property: Option<i32>,
    pub damper_property: Option<i32>,
}

impl Node {
    pub const KEYWORD: &'static str = "NODE";
    pub const VERSION: i32 = 3;

    /// An unindexed node at the origin.
    pub fn new() -> Self {
        Self::with_header(RecordHeader::new(Self::VERSION))
    }

    /// A node at the origin with the given header.
    pub fn with_header(header: RecordHeader) -> Self {
        Self {
            header,
            colour: Colour::default(),
            x: 0.0,
            y: 0.0,
            z: 0.0,
            restraint: NodeRestraint::FREE,
            axis: NodeAxis::Global,
            mesh_size: None,
            spring_property: None,
            mass_property: None,
            damper_property: None,
        }
    }

    /// Move the node to the given coordinates.
    pub fn at(mut self, x: f64, y: f64, z: f64) -> Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_restraints() {
        assert_eq!(NodeRestraint::FREE.keyword(), Some(NodeRestraintKeyword::Free));
        assert_eq!(NodeRestraint::PIN.keyword(), Some(NodeRestraintKeyword::Pin));
        assert_eq!(NodeRestraint::FIX.keyword(), Some(NodeRestraintKeyword::Fix));
        assert_eq!(
            NodeRestraint::from_axes([AxisDirection6::X, AxisDirection6::Y, AxisDirection6::Z]),
            NodeRestraint::PIN
        );
    }

    #[test]
    fn test_custom_restraint_has_no_keyword() {
        let restraint = NodeRestraint::from_axes([AxisDirection6::Z, AxisDirection6::XX]);

        assert_eq!(restraint.keyword(), None);
        assert_eq!(
            restraint.axes().collect::<Vec<_>>(),
            vec![AxisDirection6::Z, AxisDirection6::XX]
        );
    }

    #[test]
    fn test_new_node() {
        let node = Node::new().at(1.5, 2.5, 0.0);

        assert_eq!(node.header.version(), 3);
        assert_eq!(node.colour, Colour::NoRgb);
        assert_eq!(node.y, 2.5);
        assert_eq!(node.axis, NodeAxis::Global);
    }
}
