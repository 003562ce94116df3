use crate::{
    enums::{AssemblyEntityType, CurveType, PointDefinition},
    header::RecordHeader,
};

/// Where results are extracted along an assembly.
#[derive(Debug, Clone, PartialEq)]
pub enum AssemblyPoints {
    /// A number of evenly spaced points.
    Count(i32),
    /// Points at a fixed spacing.
    Spacing(f64),
    /// Points at the given grid-plane storeys.
    Storeys(Vec<i32>),
    /// Points at explicit positions along the reference curve.
    Explicit(Vec<f64>),
}

impl AssemblyPoints {
    /// Wire keyword of this definition.
    pub fn kind(&self) -> PointDefinition {
        match self {
            AssemblyPoints::Count(_) => PointDefinition::Points,
            AssemblyPoints::Spacing(_) => PointDefinition::Spacing,
            AssemblyPoints::Storeys(_) => PointDefinition::Storey,
            AssemblyPoints::Explicit(_) => PointDefinition::Explicit,
        }
    }
}

impl Default for AssemblyPoints {
    fn default() -> Self {
        AssemblyPoints::Count(10)
    }
}

/// `ASSEMBLY`: a group of elements or members cut along a reference curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    pub header: RecordHeader,
    pub entity_type: AssemblyEntityType,
    pub entities: Vec<i32>,
    pub topology_1: Option<i32>,
    pub topology_2: Option<i32>,
    pub orientation_node: Option<i32>,
    pub intermediate_nodes: Vec<i32>,
    pub size_y: f64,
    pub size_z: f64,
    pub curve_type: CurveType,
    pub curve_order: i32,
    pub points: AssemblyPoints,
}

impl Assembly {
    pub const KEYWORD: &'static str = "ASSEMBLY";
    pub const VERSION: i32 = 3;

    /// An unindexed assembly over entities of `entity_type`.
    pub fn new(entity_type: AssemblyEntityType) -> Self {
        let mut assembly = Self::with_header(RecordHeader::new(Self::VERSION));
        assembly.entity_type = entity_type;
        assembly
    }

    /// A default assembly with the given header.
    pub fn with_header(header: RecordHeader) -> Self {
        Self {
            header,
            entity_type: AssemblyEntityType::default(),
            entities: Vec::new(),
            topology_1: None,
            topology_2: None,
            orientation_node: None,
            intermediate_nodes: Vec::new(),
            size_y: 0.0,
            size_z: 0.0,
            curve_type: CurveType::default(),
            curve_order: 2,
            points: AssemblyPoints::default(),
        }
    }
}
