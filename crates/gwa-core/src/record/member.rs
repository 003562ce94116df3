use crate::{
    enums::{
        AnalysisType, Colour, EffectiveLengthType, ExposedSurfaces, FireResistance,
        LoadHeightReference, MemberDimension, MemberRestraint, MemberType,
    },
    header::RecordHeader,
    record::Measure,
    release::ReleaseEnd,
    topology::Topology,
};

/// Construction stage timing, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstructionStages {
    pub creation_from_start: i32,
    pub start_of_drying: i32,
    pub age_at_loading: i32,
    pub removed_at: i32,
}

/// A restraint applied at one point or span of a 1D member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestraintDefinition {
    /// Point or span index; `None` applies to all of them.
    pub index: Option<i32>,
    pub restraint: MemberRestraint,
}

/// How the buckling length of a 1D member is obtained.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EffectiveLength {
    #[default]
    Automatic,
    Specified {
        yy: Measure,
        zz: Measure,
        lateral_torsional: Measure,
    },
    Explicit {
        points: Vec<RestraintDefinition>,
        spans: Vec<RestraintDefinition>,
    },
}

impl EffectiveLength {
    /// Wire keyword of this definition.
    pub fn kind(&self) -> EffectiveLengthType {
        match self {
            EffectiveLength::Automatic => EffectiveLengthType::Automatic,
            EffectiveLength::Specified { .. } => EffectiveLengthType::EffectiveLength,
            EffectiveLength::Explicit { .. } => EffectiveLengthType::Explicit,
        }
    }
}

/// Offsets of a 1D member.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MemberOffsets {
    pub end_1_automatic: bool,
    pub end_2_automatic: bool,
    pub end_1_x: f64,
    pub end_2_x: f64,
    pub y: f64,
    pub z: f64,
}

/// Fields only line members carry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Member1d {
    pub releases: [ReleaseEnd; 2],
    pub restraint_end_1: MemberRestraint,
    pub restraint_end_2: MemberRestraint,
    pub effective_length: EffectiveLength,
    pub load_height: f64,
    pub load_height_reference: LoadHeightReference,
    pub offsets: Option<MemberOffsets>,
}

/// Fields only area members carry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Member2d {
    pub offset_z: f64,
    pub offset_automatic_internal: bool,
    /// Reinforcement fields, kept verbatim.
    pub reinforcement: Vec<String>,
}

/// Dimension-specific part of a member. Must agree with the member type.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberDetail {
    OneD(Member1d),
    TwoD(Member2d),
    ThreeD,
}

impl MemberDetail {
    /// Empty detail for members of the given dimension.
    pub fn for_dimension(dimension: MemberDimension) -> Self {
        match dimension {
            MemberDimension::One => MemberDetail::OneD(Member1d::default()),
            MemberDimension::Two => MemberDetail::TwoD(Member2d::default()),
            MemberDimension::Three => MemberDetail::ThreeD,
        }
    }

    /// Dimension this detail belongs to.
    pub fn dimension(&self) -> MemberDimension {
        match self {
            MemberDetail::OneD(_) => MemberDimension::One,
            MemberDetail::TwoD(_) => MemberDimension::Two,
            MemberDetail::ThreeD => MemberDimension::Three,
        }
    }
}

/// `MEMB`: a design member.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub header: RecordHeader,
    pub colour: Colour,
    pub member_type: MemberType,
    /// Not written for 3D members.
    pub exposure: ExposedSurfaces,
    pub property: Option<i32>,
    pub group: Option<i32>,
    pub topology: Topology,
    pub orientation_node: Option<i32>,
    pub angle: f64,
    pub mesh_size: Option<f64>,
    pub is_intersector: bool,
    pub analysis_type: AnalysisType,
    pub fire: FireResistance,
    /// Not written for 3D members.
    pub limiting_temperature: Option<f64>,
    pub stages: ConstructionStages,
    pub dummy: bool,
    pub detail: MemberDetail,
}

impl Member {
    pub const KEYWORD: &'static str = "MEMB";
    pub const VERSION: i32 = 8;

    /// An unindexed member of the given type.
    pub fn new(member_type: MemberType) -> Self {
        let mut member = Self::with_header(RecordHeader::new(Self::VERSION));
        member.set_member_type(member_type);
        member
    }

    /// A default beam member with the given header.
    pub fn with_header(header: RecordHeader) -> Self {
        let member_type = MemberType::default();
        Self {
            header,
            colour: Colour::default(),
            member_type,
            exposure: ExposedSurfaces::default(),
            property: None,
            group: None,
            topology: Topology::default(),
            orientation_node: None,
            angle: 0.0,
            mesh_size: None,
            is_intersector: false,
            analysis_type: AnalysisType::default(),
            fire: FireResistance::default(),
            limiting_temperature: None,
            stages: ConstructionStages::default(),
            dummy: false,
            detail: MemberDetail::for_dimension(member_type.dimension()),
        }
    }

    /// Change the member type, resetting the detail if the dimension changes.
    pub fn set_member_type(&mut self, member_type: MemberType) {
        if self.detail.dimension() != member_type.dimension() {
            self.detail = MemberDetail::for_dimension(member_type.dimension());
        }
        self.member_type = member_type;
    }

    /// Line-member fields, if this is a 1D member.
    pub fn one_d(&self) -> Option<&Member1d> {
        match &self.detail {
            MemberDetail::OneD(detail) => Some(detail),
            _ => None,
        }
    }

    /// Mutable line-member fields, if this is a 1D member.
    pub fn one_d_mut(&mut self) -> Option<&mut Member1d> {
        match &mut self.detail {
            MemberDetail::OneD(detail) => Some(detail),
            _ => None,
        }
    }

    /// Area-member fields, if this is a 2D member.
    pub fn two_d(&self) -> Option<&Member2d> {
        match &self.detail {
            MemberDetail::TwoD(detail) => Some(detail),
            _ => None,
        }
    }

    /// Mutable area-member fields, if this is a 2D member.
    pub fn two_d_mut(&mut self) -> Option<&mut Member2d> {
        match &mut self.detail {
            MemberDetail::TwoD(detail) => Some(detail),
            _ => None,
        }
    }
}
