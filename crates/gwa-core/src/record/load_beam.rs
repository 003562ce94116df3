use crate::{
    enums::{AxisDirection6, LoadBeamKind},
    header::RecordHeader,
    record::Measure,
    wire::WireEnum,
};

/// Entities a beam load is applied to.
///
/// On the wire, member indices carry a `G` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadTarget {
    Elements(Vec<i32>),
    Members(Vec<i32>),
}

impl Default for LoadTarget {
    fn default() -> Self {
        LoadTarget::Elements(Vec::new())
    }
}

/// Axis the load direction is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadBeamAxis {
    #[default]
    Global,
    Local,
    Natural,
    /// Index of an axis record.
    Reference(i32),
}

/// Load magnitudes, one variant per beam load keyword.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadBeamValues {
    Point {
        position: Measure,
        value: f64,
    },
    Udl {
        value: f64,
    },
    Line {
        value_1: f64,
        value_2: f64,
    },
    Patch {
        position_1: Measure,
        value_1: f64,
        position_2: Measure,
        value_2: f64,
    },
    Trilinear {
        position_1: Measure,
        value_1: f64,
        position_2: Measure,
        value_2: f64,
    },
}

impl LoadBeamValues {
    /// Keyword variant these values are written under.
    pub fn kind(&self) -> LoadBeamKind {
        match self {
            LoadBeamValues::Point { .. } => LoadBeamKind::Point,
            LoadBeamValues::Udl { .. } => LoadBeamKind::Udl,
            LoadBeamValues::Line { .. } => LoadBeamKind::Line,
            LoadBeamValues::Patch { .. } => LoadBeamKind::Patch,
            LoadBeamValues::Trilinear { .. } => LoadBeamKind::Trilinear,
        }
    }

    /// Zero-valued load of the given kind.
    pub fn zero(kind: LoadBeamKind) -> Self {
        let position = Measure::default();
        match kind {
            LoadBeamKind::Point => LoadBeamValues::Point {
                position,
                value: 0.0,
            },
            LoadBeamKind::Udl => LoadBeamValues::Udl { value: 0.0 },
            LoadBeamKind::Line => LoadBeamValues::Line {
                value_1: 0.0,
                value_2: 0.0,
            },
            LoadBeamKind::Patch => LoadBeamValues::Patch {
                position_1: position,
                value_1: 0.0,
                position_2: position,
                value_2: 0.0,
            },
            LoadBeamKind::Trilinear => LoadBeamValues::Trilinear {
                position_1: position,
                value_1: 0.0,
                position_2: position,
                value_2: 0.0,
            },
        }
    }
}

/// `LOAD_BEAM_*`: a load applied along 1D elements or members.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadBeam {
    pub header: RecordHeader,
    pub target: LoadTarget,
    pub load_case: Option<i32>,
    pub axis: LoadBeamAxis,
    pub projected: bool,
    pub direction: AxisDirection6,
    pub values: LoadBeamValues,
}

impl LoadBeam {
    pub const VERSION: i32 = 2;

    /// An unindexed load with the given values.
    pub fn new(values: LoadBeamValues) -> Self {
        Self::with_header(RecordHeader::new(Self::VERSION), values)
    }

    /// A load with the given header and values.
    pub fn with_header(header: RecordHeader, values: LoadBeamValues) -> Self {
        Self {
            header,
            target: LoadTarget::default(),
            load_case: None,
            axis: LoadBeamAxis::default(),
            projected: false,
            direction: AxisDirection6::Z,
            values,
        }
    }

    /// Keyword matching the load values.
    pub fn keyword(&self) -> &'static str {
        self.values.kind().to_wire()
    }
}
