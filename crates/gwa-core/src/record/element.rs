use crate::{
    enums::{Colour, ElementType},
    header::RecordHeader,
    release::Releases,
};

/// Section taper along a tapered element, as fractions of its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Taper {
    pub start: f64,
    pub end: f64,
}

/// Offsets applied to an element's ends.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementOffsets {
    pub end_1_x: f64,
    pub end_2_x: f64,
    pub y: f64,
    pub z: f64,
}

/// `EL`: an analysis element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub header: RecordHeader,
    pub colour: Colour,
    pub element_type: ElementType,
    pub property: Option<i32>,
    pub taper: Option<Taper>,
    pub group: Option<i32>,
    /// Node indices; at most [`ElementType::node_count`] entries.
    pub topology: Vec<i32>,
    pub orientation_node: Option<i32>,
    pub orientation_angle: f64,
    pub releases: Releases<2>,
    pub offsets: ElementOffsets,
    pub dummy: bool,
    pub parent: Option<i32>,
}

impl Element {
    pub const KEYWORD: &'static str = "EL";
    pub const VERSION: i32 = 4;

    /// An unindexed element of the given type.
    pub fn new(element_type: ElementType) -> Self {
        let mut element = Self::with_header(RecordHeader::new(Self::VERSION));
        element.element_type = element_type;
        element
    }

    /// A default element with the given header.
    pub fn with_header(header: RecordHeader) -> Self {
        Self {
            header,
            colour: Colour::default(),
            element_type: ElementType::default(),
            property: None,
            taper: None,
            group: None,
            topology: Vec::new(),
            orientation_node: None,
            orientation_angle: 0.0,
            releases: Releases::none(),
            offsets: ElementOffsets::default(),
            dummy: false,
            parent: None,
        }
    }
}
