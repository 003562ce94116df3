//! Record types.
//!
//! Each record type carries a [`RecordHeader`] plus its own positional field
//! set. Keyword and supported schema version are associated constants so
//! construction and dispatch agree on them.

mod assembly;
mod element;
mod load_beam;
mod member;
mod node;

pub use assembly::{Assembly, AssemblyPoints};
pub use element::{Element, ElementOffsets, Taper};
pub use load_beam::{LoadBeam, LoadBeamAxis, LoadBeamValues, LoadTarget};
pub use member::{
    ConstructionStages, EffectiveLength, Member, Member1d, Member2d, MemberDetail, MemberOffsets,
    RestraintDefinition,
};
pub use node::{Node, NodeAxis, NodeRestraint};

use crate::{entity::EntityKind, header::RecordHeader};

/// A length given either absolutely or as a percentage of the span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    Absolute(f64),
    Percentage(f64),
}

impl Default for Measure {
    fn default() -> Self {
        Measure::Absolute(0.0)
    }
}

/// Any decoded record.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Node(Node),
    Element(Element),
    Member(Member),
    Assembly(Assembly),
    LoadBeam(LoadBeam),
}

impl Record {
    /// Common preamble of the record.
    pub fn header(&self) -> &RecordHeader {
        match self {
            Record::Node(r) => &r.header,
            Record::Element(r) => &r.header,
            Record::Member(r) => &r.header,
            Record::Assembly(r) => &r.header,
            Record::LoadBeam(r) => &r.header,
        }
    }

    /// Keyword the record is written with.
    pub fn keyword(&self) -> &'static str {
        match self {
            Record::Node(_) => Node::KEYWORD,
            Record::Element(_) => Element::KEYWORD,
            Record::Member(_) => Member::KEYWORD,
            Record::Assembly(_) => Assembly::KEYWORD,
            Record::LoadBeam(r) => r.keyword(),
        }
    }

    /// Index space the record's own index belongs to.
    pub fn entity_kind(&self) -> EntityKind {
        match self {
            Record::Node(_) => EntityKind::Node,
            Record::Element(_) => EntityKind::Element,
            Record::Member(_) => EntityKind::Member,
            Record::Assembly(_) => EntityKind::Assembly,
            Record::LoadBeam(_) => EntityKind::LoadBeam,
        }
    }
}

macro_rules! impl_from_record {
    ($($variant:ident),+) => {
        $(
            impl From<$variant> for Record {
                fn from(record: $variant) -> Self {
                    Record::$variant(record)
                }
            }
        )+
    };
}

impl_from_record!(Node, Element, Member, Assembly, LoadBeam);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_dispatch_helpers() {
        let record = Record::from(Node::new());

        assert_eq!(record.keyword(), "NODE");
        assert_eq!(record.entity_kind(), EntityKind::Node);
        assert_eq!(record.header().version(), Node::VERSION);
    }

    #[test]
    fn test_load_beam_keyword_follows_values() {
        let record = Record::from(LoadBeam::new(LoadBeamValues::Udl { value: 1.0 }));

        assert_eq!(record.keyword(), "LOAD_BEAM_UDL");
        assert_eq!(record.entity_kind(), EntityKind::LoadBeam);
    }
}
