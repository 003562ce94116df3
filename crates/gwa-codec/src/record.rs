//! Step tables of the record types.
//!
//! Each submodule implements [`GwaRecord`] for one record type of
//! `gwa-core`. The `STEPS` table is the grammar of the fields that follow
//! the name.

mod assembly;
mod element;
mod load_beam;
mod member;
mod node;
#[cfg(test)]
mod strategies;

use gwa_core::{
    entity::EntityKind,
    header::RecordHeader,
    record::{Assembly, Element, LoadBeam, Member, Node, Record},
};

use crate::{
    Context,
    error::{Diagnostic, ErrorCode, Result},
    fields::{FieldCursor, FieldWriter},
    list::{self, IndexList, ListScope},
    pipeline::Step,
};

/// A record type the codec can read and write.
pub trait GwaRecord: Sized + 'static {
    /// Schema version read and written.
    const VERSION: i32;

    /// Keywords handled by this type, in canonical spelling.
    const KEYWORDS: &'static [&'static str];

    /// Field grammar after the name, in wire order.
    const STEPS: &'static [Step<Self>];

    /// An empty record for `keyword`, ready to be filled by [`STEPS`](Self::STEPS).
    ///
    /// `keyword` is one of [`KEYWORDS`](Self::KEYWORDS).
    fn blank(keyword: &str, header: RecordHeader) -> Option<Self>;

    fn header(&self) -> &RecordHeader;

    /// Keyword this record is written with.
    fn keyword(&self) -> &'static str;
}

/// Keywords of every record type, for dispatch.
pub fn known_keywords() -> impl Iterator<Item = &'static str> {
    [
        Node::KEYWORDS,
        Element::KEYWORDS,
        Member::KEYWORDS,
        Assembly::KEYWORDS,
        LoadBeam::KEYWORDS,
    ]
    .into_iter()
    .flatten()
    .copied()
}

/// Index space of the records written with `keyword`, ignoring case.
pub fn keyword_kind(keyword: &str) -> Option<EntityKind> {
    let handles = |keywords: &[&str]| keywords.iter().any(|k| k.eq_ignore_ascii_case(keyword));
    [
        (Node::KEYWORDS, EntityKind::Node),
        (Element::KEYWORDS, EntityKind::Element),
        (Member::KEYWORDS, EntityKind::Member),
        (Assembly::KEYWORDS, EntityKind::Assembly),
        (LoadBeam::KEYWORDS, EntityKind::LoadBeam),
    ]
    .into_iter()
    .find_map(|(keywords, kind)| handles(keywords).then_some(kind))
}

/// Decode any known record, dispatching on the keyword.
///
/// # Errors
///
/// Returns `E104` for keywords no record type handles, and the errors of
/// [`decode_record`](crate::decode_record) otherwise.
pub fn decode_any(line: &str, context: &Context<'_>) -> Result<Record> {
    let (keyword, _) = crate::peek_keyword(line, context.delimiter())?;
    let handles = |keywords: &[&str]| keywords.iter().any(|k| k.eq_ignore_ascii_case(&keyword));

    if handles(Node::KEYWORDS) {
        crate::decode_record::<Node>(line, context).map(Record::Node)
    } else if handles(Element::KEYWORDS) {
        crate::decode_record::<Element>(line, context).map(Record::Element)
    } else if handles(Member::KEYWORDS) {
        crate::decode_record::<Member>(line, context).map(Record::Member)
    } else if handles(Assembly::KEYWORDS) {
        crate::decode_record::<Assembly>(line, context).map(Record::Assembly)
    } else if handles(LoadBeam::KEYWORDS) {
        crate::decode_record::<LoadBeam>(line, context).map(Record::LoadBeam)
    } else {
        Err(unknown_keyword(&keyword))
    }
}

/// Encode any record.
pub fn encode_any(record: &Record, context: &Context<'_>) -> Result<String> {
    match record {
        Record::Node(r) => crate::encode_record(r, context),
        Record::Element(r) => crate::encode_record(r, context),
        Record::Member(r) => crate::encode_record(r, context),
        Record::Assembly(r) => crate::encode_record(r, context),
        Record::LoadBeam(r) => crate::encode_record(r, context),
    }
}

fn unknown_keyword(keyword: &str) -> Diagnostic {
    Diagnostic::error(format!("unknown keyword `{keyword}`"))
        .with_code(ErrorCode::E104)
        .with_help(format!(
            "known keywords are {}",
            known_keywords().collect::<Vec<_>>().join(", ")
        ))
}

/// Consume a list field resolved against `scope`.
fn read_list(
    cursor: &mut FieldCursor<'_>,
    field: &str,
    scope: ListScope,
    context: &Context<'_>,
) -> Result<IndexList> {
    let token = cursor.next(field)?;
    list::parse_list(token.text(), scope, context.resolver())
        .map_err(|err| list::decode_error(err, token, field))
}

/// Append a list field resolved against `scope`.
fn write_list(
    writer: &mut FieldWriter,
    field: &'static str,
    indices: &[i32],
    group: bool,
    scope: ListScope,
    context: &Context<'_>,
) -> Result<()> {
    let text = list::format_list(indices, group, scope, context.resolver())
        .map_err(|err| list::encode_error(err, field))?;
    writer.push(field, text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_kind() {
        assert_eq!(keyword_kind("NODE"), Some(EntityKind::Node));
        assert_eq!(keyword_kind("memb"), Some(EntityKind::Member));
        assert_eq!(keyword_kind("LOAD_BEAM_TRILIN"), Some(EntityKind::LoadBeam));
        assert_eq!(keyword_kind("PROP_SEC"), None);
    }

    #[test]
    fn test_known_keywords_are_unique() {
        let keywords: Vec<_> = known_keywords().collect();
        let mut unique = keywords.clone();
        unique.sort_unstable();
        unique.dedup();

        assert_eq!(keywords.len(), 9);
        assert_eq!(unique.len(), keywords.len());
    }
}
