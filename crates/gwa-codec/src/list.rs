//! GSA list syntax.
//!
//! A list field holds space-separated items:
//! - a positive integer;
//! - a range `a to b`, inclusive;
//! - `all`, every index in the universe of the list's entity kind.
//!
//! A leading `G_` (or a lone `G`) on the whole field, or a `G` on every
//! item, marks a group list. Plain and `G` items cannot be mixed. Group
//! lists resolve `all` against a second entity kind, which lets one field
//! refer to elements (plain) or members (group).
//!
//! Ranges are only an input convenience. Output lists are either `all` or
//! the plain indices.

use std::collections::BTreeSet;

use gwa_core::entity::{EntityKind, IndexResolver};
use thiserror::Error;

use crate::{
    error::{Diagnostic, ErrorCode},
    tokenizer::Token,
};

/// Ranges wider than this are rejected rather than expanded.
pub const MAX_RANGE_SPAN: i64 = 1_000_000;

/// A list item that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("`{0}` is not a list item")]
    InvalidItem(String),

    #[error("range `{start} to {end}` runs backwards")]
    ReversedRange { start: i32, end: i32 },

    #[error("range `{start} to {end}` spans more than {MAX_RANGE_SPAN} indices")]
    RangeTooLarge { start: i32, end: i32 },

    #[error("`to` must sit between two indices")]
    DanglingRange,

    #[error("plain and `G` items cannot be mixed in one list")]
    MixedGroup,

    #[error("index {0} cannot be written, list indices must be positive")]
    NegativeIndex(i32),
}

/// Which universes a list field resolves `all` against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListScope {
    pub plain: EntityKind,
    pub group: EntityKind,
}

impl ListScope {
    /// A scope where group lists resolve against the same kind as plain ones.
    pub const fn of(kind: EntityKind) -> Self {
        Self {
            plain: kind,
            group: kind,
        }
    }

    /// A scope with distinct plain and group kinds.
    pub const fn split(plain: EntityKind, group: EntityKind) -> Self {
        Self { plain, group }
    }

    fn kind(&self, group: bool) -> EntityKind {
        if group { self.group } else { self.plain }
    }
}

/// A parsed list: indices in input order and whether it was a group list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexList {
    pub indices: Vec<i32>,
    pub group: bool,
}

/// Parse a list field.
///
/// `0` items are dropped and duplicates are kept.
///
/// # Errors
///
/// Returns [`ListError`] for items that are not integers, reversed or
/// oversized ranges, a dangling `to`, or mixed plain and group items.
///
/// # Example
///
/// ```
/// # use gwa_codec::list::{ListScope, parse_list};
/// # use gwa_core::entity::{EntityKind, IndexUniverse};
/// let universe = IndexUniverse::new().with(EntityKind::Node, [1, 2, 3]);
/// let scope = ListScope::of(EntityKind::Node);
///
/// assert_eq!(parse_list("all", scope, &universe).unwrap().indices, vec![1, 2, 3]);
/// assert_eq!(parse_list("4 to 6 9", scope, &universe).unwrap().indices, vec![4, 5, 6, 9]);
/// ```
pub fn parse_list(
    text: &str,
    scope: ListScope,
    resolver: &dyn IndexResolver,
) -> Result<IndexList, ListError> {
    let text = text.trim();
    // `G10 1` starts with an item prefix, not a whole-field one.
    let (body, whole_group) = match text.strip_prefix("G_") {
        Some(rest) => (rest, true),
        None => match text.strip_prefix('G') {
            Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => (rest, true),
            _ => (text, false),
        },
    };

    let mut items = Vec::new();
    let mut item_group = None;
    for raw in body.split_whitespace() {
        if raw.eq_ignore_ascii_case("to") {
            items.push(raw);
            continue;
        }
        let (item, prefixed) = match raw.strip_prefix('G') {
            Some(rest) if !rest.is_empty() => (rest, true),
            _ => (raw, false),
        };
        if !whole_group && item_group.is_some_and(|group| group != prefixed) {
            return Err(ListError::MixedGroup);
        }
        item_group.get_or_insert(prefixed);
        items.push(item);
    }
    let group = whole_group || item_group.unwrap_or(false);

    let mut indices = Vec::new();
    let mut position = 0;
    while position < items.len() {
        let item = items[position];
        if item.eq_ignore_ascii_case("all") {
            indices.extend(resolver.known_indices(scope.kind(group)));
            position += 1;
            continue;
        }
        if item.eq_ignore_ascii_case("to") {
            return Err(ListError::DanglingRange);
        }

        let start = parse_item(item)?;
        match items.get(position + 1) {
            Some(next) if next.eq_ignore_ascii_case("to") => {
                let end = items
                    .get(position + 2)
                    .ok_or(ListError::DanglingRange)
                    .and_then(|end| parse_item(end))?;
                expand_range(start, end, &mut indices)?;
                position += 3;
            }
            _ => {
                indices.push(start);
                position += 1;
            }
        }
    }
    indices.retain(|index| *index != 0);

    log::trace!(items = items.len(), indices = indices.len(), group = group; "Parsed list");
    Ok(IndexList { indices, group })
}

fn parse_item(item: &str) -> Result<i32, ListError> {
    item.parse::<i32>()
        .ok()
        .filter(|value| *value >= 0)
        .ok_or_else(|| ListError::InvalidItem(item.to_string()))
}

fn expand_range(start: i32, end: i32, indices: &mut Vec<i32>) -> Result<(), ListError> {
    if start > end {
        return Err(ListError::ReversedRange { start, end });
    }
    if i64::from(end) - i64::from(start) >= MAX_RANGE_SPAN {
        return Err(ListError::RangeTooLarge { start, end });
    }
    indices.extend(start..=end);
    Ok(())
}

/// Format a list field.
///
/// Emits `all` when the indices, as a set, equal the universe of the list's
/// kind. Otherwise emits the indices, each with a `G` prefix for group
/// lists. A group list that is `all` or empty is written `G_all` or `G_` so
/// the group flag survives. `0` entries are dropped.
///
/// # Errors
///
/// Returns [`ListError::NegativeIndex`] for negative indices.
pub fn format_list(
    indices: &[i32],
    group: bool,
    scope: ListScope,
    resolver: &dyn IndexResolver,
) -> Result<String, ListError> {
    if let Some(negative) = indices.iter().find(|index| **index < 0) {
        return Err(ListError::NegativeIndex(*negative));
    }
    let wanted: BTreeSet<i32> = indices.iter().copied().filter(|i| *i != 0).collect();
    let universe: BTreeSet<i32> = resolver
        .known_indices(scope.kind(group))
        .into_iter()
        .filter(|i| *i > 0)
        .collect();

    let text = if wanted == universe {
        if group { "G_all".to_string() } else { "all".to_string() }
    } else if wanted.is_empty() {
        if group { "G_".to_string() } else { String::new() }
    } else {
        let prefix = if group { "G" } else { "" };
        indices
            .iter()
            .filter(|index| **index != 0)
            .map(|index| format!("{prefix}{index}"))
            .collect::<Vec<_>>()
            .join(" ")
    };
    Ok(text)
}

/// Attach the span of `token` to a list error from decoding.
pub(crate) fn decode_error(err: ListError, token: Token<'_>, field: &str) -> Diagnostic {
    Diagnostic::error(format!("invalid list in `{field}`: {err}"))
        .with_code(ErrorCode::E203)
        .with_label(token.span(), "invalid list")
        .with_help("lists hold indices, `a to b` ranges and `all`")
}

/// Turn a list error from encoding into a diagnostic.
pub(crate) fn encode_error(err: ListError, field: &str) -> Diagnostic {
    Diagnostic::error(format!("`{field}` cannot be written: {err}")).with_code(ErrorCode::E400)
}
