//! Entity kinds and index universes.
//!
//! Records refer to each other by integer index. Expanding `all` in a list
//! field, or collapsing a complete list back to `all`, needs the set of
//! indices currently known for the referenced kind. The codec never owns
//! that set: callers pass an [`IndexResolver`] into every decode and encode
//! call.

use std::collections::{BTreeMap, BTreeSet};

/// Index spaces that list fields can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Node,
    Element,
    Member,
    Assembly,
    LoadBeam,
    GridPlane,
}

/// Supplies the universe of known indices for an entity kind.
///
/// Implementations must return a consistent snapshot for the duration of one
/// decode or encode call. The codec calls this synchronously and never
/// caches the result between calls.
pub trait IndexResolver {
    /// All indices currently known for `kind`, in any order.
    fn known_indices(&self, kind: EntityKind) -> Vec<i32>;
}

impl<T: IndexResolver + ?Sized> IndexResolver for &T {
    fn known_indices(&self, kind: EntityKind) -> Vec<i32> {
        (**self).known_indices(kind)
    }
}

/// An owned, read-only snapshot of known indices per entity kind.
///
/// # Example
///
/// ```
/// # use gwa_core::entity::{EntityKind, IndexResolver, IndexUniverse};
/// let universe = IndexUniverse::new().with(EntityKind::Node, [3, 1, 2]);
///
/// assert_eq!(universe.known_indices(EntityKind::Node), vec![1, 2, 3]);
/// assert!(universe.known_indices(EntityKind::Element).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexUniverse {
    indices: BTreeMap<EntityKind, BTreeSet<i32>>,
}

impl IndexUniverse {
    /// Create an empty universe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `indices` to `kind` and return the universe.
    pub fn with(mut self, kind: EntityKind, indices: impl IntoIterator<Item = i32>) -> Self {
        self.indices.entry(kind).or_default().extend(indices);
        self
    }

    /// Record `index` as known for `kind`. Returns `false` if it was already known.
    pub fn insert(&mut self, kind: EntityKind, index: i32) -> bool {
        self.indices.entry(kind).or_default().insert(index)
    }

    /// Whether `index` is known for `kind`.
    pub fn contains(&self, kind: EntityKind, index: i32) -> bool {
        self.indices
            .get(&kind)
            .is_some_and(|set| set.contains(&index))
    }

    /// Number of indices known for `kind`.
    pub fn len(&self, kind: EntityKind) -> usize {
        self.indices.get(&kind).map_or(0, BTreeSet::len)
    }

    /// `true` when no index is known for any kind.
    pub fn is_empty(&self) -> bool {
        self.indices.values().all(BTreeSet::is_empty)
    }
}

impl IndexResolver for IndexUniverse {
    fn known_indices(&self, kind: EntityKind) -> Vec<i32> {
        self.indices
            .get(&kind)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }
}
