//! Box-keyed spatial index backends.

use rstar::{RTree, RTreeObject, AABB};

use crate::geom::Envelope;

/// An item stored under its envelope.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexEntry<T> {
    pub envelope: Envelope,
    pub item: T,
}

impl<T> RTreeObject for IndexEntry<T> {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope.to_aabb()
    }
}

/// Insert/remove/query by axis-aligned box.
///
/// `query` may return entries whose envelope does not overlap the probe
/// (coarse backends), but never misses one that does.
pub trait SpatialIndex<T> {
    fn insert(&mut self, envelope: Envelope, item: T);
    /// Remove one entry equal to `(envelope, item)`; `false` if none matched.
    fn remove(&mut self, envelope: &Envelope, item: &T) -> bool;
    fn query(&self, envelope: &Envelope) -> Vec<&IndexEntry<T>>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn clear(&mut self);
}

/// Dynamic R-tree backend.
#[derive(Clone)]
pub struct RTreeIndex<T> {
    tree: RTree<IndexEntry<T>>,
}

impl<T> std::fmt::Debug for RTreeIndex<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RTreeIndex")
            .field("len", &self.tree.size())
            .finish()
    }
}

impl<T> Default for RTreeIndex<T> {
    fn default() -> Self {
        Self { tree: RTree::new() }
    }
}

impl<T> RTreeIndex<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: PartialEq> SpatialIndex<T> for RTreeIndex<T> {
    fn insert(&mut self, envelope: Envelope, item: T) {
        self.tree.insert(IndexEntry { envelope, item });
    }

    fn remove(&mut self, envelope: &Envelope, item: &T) -> bool {
        self.tree
            .remove_with_selection_function(EntrySelector { envelope, item })
            .is_some()
    }

    fn query(&self, envelope: &Envelope) -> Vec<&IndexEntry<T>> {
        if envelope.is_null() {
            return Vec::new();
        }
        self.tree
            .locate_in_envelope_intersecting(&envelope.to_aabb())
            .collect()
    }

    fn len(&self) -> usize {
        self.tree.size()
    }

    fn clear(&mut self) {
        self.tree = RTree::new();
    }
}

/// Selects exactly one stored entry for `RTree::remove_with_selection_function`.
struct EntrySelector<'a, T> {
    envelope: &'a Envelope,
    item: &'a T,
}

impl<T: PartialEq> rstar::SelectionFunction<IndexEntry<T>> for EntrySelector<'_, T> {
    fn should_unpack_parent(&self, parent_envelope: &AABB<[f64; 2]>) -> bool {
        use rstar::Envelope as _;
        parent_envelope.contains_envelope(&self.envelope.to_aabb())
    }

    fn should_unpack_leaf(&self, leaf: &IndexEntry<T>) -> bool {
        leaf.envelope == *self.envelope && leaf.item == *self.item
    }
}

/// Linear-scan backend: every query returns every entry.
///
/// Useful as a reference in tests and for very small inputs.
#[derive(Clone, Debug)]
pub struct ScanIndex<T> {
    entries: Vec<IndexEntry<T>>,
}

impl<T> Default for ScanIndex<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> ScanIndex<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: PartialEq> SpatialIndex<T> for ScanIndex<T> {
    fn insert(&mut self, envelope: Envelope, item: T) {
        self.entries.push(IndexEntry { envelope, item });
    }

    fn remove(&mut self, envelope: &Envelope, item: &T) -> bool {
        match self
            .entries
            .iter()
            .position(|e| e.envelope == *envelope && e.item == *item)
        {
            Some(pos) => {
                self.entries.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    fn query(&self, _envelope: &Envelope) -> Vec<&IndexEntry<T>> {
        self.entries.iter().collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
