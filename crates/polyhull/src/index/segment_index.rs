//! Segment-level facade over a `SpatialIndex`.

use tracing::trace;

use super::{RTreeIndex, SpatialIndex};
use crate::geom::{Coordinate, Envelope, LineSegment};

/// Index of tagged line segments keyed by their envelopes.
///
/// Duplicates are kept as separate entries. Queries return owned copies so
/// callers may edit the index while iterating the result.
#[derive(Clone, Debug)]
pub struct LineSegmentIndex<T, I = RTreeIndex<LineSegment<T>>> {
    index: I,
    _tag: std::marker::PhantomData<T>,
}

impl<T> LineSegmentIndex<T, RTreeIndex<LineSegment<T>>>
where
    T: Clone + PartialEq,
{
    pub fn new() -> Self {
        Self::with_index(RTreeIndex::new())
    }
}

impl<T> Default for LineSegmentIndex<T, RTreeIndex<LineSegment<T>>>
where
    T: Clone + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, I> LineSegmentIndex<T, I>
where
    T: Clone + PartialEq,
    I: SpatialIndex<LineSegment<T>>,
{
    pub fn with_index(index: I) -> Self {
        Self {
            index,
            _tag: std::marker::PhantomData,
        }
    }

    pub fn add(&mut self, seg: LineSegment<T>) {
        self.index.insert(seg.envelope(), seg);
    }

    pub fn add_all<It>(&mut self, segs: It)
    where
        It: IntoIterator<Item = LineSegment<T>>,
    {
        for seg in segs {
            self.add(seg);
        }
    }

    /// Add every consecutive pair of `coords`, tagged by `tag(position)`.
    pub fn add_line<F>(&mut self, coords: &[Coordinate], mut tag: F)
    where
        F: FnMut(usize) -> T,
    {
        for (i, w) in coords.windows(2).enumerate() {
            self.add(LineSegment::tagged(w[0], w[1], tag(i)));
        }
    }

    /// Remove one entry equal to `seg`; `false` when it was never added.
    pub fn remove(&mut self, seg: &LineSegment<T>) -> bool {
        let removed = self.index.remove(&seg.envelope(), seg);
        if !removed {
            trace!(p0 = %seg.p0, p1 = %seg.p1, "remove: segment not in index");
        }
        removed
    }

    /// Segments whose envelope overlaps the envelope of `probe`.
    pub fn query<U>(&self, probe: &LineSegment<U>) -> Vec<LineSegment<T>> {
        self.query_envelope(&probe.envelope())
    }

    /// Segments whose envelope overlaps `env`.
    pub fn query_envelope(&self, env: &Envelope) -> Vec<LineSegment<T>> {
        self.index
            .query(env)
            .into_iter()
            .filter(|e| e.envelope.intersects(env))
            .map(|e| e.item.clone())
            .collect()
    }

    /// Like `query`, keeping only segments accepted by `keep`.
    pub fn query_with<U, F>(&self, probe: &LineSegment<U>, mut keep: F) -> Vec<LineSegment<T>>
    where
        F: FnMut(&LineSegment<T>) -> bool,
    {
        let env = probe.envelope();
        self.index
            .query(&env)
            .into_iter()
            .filter(|e| e.envelope.intersects(&env) && keep(&e.item))
            .map(|e| e.item.clone())
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn clear(&mut self) {
        self.index.clear();
    }
}
