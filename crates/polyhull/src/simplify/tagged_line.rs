//! A line being simplified: input vertices plus accumulated output segments.

use crate::geom::{Coordinate, LineSegment};

/// Origin of a segment: line id and the position of its first vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SegmentTag {
    pub line: usize,
    pub pos: usize,
}

#[derive(Clone, Debug)]
pub struct TaggedLineString {
    id: usize,
    coords: Vec<Coordinate>,
    min_size: usize,
    result: Vec<LineSegment<SegmentTag>>,
}

impl TaggedLineString {
    pub fn new(id: usize, coords: Vec<Coordinate>, min_size: usize) -> Self {
        Self {
            id,
            coords,
            min_size,
            result: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    #[inline]
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Input segment starting at vertex `i`.
    pub fn segment(&self, i: usize) -> LineSegment<SegmentTag> {
        LineSegment::tagged(
            self.coords[i],
            self.coords[i + 1],
            SegmentTag { line: self.id, pos: i },
        )
    }

    pub fn segments(&self) -> impl Iterator<Item = LineSegment<SegmentTag>> + '_ {
        (0..self.coords.len().saturating_sub(1)).map(|i| self.segment(i))
    }

    pub(crate) fn push_result(&mut self, seg: LineSegment<SegmentTag>) {
        self.result.push(seg);
    }

    /// Output points so far (segment start points plus the final end point).
    pub fn result_size(&self) -> usize {
        if self.result.is_empty() {
            0
        } else {
            self.result.len() + 1
        }
    }

    pub fn result_coords(&self) -> Vec<Coordinate> {
        let mut out: Vec<Coordinate> = self.result.iter().map(|s| s.p0).collect();
        if let Some(last) = self.result.last() {
            out.push(last.p1);
        }
        out
    }
}
