//! Line segments with a provenance tag.
//!
//! The tag is a plain handle (ring id + vertex positions, line id + segment
//! position, or `()`); a segment never borrows its owner, so index entries
//! stay valid while rings are edited.

use super::predicates::{segment_intersection, segments_intersect};
use super::{Coordinate, Envelope, SegmentIntersection};

/// Segment `p0 → p1` carrying a tag `T`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment<T = ()> {
    pub p0: Coordinate,
    pub p1: Coordinate,
    pub tag: T,
}

impl LineSegment<()> {
    #[inline]
    pub fn new(p0: Coordinate, p1: Coordinate) -> Self {
        Self { p0, p1, tag: () }
    }
}

impl<T> LineSegment<T> {
    #[inline]
    pub fn tagged(p0: Coordinate, p1: Coordinate, tag: T) -> Self {
        Self { p0, p1, tag }
    }

    #[inline]
    pub fn envelope(&self) -> Envelope {
        Envelope::from_points(&self.p0, &self.p1)
    }

    /// Closed-segment intersection test (cross, touch or overlap).
    #[inline]
    pub fn intersects<U>(&self, other: &LineSegment<U>) -> bool {
        segments_intersect(&self.p0, &self.p1, &other.p0, &other.p1)
    }

    #[inline]
    pub fn intersection<U>(&self, other: &LineSegment<U>) -> SegmentIntersection {
        segment_intersection(&self.p0, &self.p1, &other.p0, &other.p1)
    }

    /// The segments meet somewhere other than at shared endpoints.
    pub fn has_interior_intersection<U>(&self, other: &LineSegment<U>) -> bool {
        self.intersection(other)
            .is_interior(&self.p0, &self.p1, &other.p0, &other.p1)
    }
}
