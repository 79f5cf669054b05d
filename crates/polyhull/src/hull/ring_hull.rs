//! Hull of a single ring against a shared segment index.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use super::corner::Corner;
use super::linked_ring::LinkedRing;
use super::{RingId, VertexTag};
use crate::error::Result;
use crate::geom::predicates::{segments_intersect, triangle_intersects};
use crate::geom::{LineSegment, Ring};
use crate::index::LineSegmentIndex;

pub(crate) type HullIndex = LineSegmentIndex<VertexTag>;

/// Greedy corner removal on one ring.
///
/// The ring is re-oriented on construction: clockwise when it is an outer
/// ring of the hull, counter-clockwise otherwise. Only non-convex corners of
/// that orientation are queued, so every removal grows an outer ring and
/// shrinks an inner one.
#[derive(Debug)]
pub(crate) struct RingHull {
    id: RingId,
    ring: LinkedRing,
    queue: BinaryHeap<Reverse<Corner>>,
    min_vertices: Option<usize>,
    max_area_delta: Option<f64>,
    area_delta: f64,
}

impl RingHull {
    pub fn new(id: RingId, ring: &Ring, is_outer: bool) -> Self {
        let oriented = if ring.is_ccw() == is_outer {
            ring.reversed()
        } else {
            ring.clone()
        };
        let ring = LinkedRing::new(&oriented);
        let queue = (0..ring.capacity())
            .filter_map(|i| Corner::at(&ring, i))
            .map(Reverse)
            .collect();
        Self {
            id,
            ring,
            queue,
            min_vertices: None,
            max_area_delta: None,
            area_delta: 0.0,
        }
    }

    pub fn set_min_vertices(&mut self, n: Option<usize>) {
        self.min_vertices = n;
    }

    pub fn set_max_area_delta(&mut self, d: Option<f64>) {
        self.max_area_delta = d;
    }

    #[inline]
    fn tag(&self, from: usize, to: usize) -> VertexTag {
        VertexTag {
            ring: self.id,
            from,
            to,
        }
    }

    fn edge(&self, from: usize, to: usize) -> LineSegment<VertexTag> {
        LineSegment::tagged(self.ring.coord(from), self.ring.coord(to), self.tag(from, to))
    }

    /// Current edges, for seeding the shared index.
    pub fn segments(&self) -> Vec<LineSegment<VertexTag>> {
        (0..self.ring.capacity())
            .filter_map(|i| self.ring.links(i).map(|(_, next)| self.edge(i, next)))
            .collect()
    }

    fn target_reached(&self, corner: &Corner) -> bool {
        if let Some(n) = self.min_vertices {
            if self.ring.size() < n {
                return true;
            }
        }
        if let Some(max) = self.max_area_delta {
            if self.area_delta + corner.area > max {
                return true;
            }
        }
        false
    }

    /// Remove corners until the target is met, the queue runs dry or the
    /// ring is a triangle.
    pub fn compute(&mut self, index: &mut HullIndex) -> Result<()> {
        let start = self.ring.size();
        let mut rejected = 0usize;
        while self.ring.size() > LinkedRing::MIN_SIZE {
            let Some(Reverse(corner)) = self.queue.pop() else {
                break;
            };
            if !corner.is_current(&self.ring) {
                continue;
            }
            if self.target_reached(&corner) {
                break;
            }
            if self.is_removable(&corner, index) {
                self.remove_corner(&corner, index)?;
            } else {
                rejected += 1;
                trace!(ring = self.id.0, vertex = corner.index, "corner rejected");
            }
        }
        debug!(
            ring = self.id.0,
            vertices_in = start,
            vertices_out = self.ring.size(),
            area_delta = self.area_delta,
            rejected,
            "ring hull"
        );
        Ok(())
    }

    /// No other edge or vertex lies in the corner triangle, and the
    /// replacement edge `prev → next` does not meet any foreign edge.
    fn is_removable(&self, corner: &Corner, index: &HullIndex) -> bool {
        let a = self.ring.coord(corner.prev);
        let b = self.ring.coord(corner.index);
        let c = self.ring.coord(corner.next);
        let env = corner.envelope(&self.ring);
        for seg in index.query_envelope(&env) {
            let own = seg.tag.ring == self.id;
            let (from, to) = (seg.tag.from, seg.tag.to);
            if own
                && ((from, to) == (corner.prev, corner.index)
                    || (from, to) == (corner.index, corner.next))
            {
                continue;
            }
            for (p, vi) in [(seg.p0, from), (seg.p1, to)] {
                if own && corner.is_vertex(vi) {
                    continue;
                }
                // A flat triangle contains its whole supporting line.
                if env.contains_point(&p) && triangle_intersects(&a, &b, &c, &p) {
                    return false;
                }
            }
            let incident = own
                && [from, to]
                    .iter()
                    .any(|&v| v == corner.prev || v == corner.next);
            if !incident && segments_intersect(&a, &c, &seg.p0, &seg.p1) {
                return false;
            }
        }
        true
    }

    fn remove_corner(&mut self, corner: &Corner, index: &mut HullIndex) -> Result<()> {
        let (prev, v, next) = (corner.prev, corner.index, corner.next);
        for seg in [self.edge(prev, v), self.edge(v, next)] {
            if !index.remove(&seg) {
                debug!(
                    ring = self.id.0,
                    from = seg.tag.from,
                    to = seg.tag.to,
                    "edge missing from index"
                );
            }
        }
        index.add(self.edge(prev, next));
        self.ring.remove(v)?;
        self.area_delta += corner.area;
        for i in [prev, next] {
            if let Some(c) = Corner::at(&self.ring, i) {
                self.queue.push(Reverse(c));
            }
        }
        Ok(())
    }

    pub fn to_ring(&self) -> Result<Ring> {
        self.ring.to_ring()
    }
}
