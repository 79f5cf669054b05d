//! Removal candidates ordered by cost.

use std::cmp::Ordering;

use super::linked_ring::LinkedRing;
use crate::geom::predicates::{orientation, triangle_area};
use crate::geom::{Envelope, Orientation};

/// Vertex `index` with its neighbours at queueing time.
///
/// Ordered by area, then by vertex position in the processing-oriented ring,
/// so pops are deterministic.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Corner {
    pub index: usize,
    pub prev: usize,
    pub next: usize,
    pub area: f64,
}

impl Corner {
    /// Corner at live vertex `i`, or `None` when the turn is convex for the
    /// ring's processing orientation (removal would cut into the ring).
    pub fn at(ring: &LinkedRing, i: usize) -> Option<Corner> {
        let (prev, next) = ring.links(i)?;
        let (a, b, c) = (ring.coord(prev), ring.coord(i), ring.coord(next));
        if orientation(&a, &b, &c) == Orientation::Clockwise {
            return None;
        }
        Some(Corner {
            index: i,
            prev,
            next,
            area: triangle_area(&a, &b, &c),
        })
    }

    /// Neighbours unchanged since the corner was queued.
    #[inline]
    pub fn is_current(&self, ring: &LinkedRing) -> bool {
        ring.links(self.index) == Some((self.prev, self.next))
    }

    pub fn envelope(&self, ring: &LinkedRing) -> Envelope {
        let mut env = Envelope::from_points(&ring.coord(self.prev), &ring.coord(self.index));
        env.expand_to_include(&ring.coord(self.next));
        env
    }

    #[inline]
    pub fn is_vertex(&self, i: usize) -> bool {
        i == self.prev || i == self.index || i == self.next
    }
}

impl PartialEq for Corner {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Corner {}

impl PartialOrd for Corner {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Corner {
    fn cmp(&self, other: &Self) -> Ordering {
        self.area
            .total_cmp(&other.area)
            .then_with(|| self.index.cmp(&other.index))
    }
}
