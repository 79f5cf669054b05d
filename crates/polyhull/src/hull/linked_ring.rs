//! Ring vertices with removable doubly-linked adjacency.

use crate::error::{HullError, Result};
use crate::geom::{Coordinate, CoordinateSequence, Ring};

/// Vertices of a ring (closing point dropped) plus `(prev, next)` links.
///
/// Removed vertices keep their coordinate but lose their links, so positions
/// stay stable for index tags and queued corners.
#[derive(Clone, Debug)]
pub(crate) struct LinkedRing {
    vertices: CoordinateSequence,
    links: Vec<Option<(usize, usize)>>,
    size: usize,
}

impl LinkedRing {
    pub const MIN_SIZE: usize = 3;

    pub fn new(ring: &Ring) -> Self {
        let vertices: CoordinateSequence = ring.vertices().iter().copied().collect();
        let n = vertices.size();
        let links = (0..n).map(|i| Some(((i + n - 1) % n, (i + 1) % n))).collect();
        Self {
            vertices,
            links,
            size: n,
        }
    }

    /// Live vertices.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Original vertex count.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub fn coord(&self, i: usize) -> Coordinate {
        self.vertices.as_slice()[i]
    }

    /// `(prev, next)` of a live vertex; `None` once removed.
    #[inline]
    pub fn links(&self, i: usize) -> Option<(usize, usize)> {
        self.links.get(i).copied().flatten()
    }

    /// Unlink vertex `i`. Refuses to go below a triangle.
    pub fn remove(&mut self, i: usize) -> Result<()> {
        if i >= self.capacity() {
            return Err(HullError::IndexOutOfRange {
                pos: i,
                size: self.capacity(),
            });
        }
        if self.size <= Self::MIN_SIZE {
            return Err(HullError::DegenerateGeometry {
                min: Self::MIN_SIZE,
            });
        }
        let Some((prev, next)) = self.links[i] else {
            return Ok(());
        };
        if let Some(l) = self.links[prev].as_mut() {
            l.1 = next;
        }
        if let Some(l) = self.links[next].as_mut() {
            l.0 = prev;
        }
        self.links[i] = None;
        self.size -= 1;
        Ok(())
    }

    /// Live vertices in original order, closed.
    pub fn to_ring(&self) -> Result<Ring> {
        let mut seq: CoordinateSequence = self
            .vertices
            .iter()
            .zip(&self.links)
            .filter(|(_, link)| link.is_some())
            .map(|(c, _)| *c)
            .collect();
        let first = seq.get(0)?;
        seq.add(first);
        Ring::new(seq)
    }
}
