//! Hull of a polygon or multipolygon.

use tracing::debug;

use super::ring_hull::{HullIndex, RingHull};
use super::{HullTarget, RingId};
use crate::error::Result;
use crate::geom::{Geometry, Polygon};

/// Computes an outer or inner hull of polygonal geometry.
///
/// Every ring of every polygon goes into one segment index before any ring
/// is reduced, so rings cannot cross each other or their own earlier state.
/// Polygon grouping and order are preserved.
#[derive(Clone, Debug)]
pub struct PolygonHull<'a> {
    input: &'a Geometry,
    target: HullTarget,
}

impl<'a> PolygonHull<'a> {
    /// Validates `target` up front; nothing is computed yet.
    pub fn new(input: &'a Geometry, target: HullTarget) -> Result<Self> {
        Ok(Self {
            input,
            target: target.validate()?,
        })
    }

    pub fn result(&self) -> Result<Geometry> {
        if self.target.is_identity() {
            return Ok(self.input.clone());
        }
        let is_outer = self.target.is_outer();
        let mut index = HullIndex::new();
        let mut groups: Vec<Vec<RingHull>> = Vec::with_capacity(self.input.polygons().len());
        let mut next_id = 0usize;
        for poly in self.input.polygons() {
            let mut hulls = Vec::with_capacity(poly.num_rings());
            for (k, ring) in poly.rings().enumerate() {
                let ring_is_outer = if k == 0 { is_outer } else { !is_outer };
                let mut h = RingHull::new(RingId(next_id), ring, ring_is_outer);
                next_id += 1;
                h.set_min_vertices(self.target.min_vertices(ring.num_vertices()));
                h.set_max_area_delta(self.target.max_area_delta(ring.area()));
                index.add_all(h.segments());
                hulls.push(h);
            }
            groups.push(hulls);
        }
        debug!(
            target = ?self.target,
            polygons = groups.len(),
            rings = next_id,
            vertices = self.input.num_vertices(),
            "polygon hull"
        );

        let mut polys = Vec::with_capacity(groups.len());
        for hulls in &mut groups {
            let mut rings = Vec::with_capacity(hulls.len());
            for h in hulls.iter_mut() {
                h.compute(&mut index)?;
                rings.push(h.to_ring()?);
            }
            let mut rings = rings.into_iter();
            let Some(shell) = rings.next() else {
                continue;
            };
            polys.push(Polygon::new(shell, rings.collect()));
        }
        Ok(self.input.with_polygons(polys))
    }
}
