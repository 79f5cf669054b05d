//! Outer and inner polygon hulls by greedy corner removal.
//!
//! Purpose
//! - Reduce the vertex count of a Polygon/MultiPolygon while keeping it
//!   valid and either covering the input (outer hull, non-negative target)
//!   or covered by it (inner hull, negative target).
//!
//! Model
//! - Each ring gets a min-priority queue of removable corners keyed by the
//!   area of the triangle they span. The cheapest corner is removed first if
//!   its triangle is empty of other geometry and the replacement edge crosses
//!   nothing; its neighbours are then re-queued.
//! - Outer rings run clockwise, inner rings counter-clockwise, and convex
//!   corners are never queued. In outer mode the shell is an outer ring and
//!   holes are inner rings; inner mode swaps the roles.
//! - A shared `LineSegmentIndex` over all rings is the only collision
//!   structure; it is kept in sync with every removal.
//!
//! Why this design
//! - Rings are arenas addressed by position (`RingId`, vertex index), so index
//!   tags and queued corners never dangle; stale corners are detected by
//!   comparing their recorded neighbours with the live links.
//! - Rejected corners are dropped for the rest of the computation. A corner
//!   re-created after a neighbour changes is a new candidate.
//!
//! References
//! - Code cross-refs: `PolygonHull`, `HullTarget`, `index::LineSegmentIndex`,
//!   `geom::predicates::triangle_intersects`

mod corner;
mod linked_ring;
mod polygon_hull;
mod ring_hull;
mod target;

pub use polygon_hull::PolygonHull;
pub use target::HullTarget;

use crate::error::Result;
use crate::geom::Geometry;

/// Position of a ring across the whole input (shells and holes, in order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RingId(pub usize);

/// Tag of a ring edge in the shared index: ring and vertex positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VertexTag {
    pub ring: RingId,
    pub from: usize,
    pub to: usize,
}

/// Hull keeping about `|vertex_num_fraction| · n` vertices per ring.
///
/// `vertex_num_fraction ∈ [-1, 1]`; negative values give an inner hull, `0`
/// the maximal outer reduction, `±1` the input unchanged.
pub fn hull(geom: &Geometry, vertex_num_fraction: f64) -> Result<Geometry> {
    PolygonHull::new(geom, HullTarget::VertexFraction(vertex_num_fraction))?.result()
}

/// Hull whose per-ring area change stays within
/// `(A_ring / A_polygon_rings) · |area_delta_ratio| · A_ring`.
///
/// Negative values give an inner hull; `0` returns the input unchanged.
pub fn hull_by_area_delta(geom: &Geometry, area_delta_ratio: f64) -> Result<Geometry> {
    PolygonHull::new(geom, HullTarget::AreaDeltaRatio(area_delta_ratio))?.result()
}
