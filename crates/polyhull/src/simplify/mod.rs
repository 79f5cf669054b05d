//! Topology-preserving Douglas–Peucker simplification.
//!
//! Purpose
//! - Simplify line strings and polygon rings within a distance tolerance
//!   without introducing crossings between any of the input lines.
//!
//! Model
//! - All input segments go into one `LineSegmentIndex` tagged with
//!   `(line, position)`; flattened output segments go into a second index.
//! - A section `[i, j]` is flattened to `i → j` only when the furthest vertex
//!   is within tolerance, the line keeps its minimum size, and the new segment
//!   has no interior intersection with an output segment or with an input
//!   segment outside the section. Otherwise the section splits at the furthest
//!   vertex.
//!
//! References
//! - Code cross-refs: `index::LineSegmentIndex`,
//!   `geom::SegmentIntersection::is_interior`

mod simplifier;
mod tagged_line;

pub use simplifier::TopologyPreservingSimplifier;
pub use tagged_line::{SegmentTag, TaggedLineString};

use crate::error::Result;
use crate::geom::{Geometry, LineString};

/// Simplify every ring of `geom`; kind and polygon order are kept.
pub fn simplify(geom: &Geometry, tolerance: f64) -> Result<Geometry> {
    TopologyPreservingSimplifier::new(tolerance)?.simplify_geometry(geom)
}

/// Simplify a set of line strings jointly.
pub fn simplify_lines(lines: &[LineString], tolerance: f64) -> Result<Vec<LineString>> {
    TopologyPreservingSimplifier::new(tolerance)?.simplify_lines(lines)
}
