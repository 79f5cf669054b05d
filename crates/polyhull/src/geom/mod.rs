//! Planar geometry: coordinates, sequences, segments, rings and polygons.
//!
//! Purpose
//! - Plain value types shared by the segment index, the hull and the
//!   simplifier. Containers validate shape once on construction.
//! - Exact combinatorial predicates (`predicates`) on `robust::orient2d`.
//!
//! Why this design
//! - Coordinates are `Copy` values; rings are owned `Vec`s. Algorithms refer to
//!   vertices by position, never by pointer, so edits never invalidate handles.
//!
//! References
//! - Code cross-refs: `hull::PolygonHull`, `index::LineSegmentIndex`,
//!   `simplify::TopologyPreservingSimplifier`

mod coord;
mod envelope;
mod polygon;
pub mod predicates;
pub mod rand;
mod segment;
mod sequence;
pub mod validity;

pub use coord::{Coordinate, Ordinate};
pub use envelope::Envelope;
pub use polygon::{Geometry, LineString, MultiPolygon, Polygon, Ring};
pub use predicates::{Location, Orientation, SegmentIntersection};
pub use segment::LineSegment;
pub use sequence::CoordinateSequence;

#[cfg(test)]
mod tests;
