//! Curated API surface (UNSTABLE).
//!
//! Important
//! - A convenience surface for callers that want one import path per concern.
//!   Breaking changes follow the crate version.

// Geometry containers and interchange
pub use crate::geom::{
    Coordinate, CoordinateSequence, Envelope, Geometry, LineSegment, LineString, MultiPolygon,
    Ordinate, Polygon, Ring,
};
// Exact predicates and validity
pub use crate::geom::predicates::{
    orientation, segment_intersection, segments_intersect, triangle_area, triangle_intersects,
    Location, Orientation, SegmentIntersection,
};
pub use crate::geom::validity::{
    check as check_validity, covers_vertices, is_valid, locate, Invalidity,
};
// Random polygons
pub use crate::geom::rand::{
    draw_polygon_radial, draw_polygon_with_hole, RadialCfg, ReplayToken as PolygonReplay,
    VertexCount,
};
// Segment index
pub use crate::index::{IndexEntry, LineSegmentIndex, RTreeIndex, ScanIndex, SpatialIndex};
// Hulls
pub use crate::hull::{hull, hull_by_area_delta, HullTarget, PolygonHull, RingId, VertexTag};
// Simplification
pub use crate::simplify::{
    simplify, simplify_lines, SegmentTag, TaggedLineString, TopologyPreservingSimplifier,
};
