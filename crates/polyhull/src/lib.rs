//! Outer and inner hulls of polygons, plus the supporting geometry kit.
//!
//! Layout
//! - `geom`: coordinates, sequences, segments, rings, polygons, exact
//!   predicates, validity checks and a random polygon sampler.
//! - `index`: segment spatial index over an R-tree (or a linear scan).
//! - `hull`: vertex-fraction and area-delta hulls (`hull`, `hull_by_area_delta`).
//! - `simplify`: topology-preserving Douglas–Peucker.
//!
//! API Policy
//! - `api` and `prelude` are curated surfaces; module paths may move between
//!   versions.

pub mod api;
pub mod error;
pub mod geom;
pub mod hull;
pub mod index;
pub mod simplify;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{HullError, Result};
pub use geom::{Coordinate, Geometry, LineString, MultiPolygon, Polygon, Ring};
pub use hull::{hull, hull_by_area_delta, HullTarget, PolygonHull};
pub use simplify::{simplify, simplify_lines};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::rand::{
        draw_polygon_radial, draw_polygon_with_hole, RadialCfg, ReplayToken, VertexCount,
    };
    pub use crate::geom::validity::{covers_vertices, is_valid, locate};
    pub use crate::geom::{
        Coordinate, CoordinateSequence, Envelope, Geometry, LineSegment, LineString, Location,
        MultiPolygon, Ordinate, Polygon, Ring,
    };
    pub use crate::hull::{hull, hull_by_area_delta, HullTarget, PolygonHull};
    pub use crate::index::LineSegmentIndex;
    pub use crate::simplify::{simplify, simplify_lines, TopologyPreservingSimplifier};
    pub use crate::{HullError, Result};
}
