//! Validity checks and point location for polygonal geometry.
//!
//! These are brute-force (quadratic in the vertex count) and meant for tests,
//! diagnostics and the CLI `--check` flag; the hull itself is valid by
//! construction and never calls them.

use super::predicates::{locate_in_ring, Location, SegmentIntersection};
use super::{Coordinate, Geometry, LineSegment, Polygon, Ring};

/// Why a geometry is not valid.
#[derive(Clone, Debug, PartialEq)]
pub enum Invalidity {
    /// Two non-adjacent edges of one ring meet.
    SelfIntersection(Coordinate),
    /// Edges of two rings cross or overlap.
    RingCrossing(Coordinate),
    HoleOutsideShell(usize),
    NestedHoles(usize, usize),
    OverlappingPolygons(usize, usize),
}

/// Locate `p` relative to a polygon (holes excluded from the interior).
pub fn locate(p: &Coordinate, poly: &Polygon) -> Location {
    match locate_in_ring(p, poly.shell.coords()) {
        Location::Exterior => return Location::Exterior,
        Location::Boundary => return Location::Boundary,
        Location::Interior => {}
    }
    for hole in &poly.holes {
        match locate_in_ring(p, hole.coords()) {
            Location::Interior => return Location::Exterior,
            Location::Boundary => return Location::Boundary,
            Location::Exterior => {}
        }
    }
    Location::Interior
}

/// Locate `p` relative to a (multi)polygon.
pub fn locate_in_geometry(p: &Coordinate, geom: &Geometry) -> Location {
    let mut result = Location::Exterior;
    for poly in geom.polygons() {
        match locate(p, poly) {
            Location::Interior => return Location::Interior,
            Location::Boundary => result = Location::Boundary,
            Location::Exterior => {}
        }
    }
    result
}

/// Every vertex of `inner` lies in `outer` (interior or boundary).
pub fn covers_vertices(outer: &Geometry, inner: &Geometry) -> bool {
    inner
        .polygons()
        .iter()
        .flat_map(|p| p.rings())
        .flat_map(|r| r.vertices())
        .all(|v| locate_in_geometry(v, outer) != Location::Exterior)
}

/// Ring edges with repeated consecutive points collapsed, so no edge has zero length.
fn edges(ring: &Ring) -> Vec<LineSegment> {
    let mut pts = ring.coords().to_vec();
    pts.dedup_by(|a, b| a.equals_2d(b));
    pts.windows(2)
        .map(|w| LineSegment::new(w[0], w[1]))
        .collect()
}

/// Ring is simple: adjacent edges meet only at their shared vertex, other
/// edges do not meet at all. Repeated points are allowed.
pub fn check_ring_simple(ring: &Ring) -> Result<(), Invalidity> {
    let segs = edges(ring);
    let n = segs.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            let x = segs[i].intersection(&segs[j]);
            match x {
                SegmentIntersection::None => {}
                SegmentIntersection::Point(p) if adjacent => {
                    let shared = if j == i + 1 { segs[j].p0 } else { segs[i].p0 };
                    if !p.equals_2d(&shared) {
                        return Err(Invalidity::SelfIntersection(p));
                    }
                }
                SegmentIntersection::Point(p) | SegmentIntersection::Collinear(p, _) => {
                    return Err(Invalidity::SelfIntersection(p));
                }
            }
        }
    }
    Ok(())
}

/// Edges of two rings neither cross properly nor overlap; single-point
/// touches at a vertex are allowed.
pub fn check_rings_disjoint(a: &Ring, b: &Ring) -> Result<(), Invalidity> {
    let env_b = b.envelope();
    let edges_b = edges(b);
    for sa in edges(a) {
        if !sa.envelope().intersects(&env_b) {
            continue;
        }
        for sb in &edges_b {
            match sa.intersection(sb) {
                SegmentIntersection::None => {}
                SegmentIntersection::Collinear(p, _) => {
                    return Err(Invalidity::RingCrossing(p));
                }
                SegmentIntersection::Point(p) => {
                    let at_vertex = [sa.p0, sa.p1, sb.p0, sb.p1]
                        .iter()
                        .any(|v| v.equals_2d(&p));
                    if !at_vertex {
                        return Err(Invalidity::RingCrossing(p));
                    }
                }
            }
        }
    }
    Ok(())
}

/// Some vertex of `ring` strictly inside `container` (boundary vertices skipped).
fn has_vertex_inside(ring: &Ring, container: &Ring) -> bool {
    ring.vertices()
        .iter()
        .any(|v| locate_in_ring(v, container.coords()) == Location::Interior)
}

fn has_vertex_outside(ring: &Ring, container: &Ring) -> bool {
    ring.vertices()
        .iter()
        .any(|v| locate_in_ring(v, container.coords()) == Location::Exterior)
}

pub fn check_polygon(poly: &Polygon) -> Result<(), Invalidity> {
    for ring in poly.rings() {
        check_ring_simple(ring)?;
    }
    for (i, hole) in poly.holes.iter().enumerate() {
        check_rings_disjoint(&poly.shell, hole)?;
        if has_vertex_outside(hole, &poly.shell) {
            return Err(Invalidity::HoleOutsideShell(i));
        }
        for (j, other) in poly.holes.iter().enumerate().skip(i + 1) {
            check_rings_disjoint(hole, other)?;
            if has_vertex_inside(hole, other) || has_vertex_inside(other, hole) {
                return Err(Invalidity::NestedHoles(i, j));
            }
        }
    }
    Ok(())
}

/// Full validity check; returns the first problem found.
pub fn check(geom: &Geometry) -> Result<(), Invalidity> {
    let polys = geom.polygons();
    for poly in polys {
        check_polygon(poly)?;
    }
    for i in 0..polys.len() {
        for j in (i + 1)..polys.len() {
            let (a, b) = (&polys[i], &polys[j]);
            if !a.shell.envelope().intersects(&b.shell.envelope()) {
                continue;
            }
            for ra in a.rings() {
                for rb in b.rings() {
                    check_rings_disjoint(ra, rb)?;
                }
            }
            let a_in_b = a
                .shell
                .vertices()
                .iter()
                .any(|v| locate(v, b) == Location::Interior);
            let b_in_a = b
                .shell
                .vertices()
                .iter()
                .any(|v| locate(v, a) == Location::Interior);
            if a_in_b || b_in_a {
                return Err(Invalidity::OverlappingPolygons(i, j));
            }
        }
    }
    Ok(())
}

#[inline]
pub fn is_valid(geom: &Geometry) -> bool {
    check(geom).is_ok()
}
