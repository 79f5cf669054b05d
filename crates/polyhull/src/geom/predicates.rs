//! Geometric predicates on coordinates.
//!
//! Orientation is decided by `robust::orient2d` (adaptive exact arithmetic),
//! so the combinatorial tests below (triangle containment, segment
//! intersection, point location) are exact for finite inputs. Constructed
//! intersection points and distances are plain `f64`.
//!
//! References
//! - Code cross-refs: `hull::Corner` (triangle test), `index::LineSegmentIndex`
//!   callers (segment tests), `validity` (point location).

use nalgebra::Vector2;
use robust::{orient2d, Coord};

use super::Coordinate;

/// Turn direction of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

#[inline]
fn rc(c: &Coordinate) -> Coord<f64> {
    Coord { x: c.x, y: c.y }
}

/// Orientation of `r` relative to the directed line `p → q`.
#[inline]
pub fn orientation(p: &Coordinate, q: &Coordinate, r: &Coordinate) -> Orientation {
    let det = orient2d(rc(p), rc(q), rc(r));
    if det > 0.0 {
        Orientation::CounterClockwise
    } else if det < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Unsigned area of triangle `abc`.
#[inline]
pub fn triangle_area(a: &Coordinate, b: &Coordinate, c: &Coordinate) -> f64 {
    let ab = b.xy() - a.xy();
    let ac = c.xy() - a.xy();
    (ab.x * ac.y - ab.y * ac.x).abs() / 2.0
}

/// Shoelace area of a closed coordinate ring; positive for counter-clockwise.
pub fn signed_ring_area(ring: &[Coordinate]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    // Shift to the first point to limit cancellation on large offsets.
    let o = ring[0].xy();
    let mut sum = 0.0;
    for w in ring.windows(2) {
        let a = w[0].xy() - o;
        let b = w[1].xy() - o;
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

/// Whether a closed ring runs counter-clockwise.
///
/// Decided by the orientation at the lowest-leftmost vertex, which is exact
/// and unaffected by the magnitude of the area.
pub fn is_ccw(ring: &[Coordinate]) -> bool {
    let n = ring.len().saturating_sub(1);
    if n < 3 {
        return false;
    }
    let mut lo = 0;
    for i in 1..n {
        let (a, b) = (&ring[i], &ring[lo]);
        if a.y < b.y || (a.y == b.y && a.x < b.x) {
            lo = i;
        }
    }
    // Walk past duplicates of the pivot on both sides.
    let mut prev = (lo + n - 1) % n;
    while prev != lo && ring[prev].equals_2d(&ring[lo]) {
        prev = (prev + n - 1) % n;
    }
    let mut next = (lo + 1) % n;
    while next != lo && ring[next].equals_2d(&ring[lo]) {
        next = (next + 1) % n;
    }
    match orientation(&ring[prev], &ring[lo], &ring[next]) {
        Orientation::CounterClockwise => true,
        Orientation::Clockwise => false,
        // Flat spike at the pivot: fall back to the shoelace sign.
        Orientation::Collinear => signed_ring_area(ring) > 0.0,
    }
}

/// Whether `p` lies inside or on the boundary of triangle `abc`.
///
/// A degenerate (collinear) triangle contains every point of its supporting
/// line; callers restrict candidates to the triangle's envelope.
pub fn triangle_intersects(a: &Coordinate, b: &Coordinate, c: &Coordinate, p: &Coordinate) -> bool {
    let exterior = if orientation(a, b, c) == Orientation::CounterClockwise {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    };
    orientation(a, b, p) != exterior
        && orientation(b, c, p) != exterior
        && orientation(c, a, p) != exterior
}

/// `q` lies within the bounding box of `p`–`r` (used once collinearity is known).
#[inline]
fn in_span(p: &Coordinate, q: &Coordinate, r: &Coordinate) -> bool {
    q.x >= p.x.min(r.x) && q.x <= p.x.max(r.x) && q.y >= p.y.min(r.y) && q.y <= p.y.max(r.y)
}

/// Closed segments `p1p2` and `q1q2` share at least one point
/// (proper crossing, touching at an endpoint, or collinear overlap).
pub fn segments_intersect(
    p1: &Coordinate,
    p2: &Coordinate,
    q1: &Coordinate,
    q2: &Coordinate,
) -> bool {
    let o1 = orientation(p1, p2, q1);
    let o2 = orientation(p1, p2, q2);
    let o3 = orientation(q1, q2, p1);
    let o4 = orientation(q1, q2, p2);

    let any_collinear = [o1, o2, o3, o4].contains(&Orientation::Collinear);
    if !any_collinear {
        return o1 != o2 && o3 != o4;
    }
    // A collinear endpoint is the only place a crossing can happen.
    (o1 == Orientation::Collinear && in_span(p1, q1, p2))
        || (o2 == Orientation::Collinear && in_span(p1, q2, p2))
        || (o3 == Orientation::Collinear && in_span(q1, p1, q2))
        || (o4 == Orientation::Collinear && in_span(q1, p2, q2))
}

/// Result of intersecting two closed segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentIntersection {
    None,
    Point(Coordinate),
    /// Collinear overlap between the two given points (may coincide).
    Collinear(Coordinate, Coordinate),
}

impl SegmentIntersection {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, SegmentIntersection::None)
    }

    /// Some intersection point is not an endpoint of `p1p2` or not an endpoint
    /// of `q1q2`.
    pub fn is_interior(
        &self,
        p1: &Coordinate,
        p2: &Coordinate,
        q1: &Coordinate,
        q2: &Coordinate,
    ) -> bool {
        let interior_to = |x: &Coordinate, a: &Coordinate, b: &Coordinate| {
            !(x.equals_2d(a) || x.equals_2d(b))
        };
        let test = |x: &Coordinate| interior_to(x, p1, p2) || interior_to(x, q1, q2);
        match self {
            SegmentIntersection::None => false,
            SegmentIntersection::Point(x) => test(x),
            SegmentIntersection::Collinear(a, b) => test(a) || test(b),
        }
    }
}

/// Intersection of closed segments `p1p2` and `q1q2`.
///
/// Endpoint touches return the exact shared endpoint; proper crossings return
/// a computed point.
pub fn segment_intersection(
    p1: &Coordinate,
    p2: &Coordinate,
    q1: &Coordinate,
    q2: &Coordinate,
) -> SegmentIntersection {
    if !segments_intersect(p1, p2, q1, q2) {
        return SegmentIntersection::None;
    }
    let o1 = orientation(p1, p2, q1);
    let o2 = orientation(p1, p2, q2);
    if o1 == Orientation::Collinear && o2 == Orientation::Collinear {
        return collinear_overlap(p1, p2, q1, q2);
    }
    // Exact endpoint touches first.
    for (x, a, b) in [(q1, p1, p2), (q2, p1, p2), (p1, q1, q2), (p2, q1, q2)] {
        if orientation(a, b, x) == Orientation::Collinear && in_span(a, x, b) {
            return SegmentIntersection::Point(*x);
        }
    }
    let r = p2.xy() - p1.xy();
    let s = q2.xy() - q1.xy();
    let denom = cross(r, s);
    let t = cross(q1.xy() - p1.xy(), s) / denom;
    let x = p1.xy() + r * t;
    SegmentIntersection::Point(Coordinate::new(x.x, x.y))
}

fn collinear_overlap(
    p1: &Coordinate,
    p2: &Coordinate,
    q1: &Coordinate,
    q2: &Coordinate,
) -> SegmentIntersection {
    // Project on the dominant axis of p1p2 (or q1q2 if p is a point).
    let (a, b) = if p1.equals_2d(p2) { (q1, q2) } else { (p1, p2) };
    let use_x = (b.x - a.x).abs() >= (b.y - a.y).abs();
    let key = |c: &Coordinate| if use_x { c.x } else { c.y };
    let (plo, phi) = if key(p1) <= key(p2) { (p1, p2) } else { (p2, p1) };
    let (qlo, qhi) = if key(q1) <= key(q2) { (q1, q2) } else { (q2, q1) };
    let lo = if key(plo) >= key(qlo) { plo } else { qlo };
    let hi = if key(phi) <= key(qhi) { phi } else { qhi };
    if lo.equals_2d(hi) {
        SegmentIntersection::Point(*lo)
    } else {
        SegmentIntersection::Collinear(*lo, *hi)
    }
}

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Euclidean distance from `p` to the closed segment `ab`.
pub fn point_segment_distance(p: &Coordinate, a: &Coordinate, b: &Coordinate) -> f64 {
    let ab = b.xy() - a.xy();
    let ap = p.xy() - a.xy();
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return ap.norm();
    }
    let t = (ap.dot(&ab) / len2).clamp(0.0, 1.0);
    (ap - ab * t).norm()
}

/// Topological location of a point relative to an area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Interior,
    Boundary,
    Exterior,
}

/// Locate `p` relative to a closed ring (crossing-number rule; the boundary
/// is detected exactly).
pub fn locate_in_ring(p: &Coordinate, ring: &[Coordinate]) -> Location {
    let mut crossings = 0usize;
    for w in ring.windows(2) {
        let (a, b) = (&w[0], &w[1]);
        if orientation(a, b, p) == Orientation::Collinear && in_span(a, p, b) {
            return Location::Boundary;
        }
        // Half-open rule on y avoids double counting shared vertices.
        if (a.y > p.y) != (b.y > p.y) {
            let o = orientation(a, b, p);
            let upward = b.y > a.y;
            if (upward && o == Orientation::CounterClockwise)
                || (!upward && o == Orientation::Clockwise)
            {
                crossings += 1;
            }
        }
    }
    if crossings % 2 == 1 {
        Location::Interior
    } else {
        Location::Exterior
    }
}
