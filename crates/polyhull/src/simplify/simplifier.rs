//! Recursive section flattening against shared input/output indexes.

use tracing::{debug, trace};

use super::tagged_line::{SegmentTag, TaggedLineString};
use crate::error::{HullError, Result};
use crate::geom::predicates::point_segment_distance;
use crate::geom::{Coordinate, Geometry, LineSegment, LineString, Polygon, Ring};
use crate::index::LineSegmentIndex;

/// Minimum output size of a ring (closed, a triangle).
const RING_MIN_SIZE: usize = 4;
const LINE_MIN_SIZE: usize = 2;

/// Simplifies a collection of lines jointly so no two of them start to cross.
#[derive(Debug)]
pub struct TopologyPreservingSimplifier {
    tolerance: f64,
    input_index: LineSegmentIndex<SegmentTag>,
    output_index: LineSegmentIndex<SegmentTag>,
}

impl TopologyPreservingSimplifier {
    pub fn new(tolerance: f64) -> Result<Self> {
        if !(tolerance >= 0.0) || !tolerance.is_finite() {
            return Err(HullError::InvalidParameter {
                name: "distance_tolerance",
                value: tolerance,
                reason: "must be finite and non-negative",
            });
        }
        Ok(Self {
            tolerance,
            input_index: LineSegmentIndex::new(),
            output_index: LineSegmentIndex::new(),
        })
    }

    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Simplify `lines` in order; indexes are reset first.
    pub fn simplify_tagged(&mut self, lines: &mut [TaggedLineString]) {
        self.input_index.clear();
        self.output_index.clear();
        for line in lines.iter() {
            self.input_index.add_all(line.segments());
        }
        for line in lines.iter_mut() {
            let n = line.coords().len();
            if n >= 2 {
                self.simplify_section(line, 0, n - 1, 0);
            }
        }
    }

    pub fn simplify_lines(&mut self, lines: &[LineString]) -> Result<Vec<LineString>> {
        let mut tagged: Vec<TaggedLineString> = lines
            .iter()
            .enumerate()
            .map(|(id, l)| TaggedLineString::new(id, l.coords().to_vec(), LINE_MIN_SIZE))
            .collect();
        self.simplify_tagged(&mut tagged);
        let out = tagged
            .iter()
            .map(|t| LineString::from_coords(t.result_coords()))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            lines = lines.len(),
            points_in = lines.iter().map(LineString::num_points).sum::<usize>(),
            points_out = out.iter().map(LineString::num_points).sum::<usize>(),
            tolerance = self.tolerance,
            "simplified lines"
        );
        Ok(out)
    }

    pub fn simplify_geometry(&mut self, geom: &Geometry) -> Result<Geometry> {
        let rings: Vec<&Ring> = geom.polygons().iter().flat_map(|p| p.rings()).collect();
        let mut tagged: Vec<TaggedLineString> = rings
            .iter()
            .enumerate()
            .map(|(id, r)| TaggedLineString::new(id, r.coords().to_vec(), RING_MIN_SIZE))
            .collect();
        self.simplify_tagged(&mut tagged);

        let mut out_rings = Vec::with_capacity(rings.len());
        for (t, original) in tagged.iter().zip(&rings) {
            let coords = t.result_coords();
            if coords.len() < RING_MIN_SIZE {
                out_rings.push((*original).clone());
            } else {
                out_rings.push(Ring::from_coords(coords)?);
            }
        }
        let mut out_rings = out_rings.into_iter();
        let mut polys = Vec::with_capacity(geom.polygons().len());
        for poly in geom.polygons() {
            let mut take = out_rings.by_ref().take(poly.num_rings());
            let Some(shell) = take.next() else {
                continue;
            };
            polys.push(Polygon::new(shell, take.collect()));
        }
        let out = geom.with_polygons(polys);
        debug!(
            vertices_in = geom.num_vertices(),
            vertices_out = out.num_vertices(),
            tolerance = self.tolerance,
            "simplified geometry"
        );
        Ok(out)
    }

    fn simplify_section(&mut self, line: &mut TaggedLineString, i: usize, j: usize, depth: usize) {
        let depth = depth + 1;
        if i + 1 == j {
            // Single input segment: emitted as is, left in the input index.
            line.push_result(line.segment(i));
            return;
        }
        let mut flatten = true;
        if line.result_size() < line.min_size() && depth + 1 < line.min_size() {
            flatten = false;
        }
        let (furthest, distance) = furthest_point(line.coords(), i, j);
        if distance > self.tolerance {
            flatten = false;
        }
        if flatten {
            let candidate = LineSegment::new(line.coords()[i], line.coords()[j]);
            if self.has_bad_output_intersection(&candidate)
                || self.has_bad_input_intersection(line, i, j, &candidate)
            {
                trace!(line = line.id(), i, j, "flatten blocked by intersection");
                flatten = false;
            }
        }
        if flatten {
            let seg = self.flatten(line, i, j);
            line.push_result(seg);
            return;
        }
        self.simplify_section(line, i, furthest, depth);
        self.simplify_section(line, furthest, j, depth);
    }

    fn flatten(&mut self, line: &TaggedLineString, i: usize, j: usize) -> LineSegment<SegmentTag> {
        for k in i..j {
            self.input_index.remove(&line.segment(k));
        }
        let seg = LineSegment::tagged(
            line.coords()[i],
            line.coords()[j],
            SegmentTag {
                line: line.id(),
                pos: i,
            },
        );
        self.output_index.add(seg);
        seg
    }

    fn has_bad_output_intersection(&self, candidate: &LineSegment) -> bool {
        self.output_index
            .query(candidate)
            .iter()
            .any(|s| s.has_interior_intersection(candidate))
    }

    fn has_bad_input_intersection(
        &self,
        line: &TaggedLineString,
        i: usize,
        j: usize,
        candidate: &LineSegment,
    ) -> bool {
        self.input_index.query(candidate).iter().any(|s| {
            let in_section = s.tag.line == line.id() && s.tag.pos >= i && s.tag.pos < j;
            !in_section && s.has_interior_intersection(candidate)
        })
    }
}

/// Vertex in `(i, j)` furthest from segment `i → j`, with its distance.
fn furthest_point(pts: &[Coordinate], i: usize, j: usize) -> (usize, f64) {
    let (a, b) = (pts[i], pts[j]);
    let mut best = (i + 1, -1.0);
    for (k, p) in pts.iter().enumerate().take(j).skip(i + 1) {
        let d = point_segment_distance(p, &a, &b);
        if d > best.1 {
            best = (k, d);
        }
    }
    best
}
