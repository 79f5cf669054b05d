//! Rings, polygons, line strings and the polygonal `Geometry` enum.
//!
//! Purpose
//! - Validated containers (`Ring` is closed with ≥ 4 finite points, `LineString` has
//!   ≥ 2 points) so downstream algorithms never re-check shape.
//! - Decomposition (`Geometry::polygons`) and assembly
//!   (`Geometry::with_polygons`) that keep the input's granularity.
//! - GeoJSON-shaped serde and WKT `Display` for logs and the CLI.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::predicates::{is_ccw, signed_ring_area};
use super::{Coordinate, CoordinateSequence, Envelope};
use crate::error::{HullError, Result};

/// Closed ring: first == last, at least 4 coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct Ring {
    seq: CoordinateSequence,
}

impl Ring {
    pub const MIN_POINTS: usize = 4;

    pub fn new(seq: CoordinateSequence) -> Result<Self> {
        if seq.size() < Self::MIN_POINTS {
            return Err(HullError::InvalidRing(format!(
                "need at least {} coordinates, got {}",
                Self::MIN_POINTS,
                seq.size()
            )));
        }
        if !seq.is_closed() {
            return Err(HullError::InvalidRing(
                "first and last coordinates differ".into(),
            ));
        }
        if let Some(c) = seq.iter().find(|c| !c.is_finite_2d()) {
            return Err(HullError::InvalidRing(format!("non-finite coordinate {c}")));
        }
        Ok(Self { seq })
    }

    pub fn from_coords(coords: Vec<Coordinate>) -> Result<Self> {
        Self::new(CoordinateSequence::from_vec(coords))
    }

    #[inline]
    pub fn sequence(&self) -> &CoordinateSequence {
        &self.seq
    }

    #[inline]
    pub fn coords(&self) -> &[Coordinate] {
        self.seq.as_slice()
    }

    /// Coordinates including the closing point.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.seq.size()
    }

    /// Distinct vertices (closing point excluded).
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.seq.size() - 1
    }

    #[inline]
    pub fn vertices(&self) -> &[Coordinate] {
        &self.coords()[..self.num_vertices()]
    }

    /// Positive when counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        signed_ring_area(self.coords())
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn is_ccw(&self) -> bool {
        is_ccw(self.coords())
    }

    pub fn envelope(&self) -> Envelope {
        self.seq.envelope()
    }

    pub fn reversed(&self) -> Ring {
        let mut coords = self.coords().to_vec();
        coords.reverse();
        Ring {
            seq: CoordinateSequence::from_vec(coords),
        }
    }

    /// Canonical form: requested orientation, starting at the smallest vertex.
    pub fn normalized(&self, clockwise: bool) -> Ring {
        let oriented = if self.is_ccw() == clockwise {
            self.reversed()
        } else {
            self.clone()
        };
        let verts = oriented.vertices();
        let start = (0..verts.len())
            .min_by(|&a, &b| verts[a].cmp_2d(&verts[b]))
            .unwrap_or(0);
        let mut coords: Vec<Coordinate> = verts[start..]
            .iter()
            .chain(verts[..start].iter())
            .copied()
            .collect();
        coords.push(coords[0]);
        Ring {
            seq: CoordinateSequence::from_vec(coords),
        }
    }
}

impl TryFrom<Vec<Coordinate>> for Ring {
    type Error = HullError;

    fn try_from(coords: Vec<Coordinate>) -> Result<Self> {
        Ring::from_coords(coords)
    }
}

impl From<Ring> for Vec<Coordinate> {
    fn from(ring: Ring) -> Self {
        ring.seq.into_vec()
    }
}

/// Shell plus zero or more holes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Ring>", into = "Vec<Ring>")]
pub struct Polygon {
    pub shell: Ring,
    pub holes: Vec<Ring>,
}

impl Polygon {
    pub fn new(shell: Ring, holes: Vec<Ring>) -> Self {
        Self { shell, holes }
    }

    /// Shell first, then holes in order.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.shell).chain(self.holes.iter())
    }

    #[inline]
    pub fn num_rings(&self) -> usize {
        1 + self.holes.len()
    }

    pub fn num_vertices(&self) -> usize {
        self.rings().map(Ring::num_vertices).sum()
    }

    /// Enclosed area (shell minus holes).
    pub fn area(&self) -> f64 {
        self.shell.area() - self.holes.iter().map(Ring::area).sum::<f64>()
    }

    /// Shell clockwise, holes counter-clockwise, holes sorted by first vertex.
    pub fn normalized(&self) -> Polygon {
        let mut holes: Vec<Ring> = self.holes.iter().map(|h| h.normalized(false)).collect();
        holes.sort_by(|a, b| a.coords()[0].cmp_2d(&b.coords()[0]));
        Polygon {
            shell: self.shell.normalized(true),
            holes,
        }
    }
}

impl TryFrom<Vec<Ring>> for Polygon {
    type Error = HullError;

    fn try_from(mut rings: Vec<Ring>) -> Result<Self> {
        if rings.is_empty() {
            return Err(HullError::InvalidRing("polygon has no shell ring".into()));
        }
        let shell = rings.remove(0);
        Ok(Polygon::new(shell, rings))
    }
}

impl From<Polygon> for Vec<Ring> {
    fn from(poly: Polygon) -> Self {
        let mut rings = Vec::with_capacity(poly.num_rings());
        rings.push(poly.shell);
        rings.extend(poly.holes);
        rings
    }
}

/// Ordered set of polygons.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiPolygon(pub Vec<Polygon>);

/// Polygonal geometry accepted by the hull and the simplifier.
///
/// Serialized in GeoJSON geometry shape: `{"type": "Polygon", "coordinates": [...]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl Geometry {
    /// Decompose into polygons (one for `Polygon`).
    pub fn polygons(&self) -> &[Polygon] {
        match self {
            Geometry::Polygon(p) => std::slice::from_ref(p),
            Geometry::MultiPolygon(mp) => &mp.0,
        }
    }

    /// Assemble `polys` at the granularity of `self`.
    pub fn with_polygons(&self, mut polys: Vec<Polygon>) -> Geometry {
        match self {
            Geometry::Polygon(_) if polys.len() == 1 => match polys.pop() {
                Some(p) => Geometry::Polygon(p),
                None => Geometry::MultiPolygon(MultiPolygon::default()),
            },
            _ => Geometry::MultiPolygon(MultiPolygon(polys)),
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.polygons().iter().map(Polygon::num_vertices).sum()
    }

    pub fn area(&self) -> f64 {
        self.polygons().iter().map(Polygon::area).sum()
    }

    pub fn envelope(&self) -> Envelope {
        let mut env = Envelope::null();
        for p in self.polygons() {
            env.expand_to_include_env(&p.shell.envelope());
        }
        env
    }

    /// Canonical form for comparisons; polygons sorted by shell start vertex.
    pub fn normalized(&self) -> Geometry {
        match self {
            Geometry::Polygon(p) => Geometry::Polygon(p.normalized()),
            Geometry::MultiPolygon(mp) => {
                let mut polys: Vec<Polygon> = mp.0.iter().map(Polygon::normalized).collect();
                polys.sort_by(|a, b| a.shell.coords()[0].cmp_2d(&b.shell.coords()[0]));
                Geometry::MultiPolygon(MultiPolygon(polys))
            }
        }
    }
}

impl From<Polygon> for Geometry {
    fn from(p: Polygon) -> Self {
        Geometry::Polygon(p)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(mp: MultiPolygon) -> Self {
        Geometry::MultiPolygon(mp)
    }
}

/// Open or closed polyline with at least 2 coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct LineString {
    seq: CoordinateSequence,
}

impl LineString {
    pub const MIN_POINTS: usize = 2;

    pub fn new(seq: CoordinateSequence) -> Result<Self> {
        if seq.size() < Self::MIN_POINTS {
            return Err(HullError::InvalidLineString(format!(
                "need at least {} coordinates, got {}",
                Self::MIN_POINTS,
                seq.size()
            )));
        }
        Ok(Self { seq })
    }

    pub fn from_coords(coords: Vec<Coordinate>) -> Result<Self> {
        Self::new(CoordinateSequence::from_vec(coords))
    }

    #[inline]
    pub fn coords(&self) -> &[Coordinate] {
        self.seq.as_slice()
    }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.seq.size()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.seq.is_closed()
    }
}

impl TryFrom<Vec<Coordinate>> for LineString {
    type Error = HullError;

    fn try_from(coords: Vec<Coordinate>) -> Result<Self> {
        LineString::from_coords(coords)
    }
}

impl From<LineString> for Vec<Coordinate> {
    fn from(line: LineString) -> Self {
        line.seq.into_vec()
    }
}

fn write_ring(f: &mut fmt::Formatter<'_>, ring: &Ring) -> fmt::Result {
    write!(f, "({})", ring.sequence())
}

fn write_polygon_body(f: &mut fmt::Formatter<'_>, poly: &Polygon) -> fmt::Result {
    f.write_str("(")?;
    for (i, ring) in poly.rings().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_ring(f, ring)?;
    }
    f.write_str(")")
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("POLYGON ")?;
        write_polygon_body(f, self)
    }
}

impl fmt::Display for MultiPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("MULTIPOLYGON EMPTY");
        }
        f.write_str("MULTIPOLYGON (")?;
        for (i, poly) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_polygon_body(f, poly)?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::Polygon(p) => p.fmt(f),
            Geometry::MultiPolygon(mp) => mp.fmt(f),
        }
    }
}

impl fmt::Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LINESTRING ({})", self.seq)
    }
}
