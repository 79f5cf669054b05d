//! Axis-aligned bounding boxes used as spatial-index keys.

use rstar::AABB;

use super::Coordinate;

/// Axis-aligned box `[min_x, max_x] × [min_y, max_y]`.
///
/// The null envelope (`min > max`) covers nothing and is the identity for
/// `expand_to_include`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Self::null()
    }
}

impl Envelope {
    #[inline]
    pub fn null() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Box spanned by two corner points (in any order).
    #[inline]
    pub fn from_points(p: &Coordinate, q: &Coordinate) -> Self {
        Self {
            min_x: p.x.min(q.x),
            max_x: p.x.max(q.x),
            min_y: p.y.min(q.y),
            max_y: p.y.max(q.y),
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.min_x > self.max_x
    }

    #[inline]
    pub fn expand_to_include(&mut self, p: &Coordinate) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    #[inline]
    pub fn expand_to_include_env(&mut self, other: &Envelope) {
        if other.is_null() {
            return;
        }
        self.min_x = self.min_x.min(other.min_x);
        self.max_x = self.max_x.max(other.max_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_y = self.max_y.max(other.max_y);
    }

    /// Closed-box overlap (touching boxes intersect).
    #[inline]
    pub fn intersects(&self, other: &Envelope) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        !(other.min_x > self.max_x
            || other.max_x < self.min_x
            || other.min_y > self.max_y
            || other.max_y < self.min_y)
    }

    /// Point inside or on the boundary.
    #[inline]
    pub fn contains_point(&self, p: &Coordinate) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// R-tree key for this box.
    #[inline]
    pub fn to_aabb(&self) -> AABB<[f64; 2]> {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}
