//! Coordinates and ordinate addressing.
//!
//! - `Coordinate`: plain `(x, y, z?)` value; equality and ordering are numeric.
//! - `Ordinate`: axis selector for per-ordinate access on sequences.

use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// 2D point with an optional elevation.
///
/// Serialized as `[x, y]` or `[x, y, z]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Coordinate {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    #[inline]
    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Planar part as an `nalgebra` vector.
    #[inline]
    pub fn xy(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// `x` and `y` are neither NaN nor infinite.
    #[inline]
    pub fn is_finite_2d(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Equality ignoring `z`.
    #[inline]
    pub fn equals_2d(&self, other: &Coordinate) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Lexicographic `(x, y)` comparison, total over finite values.
    #[inline]
    pub fn cmp_2d(&self, other: &Coordinate) -> std::cmp::Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl From<(f64, f64)> for Coordinate {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Coordinate {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2<f64>> for Coordinate {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Coordinate> for Vec<f64> {
    fn from(c: Coordinate) -> Self {
        match c.z {
            Some(z) => vec![c.x, c.y, z],
            None => vec![c.x, c.y],
        }
    }
}

impl TryFrom<Vec<f64>> for Coordinate {
    type Error = String;

    fn try_from(v: Vec<f64>) -> Result<Self, Self::Error> {
        match v.as_slice() {
            [x, y] => Ok(Self::new(*x, *y)),
            [x, y, z] => Ok(Self::new_3d(*x, *y, *z)),
            other => Err(format!(
                "coordinate needs 2 or 3 ordinates, got {}",
                other.len()
            )),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.z {
            Some(z) => write!(f, "{} {} {}", self.x, self.y, z),
            None => write!(f, "{} {}", self.x, self.y),
        }
    }
}

/// Axis selector. `M` (measure) is not stored: reads yield NaN, writes are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ordinate {
    X,
    Y,
    Z,
    M,
}
