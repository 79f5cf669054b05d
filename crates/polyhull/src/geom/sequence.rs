//! Mutable coordinate buffer backing rings and lines.
//!
//! Positional access is always bounds-checked and reports
//! `HullError::IndexOutOfRange`; there is no unchecked build mode, so debug
//! and release behave the same. Hot loops that only read use `as_slice()`.

use std::fmt;

use super::{Coordinate, Envelope, Ordinate};
use crate::error::{HullError, Result};

/// Ordered, resizable sequence of coordinates with 0-based addressing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoordinateSequence {
    coords: Vec<Coordinate>,
}

impl CoordinateSequence {
    #[inline]
    pub fn new() -> Self {
        Self { coords: Vec::new() }
    }

    /// `n` default-valued slots (all at the origin, 2D).
    pub fn with_size(n: usize) -> Self {
        Self {
            coords: vec![Coordinate::default(); n],
        }
    }

    /// Adopt an externally built buffer without copying.
    #[inline]
    pub fn from_vec(coords: Vec<Coordinate>) -> Self {
        Self { coords }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    #[inline]
    fn check(&self, pos: usize) -> Result<()> {
        if pos < self.coords.len() {
            Ok(())
        } else {
            Err(HullError::IndexOutOfRange {
                pos,
                size: self.coords.len(),
            })
        }
    }

    #[inline]
    pub fn add(&mut self, c: Coordinate) {
        self.coords.push(c);
    }

    #[inline]
    pub fn get(&self, pos: usize) -> Result<Coordinate> {
        self.check(pos)?;
        Ok(self.coords[pos])
    }

    #[inline]
    pub fn set(&mut self, pos: usize, c: Coordinate) -> Result<()> {
        self.check(pos)?;
        self.coords[pos] = c;
        Ok(())
    }

    /// Remove the coordinate at `pos`, shifting later ones down by one.
    pub fn delete_at(&mut self, pos: usize) -> Result<Coordinate> {
        self.check(pos)?;
        Ok(self.coords.remove(pos))
    }

    /// Single ordinate; NaN for `Ordinate::M` and for `Z` on a 2D coordinate.
    pub fn get_ordinate(&self, pos: usize, ordinate: Ordinate) -> Result<f64> {
        self.check(pos)?;
        let c = &self.coords[pos];
        Ok(match ordinate {
            Ordinate::X => c.x,
            Ordinate::Y => c.y,
            Ordinate::Z => c.z.unwrap_or(f64::NAN),
            Ordinate::M => f64::NAN,
        })
    }

    /// Set a single ordinate. Writing `Z` makes the coordinate 3D; `M` is ignored.
    pub fn set_ordinate(&mut self, pos: usize, ordinate: Ordinate, value: f64) -> Result<()> {
        self.check(pos)?;
        let c = &mut self.coords[pos];
        match ordinate {
            Ordinate::X => c.x = value,
            Ordinate::Y => c.y = value,
            Ordinate::Z => c.z = Some(value),
            Ordinate::M => {}
        }
        Ok(())
    }

    /// Fold every coordinate into `env`.
    pub fn expand_envelope(&self, env: &mut Envelope) {
        for c in &self.coords {
            env.expand_to_include(c);
        }
    }

    pub fn envelope(&self) -> Envelope {
        let mut env = Envelope::null();
        self.expand_envelope(&mut env);
        env
    }

    /// Replace the contents with a copy of `points`.
    pub fn set_points(&mut self, points: &[Coordinate]) {
        self.coords.clear();
        self.coords.extend_from_slice(points);
    }

    #[inline]
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.coords
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.coords.iter()
    }

    #[inline]
    pub fn first(&self) -> Option<&Coordinate> {
        self.coords.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Coordinate> {
        self.coords.last()
    }

    /// Non-empty and first equals last in 2D.
    pub fn is_closed(&self) -> bool {
        match (self.coords.first(), self.coords.last()) {
            (Some(a), Some(b)) => a.equals_2d(b),
            _ => false,
        }
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Coordinate> {
        self.coords
    }
}

impl From<Vec<Coordinate>> for CoordinateSequence {
    fn from(coords: Vec<Coordinate>) -> Self {
        Self::from_vec(coords)
    }
}

impl FromIterator<Coordinate> for CoordinateSequence {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self {
            coords: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for CoordinateSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn add_then_get_last() {
        let mut seq = CoordinateSequence::new();
        assert!(seq.is_empty());
        seq.add(c(1.0, 2.0));
        seq.add(c(3.0, 4.0));
        assert_eq!(seq.size(), 2);
        assert_eq!(seq.get(seq.size() - 1).unwrap(), c(3.0, 4.0));
    }

    #[test]
    fn out_of_range_is_reported() {
        let mut seq = CoordinateSequence::with_size(3);
        assert_eq!(seq.get(2).unwrap(), Coordinate::default());
        assert_eq!(
            seq.get(3),
            Err(HullError::IndexOutOfRange { pos: 3, size: 3 })
        );
        assert!(seq.set(7, c(0.0, 0.0)).is_err());
        assert!(seq.delete_at(3).is_err());
        assert!(seq.get_ordinate(5, Ordinate::X).is_err());
        assert!(seq.set_ordinate(5, Ordinate::Y, 1.0).is_err());
    }

    #[test]
    fn delete_at_shifts_down() {
        let mut seq = CoordinateSequence::from_vec(vec![c(0.0, 0.0), c(1.0, 1.0), c(2.0, 2.0)]);
        let removed = seq.delete_at(1).unwrap();
        assert_eq!(removed, c(1.0, 1.0));
        assert_eq!(seq.size(), 2);
        assert_eq!(seq.get(1).unwrap(), c(2.0, 2.0));
    }

    #[test]
    fn clone_is_independent() {
        let seq = CoordinateSequence::from_vec(vec![c(0.0, 0.0), c(1.0, 1.0)]);
        let mut copy = seq.clone();
        copy.set(0, c(9.0, 9.0)).unwrap();
        copy.add(c(5.0, 5.0));
        assert_eq!(seq.get(0).unwrap(), c(0.0, 0.0));
        assert_eq!(seq.size(), 2);
    }

    #[test]
    fn set_points_replaces_contents() {
        let mut seq = CoordinateSequence::with_size(5);
        let pts = [c(0.0, 0.0), c(3.0, 0.0), c(0.0, 0.0)];
        seq.set_points(&pts);
        assert_eq!(seq.size(), 3);
        assert_eq!(seq.as_slice(), &pts);
        assert!(seq.is_closed());
        seq.set_points(&[]);
        assert!(seq.is_empty());
    }

    #[test]
    fn ordinates() {
        let mut seq = CoordinateSequence::from_vec(vec![c(1.0, 2.0)]);
        assert_eq!(seq.get_ordinate(0, Ordinate::X).unwrap(), 1.0);
        assert_eq!(seq.get_ordinate(0, Ordinate::Y).unwrap(), 2.0);
        assert!(seq.get_ordinate(0, Ordinate::Z).unwrap().is_nan());
        assert!(seq.get_ordinate(0, Ordinate::M).unwrap().is_nan());

        seq.set_ordinate(0, Ordinate::X, 7.0).unwrap();
        seq.set_ordinate(0, Ordinate::M, 99.0).unwrap();
        assert_eq!(seq.get(0).unwrap(), c(7.0, 2.0));
        seq.set_ordinate(0, Ordinate::Z, 3.0).unwrap();
        assert_eq!(seq.get(0).unwrap(), Coordinate::new_3d(7.0, 2.0, 3.0));
    }

    #[test]
    fn envelope_and_display() {
        let seq = CoordinateSequence::from_vec(vec![c(1.0, 5.0), c(-2.0, 0.0), c(4.0, 1.0)]);
        let mut env = Envelope::null();
        seq.expand_envelope(&mut env);
        assert_eq!(env.min_x, -2.0);
        assert_eq!(env.max_x, 4.0);
        assert_eq!(env.min_y, 0.0);
        assert_eq!(env.max_y, 5.0);
        assert_eq!(seq.to_string(), "1 5, -2 0, 4 1");
        assert!(!seq.is_closed());
    }
}
