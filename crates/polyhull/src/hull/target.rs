//! Reduction targets and their validation.

use serde::{Deserialize, Serialize};

use crate::error::{HullError, Result};

/// How far each ring is reduced. The sign selects the hull kind:
/// `>= 0` is an outer hull (covers the input), `< 0` an inner hull (covered
/// by the input).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HullTarget {
    /// Keep about `|f| · n` vertices per ring, `|f| ≤ 1`.
    VertexFraction(f64),
    /// Allow each ring a cumulative area change of `|r| · A_ring`.
    AreaDeltaRatio(f64),
}

impl HullTarget {
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            HullTarget::VertexFraction(v) | HullTarget::AreaDeltaRatio(v) => v,
        }
    }

    /// Reject NaN, infinities and fractions outside `[-1, 1]`.
    pub fn validate(self) -> Result<Self> {
        let (name, v) = match self {
            HullTarget::VertexFraction(v) => ("vertex_num_fraction", v),
            HullTarget::AreaDeltaRatio(v) => ("area_delta_ratio", v),
        };
        if !v.is_finite() {
            return Err(HullError::InvalidParameter {
                name,
                value: v,
                reason: "must be finite",
            });
        }
        if let HullTarget::VertexFraction(_) = self {
            if v.abs() > 1.0 {
                return Err(HullError::InvalidParameter {
                    name,
                    value: v,
                    reason: "must lie in [-1, 1]",
                });
            }
        }
        Ok(self)
    }

    #[inline]
    pub fn is_outer(self) -> bool {
        self.value() >= 0.0
    }

    /// Targets that leave every ring untouched (`|f| = 1`, `r = 0`).
    pub fn is_identity(self) -> bool {
        match self {
            HullTarget::VertexFraction(f) => f.abs() == 1.0,
            HullTarget::AreaDeltaRatio(r) => r == 0.0,
        }
    }

    /// Stop once a ring has fewer than this many vertices.
    pub(crate) fn min_vertices(self, num_vertices: usize) -> Option<usize> {
        match self {
            HullTarget::VertexFraction(f) => Some((f.abs() * num_vertices as f64).ceil() as usize),
            HullTarget::AreaDeltaRatio(_) => None,
        }
    }

    /// Area budget of one ring, relative to its own enclosed area.
    pub(crate) fn max_area_delta(self, ring_area: f64) -> Option<f64> {
        match self {
            HullTarget::VertexFraction(_) => None,
            HullTarget::AreaDeltaRatio(r) => Some(r.abs() * ring_area),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_out_of_range() {
        assert!(HullTarget::VertexFraction(1.0).validate().is_ok());
        assert!(HullTarget::VertexFraction(-1.0).validate().is_ok());
        assert!(matches!(
            HullTarget::VertexFraction(1.5).validate(),
            Err(HullError::InvalidParameter { name: "vertex_num_fraction", .. })
        ));
        assert!(HullTarget::VertexFraction(f64::NAN).validate().is_err());
        assert!(HullTarget::AreaDeltaRatio(f64::INFINITY).validate().is_err());
        assert!(HullTarget::AreaDeltaRatio(7.0).validate().is_ok());
    }

    #[test]
    fn sign_and_identity() {
        assert!(HullTarget::VertexFraction(0.0).is_outer());
        assert!(!HullTarget::AreaDeltaRatio(-0.2).is_outer());
        assert!(HullTarget::VertexFraction(-1.0).is_identity());
        assert!(HullTarget::AreaDeltaRatio(0.0).is_identity());
        assert!(!HullTarget::VertexFraction(0.0).is_identity());
    }

    #[test]
    fn per_ring_budgets() {
        assert_eq!(HullTarget::VertexFraction(0.5).min_vertices(9), Some(5));
        assert_eq!(HullTarget::VertexFraction(0.0).min_vertices(9), Some(0));
        assert_eq!(HullTarget::AreaDeltaRatio(0.5).min_vertices(9), None);
        assert_eq!(HullTarget::AreaDeltaRatio(-0.5).max_area_delta(80.0), Some(40.0));
        assert_eq!(HullTarget::AreaDeltaRatio(0.3).max_area_delta(1702.5), Some(0.3 * 1702.5));
        assert_eq!(HullTarget::VertexFraction(0.5).max_area_delta(80.0), None);
        assert_eq!(HullTarget::AreaDeltaRatio(1.0).max_area_delta(0.0), Some(0.0));
    }
}
