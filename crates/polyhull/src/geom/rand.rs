//! Random simple polygons in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of star-shaped (generally
//!   non-convex) polygons, optionally with a hole, for property tests,
//!   benches and the CLI `sample` command.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and connect the points in angular order. Sorted angles
//!   with positive radii give a polygon that is star-shaped about the origin,
//!   hence simple.
//! - A hole is a smaller star polygon around the origin, scaled inside the
//!   shell's guaranteed inner disc `r_min · cos(max_gap / 2)`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! References
//! - Code cross-refs: `Polygon`, `Ring`, `validity::is_valid`

use std::f64::consts::PI;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{Coordinate, Polygon, Ring};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`,
    /// with `u∈[-radial_jitter, radial_jitter]`.
    /// Clamped to [0, 0.95] so radii stay positive.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Points of a star polygon in angular order, plus the largest angular gap.
fn star_points<R: Rng>(
    rng: &mut R,
    n: usize,
    cfg: &RadialCfg,
    radius: f64,
) -> (Vec<Vector2<f64>>, f64) {
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let delta = 2.0 * PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * PI
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(f64::total_cmp);
    let max_gap = angles
        .windows(2)
        .map(|w| w[1] - w[0])
        .chain(std::iter::once(angles[0] + 2.0 * PI - angles[n - 1]))
        .fold(0.0, f64::max);
    let pts = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * radius;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    (pts, max_gap)
}

fn closed_ring(pts: &[Vector2<f64>]) -> Option<Ring> {
    let mut coords: Vec<Coordinate> = pts.iter().map(|&p| p.into()).collect();
    coords.push(*coords.first()?);
    Ring::from_coords(coords).ok()
}

/// Draw a random star-shaped polygon (no holes) around the origin.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let r0 = cfg.base_radius.max(1e-9);
    let (pts, _) = star_points(&mut rng, n, &cfg, r0);
    Some(Polygon::new(closed_ring(&pts)?, vec![]))
}

/// Draw a star-shaped shell with one star-shaped hole around the origin.
///
/// `hole_scale ∈ (0, 1)` is the hole's outer radius relative to the shell's
/// guaranteed inner disc. Returns `None` when the shell's angular gaps are too
/// wide to guarantee an inner disc (few vertices with strong angular jitter).
pub fn draw_polygon_with_hole(
    cfg: RadialCfg,
    hole_vertices: usize,
    hole_scale: f64,
    tok: ReplayToken,
) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let r0 = cfg.base_radius.max(1e-9);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let (shell_pts, max_gap) = star_points(&mut rng, n, &cfg, r0);
    let half_cos = (max_gap / 2.0).cos();
    if !(half_cos > 0.0) || !(hole_scale > 0.0 && hole_scale < 1.0) {
        return None;
    }
    let inner_disc = r0 * (1.0 - rj) * half_cos;
    // Hole radii stay within [1 - rj, 1 + rj] · r_h; keep the outer bound inside the disc.
    let r_h = inner_disc * hole_scale / (1.0 + rj);
    let (hole_pts, _) = star_points(&mut rng, hole_vertices.max(3), &cfg, r_h);
    Some(Polygon::new(
        closed_ring(&shell_pts)?,
        vec![closed_ring(&hole_pts)?],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::validity::is_valid;
    use crate::geom::Geometry;

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(10),
            angle_jitter_frac: 0.2,
            radial_jitter: 0.1,
            base_radius: 1.0,
            random_phase: true,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_polygon_radial(cfg, tok).expect("poly");
        let p2 = draw_polygon_radial(cfg, tok).expect("poly");
        assert_eq!(p1, p2);
        assert_eq!(p1.shell.num_vertices(), 10);
        let p3 = draw_polygon_radial(cfg, ReplayToken { seed: 42, index: 8 }).expect("poly");
        assert_ne!(p1, p3);
    }

    #[test]
    fn draws_are_simple() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 5, max: 40 },
            ..RadialCfg::default()
        };
        for index in 0..50 {
            let p = draw_polygon_radial(cfg, ReplayToken { seed: 3, index }).unwrap();
            assert!(is_valid(&Geometry::Polygon(p)), "draw {index} not simple");
        }
    }

    #[test]
    fn hole_stays_inside_shell() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(24),
            ..RadialCfg::default()
        };
        let mut drawn = 0;
        for index in 0..30 {
            if let Some(p) = draw_polygon_with_hole(cfg, 8, 0.8, ReplayToken { seed: 9, index }) {
                drawn += 1;
                assert_eq!(p.holes.len(), 1);
                assert!(is_valid(&Geometry::Polygon(p)), "draw {index} invalid");
            }
        }
        assert!(drawn > 0);
    }

    #[test]
    fn rejects_bad_hole_scale() {
        let tok = ReplayToken { seed: 0, index: 0 };
        assert!(draw_polygon_with_hole(RadialCfg::default(), 6, 1.5, tok).is_none());
        assert!(draw_polygon_with_hole(RadialCfg::default(), 6, 0.0, tok).is_none());
    }
}
