//! Print outer and inner hulls of a few random star polygons.
//!
//! Usage:
//!   cargo run -p polyhull --example random_hulls -- [fraction]
//!
//! Prints vertex counts and areas per sample, then the first sample's hulls
//! as WKT.

use polyhull::geom::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use polyhull::{hull, Geometry};

fn main() {
    let fraction: f64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.3);
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 20, max: 60 },
        ..RadialCfg::default()
    };
    let mut first: Option<(Geometry, Geometry, Geometry)> = None;
    for index in 0..5 {
        let Some(poly) = draw_polygon_radial(cfg, ReplayToken { seed: 2025, index }) else {
            continue;
        };
        let g: Geometry = poly.into();
        let outer = hull(&g, fraction).expect("outer hull");
        let inner = hull(&g, -fraction).expect("inner hull");
        println!(
            "sample {index}: n={} area={:.4} | outer n={} area={:.4} | inner n={} area={:.4}",
            g.num_vertices(),
            g.area(),
            outer.num_vertices(),
            outer.area(),
            inner.num_vertices(),
            inner.area(),
        );
        if first.is_none() {
            first = Some((g, outer, inner));
        }
    }
    if let Some((g, outer, inner)) = first {
        println!("input: {g}");
        println!("outer: {outer}");
        println!("inner: {inner}");
    }
}
