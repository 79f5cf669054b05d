//! Property tests on random star-shaped polygons and small multipolygon scenes.

use proptest::prelude::*;

use polyhull::geom::rand::{
    draw_polygon_radial, draw_polygon_with_hole, RadialCfg, ReplayToken, VertexCount,
};
use polyhull::geom::validity::{covers_vertices, is_valid};
use polyhull::geom::LineSegment;
use polyhull::index::LineSegmentIndex;
use polyhull::{
    hull, hull_by_area_delta, simplify, Coordinate, Geometry, MultiPolygon, Polygon, Ring,
};

fn star(seed: u64, n: usize) -> Geometry {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    draw_polygon_radial(cfg, ReplayToken { seed, index: 0 })
        .expect("sampler")
        .into()
}

fn mapped(ring: &Ring, f: impl Fn(&Coordinate) -> Coordinate) -> Ring {
    Ring::from_coords(ring.coords().iter().map(f).collect()).expect("ring")
}

/// Shell with a hole, an island inside the hole, and a neighbour just to the
/// right of the shell.
fn scene(seed: u64, n: usize) -> Option<Geometry> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        angle_jitter_frac: 0.2,
        ..RadialCfg::default()
    };
    let lake = draw_polygon_with_hole(cfg, 12, 0.9, ReplayToken { seed, index: 2 })?;
    let island = Polygon::new(
        mapped(&lake.holes[0], |c| Coordinate::new(0.5 * c.x, 0.5 * c.y)),
        vec![],
    );
    // Radii stay below base_radius * (1 + radial_jitter).
    let dx = 2.0 * cfg.base_radius * (1.0 + cfg.radial_jitter) + 0.05;
    let neighbour = Polygon::new(mapped(&lake.shell, |c| Coordinate::new(c.x + dx, c.y)), vec![]);
    Some(MultiPolygon(vec![lake, island, neighbour]).into())
}

fn check_hull(input: &Geometry, out: &Geometry, outer: bool) {
    assert!(is_valid(out), "invalid hull {out}");
    for poly in out.polygons() {
        for ring in poly.rings() {
            assert!(ring.num_vertices() >= 3);
        }
    }
    assert!(out.num_vertices() <= input.num_vertices());
    if outer {
        assert!(covers_vertices(out, input), "outer hull misses input vertex");
        assert!(out.area() >= input.area() - 1e-9);
    } else {
        assert!(covers_vertices(input, out), "inner hull leaves the input");
        assert!(out.area() <= input.area() + 1e-9);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn vertex_fraction_hull_is_valid(seed in any::<u64>(), n in 4usize..60, f in -1.0f64..=1.0) {
        let g = star(seed, n);
        let h = hull(&g, f).unwrap();
        check_hull(&g, &h, f >= 0.0);
    }

    #[test]
    fn area_delta_hull_is_valid(seed in any::<u64>(), n in 4usize..60, r in -2.0f64..2.0) {
        let g = star(seed, n);
        let h = hull_by_area_delta(&g, r).unwrap();
        check_hull(&g, &h, r >= 0.0);
    }

    #[test]
    fn hull_with_hole_is_valid(seed in any::<u64>(), f in -1.0f64..=1.0) {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 16, max: 40 },
            angle_jitter_frac: 0.2,
            ..RadialCfg::default()
        };
        if let Some(p) = draw_polygon_with_hole(cfg, 10, 0.9, ReplayToken { seed, index: 1 }) {
            let g: Geometry = p.into();
            let h = hull(&g, f).unwrap();
            check_hull(&g, &h, f >= 0.0);
        }
    }

    #[test]
    fn scene_hull_is_valid(seed in any::<u64>(), n in 12usize..40, f in -1.0f64..=1.0) {
        if let Some(g) = scene(seed, n) {
            prop_assert!(is_valid(&g));
            let h = hull(&g, f).unwrap();
            prop_assert_eq!(h.polygons().len(), 3);
            check_hull(&g, &h, f >= 0.0);
        }
    }

    #[test]
    fn scene_area_delta_hull_is_valid(seed in any::<u64>(), n in 12usize..40, r in -2.0f64..2.0) {
        if let Some(g) = scene(seed, n) {
            let h = hull_by_area_delta(&g, r).unwrap();
            check_hull(&g, &h, r >= 0.0);
        }
    }

    #[test]
    fn simplified_rings_stay_valid(seed in any::<u64>(), n in 4usize..60, tol in 0.0f64..0.5) {
        let g = star(seed, n);
        let s = simplify(&g, tol).unwrap();
        prop_assert!(is_valid(&s));
        prop_assert!(s.polygons()[0].shell.num_points() >= 4);
    }

    #[test]
    fn index_round_trip(seed in any::<u64>(), n in 4usize..60) {
        let g = star(seed, n);
        let coords = g.polygons()[0].shell.coords().to_vec();
        let mut idx: LineSegmentIndex<usize> = LineSegmentIndex::new();
        idx.add_line(&coords, |i| i);
        for (i, w) in coords.windows(2).enumerate() {
            let s = LineSegment::tagged(w[0], w[1], i);
            prop_assert!(idx.query(&s).contains(&s));
            prop_assert!(idx.remove(&s));
            prop_assert!(!idx.query(&s).contains(&s));
        }
        prop_assert!(idx.is_empty());
    }
}

