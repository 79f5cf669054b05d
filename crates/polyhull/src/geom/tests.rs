use super::*;

fn ring(pts: &[(f64, f64)]) -> Ring {
    Ring::from_coords(pts.iter().map(|&p| p.into()).collect()).unwrap()
}

#[test]
fn ring_rejects_open_or_short_input() {
    let open = Ring::from_coords(vec![
        (0.0, 0.0).into(),
        (1.0, 0.0).into(),
        (1.0, 1.0).into(),
        (0.0, 1.0).into(),
    ]);
    assert!(matches!(open, Err(crate::HullError::InvalidRing(_))));
    let short = Ring::from_coords(vec![
        (0.0, 0.0).into(),
        (1.0, 0.0).into(),
        (0.0, 0.0).into(),
    ]);
    assert!(matches!(short, Err(crate::HullError::InvalidRing(_))));
    assert!(LineString::from_coords(vec![(0.0, 0.0).into()]).is_err());
}

#[test]
fn ring_rejects_non_finite_coordinates() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let pts = [(0.0, 0.0), (10.0, 0.0), (10.0, bad), (0.0, 10.0), (0.0, 0.0)];
        let coords: Vec<Coordinate> = pts.iter().map(|&p| p.into()).collect();
        assert!(matches!(
            Ring::from_coords(coords),
            Err(crate::HullError::InvalidRing(_))
        ));
    }
}

#[test]
fn ring_area_and_orientation() {
    let ccw = ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0), (0.0, 0.0)]);
    assert!(ccw.is_ccw());
    assert_eq!(ccw.signed_area(), 12.0);
    let cw = ccw.reversed();
    assert!(!cw.is_ccw());
    assert_eq!(cw.area(), 12.0);
    assert_eq!(ccw.num_vertices(), 4);
}

#[test]
fn normalized_ring_is_canonical() {
    let a = ring(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0), (1.0, 1.0)]);
    let b = ring(&[(3.0, 3.0), (3.0, 1.0), (1.0, 1.0), (1.0, 3.0), (3.0, 3.0)]);
    assert_eq!(a.normalized(true), b.normalized(true));
    let n = a.normalized(true);
    assert!(!n.is_ccw());
    assert_eq!(n.coords()[0], Coordinate::new(1.0, 1.0));
    assert!(a.normalized(false).is_ccw());
}

#[test]
fn polygon_area_subtracts_holes() {
    let shell = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
    let hole = ring(&[(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 4.0), (2.0, 2.0)]);
    let poly = Polygon::new(shell, vec![hole]);
    assert_eq!(poly.area(), 96.0);
    assert_eq!(poly.num_rings(), 2);
    assert_eq!(poly.num_vertices(), 8);
}

#[test]
fn geojson_shape_round_trips() {
    let json = r#"{"type":"Polygon","coordinates":[[[0,0],[2,0],[2,2],[0,0]]]}"#;
    let g: Geometry = serde_json::from_str(json).unwrap();
    assert_eq!(g.num_vertices(), 3);
    let back = serde_json::to_string(&g).unwrap();
    let again: Geometry = serde_json::from_str(&back).unwrap();
    assert_eq!(g, again);

    let mp = r#"{"type":"MultiPolygon","coordinates":[[[[0,0],[1,0],[1,1],[0,0]]],[[[5,5],[6,5],[6,6],[5,5]]]]}"#;
    let g: Geometry = serde_json::from_str(mp).unwrap();
    assert_eq!(g.polygons().len(), 2);
}

#[test]
fn geojson_rejects_open_ring() {
    let json = r#"{"type":"Polygon","coordinates":[[[0,0],[2,0],[2,2],[0,2]]]}"#;
    assert!(serde_json::from_str::<Geometry>(json).is_err());
}

#[test]
fn wkt_display() {
    let shell = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
    let poly = Polygon::new(shell, vec![]);
    assert_eq!(poly.to_string(), "POLYGON ((0 0, 1 0, 1 1, 0 0))");
    let mp = Geometry::MultiPolygon(MultiPolygon(vec![poly.clone(), poly]));
    assert_eq!(
        mp.to_string(),
        "MULTIPOLYGON (((0 0, 1 0, 1 1, 0 0)), ((0 0, 1 0, 1 1, 0 0)))"
    );
    assert_eq!(MultiPolygon::default().to_string(), "MULTIPOLYGON EMPTY");
}

#[test]
fn with_polygons_keeps_granularity() {
    let shell = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
    let poly = Polygon::new(shell, vec![]);
    let g = Geometry::Polygon(poly.clone());
    assert!(matches!(g.with_polygons(vec![poly.clone()]), Geometry::Polygon(_)));
    let mg = Geometry::MultiPolygon(MultiPolygon(vec![poly.clone()]));
    assert!(matches!(mg.with_polygons(vec![poly]), Geometry::MultiPolygon(_)));
}
