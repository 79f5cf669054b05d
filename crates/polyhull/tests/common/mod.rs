//! Test-only reader for the `POLYGON`/`MULTIPOLYGON` WKT subset used in the
//! reference cases.

use polyhull::{Coordinate, Geometry, MultiPolygon, Polygon, Ring};

fn parse_ring(body: &str) -> Ring {
    let coords: Vec<Coordinate> = body
        .split(',')
        .map(|pt| {
            let v: Vec<f64> = pt
                .split_whitespace()
                .map(|s| s.parse().expect("number"))
                .collect();
            Coordinate::new(v[0], v[1])
        })
        .collect();
    Ring::from_coords(coords).expect("ring")
}

/// `body` is the text between a polygon's outer parentheses: `(..), (..)`.
fn parse_polygon(body: &str) -> Polygon {
    let mut rings = body
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .split("), (")
        .map(parse_ring);
    let shell = rings.next().expect("shell");
    Polygon::new(shell, rings.collect())
}

pub fn wkt(text: &str) -> Geometry {
    let text = text.trim();
    if let Some(rest) = text.strip_prefix("MULTIPOLYGON") {
        let inner = rest
            .trim()
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .expect("parens");
        let polys = inner
            .split(")), ((")
            .map(|p| {
                let p = p.trim().trim_start_matches("((").trim_end_matches("))");
                parse_polygon(&format!("({p})"))
            })
            .collect();
        Geometry::MultiPolygon(MultiPolygon(polys))
    } else if let Some(rest) = text.strip_prefix("POLYGON") {
        let inner = rest
            .trim()
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .expect("parens");
        Geometry::Polygon(parse_polygon(inner))
    } else {
        panic!("unsupported WKT: {text}");
    }
}

pub fn assert_same(got: &Geometry, expected: &Geometry) {
    assert_eq!(
        got.normalized(),
        expected.normalized(),
        "\n got: {got}\nwant: {expected}"
    );
}
