//! Reading and writing GeoJSON-shaped geometry.

use anyhow::{Context, Result};
use polyhull::Geometry;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read a geometry from a file, or from stdin when `input` is `-`.
pub fn read_geometry(input: &str) -> Result<Geometry> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading geometry from stdin")?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("reading {input}"))?
    };
    parse_geometry(&text).with_context(|| format!("parsing geometry from {input}"))
}

pub fn parse_geometry(text: &str) -> Result<Geometry> {
    Ok(serde_json::from_str(text)?)
}

/// Write pretty JSON to `out`, creating parent directories.
pub fn write_geometry(out: &Path, geom: &Geometry) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(geom)?)
        .with_context(|| format!("writing {}", out.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SQUARE: &str =
        r#"{"type":"Polygon","coordinates":[[[0,0],[4,0],[4,4],[2,1],[0,4],[0,0]]]}"#;

    #[test]
    fn write_then_read_back() {
        let dir = tempdir().unwrap();
        let g = parse_geometry(SQUARE).unwrap();
        let out = dir.path().join("nested/dir/g.json");
        write_geometry(&out, &g).unwrap();
        let back = read_geometry(out.to_str().unwrap()).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn parse_errors_carry_context() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"type":"Polygon","coordinates":[[[0,0],[1,0]]]}"#).unwrap();
        let err = read_geometry(path.to_str().unwrap()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing geometry"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_geometry("/definitely/not/here.json").is_err());
    }
}
