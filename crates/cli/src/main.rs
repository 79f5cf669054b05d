use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polyhull::geom::rand::{
    draw_polygon_radial, draw_polygon_with_hole, RadialCfg, ReplayToken, VertexCount,
};
use polyhull::geom::validity;
use polyhull::Geometry;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

#[derive(Parser)]
#[command(name = "polyhull")]
#[command(about = "Outer/inner polygon hulls and topology-preserving simplification")]
struct Cmd {
    /// Optional run identifier; propagated to logs and provenance sidecars
    #[arg(long, global = true)]
    run_id: Option<String>,

    #[command(subcommand)]
    action: Action,
}

/// Where the geometry comes from and where it goes.
#[derive(clap::Args, Clone, Debug)]
struct Io {
    /// GeoJSON geometry file, or `-` for stdin
    #[arg(long, default_value = "-")]
    input: String,
    /// Output file; stdout when omitted (no provenance sidecar then)
    #[arg(long)]
    out: Option<PathBuf>,
    /// Fail if the result is not a valid polygonal geometry
    #[arg(long)]
    check: bool,
}

#[derive(Subcommand)]
enum Action {
    /// Hull keeping about |fraction| of each ring's vertices (negative: inner hull)
    Hull {
        #[arg(long, allow_hyphen_values = true)]
        fraction: f64,
        #[command(flatten)]
        io: Io,
    },
    /// Hull within a per-ring area-change budget (negative: inner hull)
    AreaDelta {
        #[arg(long, allow_hyphen_values = true)]
        ratio: f64,
        #[command(flatten)]
        io: Io,
    },
    /// Topology-preserving Douglas-Peucker simplification
    Simplify {
        #[arg(long)]
        tolerance: f64,
        #[command(flatten)]
        io: Io,
    },
    /// Draw a random star-shaped polygon (optionally with a hole)
    Sample {
        #[arg(long, default_value_t = 24)]
        vertices: usize,
        #[arg(long)]
        hole_vertices: Option<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    run(cmd)
}

fn run(cmd: Cmd) -> Result<()> {
    let run_id = cmd.run_id;
    match cmd.action {
        Action::Hull { fraction, io: args } => {
            let g = io::read_geometry(&args.input)?;
            let h = polyhull::hull(&g, fraction).context("computing hull")?;
            finish("hull", &g, &h, &args, json!({ "fraction": fraction }), run_id)
        }
        Action::AreaDelta { ratio, io: args } => {
            let g = io::read_geometry(&args.input)?;
            let h = polyhull::hull_by_area_delta(&g, ratio).context("computing hull")?;
            finish("area-delta", &g, &h, &args, json!({ "ratio": ratio }), run_id)
        }
        Action::Simplify { tolerance, io: args } => {
            let g = io::read_geometry(&args.input)?;
            let s = polyhull::simplify(&g, tolerance).context("simplifying")?;
            finish("simplify", &g, &s, &args, json!({ "tolerance": tolerance }), run_id)
        }
        Action::Sample {
            vertices,
            hole_vertices,
            seed,
            index,
            out,
        } => sample(vertices, hole_vertices, ReplayToken { seed, index }, out, run_id),
        Action::Report => {
            let doc = provenance::document_for_report(run_id);
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok(())
        }
    }
}

fn finish(
    command: &'static str,
    input: &Geometry,
    output: &Geometry,
    args: &Io,
    params: serde_json::Value,
    run_id: Option<String>,
) -> Result<()> {
    tracing::info!(
        command,
        run_id = ?run_id,
        vertices_in = input.num_vertices(),
        vertices_out = output.num_vertices(),
        area_in = input.area(),
        area_out = output.area(),
        "done"
    );
    if args.check {
        if let Err(why) = validity::check(output) {
            bail!("{command} produced an invalid geometry: {why:?}");
        }
    }
    emit(command, output, args.out.as_ref(), params, run_id)
}

fn emit(
    command: &'static str,
    geom: &Geometry,
    out: Option<&PathBuf>,
    params: serde_json::Value,
    run_id: Option<String>,
) -> Result<()> {
    match out {
        Some(path) => {
            io::write_geometry(path, geom)?;
            let payload = provenance::Payload::new(command, params).with_run_id(run_id);
            provenance::write_sidecar(path, payload)?;
            tracing::info!(out = %path.display(), "written");
        }
        None => println!("{}", serde_json::to_string_pretty(geom)?),
    }
    Ok(())
}

/// Sampler parameters as recorded in the provenance sidecar.
#[derive(Serialize)]
struct SampleParams {
    vertices: usize,
    hole_vertices: Option<usize>,
    token: ReplayToken,
    cfg: RadialCfg,
}

fn sample(
    vertices: usize,
    hole_vertices: Option<usize>,
    tok: ReplayToken,
    out: Option<PathBuf>,
    run_id: Option<String>,
) -> Result<()> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..RadialCfg::default()
    };
    let poly = match hole_vertices {
        Some(m) => draw_polygon_with_hole(cfg, m, 0.8, tok),
        None => draw_polygon_radial(cfg, tok),
    };
    let Some(poly) = poly else {
        bail!(
            "sampler could not draw a polygon for {vertices} vertices (seed {}, index {})",
            tok.seed,
            tok.index
        );
    };
    let geom: Geometry = poly.into();
    let params = SampleParams {
        vertices,
        hole_vertices,
        token: tok,
        cfg,
    };
    emit("sample", &geom, out.as_ref(), serde_json::to_value(params)?, run_id)
}
