use alphathick::geom2::{to_real as point_to_real, Coord, ThicknessDefinition, Vec2};
use alphathick::hull2::{andrew, antipodal, graham, melkman};
use alphathick::thick::{greedy_segments, SegmentCfg};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls and alpha-thick segmentation of point tables")]
struct Cmd {
    /// Optional free-form tag; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull and minimal-width strip of a point table
    Hull {
        /// CSV (with header) or Parquet file with columns x, y
        #[arg(long)]
        input: PathBuf,
        /// Melkman reads the rows as a simple chain, in file order
        #[arg(long, value_enum, default_value_t = HullAlgo::Andrew)]
        algo: HullAlgo,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Domain::Int)]
        domain: Domain,
    },
    /// Greedy alpha-thick segmentation of a curve given in row order
    Segment {
        #[arg(long)]
        input: PathBuf,
        /// Maximal strip width; negative values are rejected after parsing
        #[arg(long, allow_negative_numbers = true)]
        alpha: f64,
        #[arg(long, value_enum, default_value_t = Thickness::Euclidean)]
        thickness: Thickness,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Domain::Int)]
        domain: Domain,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HullAlgo {
    Andrew,
    Graham,
    Melkman,
}

/// Coordinate domain: exact `i32` lattice points or `f64` reals.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Domain {
    Int,
    Real,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Thickness {
    Euclidean,
    Hv,
}

impl From<Thickness> for ThicknessDefinition {
    fn from(t: Thickness) -> Self {
        match t {
            Thickness::Euclidean => ThicknessDefinition::Euclidean,
            Thickness::Hv => ThicknessDefinition::HorizontalVertical,
        }
    }
}

#[derive(Debug, Serialize)]
struct StripReport {
    normal: [f64; 2],
    mu: f64,
    nu: f64,
    width: f64,
}

#[derive(Debug, Serialize)]
struct HullReport {
    algo: String,
    /// True when predicates ran in exact integer arithmetic.
    exact: bool,
    input_points: usize,
    hull: Vec<[f64; 2]>,
    strip: Option<StripReport>,
    antipodal: Option<[[f64; 2]; 3]>,
}

#[derive(Debug, Serialize)]
struct SegmentReport {
    start: usize,
    end: usize,
    first: [f64; 2],
    last: [f64; 2],
    strip: StripReport,
}

#[derive(Debug, Serialize)]
struct SegmentationReport {
    alpha: f64,
    thickness: String,
    input_points: usize,
    segments: Vec<SegmentReport>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            algo,
            out,
            domain,
        } => run_hull(&input, algo, &out, domain, cmd.tag).map(|_| ()),
        Action::Segment {
            input,
            alpha,
            thickness,
            out,
            domain,
        } => run_segment(&input, alpha, thickness, &out, domain, cmd.tag).map(|_| ()),
        Action::Report => report(cmd.tag),
    }
}

fn run_hull(
    input: &Path,
    algo: HullAlgo,
    out: &Path,
    domain: Domain,
    tag: Option<String>,
) -> Result<HullReport> {
    tracing::info!(input = %input.display(), algo = ?algo, domain = ?domain, tag = ?tag, "hull");
    let rows = points::read_xy(input)?;
    let report = match domain {
        Domain::Int => hull_report(&points::to_lattice(&rows)?, algo),
        Domain::Real => hull_report(&points::to_real(&rows), algo),
    };
    tracing::info!(
        points = report.input_points,
        vertices = report.hull.len(),
        width = report.strip.as_ref().map(|s| s.width),
        "hull_done"
    );
    write_json(out, &report)?;
    let payload = Payload::new(json!({
        "command": "hull",
        "input": input.to_string_lossy(),
        "algo": format!("{algo:?}").to_lowercase(),
        "domain": format!("{domain:?}").to_lowercase(),
    }))
    .with_tag(tag)
    .with_summary(json!({
        "input_points": report.input_points,
        "hull_vertices": report.hull.len(),
    }));
    write_sidecar(out, payload)?;
    Ok(report)
}

fn run_segment(
    input: &Path,
    alpha: f64,
    thickness: Thickness,
    out: &Path,
    domain: Domain,
    tag: Option<String>,
) -> Result<SegmentationReport> {
    tracing::info!(
        input = %input.display(),
        alpha,
        thickness = ?thickness,
        domain = ?domain,
        tag = ?tag,
        "segment"
    );
    anyhow::ensure!(alpha >= 0.0, "--alpha must be a non-negative number, got {alpha}");
    let rows = points::read_xy(input)?;
    let cfg = SegmentCfg {
        alpha,
        thickness: thickness.into(),
    };
    let segments = match domain {
        Domain::Int => segment_reports(&points::to_lattice(&rows)?, cfg),
        Domain::Real => segment_reports(&points::to_real(&rows), cfg),
    };
    let report = SegmentationReport {
        alpha,
        thickness: format!("{thickness:?}").to_lowercase(),
        input_points: rows.len(),
        segments,
    };
    tracing::info!(
        points = report.input_points,
        segments = report.segments.len(),
        "segment_done"
    );
    write_json(out, &report)?;
    let payload = Payload::new(json!({
        "command": "segment",
        "input": input.to_string_lossy(),
        "alpha": alpha,
        "thickness": &report.thickness,
        "domain": format!("{domain:?}").to_lowercase(),
    }))
    .with_tag(tag)
    .with_summary(json!({
        "input_points": report.input_points,
        "segments": report.segments.len(),
    }));
    write_sidecar(out, payload)?;
    Ok(report)
}

fn report(tag: Option<String>) -> Result<()> {
    let mut obj = provenance::header();
    obj["tags"] = json!(tag.into_iter().collect::<Vec<_>>());
    obj["params"] = json!({});
    obj["outputs"] = json!([]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn hull_report<T: Coord>(pts: &[Vec2<T>], algo: HullAlgo) -> HullReport {
    let hull = match algo {
        HullAlgo::Andrew => andrew(pts),
        HullAlgo::Graham => graham(pts),
        HullAlgo::Melkman => melkman(pts),
    };
    let def = ThicknessDefinition::Euclidean;
    let fit = antipodal(&hull, def);
    HullReport {
        algo: format!("{algo:?}").to_lowercase(),
        exact: T::EXACT,
        input_points: pts.len(),
        hull: hull.iter().map(xy).collect(),
        strip: fit.map(|f| strip_report(&f.strip, def)),
        antipodal: fit.map(|f| [xy(&f.pair.p), xy(&f.pair.q), xy(&f.pair.s)]),
    }
}

fn segment_reports<T: Coord>(pts: &[Vec2<T>], cfg: SegmentCfg) -> Vec<SegmentReport> {
    greedy_segments(pts, cfg)
        .iter()
        .map(|s| SegmentReport {
            start: s.start,
            end: s.end,
            first: xy(&s.first),
            last: xy(&s.last),
            strip: strip_report(&s.strip, cfg.thickness),
        })
        .collect()
}

fn strip_report<T: Coord>(
    strip: &alphathick::geom2::ParallelStrip<T>,
    def: ThicknessDefinition,
) -> StripReport {
    StripReport {
        normal: [T::wide_to_f64(strip.normal.x), T::wide_to_f64(strip.normal.y)],
        mu: T::wide_to_f64(strip.mu),
        nu: T::wide_to_f64(strip.nu),
        width: strip.thickness(def),
    }
}

fn xy<T: Coord>(p: &Vec2<T>) -> [f64; 2] {
    let r = point_to_real(p);
    [r.x, r.y]
}

fn write_json<S: Serialize>(out: &Path, value: &S) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
