//! Orchestration binary for the hull builders.
//!
//! Purpose
//! - `sample`: draw a lattice point set and write it as an `x,y` table.
//! - `hull`: build one ordered hull (sweep or exhaustive) and report it as JSON.
//! - `perf`: time both builders across sizes, one table row per size.
//! - Every written artifact gets a `<stem>.provenance.json` sidecar.
//!
//! Code cross-refs: `chull::api`, `table`, `provenance`

use anyhow::{Context, Result};
use chull::api::{
    area, draw_points, is_strictly_convex_ccw, perf_sweep, perimeter, timed_hull, Algorithm,
    Point2, ReplayToken, SampleCfg, SampleShape, DEFAULT_SIZES,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull runner: sample points, build hulls, time both builders")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw a random point set and write it as x,y columns
    Sample {
        #[arg(long, default_value_t = 100)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        lo: i32,
        #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
        hi: i32,
        #[arg(long)]
        out: PathBuf,
    },
    /// Build one hull and report vertices, area and elapsed time as JSON
    Hull {
        #[arg(long, default_value_t = Algorithm::Sweep)]
        algo: Algorithm,
        /// CSV with x,y columns; if absent, points are sampled from --n/--seed
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, default_value_t = 100)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Write the JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Time both builders across point-set sizes and write a table
    Perf {
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES.to_vec())]
        sizes: Vec<usize>,
        #[arg(long, default_value_t = 1000)]
        hi: i32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Sample {
            n,
            seed,
            lo,
            hi,
            out,
        } => sample(n, seed, lo, hi, &out),
        Action::Hull {
            algo,
            input,
            n,
            seed,
            out,
        } => hull(algo, input.as_deref(), n, seed, out.as_deref()),
        Action::Perf {
            sizes,
            hi,
            seed,
            out,
        } => perf(&sizes, hi, seed, &out),
        Action::Report => report(),
    }
}

fn sample(n: usize, seed: u64, lo: i32, hi: i32, out: &Path) -> Result<()> {
    tracing::info!(n, seed, lo, hi, out = %out.display(), "sample");
    let cfg = SampleCfg {
        count: n,
        shape: SampleShape::Square { lo, hi },
    };
    let points = draw_points(cfg, ReplayToken::new(seed))?;
    table::write_frame(&mut table::points_frame(&points)?, out)?;
    write_sidecar(
        out,
        Payload::new("sample", json!({ "n": n, "seed": seed, "lo": lo, "hi": hi })),
    )?;
    Ok(())
}

/// JSON shape of `cli hull` output.
#[derive(Debug, Serialize)]
struct HullReport {
    algo: String,
    n: usize,
    hull: Vec<[i32; 2]>,
    elapsed_ms: f64,
    area: f64,
    perimeter: f64,
    strictly_convex: bool,
}

impl HullReport {
    fn build(algo: Algorithm, points: &[Point2]) -> Self {
        let timed = timed_hull(algo, points);
        let elapsed_ms = timed.elapsed_ms();
        let poly = timed.value;
        Self {
            algo: algo.to_string(),
            n: points.len(),
            area: area(&poly),
            perimeter: perimeter(&poly),
            strictly_convex: is_strictly_convex_ccw(&poly),
            hull: poly.iter().map(|p| [p.x, p.y]).collect(),
            elapsed_ms,
        }
    }
}

fn hull(
    algo: Algorithm,
    input: Option<&Path>,
    n: usize,
    seed: u64,
    out: Option<&Path>,
) -> Result<()> {
    let points = match input {
        Some(path) => table::read_points(path)?,
        None => draw_points(
            SampleCfg {
                count: n,
                ..SampleCfg::default()
            },
            ReplayToken::new(seed),
        )?,
    };
    tracing::info!(%algo, n = points.len(), input = ?input, "hull");
    let report = HullReport::build(algo, &points);
    tracing::info!(
        vertices = report.hull.len(),
        elapsed_ms = report.elapsed_ms,
        area = report.area,
        "hull_done"
    );
    if report.hull.len() >= 3 && !report.strictly_convex {
        tracing::warn!(%algo, "hull is not strictly convex");
    }
    let body = serde_json::to_string_pretty(&report)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
            write_sidecar(
                path,
                Payload::new(
                    "hull",
                    json!({
                        "algo": algo.to_string(),
                        "input": input.map(|p| p.to_string_lossy().into_owned()),
                        "n": points.len(),
                        "seed": input.is_none().then_some(seed),
                    }),
                ),
            )?;
        }
        None => println!("{body}"),
    }
    Ok(())
}

fn perf(sizes: &[usize], hi: i32, seed: u64, out: &Path) -> Result<()> {
    tracing::info!(?sizes, hi, seed, out = %out.display(), "perf");
    let rows = perf_sweep(sizes, SampleShape::Square { lo: 0, hi }, seed)?;
    for row in &rows {
        tracing::info!(
            n = row.n,
            sweep_ms = row.sweep.as_secs_f64() * 1e3,
            exhaustive_ms = row.exhaustive.as_secs_f64() * 1e3,
            agree = row.agree,
            "perf_row"
        );
        if !row.agree {
            tracing::warn!(n = row.n, "builders disagree on vertex set");
        }
    }
    table::write_frame(&mut table::perf_frame(&rows)?, out)?;
    let replays: Vec<_> = rows
        .iter()
        .map(|r| json!({ "n": r.n, "seed": r.replay.seed, "index": r.replay.index }))
        .collect();
    write_sidecar(
        out,
        Payload::new(
            "perf",
            json!({ "sizes": sizes, "hi": hi, "seed": seed, "replays": replays }),
        ),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "chull_version": chull::VERSION,
        "algorithms": Algorithm::ALL.iter().map(|a| a.to_string()).collect::<Vec<_>>(),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
