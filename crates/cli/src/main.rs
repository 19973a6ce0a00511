use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use delaunay_voronoi::{triangulate, voronoi_from_triangulation};
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod output;
mod provenance;
mod sample;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Delaunay triangulation and Voronoi edges for planar point sets")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate a point set and write triangles plus Voronoi edges as JSON
    Run {
        /// Points file: `.csv` with `x`,`y` columns or `.json` array of `[x, y]`
        #[arg(long, conflicts_with = "random")]
        input: Option<String>,
        /// Draw this many uniform points in [0,width)×[0,height) instead
        #[arg(long)]
        random: Option<usize>,
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        #[arg(long, default_value_t = 600.0)]
        height: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Bounding-box inflation before the bounding triangle is built
        #[arg(long, default_value_t = 1.0)]
        margin: f64,
        #[arg(long)]
        out: String,
    },
    /// Print the git commit and library version as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            random,
            width,
            height,
            seed,
            margin,
            out,
        } => {
            let source = match (input, random) {
                (Some(path), _) => Source::File(path),
                (None, Some(n)) => Source::Uniform {
                    n,
                    width,
                    height,
                    seed,
                },
                (None, None) => bail!("either --input or --random is required"),
            };
            run(source, margin, out)
        }
        Action::Report => report(),
    }
}

enum Source {
    File(String),
    Uniform {
        n: usize,
        width: f64,
        height: f64,
        seed: u64,
    },
}

fn run(source: Source, margin: f64, out: String) -> Result<()> {
    let (points, params) = match &source {
        Source::File(path) => (
            input::load_points(Path::new(path))?,
            serde_json::json!({ "input": path, "margin": margin }),
        ),
        Source::Uniform {
            n,
            width,
            height,
            seed,
        } => {
            let tok = sample::ReplayToken {
                seed: *seed,
                index: 0,
            };
            (
                sample::uniform_points(*n, *width, *height, tok),
                serde_json::json!({
                    "random": n, "width": width, "height": height, "seed": seed, "margin": margin
                }),
            )
        }
    };
    tracing::info!(points = points.len(), margin, out = %out, "run");

    let started = Instant::now();
    let tri = triangulate(&points, margin).context("triangulating input points")?;
    let delaunay_us = started.elapsed().as_micros() as u64;
    tracing::info!(
        triangles = tri.len(),
        ok = tri.is_ok(),
        elapsed_us = delaunay_us,
        "delaunay"
    );

    let started = Instant::now();
    let vor = voronoi_from_triangulation(&tri);
    let voronoi_us = started.elapsed().as_micros() as u64;
    tracing::info!(
        edges = vor.len(),
        ok = vor.is_ok(),
        elapsed_us = voronoi_us,
        "voronoi"
    );

    let doc = output::Report::build(&points, &tri, &vor);
    let out = Path::new(&out);
    output::write_json(out, &doc)?;
    let summary = provenance::RunSummary::new(&doc, delaunay_us, voronoi_us);
    let prov = provenance::write_sidecar(out, &params, &summary)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "crate_version": delaunay_voronoi::VERSION
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
