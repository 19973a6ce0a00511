//! `<output>.provenance.json`: what produced a mesh file and what it holds.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::output::{Report, StatsOut};

/// Counts and timings of one `run`, recorded next to its output.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub points: usize,
    pub triangles: usize,
    pub voronoi_edges: usize,
    pub ok_triangulation: bool,
    pub ok_voronoi: bool,
    pub stats: StatsOut,
    pub delaunay_us: u64,
    pub voronoi_us: u64,
}

impl RunSummary {
    pub fn new(doc: &Report, delaunay_us: u64, voronoi_us: u64) -> Self {
        Self {
            points: doc.points.len(),
            triangles: doc.triangles.len(),
            voronoi_edges: doc.voronoi_edges.len(),
            ok_triangulation: doc.ok_triangulation,
            ok_voronoi: doc.ok_voronoi,
            stats: doc.stats,
            delaunay_us,
            voronoi_us,
        }
    }
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    crate_version: &'static str,
    output: String,
    params: &'a Value,
    summary: &'a RunSummary,
}

/// Write the sidecar for `output` and return its path.
pub fn write_sidecar(output: &Path, params: &Value, summary: &RunSummary) -> Result<PathBuf> {
    let path = sidecar_path(output);
    let doc = Sidecar {
        code_rev: current_git_rev(),
        crate_version: delaunay_voronoi::VERSION,
        output: output.to_string_lossy().into_owned(),
        params,
        summary,
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mesh".to_string());
    output.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit of the running build: `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    [
        option_env!("GIT_COMMIT").map(str::to_owned),
        std::env::var("GIT_COMMIT").ok(),
    ]
    .into_iter()
    .flatten()
    .find(|rev| !rev.is_empty())
    .or_else(git_head)
    .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    out.status
        .success()
        .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
}
