//! Point sources on disk: CSV (columns `x`, `y`) via Polars, or a JSON array of `[x, y]`.

use anyhow::{anyhow, bail, Context, Result};
use nalgebra::Vector2;
use polars::prelude::*;
use std::fs;
use std::path::Path;

pub fn load_points(path: &Path) -> Result<Vec<Vector2<f64>>> {
    let points = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_csv(path)?,
        Some("json") => load_json(path)?,
        _ => bail!(
            "unsupported points file {} (expected .csv or .json)",
            path.display()
        ),
    };
    tracing::info!(path = %path.display(), points = points.len(), "points loaded");
    Ok(points)
}

fn load_csv(path: &Path) -> Result<Vec<Vector2<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vector2::new(x, y)),
            _ => Err(anyhow!("missing coordinate in {} at row {row}", path.display())),
        })
        .collect()
}

fn load_json(path: &Path) -> Result<Vec<Vector2<f64>>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(raw.into_iter().map(|[x, y]| Vector2::new(x, y)).collect())
}
