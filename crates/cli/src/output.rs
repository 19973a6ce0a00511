//! JSON document written by `cli run`.
//!
//! Triangles are renumbered densely in arena order; Voronoi edges refer to
//! that numbering rather than to arena slot ids.

use anyhow::{Context, Result};
use delaunay_voronoi::{TriangleId, Triangulation, VoronoiDiagram};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct TriangleOut {
    pub vertices: [usize; 3],
    pub circumcenter: [f64; 2],
    pub circumradius: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VoronoiEdgeOut {
    pub triangles: [usize; 2],
    pub a: [f64; 2],
    pub b: [f64; 2],
}

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub struct StatsOut {
    pub inserted: usize,
    pub duplicates_skipped: usize,
    pub degenerate_skipped: usize,
    pub nonmanifold_edges: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
    pub points: Vec<[f64; 2]>,
    pub triangles: Vec<TriangleOut>,
    pub voronoi_edges: Vec<VoronoiEdgeOut>,
    pub ok_triangulation: bool,
    pub ok_voronoi: bool,
    pub stats: StatsOut,
}

#[inline]
fn xy(v: Vector2<f64>) -> [f64; 2] {
    [v.x, v.y]
}

impl Report {
    pub fn build(points: &[Vector2<f64>], tri: &Triangulation, vor: &VoronoiDiagram) -> Self {
        let mut index: HashMap<TriangleId, usize> = HashMap::with_capacity(tri.len());
        let triangles: Vec<TriangleOut> = tri
            .triangles()
            .enumerate()
            .map(|(k, (id, t))| {
                index.insert(id, k);
                TriangleOut {
                    vertices: t.vertices().map(|v| v.0),
                    circumcenter: xy(t.circumcenter()),
                    circumradius: t.circumradius(),
                }
            })
            .collect();
        let voronoi_edges: Vec<VoronoiEdgeOut> = vor
            .iter()
            .filter_map(|e| {
                let (s, u) = e.key.endpoints();
                Some(VoronoiEdgeOut {
                    triangles: [*index.get(&s)?, *index.get(&u)?],
                    a: xy(e.a),
                    b: xy(e.b),
                })
            })
            .collect();
        let st = tri.stats();
        Self {
            points: points.iter().copied().map(xy).collect(),
            triangles,
            voronoi_edges,
            ok_triangulation: tri.is_ok(),
            ok_voronoi: vor.is_ok(),
            stats: StatsOut {
                inserted: st.inserted,
                duplicates_skipped: st.duplicates_skipped,
                degenerate_skipped: st.degenerate_skipped,
                nonmanifold_edges: st.nonmanifold_edges,
            },
        }
    }
}

pub fn write_json(out: &Path, doc: &Report) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
