//! Bounded Voronoi edges as the dual of a Delaunay triangulation.
//!
//! Every pair of triangles sharing an edge contributes one Voronoi edge
//! between their circumcenters. Hull edges have a single incident triangle and
//! contribute nothing, so boundary cells stay open.

use std::collections::HashSet;

use nalgebra::Vector2;
use tracing::debug;

use super::triangulation::Triangulation;
use super::types::{Edge, TriangleId};

/// A Voronoi edge: the dual of the Delaunay edge shared by `key`'s two triangles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoronoiEdge {
    /// The two dual triangles; `a` is the circumcenter of the smaller id.
    pub key: Edge<TriangleId>,
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl VoronoiEdge {
    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }
}

/// Bounded Voronoi edges, sorted by key.
#[derive(Clone, Debug, Default)]
pub struct VoronoiDiagram {
    pub edges: Vec<VoronoiEdge>,
}

impl VoronoiDiagram {
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Success flag: at least one edge.
    #[inline]
    pub fn is_ok(&self) -> bool {
        !self.edges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VoronoiEdge> {
        self.edges.iter()
    }
}

/// Derive the Voronoi edges of `tri` from shared-edge adjacency.
///
/// Each neighbor pair is visited from both sides; the symmetric key keeps one.
pub fn voronoi_from_triangulation(tri: &Triangulation) -> VoronoiDiagram {
    let mut keys: HashSet<Edge<TriangleId>> = HashSet::new();
    for (id, _) in tri.triangles() {
        for nb in tri.shared_edge_neighbors(id) {
            keys.insert(Edge::new(id, nb));
        }
    }
    let mut keys: Vec<Edge<TriangleId>> = keys.into_iter().collect();
    keys.sort_unstable();

    let edges: Vec<VoronoiEdge> = keys
        .into_iter()
        .filter_map(|key| {
            let (s, t) = key.endpoints();
            let a = tri.triangle(s)?.circumcenter();
            let b = tri.triangle(t)?.circumcenter();
            Some(VoronoiEdge { key, a, b })
        })
        .collect();
    debug!(triangles = tri.len(), edges = edges.len(), "voronoi derived");
    VoronoiDiagram { edges }
}
