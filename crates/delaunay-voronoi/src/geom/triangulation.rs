//! Triangle arena with point adjacency (the live triangle set).
//!
//! Invariants
//! - A `TriangleId` is live iff its slot holds `Some`.
//! - For every live triangle `t` and each of its vertices `v`,
//!   `vertices[v].triangles` contains `t`, and nothing else is in those sets.
//! - Only `insert_triangle` and `remove_triangle` touch either side of that
//!   relation, so the two cannot drift apart.
//!
//! Vacated slots go on a free list and are handed out again by the next insert.

use std::collections::HashMap;

use nalgebra::Vector2;

use super::triangle::Triangle;
use super::types::{Edge, InsertStats, PointId, TriangleId, Vertex};
use crate::parallelogram_area;

/// Result of a triangulation: the input points and the live triangles over them.
#[derive(Clone, Debug, Default)]
pub struct Triangulation {
    pub(crate) vertices: Vec<Vertex>,
    slots: Vec<Option<Triangle>>,
    free: Vec<TriangleId>,
    live: usize,
    pub(crate) stats: InsertStats,
}

impl Triangulation {
    pub(crate) fn with_points(points: &[Vector2<f64>]) -> Self {
        Self {
            vertices: points.iter().copied().map(Vertex::new).collect(),
            ..Self::default()
        }
    }

    pub(crate) fn push_vertex(&mut self, pos: Vector2<f64>) -> PointId {
        self.vertices.push(Vertex::new(pos));
        PointId(self.vertices.len() - 1)
    }

    /// Drop trailing vertices (the bounding corners) once nothing references them.
    pub(crate) fn truncate_vertices(&mut self, len: usize) {
        debug_assert!(self.vertices[len.min(self.vertices.len())..]
            .iter()
            .all(|v| v.triangles.is_empty()));
        self.vertices.truncate(len);
    }

    /// Build (but do not insert) the triangle over `vertices`.
    pub(crate) fn build_triangle(&self, vertices: [PointId; 3]) -> Triangle {
        Triangle::new(vertices, vertices.map(|v| self.vertices[v.0].pos))
    }

    /// Insert a triangle and register it with its three vertices.
    pub(crate) fn insert_triangle(&mut self, tri: Triangle) -> TriangleId {
        debug_assert!(tri.has_distinct_vertices());
        debug_assert!(tri.has_finite_circumcircle());
        let id = match self.free.pop() {
            Some(id) => id,
            None => {
                self.slots.push(None);
                TriangleId(self.slots.len() - 1)
            }
        };
        for v in tri.vertices() {
            self.vertices[v.0].triangles.insert(id);
        }
        self.slots[id.0] = Some(tri);
        self.live += 1;
        id
    }

    /// Remove a triangle and unregister it from its vertices. `None` if not live.
    pub(crate) fn remove_triangle(&mut self, id: TriangleId) -> Option<Triangle> {
        let tri = self.slots.get_mut(id.0)?.take()?;
        for v in tri.vertices() {
            self.vertices[v.0].triangles.remove(&id);
        }
        self.free.push(id);
        self.live -= 1;
        Some(tri)
    }

    /// Number of live triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Success flag: at least one triangle survived trimming.
    #[inline]
    pub fn is_ok(&self) -> bool {
        !self.is_empty()
    }

    #[inline]
    pub fn triangle(&self, id: TriangleId) -> Option<&Triangle> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Live triangles in slot order.
    pub fn triangles(&self) -> impl Iterator<Item = (TriangleId, &Triangle)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(k, slot)| slot.as_ref().map(|t| (TriangleId(k), t)))
    }

    /// Number of points (input points once triangulation has finished).
    #[inline]
    pub fn point_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn vertex(&self, id: PointId) -> Option<&Vertex> {
        self.vertices.get(id.0)
    }

    pub fn vertices(&self) -> impl Iterator<Item = (PointId, &Vertex)> + '_ {
        self.vertices.iter().enumerate().map(|(k, v)| (PointId(k), v))
    }

    /// Coordinates of the three vertices of `tri`.
    pub fn positions(&self, tri: &Triangle) -> [Vector2<f64>; 3] {
        tri.vertices().map(|v| self.vertices[v.0].pos)
    }

    /// Unsigned area of `tri`.
    pub fn area(&self, tri: &Triangle) -> f64 {
        let [a, b, c] = self.positions(tri);
        0.5 * parallelogram_area(b - a, c - a).abs()
    }

    /// Live triangles sharing exactly two vertices (one edge) with `id`, sorted by id.
    ///
    /// Built from the union of the three vertices' adjacency sets: a triangle
    /// seen twice in that union shares an edge, once only a corner.
    pub fn shared_edge_neighbors(&self, id: TriangleId) -> Vec<TriangleId> {
        let Some(tri) = self.triangle(id) else {
            return Vec::new();
        };
        let mut seen: HashMap<TriangleId, u8> = HashMap::new();
        for v in tri.vertices() {
            for &other in &self.vertices[v.0].triangles {
                if other != id {
                    *seen.entry(other).or_insert(0) += 1;
                }
            }
        }
        let mut out: Vec<TriangleId> = seen
            .into_iter()
            .filter(|&(_, n)| n == 2)
            .map(|(t, _)| t)
            .collect();
        out.sort_unstable();
        out
    }

    /// The live triangle other than `id` that also has `edge`, if any.
    pub fn neighbor_across(&self, id: TriangleId, edge: Edge<PointId>) -> Option<TriangleId> {
        let (a, b) = edge.endpoints();
        let at_b = &self.vertices.get(b.0)?.triangles;
        self.vertices
            .get(a.0)?
            .triangles
            .iter()
            .copied()
            .find(|&t| t != id && at_b.contains(&t))
    }

    /// Counters from the insertion run that produced this triangulation.
    #[inline]
    pub fn stats(&self) -> InsertStats {
        self.stats
    }

    /// Check that point adjacency sets mirror triangle membership exactly.
    pub fn adjacency_consistent(&self) -> bool {
        let forward = self.triangles().all(|(id, t)| {
            t.vertices()
                .iter()
                .all(|v| self.vertices.get(v.0).is_some_and(|vx| vx.triangles.contains(&id)))
        });
        let backward = self.vertices().all(|(pid, v)| {
            v.triangles
                .iter()
                .all(|&t| self.triangle(t).is_some_and(|tri| tri.has_vertex(pid)))
        });
        let incidences: usize = self.vertices.iter().map(Vertex::degree).sum();
        forward && backward && incidences == 3 * self.live
    }
}
