//! Bowyer-Watson incremental Delaunay triangulation.
//!
//! Model
//! - Seed the arena with one bounding triangle whose corners sit `20Δ` away
//!   from the centre of the margin-inflated bounding box (`Δ` = larger side).
//! - Insert input points in order. Each insertion removes the cavity and fans
//!   its boundary (edges used by exactly one removed triangle) to the new point.
//!   The cavity is grown from the triangle enclosing the point across edges
//!   whose far triangle has the point strictly inside its circumcircle.
//! - Finally drop every triangle touching a bounding corner.
//!
//! Degenerate input policy (best effort, never panics on finite input)
//! - An input point with exactly the same coordinates as an earlier one is
//!   skipped; it keeps its `PointId` with no incident triangles.
//! - Near-cocircular input can make the circumcircle test disagree between
//!   neighbours. The cavity therefore also grows across any boundary edge the
//!   point does not see strictly from inside (`eps_collinear`), so it stays one
//!   star-shaped region and every fan triangle is properly oriented.
//! - A fan triangle that is still collinear within `eps_collinear`, or whose
//!   circumcircle is not finite, is not created.
//! - Cavity edges counted three or more times are discarded like interior
//!   edges and reported in `InsertStats::nonmanifold_edges`.
//!
//! Hull slivers
//! - A triangle whose circumcircle reaches a bounding corner is dropped with
//!   it. Near an almost flat stretch of hull this loses thin slivers, so the
//!   triangle areas can fall short of the hull area; they never exceed it.
//!   Points further than about `L²/(80Δ)` from every hull edge of length `L`
//!   they do not lie on are unaffected.
//!
//! Code cross-refs: `Triangulation::{insert_triangle, remove_triangle, neighbor_across}`,
//! `Triangle::contains`, `TriangulateCfg`.

use std::collections::{HashMap, HashSet};

use nalgebra::Vector2;
use tracing::{debug, debug_span, trace};

use super::triangle::{encloses, is_degenerate, sees_edge, Triangle};
use super::triangulation::Triangulation;
use super::types::{Edge, PointId, TriangleId, TriangulateCfg};
use crate::error::GeomError;

/// Distance of the bounding corners from the box centre, in units of the larger box side.
const SUPRA_SCALE: f64 = 20.0;

/// Bowyer-Watson driver.
///
/// Owns the scratch collections reused across insertions. `triangulate` takes
/// `&mut self`, so one instance serves one computation at a time.
#[derive(Clone, Debug, Default)]
pub struct Triangulator {
    cfg: TriangulateCfg,
    bad: Vec<TriangleId>,
    marked: HashSet<TriangleId>,
    stack: Vec<TriangleId>,
    edge_counts: HashMap<Edge<PointId>, u32>,
    boundary: Vec<Edge<PointId>>,
}

impl Triangulator {
    pub fn new(cfg: TriangulateCfg) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    #[inline]
    pub fn cfg(&self) -> TriangulateCfg {
        self.cfg
    }

    /// Delaunay triangulation of `points`. Triangle vertices are input indices.
    ///
    /// Empty input is not an error: the result is empty and `is_ok()` is false.
    pub fn triangulate(&mut self, points: &[Vector2<f64>]) -> Result<Triangulation, GeomError> {
        self.validate(points)?;
        let span = debug_span!("triangulate", n = points.len(), margin = self.cfg.margin);
        let _enter = span.enter();

        let mut tri = Triangulation::with_points(points);
        let Some(corners) = supra_corners(points, self.cfg.margin) else {
            debug!("no extent to enclose; returning empty triangulation");
            return Ok(tri);
        };
        let supra = corners.map(|p| tri.push_vertex(p));
        let seed = tri.build_triangle(supra);
        if !seed.has_finite_circumcircle() {
            debug!("bounding triangle is degenerate; returning empty triangulation");
            tri.truncate_vertices(points.len());
            return Ok(tri);
        }
        tri.insert_triangle(seed);

        let mut seen: HashSet<(u64, u64)> = HashSet::with_capacity(points.len());
        for (k, p) in points.iter().enumerate() {
            // + 0.0 folds -0.0 into 0.0
            if !seen.insert(((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())) {
                debug!(index = k, x = p.x, y = p.y, "duplicate point skipped");
                tri.stats.duplicates_skipped += 1;
                continue;
            }
            self.insert_point(&mut tri, PointId(k));
        }

        self.trim_supra(&mut tri, supra);
        tri.truncate_vertices(points.len());
        debug_assert!(tri.adjacency_consistent());
        debug!(
            triangles = tri.len(),
            inserted = tri.stats.inserted,
            duplicates = tri.stats.duplicates_skipped,
            degenerate = tri.stats.degenerate_skipped,
            nonmanifold = tri.stats.nonmanifold_edges,
            "triangulated"
        );
        Ok(tri)
    }

    fn validate(&self, points: &[Vector2<f64>]) -> Result<(), GeomError> {
        let TriangulateCfg {
            margin,
            eps_collinear,
        } = self.cfg;
        if !margin.is_finite() || margin < 0.0 {
            return Err(GeomError::InvalidMargin(margin));
        }
        if !eps_collinear.is_finite() || eps_collinear < 0.0 {
            return Err(GeomError::InvalidTolerance(eps_collinear));
        }
        match points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            Some(index) => Err(GeomError::NonFiniteCoordinate { index }),
            None => Ok(()),
        }
    }

    fn insert_point(&mut self, tri: &mut Triangulation, p: PointId) {
        let pos = tri.vertices[p.0].pos;
        let Some(seed) = locate(tri, pos) else {
            debug!(point = %p, "point outside every triangle skipped");
            return;
        };

        // cavity: flood from the enclosing triangle
        self.bad.clear();
        self.marked.clear();
        self.stack.clear();
        self.marked.insert(seed);
        self.stack.push(seed);
        while let Some(id) = self.stack.pop() {
            self.bad.push(id);
            let Some(v) = tri.triangle(id).map(|t| t.vertices()) else {
                continue;
            };
            for k in 0..3 {
                let (a, b, c) = (v[k], v[(k + 1) % 3], v[(k + 2) % 3]);
                let Some(n) = tri.neighbor_across(id, Edge::new(a, b)) else {
                    continue;
                };
                if self.marked.contains(&n) {
                    continue;
                }
                let conflict = tri.triangle(n).is_some_and(|t| t.contains(pos));
                let [pa, pb, pc] = [a, b, c].map(|x| tri.vertices[x.0].pos);
                let visible = sees_edge(pa, pb, pc, pos, self.cfg.eps_collinear);
                if !conflict && !visible {
                    trace!(point = %p, triangle = %n, "cavity grown across hidden edge");
                }
                if conflict || !visible {
                    self.marked.insert(n);
                    self.stack.push(n);
                }
            }
        }
        self.bad.sort_unstable();

        // cavity boundary: edges used by exactly one bad triangle
        self.edge_counts.clear();
        for t in self.bad.iter().filter_map(|&id| tri.triangle(id)) {
            for e in t.edges() {
                *self.edge_counts.entry(e).or_insert(0) += 1;
            }
        }
        self.boundary.clear();
        for (&e, &count) in &self.edge_counts {
            match count {
                1 => self.boundary.push(e),
                2 => {}
                _ => {
                    debug!(point = %p, count, "non-manifold cavity edge discarded");
                    tri.stats.nonmanifold_edges += 1;
                }
            }
        }
        self.boundary.sort_unstable();

        for &id in &self.bad {
            tri.remove_triangle(id);
        }

        for &e in &self.boundary {
            let (a, b) = e.endpoints();
            if a == p || b == p {
                continue;
            }
            let cand = tri.build_triangle([p, a, b]);
            let [pa, pb, pc] = tri.positions(&cand);
            if is_degenerate(pa, pb, pc, self.cfg.eps_collinear) || !cand.has_finite_circumcircle()
            {
                trace!(point = %p, a = %a, b = %b, "degenerate fan triangle skipped");
                tri.stats.degenerate_skipped += 1;
                continue;
            }
            tri.insert_triangle(cand);
        }
        tri.stats.inserted += 1;
    }

    fn trim_supra(&mut self, tri: &mut Triangulation, supra: [PointId; 3]) {
        self.bad.clear();
        for c in supra {
            self.bad.extend(tri.vertices[c.0].triangles.iter().copied());
        }
        self.bad.sort_unstable();
        self.bad.dedup();
        for &id in &self.bad {
            tri.remove_triangle(id);
        }
    }
}

/// Triangle enclosing `pos`, else the one whose circumcircle contains it deepest.
fn locate(tri: &Triangulation, pos: Vector2<f64>) -> Option<TriangleId> {
    tri.triangles()
        .find(|(_, t)| {
            let [a, b, c] = tri.positions(t);
            encloses(a, b, c, pos)
        })
        .or_else(|| {
            tri.triangles()
                .filter(|(_, t)| t.contains(pos))
                .max_by(|(_, s), (_, t)| depth(s, pos).total_cmp(&depth(t, pos)))
        })
        .map(|(id, _)| id)
}

#[inline]
fn depth(t: &Triangle, pos: Vector2<f64>) -> f64 {
    t.circumradius().powi(2) - (pos - t.circumcenter()).norm_squared()
}

/// Corners of the bounding triangle, or `None` if the inflated box has no extent.
fn supra_corners(points: &[Vector2<f64>], margin: f64) -> Option<[Vector2<f64>; 3]> {
    let first = points.first()?;
    let (mut lo, mut hi) = (*first, *first);
    for p in &points[1..] {
        lo = lo.inf(p);
        hi = hi.sup(p);
    }
    let lo = lo.add_scalar(-margin);
    let hi = hi.add_scalar(margin);
    let d = hi - lo;
    let delta = d.x.max(d.y);
    if delta <= 0.0 {
        return None;
    }
    let mid = (lo + hi) / 2.0;
    Some([
        Vector2::new(mid.x - SUPRA_SCALE * delta, mid.y - delta),
        Vector2::new(mid.x, mid.y + SUPRA_SCALE * delta),
        Vector2::new(mid.x + SUPRA_SCALE * delta, mid.y - delta),
    ])
}

/// One-shot triangulation with default tolerances and the given margin.
pub fn triangulate(points: &[Vector2<f64>], margin: f64) -> Result<Triangulation, GeomError> {
    Triangulator::new(TriangulateCfg {
        margin,
        ..TriangulateCfg::default()
    })
    .triangulate(points)
}
