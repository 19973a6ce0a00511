//! Identifiers, the unordered edge key, vertices and configuration.
//!
//! - `PointId` / `TriangleId`: identity of arena entities. Two points at the
//!   same coordinates are distinct when their ids differ.
//! - `Edge<I>`: unordered pair, normalized so that equality and hashing are
//!   symmetric under swapping the endpoints.
//! - `TriangulateCfg`: margin and collinearity tolerance.

use std::collections::HashSet;
use std::fmt;

use nalgebra::Vector2;

/// Identity of a point. Input point `i` is `PointId(i)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

/// Identity of a triangle slot in the arena. Slots are reused after removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriangleId(pub usize);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

impl fmt::Display for TriangleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Unordered pair of ids. `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge<I> {
    lo: I,
    hi: I,
}

impl<I: Ord + Copy> Edge<I> {
    #[inline]
    pub fn new(a: I, b: I) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Endpoints with the smaller id first.
    #[inline]
    pub fn endpoints(&self) -> (I, I) {
        (self.lo, self.hi)
    }

    #[inline]
    pub fn contains(&self, v: I) -> bool {
        self.lo == v || self.hi == v
    }
}

/// A point entity: its position and the live triangles using it as a vertex.
///
/// The adjacency set is only mutated by `Triangulation::insert_triangle` and
/// `Triangulation::remove_triangle`.
#[derive(Clone, Debug)]
pub struct Vertex {
    pub(crate) pos: Vector2<f64>,
    pub(crate) triangles: HashSet<TriangleId>,
}

impl Vertex {
    pub(crate) fn new(pos: Vector2<f64>) -> Self {
        Self {
            pos,
            triangles: HashSet::new(),
        }
    }

    #[inline]
    pub fn position(&self) -> Vector2<f64> {
        self.pos
    }

    /// Live triangles that reference this vertex (unordered).
    pub fn triangles(&self) -> impl Iterator<Item = TriangleId> + '_ {
        self.triangles.iter().copied()
    }

    /// Number of live triangles incident to this vertex.
    #[inline]
    pub fn degree(&self) -> usize {
        self.triangles.len()
    }
}

/// Triangulation configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangulateCfg {
    /// Inflation applied to each side of the input bounding box before the
    /// bounding triangle is built.
    pub margin: f64,
    /// A candidate triangle `(a, b, c)` is dropped when
    /// `|cross(b - a, c - a)| <= eps_collinear * |b - a| * |c - a|`.
    pub eps_collinear: f64,
}

impl Default for TriangulateCfg {
    fn default() -> Self {
        Self {
            margin: 1.0,
            eps_collinear: 1e-12,
        }
    }
}

/// Counters collected while inserting points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InsertStats {
    /// Points that went through cavity retriangulation.
    pub inserted: usize,
    /// Points skipped because an earlier input point has identical coordinates.
    pub duplicates_skipped: usize,
    /// Retriangulation candidates dropped as collinear or with a non-finite circumcircle.
    pub degenerate_skipped: usize,
    /// Cavity edges seen three or more times and discarded.
    pub nonmanifold_edges: usize,
}
