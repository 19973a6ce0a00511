//! Planar Delaunay triangulation and its dual Voronoi edges.
//!
//! Purpose
//! - Bowyer-Watson incremental construction over an index-addressed triangle
//!   arena (`geom::Triangulation`), with per-point adjacency kept in sync by a
//!   single insert/remove choke point.
//! - Voronoi derivation from shared-edge adjacency and precomputed circumcenters.
//!
//! The library does no I/O and draws no random numbers. Point sourcing and
//! presentation live in the `cli` crate.

pub mod error;
pub mod geom;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeomError;
pub use geom::{
    triangulate, voronoi_from_triangulation, Edge, InsertStats, PointId, Triangle,
    TriangleId, Triangulation, TriangulateCfg, Triangulator, Vertex, VoronoiDiagram,
    VoronoiEdge,
};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::GeomError;
    pub use crate::geom::{
        triangulate, voronoi_from_triangulation, Edge, PointId, Triangle, TriangleId,
        Triangulation, TriangulateCfg, Triangulator, VoronoiDiagram, VoronoiEdge,
    };
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
