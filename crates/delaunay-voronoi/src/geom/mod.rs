//! Delaunay triangulation and Voronoi duals in the plane.
//!
//! Purpose
//! - `Triangulator`: Bowyer-Watson insertion with a synthetic bounding
//!   triangle that is trimmed at the end.
//! - `Triangulation`: arena of triangles addressed by `TriangleId`, with a free
//!   list and per-point adjacency sets that mirror triangle membership.
//! - `voronoi_from_triangulation`: bounded Voronoi edges joining circumcenters
//!   of triangles that share an edge.
//!
//! Numerics
//! - Circumcircle membership is strict on squared distances; a point exactly on
//!   the circle is outside.
//! - Near-collinear retriangulation candidates are dropped under
//!   `TriangulateCfg::eps_collinear` instead of entering the arena.
//!
//! Code cross-refs: `types::{PointId, TriangleId, Edge, Vertex}`,
//! `triangle::Triangle`, `bowyer_watson::Triangulator`, `voronoi::VoronoiDiagram`.

mod bowyer_watson;
mod triangle;
mod triangulation;
mod types;
mod voronoi;

pub use bowyer_watson::{triangulate, Triangulator};
pub use triangle::{circumcircle, Triangle};
pub use triangulation::Triangulation;
pub use types::{Edge, InsertStats, PointId, TriangleId, TriangulateCfg, Vertex};
pub use voronoi::{voronoi_from_triangulation, VoronoiDiagram, VoronoiEdge};

#[cfg(test)]
mod proptests;
