//! Triangulate a jittered grid and print counts of the primal and dual.
//!
//! Usage:
//!   cargo run -p delaunay-voronoi --example grid_dual -- 12

use delaunay_voronoi::{triangulate, voronoi_from_triangulation, Vec2};

fn main() {
    let side: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);
    let mut pts = Vec::with_capacity(side * side);
    for i in 0..side {
        for j in 0..side {
            // deterministic jitter breaks the cocircular grid ties
            let dx = ((i * 7 + j * 13) % 11) as f64 * 0.01;
            let dy = ((i * 5 + j * 3) % 17) as f64 * 0.01;
            pts.push(Vec2::new(i as f64 + dx, j as f64 + dy));
        }
    }
    let t = match triangulate(&pts, 1.0) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("triangulation failed: {e}");
            return;
        }
    };
    let v = voronoi_from_triangulation(&t);
    let hull_area: f64 = t.triangles().map(|(_, tri)| t.area(tri)).sum();
    println!(
        "points={} triangles={} voronoi_edges={} area={:.4} ok={}/{}",
        pts.len(),
        t.len(),
        v.len(),
        hull_area,
        t.is_ok(),
        v.is_ok()
    );
}
