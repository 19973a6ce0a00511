//! Property tests over random point clouds.

use super::tests::{hull, polygon_area, total_area};
use super::*;
use nalgebra::Vector2;
use proptest::prelude::*;
use std::f64::consts::TAU;

fn cloud() -> impl Strategy<Value = Vec<Vector2<f64>>> {
    prop::collection::vec((0.0f64..1000.0, 0.0f64..1000.0), 3..60)
        .prop_map(|v| v.into_iter().map(|(x, y)| Vector2::new(x, y)).collect())
}

/// Points at random angles on one circle: every circumcircle test is a near tie.
fn ring() -> impl Strategy<Value = Vec<Vector2<f64>>> {
    prop::collection::vec(0.0f64..TAU, 3..120).prop_map(|v| {
        v.into_iter()
            .map(|a| Vector2::new(500.0 * a.cos(), 500.0 * a.sin()))
            .collect()
    })
}

fn check_mesh_shape(pts: &[Vector2<f64>], t: &Triangulation) -> Result<(), TestCaseError> {
    prop_assert!(t.adjacency_consistent());
    prop_assert_eq!(t.stats().nonmanifold_edges, 0);
    for (id, _) in t.triangles() {
        prop_assert!(t.shared_edge_neighbors(id).len() <= 3);
    }
    // Euler: a triangulation of n points with h hull corners has 2n - 2 - h
    // triangles; trimmed hull slivers only lower the count.
    let n = t.stats().inserted;
    let h = hull(pts).len();
    if h >= 3 {
        prop_assert!(t.len() + 2 + h <= 2 * n, "{} triangles, n={}, h={}", t.len(), n, h);
    }
    let hull_area = polygon_area(&hull(pts));
    prop_assert!(total_area(t) <= hull_area * (1.0 + 1e-9) + 1e-9);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn no_point_strictly_inside_any_circumcircle(pts in cloud()) {
        let t = triangulate(&pts, 1.0).unwrap();
        for (_, tri) in t.triangles() {
            let r2 = tri.circumradius().powi(2);
            for (k, p) in pts.iter().enumerate() {
                if tri.has_vertex(PointId(k)) {
                    continue;
                }
                let d2 = (p - tri.circumcenter()).norm_squared();
                prop_assert!(d2 >= r2 * (1.0 - 1e-9), "point {} inside {:?}", k, tri.vertices());
            }
        }
    }

    #[test]
    fn adjacency_mirrors_membership(pts in cloud()) {
        let t = triangulate(&pts, 1.0).unwrap();
        prop_assert!(t.adjacency_consistent());
        prop_assert_eq!(t.point_count(), pts.len());
        for (_, tri) in t.triangles() {
            let [a, b, c] = tri.vertices();
            prop_assert!(a != b && b != c && a != c);
            prop_assert!(tri.vertices().iter().all(|v| v.0 < pts.len()));
            prop_assert!(tri.circumradius().is_finite());
        }
    }

    #[test]
    fn voronoi_duals_share_an_edge(pts in cloud()) {
        let t = triangulate(&pts, 1.0).unwrap();
        let v = voronoi_from_triangulation(&t);
        prop_assert_eq!(v.is_ok(), !v.is_empty());
        for e in v.iter() {
            let (s, u) = e.key.endpoints();
            let (ts, tu) = (t.triangle(s).unwrap(), t.triangle(u).unwrap());
            prop_assert_eq!(ts.shared_vertex_count(tu), 2);
        }
    }

    #[test]
    fn same_input_same_triangles(pts in cloud()) {
        let a = triangulate(&pts, 1.0).unwrap();
        let b = triangulate(&pts, 1.0).unwrap();
        let ta: Vec<_> = a.triangles().map(|(id, t)| (id, t.vertices())).collect();
        let tb: Vec<_> = b.triangles().map(|(id, t)| (id, t.vertices())).collect();
        prop_assert_eq!(ta, tb);
    }

    #[test]
    fn triangles_stay_within_hull_and_euler_bound(pts in cloud()) {
        let t = triangulate(&pts, 1.0).unwrap();
        check_mesh_shape(&pts, &t)?;
        if t.stats().inserted >= 20 {
            let hull_area = polygon_area(&hull(&pts));
            prop_assert!(hull_area - total_area(&t) <= 0.02 * hull_area);
        }
    }

    #[test]
    fn cocircular_points_still_form_a_triangulation(pts in ring()) {
        let t = triangulate(&pts, 1.0).unwrap();
        check_mesh_shape(&pts, &t)?;
        // Convex position: at most n - 2 triangles.
        prop_assert!(t.len() + 2 <= t.stats().inserted.max(2));
    }
}
