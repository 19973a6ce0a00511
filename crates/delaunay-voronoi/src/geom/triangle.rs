use nalgebra::Vector2;

use super::types::{Edge, PointId};
use crate::parallelogram_area;

/// Circumcenter and squared circumradius of `(a, b, c)`.
///
/// Closed form for the intersection of the perpendicular bisectors, evaluated
/// relative to `a`. Collinear inputs give non-finite values.
pub fn circumcircle(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> (Vector2<f64>, f64) {
    let ab = b - a;
    let ac = c - a;
    let d = 2.0 * parallelogram_area(ab, ac);
    let ab2 = ab.norm_squared();
    let ac2 = ac.norm_squared();
    let u = Vector2::new((ac.y * ab2 - ab.y * ac2) / d, (ab.x * ac2 - ac.x * ab2) / d);
    (a + u, u.norm_squared())
}

/// True if `(a, b, c)` is too close to collinear to get a trustworthy circumcircle.
pub(crate) fn is_degenerate(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, eps: f64) -> bool {
    let ab = b - a;
    let ac = c - a;
    parallelogram_area(ab, ac).abs() <= eps * ab.norm() * ac.norm()
}

/// True if `p` lies strictly on the same side of line `ab` as `c`, far enough
/// that [`is_degenerate`] accepts the triangle `(p, a, b)`.
pub(crate) fn sees_edge(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    p: Vector2<f64>,
    eps: f64,
) -> bool {
    let ab = b - a;
    let ap = p - a;
    let side = parallelogram_area(ab, c - a).signum();
    parallelogram_area(ab, ap) * side > eps * ap.norm() * ab.norm().max((p - b).norm())
}

/// True if `p` is inside or on the boundary of triangle `(a, b, c)`.
pub(crate) fn encloses(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, p: Vector2<f64>) -> bool {
    let d1 = parallelogram_area(b - a, p - a);
    let d2 = parallelogram_area(c - b, p - b);
    let d3 = parallelogram_area(a - c, p - c);
    (d1 >= 0.0 && d2 >= 0.0 && d3 >= 0.0) || (d1 <= 0.0 && d2 <= 0.0 && d3 <= 0.0)
}

/// A triangle with its circumcircle fixed at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    vertices: [PointId; 3],
    circumcenter: Vector2<f64>,
    radius_sq: f64,
}

impl Triangle {
    /// `positions[k]` must be the position of `vertices[k]`.
    pub(crate) fn new(vertices: [PointId; 3], positions: [Vector2<f64>; 3]) -> Self {
        let (circumcenter, radius_sq) = circumcircle(positions[0], positions[1], positions[2]);
        Self {
            vertices,
            circumcenter,
            radius_sq,
        }
    }

    #[inline]
    pub fn vertices(&self) -> [PointId; 3] {
        self.vertices
    }

    #[inline]
    pub fn circumcenter(&self) -> Vector2<f64> {
        self.circumcenter
    }

    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.radius_sq.sqrt()
    }

    /// Strict circumcircle test: points on the circle are outside.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        (p - self.circumcenter).norm_squared() < self.radius_sq
    }

    #[inline]
    pub fn has_vertex(&self, v: PointId) -> bool {
        self.vertices.contains(&v)
    }

    pub fn edges(&self) -> [Edge<PointId>; 3] {
        let [a, b, c] = self.vertices;
        [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)]
    }

    /// Number of vertices shared with `other` (0..=3).
    pub fn shared_vertex_count(&self, other: &Triangle) -> usize {
        self.vertices
            .iter()
            .filter(|v| other.vertices.contains(v))
            .count()
    }

    pub(crate) fn has_finite_circumcircle(&self) -> bool {
        self.circumcenter.x.is_finite() && self.circumcenter.y.is_finite() && self.radius_sq.is_finite()
    }

    pub(crate) fn has_distinct_vertices(&self) -> bool {
        let [a, b, c] = self.vertices;
        a != b && b != c && a != c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn tri(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Triangle {
        Triangle::new([PointId(0), PointId(1), PointId(2)], [a, b, c])
    }

    #[test]
    fn circumcircle_of_right_triangle_is_hypotenuse_midpoint() {
        let t = tri(vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]);
        assert_eq!(t.circumcenter(), vector![0.5, 0.5]);
        assert!((t.circumradius() - 0.5_f64.sqrt()).abs() < 1e-15);
        assert!(t.has_finite_circumcircle());
    }

    #[test]
    fn circumcenter_is_equidistant() {
        let a = vector![0.3, -1.2];
        let b = vector![4.1, 0.7];
        let c = vector![-2.0, 3.3];
        let t = tri(a, b, c);
        let r = t.circumradius();
        for p in [a, b, c] {
            assert!(((p - t.circumcenter()).norm() - r).abs() < 1e-12);
        }
    }

    #[test]
    fn contains_is_strict() {
        let t = tri(vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]);
        assert!(t.contains(vector![0.5, 0.5]));
        assert!(t.contains(vector![0.9, 0.9]));
        // Fourth corner of the unit square lies exactly on the circle.
        assert!(!t.contains(vector![1.0, 1.0]));
        // Vertices are on the circle as well.
        assert!(!t.contains(vector![0.0, 0.0]));
        assert!(!t.contains(vector![10.0, 10.0]));
    }

    #[test]
    fn collinear_triangle_is_degenerate() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        let c = vector![2.0, 0.0];
        assert!(is_degenerate(a, b, c, 1e-12));
        assert!(!tri(a, b, c).has_finite_circumcircle());
        assert!(!is_degenerate(a, b, vector![2.0, 1e-3], 1e-12));
    }

    #[test]
    fn edge_visibility_needs_strict_side() {
        let (a, b, c) = (vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 1.0]);
        assert!(sees_edge(a, b, c, vector![0.5, 0.25], 1e-12));
        assert!(sees_edge(b, a, c, vector![5.0, 3.0], 1e-12));
        // On the line through the edge, or beyond it.
        assert!(!sees_edge(a, b, c, vector![1.0, 0.0], 1e-12));
        assert!(!sees_edge(a, b, c, vector![3.0, 0.0], 1e-12));
        assert!(!sees_edge(a, b, c, vector![1.0, -0.5], 1e-12));
    }

    #[test]
    fn enclosure_includes_the_boundary() {
        let (a, b, c) = (vector![0.0, 0.0], vector![2.0, 0.0], vector![0.0, 2.0]);
        assert!(encloses(a, b, c, vector![0.5, 0.5]));
        assert!(encloses(c, b, a, vector![0.5, 0.5]));
        assert!(encloses(a, b, c, vector![1.0, 0.0]));
        assert!(encloses(a, b, c, vector![1.0, 1.0]));
        assert!(!encloses(a, b, c, vector![1.5, 1.5]));
        assert!(!encloses(a, b, c, vector![-0.1, 0.5]));
    }

    #[test]
    fn edges_and_shared_vertices() {
        let p = [vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
        let t1 = Triangle::new([PointId(0), PointId(1), PointId(2)], p);
        let t2 = Triangle::new([PointId(1), PointId(2), PointId(3)], p);
        let t3 = Triangle::new([PointId(2), PointId(4), PointId(5)], p);
        assert_eq!(t1.shared_vertex_count(&t2), 2);
        assert_eq!(t1.shared_vertex_count(&t3), 1);
        assert!(t1.edges().contains(&Edge::new(PointId(2), PointId(1))));
        assert!(t1.has_vertex(PointId(2)));
        assert!(!t1.has_vertex(PointId(3)));
        assert!(t1.has_distinct_vertices());
    }
}
