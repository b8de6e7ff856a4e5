//! Lower-hull triangulation of the lifted point set.
//!
//! Purpose
//! - Realize the conjectured triangulation of a triangle `T`: lift every interior
//!   lattice point and the three vertices to `(x, y, h(x, y))` and project the
//!   faces of the lower convex hull back to the plane.
//!
//! Algorithm
//! - For every unordered triple `i < j < k`, orient it counterclockwise in the
//!   plane (triples with collinear projections are skipped), take the normal
//!   `(B − A) × (C − A)` (positive z), and accept the triple when every lifted
//!   point `D` satisfies `normal · (D − A) >= 0`.
//! - `O(n⁴)`; only meant for the small point counts of prime triangles.
//!
//! Assumptions and conventions
//! - `h` is a positive-definite quadratic, so all lifted points are in convex
//!   position and the accepted faces tile `T`. Four coplanar lifted points on
//!   the lower hull (a degenerate quadruple that is also a hull face) produce
//!   both diagonals; such overlap is exactly what `search` looks for.
//! - The outer triangle is a lower face only when `T` has no interior points.

use crate::interior::find_inside_points;
use crate::lattice::{distance_signed, project, Lat2, Lat3};
use crate::triangle::Triangle;

/// Triangulate `t`: lower-hull faces of its interior points plus its vertices.
pub fn triangulate(t: &Triangle) -> Vec<Triangle> {
    let mut points = find_inside_points(t);
    points.extend(t.vertices());
    lower_hull_faces(t, &points)
}

/// Lower-hull faces of `points` lifted by `t`'s height function, as CCW triangles.
///
/// Discovery order: lexicographic in `(i, j, k)` over `points`.
pub fn lower_hull_faces(t: &Triangle, points: &[Lat2]) -> Vec<Triangle> {
    let lifted: Vec<Lat3> = points.iter().map(|&pt| t.lift(pt)).collect();
    let n = lifted.len();
    let mut faces = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                let (a, mut b, mut c) = (lifted[i], lifted[j], lifted[k]);
                let turn = distance_signed(project(c), project(a), project(b));
                if turn == 0 {
                    continue;
                }
                if turn < 0 {
                    std::mem::swap(&mut b, &mut c);
                }
                if is_supporting_face(a, b, c, &lifted) {
                    faces.push(Triangle::new(project(a), project(b), project(c)));
                }
            }
        }
    }
    faces
}

/// True iff every point of `lifted` is on the non-negative side of the plane
/// through `a, b, c` with normal `(b − a) × (c − a)`.
pub fn is_supporting_face(a: Lat3, b: Lat3, c: Lat3, lifted: &[Lat3]) -> bool {
    let normal = (b - a).cross(&(c - a));
    lifted.iter().all(|&d| normal.dot(&(d - a)) >= 0)
}

/// Sum of doubled areas of `faces`.
pub fn covered_doubled_area(faces: &[Triangle]) -> i64 {
    faces.iter().map(|f| f.doubled_area().abs()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i64, y: i64) -> Lat2 {
        Lat2::new(x, y)
    }

    #[test]
    fn unit_triangle_is_its_own_triangulation() {
        let t = Triangle::new(p(0, 0), p(1, 0), p(0, 1));
        assert_eq!(triangulate(&t), vec![t]);
    }

    #[test]
    fn craw_example_is_tiled() {
        let t = crate::craw_example();
        let faces = triangulate(&t);
        // Euler: 2·interior + 1 triangles when only the vertices are on the boundary.
        assert_eq!(faces.len(), 11);
        assert_eq!(covered_doubled_area(&faces), t.doubled_area());
        assert!(faces.iter().all(|f| f.doubled_area() > 0));
        assert_eq!(faces[0], Triangle::new(p(-3, 6), p(-2, 3), p(-1, 1)));
    }

    #[test]
    fn prime_seven_slope_five_faces() {
        let t = Triangle::prime(5, 7);
        let faces = triangulate(&t);
        assert_eq!(faces.len(), 7);
        assert_eq!(covered_doubled_area(&faces), 7);
        assert!(faces.contains(&Triangle::new(p(1, 1), p(2, 2), p(3, 4))));
        assert!(faces.contains(&Triangle::new(p(1, 1), p(0, 0), p(1, 0))));
    }

    #[test]
    fn faces_support_every_lifted_point() {
        let t = Triangle::prime(8, 19);
        let mut points = find_inside_points(&t);
        points.extend(t.vertices());
        let lifted: Vec<Lat3> = points.iter().map(|&pt| t.lift(pt)).collect();
        let faces = triangulate(&t);
        assert_eq!(covered_doubled_area(&faces), 19);
        for f in &faces {
            let [a, b, c] = f.vertices();
            assert!(is_supporting_face(t.lift(a), t.lift(b), t.lift(c), &lifted));
            assert!(f.vertices().iter().all(|v| points.contains(v)));
        }
    }

    #[test]
    fn outer_face_is_rejected_when_interior_exists() {
        let t = crate::craw_example();
        let [a, b, c] = t.vertices();
        let mut points = find_inside_points(&t);
        points.extend(t.vertices());
        let lifted: Vec<Lat3> = points.iter().map(|&pt| t.lift(pt)).collect();
        assert!(!is_supporting_face(t.lift(a), t.lift(b), t.lift(c), &lifted));
        assert!(!triangulate(&t).contains(&t));
    }
}
