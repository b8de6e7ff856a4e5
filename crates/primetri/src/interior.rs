//! Lattice points strictly inside a triangle, and convex-polygon containment.

use crate::lattice::{distance_signed, Lat2};
use crate::triangle::Triangle;

/// All lattice points strictly inside `t`, by scanning its bounding box.
///
/// Order is the scan order: x-major, then y. No duplicates.
pub fn find_inside_points(t: &Triangle) -> Vec<Lat2> {
    let (lo, hi) = t.bounding_box();
    let mut points = Vec::new();
    for x in lo.x..=hi.x {
        for y in lo.y..=hi.y {
            let pt = Lat2::new(x, y);
            if t.is_inside(pt) {
                points.push(pt);
            }
        }
    }
    points
}

/// Closed containment in a convex polygon given in cyclic order (either orientation).
///
/// All edge distances must share a sign; zero (boundary) is accepted.
/// Polygons with fewer than three vertices contain nothing.
pub fn is_inside_polygon(pt: Lat2, polygon: &[Lat2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0i64;
    for k in 0..n {
        let d = distance_signed(pt, polygon[k], polygon[(k + 1) % n]).signum();
        if d == 0 {
            continue;
        }
        if sign == 0 {
            sign = d;
        } else if d != sign {
            return false;
        }
    }
    true
}
