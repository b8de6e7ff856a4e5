//! Integer lattice vectors and the oriented distance.
//!
//! `Lat2`/`Lat3` are `nalgebra` column vectors over `i64`, so addition,
//! subtraction, negation, `dot` and `cross` come from nalgebra. The few
//! operations nalgebra does not provide for integers live here.

use nalgebra::{Vector2, Vector3};

/// 2D lattice point / displacement.
pub type Lat2 = Vector2<i64>;
/// 3D lattice point; used for lifted points `(x, y, h(x, y))`.
pub type Lat3 = Vector3<i64>;

/// Rotation by 90° counterclockwise: `(x, y) ↦ (−y, x)`.
#[inline]
pub fn orthogonal(v: Lat2) -> Lat2 {
    Lat2::new(-v.y, v.x)
}

#[inline]
pub fn sqr_len(v: Lat3) -> i64 {
    v.dot(&v)
}

/// Oriented integral distance from `pt` to the line through `first` and `second`.
///
/// Equals twice the signed area of `(first, second, pt)`: positive iff `pt` lies
/// to the left of the directed edge `first → second`, zero on the line.
#[inline]
pub fn distance_signed(pt: Lat2, first: Lat2, second: Lat2) -> i64 {
    (pt - first).dot(&orthogonal(second - first))
}

/// Lift `pt` to 3D with the given height.
#[inline]
pub fn lift(pt: Lat2, height: i64) -> Lat3 {
    Lat3::new(pt.x, pt.y, height)
}

/// Drop the height coordinate.
#[inline]
pub fn project(v: Lat3) -> Lat2 {
    v.xy()
}

/// `(x, y)`, as printed in logs and labels.
pub fn display2(v: &Lat2) -> String {
    format!("({}, {})", v.x, v.y)
}

/// `(x, y, z)`, as printed in logs and labels.
pub fn display3(v: &Lat3) -> String {
    format!("({}, {}, {})", v.x, v.y, v.z)
}
