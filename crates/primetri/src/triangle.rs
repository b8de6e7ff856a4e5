//! Counterclockwise lattice triangle and its height function.
//!
//! Invariants:
//! - Vertices are stored in counterclockwise order. `Triangle::new` trusts the
//!   caller (debug builds assert it); `Triangle::try_new` checks it.
//! - Edges are `v0→v1`, `v1→v2`, `v2→v0`; distances are always reported in that order.

use std::fmt;

use crate::error::{InputError, Result};
use crate::lattice::{distance_signed, lift, sqr_len, Lat2, Lat3};
use crate::numeric::{max3, min3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
    vertices: [Lat2; 3],
}

impl Triangle {
    /// Build from counterclockwise vertices (unchecked in release builds).
    pub fn new(a: Lat2, b: Lat2, c: Lat2) -> Self {
        let t = Self {
            vertices: [a, b, c],
        };
        debug_assert!(
            t.doubled_area() > 0,
            "triangle vertices must be counterclockwise: {t}"
        );
        t
    }

    /// Build from vertices, rejecting clockwise or degenerate input.
    pub fn try_new(a: Lat2, b: Lat2, c: Lat2) -> Result<Self> {
        let doubled_area = distance_signed(c, a, b);
        if doubled_area <= 0 {
            return Err(InputError::NotCounterClockwise { doubled_area });
        }
        Ok(Self {
            vertices: [a, b, c],
        })
    }

    /// The prime-triangle normal form `(0,0), (1,0), (a,p)`.
    pub fn prime(a: i64, p: i64) -> Self {
        Self::new(Lat2::new(0, 0), Lat2::new(1, 0), Lat2::new(a, p))
    }

    /// Vertex `i`; panics for `i > 2` like slice indexing.
    #[inline]
    pub fn vertex(&self, i: usize) -> Lat2 {
        self.vertices[i]
    }

    pub fn try_vertex(&self, i: usize) -> Result<Lat2> {
        self.vertices
            .get(i)
            .copied()
            .ok_or(InputError::VertexIndex { index: i })
    }

    #[inline]
    pub fn vertices(&self) -> [Lat2; 3] {
        self.vertices
    }

    /// Twice the Euclidean area (the normalized lattice area); positive for CCW input.
    #[inline]
    pub fn doubled_area(&self) -> i64 {
        distance_signed(self.vertices[2], self.vertices[0], self.vertices[1])
    }

    /// Integral bounding box as `(min corner, max corner)`.
    pub fn bounding_box(&self) -> (Lat2, Lat2) {
        let [a, b, c] = self.vertices;
        (
            Lat2::new(min3(a.x, b.x, c.x), min3(a.y, b.y, c.y)),
            Lat2::new(max3(a.x, b.x, c.x), max3(a.y, b.y, c.y)),
        )
    }

    /// Strictly inside: all three signed distances positive. Edges and vertices are outside.
    pub fn is_inside(&self, pt: Lat2) -> bool {
        let [a, b, c] = self.vertices;
        distance_signed(pt, a, b) > 0 && distance_signed(pt, b, c) > 0 && distance_signed(pt, c, a) > 0
    }

    /// Signed integral distances to the edges `(v0v1, v1v2, v2v0)`.
    pub fn distances(&self, pt: Lat2) -> Lat3 {
        let [a, b, c] = self.vertices;
        Lat3::new(
            distance_signed(pt, a, b),
            distance_signed(pt, b, c),
            distance_signed(pt, c, a),
        )
    }

    /// The height function: sum of the squared edge distances.
    #[inline]
    pub fn function_value(&self, pt: Lat2) -> i64 {
        sqr_len(self.distances(pt))
    }

    /// `(x, y, h(x, y))`.
    #[inline]
    pub fn lift(&self, pt: Lat2) -> Lat3 {
        lift(pt, self.function_value(pt))
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.vertices;
        write!(
            f,
            "Triangle: ({}, {}); ({}, {}); ({}, {})",
            a.x, a.y, b.x, b.y, c.x, c.y
        )
    }
}
