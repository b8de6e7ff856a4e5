//! Degenerate-pair search: parallelograms of interior points with equal height sums.
//!
//! Purpose
//! - Decide whether the lifted-hull triangulation of a triangle can be ambiguous:
//!   four interior points `A, B, C, D` with `A + D = B + C` and
//!   `h(A) + h(D) = h(B) + h(C)` lift to four coplanar points.
//!
//! Algorithm
//! - Bucket every ordered pair of distinct interior points by its height sum.
//! - Within each bucket (ascending key), pair up pairs `(A, D)` and `(C, B)` and
//!   accept when `C − A = D − B` and `B − A = D − C`, skipping combinations
//!   where `A = B`, `A = C`, `D = B` or `D = C`.
//! - The first accepted combination is returned; callers only rely on existence.
//!
//! Layout
//! - `types.rs` (result, config, buckets), `scan.rs` (the searches).

mod scan;
mod types;

pub use scan::{
    find_all_degenerate_quads, find_degenerate_quad, find_degenerate_quad_direct,
    find_degenerate_quad_with,
};
pub use types::{DegenerateQuad, PairBuckets, SearchCfg};
