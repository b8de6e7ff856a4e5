//! Prime lattice triangles: height-function lifts, degenerate pairs and hull triangulations.
//!
//! A prime triangle is the lattice triangle `(0,0), (1,0), (a,p)` with `p` prime.
//! Each interior lattice point gets a height (sum of squared signed edge distances),
//! the lifted lower convex hull gives the conjectured triangulation, and the
//! degenerate-pair search looks for parallelograms of interior points whose
//! height sums coincide (the configurations that can make that triangulation fail).
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Everything is exact `i64` arithmetic; no tolerances anywhere.
//!
//! References
//! - The triangle `(0,0), (-5,11), (-1,0)` is Example 2.1 of Alastair Craw's
//!   paper; `craw_example` builds it and the CLI draws it by default.

pub mod api;
pub mod error;
pub mod export;
pub mod hull;
pub mod interior;
pub mod lattice;
pub mod numeric;
pub mod search;
pub mod sweep;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{InputError, Result};
pub use lattice::{Lat2, Lat3};
pub use triangle::Triangle;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::triangulate;
    pub use crate::interior::find_inside_points;
    pub use crate::lattice::{distance_signed, orthogonal, Lat2, Lat3};
    pub use crate::search::{find_degenerate_quad, DegenerateQuad, SearchCfg};
    pub use crate::sweep::{check_prime, check_triangle, PrimeReport, SweepCfg, Verdict};
    pub use crate::triangle::Triangle;
    pub use crate::InputError;
}

/// The triangle of Example 2.1 in Craw's paper, counterclockwise.
pub fn craw_example() -> Triangle {
    Triangle::new(Lat2::new(0, 0), Lat2::new(-5, 11), Lat2::new(-1, 0))
}
