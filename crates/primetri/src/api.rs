//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI and
//!   experiments. Breaking changes are allowed and expected.

// Lattice geometry
pub use crate::lattice::{display2, display3, distance_signed, lift, orthogonal, project, Lat2, Lat3};
pub use crate::triangle::Triangle;
pub use crate::interior::{find_inside_points, is_inside_polygon};
// Number theory
pub use crate::numeric::{is_prime, max3, min3, modular_inverse, pow_mod};
// Degenerate-pair search
pub use crate::search::{
    find_all_degenerate_quads, find_degenerate_quad, find_degenerate_quad_direct,
    find_degenerate_quad_with, DegenerateQuad, PairBuckets, SearchCfg,
};
// Hull triangulation and export
pub use crate::export::{export_metapost, page_coordinates, write_metapost, SAMPLE_VERTICES};
pub use crate::hull::{covered_doubled_area, is_supporting_face, lower_hull_faces, triangulate};
// Sweep driver
pub use crate::sweep::{
    check_prime, check_triangle, side_conditions, sweep, Counterexample, HypothesisViolation,
    PrimeReport, SlopeFinding, SweepCfg, Verdict,
};
