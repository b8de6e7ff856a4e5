//! Bucket scan for degenerate quadruples, plus the direct O(n³) formulation.

use std::ops::ControlFlow;

use crate::interior::{find_inside_points, is_inside_polygon};
use crate::lattice::{distance_signed, Lat2};
use crate::triangle::Triangle;

use super::types::{DegenerateQuad, PairBuckets, SearchCfg};

/// First degenerate quadruple of `t`'s interior points, default config.
pub fn find_degenerate_quad(t: &Triangle) -> Option<DegenerateQuad> {
    let points = find_inside_points(t);
    find_degenerate_quad_with(t, &points, SearchCfg::default())
}

/// First accepted quadruple over `points` (interior points of `t`), in discovery order.
pub fn find_degenerate_quad_with(
    t: &Triangle,
    points: &[Lat2],
    cfg: SearchCfg,
) -> Option<DegenerateQuad> {
    let mut found = None;
    BucketScan::new(t, points, cfg).run(|quad| {
        found = Some(quad);
        ControlFlow::Break(())
    });
    found
}

/// Every accepted combination, in discovery order. Each geometric parallelogram
/// shows up several times (once per admissible labelling).
pub fn find_all_degenerate_quads(t: &Triangle, cfg: SearchCfg) -> Vec<DegenerateQuad> {
    let points = find_inside_points(t);
    let mut all = Vec::new();
    BucketScan::new(t, &points, cfg).run(|quad| {
        all.push(quad);
        ControlFlow::Continue(())
    });
    all
}

/// Direct formulation: for distinct `A, B, C` take `D = B + C − A` and require
/// `D` inside `t` and `h(A) + h(D) = h(B) + h(C)`.
///
/// Agrees with the bucket scan on existence; the first hit may differ.
pub fn find_degenerate_quad_direct(t: &Triangle) -> Option<DegenerateQuad> {
    let points = find_inside_points(t);
    for &a in &points {
        for &b in &points {
            if a == b {
                continue;
            }
            for &c in &points {
                if a == c || b == c {
                    continue;
                }
                let d = b + c - a;
                if !t.is_inside(d) {
                    continue;
                }
                let quad = DegenerateQuad { a, b, c, d };
                if quad.heights_balance(t) {
                    return Some(quad);
                }
            }
        }
    }
    None
}

/// Scan runner carrying the triangle, the interior points and the config.
struct BucketScan<'a> {
    t: &'a Triangle,
    points: &'a [Lat2],
    cfg: SearchCfg,
}

impl<'a> BucketScan<'a> {
    fn new(t: &'a Triangle, points: &'a [Lat2], cfg: SearchCfg) -> Self {
        Self { t, points, cfg }
    }

    fn run(&self, mut visit: impl FnMut(DegenerateQuad) -> ControlFlow<()>) {
        let buckets = PairBuckets::build(self.t, self.points);
        for (_, candidates) in buckets.iter() {
            for &(a, d) in candidates {
                for &(c, b) in candidates {
                    if a == b || a == c || d == b || d == c {
                        continue;
                    }
                    let quad = DegenerateQuad { a, b, c, d };
                    if !quad.is_parallelogram() || !self.refinements_hold(&quad) {
                        continue;
                    }
                    if visit(quad).is_break() {
                        return;
                    }
                }
            }
        }
    }

    fn refinements_hold(&self, quad: &DegenerateQuad) -> bool {
        if self.cfg.require_unit_area && distance_signed(quad.b, quad.a, quad.c).abs() != 1 {
            return false;
        }
        if self.cfg.require_empty_parallelogram {
            let corners = quad.points();
            let polygon = quad.polygon();
            let blocked = self
                .points
                .iter()
                .filter(|&&pt| !corners.contains(&pt))
                .any(|&pt| is_inside_polygon(pt, &polygon));
            if blocked {
                return false;
            }
        }
        true
    }
}
