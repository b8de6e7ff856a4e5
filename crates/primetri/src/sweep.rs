//! Prime sweep: check every prime triangle of a given prime and test the
//! side conditions that are conjectured to accompany a degenerate quadruple.
//!
//! Conjecture under test
//! - If `(0,0), (1,0), (a,p)` has a degenerate quadruple then `p ≡ 1 (mod 6)`
//!   and `a⁻¹ ≡ 1 + (a − 1)⁻¹ (mod p)`.
//!
//! Reporting
//! - A degenerate quadruple is a `Verdict::CounterexampleFound` for the
//!   triangulation method; a broken side condition is a `HypothesisViolation`.
//!   Neither is an error. Composite `p` is `InputError::NotPrime`.

use std::ops::RangeInclusive;

use crate::error::{InputError, Result};
use crate::interior::find_inside_points;
use crate::lattice::{display2, display3};
use crate::numeric::{is_prime, modular_inverse};
use crate::search::{find_degenerate_quad_with, DegenerateQuad, SearchCfg};
use crate::triangle::Triangle;

/// A triangle whose lifted triangulation can be ambiguous.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counterexample {
    pub triangle: Triangle,
    pub quad: DegenerateQuad,
}

impl Counterexample {
    /// One line per quad point: coordinates, edge distances, height.
    pub fn describe(&self) -> Vec<String> {
        self.quad
            .points()
            .iter()
            .map(|pt| {
                format!(
                    "{} with heights {} and function value {}",
                    display2(pt),
                    display3(&self.triangle.distances(*pt)),
                    self.triangle.function_value(*pt)
                )
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Verified,
    CounterexampleFound(Counterexample),
}

impl Verdict {
    pub fn counterexample(&self) -> Option<&Counterexample> {
        match self {
            Verdict::Verified => None,
            Verdict::CounterexampleFound(c) => Some(c),
        }
    }
}

/// A side condition that failed for a degenerate prime triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HypothesisViolation {
    /// `p mod 6 != 1`.
    ResidueMod6 { residue: i64 },
    /// `a⁻¹ != 1 + (a − 1)⁻¹ (mod p)`.
    InverseIdentity { inv_a: i64, inv_a_minus_1: i64 },
}

/// Degenerate slope `a` of a prime, with the side conditions it broke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlopeFinding {
    pub slope: i64,
    pub counterexample: Counterexample,
    pub violations: Vec<HypothesisViolation>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeReport {
    pub p: i64,
    pub findings: Vec<SlopeFinding>,
}

impl PrimeReport {
    pub fn has_counterexample(&self) -> bool {
        !self.findings.is_empty()
    }

    /// No finding broke a side condition.
    pub fn hypothesis_holds(&self) -> bool {
        self.findings.iter().all(|f| f.violations.is_empty())
    }

    pub fn slopes(&self) -> Vec<i64> {
        self.findings.iter().map(|f| f.slope).collect()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SweepCfg {
    pub search: SearchCfg,
    /// Stop at the first degenerate slope of each prime and log it in full.
    pub stop_at_first: bool,
}

/// Run the degenerate-pair search on one triangle.
pub fn check_triangle(t: &Triangle, cfg: SearchCfg) -> Verdict {
    let points = find_inside_points(t);
    match find_degenerate_quad_with(t, &points, cfg) {
        Some(quad) => Verdict::CounterexampleFound(Counterexample {
            triangle: *t,
            quad,
        }),
        None => Verdict::Verified,
    }
}

/// Side conditions for slope `a` of prime `p` (`2 <= a < p`).
pub fn side_conditions(a: i64, p: i64) -> Result<Vec<HypothesisViolation>> {
    let mut violations = Vec::new();
    let residue = p % 6;
    if residue != 1 {
        violations.push(HypothesisViolation::ResidueMod6 { residue });
    }
    let inv_a = modular_inverse(a, p)?;
    let inv_a_minus_1 = modular_inverse(a - 1, p)?;
    if inv_a != (1 + inv_a_minus_1) % p {
        violations.push(HypothesisViolation::InverseIdentity {
            inv_a,
            inv_a_minus_1,
        });
    }
    Ok(violations)
}

/// Check every slope `a ∈ [2, p)` of the prime `p`.
pub fn check_prime(p: i64, cfg: SweepCfg) -> Result<PrimeReport> {
    if !is_prime(p) {
        return Err(InputError::NotPrime { n: p });
    }
    let mut findings = Vec::new();
    for a in 2..p {
        let t = Triangle::prime(a, p);
        let Verdict::CounterexampleFound(counterexample) = check_triangle(&t, cfg.search) else {
            continue;
        };
        let violations = side_conditions(a, p)?;
        let triangle = counterexample.triangle.to_string();
        let points = counterexample.describe();
        for v in &violations {
            tracing::warn!(p, a, violation = ?v, %triangle, ?points, "hypothesis failed");
        }
        if cfg.stop_at_first {
            tracing::info!(p, a, residue = p % 6, %triangle, ?points, "bad triangle");
        } else {
            tracing::debug!(p, a, residue = p % 6, %triangle, ?points, "bad triangle");
        }
        findings.push(SlopeFinding {
            slope: a,
            counterexample,
            violations,
        });
        if cfg.stop_at_first {
            break;
        }
    }
    tracing::info!(p, degenerate_slopes = findings.len(), "checked prime");
    Ok(PrimeReport { p, findings })
}

/// `check_prime` for every prime in `range`; composites are skipped.
pub fn sweep(range: RangeInclusive<i64>, cfg: SweepCfg) -> Vec<PrimeReport> {
    range
        .filter(|&n| is_prime(n))
        .filter_map(|p| check_prime(p, cfg).ok())
        .collect()
}
