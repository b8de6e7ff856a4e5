//! Data types for the degenerate-pair search.

use std::collections::BTreeMap;

use crate::lattice::Lat2;
use crate::triangle::Triangle;

/// Optional refinements of a candidate parallelogram. Both off by default,
/// which accepts every parallelogram with matching height sums.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchCfg {
    /// Reject when another interior point lies in the closed parallelogram `A, B, D, C`.
    pub require_empty_parallelogram: bool,
    /// Reject unless the parallelogram has unit lattice area (`|d(B; A, C)| = 1`).
    pub require_unit_area: bool,
}

/// Four interior points with `A + D = B + C`; `A, D` and `B, C` are the diagonals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DegenerateQuad {
    pub a: Lat2,
    pub b: Lat2,
    pub c: Lat2,
    pub d: Lat2,
}

impl DegenerateQuad {
    /// `[A, B, C, D]`.
    pub fn points(&self) -> [Lat2; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Both vector-equality parallelogram conditions.
    pub fn is_parallelogram(&self) -> bool {
        self.c - self.a == self.d - self.b && self.b - self.a == self.d - self.c
    }

    /// The distinctness conditions the bucket scan enforces.
    pub fn is_distinct(&self) -> bool {
        self.a != self.b
            && self.a != self.c
            && self.a != self.d
            && self.d != self.b
            && self.d != self.c
            && self.c != self.b
    }

    /// `h(A) + h(D) == h(B) + h(C)` under `t`'s height function.
    pub fn heights_balance(&self, t: &Triangle) -> bool {
        t.function_value(self.a) + t.function_value(self.d)
            == t.function_value(self.b) + t.function_value(self.c)
    }

    /// The parallelogram as a cyclic polygon `A, B, D, C`.
    pub fn polygon(&self) -> [Lat2; 4] {
        [self.a, self.b, self.d, self.c]
    }
}

/// Ordered pairs of distinct points keyed by height sum; iteration is by ascending key.
#[derive(Clone, Debug, Default)]
pub struct PairBuckets {
    buckets: BTreeMap<i64, Vec<(Lat2, Lat2)>>,
}

impl PairBuckets {
    /// Bucket every ordered pair `(A, B)`, `A != B`, of `points` under `h(A) + h(B)`.
    /// Within a bucket pairs keep enumeration order.
    pub fn build(t: &Triangle, points: &[Lat2]) -> Self {
        let heights: Vec<i64> = points.iter().map(|&pt| t.function_value(pt)).collect();
        let mut buckets: BTreeMap<i64, Vec<(Lat2, Lat2)>> = BTreeMap::new();
        for (i, &a) in points.iter().enumerate() {
            for (j, &b) in points.iter().enumerate() {
                if a == b {
                    continue;
                }
                buckets
                    .entry(heights[i] + heights[j])
                    .or_default()
                    .push((a, b));
            }
        }
        Self { buckets }
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of stored pairs.
    pub fn num_pairs(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn get(&self, key: i64) -> Option<&[(Lat2, Lat2)]> {
        self.buckets.get(&key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &[(Lat2, Lat2)])> + '_ {
        self.buckets.iter().map(|(&k, v)| (k, v.as_slice()))
    }
}
