//! Timing probe for the prime sweep.
//!
//! Purpose
//! - Give a concrete number for "how long does checking all slopes of a prime
//!   take" as p grows, since the pair buckets are quadratic in the interior
//!   point count and the hull is quartic.
//!
//! Run with `cargo run --release -p primetri --example sweep_timing`.

use std::time::Instant;

use primetri::hull::triangulate;
use primetri::sweep::{check_prime, SweepCfg};
use primetri::Triangle;

fn main() {
    for p in [31, 61, 127, 251] {
        let start = Instant::now();
        let report = check_prime(p, SweepCfg::default()).expect("p is prime");
        let ms = start.elapsed().as_secs_f64() * 1e3;
        println!(
            "p={p} degenerate_slopes={:?} hypothesis_holds={} time_ms={ms:.3}",
            report.slopes(),
            report.hypothesis_holds()
        );
    }

    for p in [19, 31, 43] {
        let t = Triangle::prime(2, p);
        let start = Instant::now();
        let faces = triangulate(&t);
        let ms = start.elapsed().as_secs_f64() * 1e3;
        println!("triangulate p={p} faces={} time_ms={ms:.3}", faces.len());
    }
}
