//! Property-based tests for the lattice geometry, the search and the hull.
//!
//! Prime triangles are drawn from small primes only: the hull enumeration is
//! quartic in the number of interior points.

use primetri::api::*;
use proptest::prelude::*;

const SMALL_PRIMES: [i64; 12] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// Strategy for a prime triangle `(0,0), (1,0), (a,p)` with `2 <= a < p`.
fn prime_triangle() -> impl Strategy<Value = (i64, i64)> {
    prop::sample::select(SMALL_PRIMES.to_vec()).prop_flat_map(|p| (2..p, Just(p)))
}

/// Strategy for a counterclockwise triangle with small coordinates.
fn ccw_triangle() -> impl Strategy<Value = Triangle> {
    prop::array::uniform3((-20i64..20, -20i64..20))
        .prop_map(|vs| vs.map(|(x, y)| Lat2::new(x, y)))
        .prop_filter("must not be flat", |[a, b, c]| distance_signed(*c, *a, *b) != 0)
        .prop_map(|[a, b, c]| {
            if distance_signed(c, a, b) > 0 {
                Triangle::new(a, b, c)
            } else {
                Triangle::new(a, c, b)
            }
        })
}

proptest! {
    #[test]
    fn inside_points_have_positive_distances(t in ccw_triangle(), x in -20i64..20, y in -20i64..20) {
        let pt = Lat2::new(x, y);
        let d = t.distances(pt);
        prop_assert_eq!(t.is_inside(pt), d.x > 0 && d.y > 0 && d.z > 0);
        prop_assert_eq!(t.function_value(pt), d.x * d.x + d.y * d.y + d.z * d.z);
        prop_assert_eq!(d.x + d.y + d.z, t.doubled_area());
    }

    #[test]
    fn interior_enumeration_is_stable_and_exact(t in ccw_triangle()) {
        let first = find_inside_points(&t);
        prop_assert_eq!(&first, &find_inside_points(&t));
        prop_assert!(first.iter().all(|&pt| t.is_inside(pt)));
        let (lo, hi) = t.bounding_box();
        let mut expected = 0;
        for x in lo.x..=hi.x {
            for y in lo.y..=hi.y {
                if t.is_inside(Lat2::new(x, y)) {
                    expected += 1;
                }
            }
        }
        prop_assert_eq!(first.len(), expected);
    }

    #[test]
    fn prime_triangle_area_is_p((a, p) in prime_triangle()) {
        let t = Triangle::prime(a, p);
        prop_assert_eq!(t.doubled_area(), p);
        prop_assert_eq!(distance_signed(t.vertex(2), t.vertex(0), t.vertex(1)), p);
        prop_assert_eq!(find_inside_points(&t).len() as i64, (p - 1) / 2);
    }

    #[test]
    fn search_result_satisfies_contract((a, p) in prime_triangle()) {
        let t = Triangle::prime(a, p);
        let inside = find_inside_points(&t);
        if let Some(quad) = find_degenerate_quad(&t) {
            prop_assert!(quad.c - quad.a == quad.d - quad.b);
            prop_assert!(quad.b - quad.a == quad.d - quad.c);
            prop_assert!(quad.a != quad.b && quad.a != quad.c);
            prop_assert!(quad.d != quad.b && quad.d != quad.c);
            prop_assert!(quad.heights_balance(&t));
            prop_assert!(quad.points().iter().all(|pt| inside.contains(pt)));
        }
        prop_assert_eq!(
            find_degenerate_quad(&t).is_some(),
            find_degenerate_quad_direct(&t).is_some()
        );
    }

    #[test]
    fn degenerate_slopes_satisfy_side_conditions((a, p) in prime_triangle()) {
        let t = Triangle::prime(a, p);
        if let Verdict::CounterexampleFound(_) = check_triangle(&t, SearchCfg::default()) {
            prop_assert_eq!(p % 6, 1);
            prop_assert_eq!(side_conditions(a, p), Ok(vec![]));
        }
    }

    #[test]
    fn hull_faces_tile_prime_triangles((a, p) in prime_triangle()) {
        prop_assume!(p <= 31);
        let t = Triangle::prime(a, p);
        let mut points = find_inside_points(&t);
        points.extend(t.vertices());
        let lifted: Vec<Lat3> = points.iter().map(|&pt| t.lift(pt)).collect();
        let faces = triangulate(&t);
        prop_assert_eq!(faces.len() as i64, p);
        prop_assert_eq!(covered_doubled_area(&faces), p);
        for f in &faces {
            let [u, v, w] = f.vertices();
            prop_assert!(is_supporting_face(t.lift(u), t.lift(v), t.lift(w), &lifted));
            prop_assert!(f.vertices().iter().all(|vtx| points.contains(vtx)));
        }
    }

    #[test]
    fn inverse_round_trips(p in prop::sample::select(SMALL_PRIMES.to_vec()), a in 1i64..1000) {
        prop_assume!(a % p != 0);
        let inv = modular_inverse(a, p).unwrap();
        prop_assert_eq!(a % p * inv % p, 1);
    }
}
