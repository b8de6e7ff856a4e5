//! Small integer helpers: three-way min/max, primality and modular inverses.

use crate::error::{InputError, Result};

#[inline]
pub fn min3(a: i64, b: i64, c: i64) -> i64 {
    a.min(b).min(c)
}

#[inline]
pub fn max3(a: i64, b: i64, c: i64) -> i64 {
    a.max(b).max(c)
}

/// Trial division. Values `<= 1` are not prime.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    let mut k = 2;
    while k * k <= n {
        if n % k == 0 {
            return false;
        }
        k += 1;
    }
    true
}

/// `base^exp mod m` by square-and-multiply. Requires `m >= 1`.
pub fn pow_mod(base: i64, mut exp: u64, m: i64) -> i64 {
    let m = i128::from(m);
    let mut result: i128 = 1 % m;
    let mut pow = i128::from(base).rem_euclid(m);
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * pow % m;
        }
        pow = pow * pow % m;
        exp >>= 1;
    }
    // result < m <= i64::MAX
    result as i64
}

/// Inverse of `a` modulo the prime `p`, computed as `a^(p-2) mod p`.
///
/// The result lies in `[1, p)`.
pub fn modular_inverse(a: i64, p: i64) -> Result<i64> {
    if !is_prime(p) {
        return Err(InputError::NotPrime { n: p });
    }
    if a.rem_euclid(p) == 0 {
        return Err(InputError::NotInvertible { a, p });
    }
    Ok(pow_mod(a, (p - 2) as u64, p))
}
