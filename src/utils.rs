//! Integer helpers for arithmetic modulo a prime `p`.
//!
//! Every function takes its modulus explicitly; nothing here holds state.

use crate::error::PolyError;

/// Check if `n` is a prime number.
///
/// Uses trial division up to sqrt(n). Suitable for validating
/// moduli at the input boundary, not for high-performance primality testing.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Reduce a signed integer into `[0, p)`.
///
/// Correct for negative inputs, i.e. `reduce(-1, 5) == 4`.
#[inline]
pub fn reduce(x: i64, p: u64) -> u64 {
    (i128::from(x).rem_euclid(i128::from(p))) as u64
}

/// Modular addition: `(a + b) mod p`.
#[inline]
pub fn add_mod(a: u64, b: u64, p: u64) -> u64 {
    ((u128::from(a) + u128::from(b)) % u128::from(p)) as u64
}

/// Modular subtraction: `(a - b) mod p`, for `a, b` in `[0, p)`.
#[inline]
pub fn sub_mod(a: u64, b: u64, p: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        p - (b - a)
    }
}

/// Modular multiplication: `(a * b) mod p`.
///
/// Widens to `u128` before reducing, so any `a, b < p` with `p < 2^64` is safe.
#[inline]
pub fn mul_mod(a: u64, b: u64, p: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(p)) as u64
}

/// Modular inverse `a⁻¹ mod p` via the extended Euclidean algorithm.
///
/// # Errors
///
/// Returns [`PolyError::NonInvertibleElement`] when `gcd(a, p) != 1`, which
/// covers `a ≡ 0` and non-prime moduli sharing a factor with `a`.
///
/// # Example
///
/// ```
/// use rabinpoly::inv_mod;
///
/// assert_eq!(inv_mod(3, 7).unwrap(), 5); // 3 * 5 = 15 ≡ 1 (mod 7)
/// assert!(inv_mod(0, 7).is_err());
/// ```
pub fn inv_mod(a: u64, p: u64) -> Result<u64, PolyError> {
    let (mut r0, mut r1) = (i128::from(a % p), i128::from(p));
    let (mut s0, mut s1) = (1i128, 0i128);

    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (s0, s1) = (s1, s0 - q * s1);
    }

    if r0 != 1 {
        return Err(PolyError::NonInvertibleElement { value: a, modulus: p });
    }

    Ok(s0.rem_euclid(i128::from(p)) as u64)
}

/// Compute `a^b` by repeated multiplication, with no modular reduction.
///
/// Used for exponents such as `p^n`. Returns `None` if the result does not
/// fit in 64 bits.
pub fn pow_int(a: u64, b: u32) -> Option<u64> {
    let mut result: u64 = 1;
    for _ in 0..b {
        result = result.checked_mul(a)?;
    }
    Some(result)
}

/// Distinct prime factors of `n` in ascending order (multiplicities dropped).
///
/// `prime_divisors(0)` and `prime_divisors(1)` are empty.
pub fn prime_divisors(mut n: u64) -> Vec<u64> {
    let mut primes = Vec::new();
    let mut d: u64 = 2;

    while n > 1 && d <= n / d {
        if n % d == 0 {
            primes.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 1;
    }

    if n > 1 {
        primes.push(n);
    }

    primes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_primes() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(6));
        assert!(is_prime(7));
        assert!(!is_prime(9));
        assert!(is_prime(11));
        assert!(is_prime(13));
        assert!(is_prime(17));
    }

    #[test]
    fn composites() {
        assert!(!is_prime(15));
        assert!(!is_prime(21));
        assert!(!is_prime(25));
        assert!(!is_prime(1000));
    }

    #[test]
    fn larger_primes() {
        assert!(is_prime(1009));
        assert!(is_prime(104729)); // 10000th prime
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(1_000_000_007 * 3));
    }

    #[test]
    fn reduce_negative() {
        assert_eq!(reduce(-1, 5), 4);
        assert_eq!(reduce(-5, 5), 0);
        assert_eq!(reduce(-7, 5), 3);
        assert_eq!(reduce(12, 5), 2);
        assert_eq!(reduce(i64::MIN, 3), 1);
    }

    #[test]
    fn mod_ops() {
        assert_eq!(add_mod(5, 4, 7), 2);
        assert_eq!(sub_mod(2, 5, 7), 4);
        assert_eq!(sub_mod(5, 2, 7), 3);
        assert_eq!(mul_mod(6, 6, 7), 1);
    }

    #[test]
    fn mul_mod_no_overflow() {
        let p = 18_446_744_073_709_551_557; // largest 64-bit prime
        assert_eq!(mul_mod(p - 1, p - 1, p), 1);
    }

    #[test]
    fn inverse_basic() {
        for p in [2u64, 3, 5, 7, 17, 101] {
            for a in 1..p {
                let inv = inv_mod(a, p).unwrap();
                assert!(inv < p);
                assert_eq!(mul_mod(a, inv, p), 1, "a={a} p={p}");
            }
        }
    }

    #[test]
    fn inverse_of_zero_fails() {
        assert_eq!(
            inv_mod(0, 7),
            Err(PolyError::NonInvertibleElement { value: 0, modulus: 7 })
        );
    }

    #[test]
    fn inverse_non_prime_modulus() {
        assert!(inv_mod(2, 4).is_err());
        assert_eq!(inv_mod(3, 4).unwrap(), 3);
    }

    #[test]
    fn pow_int_basic() {
        assert_eq!(pow_int(2, 0), Some(1));
        assert_eq!(pow_int(2, 10), Some(1024));
        assert_eq!(pow_int(3, 4), Some(81));
        assert_eq!(pow_int(0, 3), Some(0));
        assert_eq!(pow_int(2, 63), Some(1 << 63));
        assert_eq!(pow_int(2, 64), None);
    }

    #[test]
    fn prime_divisors_basic() {
        assert_eq!(prime_divisors(1), Vec::<u64>::new());
        assert_eq!(prime_divisors(2), vec![2]);
        assert_eq!(prime_divisors(4), vec![2]);
        assert_eq!(prime_divisors(6), vec![2, 3]);
        assert_eq!(prime_divisors(12), vec![2, 3]);
        assert_eq!(prime_divisors(30), vec![2, 3, 5]);
        assert_eq!(prime_divisors(17), vec![17]);
        assert_eq!(prime_divisors(49), vec![7]);
    }
}
