//! Rabin's irreducibility test over GF(p).
//!
//! A polynomial `f` of degree `n >= 1` over GF(p) is irreducible if and only if:
//! 1. `x^{p^n} ≡ x (mod f)`
//! 2. `gcd(f, x^{p^{n/q}} - x)` is a non-zero constant for each prime divisor `q` of `n`
//!
//! The powers `x^{p^k} mod f` are produced by iterating the Frobenius map
//! `h ↦ h^p mod f` from `h = x`, which never forms the integer `p^k`.

use log::{debug, trace, warn};

use crate::error::PolyError;
use crate::structures::poly::Poly;
use crate::utils::prime_divisors;

impl Poly {
    /// Test if this polynomial is irreducible over GF(p) using Rabin's algorithm.
    ///
    /// Returns `false` for the zero polynomial and for constants. Any error
    /// raised inside the core (only possible with a non-prime modulus) is
    /// logged and reported as `false`; use [`Poly::try_is_irreducible`] to
    /// observe it.
    ///
    /// # Example
    ///
    /// ```
    /// use rabinpoly::Poly;
    ///
    /// // x^2 + x + 1 is irreducible over GF(2)
    /// let f = Poly::new(vec![1, 1, 1], 2).unwrap();
    /// assert!(f.is_irreducible());
    ///
    /// // x^2 + 1 = (x + 1)^2 over GF(2)
    /// let g = Poly::new(vec![1, 0, 1], 2).unwrap();
    /// assert!(!g.is_irreducible());
    /// ```
    pub fn is_irreducible(&self) -> bool {
        match self.try_is_irreducible() {
            Ok(verdict) => verdict,
            Err(err) => {
                warn!("irreducibility test over GF({}) aborted: {}", self.modulus(), err);
                false
            }
        }
    }

    /// Fallible form of [`Poly::is_irreducible`].
    ///
    /// # Errors
    ///
    /// Propagates [`PolyError::NonInvertibleElement`] when the modulus is not
    /// prime and the division steps hit a non-invertible leading coefficient.
    pub fn try_is_irreducible(&self) -> Result<bool, PolyError> {
        if self.is_zero() || self.degree() == 0 {
            return Ok(false);
        }

        let n = self.degree();
        let p = self.modulus();
        debug!("rabin test: n = {}, p = {}, f = {}", n, p, self);

        let x = Poly::x(p);
        let divisors = prime_divisors(n as u64);

        // Keep x^{p^{n/q}} mod f for every prime q | n; the last power is x^{p^n}.
        let mut checkpoints = Vec::with_capacity(divisors.len());
        let mut h = x.rem(self)?;
        for k in 1..=n {
            h = self.powmod(&h, p)?;
            trace!("x^(p^{}) mod f = {}", k, h);
            for &q in &divisors {
                if (n as u64) / q == k as u64 {
                    checkpoints.push((q, h.clone()));
                }
            }
        }

        // Step 1: f divides x^{p^n} - x
        if !(&h - &x).rem(self)?.is_zero() {
            debug!("x^(p^{}) ≢ x (mod f): reducible", n);
            return Ok(false);
        }

        // Step 2: no irreducible factor of degree dividing n/q
        for (q, h) in checkpoints {
            let g = Poly::gcd(self, &(&h - &x))?;
            trace!("q = {}: gcd(f, x^(p^{}) - x) = {}", q, n as u64 / q, g);
            if g.degree() > 0 {
                debug!(
                    "f shares a factor with x^(p^{}) - x: reducible",
                    n as u64 / q
                );
                return Ok(false);
            }
        }

        debug!("f is irreducible over GF({})", p);
        Ok(true)
    }

    /// Generate a random monic irreducible polynomial of the given degree.
    ///
    /// Uses rejection sampling: generate random monic polynomials until
    /// finding an irreducible one.
    ///
    /// Returns `None` if `degree` is 0 or `p` is not prime.
    #[cfg(feature = "rand")]
    pub fn random_irreducible<R: rand::Rng>(rng: &mut R, degree: usize, p: u64) -> Option<Self> {
        if degree == 0 || !crate::utils::is_prime(p) {
            return None;
        }

        loop {
            let mut coeffs: Vec<u64> = (0..degree).map(|_| rng.gen_range(0..p)).collect();
            coeffs.push(1); // monic

            let f = Self::from_residues(coeffs, p);
            if f.is_irreducible() {
                return Some(f);
            }
        }
    }
}
