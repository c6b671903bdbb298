use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::error::PolyError;
use crate::utils::{add_mod, inv_mod, mul_mod, reduce, sub_mod};

/// Polynomial over the prime field GF(p), with `p` chosen at runtime.
///
/// Coefficients are stored in ascending order of degree:
/// `coeffs[i]` is the coefficient of `x^i`.
///
/// The representation is always canonical:
/// - every coefficient lies in `[0, p)`
/// - there is at least one coefficient; the zero polynomial is `[0]`
/// - unless the polynomial is zero, the leading coefficient is non-zero
///
/// Two polynomials are equal iff they share a modulus and their canonical
/// coefficient sequences match.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PolyRepr", into = "PolyRepr")
)]
pub struct Poly {
    p: u64,
    coeffs: Vec<u64>,
}

impl Poly {
    /// Create a polynomial from signed coefficients in ascending order.
    ///
    /// `coeffs[i]` is the coefficient of `x^i`. Each coefficient is reduced
    /// into `[0, p)` (negative values included) and trailing zeros are removed.
    /// An empty sequence yields the zero polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidModulus`] if `modulus <= 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use rabinpoly::Poly;
    ///
    /// // 3 + 2x + x^2 over GF(17), with a redundant trailing zero
    /// let p = Poly::new(vec![3, 2, 1, 0], 17).unwrap();
    /// assert_eq!(p.degree(), 2);
    /// assert_eq!(p.coefficients(), &[3, 2, 1]);
    ///
    /// // -1 is reduced to 16
    /// let q = Poly::new(vec![-1, 1], 17).unwrap();
    /// assert_eq!(q.coeff(0), 16);
    ///
    /// assert!(Poly::new(vec![1], 0).is_err());
    /// ```
    pub fn new(coeffs: Vec<i64>, modulus: i64) -> Result<Self, PolyError> {
        if modulus <= 0 {
            return Err(PolyError::InvalidModulus(modulus));
        }
        let p = modulus as u64;
        let coeffs = coeffs.into_iter().map(|c| reduce(c, p)).collect();
        Ok(Self::canonical(coeffs, p))
    }

    /// Create a polynomial from unsigned coefficients in ascending order.
    ///
    /// Coefficients are reduced modulo `p` and trailing zeros removed.
    ///
    /// # Panics
    ///
    /// Panics if `p == 0`.
    pub fn from_residues(coeffs: Vec<u64>, p: u64) -> Self {
        assert!(p > 0, "modulus must be positive");
        let coeffs = coeffs.into_iter().map(|c| c % p).collect();
        Self::canonical(coeffs, p)
    }

    /// Wrap already-reduced coefficients and strip trailing zeros.
    fn canonical(coeffs: Vec<u64>, p: u64) -> Self {
        let mut poly = Self { p, coeffs };
        poly.normalize();
        poly
    }

    /// Create the zero polynomial over GF(p).
    ///
    /// # Example
    ///
    /// ```
    /// use rabinpoly::Poly;
    ///
    /// let zero = Poly::zero(17);
    /// assert!(zero.is_zero());
    /// assert_eq!(zero.degree(), 0);
    /// assert_eq!(zero.coefficients(), &[0]);
    /// ```
    pub fn zero(p: u64) -> Self {
        Self::from_residues(vec![0], p)
    }

    /// Create the constant polynomial `1`.
    pub fn one(p: u64) -> Self {
        Self::from_residues(vec![1], p)
    }

    /// Create the polynomial `x`.
    pub fn x(p: u64) -> Self {
        Self::from_residues(vec![0, 1], p)
    }

    /// Create a constant polynomial `c mod p`.
    pub fn constant(c: u64, p: u64) -> Self {
        Self::from_residues(vec![c], p)
    }

    /// Create a monomial `c * x^n`.
    ///
    /// # Example
    ///
    /// ```
    /// use rabinpoly::Poly;
    ///
    /// let m = Poly::monomial(3, 2, 17); // 3x^2
    /// assert_eq!(m.degree(), 2);
    /// assert_eq!(m.eval(2), 12);
    /// ```
    pub fn monomial(c: u64, n: usize, p: u64) -> Self {
        let mut coeffs = vec![0; n + 1];
        coeffs[n] = c;
        Self::from_residues(coeffs, p)
    }

    /// The field modulus `p`.
    pub fn modulus(&self) -> u64 {
        self.p
    }

    /// Check if this is the zero polynomial.
    ///
    /// This is distinct from `degree() == 0`, which also holds for
    /// non-zero constants.
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0] == 0
    }

    /// Check if this is a constant polynomial (zero included).
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() == 1
    }

    /// Representational degree: number of coefficients minus one.
    ///
    /// The zero polynomial reports degree 0; use [`Poly::is_zero`] to tell
    /// it apart from a non-zero constant.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Get the leading coefficient (0 only for the zero polynomial).
    pub fn leading_coeff(&self) -> u64 {
        self.coeffs[self.coeffs.len() - 1]
    }

    /// Get the coefficient of `x^i`.
    ///
    /// Returns zero if `i` is beyond the polynomial's degree.
    pub fn coeff(&self, i: usize) -> u64 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    /// Get a slice of all coefficients, lowest degree first.
    pub fn coefficients(&self) -> &[u64] {
        &self.coeffs
    }

    /// Evaluate the polynomial at a point using Horner's method.
    ///
    /// # Example
    ///
    /// ```
    /// use rabinpoly::Poly;
    ///
    /// // p(x) = 1 + 2x + 3x^2 over GF(17)
    /// let p = Poly::new(vec![1, 2, 3], 17).unwrap();
    ///
    /// // p(2) = 1 + 4 + 12 = 17 ≡ 0 (mod 17)
    /// assert_eq!(p.eval(2), 0);
    /// assert_eq!(p.eval(1), 6);
    /// ```
    pub fn eval(&self, x: u64) -> u64 {
        let x = x % self.p;
        self.coeffs
            .iter()
            .rev()
            .fold(0, |acc, &c| add_mod(mul_mod(acc, x, self.p), c, self.p))
    }

    /// Strip trailing zero coefficients, keeping at least one.
    fn normalize(&mut self) {
        while self.coeffs.len() > 1 && self.coeffs.last() == Some(&0) {
            self.coeffs.pop();
        }
        if self.coeffs.is_empty() {
            self.coeffs.push(0);
        }
    }

    /// Multiply every coefficient by the scalar `c`.
    pub fn scale(&self, c: u64) -> Self {
        let c = c % self.p;
        let coeffs = self.coeffs.iter().map(|&a| mul_mod(a, c, self.p)).collect();
        Self::canonical(coeffs, self.p)
    }

    /// Make the polynomial monic (leading coefficient = 1).
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NonInvertibleElement`] for the zero polynomial,
    /// or when the leading coefficient shares a factor with a non-prime modulus.
    ///
    /// # Example
    ///
    /// ```
    /// use rabinpoly::Poly;
    ///
    /// let p = Poly::new(vec![2, 4, 2], 17).unwrap(); // 2 + 4x + 2x^2
    /// let monic = p.monic().unwrap();
    /// assert_eq!(monic.leading_coeff(), 1);
    /// ```
    pub fn monic(&self) -> Result<Self, PolyError> {
        let inv = inv_mod(self.leading_coeff(), self.p)?;
        Ok(self.scale(inv))
    }

    fn check_same_field(&self, other: &Self) -> Result<(), PolyError> {
        if self.p != other.p {
            return Err(PolyError::ModulusMismatch {
                left: self.p,
                right: other.p,
            });
        }
        Ok(())
    }

    fn assert_same_field(&self, other: &Self) {
        assert!(
            self.p == other.p,
            "modulus mismatch: {} vs {}",
            self.p,
            other.p
        );
    }

    /// Euclidean division: compute quotient and remainder.
    ///
    /// Returns `(q, r)` such that `self = q * divisor + r` and either `r` is
    /// zero or `deg(r) < deg(divisor)`.
    ///
    /// # Errors
    ///
    /// - [`PolyError::DivisionByZeroPolynomial`] if the divisor is zero
    /// - [`PolyError::NonInvertibleElement`] if the divisor's leading
    ///   coefficient has no inverse (only possible with a non-prime modulus)
    /// - [`PolyError::ModulusMismatch`] if the operands have different moduli
    ///
    /// # Example
    ///
    /// ```
    /// use rabinpoly::Poly;
    ///
    /// // (x^2 + 2x + 1) / (x + 1) = (x + 1), remainder 0
    /// let dividend = Poly::new(vec![1, 2, 1], 17).unwrap();
    /// let divisor = Poly::new(vec![1, 1], 17).unwrap();
    /// let (q, r) = dividend.div_rem(&divisor).unwrap();
    ///
    /// assert_eq!(q, divisor);
    /// assert!(r.is_zero());
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), PolyError> {
        self.check_same_field(divisor)?;
        if divisor.is_zero() {
            return Err(PolyError::DivisionByZeroPolynomial);
        }

        let p = self.p;
        let divisor_deg = divisor.degree();
        if self.is_zero() || self.degree() < divisor_deg {
            return Ok((Self::zero(p), self.clone()));
        }

        let lc_inv = inv_mod(divisor.leading_coeff(), p)?;
        let mut remainder = self.clone();
        let mut quotient = vec![0; self.degree() - divisor_deg + 1];

        while !remainder.is_zero() && remainder.degree() >= divisor_deg {
            let coeff = mul_mod(remainder.leading_coeff(), lc_inv, p);
            let shift = remainder.degree() - divisor_deg;

            quotient[shift] = coeff;

            // remainder -= coeff * x^shift * divisor
            for (i, &d) in divisor.coeffs.iter().enumerate() {
                let r = &mut remainder.coeffs[i + shift];
                *r = sub_mod(*r, mul_mod(coeff, d, p), p);
            }
            remainder.normalize();
        }

        Ok((Self::canonical(quotient, p), remainder))
    }

    /// Compute the remainder of division.
    ///
    /// # Errors
    ///
    /// Same as [`Poly::div_rem`].
    pub fn rem(&self, divisor: &Self) -> Result<Self, PolyError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Greatest common divisor by the Euclidean algorithm.
    ///
    /// Replaces `(a, b)` with `(b, a mod b)` until `b` vanishes and returns
    /// `a`. The result is canonical but not forced monic, so it is defined
    /// up to a non-zero scalar factor. `gcd(0, 0)` is the zero polynomial.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Poly::div_rem`].
    ///
    /// # Example
    ///
    /// ```
    /// use rabinpoly::Poly;
    ///
    /// // gcd((x-1)(x-2), (x-2)(x-3)) has the root 2 over GF(17)
    /// let a = Poly::new(vec![2, -3, 1], 17).unwrap();
    /// let b = Poly::new(vec![6, -5, 1], 17).unwrap();
    /// let g = Poly::gcd(&a, &b).unwrap();
    ///
    /// assert_eq!(g.degree(), 1);
    /// assert_eq!(g.eval(2), 0);
    /// ```
    pub fn gcd(a: &Self, b: &Self) -> Result<Self, PolyError> {
        a.check_same_field(b)?;

        let mut a = a.clone();
        let mut b = b.clone();
        while !b.is_zero() {
            let r = a.rem(&b)?;
            a = b;
            b = r;
        }
        Ok(a)
    }

    /// Compute `x^exp mod self` by binary exponentiation.
    ///
    /// Every product is reduced modulo `self` immediately, so intermediate
    /// polynomials never exceed `deg(self)` even for huge exponents.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZeroPolynomial`] if `self` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rabinpoly::Poly;
    ///
    /// // x^3 mod (x^2 + 1) = -x = 16x over GF(17)
    /// let m = Poly::new(vec![1, 0, 1], 17).unwrap();
    /// let r = m.powmod_x(3).unwrap();
    /// assert_eq!(r.coefficients(), &[0, 16]);
    /// ```
    pub fn powmod_x(&self, exp: u64) -> Result<Self, PolyError> {
        self.powmod(&Self::x(self.p), exp)
    }

    /// Compute `base^exp mod self` by binary exponentiation.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZeroPolynomial`] if `self` is zero and
    /// [`PolyError::ModulusMismatch`] if `base` lives over another field.
    pub fn powmod(&self, base: &Self, exp: u64) -> Result<Self, PolyError> {
        self.check_same_field(base)?;
        if self.is_zero() {
            return Err(PolyError::DivisionByZeroPolynomial);
        }

        let mut b = base.rem(self)?;
        let mut result = Self::one(self.p).rem(self)?;
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = (&result * &b).rem(self)?;
            }
            b = (&b * &b).rem(self)?;
            e >>= 1;
        }

        Ok(result)
    }
}

/* ---- Arithmetic operators ---- */

impl Add<&Poly> for &Poly {
    type Output = Poly;

    /// # Panics
    ///
    /// Panics if the operands have different moduli.
    fn add(self, rhs: &Poly) -> Poly {
        self.assert_same_field(rhs);
        let p = self.p;
        let max_len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..max_len)
            .map(|i| add_mod(self.coeff(i), rhs.coeff(i), p))
            .collect();
        Poly::canonical(coeffs, p)
    }
}

impl Sub<&Poly> for &Poly {
    type Output = Poly;

    /// # Panics
    ///
    /// Panics if the operands have different moduli.
    fn sub(self, rhs: &Poly) -> Poly {
        self.assert_same_field(rhs);
        let p = self.p;
        let max_len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..max_len)
            .map(|i| sub_mod(self.coeff(i), rhs.coeff(i), p))
            .collect();
        Poly::canonical(coeffs, p)
    }
}

impl Mul<&Poly> for &Poly {
    type Output = Poly;

    /// Polynomial multiplication using naive O(n*m) convolution.
    ///
    /// # Panics
    ///
    /// Panics if the operands have different moduli.
    fn mul(self, rhs: &Poly) -> Poly {
        self.assert_same_field(rhs);
        let p = self.p;
        if self.is_zero() || rhs.is_zero() {
            return Poly::zero(p);
        }

        let n = self.coeffs.len();
        let m = rhs.coeffs.len();
        let mut coeffs = vec![0; n + m - 1];

        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] = add_mod(coeffs[i + j], mul_mod(a, b, p), p);
            }
        }

        Poly::canonical(coeffs, p)
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        let coeffs = self.coeffs.iter().map(|&c| sub_mod(0, c, self.p)).collect();
        Poly::canonical(coeffs, self.p)
    }
}

impl Add for Poly {
    type Output = Poly;

    fn add(self, rhs: Poly) -> Poly {
        &self + &rhs
    }
}

impl Add<&Poly> for Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        &self + rhs
    }
}

impl Sub for Poly {
    type Output = Poly;

    fn sub(self, rhs: Poly) -> Poly {
        &self - &rhs
    }
}

impl Sub<&Poly> for Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Poly {
        &self - rhs
    }
}

impl Mul for Poly {
    type Output = Poly;

    fn mul(self, rhs: Poly) -> Poly {
        &self * &rhs
    }
}

impl Mul<&Poly> for Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Poly {
        &self * rhs
    }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        -&self
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0 (mod {})", self.p);
        }

        let mut first = true;
        for (i, &coeff) in self.coeffs.iter().enumerate() {
            if coeff == 0 {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match i {
                0 => write!(f, "{}", coeff)?,
                1 if coeff == 1 => write!(f, "x")?,
                1 => write!(f, "{}*x", coeff)?,
                _ if coeff == 1 => write!(f, "x^{}", i)?,
                _ => write!(f, "{}*x^{}", coeff, i)?,
            }
        }

        write!(f, " (mod {})", self.p)
    }
}

/// Highest degree first, every stored coefficient printed:
/// `[1, 0, 1]` renders as `1x^2 + 0x^1 + 1`.
impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.coeffs.len()).rev() {
            write!(f, "{}", self.coeffs[i])?;
            if i > 0 {
                write!(f, "x^{} + ", i)?;
            }
        }
        Ok(())
    }
}

/// Serialized form: the modulus alongside the raw coefficients.
///
/// Deserializing re-validates the modulus and re-canonicalizes, so a
/// hand-edited payload cannot break the representation invariants.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PolyRepr {
    modulus: u64,
    coeffs: Vec<u64>,
}

#[cfg(feature = "serde")]
impl From<Poly> for PolyRepr {
    fn from(poly: Poly) -> Self {
        Self {
            modulus: poly.p,
            coeffs: poly.coeffs,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<PolyRepr> for Poly {
    type Error = PolyError;

    fn try_from(repr: PolyRepr) -> Result<Self, Self::Error> {
        if repr.modulus == 0 {
            return Err(PolyError::InvalidModulus(0));
        }
        Ok(Self::from_residues(repr.coeffs, repr.modulus))
    }
}
