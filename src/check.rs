//! Validated entry point for front ends.
//!
//! Raw user input (modulus, declared degree, coefficients) is checked here
//! before it reaches the polynomial core, so the core's contract violations
//! surface as an [`InputError`] instead.

use log::debug;

use crate::error::InputError;
use crate::structures::poly::Poly;
use crate::utils::is_prime;

/// Outcome of checking one polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    /// The canonical polynomial.
    pub polynomial: Poly,
    /// Human-readable rendering, highest degree first.
    pub rendering: String,
    /// Whether the polynomial is irreducible over GF(p).
    pub irreducible: bool,
}

/// Validate the input and run the irreducibility test.
///
/// `coeffs[i]` is the coefficient of `x^i`, and exactly `degree + 1`
/// coefficients are expected.
///
/// # Errors
///
/// - [`InputError::InvalidModulus`] / [`InputError::NotPrime`] for a bad modulus
/// - [`InputError::NegativeDegree`] / [`InputError::CoefficientCount`] for
///   a malformed coefficient list
/// - [`InputError::ZeroPolynomial`] / [`InputError::ConstantPolynomial`] when
///   the reduced polynomial has no positive degree
///
/// # Example
///
/// ```
/// use rabinpoly::check_polynomial;
///
/// let report = check_polynomial(2, 3, &[1, 1, 0, 1]).unwrap();
/// assert_eq!(report.rendering, "1x^3 + 0x^2 + 1x^1 + 1");
/// assert!(report.irreducible);
///
/// assert!(check_polynomial(4, 1, &[1, 1]).is_err());
/// ```
pub fn check_polynomial(modulus: i64, degree: i64, coeffs: &[i64]) -> Result<Report, InputError> {
    if modulus <= 0 {
        return Err(InputError::InvalidModulus(modulus));
    }
    if !is_prime(modulus as u64) {
        return Err(InputError::NotPrime(modulus));
    }
    if degree < 0 {
        return Err(InputError::NegativeDegree(degree));
    }

    let expected = degree as usize + 1;
    if coeffs.len() != expected {
        return Err(InputError::CoefficientCount {
            degree,
            expected,
            got: coeffs.len(),
        });
    }

    let polynomial = Poly::new(coeffs.to_vec(), modulus)?;
    if polynomial.is_zero() {
        return Err(InputError::ZeroPolynomial(polynomial.modulus()));
    }
    if polynomial.degree() == 0 {
        return Err(InputError::ConstantPolynomial(polynomial.to_string()));
    }
    if polynomial.degree() as i64 != degree {
        debug!(
            "leading coefficients vanish mod {}: degree {} reduced to {}",
            modulus,
            degree,
            polynomial.degree()
        );
    }

    let irreducible = polynomial.try_is_irreducible()?;
    Ok(Report {
        rendering: polynomial.to_string(),
        polynomial,
        irreducible,
    })
}
