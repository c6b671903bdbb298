use thiserror::Error;

/// Failures raised by the polynomial core.
///
/// All of these are contract violations by the caller rather than
/// expected runtime conditions; [`check_polynomial`](crate::check_polynomial)
/// rules them out before the core runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The modulus is not a positive integer.
    #[error("invalid modulus {0}: must be positive")]
    InvalidModulus(i64),
    /// Division by the zero polynomial.
    #[error("division by zero polynomial")]
    DivisionByZeroPolynomial,
    /// `value` has no inverse modulo `modulus`.
    #[error("element {value} is not invertible modulo {modulus}")]
    NonInvertibleElement { value: u64, modulus: u64 },
    /// The operands live over different fields.
    #[error("modulus mismatch: {left} vs {right}")]
    ModulusMismatch { left: u64, right: u64 },
}

/// Structured "invalid input" report produced at the input boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The modulus is zero or negative.
    #[error("modulus must be positive, got {0}")]
    InvalidModulus(i64),
    /// The modulus is positive but not prime.
    #[error("modulus {0} is not prime")]
    NotPrime(i64),
    /// The declared degree is negative.
    #[error("degree must be non-negative, got {0}")]
    NegativeDegree(i64),
    /// A degree-`n` polynomial needs exactly `n + 1` coefficients.
    #[error("degree {degree} needs {expected} coefficients, got {got}")]
    CoefficientCount {
        degree: i64,
        expected: usize,
        got: usize,
    },
    /// Every coefficient vanishes modulo `p`.
    #[error("polynomial is zero modulo {0}")]
    ZeroPolynomial(u64),
    /// The polynomial is a non-zero constant after reduction.
    #[error("polynomial {0} is constant; irreducibility needs degree >= 1")]
    ConstantPolynomial(String),
    /// An error surfaced by the core.
    #[error(transparent)]
    Poly(#[from] PolyError),
}
