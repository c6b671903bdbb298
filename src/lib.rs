//! Exact polynomial arithmetic over GF(p) and Rabin's irreducibility test.
//!
//! ```
//! use rabinpoly::Poly;
//!
//! // x^3 + x + 1 over GF(2)
//! let f = Poly::new(vec![1, 1, 0, 1], 2).unwrap();
//! assert_eq!(f.to_string(), "1x^3 + 0x^2 + 1x^1 + 1");
//! assert!(f.is_irreducible());
//! ```

pub mod check;
pub mod error;
pub mod structures;
pub mod utils;

pub use check::{check_polynomial, Report};
pub use error::{InputError, PolyError};
pub use structures::poly::Poly;
pub use utils::{inv_mod, is_prime, pow_int, prime_divisors};
