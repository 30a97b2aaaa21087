//! Arithmetic over GF(2)[x]
//!
//! Polynomials with binary coefficients: addition is XOR, multiplication
//! is carry-less, and division is long division with XOR subtraction.

mod division;
mod polynomial;

pub use division::{div_rem, divides, gcd, rem, x_pow_mod};
pub use polynomial::Gf2Polynomial;
