//! Polynomial division in GF(2)[x]
//!
//! Long division, divisibility and the Euclidean algorithm

use super::polynomial::Gf2Polynomial;
use crate::error::{CodeError, CodeResult};

/// Polynomial division in GF(2)[x]
///
/// Returns (quotient, remainder) such that dividend = quotient * divisor + remainder
/// and deg(remainder) < deg(divisor). Dividing by the zero polynomial is an error.
pub fn div_rem(
    dividend: &Gf2Polynomial,
    divisor: &Gf2Polynomial,
) -> CodeResult<(Gf2Polynomial, Gf2Polynomial)> {
    let divisor_deg = divisor
        .degree()
        .ok_or_else(|| CodeError::division_by_zero("div_rem"))?;

    let mut quotient = Gf2Polynomial::zero();
    let mut remainder = dividend.clone();

    while let Some(remainder_deg) = remainder.degree() {
        if remainder_deg < divisor_deg {
            break;
        }

        let shift = remainder_deg - divisor_deg;
        quotient.flip_coeff(shift);

        // Subtract divisor * x^shift from remainder (XOR in GF(2))
        remainder.xor_shifted(divisor, shift);
    }

    Ok((quotient, remainder))
}

/// Remainder of `dividend` modulo `divisor`
pub fn rem(dividend: &Gf2Polynomial, divisor: &Gf2Polynomial) -> CodeResult<Gf2Polynomial> {
    let divisor_deg = divisor
        .degree()
        .ok_or_else(|| CodeError::division_by_zero("rem"))?;

    let mut remainder = dividend.clone();
    reduce(&mut remainder, divisor, divisor_deg);
    Ok(remainder)
}

/// Reduce `remainder` in place modulo a divisor of degree `divisor_deg`
fn reduce(remainder: &mut Gf2Polynomial, divisor: &Gf2Polynomial, divisor_deg: usize) {
    while let Some(remainder_deg) = remainder.degree() {
        if remainder_deg < divisor_deg {
            break;
        }
        remainder.xor_shifted(divisor, remainder_deg - divisor_deg);
    }
}

/// x^n modulo `modulus` by square-and-multiply, without building x^n
pub fn x_pow_mod(n: usize, modulus: &Gf2Polynomial) -> CodeResult<Gf2Polynomial> {
    let modulus_deg = modulus
        .degree()
        .ok_or_else(|| CodeError::division_by_zero("x_pow_mod"))?;

    let mut result = Gf2Polynomial::one();
    reduce(&mut result, modulus, modulus_deg);

    for bit in (0..usize::BITS).rev() {
        result = result.mul(&result);
        if (n >> bit) & 1 == 1 {
            result = result.shift_left(1);
        }
        reduce(&mut result, modulus, modulus_deg);
    }

    Ok(result)
}

/// Whether `divisor` divides `dividend` with zero remainder
pub fn divides(divisor: &Gf2Polynomial, dividend: &Gf2Polynomial) -> CodeResult<bool> {
    Ok(rem(dividend, divisor)?.is_zero())
}

/// Greatest common divisor. `gcd(0, 0)` is the zero polynomial.
pub fn gcd(a: &Gf2Polynomial, b: &Gf2Polynomial) -> Gf2Polynomial {
    let mut r0 = a.clone();
    let mut r1 = b.clone();

    while let Some(r1_deg) = r1.degree() {
        reduce(&mut r0, &r1, r1_deg);
        std::mem::swap(&mut r0, &mut r1);
    }

    r0
}
