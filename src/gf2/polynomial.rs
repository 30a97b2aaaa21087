//! Polynomial arithmetic in GF(2)[x]
//!
//! This module implements unbounded polynomials over the binary field.
//! Unlike a ring element modulo x^r - 1, the degree here grows with
//! multiplication and shifting, which is what generator search and
//! systematic encoding need.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{error_codes, CodeError, CodeResult};
use crate::gf2::division;

/// Represents a polynomial in GF(2)[x]
///
/// Coefficients are stored as bits in a `Vec<u8>`, eight per byte, LSB
/// first, so bit `i % 8` of byte `i / 8` is the coefficient of x^i.
/// The vector never ends in a zero byte, so two polynomials are equal
/// exactly when their coefficients agree after stripping leading zeros.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gf2Polynomial {
    coeffs: Vec<u8>,
}

impl Gf2Polynomial {
    /// The zero polynomial
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// The constant polynomial 1
    pub fn one() -> Self {
        Self { coeffs: vec![1] }
    }

    /// The monomial x^d
    pub fn monomial(d: usize) -> Self {
        let mut poly = Self::zero();
        poly.flip_coeff(d);
        poly
    }

    /// x^n - 1, which over GF(2) is x^n + 1
    pub fn x_pow_n_minus_one(n: usize) -> Self {
        let mut poly = Self::monomial(n);
        poly.flip_coeff(0);
        poly
    }

    /// Parse a bit string, most significant coefficient first.
    ///
    /// Leading zeros are accepted and dropped. Any character other than
    /// `0` or `1`, or an empty string, is rejected.
    pub fn from_bit_str(bits: &str) -> CodeResult<Self> {
        if bits.is_empty() {
            return Err(CodeError::invalid_parameter(
                "bits",
                "a non-empty string of 0 and 1",
                bits,
                error_codes::INVALID_BIT_STRING,
            ));
        }

        let mut poly = Self {
            coeffs: vec![0u8; (bits.len() + 7) / 8],
        };
        for (pos, ch) in bits.bytes().rev().enumerate() {
            match ch {
                b'0' => {}
                b'1' => poly.coeffs[pos / 8] |= 1 << (pos % 8),
                _ => {
                    return Err(CodeError::invalid_parameter(
                        "bits",
                        "a non-empty string of 0 and 1",
                        bits,
                        error_codes::INVALID_BIT_STRING,
                    ))
                }
            }
        }
        poly.normalize();
        Ok(poly)
    }

    /// Interpret the binary digits of `code` as coefficients, bit i of
    /// `code` being the coefficient of x^i
    pub fn from_u64(code: u64) -> Self {
        let mut poly = Self {
            coeffs: code.to_le_bytes().to_vec(),
        };
        poly.normalize();
        poly
    }

    /// Inverse of [`from_u64`](Self::from_u64); `None` when the degree is 64 or more
    pub fn to_u64(&self) -> Option<u64> {
        if self.coeffs.len() > 8 {
            return None;
        }
        let mut bytes = [0u8; 8];
        bytes[..self.coeffs.len()].copy_from_slice(&self.coeffs);
        Some(u64::from_le_bytes(bytes))
    }

    /// Get coefficient of x^i (returns 0 or 1)
    pub fn coeff(&self, i: usize) -> u8 {
        match self.coeffs.get(i / 8) {
            Some(byte) => (byte >> (i % 8)) & 1,
            None => 0,
        }
    }

    /// Flip (XOR) the coefficient of x^i
    pub(crate) fn flip_coeff(&mut self, i: usize) {
        let byte_idx = i / 8;
        if byte_idx >= self.coeffs.len() {
            self.coeffs.resize(byte_idx + 1, 0);
        }
        self.coeffs[byte_idx] ^= 1 << (i % 8);
        self.normalize();
    }

    /// XOR `other * x^shift` into `self`
    pub(crate) fn xor_shifted(&mut self, other: &Self, shift: usize) {
        if other.is_zero() {
            return;
        }
        let byte_shift = shift / 8;
        let bit_shift = shift % 8;
        let needed = other.coeffs.len() + byte_shift + 1;
        if self.coeffs.len() < needed {
            self.coeffs.resize(needed, 0);
        }
        for (j, &byte) in other.coeffs.iter().enumerate() {
            self.coeffs[j + byte_shift] ^= byte << bit_shift;
            if bit_shift > 0 {
                self.coeffs[j + byte_shift + 1] ^= byte >> (8 - bit_shift);
            }
        }
        self.normalize();
    }

    fn normalize(&mut self) {
        while self.coeffs.last() == Some(&0) {
            self.coeffs.pop();
        }
    }

    /// Whether this is the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Highest exponent with a non-zero coefficient.
    ///
    /// The zero polynomial has no degree and returns `None`, which keeps
    /// it apart from the constant 1 (`Some(0)`).
    pub fn degree(&self) -> Option<usize> {
        let top = *self.coeffs.last()?;
        Some((self.coeffs.len() - 1) * 8 + (7 - top.leading_zeros() as usize))
    }

    /// Get Hamming weight (number of 1s)
    pub fn hamming_weight(&self) -> usize {
        self.coeffs.iter().map(|&b| b.count_ones() as usize).sum()
    }

    /// Exponents with a non-zero coefficient, ascending
    pub fn exponents(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        (0..self.coeffs.len() * 8).filter(move |&i| self.coeff(i) == 1)
    }

    /// Add two polynomials (XOR in GF(2))
    pub fn add(&self, other: &Self) -> Self {
        let (longer, shorter) = if self.coeffs.len() >= other.coeffs.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut result = longer.clone();
        for (dst, src) in result.coeffs.iter_mut().zip(shorter.coeffs.iter()) {
            *dst ^= src;
        }
        result.normalize();
        result
    }

    /// Multiply two polynomials (carry-less product)
    pub fn mul(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in self.exponents() {
            result.xor_shifted(other, i);
        }
        result
    }

    /// Multiply by x^n
    pub fn shift_left(&self, n: usize) -> Self {
        let mut result = Self::zero();
        result.xor_shifted(self, n);
        result
    }

    /// Long division, see [`crate::gf2::div_rem`]
    pub fn div_rem(&self, divisor: &Self) -> CodeResult<(Self, Self)> {
        division::div_rem(self, divisor)
    }

    /// Remainder of long division, see [`crate::gf2::rem`]
    pub fn rem(&self, divisor: &Self) -> CodeResult<Self> {
        division::rem(self, divisor)
    }

    /// Coefficients as a bit string, most significant first, with no padding.
    /// The zero polynomial renders as `"0"`.
    pub fn to_bits(&self) -> String {
        match self.degree() {
            Some(deg) => (0..=deg)
                .rev()
                .map(|i| if self.coeff(i) == 1 { '1' } else { '0' })
                .collect(),
            None => "0".to_string(),
        }
    }

    /// Coefficients as a bit string of exactly `width` characters.
    ///
    /// Shorter representations are left-padded with zeros. A polynomial
    /// that needs more than `width` coefficients is rejected rather than
    /// truncated.
    pub fn to_bit_string(&self, width: usize) -> CodeResult<String> {
        let required = self.degree().map_or(0, |d| d + 1);
        if required > width {
            return Err(CodeError::width_overflow(width, required));
        }
        Ok((0..width)
            .rev()
            .map(|i| if self.coeff(i) == 1 { '1' } else { '0' })
            .collect())
    }
}

impl fmt::Display for Gf2Polynomial {
    /// Algebraic form, e.g. `x^3 + x + 1`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let terms: Vec<String> = self
            .exponents()
            .rev()
            .map(|e| match e {
                0 => "1".to_string(),
                1 => "x".to_string(),
                _ => format!("x^{}", e),
            })
            .collect();
        write!(f, "{}", terms.join(" + "))
    }
}

impl FromStr for Gf2Polynomial {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bit_str(s.trim())
    }
}

impl TryFrom<String> for Gf2Polynomial {
    type Error = CodeError;

    fn try_from(bits: String) -> Result<Self, Self::Error> {
        Self::from_bit_str(&bits)
    }
}

impl From<Gf2Polynomial> for String {
    fn from(poly: Gf2Polynomial) -> Self {
        poly.to_bits()
    }
}

/// Numeric order of the coefficient bit pattern
impl Ord for Gf2Polynomial {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coeffs
            .len()
            .cmp(&other.coeffs.len())
            .then_with(|| self.coeffs.iter().rev().cmp(other.coeffs.iter().rev()))
    }
}

impl PartialOrd for Gf2Polynomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> Add<&'a Gf2Polynomial> for &'a Gf2Polynomial {
    type Output = Gf2Polynomial;

    fn add(self, rhs: &'a Gf2Polynomial) -> Gf2Polynomial {
        Gf2Polynomial::add(self, rhs)
    }
}

impl<'a> Mul<&'a Gf2Polynomial> for &'a Gf2Polynomial {
    type Output = Gf2Polynomial;

    fn mul(self, rhs: &'a Gf2Polynomial) -> Gf2Polynomial {
        Gf2Polynomial::mul(self, rhs)
    }
}
