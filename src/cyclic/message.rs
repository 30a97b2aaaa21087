//! Messages to be encoded
//!
//! A message is a string of exactly k binary digits. Random messages are
//! drawn from a caller-supplied random source so tests stay deterministic.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::error::{error_codes, CodeError, CodeResult};
use crate::gf2::Gf2Polynomial;

/// A validated k-bit message
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Message {
    bits: String,
}

impl Message {
    /// Validate `bits` as a message of length `k`.
    ///
    /// The length is checked before the alphabet, and nothing is coerced:
    /// `"102"` is rejected, not read as `"100"`.
    pub fn new(bits: &str, k: usize) -> CodeResult<Self> {
        let len = bits.chars().count();
        if len != k {
            return Err(CodeError::invalid_message(
                k,
                bits,
                &format!("length is {}", len),
                error_codes::MESSAGE_WRONG_LENGTH,
            ));
        }

        if let Some(bad) = bits.chars().find(|c| *c != '0' && *c != '1') {
            return Err(CodeError::invalid_message(
                k,
                bits,
                &format!("invalid symbol {:?}", bad),
                error_codes::MESSAGE_INVALID_SYMBOL,
            ));
        }

        Ok(Self {
            bits: bits.to_string(),
        })
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.bits
    }

    /// m(x), with the first bit as the highest-degree coefficient
    pub fn to_polynomial(&self) -> Gf2Polynomial {
        let mut poly = Gf2Polynomial::zero();
        for (pos, ch) in self.bits.bytes().rev().enumerate() {
            if ch == b'1' {
                poly.flip_coeff(pos);
            }
        }
        poly
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits)
    }
}

impl From<Message> for String {
    fn from(message: Message) -> Self {
        message.bits
    }
}

/// Generate a uniformly random k-bit message
pub fn random_message<R: Rng + ?Sized>(rng: &mut R, k: usize) -> Message {
    let bits: String = (0..k)
        .map(|_| if rng.gen::<bool>() { '1' } else { '0' })
        .collect();
    log::debug!("generated random {}-bit message", k);
    Message { bits }
}
