//! Systematic cyclic encoder
//!
//! The codeword polynomial is c(x) = m(x) x^r + (m(x) x^r mod g(x)). The
//! first k bits of the codeword are the message, the last r are parity.

use std::fmt;

use serde::Serialize;

use super::generator::GeneratorPolynomial;
use super::message::Message;
use super::parameters::CodeParameters;
use crate::error::{error_codes, CodeError, CodeResult};
use crate::gf2::{self, Gf2Polynomial};

/// An n-bit codeword
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Codeword {
    bits: String,
    k: usize,
}

impl Codeword {
    pub fn as_str(&self) -> &str {
        &self.bits
    }

    /// Codeword length n
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The first k bits, equal to the encoded message
    pub fn message_bits(&self) -> &str {
        &self.bits[..self.k]
    }

    /// The trailing r parity bits
    pub fn parity_bits(&self) -> &str {
        &self.bits[self.k..]
    }

    pub fn to_polynomial(&self) -> CodeResult<Gf2Polynomial> {
        Gf2Polynomial::from_bit_str(&self.bits)
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits)
    }
}

impl From<Codeword> for String {
    fn from(codeword: Codeword) -> Self {
        codeword.bits
    }
}

/// Encoder bound to one generator polynomial
#[derive(Debug, Clone)]
pub struct CyclicEncoder {
    generator: GeneratorPolynomial,
}

impl CyclicEncoder {
    pub fn new(generator: GeneratorPolynomial) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &GeneratorPolynomial {
        &self.generator
    }

    pub fn parameters(&self) -> CodeParameters {
        self.generator.parameters()
    }

    /// Encode a validated message
    pub fn encode(&self, message: &Message) -> CodeResult<Codeword> {
        let params = self.parameters();
        if message.len() != params.k() {
            return Err(CodeError::invalid_message(
                params.k(),
                message.as_str(),
                &format!("length is {}", message.len()),
                error_codes::MESSAGE_WRONG_LENGTH,
            ));
        }

        let shifted = message.to_polynomial().shift_left(params.r());
        let parity = shifted.rem(self.generator.polynomial())?;
        let codeword = shifted.add(&parity);
        log::debug!(
            "encoded {} with parity {} under {}",
            message,
            parity.to_bits(),
            params
        );

        Ok(Codeword {
            bits: codeword.to_bit_string(params.n())?,
            k: params.k(),
        })
    }

    /// Validate and encode a message given as a bit string
    pub fn encode_str(&self, message: &str) -> CodeResult<Codeword> {
        let message = Message::new(message, self.parameters().k())?;
        self.encode(&message)
    }

    /// Whether an n-bit word is divisible by the generator
    pub fn is_codeword(&self, word: &str) -> CodeResult<bool> {
        let n = self.parameters().n();
        if word.chars().count() != n || !word.chars().all(|c| c == '0' || c == '1') {
            return Err(CodeError::invalid_parameter(
                "word",
                &format!("exactly {} characters, each 0 or 1", n),
                word,
                error_codes::INVALID_BIT_STRING,
            ));
        }

        let word = Gf2Polynomial::from_bit_str(word)?;
        Ok(gf2::divides(self.generator.polynomial(), &word)?)
    }
}

/// Encode `message` with `generator` for an (n, k) code.
///
/// (n, k) are validated first and must match the parameters the generator
/// was found for; the message is validated next.
pub fn encode_message(
    message: &str,
    generator: &GeneratorPolynomial,
    n: usize,
    k: usize,
) -> CodeResult<Codeword> {
    let params = CodeParameters::new(n, k)?;
    if params != generator.parameters() {
        return Err(CodeError::invalid_parameter(
            "generator",
            &format!("a generator for {}", params),
            &format!("a generator for {}", generator.parameters()),
            error_codes::PARAMETER_MISMATCH,
        ));
    }

    let message = Message::new(message, k)?;
    CyclicEncoder::new(generator.clone()).encode(&message)
}

/// Everything a front end shows after encoding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodingReport {
    pub parameters: CodeParameters,
    pub generator: String,
    pub generator_bits: String,
    pub message: Message,
    pub codeword: Codeword,
}

impl EncodingReport {
    pub fn new(generator: &GeneratorPolynomial, message: Message, codeword: Codeword) -> Self {
        Self {
            parameters: generator.parameters(),
            generator: generator.to_string(),
            generator_bits: generator.to_bits(),
            message,
            codeword,
        }
    }
}
