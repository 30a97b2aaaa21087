//! Cyclic code parameters
//!
//! This module defines the (n, k) parameter pair and its validation.

use serde::{Deserialize, Serialize};

use crate::error::{error_codes, CodeError, CodeResult};

/// Parameters of an (n, k) binary cyclic code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawParameters")]
pub struct CodeParameters {
    /// Codeword length
    n: usize,

    /// Message length
    k: usize,
}

#[derive(Deserialize)]
struct RawParameters {
    n: usize,
    k: usize,
}

impl TryFrom<RawParameters> for CodeParameters {
    type Error = CodeError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        Self::new(raw.n, raw.k)
    }
}

impl CodeParameters {
    /// Validate and create parameters; requires n > k >= 1
    pub fn new(n: usize, k: usize) -> CodeResult<Self> {
        if n == 0 {
            return Err(CodeError::invalid_parameter(
                "n",
                "a positive integer",
                &n.to_string(),
                error_codes::INVALID_CODE_LENGTH,
            ));
        }
        if k == 0 {
            return Err(CodeError::invalid_parameter(
                "k",
                "a positive integer",
                &k.to_string(),
                error_codes::INVALID_MESSAGE_LENGTH,
            ));
        }
        if n <= k {
            return Err(CodeError::invalid_parameter(
                "n",
                &format!("a value greater than k = {}", k),
                &n.to_string(),
                error_codes::NON_INCREASING_PARAMETERS,
            ));
        }

        Ok(Self { n, k })
    }

    /// Parse parameters from user input, as typed into a form or on a command line
    pub fn parse(n: &str, k: &str) -> CodeResult<Self> {
        let n = parse_positive("n", n)?;
        let k = parse_positive("k", k)?;
        Self::new(n, k)
    }

    /// Codeword length
    pub fn n(&self) -> usize {
        self.n
    }

    /// Message length
    pub fn k(&self) -> usize {
        self.k
    }

    /// Redundancy r = n - k, the degree of the generator polynomial
    pub fn r(&self) -> usize {
        self.n - self.k
    }

    /// Code rate k / n
    pub fn rate(&self) -> f64 {
        self.k as f64 / self.n as f64
    }
}

impl std::fmt::Display for CodeParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.n, self.k)
    }
}

fn parse_positive(name: &str, value: &str) -> CodeResult<usize> {
    match value.trim().parse::<usize>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(CodeError::invalid_parameter(
            name,
            "a positive integer",
            value,
            error_codes::UNPARSEABLE_PARAMETER,
        )),
    }
}
