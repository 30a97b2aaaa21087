//! Binary cyclic codes
//!
//! An (n, k) binary cyclic code is generated by a polynomial g(x) of degree
//! n - k dividing x^n - 1. This module finds such a generator and encodes
//! k-bit messages into n-bit systematic codewords.

mod config;
mod encoder;
mod generator;
mod message;
mod parameters;

pub use config::{
    SearchConfig,
    DEFAULT_MAX_CODE_LENGTH,
    DEFAULT_MAX_FACTOR_DEGREE,
    DEFAULT_MAX_REDUNDANCY,
};
pub use encoder::{encode_message, Codeword, CyclicEncoder, EncodingReport};
pub use generator::{
    find_generator_polynomial,
    find_generator_polynomial_with,
    ExhaustiveSearch,
    FactorizationSearch,
    GeneratorPolynomial,
    GeneratorSearch,
    MAX_ENUMERABLE_REDUNDANCY,
};
pub use message::{random_message, Message};
pub use parameters::CodeParameters;
