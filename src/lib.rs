/*!
 * Cyclix: binary cyclic error-correcting codes
 *
 * This crate constructs binary cyclic codes and encodes messages with them.
 * Given a codeword length n and a message length k it finds a generator
 * polynomial g(x) of degree n - k dividing x^n - 1 over GF(2), then maps a
 * k-bit message to an n-bit systematic codeword: the message followed by
 * n - k parity bits.
 *
 * The main building blocks are:
 *
 * - `gf2` for polynomial arithmetic over the binary field
 * - `cyclic` for parameter validation, generator search and encoding
 * - `error` for the typed errors every operation reports
 */

/// Common error types for the coding module
pub mod error;

/// Polynomial arithmetic over GF(2)
pub mod gf2;

/// Generator search and systematic encoding
pub mod cyclic;

use rand::Rng;

pub use cyclic::{
    encode_message,
    find_generator_polynomial,
    CodeParameters,
    Codeword,
    CyclicEncoder,
    EncodingReport,
    GeneratorPolynomial,
    GeneratorSearch,
    Message,
    SearchConfig,
};
pub use error::{CodeError, CodeResult};
pub use gf2::Gf2Polynomial;

/// Provides a simplified interface to the most commonly used operations.
pub mod prelude {
    pub use crate::cyclic::random_message;
    pub use crate::cyclic::ExhaustiveSearch;
    pub use crate::cyclic::FactorizationSearch;
    pub use crate::encode;
    pub use crate::encode_random;
    pub use crate::encode_with;
    pub use crate::encode_message;
    pub use crate::find_generator_polynomial;
    pub use crate::CodeError;
    pub use crate::CodeParameters;
    pub use crate::CodeResult;
    pub use crate::Codeword;
    pub use crate::CyclicEncoder;
    pub use crate::EncodingReport;
    pub use crate::GeneratorPolynomial;
    pub use crate::GeneratorSearch;
    pub use crate::Gf2Polynomial;
    pub use crate::Message;
    pub use crate::SearchConfig;
}

/// Find the generator for (n, k) and encode `message` with it.
///
/// Validation happens in order: parameters, then message, and only then the
/// search runs, so a bad message never costs a search.
///
/// # Example
///
/// ```
/// use cyclix::prelude::*;
///
/// fn main() -> Result<(), CodeError> {
///     let report = encode(7, 4, "1010")?;
///     assert_eq!(report.generator_bits, "1011");
///     assert_eq!(report.codeword.as_str(), "1010011");
///     Ok(())
/// }
/// ```
pub fn encode(n: usize, k: usize, message: &str) -> CodeResult<EncodingReport> {
    encode_with(
        &cyclic::ExhaustiveSearch::new(SearchConfig::default()),
        n,
        k,
        message,
    )
}

/// Like [`encode`], with an explicit search strategy
pub fn encode_with<S: GeneratorSearch + ?Sized>(
    search: &S,
    n: usize,
    k: usize,
    message: &str,
) -> CodeResult<EncodingReport> {
    let params = CodeParameters::new(n, k)?;
    let message = Message::new(message, params.k())?;

    log::debug!("searching generator for {} with {} strategy", params, search.name());
    let generator = search.find(params)?;
    let codeword = CyclicEncoder::new(generator.clone()).encode(&message)?;

    Ok(EncodingReport::new(&generator, message, codeword))
}

/// Encode a random k-bit message drawn from `rng`
pub fn encode_random<R: Rng + ?Sized>(
    n: usize,
    k: usize,
    rng: &mut R,
) -> CodeResult<EncodingReport> {
    let params = CodeParameters::new(n, k)?;
    let message = cyclic::random_message(rng, params.k());
    encode(n, k, message.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_prelude_encode() {
        use prelude::*;

        let report = encode(7, 4, "1010").unwrap();
        assert_eq!(report.generator, "x^3 + x + 1");
        assert_eq!(report.generator_bits, "1011");
        assert_eq!(report.codeword.as_str(), "1010011");
    }

    #[test]
    fn test_encode_rejects_before_search() {
        assert_eq!(encode(4, 5, "1").unwrap_err().error_type(), "InvalidParameters");
        assert_eq!(encode(5, 3, "102").unwrap_err().error_type(), "InvalidMessage");
        assert_eq!(encode(5, 3, "101").unwrap_err().error_type(), "NoGeneratorExists");
    }

    #[test]
    fn test_encode_with_factorization() {
        let report = encode_with(&cyclic::FactorizationSearch::default(), 15, 7, "1101001").unwrap();
        assert_eq!(report.generator_bits, "100010111");
        assert_eq!(report.codeword.as_str(), "110100111101010");
    }

    #[test]
    fn test_encode_random() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let report = encode_random(15, 11, &mut rng).unwrap();
        assert_eq!(report.codeword.len(), 15);
        assert_eq!(report.codeword.message_bits(), report.message.as_str());
    }
}
