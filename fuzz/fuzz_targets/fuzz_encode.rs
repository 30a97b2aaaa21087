#![no_main]

use arbitrary::Arbitrary;
use cyclix::{encode_message, find_generator_polynomial, CodeError, CyclicEncoder};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct EncodeFuzzInput {
    n: u8,
    k: u8,
    message: String,
}

fuzz_target!(|input: EncodeFuzzInput| {
    // keep r small so the exhaustive search stays fast
    let n = (input.n % 32) as usize;
    let k = (input.k % 32) as usize;
    if n > k && n - k > 12 {
        return;
    }

    let generator = match find_generator_polynomial(n, k) {
        Ok(g) => g,
        Err(CodeError::InvalidParameters { .. }) => {
            assert!(n <= k || k == 0);
            return;
        }
        Err(CodeError::NoGeneratorExists { .. }) => return,
        Err(e) => panic!("unexpected search error: {}", e),
    };

    match encode_message(&input.message, &generator, n, k) {
        Ok(codeword) => {
            assert_eq!(codeword.len(), n);
            assert_eq!(codeword.message_bits(), input.message);
            assert!(CyclicEncoder::new(generator).is_codeword(codeword.as_str()).unwrap());
        }
        Err(e) => assert_eq!(e.error_type(), "InvalidMessage"),
    }
});
