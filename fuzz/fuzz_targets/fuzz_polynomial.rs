#![no_main]

use arbitrary::Arbitrary;
use cyclix::gf2::{self, Gf2Polynomial};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct PolynomialFuzzInput {
    dividend: Vec<u8>,
    divisor: Vec<u8>,
    width: u8,
}

fn to_polynomial(bytes: &[u8]) -> Gf2Polynomial {
    let bits: String = bytes
        .iter()
        .take(32)
        .flat_map(|b| (0..8).rev().map(move |i| if (b >> i) & 1 == 1 { '1' } else { '0' }))
        .collect();
    Gf2Polynomial::from_bit_str(&bits).unwrap_or_else(|_| Gf2Polynomial::zero())
}

fuzz_target!(|input: PolynomialFuzzInput| {
    let a = to_polynomial(&input.dividend);
    let b = to_polynomial(&input.divisor);

    match gf2::div_rem(&a, &b) {
        Ok((q, r)) => {
            assert_eq!(q.mul(&b).add(&r), a);
            if let Some(rd) = r.degree() {
                assert!(rd < b.degree().unwrap());
            }
        }
        Err(e) => {
            assert!(b.is_zero());
            assert!(e.is_defect());
        }
    }

    // rendering must either fit exactly or refuse, never truncate
    let width = input.width as usize;
    match a.to_bit_string(width) {
        Ok(bits) => assert_eq!(bits.len(), width),
        Err(_) => assert!(a.degree().map_or(false, |d| d + 1 > width)),
    }
});
