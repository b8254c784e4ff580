#![no_main]

use arbitrary::Arbitrary;
use bitarith::{MulAlgorithm, SInteger, UInteger};
use libfuzzer_sys::fuzz_target;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Arbitrary)]
struct Operands {
    lhs: [u64; 3],
    rhs: [u64; 2],
}

// Every strategy must produce the same exact product.
fuzz_target!(|operands: Operands| {
    let a = UInteger::<181>::from_words(&operands.lhs).unwrap();
    let b = UInteger::<97>::from_words(&operands.rhs).unwrap();

    let expected: UInteger<278> = a.expanding_mul(&b);
    for algorithm in MulAlgorithm::iter() {
        let product: UInteger<278> = a.expanding_mul_with(&b, algorithm);
        assert_eq!(product, expected, "unsigned {}", algorithm);
    }

    let (s, t) = (a.as_signed(), b.as_signed());
    let expected: SInteger<278> = s.expanding_mul(&t);
    for algorithm in MulAlgorithm::iter() {
        let product: SInteger<278> = s.expanding_mul_with(&t, algorithm);
        assert_eq!(product, expected, "signed {}", algorithm);
    }
});
