#![no_main]

use arbitrary::Arbitrary;
use bitarith::{Error, SInteger, UInteger};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct Operands {
    numerator: [u32; 5],
    denominator: [u32; 5],
}

// a == q * b + r, with |r| < |b| and r taking the sign of a.
fuzz_target!(|operands: Operands| {
    let a = UInteger::<150, u32>::from_words(&operands.numerator).unwrap();
    let b = UInteger::<150, u32>::from_words(&operands.denominator).unwrap();

    match a.restoring_division(&b) {
        Err(e) => {
            assert_eq!(e, Error::DivisionByZero);
            assert!(b.is_zero());
        }
        Ok((q, r)) => {
            assert!(r < b);
            let qb: UInteger<300, u32> = q.expanding_mul(&b);
            let sum: UInteger<301, u32> = qb.expanding_add(&r.width_cast::<300>(), false);
            assert_eq!(sum, a.width_cast::<301>());
        }
    }

    let (s, t): (SInteger<150, u32>, SInteger<150, u32>) = (a.as_signed(), b.as_signed());
    if let Ok((q, r)) = s.restoring_division(&t) {
        assert!(r.is_zero() || r.is_negative() == s.is_negative());
        assert!(r.expanding_abs() < t.expanding_abs());
        assert_eq!(&(&q * &t) + &r, s);
    }
});
