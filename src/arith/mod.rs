//! Arithmetic over [`UInteger`](crate::UInteger) and
//! [`SInteger`](crate::SInteger).
//!
//! Every operation is a pure function of its operands. The truncating forms
//! (`wrapping_add`, `wrapping_sub`, `wrapping_mul` and the operators) wrap
//! modulo `2^W` like native integers. The expanding forms return a wider
//! type that always holds the exact result; that width is passed as an
//! explicit const parameter and checked at compile time.

pub(crate) mod add;
pub(crate) mod booth;
pub(crate) mod div;
pub(crate) mod karatsuba;
pub(crate) mod mul;
pub(crate) mod ops;
pub(crate) mod sub;

pub use mul::MulAlgorithm;

use crate::error::Result;
use crate::integer::Integer;

/// The larger of two widths, usable inside the compile-time width checks.
pub(crate) const fn wider(a: usize, b: usize) -> usize {
    if a > b {
        a
    } else {
        b
    }
}

pub fn add<I: Integer>(a: &I, b: &I) -> I {
    a.wrapping_add(b)
}

pub fn sub<I: Integer>(a: &I, b: &I) -> I {
    a.wrapping_sub(b)
}

pub fn mul<I: Integer>(a: &I, b: &I) -> I {
    a.wrapping_mul(b)
}

/// Quotient of restoring division, truncated toward zero.
pub fn div<I: Integer>(numerator: &I, denominator: &I) -> Result<I> {
    numerator.restoring_division(denominator).map(|(q, _)| q)
}

/// Remainder of restoring division. For signed operands it takes the sign
/// of the numerator.
pub fn remainder<I: Integer>(numerator: &I, denominator: &I) -> Result<I> {
    numerator.restoring_division(denominator).map(|(_, r)| r)
}

/// `base^exponent` by square-and-multiply, wrapping modulo `2^W`.
/// `pow(x, 0)` is one, including for `x == 0`.
pub fn pow<I: Integer>(base: &I, exponent: u64) -> I {
    let mut result = I::one();
    let mut square = base.clone();
    let mut e = exponent;
    while e > 0 {
        if e & 1 == 1 {
            result = result.wrapping_mul(&square);
        }
        e >>= 1;
        if e > 0 {
            square = square.wrapping_mul(&square);
        }
    }
    result
}

/// Absolute difference `|a - b|`, wrapping for signed values whose
/// difference exceeds the positive range.
pub fn distance<I: Integer>(a: &I, b: &I) -> I {
    if a <= b {
        b.wrapping_sub(a)
    } else {
        a.wrapping_sub(b)
    }
}
