use crate::bitstore::{limbs, BitStore};
use crate::integer::UInteger;
use crate::word::Word;

/// A `W`-bit two's-complement integer, range `[-2^(W-1), 2^(W-1) - 1]`.
///
/// Widening casts sign-extend. Narrowing casts drop the high bits and may
/// flip the sign; that wraparound is the intended, bit-exact behaviour.
#[derive(Clone, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        transparent,
        bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct SInteger<const W: usize, T: Word = u64>(pub(crate) BitStore<W, T>);

impl<const W: usize, T: Word> SInteger<W, T> {
    pub fn zero() -> Self {
        Self(BitStore::all_zeroes())
    }

    /// The value with only bit 0 set. At `W == 1` that bit pattern reads
    /// as `-1`.
    pub fn one() -> Self {
        Self(BitStore::from_word(T::one()))
    }

    pub fn minus_one() -> Self {
        Self(BitStore::all_ones())
    }

    pub fn min_value() -> Self {
        Self(BitStore::msb_one())
    }

    pub fn max_value() -> Self {
        Self(!BitStore::msb_one())
    }

    pub fn is_negative(&self) -> bool {
        self.0.msb()
    }

    pub fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        if self.is_negative() {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// Sign-extends, or drops the high bits when `N < W`.
    pub fn width_cast<const N: usize>(&self) -> SInteger<N, T> {
        SInteger(BitStore::from_raw(limbs::sign_extend(self.words(), W, N)))
    }

    /// Reinterprets the bits as an unsigned magnitude.
    pub fn as_unsigned(&self) -> UInteger<W, T> {
        UInteger(self.0.clone())
    }

    pub fn count_leading_ones(&self) -> usize {
        self.0.count_leading_ones()
    }

    /// Two's-complement negation. `wrapping_neg(min) == min`.
    pub fn wrapping_neg(&self) -> Self {
        Self::from_limbs(limbs::negate(self.words(), W))
    }

    /// Absolute value at the same width. `abs(min) == min`, since `+2^(W-1)`
    /// is not representable.
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            self.clone()
        }
    }

    /// Absolute value as an unsigned integer of the same width, which always
    /// holds it exactly.
    pub fn expanding_abs(&self) -> UInteger<W, T> {
        self.abs().as_unsigned()
    }

    pub(crate) fn from_limbs(words: Vec<T>) -> Self {
        Self(BitStore::from_raw(words))
    }
}
