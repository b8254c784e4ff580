//! Unsigned and two's-complement integers layered on [`BitStore`].
//!
//! Both types own a `BitStore` and only add an interpretation of its bits
//! plus the operations that depend on it.

pub(crate) mod cmp;
pub(crate) mod convert;
pub(crate) mod sinteger;
pub(crate) mod uinteger;

pub use sinteger::SInteger;
pub use uinteger::UInteger;

use crate::bitstore::{limbs, BitStore};
use crate::error::Result;
use crate::word::Word;
use core::fmt::Debug;

/// Capabilities shared by [`UInteger`] and [`SInteger`], used by the generic
/// helpers in [`crate::arith`].
pub trait Integer: Clone + Ord + Debug {
    type Word: Word;
    const WIDTH: usize;

    fn zero() -> Self;
    fn one() -> Self;
    fn min_value() -> Self;
    fn max_value() -> Self;

    /// Keeps the low `WIDTH` bits of `words`, zero-extending short input.
    fn wrapping_from_words(words: &[Self::Word]) -> Self;

    fn words(&self) -> &[Self::Word];
    fn is_zero(&self) -> bool;
    fn is_negative(&self) -> bool;

    fn wrapping_add(&self, rhs: &Self) -> Self;
    fn wrapping_sub(&self, rhs: &Self) -> Self;
    fn wrapping_mul(&self, rhs: &Self) -> Self;

    /// `(quotient, remainder)`, failing on a zero divisor.
    fn restoring_division(&self, rhs: &Self) -> Result<(Self, Self)>;
}

/// Accessors that only forward to the wrapped store.
macro_rules! impl_store_access {
    ($ty:ident) => {
        impl<const W: usize, T: Word> $ty<W, T> {
            pub const WIDTH: usize = W;
            pub const WORD_COUNT: usize = BitStore::<W, T>::WORD_COUNT;

            pub fn from_bits(bits: BitStore<W, T>) -> Self {
                Self(bits)
            }

            pub fn from_words(words: &[T]) -> Result<Self> {
                BitStore::from_words(words).map(Self)
            }

            pub fn bits(&self) -> &BitStore<W, T> {
                &self.0
            }

            pub fn into_bits(self) -> BitStore<W, T> {
                self.0
            }

            pub const fn width(&self) -> usize {
                W
            }

            pub const fn word_count(&self) -> usize {
                Self::WORD_COUNT
            }

            pub fn words(&self) -> &[T] {
                self.0.words()
            }

            pub fn bit(&self, index: usize) -> Result<bool> {
                self.0.bit(index)
            }

            pub fn set_bit(&mut self, index: usize, value: bool) -> Result<()> {
                self.0.set_bit(index, value)
            }

            pub fn word(&self, index: usize) -> Result<T> {
                self.0.word(index)
            }

            pub fn set_word(&mut self, index: usize, value: T) -> Result<()> {
                self.0.set_word(index, value)
            }

            pub fn is_zero(&self) -> bool {
                self.0.is_zero()
            }

            pub fn msb(&self) -> bool {
                self.0.msb()
            }

            pub fn count_leading_zeroes(&self) -> usize {
                self.0.count_leading_zeroes()
            }

            pub fn bit_range<const N: usize>(&self, start: usize) -> Result<BitStore<N, T>> {
                self.0.bit_range(start)
            }
        }

        impl<const W: usize, T: Word> From<BitStore<W, T>> for $ty<W, T> {
            fn from(bits: BitStore<W, T>) -> Self {
                Self(bits)
            }
        }

        impl<const W: usize, T: Word> From<$ty<W, T>> for BitStore<W, T> {
            fn from(value: $ty<W, T>) -> Self {
                value.0
            }
        }

        impl<const W: usize, T: Word> Default for $ty<W, T> {
            fn default() -> Self {
                Self::zero()
            }
        }
    };
}

impl_store_access!(UInteger);
impl_store_access!(SInteger);

impl<const W: usize, T: Word> Integer for UInteger<W, T> {
    type Word = T;
    const WIDTH: usize = W;

    fn zero() -> Self {
        UInteger::zero()
    }

    fn one() -> Self {
        UInteger::one()
    }

    fn min_value() -> Self {
        UInteger::min_value()
    }

    fn max_value() -> Self {
        UInteger::max_value()
    }

    fn wrapping_from_words(words: &[T]) -> Self {
        UInteger::from_slice_lossy(words)
    }

    fn words(&self) -> &[T] {
        UInteger::words(self)
    }

    fn is_zero(&self) -> bool {
        UInteger::is_zero(self)
    }

    fn is_negative(&self) -> bool {
        false
    }

    fn wrapping_add(&self, rhs: &Self) -> Self {
        UInteger::wrapping_add(self, rhs)
    }

    fn wrapping_sub(&self, rhs: &Self) -> Self {
        UInteger::wrapping_sub(self, rhs)
    }

    fn wrapping_mul(&self, rhs: &Self) -> Self {
        UInteger::wrapping_mul(self, rhs)
    }

    fn restoring_division(&self, rhs: &Self) -> Result<(Self, Self)> {
        UInteger::restoring_division(self, rhs)
    }
}

impl<const W: usize, T: Word> Integer for SInteger<W, T> {
    type Word = T;
    const WIDTH: usize = W;

    fn zero() -> Self {
        SInteger::zero()
    }

    fn one() -> Self {
        SInteger::one()
    }

    fn min_value() -> Self {
        SInteger::min_value()
    }

    fn max_value() -> Self {
        SInteger::max_value()
    }

    fn wrapping_from_words(words: &[T]) -> Self {
        SInteger::from_limbs(limbs::resize(words, W))
    }

    fn words(&self) -> &[T] {
        SInteger::words(self)
    }

    fn is_zero(&self) -> bool {
        SInteger::is_zero(self)
    }

    fn is_negative(&self) -> bool {
        SInteger::is_negative(self)
    }

    fn wrapping_add(&self, rhs: &Self) -> Self {
        SInteger::wrapping_add(self, rhs)
    }

    fn wrapping_sub(&self, rhs: &Self) -> Self {
        SInteger::wrapping_sub(self, rhs)
    }

    fn wrapping_mul(&self, rhs: &Self) -> Self {
        SInteger::wrapping_mul(self, rhs)
    }

    fn restoring_division(&self, rhs: &Self) -> Result<(Self, Self)> {
        SInteger::restoring_division(self, rhs)
    }
}
