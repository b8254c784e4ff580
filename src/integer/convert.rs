//! Conversions between the fixed-width integers and native integers.

use crate::bitstore::limbs;
use crate::error::{Error, Result};
use crate::integer::{SInteger, UInteger};
use crate::word::Word;
use num_traits::ToPrimitive;

const NATIVE_BITS: usize = 128;

/// Spreads `value` over `count` words, filling words past bit 127 with
/// `fill`.
fn split_native<T: Word>(value: u128, count: usize, fill: T) -> Vec<T> {
    (0..count)
        .map(|i| {
            let shift = i * T::BITS;
            if shift < NATIVE_BITS {
                T::from_wide(value >> shift)
            } else {
                fill
            }
        })
        .collect()
}

/// Inverse of [`split_native`], ignoring bits past bit 127.
fn join_native<T: Word>(words: &[T]) -> u128 {
    words
        .iter()
        .enumerate()
        .take_while(|(i, _)| i * T::BITS < NATIVE_BITS)
        .fold(0, |acc, (i, w)| acc | (w.widen() << (i * T::BITS)))
}

impl<const W: usize, T: Word> UInteger<W, T> {
    /// Keeps the low `W` bits of `value`.
    pub fn wrapping_from_u128(value: u128) -> Self {
        let mut words = split_native(value, Self::WORD_COUNT, T::zero());
        limbs::mask_top(&mut words, W);
        Self::from_limbs(words)
    }
}

impl<const W: usize, T: Word> SInteger<W, T> {
    /// Keeps the low `W` bits of the two's-complement encoding of `value`.
    pub fn wrapping_from_i128(value: i128) -> Self {
        let fill = if value < 0 { T::max_value() } else { T::zero() };
        let mut words = split_native(value as u128, Self::WORD_COUNT, fill);
        limbs::mask_top(&mut words, W);
        Self::from_limbs(words)
    }
}

impl<const W: usize, T: Word> TryFrom<u128> for UInteger<W, T> {
    type Error = Error;

    fn try_from(value: u128) -> Result<Self> {
        if W < NATIVE_BITS && value >> W != 0 {
            return Err(Error::Overflow { width: W });
        }
        Ok(Self::wrapping_from_u128(value))
    }
}

impl<const W: usize, T: Word> TryFrom<i128> for SInteger<W, T> {
    type Error = Error;

    fn try_from(value: i128) -> Result<Self> {
        if W < NATIVE_BITS {
            let limit = 1i128 << (W - 1);
            if value < -limit || value >= limit {
                return Err(Error::Overflow { width: W });
            }
        }
        Ok(Self::wrapping_from_i128(value))
    }
}

macro_rules! impl_try_from_native {
    ($ty:ident, $wide:ty, $($native:ty),*) => {
        $(
            impl<const W: usize, T: Word> TryFrom<$native> for $ty<W, T> {
                type Error = Error;

                fn try_from(value: $native) -> Result<Self> {
                    Self::try_from(value as $wide)
                }
            }
        )*
    };
}

impl_try_from_native!(UInteger, u128, u64, u32, u16, u8);
impl_try_from_native!(SInteger, i128, i64, i32, i16, i8);

impl<const W: usize, T: Word> ToPrimitive for UInteger<W, T> {
    fn to_u128(&self) -> Option<u128> {
        if self.bit_length() > NATIVE_BITS {
            return None;
        }
        Some(join_native(self.words()))
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_u128().and_then(|v| i128::try_from(v).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }

    fn to_i64(&self) -> Option<i64> {
        self.to_u128().and_then(|v| i64::try_from(v).ok())
    }
}

impl<const W: usize, T: Word> ToPrimitive for SInteger<W, T> {
    fn to_i128(&self) -> Option<i128> {
        let low = limbs::sign_extend(self.words(), W, NATIVE_BITS);
        if W > NATIVE_BITS && limbs::sign_extend(&low, NATIVE_BITS, W) != self.words() {
            return None;
        }
        Some(join_native(&low) as i128)
    }

    fn to_u128(&self) -> Option<u128> {
        self.to_i128().and_then(|v| u128::try_from(v).ok())
    }

    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i128().and_then(|v| u64::try_from(v).ok())
    }
}
