//! Shifts and rotations.
//!
//! A shift by `s` moves `s / T::BITS` whole words and then merges each word
//! with the neighbour that supplies the `s % T::BITS` bits crossing the word
//! boundary.

use crate::bitstore::{limbs, BitStore};
use crate::word::Word;
use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

/// Logical left shift of a `width`-bit value.
pub(crate) fn shl<T: Word>(src: &[T], width: usize, shift: usize) -> Vec<T> {
    if shift == 0 {
        return src.to_vec();
    }
    let mut out = vec![T::zero(); src.len()];
    if shift >= width {
        return out;
    }
    let skip = shift / T::BITS;
    let bits = shift % T::BITS;
    for i in skip..src.len() {
        let mut word = src[i - skip] << bits;
        if bits > 0 && i > skip {
            word = word | (src[i - skip - 1] >> (T::BITS - bits));
        }
        out[i] = word;
    }
    limbs::mask_top(&mut out, width);
    out
}

/// Logical right shift of a `width`-bit value.
pub(crate) fn shr<T: Word>(src: &[T], width: usize, shift: usize) -> Vec<T> {
    if shift == 0 {
        return src.to_vec();
    }
    let mut out = vec![T::zero(); src.len()];
    if shift >= width {
        return out;
    }
    let skip = shift / T::BITS;
    let bits = shift % T::BITS;
    for i in 0..src.len() - skip {
        let mut word = src[i + skip] >> bits;
        if bits > 0 && i + skip + 1 < src.len() {
            word = word | (src[i + skip + 1] << (T::BITS - bits));
        }
        out[i] = word;
    }
    out
}

/// Arithmetic right shift: vacated high bits take the sign bit.
pub(crate) fn ashr<T: Word>(src: &[T], width: usize, shift: usize) -> Vec<T> {
    let negative = limbs::get_bit(src, width - 1);
    if shift >= width {
        return if negative {
            limbs::ones(width)
        } else {
            limbs::zeros(width)
        };
    }
    let mut out = shr(src, width, shift);
    if negative {
        limbs::fill_ones(&mut out, width - shift, width);
    }
    out
}

/// In-place arithmetic right shift by one bit.
pub(crate) fn ashr1_assign<T: Word>(words: &mut [T], width: usize) {
    let negative = limbs::get_bit(words, width - 1);
    let len = words.len();
    for i in 0..len {
        let carry = if i + 1 < len {
            words[i + 1] << (T::BITS - 1)
        } else {
            T::zero()
        };
        words[i] = (words[i] >> 1) | carry;
    }
    limbs::set_bit(words, width - 1, negative);
}

pub(crate) fn rotate_left<T: Word>(src: &[T], width: usize, by: usize) -> Vec<T> {
    let by = by % width;
    if by == 0 {
        return src.to_vec();
    }
    let mut out = shl(src, width, by);
    for (o, w) in out.iter_mut().zip(shr(src, width, width - by)) {
        *o = *o | w;
    }
    out
}

pub(crate) fn rotate_right<T: Word>(src: &[T], width: usize, by: usize) -> Vec<T> {
    let by = by % width;
    rotate_left(src, width, (width - by) % width)
}

/// Rotates the `width + 1`-bit ring formed by the value and a carry bit
/// sitting above its MSB, returning the value bits.
pub(crate) fn rotate_through_carry_left<T: Word>(
    src: &[T],
    width: usize,
    carry_in: bool,
    by: usize,
) -> Vec<T> {
    let by = by % (width + 1);
    if by == 0 {
        return src.to_vec();
    }
    let mut out = shl(src, width, by);
    let wrapped = shr(src, width, width + 1 - by);
    for (o, w) in out.iter_mut().zip(wrapped) {
        *o = *o | w;
    }
    limbs::set_bit(&mut out, by - 1, carry_in);
    out
}

/// Rotates the `width + 1`-bit ring formed by the value and a carry bit
/// sitting below its LSB, returning the value bits.
pub(crate) fn rotate_through_carry_right<T: Word>(
    src: &[T],
    width: usize,
    carry_in: bool,
    by: usize,
) -> Vec<T> {
    let by = by % (width + 1);
    if by == 0 {
        return src.to_vec();
    }
    let mut out = shr(src, width, by);
    let wrapped = shl(src, width, width + 1 - by);
    for (o, w) in out.iter_mut().zip(wrapped) {
        *o = *o | w;
    }
    limbs::set_bit(&mut out, width - by, carry_in);
    out
}

impl<const W: usize, T: Word> BitStore<W, T> {
    pub fn logical_shr(&self, shift: usize) -> Self {
        Self::from_raw(shr(self.words(), W, shift))
    }

    /// Right shift filling with the MSB. Shifting by `W` or more leaves all
    /// ones when the MSB is set and all zeroes otherwise.
    pub fn arithmetic_shr(&self, shift: usize) -> Self {
        Self::from_raw(ashr(self.words(), W, shift))
    }

    pub fn rotate_left(&self, by: usize) -> Self {
        Self::from_raw(rotate_left(self.words(), W, by))
    }

    pub fn rotate_right(&self, by: usize) -> Self {
        Self::from_raw(rotate_right(self.words(), W, by))
    }

    /// Rotation by `by` positions (taken modulo `W + 1`) through a carry bit.
    /// `carry_in` lands at bit `by - 1`; the carry out is discarded.
    pub fn rotate_through_carry_left(&self, carry_in: bool, by: usize) -> Self {
        Self::from_raw(rotate_through_carry_left(self.words(), W, carry_in, by))
    }

    /// Mirror image of [`Self::rotate_through_carry_left`]: `carry_in` lands
    /// at bit `W - by`.
    pub fn rotate_through_carry_right(&self, carry_in: bool, by: usize) -> Self {
        Self::from_raw(rotate_through_carry_right(self.words(), W, carry_in, by))
    }
}

impl<const W: usize, T: Word> Shl<usize> for &BitStore<W, T> {
    type Output = BitStore<W, T>;

    fn shl(self, rhs: usize) -> BitStore<W, T> {
        BitStore::from_raw(shl(self.words(), W, rhs))
    }
}

impl<const W: usize, T: Word> Shl<usize> for BitStore<W, T> {
    type Output = BitStore<W, T>;

    fn shl(self, rhs: usize) -> BitStore<W, T> {
        &self << rhs
    }
}

impl<const W: usize, T: Word> ShlAssign<usize> for BitStore<W, T> {
    fn shl_assign(&mut self, rhs: usize) {
        *self = &*self << rhs;
    }
}

impl<const W: usize, T: Word> Shr<usize> for &BitStore<W, T> {
    type Output = BitStore<W, T>;

    fn shr(self, rhs: usize) -> BitStore<W, T> {
        self.logical_shr(rhs)
    }
}

impl<const W: usize, T: Word> Shr<usize> for BitStore<W, T> {
    type Output = BitStore<W, T>;

    fn shr(self, rhs: usize) -> BitStore<W, T> {
        self.logical_shr(rhs)
    }
}

impl<const W: usize, T: Word> ShrAssign<usize> for BitStore<W, T> {
    fn shr_assign(&mut self, rhs: usize) {
        *self = self.logical_shr(rhs);
    }
}
