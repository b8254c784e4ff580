//! Word-slice primitives shared by every fixed-width type.
//!
//! All functions take the value's bit width explicitly and keep the bits at
//! positions `>= width` of the top word cleared. Indices are in range by
//! construction; they are only checked with `debug_assert!`.

use crate::word::Word;
use core::cmp::Ordering;

#[inline]
pub(crate) fn words_for<T: Word>(width: usize) -> usize {
    width.div_ceil(T::BITS)
}

/// Mask for the valid bits of the most significant word.
#[inline]
pub(crate) fn top_mask<T: Word>(width: usize) -> T {
    let rem = width % T::BITS;
    if rem == 0 {
        T::max_value()
    } else {
        (T::one() << rem) - T::one()
    }
}

#[inline]
pub(crate) fn mask_top<T: Word>(words: &mut [T], width: usize) {
    if let Some(last) = words.last_mut() {
        *last = *last & top_mask::<T>(width);
    }
}

pub(crate) fn zeros<T: Word>(width: usize) -> Vec<T> {
    vec![T::zero(); words_for::<T>(width)]
}

pub(crate) fn ones<T: Word>(width: usize) -> Vec<T> {
    let mut words = vec![T::max_value(); words_for::<T>(width)];
    mask_top(&mut words, width);
    words
}

#[inline]
pub(crate) fn get_bit<T: Word>(words: &[T], index: usize) -> bool {
    debug_assert!(index / T::BITS < words.len());
    (words[index / T::BITS] >> (index % T::BITS)) & T::one() == T::one()
}

#[inline]
pub(crate) fn set_bit<T: Word>(words: &mut [T], index: usize, value: bool) {
    debug_assert!(index / T::BITS < words.len());
    let bit = T::one() << (index % T::BITS);
    let word = &mut words[index / T::BITS];
    *word = if value { *word | bit } else { *word & !bit };
}

/// Sets the bits `from..to` to one.
pub(crate) fn fill_ones<T: Word>(words: &mut [T], from: usize, to: usize) {
    let mut index = from;
    while index < to {
        let offset = index % T::BITS;
        let span = (T::BITS - offset).min(to - index);
        let mask = if span == T::BITS {
            T::max_value()
        } else {
            ((T::one() << span) - T::one()) << offset
        };
        words[index / T::BITS] = words[index / T::BITS] | mask;
        index += span;
    }
}

pub(crate) fn is_zero<T: Word>(words: &[T]) -> bool {
    words.iter().all(|w| w.is_zero())
}

/// Zero-extends or truncates `src` to `width` bits.
pub(crate) fn resize<T: Word>(src: &[T], width: usize) -> Vec<T> {
    let count = words_for::<T>(width);
    let mut words: Vec<T> = src.iter().copied().take(count).collect();
    words.resize(count, T::zero());
    mask_top(&mut words, width);
    words
}

/// Sign-extends a `src_width`-bit two's-complement value to `width` bits, or
/// truncates it when `width <= src_width`.
pub(crate) fn sign_extend<T: Word>(src: &[T], src_width: usize, width: usize) -> Vec<T> {
    let mut words = resize(src, width);
    if width > src_width && get_bit(src, src_width - 1) {
        fill_ones(&mut words, src_width, width);
    }
    words
}

/// `acc += rhs + carry_in` over the words of `acc`; `rhs` is zero-extended.
/// Returns the carry out of the top word. The caller re-masks.
pub(crate) fn add_assign<T: Word>(acc: &mut [T], rhs: &[T], carry_in: bool) -> bool {
    let mut carry = carry_in;
    for (i, a) in acc.iter_mut().enumerate() {
        let b = rhs.get(i).copied().unwrap_or_else(T::zero);
        let (sum, c) = a.adc(b, carry);
        *a = sum;
        carry = c;
    }
    carry
}

/// `acc -= rhs` over the words of `acc`; `rhs` is zero-extended.
/// Returns the borrow out of the top word. The caller re-masks.
pub(crate) fn sub_assign<T: Word>(acc: &mut [T], rhs: &[T]) -> bool {
    let mut borrow = false;
    for (i, a) in acc.iter_mut().enumerate() {
        let b = rhs.get(i).copied().unwrap_or_else(T::zero);
        let (diff, bo) = a.sbb(b, borrow);
        *a = diff;
        borrow = bo;
    }
    borrow
}

/// `width`-bit sum of two values already sized to `width`.
pub(crate) fn add<T: Word>(a: &[T], b: &[T], width: usize, carry_in: bool) -> Vec<T> {
    let mut sum = a.to_vec();
    add_assign(&mut sum, b, carry_in);
    mask_top(&mut sum, width);
    sum
}

/// `width`-bit difference, wrapping modulo `2^width`.
pub(crate) fn sub<T: Word>(a: &[T], b: &[T], width: usize) -> Vec<T> {
    let mut diff = a.to_vec();
    sub_assign(&mut diff, b);
    mask_top(&mut diff, width);
    diff
}

pub(crate) fn not<T: Word>(src: &[T], width: usize) -> Vec<T> {
    let mut words: Vec<T> = src.iter().map(|&w| !w).collect();
    mask_top(&mut words, width);
    words
}

/// Two's-complement negation (`!x + 1`) at `width` bits.
pub(crate) fn negate<T: Word>(src: &[T], width: usize) -> Vec<T> {
    let mut words = not(src, width);
    add_assign(&mut words, &[T::one()], false);
    mask_top(&mut words, width);
    words
}

/// Unsigned comparison, most significant word first. Missing words compare
/// as zero, so operands of different lengths are zero-extended.
pub(crate) fn cmp<T: Word>(a: &[T], b: &[T]) -> Ordering {
    let len = a.len().max(b.len());
    for i in (0..len).rev() {
        let x = a.get(i).copied().unwrap_or_else(T::zero);
        let y = b.get(i).copied().unwrap_or_else(T::zero);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Two's-complement comparison of a `wa`-bit and a `wb`-bit value.
pub(crate) fn cmp_signed<T: Word>(a: &[T], wa: usize, b: &[T], wb: usize) -> Ordering {
    let neg_a = get_bit(a, wa - 1);
    let neg_b = get_bit(b, wb - 1);
    match (neg_a, neg_b) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => {
            let width = wa.max(wb);
            cmp(&sign_extend(a, wa, width), &sign_extend(b, wb, width))
        }
    }
}

/// Number of zero bits above the highest set bit of a `width`-bit value.
pub(crate) fn leading_zeros<T: Word>(words: &[T], width: usize) -> usize {
    let slack = words.len() * T::BITS - width;
    for (i, w) in words.iter().enumerate().rev() {
        if !w.is_zero() {
            let above = (words.len() - 1 - i) * T::BITS + w.leading_zeros() as usize;
            return above - slack;
        }
    }
    width
}

/// Position of the highest set bit plus one, zero for a zero value.
pub(crate) fn bit_length<T: Word>(words: &[T], width: usize) -> usize {
    width - leading_zeros(words, width)
}
