//! Booth's multiplication for two's-complement operands.
//!
//! The accumulator `P` is `K = wm + wr + 2` bits wide: the multiplier sits
//! at bits `1..=wr` above a zero bit, and the multiplicand is added or
//! subtracted at bit `wr + 1`. One guard bit above the natural
//! `wm + wr + 1` lets `-m` be formed for the most negative `m`.
//!
//! Each of the `wr` steps inspects the two lowest bits of `P`: `01` adds
//! the multiplicand, `10` subtracts it, `00` and `11` do nothing. `P` is
//! then shifted right arithmetically by one.

use crate::bitstore::{limbs, shift};
use crate::integer::SInteger;
use crate::word::Word;

struct BoothRegisters<T> {
    width: usize,
    add: Vec<T>,
    sub: Vec<T>,
    product: Vec<T>,
}

impl<T: Word> BoothRegisters<T> {
    fn new(m: &[T], wm: usize, r: &[T], wr: usize) -> Self {
        let width = wm + wr + 2;
        let m = limbs::sign_extend(m, wm, width);
        let add = shift::shl(&m, width, wr + 1);
        let sub = shift::shl(&limbs::negate(&m, width), width, wr + 1);
        let product = shift::shl(&limbs::resize(r, width), width, 1);
        Self {
            width,
            add,
            sub,
            product,
        }
    }

    /// The summand selected by the two lowest bits of the product register.
    fn summand(&self) -> Option<&[T]> {
        match (
            limbs::get_bit(&self.product, 1),
            limbs::get_bit(&self.product, 0),
        ) {
            (false, true) => Some(self.add.as_slice()),
            (true, false) => Some(self.sub.as_slice()),
            _ => None,
        }
    }
}

/// Exact signed product of a `wm`-bit and a `wr`-bit value at `wm + wr`
/// bits. Every step builds a fresh register.
pub(crate) fn booth<T: Word>(m: &[T], wm: usize, r: &[T], wr: usize) -> Vec<T> {
    let mut regs = BoothRegisters::new(m, wm, r, wr);
    let k = regs.width;
    for _ in 0..wr {
        let next = match regs.summand() {
            Some(summand) => limbs::add(&regs.product, summand, k, false),
            None => regs.product.clone(),
        };
        regs.product = shift::ashr(&next, k, 1);
    }
    limbs::resize(&shift::ashr(&regs.product, k, 1), wm + wr)
}

/// Same result as [`booth`], updating one product register in place.
pub(crate) fn booth_in_place<T: Word>(m: &[T], wm: usize, r: &[T], wr: usize) -> Vec<T> {
    let BoothRegisters {
        width: k,
        add,
        sub,
        mut product,
    } = BoothRegisters::new(m, wm, r, wr);
    for _ in 0..wr {
        match (limbs::get_bit(&product, 1), limbs::get_bit(&product, 0)) {
            (false, true) => {
                limbs::add_assign(&mut product, &add, false);
            }
            (true, false) => {
                limbs::add_assign(&mut product, &sub, false);
            }
            _ => {}
        }
        limbs::mask_top(&mut product, k);
        shift::ashr1_assign(&mut product, k);
    }
    shift::ashr1_assign(&mut product, k);
    product.truncate(limbs::words_for::<T>(wm + wr));
    limbs::mask_top(&mut product, wm + wr);
    product
}

impl<const W: usize, T: Word> SInteger<W, T> {
    /// Exact product at `R = W + V` bits by Booth's algorithm.
    /// `min * min` and `min * -1` come out exact, without wrapping.
    pub fn expanding_mul<const V: usize, const R: usize>(
        &self,
        rhs: &SInteger<V, T>,
    ) -> SInteger<R, T> {
        const { assert!(R == W + V, "expanding_mul needs R == W + V") };
        SInteger::from_limbs(booth(self.words(), W, rhs.words(), V))
    }

    /// [`SInteger::expanding_mul`] with a single accumulator mutated in
    /// place instead of a new value per step.
    pub fn expanding_mul_in_place<const V: usize, const R: usize>(
        &self,
        rhs: &SInteger<V, T>,
    ) -> SInteger<R, T> {
        const { assert!(R == W + V, "expanding_mul_in_place needs R == W + V") };
        SInteger::from_limbs(booth_in_place(self.words(), W, rhs.words(), V))
    }
}
