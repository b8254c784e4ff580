use crate::bitstore::{limbs, shift, BitStore};
use crate::error::{Error, Result};
use crate::word::Word;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

impl<const W: usize, T: Word> BitStore<W, T> {
    pub fn count_leading_zeroes(&self) -> usize {
        limbs::leading_zeros(self.words(), W)
    }

    pub fn count_leading_ones(&self) -> usize {
        limbs::leading_zeros(&limbs::not(self.words(), W), W)
    }

    pub fn count_ones(&self) -> usize {
        self.words().iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Index of the highest set bit plus one; zero for the zero value.
    pub fn bit_length(&self) -> usize {
        limbs::bit_length(self.words(), W)
    }

    /// Extracts the `N` bits starting at bit `start` (counted from the LSB).
    pub fn bit_range<const N: usize>(&self, start: usize) -> Result<BitStore<N, T>> {
        if N > W || start > W - N {
            return Err(Error::OutOfRange {
                index: start.saturating_add(N - 1),
                bound: W,
            });
        }
        let shifted = shift::shr(self.words(), W, start);
        Ok(BitStore::from_raw(limbs::resize(&shifted, N)))
    }

    /// `self` becomes the high part, `low` the low `V` bits of the result.
    pub fn concat<const V: usize, const R: usize>(&self, low: &BitStore<V, T>) -> BitStore<R, T> {
        const { assert!(R == W + V, "concatenation width must be the sum of both widths") };
        let high = shift::shl(&limbs::resize(self.words(), R), R, V);
        let mut words = limbs::resize(low.words(), R);
        for (w, h) in words.iter_mut().zip(high) {
            *w = *w | h;
        }
        BitStore::from_raw(words)
    }

    /// Splits into the high `H` bits and the low `L` bits.
    pub fn split<const H: usize, const L: usize>(&self) -> (BitStore<H, T>, BitStore<L, T>) {
        const { assert!(H + L == W, "split widths must add up to the width") };
        let high = shift::shr(self.words(), W, L);
        (
            BitStore::from_raw(limbs::resize(&high, H)),
            BitStore::from_raw(limbs::resize(self.words(), L)),
        )
    }
}

impl<const W: usize, T: Word> Not for &BitStore<W, T> {
    type Output = BitStore<W, T>;

    fn not(self) -> BitStore<W, T> {
        BitStore::from_raw(limbs::not(self.words(), W))
    }
}

impl<const W: usize, T: Word> Not for BitStore<W, T> {
    type Output = BitStore<W, T>;

    fn not(self) -> BitStore<W, T> {
        !&self
    }
}

macro_rules! impl_bitwise {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<const W: usize, T: Word> $assign_trait<&BitStore<W, T>> for BitStore<W, T> {
            fn $assign_method(&mut self, rhs: &BitStore<W, T>) {
                for (a, &b) in self.words.iter_mut().zip(rhs.words()) {
                    *a = *a $op b;
                }
            }
        }

        impl<const W: usize, T: Word> $assign_trait for BitStore<W, T> {
            fn $assign_method(&mut self, rhs: BitStore<W, T>) {
                self.$assign_method(&rhs);
            }
        }

        impl<const W: usize, T: Word> $trait<&BitStore<W, T>> for &BitStore<W, T> {
            type Output = BitStore<W, T>;

            fn $method(self, rhs: &BitStore<W, T>) -> BitStore<W, T> {
                let mut out = self.clone();
                out.$assign_method(rhs);
                out
            }
        }

        impl<const W: usize, T: Word> $trait for BitStore<W, T> {
            type Output = BitStore<W, T>;

            fn $method(mut self, rhs: BitStore<W, T>) -> BitStore<W, T> {
                self.$assign_method(&rhs);
                self
            }
        }
    };
}

impl_bitwise!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bitwise!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bitwise!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);
