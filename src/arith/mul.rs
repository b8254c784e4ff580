use crate::arith::{booth, karatsuba};
use crate::bitstore::{limbs, shift};
use crate::integer::{SInteger, UInteger};
use crate::word::Word;
use strum_macros::{Display, EnumIter};

/// The interchangeable multiplication strategies. All of them produce the
/// same bits for the same operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum MulAlgorithm {
    /// Shift-and-add over the set bits of one operand.
    Schoolbook,
    Karatsuba,
    /// Booth recoding with a guard bit.
    Booth,
    /// Booth recoding on a single accumulator updated in place.
    BoothInPlace,
}

/// Shift-and-add product of a `wa`-bit and a `wb`-bit value at `wa + wb`
/// bits: `a << i` is accumulated for every set bit `i` of `b`.
pub(crate) fn schoolbook<T: Word>(a: &[T], wa: usize, b: &[T], wb: usize) -> Vec<T> {
    let width = wa + wb;
    if width <= T::BITS {
        let (lo, _) = a[0].mul_wide(b[0]);
        return vec![lo];
    }
    let a = limbs::resize(a, width);
    let mut acc = limbs::zeros(width);
    for i in 0..limbs::bit_length(b, wb) {
        if limbs::get_bit(b, i) {
            limbs::add_assign(&mut acc, &shift::shl(&a, width, i), false);
        }
    }
    limbs::mask_top(&mut acc, width);
    acc
}

/// Unsigned product at `wa + wb` bits with the chosen strategy. Booth sees
/// both operands zero-extended by one bit so they read as non-negative.
pub(crate) fn product<T: Word>(
    a: &[T],
    wa: usize,
    b: &[T],
    wb: usize,
    algorithm: MulAlgorithm,
) -> Vec<T> {
    let full = match algorithm {
        MulAlgorithm::Schoolbook => return schoolbook(a, wa, b, wb),
        MulAlgorithm::Karatsuba => return karatsuba::product(a, wa, b, wb),
        MulAlgorithm::Booth => booth::booth(
            &limbs::resize(a, wa + 1),
            wa + 1,
            &limbs::resize(b, wb + 1),
            wb + 1,
        ),
        MulAlgorithm::BoothInPlace => booth::booth_in_place(
            &limbs::resize(a, wa + 1),
            wa + 1,
            &limbs::resize(b, wb + 1),
            wb + 1,
        ),
    };
    limbs::resize(&full, wa + wb)
}

/// Two's-complement product at `wa + wb` bits with the chosen strategy.
/// The unsigned strategies multiply the operands sign-extended to the
/// result width and keep the low half.
pub(crate) fn signed_product<T: Word>(
    a: &[T],
    wa: usize,
    b: &[T],
    wb: usize,
    algorithm: MulAlgorithm,
) -> Vec<T> {
    match algorithm {
        MulAlgorithm::Booth => booth::booth(a, wa, b, wb),
        MulAlgorithm::BoothInPlace => booth::booth_in_place(a, wa, b, wb),
        MulAlgorithm::Schoolbook | MulAlgorithm::Karatsuba => {
            let width = wa + wb;
            let full = product(
                &limbs::sign_extend(a, wa, width),
                width,
                &limbs::sign_extend(b, wb, width),
                width,
                algorithm,
            );
            limbs::resize(&full, width)
        }
    }
}

impl<const W: usize, T: Word> UInteger<W, T> {
    /// Exact product at `R = W + V` bits by schoolbook multiplication.
    pub fn expanding_mul<const V: usize, const R: usize>(
        &self,
        rhs: &UInteger<V, T>,
    ) -> UInteger<R, T> {
        const { assert!(R == W + V, "expanding_mul needs R == W + V") };
        UInteger::from_limbs(schoolbook(self.words(), W, rhs.words(), V))
    }

    /// Exact product at `R = W + V` bits with the chosen strategy.
    pub fn expanding_mul_with<const V: usize, const R: usize>(
        &self,
        rhs: &UInteger<V, T>,
        algorithm: MulAlgorithm,
    ) -> UInteger<R, T> {
        const { assert!(R == W + V, "expanding_mul_with needs R == W + V") };
        UInteger::from_limbs(product(self.words(), W, rhs.words(), V, algorithm))
    }

    /// Product modulo `2^W`.
    pub fn wrapping_mul(&self, rhs: &Self) -> Self {
        self.mul_with(rhs, MulAlgorithm::Schoolbook)
    }

    /// Product modulo `2^W` with the chosen strategy.
    pub fn mul_with(&self, rhs: &Self, algorithm: MulAlgorithm) -> Self {
        Self::from_slice_lossy(&product(self.words(), W, rhs.words(), W, algorithm))
    }
}

impl<const W: usize, T: Word> SInteger<W, T> {
    /// Exact product at `R = W + V` bits with the chosen strategy.
    pub fn expanding_mul_with<const V: usize, const R: usize>(
        &self,
        rhs: &SInteger<V, T>,
        algorithm: MulAlgorithm,
    ) -> SInteger<R, T> {
        const { assert!(R == W + V, "expanding_mul_with needs R == W + V") };
        SInteger::from_limbs(signed_product(self.words(), W, rhs.words(), V, algorithm))
    }

    /// Product modulo `2^W` by Booth's algorithm: `min * -1 == min`.
    pub fn wrapping_mul(&self, rhs: &Self) -> Self {
        self.mul_with(rhs, MulAlgorithm::Booth)
    }

    /// Product modulo `2^W` with the chosen strategy.
    pub fn mul_with(&self, rhs: &Self, algorithm: MulAlgorithm) -> Self {
        let full = signed_product(self.words(), W, rhs.words(), W, algorithm);
        Self::from_limbs(limbs::resize(&full, W))
    }
}
