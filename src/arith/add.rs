use crate::arith::wider;
use crate::bitstore::limbs;
use crate::integer::{SInteger, UInteger};
use crate::word::Word;

impl<const W: usize, T: Word> UInteger<W, T> {
    /// `self + rhs + carry_in` at `R = max(W, V) + 1` bits. The extra bit
    /// takes the carry out, so the sum is always exact.
    pub fn expanding_add<const V: usize, const R: usize>(
        &self,
        rhs: &UInteger<V, T>,
        carry_in: bool,
    ) -> UInteger<R, T> {
        const { assert!(R == wider(W, V) + 1, "expanding_add needs R == max(W, V) + 1") };
        let mut sum = limbs::resize(self.words(), R);
        limbs::add_assign(&mut sum, rhs.words(), carry_in);
        limbs::mask_top(&mut sum, R);
        UInteger::from_limbs(sum)
    }

    /// Sum modulo `2^W`.
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        Self::from_limbs(limbs::add(self.words(), rhs.words(), W, false))
    }

    /// Sum modulo `2^W` plus the carry out of bit `W - 1`.
    pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut sum = self.words().to_vec();
        let carry = limbs::add_assign(&mut sum, rhs.words(), false);
        let carry = if W % T::BITS == 0 {
            carry
        } else {
            limbs::get_bit(&sum, W)
        };
        limbs::mask_top(&mut sum, W);
        (Self::from_limbs(sum), carry)
    }
}

impl<const W: usize, T: Word> SInteger<W, T> {
    /// Two's-complement `self + rhs + carry_in` at `R = max(W, V) + 1` bits.
    /// Both operands are sign-extended first, so the sum is always exact.
    pub fn expanding_add<const V: usize, const R: usize>(
        &self,
        rhs: &SInteger<V, T>,
        carry_in: bool,
    ) -> SInteger<R, T> {
        const { assert!(R == wider(W, V) + 1, "expanding_add needs R == max(W, V) + 1") };
        let lhs = limbs::sign_extend(self.words(), W, R);
        let rhs = limbs::sign_extend(rhs.words(), V, R);
        SInteger::from_limbs(limbs::add(&lhs, &rhs, R, carry_in))
    }

    /// Sum modulo `2^W`: `max + 1 == min`.
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        Self::from_limbs(limbs::add(self.words(), rhs.words(), W, false))
    }
}
