use crate::bitstore::{limbs, shift};
use crate::error::{Error, Result};
use crate::integer::{SInteger, UInteger};
use crate::word::Word;
use core::cmp::Ordering;

/// Restoring division of two `width`-bit values, `den != 0`.
///
/// The running remainder lives in a `2 * width`-bit register, initialised
/// with the numerator, and the denominator is aligned `width` bits up. Each
/// of the `width` steps doubles the register and subtracts the aligned
/// denominator whenever it fits, setting the matching quotient bit. Before
/// step `i` the high half of the register is below `2^i`, so doubling never
/// overflows the register.
fn restoring<T: Word>(num: &[T], den: &[T], width: usize) -> (Vec<T>, Vec<T>) {
    let wide = 2 * width;
    let aligned = shift::shl(&limbs::resize(den, wide), wide, width);
    let mut rem = limbs::resize(num, wide);
    let mut quotient = limbs::zeros(width);

    for bit in (0..width).rev() {
        rem = shift::shl(&rem, wide, 1);
        if limbs::cmp(&rem, &aligned) != Ordering::Less {
            limbs::sub_assign(&mut rem, &aligned);
            limbs::set_bit(&mut quotient, bit, true);
        }
    }

    let remainder = limbs::resize(&shift::shr(&rem, wide, width), width);
    (quotient, remainder)
}

fn is_one<T: Word>(words: &[T]) -> bool {
    limbs::cmp(words, &[T::one()]) == Ordering::Equal
}

impl<const W: usize, T: Word> UInteger<W, T> {
    /// `(quotient, remainder)` with `self == quotient * rhs + remainder` and
    /// `remainder < rhs`. The divisor may be of any width.
    pub fn restoring_division<const V: usize>(
        &self,
        rhs: &UInteger<V, T>,
    ) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self.is_zero() {
            log::debug!("restoring division: zero numerator");
            return Ok((Self::zero(), Self::zero()));
        }
        match limbs::cmp(self.words(), rhs.words()) {
            Ordering::Equal => {
                log::debug!("restoring division: numerator equals denominator");
                return Ok((Self::one(), Self::zero()));
            }
            Ordering::Less => {
                log::debug!("restoring division: numerator below denominator");
                return Ok((Self::zero(), self.clone()));
            }
            Ordering::Greater => {}
        }
        if is_one(rhs.words()) {
            log::debug!("restoring division: unit denominator");
            return Ok((self.clone(), Self::zero()));
        }

        // rhs < self, so it fits W bits
        let den = limbs::resize(rhs.words(), W);
        let (quotient, remainder) = restoring(self.words(), &den, W);
        Ok((Self::from_limbs(quotient), Self::from_limbs(remainder)))
    }

    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        self.restoring_division(rhs).ok().map(|(q, _)| q)
    }

    pub fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        self.restoring_division(rhs).ok().map(|(_, r)| r)
    }
}

impl<const W: usize, T: Word> SInteger<W, T> {
    /// `(quotient, remainder)` truncated toward zero, like native signed
    /// division: the quotient is negative iff the operand signs differ and
    /// the remainder takes the sign of `self`.
    ///
    /// `min / -1` has no representable quotient; it wraps to `(min, 0)`.
    pub fn restoring_division<const V: usize>(
        &self,
        rhs: &SInteger<V, T>,
    ) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self.is_zero() {
            log::debug!("restoring division: zero numerator");
            return Ok((Self::zero(), Self::zero()));
        }
        if !rhs.is_negative() && is_one(rhs.words()) {
            log::debug!("restoring division: unit denominator");
            return Ok((self.clone(), Self::zero()));
        }
        if self.eq_extended(rhs) {
            log::debug!("restoring division: numerator equals denominator");
            return Ok((Self::one(), Self::zero()));
        }

        let negate_quotient = self.is_negative() != rhs.is_negative();
        let num = self.expanding_abs();
        let den = rhs.expanding_abs();
        let (quotient, remainder) = num.restoring_division(&den)?;

        let quotient = if negate_quotient {
            quotient.as_signed().wrapping_neg()
        } else {
            quotient.as_signed()
        };
        let remainder = if self.is_negative() {
            remainder.as_signed().wrapping_neg()
        } else {
            remainder.as_signed()
        };
        Ok((quotient, remainder))
    }

    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        self.restoring_division(rhs).ok().map(|(q, _)| q)
    }

    pub fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        self.restoring_division(rhs).ok().map(|(_, r)| r)
    }
}
