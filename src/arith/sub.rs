use crate::arith::wider;
use crate::bitstore::limbs;
use crate::integer::{SInteger, UInteger};
use crate::word::Word;

/// `a + !b + 1` at `width` bits: subtraction as addition of the
/// two's-complement negation.
fn negate_and_add<T: Word>(a: &[T], b: &[T], width: usize) -> Vec<T> {
    limbs::add(a, &limbs::not(b, width), width, true)
}

impl<const W: usize, T: Word> UInteger<W, T> {
    /// Difference modulo `2^W`: `0 - 1 == max`.
    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        Self::from_limbs(negate_and_add(self.words(), rhs.words(), W))
    }

    /// Difference at `R = max(W, V)` bits, wrapping modulo `2^R`.
    pub fn expanding_sub<const V: usize, const R: usize>(
        &self,
        rhs: &UInteger<V, T>,
    ) -> UInteger<R, T> {
        const { assert!(R == wider(W, V), "expanding_sub needs R == max(W, V)") };
        let lhs = limbs::resize(self.words(), R);
        let rhs = limbs::resize(rhs.words(), R);
        UInteger::from_limbs(negate_and_add(&lhs, &rhs, R))
    }

    /// Difference modulo `2^W` plus whether a borrow out of bit `W - 1`
    /// occurred, i.e. whether `rhs > self`.
    pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        (self.wrapping_sub(rhs), rhs > self)
    }
}

impl<const W: usize, T: Word> SInteger<W, T> {
    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        Self::from_limbs(negate_and_add(self.words(), rhs.words(), W))
    }

    /// Difference of the sign-extended operands at `R = max(W, V)` bits,
    /// wrapping modulo `2^R`.
    pub fn expanding_sub<const V: usize, const R: usize>(
        &self,
        rhs: &SInteger<V, T>,
    ) -> SInteger<R, T> {
        const { assert!(R == wider(W, V), "expanding_sub needs R == max(W, V)") };
        let lhs = limbs::sign_extend(self.words(), W, R);
        let rhs = limbs::sign_extend(rhs.words(), V, R);
        SInteger::from_limbs(negate_and_add(&lhs, &rhs, R))
    }
}

#[cfg(test)]
mod test {
    use crate::{SInteger, UInteger};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_sub_exhaustive_u8() {
        for x in 0..=u8::MAX {
            for y in 0..=u8::MAX {
                let a = UInteger::<8, u8>::try_from(x).unwrap();
                let b = UInteger::<8, u8>::try_from(y).unwrap();
                let (diff, borrow) = a.overflowing_sub(&b);
                assert_eq!(diff.words(), &[x.wrapping_sub(y)]);
                assert_eq!(borrow, y > x);
            }
        }
    }

    #[test]
    fn test_sub_against_native() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..500 {
            let x: u64 = prng.gen();
            let y: u64 = prng.gen();
            let a = UInteger::<64, u16>::try_from(x).unwrap();
            let b = UInteger::<64, u16>::try_from(y).unwrap();
            assert_eq!(
                a.wrapping_sub(&b),
                UInteger::<64, u16>::try_from(x.wrapping_sub(y)).unwrap()
            );
            let s = SInteger::<64, u16>::try_from(x as i64).unwrap();
            let t = SInteger::<64, u16>::try_from(y as i64).unwrap();
            assert_eq!(
                s.wrapping_sub(&t),
                SInteger::<64, u16>::try_from((x as i64).wrapping_sub(y as i64)).unwrap()
            );
        }
    }

    #[test]
    fn test_expanding_sub() {
        let a = UInteger::<8, u8>::try_from(5u8).unwrap();
        let b = UInteger::<20, u8>::try_from(70_000u64).unwrap();
        let d: UInteger<20, u8> = b.expanding_sub(&a);
        assert_eq!(d, UInteger::<20, u8>::try_from(69_995u64).unwrap());
        let d: UInteger<20, u8> = a.expanding_sub(&b);
        assert_eq!(d, UInteger::<20, u8>::wrapping_from_u128(5u128.wrapping_sub(70_000)));

        let s = SInteger::<8, u8>::try_from(-5i8).unwrap();
        let t = SInteger::<20, u8>::try_from(70_000i64).unwrap();
        let d: SInteger<20, u8> = s.expanding_sub(&t);
        assert_eq!(d, SInteger::<20, u8>::try_from(-70_005i64).unwrap());
    }

    #[test]
    fn test_additive_inverse() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..100 {
            let words: [u64; 3] = prng.gen();
            let a = SInteger::<150>::from_words(&words).unwrap();
            assert!(a.wrapping_add(&a.wrapping_neg()).is_zero());
            assert_eq!(SInteger::zero().wrapping_sub(&a), a.wrapping_neg());
        }
    }
}
