//! Ordering and equality.
//!
//! Words are compared from the most significant one down, stopping at the
//! first difference. The operator traits compare values of one width; the
//! `*_extended` methods compare across widths, treating the narrower
//! operand as zero-extended (unsigned) or sign-extended (signed).

use crate::bitstore::limbs;
use crate::integer::{SInteger, UInteger};
use crate::word::Word;
use core::cmp::Ordering;

impl<const W: usize, T: Word> UInteger<W, T> {
    pub fn cmp_extended<const V: usize>(&self, other: &UInteger<V, T>) -> Ordering {
        limbs::cmp(self.words(), other.words())
    }

    pub fn eq_extended<const V: usize>(&self, other: &UInteger<V, T>) -> bool {
        self.cmp_extended(other) == Ordering::Equal
    }
}

impl<const W: usize, T: Word> SInteger<W, T> {
    pub fn cmp_extended<const V: usize>(&self, other: &SInteger<V, T>) -> Ordering {
        limbs::cmp_signed(self.words(), W, other.words(), V)
    }

    pub fn eq_extended<const V: usize>(&self, other: &SInteger<V, T>) -> bool {
        self.cmp_extended(other) == Ordering::Equal
    }
}

macro_rules! impl_ord {
    ($ty:ident) => {
        impl<const W: usize, T: Word> PartialEq for $ty<W, T> {
            fn eq(&self, other: &Self) -> bool {
                self.words() == other.words()
            }
        }

        impl<const W: usize, T: Word> Eq for $ty<W, T> {}

        impl<const W: usize, T: Word> PartialOrd for $ty<W, T> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<const W: usize, T: Word> Ord for $ty<W, T> {
            fn cmp(&self, other: &Self) -> Ordering {
                self.cmp_extended(other)
            }
        }
    };
}

impl_ord!(UInteger);
impl_ord!(SInteger);

#[cfg(test)]
mod test {
    use crate::{SInteger, UInteger};
    use core::cmp::Ordering;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_unsigned_cross_width() {
        let a = UInteger::<70>::try_from(5u64).unwrap();
        let b = UInteger::<200>::try_from(5u64).unwrap();
        assert!(a.eq_extended(&b));
        assert!(b.eq_extended(&a));
        let c = UInteger::<200>::from_words(&[0, 0, 0, 1]).unwrap();
        assert_eq!(a.cmp_extended(&c), Ordering::Less);
        assert_eq!(c.cmp_extended(&a), Ordering::Greater);
    }

    #[test]
    fn test_signed_cross_width() {
        let a = SInteger::<8, u8>::try_from(-5i64).unwrap();
        let b = SInteger::<30, u8>::try_from(-5i64).unwrap();
        let c = SInteger::<30, u8>::try_from(3i64).unwrap();
        assert!(a.eq_extended(&b));
        assert_eq!(a.cmp_extended(&c), Ordering::Less);
        assert_eq!(c.cmp_extended(&a), Ordering::Greater);
        assert_eq!(
            SInteger::<30, u8>::min_value().cmp_extended(&a),
            Ordering::Less
        );
        assert_eq!(
            SInteger::<8, u8>::max_value().cmp_extended(&SInteger::<30, u8>::max_value()),
            Ordering::Less
        );
    }

    #[test]
    fn test_ordering_against_native() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..500 {
            let x: i16 = prng.gen();
            let y: i16 = prng.gen();
            let a = SInteger::<16, u8>::try_from(x).unwrap();
            let b = SInteger::<16, u8>::try_from(y).unwrap();
            assert_eq!(a.cmp(&b), x.cmp(&y));
            assert_eq!(a == b, x == y);
            let ua = UInteger::<16, u8>::try_from(x as u16).unwrap();
            let ub = UInteger::<16, u8>::try_from(y as u16).unwrap();
            assert_eq!(ua.cmp(&ub), (x as u16).cmp(&(y as u16)));
            assert_eq!(ua < ub, (x as u16) < (y as u16));
        }
    }
}
