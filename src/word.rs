use core::fmt::Debug;
use core::hash::Hash;
use num_traits::{PrimInt, Unsigned, WrappingSub};

/// A machine word used as the storage unit of a [`BitStore`](crate::BitStore).
///
/// Carry and product computations go through `u128`, which is wide enough
/// for every implementor.
pub trait Word:
    PrimInt + Unsigned + WrappingSub + Hash + Debug + Default + Send + Sync + 'static
{
    const BITS: usize;

    /// Truncates `v` to the low `Self::BITS` bits.
    fn from_wide(v: u128) -> Self;

    fn widen(self) -> u128;

    /// Add with carry. Returns the sum word and the carry out.
    #[inline]
    fn adc(self, rhs: Self, carry: bool) -> (Self, bool) {
        let sum = self.widen() + rhs.widen() + carry as u128;
        (Self::from_wide(sum), (sum >> Self::BITS) != 0)
    }

    /// Subtract with borrow. Returns the difference word and the borrow out.
    #[inline]
    fn sbb(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let diff = self.wrapping_sub(&rhs);
        let first = self < rhs;
        let b = if borrow { Self::one() } else { Self::zero() };
        (diff.wrapping_sub(&b), first || diff < b)
    }

    /// Full product as `(low, high)`.
    #[inline]
    fn mul_wide(self, rhs: Self) -> (Self, Self) {
        let product = self.widen() * rhs.widen();
        (Self::from_wide(product), Self::from_wide(product >> Self::BITS))
    }
}

macro_rules! impl_word {
    ($($t:ty),*) => {
        $(
            impl Word for $t {
                const BITS: usize = <$t>::BITS as usize;

                #[inline]
                fn from_wide(v: u128) -> Self {
                    v as $t
                }

                #[inline]
                fn widen(self) -> u128 {
                    self as u128
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64);

#[cfg(test)]
mod test {
    use super::Word;

    #[test]
    fn test_adc() {
        assert_eq!(u8::adc(200, 100, false), (44, true));
        assert_eq!(u8::adc(255, 0, true), (0, true));
        assert_eq!(u64::adc(u64::MAX, u64::MAX, true), (u64::MAX, true));
        assert_eq!(u32::adc(1, 2, true), (4, false));
    }

    #[test]
    fn test_sbb() {
        assert_eq!(u8::sbb(0, 1, false), (255, true));
        assert_eq!(u8::sbb(5, 5, true), (255, true));
        assert_eq!(u8::sbb(5, 4, true), (0, false));
        assert_eq!(u64::sbb(0, u64::MAX, true), (0, true));
    }

    #[test]
    fn test_mul_wide() {
        assert_eq!(u8::mul_wide(255, 255), (1, 254));
        assert_eq!(u64::mul_wide(u64::MAX, 2), (u64::MAX - 1, 1));
    }
}
