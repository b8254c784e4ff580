use crate::bitstore::{limbs, BitStore};
use crate::integer::SInteger;
use crate::word::Word;

/// A `W`-bit unsigned integer, range `[0, 2^W - 1]`.
#[derive(Clone, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        transparent,
        bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct UInteger<const W: usize, T: Word = u64>(pub(crate) BitStore<W, T>);

impl<const W: usize, T: Word> UInteger<W, T> {
    pub fn zero() -> Self {
        Self(BitStore::all_zeroes())
    }

    pub fn one() -> Self {
        Self(BitStore::from_word(T::one()))
    }

    pub fn min_value() -> Self {
        Self::zero()
    }

    pub fn max_value() -> Self {
        Self(BitStore::all_ones())
    }

    /// Zero-extends, or drops the high bits when `N < W`.
    pub fn width_cast<const N: usize>(&self) -> UInteger<N, T> {
        UInteger(self.0.width_cast())
    }

    /// Reinterprets the bits as two's complement.
    pub fn as_signed(&self) -> SInteger<W, T> {
        SInteger(self.0.clone())
    }

    pub fn count_ones(&self) -> usize {
        self.0.count_ones()
    }

    /// Index of the highest set bit plus one; zero for zero.
    pub fn bit_length(&self) -> usize {
        self.0.bit_length()
    }

    pub fn is_power_of_two(&self) -> bool {
        self.count_ones() == 1
    }

    pub(crate) fn from_limbs(words: Vec<T>) -> Self {
        Self(BitStore::from_raw(words))
    }

    /// Builds the value from any word slice, zero-extending or truncating.
    pub(crate) fn from_slice_lossy(words: &[T]) -> Self {
        Self::from_limbs(limbs::resize(words, W))
    }
}

#[cfg(test)]
mod test {
    use super::UInteger;

    #[test]
    fn test_constants() {
        assert_eq!(UInteger::<12, u8>::zero().words(), &[0, 0]);
        assert_eq!(UInteger::<12, u8>::one().words(), &[1, 0]);
        assert_eq!(UInteger::<12, u8>::max_value().words(), &[0xff, 0x0f]);
        assert_eq!(UInteger::<12, u8>::min_value(), UInteger::zero());
        assert_eq!(UInteger::<1, u8>::one(), UInteger::max_value());
    }

    #[test]
    fn test_width_cast() {
        let v = UInteger::<100>::max_value();
        let narrow: UInteger<40> = v.width_cast();
        assert_eq!(narrow, UInteger::<40>::max_value());
        let wide: UInteger<130> = narrow.width_cast();
        assert_eq!(wide.words(), &[(1 << 40) - 1, 0, 0]);
        assert_eq!(wide.width_cast::<40>(), narrow);
    }

    #[test]
    fn test_as_signed() {
        assert!(UInteger::<8, u8>::max_value().as_signed().is_negative());
        assert_eq!(
            UInteger::<8, u8>::max_value().as_signed(),
            crate::SInteger::minus_one()
        );
    }

    #[test]
    fn test_bit_length() {
        let v = UInteger::<70>::from_words(&[0, 1]).unwrap();
        assert_eq!(v.bit_length(), 65);
        assert!(v.is_power_of_two());
        assert_eq!(UInteger::<70>::zero().bit_length(), 0);
    }
}
