//! Fixed-width raw bit container.
//!
//! A `BitStore<W, T>` is `ceil(W / T::BITS)` words of type `T`, least
//! significant word first. Bits at positions `>= W` in the top word are kept
//! at zero by every constructor and mutator.
//!
//! Index policy: the public accessors ([`BitStore::bit`],
//! [`BitStore::set_bit`], [`BitStore::word`], [`BitStore::set_word`]) always
//! check their index and return [`Error::OutOfRange`]. The crate-internal
//! algorithms go through [`limbs`], whose indices are in range by
//! construction and only guarded by `debug_assert!`.

pub(crate) mod bits;
pub(crate) mod limbs;
pub(crate) mod shift;

use crate::error::{check_index, Error, Result};
use crate::word::Word;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "Vec<T>",
        into = "Vec<T>",
        bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct BitStore<const W: usize, T: Word = u64> {
    words: Vec<T>,
}

impl<const W: usize, T: Word> BitStore<W, T> {
    pub const WIDTH: usize = W;
    pub const WORD_BITS: usize = T::BITS;
    pub const WORD_COUNT: usize = W.div_ceil(T::BITS);

    /// Wraps words that are already `WORD_COUNT` long and masked.
    pub(crate) fn from_raw(words: Vec<T>) -> Self {
        const { assert!(W > 0, "bit width must be positive") };
        debug_assert_eq!(words.len(), Self::WORD_COUNT);
        debug_assert!(words
            .last()
            .is_some_and(|&w| w & !limbs::top_mask::<T>(W) == T::zero()));
        Self { words }
    }

    pub fn all_zeroes() -> Self {
        Self::from_raw(limbs::zeros(W))
    }

    pub fn all_ones() -> Self {
        Self::from_raw(limbs::ones(W))
    }

    /// Only the most significant bit set.
    pub fn msb_one() -> Self {
        let mut words = limbs::zeros(W);
        limbs::set_bit(&mut words, W - 1, true);
        Self::from_raw(words)
    }

    /// Every word set to `value`, the top word masked to the width.
    pub fn fill(value: T) -> Self {
        let mut words = vec![value; Self::WORD_COUNT];
        limbs::mask_top(&mut words, W);
        Self::from_raw(words)
    }

    /// The lowest `n` bits set. Saturates at `W`.
    pub fn low_mask(n: usize) -> Self {
        let mut words = limbs::zeros(W);
        limbs::fill_ones(&mut words, 0, n.min(W));
        Self::from_raw(words)
    }

    /// A value whose least significant word is `value`, masked to the width.
    pub fn from_word(value: T) -> Self {
        let mut words = limbs::zeros(W);
        words[0] = value;
        limbs::mask_top(&mut words, W);
        Self::from_raw(words)
    }

    /// Builds a value from exactly `WORD_COUNT` words, least significant
    /// word first (the most significant word comes last). Bits above the
    /// width in the last word are dropped.
    pub fn from_words(words: &[T]) -> Result<Self> {
        if words.len() != Self::WORD_COUNT {
            return Err(Error::WordCount {
                expected: Self::WORD_COUNT,
                found: words.len(),
            });
        }
        let mut words = words.to_vec();
        limbs::mask_top(&mut words, W);
        Ok(Self::from_raw(words))
    }

    pub const fn width(&self) -> usize {
        W
    }

    pub const fn word_count(&self) -> usize {
        Self::WORD_COUNT
    }

    pub fn words(&self) -> &[T] {
        &self.words
    }

    pub fn into_words(self) -> Vec<T> {
        self.words
    }

    pub fn bit(&self, index: usize) -> Result<bool> {
        check_index(index, W)?;
        Ok(limbs::get_bit(&self.words, index))
    }

    pub fn set_bit(&mut self, index: usize, value: bool) -> Result<()> {
        check_index(index, W)?;
        limbs::set_bit(&mut self.words, index, value);
        Ok(())
    }

    pub fn word(&self, index: usize) -> Result<T> {
        check_index(index, Self::WORD_COUNT)?;
        Ok(self.words[index])
    }

    /// Overwrites a whole word. Writing the top word re-applies the mask.
    pub fn set_word(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, Self::WORD_COUNT)?;
        self.words[index] = value;
        limbs::mask_top(&mut self.words, W);
        Ok(())
    }

    pub fn msb(&self) -> bool {
        limbs::get_bit(&self.words, W - 1)
    }

    pub fn lsb(&self) -> bool {
        limbs::get_bit(&self.words, 0)
    }

    pub fn is_zero(&self) -> bool {
        limbs::is_zero(&self.words)
    }

    /// Zero-extends to a wider width or drops the high bits for a narrower one.
    pub fn width_cast<const N: usize>(&self) -> BitStore<N, T> {
        BitStore::from_raw(limbs::resize(&self.words, N))
    }
}

impl<const W: usize, T: Word> Default for BitStore<W, T> {
    fn default() -> Self {
        Self::all_zeroes()
    }
}

impl<const W: usize, T: Word> TryFrom<Vec<T>> for BitStore<W, T> {
    type Error = Error;

    fn try_from(words: Vec<T>) -> Result<Self> {
        if words.len() != Self::WORD_COUNT {
            return Err(Error::WordCount {
                expected: Self::WORD_COUNT,
                found: words.len(),
            });
        }
        // a serialized top word must already respect the mask
        if words[Self::WORD_COUNT - 1] & !limbs::top_mask::<T>(W) != T::zero() {
            return Err(Error::Overflow { width: W });
        }
        Ok(Self::from_raw(words))
    }
}

impl<const W: usize, T: Word> From<BitStore<W, T>> for Vec<T> {
    fn from(store: BitStore<W, T>) -> Self {
        store.words
    }
}
