//! Random values, behind the `rand` feature.

use crate::bitstore::{limbs, BitStore};
use crate::integer::{Integer, SInteger, UInteger};
use crate::word::Word;
use core::cmp::Ordering;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// `WORD_COUNT` words whose low `bits` bits are uniformly random.
fn random_words<R: Rng + ?Sized, T: Word>(rng: &mut R, width: usize, bits: usize) -> Vec<T> {
    let mut words = limbs::zeros::<T>(width);
    let count = limbs::words_for::<T>(bits);
    for word in words.iter_mut().take(count) {
        *word = T::from_wide(rng.gen::<u64>() as u128);
    }
    if count > 0 {
        limbs::mask_top(&mut words[..count], bits);
    }
    words
}

/// Every bit pattern is equally likely.
impl<const W: usize, T: Word> Distribution<BitStore<W, T>> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BitStore<W, T> {
        BitStore::from_raw(random_words(rng, W, W))
    }
}

impl<const W: usize, T: Word> Distribution<UInteger<W, T>> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> UInteger<W, T> {
        UInteger(self.sample(rng))
    }
}

impl<const W: usize, T: Word> Distribution<SInteger<W, T>> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SInteger<W, T> {
        SInteger(self.sample(rng))
    }
}

/// Uniform value in `low..=high` by rejection sampling over
/// `bit_length(high - low)` random bits.
///
/// # Panics
///
/// Panics if `low > high`.
pub fn random_range<R: Rng + ?Sized, I: Integer>(rng: &mut R, low: &I, high: &I) -> I {
    assert!(low <= high, "random_range: low > high");
    let span = high.wrapping_sub(low);
    let bits = limbs::bit_length(span.words(), I::WIDTH);
    loop {
        let offset = random_words::<R, I::Word>(rng, I::WIDTH, bits);
        if limbs::cmp(&offset, span.words()) != Ordering::Greater {
            return low.wrapping_add(&I::wrapping_from_words(&offset));
        }
    }
}

#[cfg(test)]
mod test {
    use super::random_range;
    use crate::{SInteger, UInteger};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_standard_respects_width() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        let mut seen_msb = false;
        for _ in 0..100 {
            let v: UInteger<70> = prng.gen();
            assert!(v.words()[1] < 64);
            seen_msb |= v.msb();
        }
        assert!(seen_msb);
    }

    #[test]
    fn test_random_range_bounds() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        let low = SInteger::<12, u8>::try_from(-300i64).unwrap();
        let high = SInteger::<12, u8>::try_from(500i64).unwrap();
        let mut hit_low = false;
        let mut hit_high = false;
        for _ in 0..20_000 {
            let v = random_range(&mut prng, &low, &high);
            assert!(v >= low && v <= high);
            hit_low |= v == low;
            hit_high |= v == high;
        }
        assert!(hit_low && hit_high);

        let fixed = UInteger::<200>::max_value();
        assert_eq!(random_range(&mut prng, &fixed, &fixed), fixed);
    }

    #[test]
    #[should_panic]
    fn test_random_range_empty() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        let _ = random_range(&mut prng, &UInteger::<8>::one(), &UInteger::<8>::zero());
    }
}
