#![allow(dead_code)]

use bitarith::{SInteger, UInteger};
use num_bigint::{BigInt, BigUint, RandomBits, Sign};
use num_traits::{One, Zero};
use rand::Rng;

pub fn to_biguint<const W: usize>(v: &UInteger<W>) -> BigUint {
    v.words()
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, w| (acc << 64u32) + *w)
}

pub fn from_biguint<const W: usize>(v: &BigUint) -> UInteger<W> {
    let modulus = BigUint::one() << W;
    let mut digits = (v % modulus).to_u64_digits();
    digits.resize(UInteger::<W>::WORD_COUNT, 0);
    UInteger::from_words(&digits).unwrap()
}

pub fn to_bigint<const W: usize>(v: &SInteger<W>) -> BigInt {
    let magnitude = BigInt::from(to_biguint(&v.as_unsigned()));
    if v.is_negative() {
        magnitude - (BigInt::one() << W)
    } else {
        magnitude
    }
}

pub fn from_bigint<const W: usize>(v: &BigInt) -> SInteger<W> {
    let modulus = BigInt::one() << W;
    let mut wrapped = v % &modulus;
    if wrapped.sign() == Sign::Minus {
        wrapped += &modulus;
    }
    from_biguint::<W>(&wrapped.to_biguint().unwrap()).as_signed()
}

pub fn random_unsigned<const W: usize, R: Rng>(prng: &mut R) -> UInteger<W> {
    let v: BigUint = prng.sample(RandomBits::new(W as u64));
    from_biguint(&v)
}

pub fn random_signed<const W: usize, R: Rng>(prng: &mut R) -> SInteger<W> {
    random_unsigned::<W, R>(prng).as_signed()
}
