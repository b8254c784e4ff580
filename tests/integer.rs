mod common;

#[cfg(test)]
mod test {
    use crate::common::{from_biguint, random_signed, random_unsigned, to_bigint, to_biguint};
    use bitarith::{arith, BitStore, Error, SInteger, UInteger};
    use core::cmp::Ordering;
    use num_bigint::BigUint;
    use num_traits::One;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_add_commutes() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..200 {
            let a = random_unsigned::<200, _>(&mut prng);
            let b = random_unsigned::<200, _>(&mut prng);
            assert_eq!(arith::add(&a, &b), arith::add(&b, &a));
            let s = random_signed::<77, _>(&mut prng);
            let t = random_signed::<77, _>(&mut prng);
            assert_eq!(&s + &t, &t + &s);
        }
    }

    #[test]
    fn test_identities() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..100 {
            let a = random_unsigned::<130, _>(&mut prng);
            assert_eq!(&a + &UInteger::zero(), a);
            assert_eq!(&a * &UInteger::one(), a);
            assert!((&a * &UInteger::zero()).is_zero());
            let s = random_signed::<130, _>(&mut prng);
            assert_eq!(&s + &SInteger::zero(), s);
            assert_eq!(&s * &SInteger::one(), s);
            assert!((&s * &SInteger::zero()).is_zero());
            assert!((&s + &-&s).is_zero());
        }
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(
            &UInteger::<16>::max_value() + &UInteger::one(),
            UInteger::<16>::min_value()
        );
        assert_eq!(
            &SInteger::<16>::max_value() + &SInteger::one(),
            SInteger::<16>::min_value()
        );
        assert_eq!(
            &UInteger::<300, u16>::max_value() + &UInteger::one(),
            UInteger::<300, u16>::min_value()
        );
        assert_eq!(
            &SInteger::<300, u16>::max_value() + &SInteger::one(),
            SInteger::<300, u16>::min_value()
        );
    }

    #[test]
    fn test_expanding_add_scenario() {
        let a = UInteger::<16>::try_from(65535u64).unwrap();
        let b = UInteger::<16>::try_from(1u64).unwrap();
        assert!((&a + &b).is_zero());
        let exact: UInteger<17> = a.expanding_add(&b, false);
        assert_eq!(exact, UInteger::<17>::try_from(65536u64).unwrap());
        assert_eq!(exact.bit(16), Ok(true));
    }

    #[test]
    fn test_add_against_biguint() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        let modulus = BigUint::one() << 254usize;
        for _ in 0..100 {
            let a = random_unsigned::<254, _>(&mut prng);
            let b = random_unsigned::<254, _>(&mut prng);
            let sum = to_biguint(&a) + to_biguint(&b);
            assert_eq!(to_biguint(&(&a + &b)), &sum % &modulus);
            let wide: UInteger<255> = a.expanding_add(&b, false);
            assert_eq!(to_biguint(&wide), sum);
            let diff = (to_biguint(&a) + &modulus - to_biguint(&b)) % &modulus;
            assert_eq!(&a - &b, from_biguint::<254>(&diff));
        }
    }

    #[test]
    fn test_width_cast_round_trip() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..100 {
            let a = random_unsigned::<100, _>(&mut prng);
            assert_eq!(a.width_cast::<164>().width_cast::<100>(), a);
            assert_eq!(a.width_cast::<101>().width_cast::<100>(), a);
            let s = random_signed::<100, _>(&mut prng);
            let wide: SInteger<300> = s.width_cast();
            assert_eq!(to_bigint(&wide), to_bigint(&s));
            assert_eq!(wide.width_cast::<100>(), s);
        }
    }

    #[test]
    fn test_cross_width_comparison() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..100 {
            let a = random_unsigned::<90, _>(&mut prng);
            let b = random_unsigned::<150, _>(&mut prng);
            assert_eq!(a.cmp_extended(&b), to_biguint(&a).cmp(&to_biguint(&b)));
            assert_eq!(a.cmp_extended(&a.width_cast::<150>()), Ordering::Equal);
            let s = random_signed::<90, _>(&mut prng);
            let t = random_signed::<150, _>(&mut prng);
            assert_eq!(s.cmp_extended(&t), to_bigint(&s).cmp(&to_bigint(&t)));
        }
    }

    #[test]
    fn test_bit_and_word_access() {
        let mut v = UInteger::<70, u32>::zero();
        v.set_bit(69, true).unwrap();
        assert_eq!(v.word(2), Ok(0b10_0000));
        assert_eq!(v.bit(70), Err(Error::OutOfRange { index: 70, bound: 70 }));
        assert_eq!(v.word(3), Err(Error::OutOfRange { index: 3, bound: 3 }));
        v.set_word(2, u32::MAX).unwrap();
        assert_eq!(v.word(2), Ok(0b11_1111));
        assert_eq!(v.width(), 70);
        assert_eq!(v.word_count(), 3);
    }

    #[test]
    fn test_bit_range_and_concat() {
        let v = UInteger::<64, u16>::try_from(0x1234_5678_9abc_def0u64).unwrap();
        let middle: BitStore<16, u16> = v.bit_range(20).unwrap();
        assert_eq!(middle.words(), &[0x89ab]);
        assert!(v.bit_range::<16>(50).is_err());
        let (high, low): (BitStore<24, u16>, BitStore<40, u16>) = v.bits().split();
        let joined: BitStore<64, u16> = high.concat(&low);
        assert_eq!(&joined, v.bits());
    }

    #[test]
    fn test_signed_helpers() {
        let v = SInteger::<40>::try_from(-12345i64).unwrap();
        assert_eq!(v.abs(), SInteger::<40>::try_from(12345i64).unwrap());
        assert_eq!(v.signum(), -1);
        assert_eq!(
            SInteger::<40>::min_value().expanding_abs(),
            UInteger::<40>::try_from(1u64 << 39).unwrap()
        );
        assert_eq!(
            arith::distance(&v, &SInteger::<40>::try_from(100i64).unwrap()),
            SInteger::<40>::try_from(12445i64).unwrap()
        );
    }
}
