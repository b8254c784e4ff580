//! Operator and `num_traits` impls.
//!
//! `+`, `-`, `*` wrap modulo `2^W`. `/` and `%` panic on a zero divisor,
//! like the native integer types; [`crate::arith::div`] and
//! `restoring_division` report it as [`Error::DivisionByZero`] instead.
//! `>>` is logical on [`UInteger`] and arithmetic on [`SInteger`].

use crate::error::Error;
use crate::integer::{SInteger, UInteger};
use crate::word::Word;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};
use num_traits::{Bounded, CheckedDiv, CheckedRem, One, WrappingAdd, WrappingMul, WrappingSub, Zero};

fn unwrap_division<I>(result: crate::Result<(I, I)>) -> (I, I) {
    match result {
        Ok(qr) => qr,
        Err(Error::DivisionByZero) => panic!("attempt to divide by zero"),
        Err(e) => panic!("{}", e),
    }
}

macro_rules! impl_binary_op {
    ($ty:ident, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, |$a:ident, $b:ident| $body:expr) => {
        impl<const W: usize, T: Word> $trait<&$ty<W, T>> for &$ty<W, T> {
            type Output = $ty<W, T>;

            fn $method(self, rhs: &$ty<W, T>) -> $ty<W, T> {
                let ($a, $b) = (self, rhs);
                $body
            }
        }

        impl<const W: usize, T: Word> $trait for $ty<W, T> {
            type Output = $ty<W, T>;

            fn $method(self, rhs: $ty<W, T>) -> $ty<W, T> {
                (&self).$method(&rhs)
            }
        }

        impl<const W: usize, T: Word> $assign_trait<&$ty<W, T>> for $ty<W, T> {
            fn $assign_method(&mut self, rhs: &$ty<W, T>) {
                *self = (&*self).$method(rhs);
            }
        }

        impl<const W: usize, T: Word> $assign_trait for $ty<W, T> {
            fn $assign_method(&mut self, rhs: $ty<W, T>) {
                *self = (&*self).$method(&rhs);
            }
        }
    };
}

macro_rules! impl_integer_ops {
    ($ty:ident) => {
        impl_binary_op!($ty, Add, add, AddAssign, add_assign, |a, b| a.wrapping_add(b));
        impl_binary_op!($ty, Sub, sub, SubAssign, sub_assign, |a, b| a.wrapping_sub(b));
        impl_binary_op!($ty, Mul, mul, MulAssign, mul_assign, |a, b| a.wrapping_mul(b));
        impl_binary_op!($ty, Div, div, DivAssign, div_assign, |a, b| {
            unwrap_division(a.restoring_division(b)).0
        });
        impl_binary_op!($ty, Rem, rem, RemAssign, rem_assign, |a, b| {
            unwrap_division(a.restoring_division(b)).1
        });
        impl_binary_op!($ty, BitAnd, bitand, BitAndAssign, bitand_assign, |a, b| {
            $ty(&a.0 & &b.0)
        });
        impl_binary_op!($ty, BitOr, bitor, BitOrAssign, bitor_assign, |a, b| {
            $ty(&a.0 | &b.0)
        });
        impl_binary_op!($ty, BitXor, bitxor, BitXorAssign, bitxor_assign, |a, b| {
            $ty(&a.0 ^ &b.0)
        });

        impl<const W: usize, T: Word> Not for &$ty<W, T> {
            type Output = $ty<W, T>;

            fn not(self) -> $ty<W, T> {
                $ty(!&self.0)
            }
        }

        impl<const W: usize, T: Word> Not for $ty<W, T> {
            type Output = $ty<W, T>;

            fn not(self) -> $ty<W, T> {
                $ty(!self.0)
            }
        }

        impl<const W: usize, T: Word> Shl<usize> for &$ty<W, T> {
            type Output = $ty<W, T>;

            fn shl(self, rhs: usize) -> $ty<W, T> {
                $ty(&self.0 << rhs)
            }
        }

        impl<const W: usize, T: Word> Shl<usize> for $ty<W, T> {
            type Output = $ty<W, T>;

            fn shl(self, rhs: usize) -> $ty<W, T> {
                &self << rhs
            }
        }

        impl<const W: usize, T: Word> ShlAssign<usize> for $ty<W, T> {
            fn shl_assign(&mut self, rhs: usize) {
                *self = &*self << rhs;
            }
        }

        impl<const W: usize, T: Word> Shr<usize> for $ty<W, T> {
            type Output = $ty<W, T>;

            fn shr(self, rhs: usize) -> $ty<W, T> {
                &self >> rhs
            }
        }

        impl<const W: usize, T: Word> ShrAssign<usize> for $ty<W, T> {
            fn shr_assign(&mut self, rhs: usize) {
                *self = &*self >> rhs;
            }
        }

        impl<const W: usize, T: Word> Zero for $ty<W, T> {
            fn zero() -> Self {
                $ty::zero()
            }

            fn is_zero(&self) -> bool {
                $ty::is_zero(self)
            }
        }

        impl<const W: usize, T: Word> One for $ty<W, T> {
            fn one() -> Self {
                $ty::one()
            }
        }

        impl<const W: usize, T: Word> Bounded for $ty<W, T> {
            fn min_value() -> Self {
                $ty::min_value()
            }

            fn max_value() -> Self {
                $ty::max_value()
            }
        }

        impl<const W: usize, T: Word> WrappingAdd for $ty<W, T> {
            fn wrapping_add(&self, v: &Self) -> Self {
                $ty::wrapping_add(self, v)
            }
        }

        impl<const W: usize, T: Word> WrappingSub for $ty<W, T> {
            fn wrapping_sub(&self, v: &Self) -> Self {
                $ty::wrapping_sub(self, v)
            }
        }

        impl<const W: usize, T: Word> WrappingMul for $ty<W, T> {
            fn wrapping_mul(&self, v: &Self) -> Self {
                $ty::wrapping_mul(self, v)
            }
        }

        impl<const W: usize, T: Word> CheckedDiv for $ty<W, T> {
            fn checked_div(&self, v: &Self) -> Option<Self> {
                $ty::checked_div(self, v)
            }
        }

        impl<const W: usize, T: Word> CheckedRem for $ty<W, T> {
            fn checked_rem(&self, v: &Self) -> Option<Self> {
                $ty::checked_rem(self, v)
            }
        }
    };
}

impl_integer_ops!(UInteger);
impl_integer_ops!(SInteger);

impl<const W: usize, T: Word> Shr<usize> for &UInteger<W, T> {
    type Output = UInteger<W, T>;

    fn shr(self, rhs: usize) -> UInteger<W, T> {
        UInteger(self.0.logical_shr(rhs))
    }
}

/// Arithmetic shift: the sign bit fills the vacated positions.
impl<const W: usize, T: Word> Shr<usize> for &SInteger<W, T> {
    type Output = SInteger<W, T>;

    fn shr(self, rhs: usize) -> SInteger<W, T> {
        SInteger(self.0.arithmetic_shr(rhs))
    }
}

impl<const W: usize, T: Word> Neg for &SInteger<W, T> {
    type Output = SInteger<W, T>;

    fn neg(self) -> SInteger<W, T> {
        self.wrapping_neg()
    }
}

impl<const W: usize, T: Word> Neg for SInteger<W, T> {
    type Output = SInteger<W, T>;

    fn neg(self) -> SInteger<W, T> {
        self.wrapping_neg()
    }
}

#[cfg(test)]
mod test {
    use crate::{SInteger, UInteger};
    use num_traits::{Bounded, CheckedDiv, One, WrappingAdd, Zero};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    type S16 = SInteger<16, u8>;
    type U16 = UInteger<16, u8>;

    #[test]
    fn test_operators_against_native() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..1000 {
            let x: i16 = prng.gen();
            let y: i16 = prng.gen();
            let s = |v: i16| S16::try_from(v).unwrap();
            assert_eq!(s(x) + s(y), s(x.wrapping_add(y)));
            assert_eq!(s(x) - s(y), s(x.wrapping_sub(y)));
            assert_eq!(s(x) * s(y), s(x.wrapping_mul(y)));
            assert_eq!(-s(x), s(x.wrapping_neg()));
            assert_eq!(!s(x), s(!x));
            assert_eq!(s(x) & s(y), s(x & y));
            assert_eq!(s(x) >> 3, s(x >> 3));
            assert_eq!(s(x) << 5, s(x << 5));
            if y != 0 {
                assert_eq!(s(x) / s(y), s(x.wrapping_div(y)));
                assert_eq!(s(x) % s(y), s(x.wrapping_rem(y)));
            }

            let (a, b) = (x as u16, y as u16);
            let u = |v: u16| U16::try_from(v).unwrap();
            assert_eq!(u(a) + u(b), u(a.wrapping_add(b)));
            assert_eq!(u(a) - u(b), u(a.wrapping_sub(b)));
            assert_eq!(u(a) * u(b), u(a.wrapping_mul(b)));
            assert_eq!(u(a) | u(b), u(a | b));
            assert_eq!(u(a) ^ u(b), u(a ^ b));
            assert_eq!(u(a) >> 3, u(a >> 3));
            if b != 0 {
                assert_eq!(u(a) / u(b), u(a / b));
                assert_eq!(u(a) % u(b), u(a % b));
            }
        }
    }

    #[test]
    fn test_assign_operators() {
        let mut v = UInteger::<100>::one();
        v <<= 99;
        v += UInteger::<100>::one();
        v -= UInteger::<100>::one();
        assert_eq!(v, UInteger::<100>::from_bits(crate::BitStore::msb_one()));
        v *= UInteger::<100>::try_from(2u8).unwrap();
        assert!(v.is_zero());
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_by_zero_panics() {
        let _ = UInteger::<32>::one() / UInteger::<32>::zero();
    }

    #[test]
    fn test_num_traits() {
        fn sum_all<I: Zero + WrappingAdd>(values: &[I]) -> I {
            values.iter().fold(I::zero(), |acc, v| acc.wrapping_add(v))
        }
        let values = [U16::max_value(), <U16 as One>::one()];
        assert!(sum_all(&values).is_zero());
        assert_eq!(<S16 as Bounded>::min_value(), S16::min_value());
        assert_eq!(
            CheckedDiv::checked_div(&U16::one(), &<U16 as Zero>::zero()),
            None
        );
        assert_eq!(
            CheckedDiv::checked_div(&S16::min_value(), &S16::minus_one()),
            Some(S16::min_value())
        );
    }
}
