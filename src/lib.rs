//! Fixed-width binary integers of any bit width.
//!
//! [`BitStore`] holds the raw bits of a `W`-bit value in machine words of
//! type `T`. [`UInteger`] and [`SInteger`] give those bits an unsigned or
//! two's-complement reading and carry the arithmetic: carry-propagating
//! addition and subtraction, schoolbook, Karatsuba and Booth multiplication,
//! and restoring division. Shifts and rotations live on [`BitStore`] and are
//! exposed through the integer types' operators.
//!
//! ```
//! use bitarith::{SInteger, UInteger};
//!
//! let a = UInteger::<16>::try_from(65535u64).unwrap();
//! let one = UInteger::<16>::one();
//! assert!((&a + &one).is_zero());
//! let wide: UInteger<17> = a.expanding_add(&one, false);
//! assert!(wide.msb());
//!
//! let min = SInteger::<8>::min_value();
//! assert_eq!(&min * &SInteger::minus_one(), min);
//! ```

pub mod arith;
pub mod bitstore;
pub mod error;
pub mod integer;
pub mod range;
pub mod word;

#[cfg(feature = "rand")]
pub mod random;

pub use arith::MulAlgorithm;
pub use bitstore::BitStore;
pub use error::{Error, Result};
pub use integer::{Integer, SInteger, UInteger};
pub use range::IntegerRange;
pub use word::Word;
