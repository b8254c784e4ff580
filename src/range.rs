use crate::error::{Error, Result};
use crate::integer::Integer;

/// Inclusive range `start, start + stride, ...` up to `end`.
///
/// Iteration stops at the last value not above `end`, and also stops
/// instead of wrapping when the next step would overflow the width.
#[derive(Clone, Debug)]
pub struct IntegerRange<I: Integer> {
    next: Option<I>,
    end: I,
    stride: I,
}

impl<I: Integer> IntegerRange<I> {
    pub fn new(start: I, end: I, stride: I) -> Result<Self> {
        if stride.is_zero() || stride.is_negative() {
            return Err(Error::InvalidStride);
        }
        let next = if start <= end { Some(start) } else { None };
        Ok(Self { next, end, stride })
    }

    /// Stride one.
    pub fn inclusive(start: I, end: I) -> Self {
        let next = if start <= end { Some(start) } else { None };
        Self {
            next,
            end,
            stride: I::one(),
        }
    }
}

impl<I: Integer> Iterator for IntegerRange<I> {
    type Item = I;

    fn next(&mut self) -> Option<I> {
        let current = self.next.take()?;
        let step = current.wrapping_add(&self.stride);
        if step > current && step <= self.end {
            self.next = Some(step);
        }
        Some(current)
    }
}

#[cfg(test)]
mod test {
    use super::IntegerRange;
    use crate::{Error, SInteger, UInteger};

    type U8 = UInteger<8, u8>;
    type S8 = SInteger<8, u8>;

    #[test]
    fn test_stride() {
        let range = IntegerRange::new(
            U8::try_from(3u8).unwrap(),
            U8::try_from(20u8).unwrap(),
            U8::try_from(4u8).unwrap(),
        )
        .unwrap();
        let values: Vec<U8> = range.collect();
        let expected: Vec<U8> = [3u8, 7, 11, 15, 19]
            .iter()
            .map(|&v| U8::try_from(v).unwrap())
            .collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn test_stops_before_wrapping() {
        let range = IntegerRange::new(
            U8::try_from(250u8).unwrap(),
            U8::max_value(),
            U8::try_from(3u8).unwrap(),
        )
        .unwrap();
        assert_eq!(range.count(), 2);
        let all = IntegerRange::inclusive(S8::min_value(), S8::max_value());
        assert_eq!(all.count(), 256);
    }

    #[test]
    fn test_invalid_stride() {
        let zero = IntegerRange::new(U8::zero(), U8::max_value(), U8::zero());
        assert_eq!(zero.err(), Some(Error::InvalidStride));
        let negative = IntegerRange::new(S8::zero(), S8::max_value(), S8::minus_one());
        assert_eq!(negative.err(), Some(Error::InvalidStride));
    }

    #[test]
    fn test_empty_range() {
        let range = IntegerRange::inclusive(S8::one(), S8::minus_one());
        assert_eq!(range.count(), 0);
    }
}
