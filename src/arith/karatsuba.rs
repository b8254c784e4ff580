use crate::bitstore::{limbs, shift};
use crate::integer::UInteger;
use crate::word::Word;

/// Largest power of two not above `n`.
fn floor_pow2(n: usize) -> usize {
    1 << (usize::BITS - 1 - n.leading_zeros())
}

/// Product of two `width`-bit values as a `2 * width`-bit value.
///
/// Both operands are split at `k` bits into `(ah, al)` and `(bh, bl)`.
/// With `z2 = ah * bh`, `z0 = al * bl` and
/// `z1 = (ah + al) * (bh + bl) - z2 - z0` the product is
/// `z2 << 2k + z1 << k + z0`. Once the operands fit a single word the
/// native widening multiplication takes over.
pub(crate) fn karatsuba<T: Word>(a: &[T], b: &[T], width: usize) -> Vec<T> {
    let res = 2 * width;
    if width <= T::BITS {
        let (lo, hi) = a[0].mul_wide(b[0]);
        return if res <= T::BITS { vec![lo] } else { vec![lo, hi] };
    }
    if limbs::is_zero(a) || limbs::is_zero(b) {
        return limbs::zeros(res);
    }

    let pow2 = floor_pow2(width);
    let k = if pow2 == width { pow2 / 2 } else { pow2 };
    let h = width - k;
    log::trace!("karatsuba: splitting {} bits into {} + {}", width, h, k);

    let (ah, al) = split(a, width, k);
    let (bh, bl) = split(b, width, k);

    let z2 = karatsuba(&ah, &bh, h);
    let z0 = karatsuba(&al, &bl, k);

    // the sums need k + 1 bits; drop back to k when the top bit is clear
    let sa = limbs::add(&limbs::resize(&ah, k + 1), &al, k + 1, false);
    let sb = limbs::add(&limbs::resize(&bh, k + 1), &bl, k + 1, false);
    let mid = if limbs::get_bit(&sa, k) || limbs::get_bit(&sb, k) {
        karatsuba(&sa, &sb, k + 1)
    } else {
        limbs::resize(
            &karatsuba(&limbs::resize(&sa, k), &limbs::resize(&sb, k), k),
            2 * k + 2,
        )
    };

    // mid - z2 - z0 == ah * bl + al * bh, which is never negative
    let mut z1 = mid;
    limbs::sub_assign(&mut z1, &z2);
    limbs::sub_assign(&mut z1, &z0);

    let mut product = limbs::resize(&z0, res);
    limbs::add_assign(&mut product, &shift::shl(&limbs::resize(&z1, res), res, k), false);
    limbs::add_assign(
        &mut product,
        &shift::shl(&limbs::resize(&z2, res), res, 2 * k),
        false,
    );
    limbs::mask_top(&mut product, res);
    product
}

/// `(high, low)` halves of a `width`-bit value split at bit `k`.
fn split<T: Word>(src: &[T], width: usize, k: usize) -> (Vec<T>, Vec<T>) {
    let high = limbs::resize(&shift::shr(src, width, k), width - k);
    let low = limbs::resize(src, k);
    (high, low)
}

impl<const W: usize, T: Word> UInteger<W, T> {
    /// Exact product at `R = W + V` bits by Karatsuba's divide and conquer.
    /// Agrees bit for bit with [`UInteger::expanding_mul`].
    pub fn expanding_karatsuba<const V: usize, const R: usize>(
        &self,
        rhs: &UInteger<V, T>,
    ) -> UInteger<R, T> {
        const { assert!(R == W + V, "expanding_karatsuba needs R == W + V") };
        UInteger::from_limbs(product(self.words(), W, rhs.words(), V))
    }
}

/// Karatsuba product of a `wa`-bit and a `wb`-bit value at `wa + wb` bits.
/// Unequal widths are zero-extended to the wider one first.
pub(crate) fn product<T: Word>(a: &[T], wa: usize, b: &[T], wb: usize) -> Vec<T> {
    let width = wa.max(wb);
    let full = karatsuba(&limbs::resize(a, width), &limbs::resize(b, width), width);
    limbs::resize(&full, wa + wb)
}
