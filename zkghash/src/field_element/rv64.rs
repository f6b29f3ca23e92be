//! GHASH multiplication on RV64 using `clmul`/`clmulh` over two 64-bit limbs.
//!
//! The product of two 128-bit elements is held as four limbs `[z0, z1, z2, z3]`, least
//! significant first, and is folded back to two limbs with either of the reductions below.

use super::FieldElement;
use crate::multiplier::{Multiply, Reduction};
use zkemu::rv64::{clmul, clmulh};

/// Low bits of the GHASH polynomial: `x^7 + x^2 + x + 1`.
const POLY_LOW: u64 = 0x87;

/// Unreduced 256-bit product computed with four 64x64 carry-less multiplications.
#[inline]
#[must_use]
pub fn mul_direct(x: [u64; 2], y: [u64; 2]) -> [u64; 4] {
    let [x0, x1] = x;
    let [y0, y1] = y;

    let z3 = clmulh(x1, y1);
    let mut z2 = clmul(x1, y1);

    let mut z1 = clmul(x0, y1);
    z2 ^= clmulh(x0, y1);

    z2 ^= clmulh(x1, y0);
    z1 ^= clmul(x1, y0);

    z1 ^= clmulh(x0, y0);
    let z0 = clmul(x0, y0);

    [z0, z1, z2, z3]
}

/// Unreduced 256-bit product computed with a single Karatsuba step, i.e. three 64x64 carry-less
/// multiplications.
#[inline]
#[must_use]
pub fn mul_karatsuba(x: [u64; 2], y: [u64; 2]) -> [u64; 4] {
    let [x0, x1] = x;
    let [y0, y1] = y;

    let z3 = clmulh(x1, y1);
    let z2 = clmul(x1, y1);
    let z1 = clmulh(x0, y0);
    let z0 = clmul(x0, y0);

    // (x0 + x1)(y0 + y1) - x0 y0 - x1 y1
    let xm = x0 ^ x1;
    let ym = y0 ^ y1;
    let m1 = clmulh(xm, ym) ^ z1 ^ z3;
    let m0 = clmul(xm, ym) ^ z0 ^ z2;

    [z0, z1 ^ m0, z2 ^ m1, z3]
}

/// Reduce modulo `x^128 + x^7 + x^2 + x + 1` by folding the top limbs with shifts.
#[inline]
#[must_use]
pub fn reduce_shift(z: [u64; 4]) -> [u64; 2] {
    let [mut z0, mut z1, mut z2, z3] = z;

    z2 ^= (z3 >> 63) ^ (z3 >> 62) ^ (z3 >> 57);
    z1 ^= z3 ^ (z3 << 1) ^ (z3 << 2) ^ (z3 << 7);

    z1 ^= (z2 >> 63) ^ (z2 >> 62) ^ (z2 >> 57);
    z0 ^= z2 ^ (z2 << 1) ^ (z2 << 2) ^ (z2 << 7);

    [z0, z1]
}

/// Reduce modulo `x^128 + x^7 + x^2 + x + 1` by carry-less multiplying the top limbs with `0x87`.
#[inline]
#[must_use]
pub fn reduce_mulconst(z: [u64; 4]) -> [u64; 2] {
    let [mut z0, mut z1, mut z2, z3] = z;

    z2 ^= clmulh(z3, POLY_LOW);
    z1 ^= clmul(z3, POLY_LOW);

    z1 ^= clmulh(z2, POLY_LOW);
    z0 ^= clmul(z2, POLY_LOW);

    [z0, z1]
}

/// Field multiplication with the selected strategies.
#[inline]
pub(crate) fn mul(a: FieldElement, b: FieldElement, m: Multiply, r: Reduction) -> FieldElement {
    let (x, y) = (a.to_u64x2(), b.to_u64x2());
    let z = match m {
        Multiply::Direct => mul_direct(x, y),
        Multiply::Karatsuba => mul_karatsuba(x, y),
    };
    FieldElement::from_u64x2(match r {
        Reduction::Shift => reduce_shift(z),
        Reduction::MulConst => reduce_mulconst(z),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x127_times_x() {
        // x^127 * x = x^128 = x^7 + x^2 + x + 1
        let x127 = [0, 1 << 63];
        let x1 = [2, 0];
        for z in [mul_direct(x127, x1), mul_karatsuba(x127, x1)] {
            assert_eq!(z, [0, 0, 1, 0]);
            assert_eq!(reduce_shift(z), [0x87, 0]);
            assert_eq!(reduce_mulconst(z), [0x87, 0]);
        }
    }

    #[test]
    fn top_limb_folds_twice() {
        // x^255 = x^127 * x^128 folds through z2 back into z1 and z0
        let z = [0, 0, 0, 1 << 63];
        assert_eq!(reduce_shift(z), reduce_mulconst(z));
    }
}
