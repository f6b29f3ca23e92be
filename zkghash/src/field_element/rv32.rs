//! GHASH multiplication on RV32 using `clmul`/`clmulh` over four 32-bit limbs.
//!
//! Every 32x32 multiplication takes a `clmul`/`clmulh` pair. The schoolbook product needs
//! sixteen pairs; two levels of Karatsuba bring that down to nine.

use super::FieldElement;
use crate::multiplier::{Multiply, Reduction};
use zkemu::rv32::{clmul, clmulh};

/// Low bits of the GHASH polynomial: `x^7 + x^2 + x + 1`.
const POLY_LOW: u32 = 0x87;

/// Unreduced 256-bit product, schoolbook.
#[must_use]
pub fn mul_direct(x: [u32; 4], y: [u32; 4]) -> [u32; 8] {
    let mut z = [0u32; 8];
    for i in 0..4 {
        for j in 0..4 {
            z[i + j] ^= clmul(x[i], y[j]);
            z[i + j + 1] ^= clmulh(x[i], y[j]);
        }
    }
    z
}

/// 64x64 bit product by one Karatsuba step over 32-bit halves.
#[inline]
fn karatsuba64(a: [u32; 2], b: [u32; 2]) -> [u32; 4] {
    let lo = [clmul(a[0], b[0]), clmulh(a[0], b[0])];
    let hi = [clmul(a[1], b[1]), clmulh(a[1], b[1])];
    let (am, bm) = (a[0] ^ a[1], b[0] ^ b[1]);
    let mid = [
        clmul(am, bm) ^ lo[0] ^ hi[0],
        clmulh(am, bm) ^ lo[1] ^ hi[1],
    ];
    [lo[0], lo[1] ^ mid[0], hi[0] ^ mid[1], hi[1]]
}

/// Unreduced 256-bit product, Karatsuba on both the 128-bit and the 64-bit level.
#[must_use]
pub fn mul_karatsuba(x: [u32; 4], y: [u32; 4]) -> [u32; 8] {
    let lo = karatsuba64([x[0], x[1]], [y[0], y[1]]);
    let hi = karatsuba64([x[2], x[3]], [y[2], y[3]]);
    let mut mid = karatsuba64([x[0] ^ x[2], x[1] ^ x[3]], [y[0] ^ y[2], y[1] ^ y[3]]);
    for i in 0..4 {
        mid[i] ^= lo[i] ^ hi[i];
    }

    [
        lo[0],
        lo[1],
        lo[2] ^ mid[0],
        lo[3] ^ mid[1],
        hi[0] ^ mid[2],
        hi[1] ^ mid[3],
        hi[2],
        hi[3],
    ]
}

/// Reduce by folding the four top limbs with shifts, highest limb first so that its spill into
/// limb 4 is folded in turn.
#[must_use]
pub fn reduce_shift(mut z: [u32; 8]) -> [u32; 4] {
    for i in (4..8).rev() {
        let w = z[i];
        z[i - 3] ^= (w >> 31) ^ (w >> 30) ^ (w >> 25);
        z[i - 4] ^= w ^ (w << 1) ^ (w << 2) ^ (w << 7);
    }
    [z[0], z[1], z[2], z[3]]
}

/// Reduce by carry-less multiplying each of the four top limbs with `0x87`.
#[must_use]
pub fn reduce_mulconst(mut z: [u32; 8]) -> [u32; 4] {
    for i in (4..8).rev() {
        let w = z[i];
        z[i - 3] ^= clmulh(w, POLY_LOW);
        z[i - 4] ^= clmul(w, POLY_LOW);
    }
    [z[0], z[1], z[2], z[3]]
}

/// Field multiplication with the selected strategies.
#[inline]
pub(crate) fn mul(a: FieldElement, b: FieldElement, m: Multiply, r: Reduction) -> FieldElement {
    let (x, y) = (a.to_u32x4(), b.to_u32x4());
    let z = match m {
        Multiply::Direct => mul_direct(x, y),
        Multiply::Karatsuba => mul_karatsuba(x, y),
    };
    FieldElement::from_u32x4(match r {
        Reduction::Shift => reduce_shift(z),
        Reduction::MulConst => reduce_mulconst(z),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x127_times_x() {
        let x127 = [0, 0, 0, 1 << 31];
        let x1 = [2, 0, 0, 0];
        for z in [mul_direct(x127, x1), mul_karatsuba(x127, x1)] {
            assert_eq!(z, [0, 0, 0, 0, 1, 0, 0, 0]);
            assert_eq!(reduce_shift(z), [0x87, 0, 0, 0]);
            assert_eq!(reduce_mulconst(z), [0x87, 0, 0, 0]);
        }
    }

    #[test]
    fn agrees_with_rv64_limbs() {
        let x = [0xdead_beef, 0x0123_4567, 0x89ab_cdef, 0xfeed_face];
        let y = [0x1111_2222, 0x3333_4444, 0x5555_6666, 0x7777_8888];
        let join = |v: [u32; 4]| [
            u64::from(v[0]) | (u64::from(v[1]) << 32),
            u64::from(v[2]) | (u64::from(v[3]) << 32),
        ];
        let expected = super::super::rv64::mul_direct(join(x), join(y));
        let z = mul_karatsuba(x, y);
        for i in 0..4 {
            assert_eq!(u64::from(z[2 * i]) | (u64::from(z[2 * i + 1]) << 32), expected[i]);
        }
    }
}
