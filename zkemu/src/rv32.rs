//! RV32 instruction emulation (`XLEN = 32`).
//!
//! Function names follow the instruction mnemonics. Register operands are `u32`, immediate
//! operands (`bs`, `shamt`) are masked the way the encoding would truncate them.
//!
//! Source: RISC-V Cryptography Extensions Volume I: Scalar & Entropy Source Instructions,
//! Version v1.0.1.

use crate::{
    lane::Lane,
    tables::{AES_INV_SBOX, AES_SBOX, SM4_SBOX, fwd_mc_8, inv_mc_8},
};

//
// Zbkb: bit-manipulation for cryptography
//

/// Rotate left.
#[inline]
pub fn rol(rs1: u32, rs2: u32) -> u32 {
    rs1.rol(rs2)
}

/// Rotate right.
#[inline]
pub fn ror(rs1: u32, rs2: u32) -> u32 {
    rs1.ror(rs2)
}

/// AND with inverted operand.
#[inline]
pub fn andn(rs1: u32, rs2: u32) -> u32 {
    rs1.andn(rs2)
}

/// OR with inverted operand.
#[inline]
pub fn orn(rs1: u32, rs2: u32) -> u32 {
    rs1.orn(rs2)
}

/// Exclusive NOR.
#[inline]
pub fn xnor(rs1: u32, rs2: u32) -> u32 {
    rs1.xnor(rs2)
}

/// Pack the low halves of `rs1` and `rs2`.
#[inline]
pub fn pack(rs1: u32, rs2: u32) -> u32 {
    (rs1 & 0xffff) | (rs2 << 16)
}

/// Pack the low bytes of `rs1` and `rs2` into the low half.
#[inline]
pub fn packh(rs1: u32, rs2: u32) -> u32 {
    (rs1 & 0xff) | ((rs2 & 0xff) << 8)
}

/// Generalized reverse. `brev8` and `rev8` are `grev` with fixed controls.
#[inline]
pub fn grev(rs1: u32, ctrl: u32) -> u32 {
    rs1.grev(ctrl)
}

/// Reverse the bits in each byte.
///
/// Section: 3.13
#[inline]
pub fn brev8(rs1: u32) -> u32 {
    rs1.brev8()
}

/// Reverse the byte order.
///
/// Section: 3.35
#[inline]
pub fn rev8(rs1: u32) -> u32 {
    rs1.rev8()
}

#[inline]
fn shuffle_stage(src: u32, maskl: u32, maskr: u32, n: u32) -> u32 {
    let x = src & !(maskl | maskr);
    x | ((src << n) & maskl) | ((src >> n) & maskr)
}

const SHUFFLE_STAGES: [(u32, u32, u32); 4] = [
    (0x00ff_0000, 0x0000_ff00, 8),
    (0x0f00_0f00, 0x00f0_00f0, 4),
    (0x3030_3030, 0x0c0c_0c0c, 2),
    (0x4444_4444, 0x2222_2222, 1),
];

/// Generalized shuffle. Bit `3 - k` of `ctrl` enables the stage swapping `2^(3-k)`-bit groups.
pub fn shfl(rs1: u32, ctrl: u32) -> u32 {
    let mut x = rs1;
    for (k, &(maskl, maskr, n)) in SHUFFLE_STAGES.iter().enumerate() {
        if ctrl & (8 >> k) != 0 {
            x = shuffle_stage(x, maskl, maskr, n);
        }
    }
    x
}

/// Generalized unshuffle, the inverse of [`shfl`] for the same control.
pub fn unshfl(rs1: u32, ctrl: u32) -> u32 {
    let mut x = rs1;
    for (k, &(maskl, maskr, n)) in SHUFFLE_STAGES.iter().enumerate().rev() {
        if ctrl & (8 >> k) != 0 {
            x = shuffle_stage(x, maskl, maskr, n);
        }
    }
    x
}

/// Interleave the low half (even bit positions) with the high half (odd bit positions).
///
/// Section: 3.49
#[inline]
pub fn zip(rs1: u32) -> u32 {
    shfl(rs1, 0xf)
}

/// Gather even bits into the low half and odd bits into the high half.
///
/// Section: 3.45
#[inline]
pub fn unzip(rs1: u32) -> u32 {
    unshfl(rs1, 0xf)
}

//
// Zbkc: carry-less multiply
//

/// Carry-less multiply, low word.
///
/// Section: 3.19
#[inline]
pub fn clmul(rs1: u32, rs2: u32) -> u32 {
    rs1.clmul(rs2)
}

/// Carry-less multiply, high word.
///
/// Section: 3.20
#[inline]
pub fn clmulh(rs1: u32, rs2: u32) -> u32 {
    rs1.clmulh(rs2)
}

//
// Zbkx: crossbar permutations
//

/// Nibble-wise lookup of `rs2` indices into the `rs1` table.
///
/// Section: 3.46
#[inline]
pub fn xperm4(rs1: u32, rs2: u32) -> u32 {
    rs1.xperm4(rs2)
}

/// Byte-wise lookup of `rs2` indices into the `rs1` table.
///
/// Section: 3.47
#[inline]
pub fn xperm8(rs1: u32, rs2: u32) -> u32 {
    rs1.xperm8(rs2)
}

//
// Zkne / Zknd: AES
//

#[inline]
fn byte_select(rs2: u32, bs: u8) -> (u32, u32) {
    let shamt = u32::from(bs & 3) << 3;
    (shamt, (rs2 >> shamt) & 0xff)
}

/// AES final round encryption: SubBytes on byte `bs` of `rs2`, XORed into `rs1` in place.
///
/// Section: 3.3
#[inline]
pub fn aes32esi(rs1: u32, rs2: u32, bs: u8) -> u32 {
    let (shamt, x) = byte_select(rs2, bs);
    rs1 ^ u32::from(AES_SBOX[x as usize]).rotate_left(shamt)
}

/// AES middle round encryption: SubBytes and one MixColumns column contribution.
///
/// Section: 3.4
#[inline]
pub fn aes32esmi(rs1: u32, rs2: u32, bs: u8) -> u32 {
    let (shamt, x) = byte_select(rs2, bs);
    rs1 ^ fwd_mc_8(u32::from(AES_SBOX[x as usize])).rotate_left(shamt)
}

/// AES final round decryption: InvSubBytes on byte `bs` of `rs2`.
///
/// Section: 3.1
#[inline]
pub fn aes32dsi(rs1: u32, rs2: u32, bs: u8) -> u32 {
    let (shamt, x) = byte_select(rs2, bs);
    rs1 ^ u32::from(AES_INV_SBOX[x as usize]).rotate_left(shamt)
}

/// AES middle round decryption: InvSubBytes and one InvMixColumns column contribution.
///
/// Section: 3.2
#[inline]
pub fn aes32dsmi(rs1: u32, rs2: u32, bs: u8) -> u32 {
    let (shamt, x) = byte_select(rs2, bs);
    rs1 ^ inv_mc_8(u32::from(AES_INV_SBOX[x as usize])).rotate_left(shamt)
}

//
// Zknh: SHA-2
//

/// SHA-256 `σ0`.
#[inline]
pub fn sha256sig0(rs1: u32) -> u32 {
    rs1.ror(7) ^ rs1.ror(18) ^ rs1.srl(3)
}

/// SHA-256 `σ1`.
#[inline]
pub fn sha256sig1(rs1: u32) -> u32 {
    rs1.ror(17) ^ rs1.ror(19) ^ rs1.srl(10)
}

/// SHA-256 `Σ0`.
#[inline]
pub fn sha256sum0(rs1: u32) -> u32 {
    rs1.ror(2) ^ rs1.ror(13) ^ rs1.ror(22)
}

/// SHA-256 `Σ1`.
#[inline]
pub fn sha256sum1(rs1: u32) -> u32 {
    rs1.ror(6) ^ rs1.ror(11) ^ rs1.ror(25)
}

/// SHA-512 `σ0`, high word. `rs1` holds the high and `rs2` the low word of the operand.
#[inline]
pub fn sha512sig0h(rs1: u32, rs2: u32) -> u32 {
    rs1.srl(1) ^ rs1.srl(7) ^ rs1.srl(8) ^ rs2.sll(31) ^ rs2.sll(24)
}

/// SHA-512 `σ0`, low word. `rs1` holds the low and `rs2` the high word of the operand.
#[inline]
pub fn sha512sig0l(rs1: u32, rs2: u32) -> u32 {
    rs1.srl(1) ^ rs1.srl(7) ^ rs1.srl(8) ^ rs2.sll(31) ^ rs2.sll(25) ^ rs2.sll(24)
}

/// SHA-512 `σ1`, high word.
#[inline]
pub fn sha512sig1h(rs1: u32, rs2: u32) -> u32 {
    rs1.sll(3) ^ rs1.srl(6) ^ rs1.srl(19) ^ rs2.srl(29) ^ rs2.sll(13)
}

/// SHA-512 `σ1`, low word.
#[inline]
pub fn sha512sig1l(rs1: u32, rs2: u32) -> u32 {
    rs1.sll(3) ^ rs1.srl(6) ^ rs1.srl(19) ^ rs2.srl(29) ^ rs2.sll(26) ^ rs2.sll(13)
}

/// SHA-512 `Σ0`, one word of the result. Called with `(lo, hi)` for the low word and
/// `(hi, lo)` for the high word.
#[inline]
pub fn sha512sum0r(rs1: u32, rs2: u32) -> u32 {
    rs1.sll(25) ^ rs1.sll(30) ^ rs1.srl(28) ^ rs2.srl(7) ^ rs2.srl(2) ^ rs2.sll(4)
}

/// SHA-512 `Σ1`, one word of the result.
#[inline]
pub fn sha512sum1r(rs1: u32, rs2: u32) -> u32 {
    rs1.sll(23) ^ rs1.srl(14) ^ rs1.srl(18) ^ rs2.srl(9) ^ rs2.sll(18) ^ rs2.sll(14)
}

//
// Zksed / Zksh: ShangMi
//

/// SM4 round: S-box on byte `bs` of `rs2`, linear layer `L`, XORed into `rs1`.
///
/// Words are in the little-endian byte order of the hart, so `L` appears with its rotations
/// mirrored.
#[inline]
pub fn sm4ed(rs1: u32, rs2: u32, bs: u8) -> u32 {
    let (shamt, x) = byte_select(rs2, bs);
    let x = u32::from(SM4_SBOX[x as usize]);
    let x = x ^ (x << 8) ^ (x << 2) ^ (x << 18) ^ ((x & 0x3f) << 26) ^ ((x & 0xc0) << 10);
    rs1 ^ x.rotate_left(shamt)
}

/// SM4 key schedule round: S-box on byte `bs` of `rs2`, key linear layer `L'`, XORed into
/// `rs1`.
#[inline]
pub fn sm4ks(rs1: u32, rs2: u32, bs: u8) -> u32 {
    let (shamt, x) = byte_select(rs2, bs);
    let x = u32::from(SM4_SBOX[x as usize]);
    let x = x ^ ((x & 0x07) << 29) ^ ((x & 0xfe) << 7) ^ ((x & 1) << 23) ^ ((x & 0xf8) << 13);
    rs1 ^ x.rotate_left(shamt)
}

/// SM3 permutation `P0`.
#[inline]
pub fn sm3p0(rs1: u32) -> u32 {
    rs1 ^ rs1.rol(9) ^ rs1.rol(17)
}

/// SM3 permutation `P1`.
#[inline]
pub fn sm3p1(rs1: u32) -> u32 {
    rs1 ^ rs1.rol(15) ^ rs1.rol(23)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{aes_sub_word, fwd_mc_32};

    #[test]
    fn zip_known_answer() {
        // low half -> even bits, high half -> odd bits
        assert_eq!(zip(0x0000_ffff), 0x5555_5555);
        assert_eq!(zip(0xffff_0000), 0xaaaa_aaaa);
        assert_eq!(unzip(0x5555_5555), 0x0000_ffff);
        assert_eq!(zip(0x0000_0003), 0x0000_0005);
    }

    #[test]
    fn aes32_chains_match_tables() {
        let x = 0x0011_2233;
        let mut sub = 0;
        let mut mix = 0;
        for bs in 0..4 {
            sub = aes32esi(sub, x, bs);
            mix = aes32esmi(mix, x, bs);
        }
        assert_eq!(sub, aes_sub_word(x));
        assert_eq!(mix, fwd_mc_32(aes_sub_word(x)));

        let mut inv = 0;
        for bs in 0..4 {
            inv = aes32dsi(inv, sub, bs);
        }
        assert_eq!(inv, x);
    }

    #[test]
    fn byte_select_wraps() {
        assert_eq!(aes32esi(0, 0x00ab_0000, 6), aes32esi(0, 0x00ab_0000, 2));
        assert_eq!(sm4ed(1, 2, 4), sm4ed(1, 2, 0));
    }

    #[test]
    fn sha256_functions() {
        assert_eq!(sha256sig0(1), 0x0200_4000);
        assert_eq!(sha256sum1(1), 0x0420_0080);
    }

    #[test]
    fn sm3_permutations() {
        assert_eq!(sm3p0(1), 0x0002_0201);
        assert_eq!(sm3p1(1), 0x0080_8001);
    }
}
