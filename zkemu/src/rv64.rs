//! RV64 instruction emulation (`XLEN = 64`).
//!
//! Instructions shared with RV32 are the lane-generic definitions instantiated at `u64`.
//! Word-sized instructions (SHA-256, SM3, SM4) operate on the low 32 bits and sign-extend the
//! result, as on hardware.
//!
//! Source: RISC-V Cryptography Extensions Volume I: Scalar & Entropy Source Instructions,
//! Version v1.0.1.

use crate::{
    lane::Lane,
    rv32,
    tables::{AES_INV_SBOX, AES_SBOX, aes_sub_word, fwd_mc_32, inv_mc_32},
};

#[inline]
fn sext(x: u32) -> u64 {
    let ext = if x & 0x8000_0000 != 0 { 0xffff_ffff_0000_0000 } else { 0 };
    ext | u64::from(x)
}

//
// Zbkb
//

/// Rotate left.
#[inline]
pub fn rol(rs1: u64, rs2: u64) -> u64 {
    rs1.rol((rs2 & 63) as u32)
}

/// Rotate right.
#[inline]
pub fn ror(rs1: u64, rs2: u64) -> u64 {
    rs1.ror((rs2 & 63) as u32)
}

/// AND with inverted operand.
#[inline]
pub fn andn(rs1: u64, rs2: u64) -> u64 {
    rs1.andn(rs2)
}

/// OR with inverted operand.
#[inline]
pub fn orn(rs1: u64, rs2: u64) -> u64 {
    rs1.orn(rs2)
}

/// Exclusive NOR.
#[inline]
pub fn xnor(rs1: u64, rs2: u64) -> u64 {
    rs1.xnor(rs2)
}

/// Pack the low words of `rs1` and `rs2`.
#[inline]
pub fn pack(rs1: u64, rs2: u64) -> u64 {
    (rs1 & 0xffff_ffff) | (rs2 << 32)
}

/// Pack the low bytes of `rs1` and `rs2` into the low half-word.
#[inline]
pub fn packh(rs1: u64, rs2: u64) -> u64 {
    (rs1 & 0xff) | ((rs2 & 0xff) << 8)
}

/// Generalized reverse.
#[inline]
pub fn grev(rs1: u64, ctrl: u32) -> u64 {
    rs1.grev(ctrl)
}

/// Reverse the bits in each byte.
#[inline]
pub fn brev8(rs1: u64) -> u64 {
    rs1.brev8()
}

/// Reverse the byte order.
#[inline]
pub fn rev8(rs1: u64) -> u64 {
    rs1.rev8()
}

//
// Zbkc / Zbkx
//

/// Carry-less multiply, low doubleword.
#[inline]
pub fn clmul(rs1: u64, rs2: u64) -> u64 {
    rs1.clmul(rs2)
}

/// Carry-less multiply, high doubleword.
#[inline]
pub fn clmulh(rs1: u64, rs2: u64) -> u64 {
    rs1.clmulh(rs2)
}

/// Nibble-wise lookup of `rs2` indices into the `rs1` table.
#[inline]
pub fn xperm4(rs1: u64, rs2: u64) -> u64 {
    rs1.xperm4(rs2)
}

/// Byte-wise lookup of `rs2` indices into the `rs1` table.
#[inline]
pub fn xperm8(rs1: u64, rs2: u64) -> u64 {
    rs1.xperm8(rs2)
}

//
// Zkne / Zknd: AES
//

#[inline]
fn sub_bytes(sbox: &[u8; 256], src: [u64; 8]) -> u64 {
    let mut x = 0;
    for (i, s) in src.into_iter().enumerate() {
        x |= u64::from(sbox[(s & 0xff) as usize]) << (8 * i);
    }
    x
}

#[inline]
fn mix_halves(x: u64, mc: fn(u32) -> u32) -> u64 {
    u64::from(mc(x as u32)) | (u64::from(mc((x >> 32) as u32)) << 32)
}

/// AES final round encryption: ShiftRows and SubBytes on the half state held in the lower
/// doubleword of the output.
///
/// `rs1` holds columns 0 and 1 of the state, `rs2` columns 2 and 3. Call again with the operands
/// swapped for the upper half.
///
/// Section: 3.9
#[inline]
pub fn aes64es(rs1: u64, rs2: u64) -> u64 {
    sub_bytes(
        &AES_SBOX,
        [
            rs1,
            rs1 >> 40,
            rs2 >> 16,
            rs2 >> 56,
            rs1 >> 32,
            rs2 >> 8,
            rs2 >> 48,
            rs1 >> 24,
        ],
    )
}

/// AES middle round encryption: ShiftRows, SubBytes and MixColumns.
///
/// Section: 3.10
#[inline]
pub fn aes64esm(rs1: u64, rs2: u64) -> u64 {
    mix_halves(aes64es(rs1, rs2), fwd_mc_32)
}

/// AES final round decryption: InvShiftRows and InvSubBytes.
///
/// Section: 3.7
#[inline]
pub fn aes64ds(rs1: u64, rs2: u64) -> u64 {
    sub_bytes(
        &AES_INV_SBOX,
        [
            rs1,
            rs2 >> 40,
            rs2 >> 16,
            rs1 >> 56,
            rs1 >> 32,
            rs1 >> 8,
            rs2 >> 48,
            rs2 >> 24,
        ],
    )
}

/// AES middle round decryption: InvShiftRows, InvSubBytes and InvMixColumns.
///
/// Section: 3.8
#[inline]
pub fn aes64dsm(rs1: u64, rs2: u64) -> u64 {
    aes64im(aes64ds(rs1, rs2))
}

/// InvMixColumns on two columns, used to build the equivalent inverse cipher key schedule.
///
/// Section: 3.11
#[inline]
pub fn aes64im(rs1: u64) -> u64 {
    mix_halves(rs1, inv_mc_32)
}

/// AES round constants.
pub const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// AES key schedule, first step: RotWord, SubWord and round constant on the upper word of `rs1`.
///
/// `rnum` in `0..=9` selects the round constant. `rnum == 10` performs SubWord only (no
/// rotation, no constant), which the AES-256 schedule needs for its odd steps. Values above 10
/// are reserved encodings and behave like 10.
///
/// Section: 3.12
#[inline]
pub fn aes64ks1i(rs1: u64, rnum: u8) -> u64 {
    let mut t = (rs1 >> 32) as u32;
    let mut rc = 0;
    if let Some(&c) = RCON.get(usize::from(rnum)) {
        t = t.rotate_right(8);
        rc = u32::from(c);
    }
    let t = u64::from(aes_sub_word(t) ^ rc);
    t | (t << 32)
}

/// AES key schedule, second step: XOR chain across the two words.
///
/// Section: 3.13
#[inline]
pub fn aes64ks2(rs1: u64, rs2: u64) -> u64 {
    let t = (rs1 >> 32) ^ (rs2 & 0xffff_ffff);
    t ^ (t << 32) ^ (rs2 & 0xffff_ffff_0000_0000)
}

//
// Zknh: SHA-2
//

/// SHA-256 `σ0` on the low word, sign-extended.
#[inline]
pub fn sha256sig0(rs1: u64) -> u64 {
    sext(rv32::sha256sig0(rs1 as u32))
}

/// SHA-256 `σ1` on the low word, sign-extended.
#[inline]
pub fn sha256sig1(rs1: u64) -> u64 {
    sext(rv32::sha256sig1(rs1 as u32))
}

/// SHA-256 `Σ0` on the low word, sign-extended.
#[inline]
pub fn sha256sum0(rs1: u64) -> u64 {
    sext(rv32::sha256sum0(rs1 as u32))
}

/// SHA-256 `Σ1` on the low word, sign-extended.
#[inline]
pub fn sha256sum1(rs1: u64) -> u64 {
    sext(rv32::sha256sum1(rs1 as u32))
}

/// SHA-512 `σ0`.
#[inline]
pub fn sha512sig0(rs1: u64) -> u64 {
    rs1.ror(1) ^ rs1.ror(8) ^ rs1.srl(7)
}

/// SHA-512 `σ1`.
#[inline]
pub fn sha512sig1(rs1: u64) -> u64 {
    rs1.ror(19) ^ rs1.ror(61) ^ rs1.srl(6)
}

/// SHA-512 `Σ0`.
#[inline]
pub fn sha512sum0(rs1: u64) -> u64 {
    rs1.ror(28) ^ rs1.ror(34) ^ rs1.ror(39)
}

/// SHA-512 `Σ1`.
#[inline]
pub fn sha512sum1(rs1: u64) -> u64 {
    rs1.ror(14) ^ rs1.ror(18) ^ rs1.ror(41)
}

//
// Zksed / Zksh
//

/// SM4 round step on the low word, sign-extended.
#[inline]
pub fn sm4ed(rs1: u64, rs2: u64, bs: u8) -> u64 {
    sext(rv32::sm4ed(rs1 as u32, rs2 as u32, bs))
}

/// SM4 key schedule step on the low word, sign-extended.
#[inline]
pub fn sm4ks(rs1: u64, rs2: u64, bs: u8) -> u64 {
    sext(rv32::sm4ks(rs1 as u32, rs2 as u32, bs))
}

/// SM3 `P0` on the low word, sign-extended.
#[inline]
pub fn sm3p0(rs1: u64) -> u64 {
    sext(rv32::sm3p0(rs1 as u32))
}

/// SM3 `P1` on the low word, sign-extended.
#[inline]
pub fn sm3p1(rs1: u64) -> u64 {
    sext(rv32::sm3p1(rs1 as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ks1i_round_ten_skips_rotation() {
        let rs1 = 0x0102_0304_0000_0000;
        let sub = u64::from(aes_sub_word(0x0102_0304));
        assert_eq!(aes64ks1i(rs1, 10), sub | (sub << 32));
        assert_eq!(aes64ks1i(rs1, 12), aes64ks1i(rs1, 10));

        let rot = u64::from(aes_sub_word(0x0102_0304u32.rotate_right(8)) ^ 0x36);
        assert_eq!(aes64ks1i(rs1, 9), rot | (rot << 32));
    }

    #[test]
    fn ks2_xor_chain() {
        let rs1 = 0xaaaa_aaaa_0000_0000;
        let rs2 = 0x2222_2222_1111_1111;
        let t = 0xaaaa_aaaa ^ 0x1111_1111u64;
        assert_eq!(aes64ks2(rs1, rs2), t | ((t ^ 0x2222_2222) << 32));
    }

    #[test]
    fn im_inverts_esm_mix() {
        let x = 0x0123_4567_89ab_cdef;
        assert_eq!(aes64im(mix_halves(x, fwd_mc_32)), x);
    }

    #[test]
    fn es_ds_round_trip() {
        // es on (lo, hi) and (hi, lo) followed by ds the same way restores the state
        let (t0, t1) = (0x0011_2233_4455_6677u64, 0x8899_aabb_ccdd_eeffu64);
        let (u0, u1) = (aes64es(t0, t1), aes64es(t1, t0));
        assert_eq!((aes64ds(u0, u1), aes64ds(u1, u0)), (t0, t1));
    }

    #[test]
    fn word_instructions_sign_extend() {
        assert_eq!(sm3p0(0x8000_0000) >> 32, 0xffff_ffff);
        assert_eq!(sha256sig0(0xffff_ffff_0000_0001), 0x0200_4000);
        assert_eq!(sm4ed(0, 0, 0), sext(rv32::sm4ed(0, 0, 0)));
    }

    #[test]
    fn sha512_functions() {
        assert_eq!(sha512sig0(1), 0x8100_0000_0000_0000);
        assert_eq!(sha512sum0(1), (1u64 << 36) | (1 << 30) | (1 << 25));
    }
}
