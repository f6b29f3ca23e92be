//! PRESENT-80/128 (CHES 2007, ISO/IEC 29192-2:2019).
//!
//! Round keys are 64-bit words, 31 rounds plus a final whitening key. Blocks are loaded
//! big-endian so that bit 63 of the state is the leftmost bit of the block.
//!
//! Three round functions compute the same permutation:
//! - [`PresentImpl::Rv64`] applies the sLayer as one `xperm4` lookup and builds the pLayer from
//!   four masked bit spreads followed by an `xperm4` nibble transpose,
//! - [`PresentImpl::Rv32`] does the same on the two 32-bit halves, splitting each 64-bit
//!   `xperm4` into two narrow lookups,
//! - [`PresentImpl::Reference`] walks the S-box table and the bit permutation one nibble and one
//!   bit at a time.

use zkemu::{LaneWidth, rv32, rv64};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// PRESENT block size in bytes.
pub const BLOCK_SIZE: usize = 8;

/// Number of full rounds.
pub const ROUNDS: usize = 31;

/// PRESENT block.
pub type Block = [u8; BLOCK_SIZE];

/// Expanded key: one whitening key per round and one after the last.
pub type RoundKeys = [u64; ROUNDS + 1];

/// The 4-bit S-box as an `xperm4` table.
const SBOX64_ENC: u64 = 0x2174_8fe3_da09_b65c;

/// The inverse S-box as an `xperm4` table.
const SBOX64_DEC: u64 = 0xa970_364b_d21c_8fe5;

/// Transposes the 4x4 matrix of nibbles in each 16-bit quarter. It is its own inverse.
const P64_NYBBLE: u64 = 0xfb73_ea62_d951_c840;

const SBOX: [u8; 16] = [
    0xc, 0x5, 0x6, 0xb, 0x9, 0x0, 0xa, 0xd, 0x3, 0xe, 0xf, 0x8, 0x4, 0x7, 0x1, 0x2,
];

const SBOX_INV: [u8; 16] = {
    let mut inv = [0u8; 16];
    let mut i = 0;
    while i < 16 {
        inv[SBOX[i] as usize] = i as u8;
        i += 1;
    }
    inv
};

/// Bit `i` of the state moves to bit `PPERM[i]`.
const PPERM: [u8; 64] = {
    let mut p = [0u8; 64];
    let mut i = 0;
    while i < 64 {
        p[i] = (16 * (i % 4) + i / 4) as u8;
        i += 1;
    }
    p
};

//
// Key schedules
//

fn sbox_nibble(x: u64) -> u64 {
    (SBOX64_ENC >> ((x & 0xf) << 2)) & 0xf
}

/// PRESENT-80 key schedule with the S-box read from the packed `xperm4` table.
///
/// `k1` holds key bits 79..16 and `k0` bits 15..0. The round counter lands on bits 19..15.
#[must_use]
pub fn present80_key(key: &[u8; 10]) -> RoundKeys {
    present80_schedule(key, sbox_nibble)
}

/// PRESENT-80 key schedule with the S-box read from the 16-entry table.
#[must_use]
pub fn present80_key_table(key: &[u8; 10]) -> RoundKeys {
    present80_schedule(key, |x| u64::from(SBOX[(x & 0xf) as usize]))
}

fn present80_schedule(key: &[u8; 10], sbox: impl Fn(u64) -> u64) -> RoundKeys {
    let mut k1 = u64::from_be_bytes([
        key[0], key[1], key[2], key[3], key[4], key[5], key[6], key[7],
    ]);
    let mut k0 = u64::from(u16::from_be_bytes([key[8], key[9]]));

    let mut rk = [0u64; ROUNDS + 1];
    rk[0] = k1;
    for (i, slot) in (1u64..).zip(rk.iter_mut().skip(1)) {
        // rotate the 80-bit register left by 61
        let t = (k1 << 61) | (k0 << 45) | (k1 >> 19);
        k0 = k1 >> 3;

        k1 = (t & !(0xf << 60)) | (sbox(t >> 60) << 60);

        k1 ^= i >> 1;
        k0 ^= i << 15;
        k0 &= 0xffff;

        *slot = k1;
    }
    rk
}

/// PRESENT-128 key schedule. Two S-box lookups per round, counter on bits 66..62.
#[must_use]
pub fn present128_key(key: &[u8; 16]) -> RoundKeys {
    let mut k1 = u64::from_be_bytes([
        key[0], key[1], key[2], key[3], key[4], key[5], key[6], key[7],
    ]);
    let mut k0 = u64::from_be_bytes([
        key[8], key[9], key[10], key[11], key[12], key[13], key[14], key[15],
    ]);

    let mut rk = [0u64; ROUNDS + 1];
    rk[0] = k1;
    for (i, slot) in (1u64..).zip(rk.iter_mut().skip(1)) {
        let t = (k1 << 61) | (k0 >> 3);
        k0 = (k0 << 61) | (k1 >> 3);

        k1 = (t & !(0xff << 56)) | (sbox_nibble(t >> 60) << 60) | (sbox_nibble(t >> 56) << 56);

        k1 ^= i >> 2;
        k0 ^= i << 62;

        *slot = k1;
    }
    rk
}

//
// RV64
//

fn p_spread64(x: u64) -> u64 {
    let mut y = x & 0x1111_1111_1111_1111;
    y |= y >> 6;
    y |= y >> 3;
    let mut z = y & 0x000f_000f_000f_000f;

    y = x & 0x2222_2222_2222_2222;
    y |= y >> 6;
    y |= y << 3;
    z |= y & 0x00f0_00f0_00f0_00f0;

    y = x & 0x4444_4444_4444_4444;
    y |= y << 6;
    y |= y >> 3;
    z |= y & 0x0f00_0f00_0f00_0f00;

    y = x & 0x8888_8888_8888_8888;
    y |= y << 6;
    y |= y << 3;
    z | (y & 0xf000_f000_f000_f000)
}

fn p_gather64(z: u64) -> u64 {
    let mut y = z & 0x000f_000f_000f_000f;
    y |= y << 3;
    y |= y << 6;
    let mut x = y & 0x1111_1111_1111_1111;

    y = z & 0x00f0_00f0_00f0_00f0;
    y |= y >> 3;
    y |= y << 6;
    x |= y & 0x2222_2222_2222_2222;

    y = z & 0x0f00_0f00_0f00_0f00;
    y |= y << 3;
    y |= y >> 6;
    x |= y & 0x4444_4444_4444_4444;

    y = z & 0xf000_f000_f000_f000;
    y |= y >> 3;
    y |= y >> 6;
    x | (y & 0x8888_8888_8888_8888)
}

/// Encrypt with 64-bit lanes.
#[must_use]
pub fn encrypt_rv64(mut x: u64, rk: &RoundKeys) -> u64 {
    for &k in &rk[..ROUNDS] {
        x ^= k;
        x = rv64::xperm4(SBOX64_ENC, x);
        x = rv64::xperm4(p_spread64(x), P64_NYBBLE);
    }
    x ^ rk[ROUNDS]
}

/// Decrypt with 64-bit lanes.
#[must_use]
pub fn decrypt_rv64(mut x: u64, rk: &RoundKeys) -> u64 {
    for &k in rk[1..].iter().rev() {
        x ^= k;
        x = p_gather64(rv64::xperm4(x, P64_NYBBLE));
        x = rv64::xperm4(SBOX64_DEC, x);
    }
    x ^ rk[0]
}

//
// RV32
//

fn p_spread32(x: u32) -> u32 {
    let mut y = x & 0x1111_1111;
    y |= y >> 6;
    y |= y >> 3;
    let mut z = y & 0x000f_000f;

    y = x & 0x2222_2222;
    y |= y >> 6;
    y |= y << 3;
    z |= y & 0x00f0_00f0;

    y = x & 0x4444_4444;
    y |= y << 6;
    y |= y >> 3;
    z |= y & 0x0f00_0f00;

    y = x & 0x8888_8888;
    y |= y << 6;
    y |= y << 3;
    z | (y & 0xf000_f000)
}

fn p_gather32(z: u32) -> u32 {
    let mut y = z & 0x000f_000f;
    y |= y << 3;
    y |= y << 6;
    let mut x = y & 0x1111_1111;

    y = z & 0x00f0_00f0;
    y |= y >> 3;
    y |= y << 6;
    x |= y & 0x2222_2222;

    y = z & 0x0f00_0f00;
    y |= y << 3;
    y |= y >> 6;
    x |= y & 0x4444_4444;

    y = z & 0xf000_f000;
    y |= y >> 3;
    y |= y >> 6;
    x | (y & 0x8888_8888)
}

/// Look up every nibble of `x` in a 16-entry 64-bit table.
///
/// Indices 8..15 fall outside the first narrow lookup and inside the second once their top bit
/// is flipped.
fn xperm4_table64(table: u64, x: u32) -> u32 {
    rv32::xperm4(table as u32, x) | rv32::xperm4((table >> 32) as u32, x ^ 0x8888_8888)
}

/// Nibble permutation of the 64-bit value `x1:x0` by the narrow index vector `p`.
fn xperm4_split(x0: u32, x1: u32, p: u32) -> u32 {
    rv32::xperm4(x0, p) | rv32::xperm4(x1, p ^ 0x8888_8888)
}

fn split(x: u64) -> (u32, u32) {
    (x as u32, (x >> 32) as u32)
}

/// Encrypt with 32-bit lanes.
#[must_use]
pub fn encrypt_rv32(x: u64, rk: &RoundKeys) -> u64 {
    let (mut x0, mut x1) = split(x);
    let (p0, p1) = split(P64_NYBBLE);

    for &k in &rk[..ROUNDS] {
        let (k0, k1) = split(k);
        x0 = xperm4_table64(SBOX64_ENC, x0 ^ k0);
        x1 = xperm4_table64(SBOX64_ENC, x1 ^ k1);

        let z0 = p_spread32(x0);
        let z1 = p_spread32(x1);
        x0 = xperm4_split(z0, z1, p0);
        x1 = xperm4_split(z0, z1, p1);
    }

    let (k0, k1) = split(rk[ROUNDS]);
    u64::from(x0 ^ k0) | (u64::from(x1 ^ k1) << 32)
}

/// Decrypt with 32-bit lanes.
#[must_use]
pub fn decrypt_rv32(x: u64, rk: &RoundKeys) -> u64 {
    let (mut x0, mut x1) = split(x);
    let (p0, p1) = split(P64_NYBBLE);

    for &k in rk[1..].iter().rev() {
        let (k0, k1) = split(k);
        x0 ^= k0;
        x1 ^= k1;

        let z0 = xperm4_split(x0, x1, p0);
        let z1 = xperm4_split(x0, x1, p1);
        x0 = xperm4_table64(SBOX64_DEC, p_gather32(z0));
        x1 = xperm4_table64(SBOX64_DEC, p_gather32(z1));
    }

    let (k0, k1) = split(rk[0]);
    u64::from(x0 ^ k0) | (u64::from(x1 ^ k1) << 32)
}

//
// Reference
//

fn s_layer(x: u64, sbox: &[u8; 16]) -> u64 {
    (0..64)
        .step_by(4)
        .fold(0, |y, i| y | (u64::from(sbox[((x >> i) & 0xf) as usize]) << i))
}

fn p_layer(x: u64) -> u64 {
    PPERM
        .iter()
        .enumerate()
        .fold(0, |y, (i, &p)| y | (((x >> i) & 1) << p))
}

fn p_layer_inv(x: u64) -> u64 {
    PPERM
        .iter()
        .enumerate()
        .fold(0, |y, (i, &p)| y | (((x >> p) & 1) << i))
}

/// Encrypt with the S-box table and bit permutation.
#[must_use]
pub fn encrypt_reference(mut x: u64, rk: &RoundKeys) -> u64 {
    for &k in &rk[..ROUNDS] {
        x = p_layer(s_layer(x ^ k, &SBOX));
    }
    x ^ rk[ROUNDS]
}

/// Decrypt with the inverse S-box table and inverse bit permutation.
#[must_use]
pub fn decrypt_reference(mut x: u64, rk: &RoundKeys) -> u64 {
    for &k in rk[1..].iter().rev() {
        x = s_layer(p_layer_inv(x ^ k), &SBOX_INV);
    }
    x ^ rk[0]
}

/// PRESENT round function variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PresentImpl {
    /// [`encrypt_rv32`] / [`decrypt_rv32`].
    Rv32,
    /// [`encrypt_rv64`] / [`decrypt_rv64`].
    Rv64,
    /// [`encrypt_reference`] / [`decrypt_reference`].
    Reference,
}

impl PresentImpl {
    /// Every variant.
    pub const ALL: [PresentImpl; 3] = [
        PresentImpl::Rv32,
        PresentImpl::Rv64,
        PresentImpl::Reference,
    ];

    /// Encrypt the 64-bit block `x`.
    #[inline]
    #[must_use]
    pub fn encrypt(self, x: u64, rk: &RoundKeys) -> u64 {
        match self {
            PresentImpl::Rv32 => encrypt_rv32(x, rk),
            PresentImpl::Rv64 => encrypt_rv64(x, rk),
            PresentImpl::Reference => encrypt_reference(x, rk),
        }
    }

    /// Decrypt the 64-bit block `x`.
    #[inline]
    #[must_use]
    pub fn decrypt(self, x: u64, rk: &RoundKeys) -> u64 {
        match self {
            PresentImpl::Rv32 => decrypt_rv32(x, rk),
            PresentImpl::Rv64 => decrypt_rv64(x, rk),
            PresentImpl::Reference => decrypt_reference(x, rk),
        }
    }
}

impl Default for PresentImpl {
    fn default() -> Self {
        match LaneWidth::default() {
            LaneWidth::W32 => PresentImpl::Rv32,
            LaneWidth::W64 => PresentImpl::Rv64,
        }
    }
}

/// PRESENT with an expanded key and a selected round function.
#[derive(Clone)]
pub struct Present {
    rk: RoundKeys,
    imp: PresentImpl,
}

impl Present {
    /// Expand an 80-bit key.
    #[must_use]
    pub fn new80(key: &[u8; 10]) -> Self {
        Self::from_round_keys(present80_key(key))
    }

    /// Expand a 128-bit key.
    #[must_use]
    pub fn new128(key: &[u8; 16]) -> Self {
        Self::from_round_keys(present128_key(key))
    }

    /// Use an already expanded key.
    #[must_use]
    pub fn from_round_keys(rk: RoundKeys) -> Self {
        Self {
            rk,
            imp: PresentImpl::default(),
        }
    }

    /// Select the round function.
    #[must_use]
    pub fn with_impl(mut self, imp: PresentImpl) -> Self {
        self.imp = imp;
        self
    }

    /// Selected round function.
    #[must_use]
    pub fn imp(&self) -> PresentImpl {
        self.imp
    }

    /// Encrypt one block.
    #[must_use]
    pub fn encrypt_block(&self, block: &Block) -> Block {
        self.imp
            .encrypt(u64::from_be_bytes(*block), &self.rk)
            .to_be_bytes()
    }

    /// Decrypt one block.
    #[must_use]
    pub fn decrypt_block(&self, block: &Block) -> Block {
        self.imp
            .decrypt(u64::from_be_bytes(*block), &self.rk)
            .to_be_bytes()
    }
}

impl core::fmt::Debug for Present {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Present")
            .field("imp", &self.imp)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "zeroize")]
impl Drop for Present {
    fn drop(&mut self) {
        self.rk.zeroize();
    }
}
