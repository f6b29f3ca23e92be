//! SM4 (GB/T 32907-2016) with the `sm4ks`/`sm4ed` instructions.
//!
//! The instructions operate on little-endian words, so the block and the key are loaded
//! little-endian and the `FK`/`CK` constants are stored byte-swapped.

use zkemu::rv32::{sm4ed, sm4ks};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// SM4 block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// SM4 key size in bytes.
pub const KEY_SIZE: usize = 16;

/// SM4 block.
pub type Block = [u8; BLOCK_SIZE];

const ROUNDS: usize = 32;

const FK: [u32; 4] = [
    0xa3b1bac6u32.swap_bytes(),
    0x56aa3350u32.swap_bytes(),
    0x677d9197u32.swap_bytes(),
    0xb27022dcu32.swap_bytes(),
];

/// `CK[i]` byte `j` is `(4i + j) * 7 mod 256`.
const CK: [u32; ROUNDS] = {
    let mut ck = [0u32; ROUNDS];
    let mut i = 0;
    while i < ROUNDS {
        let b = (4 * i * 7) as u8;
        ck[i] = u32::from_le_bytes([
            b,
            b.wrapping_add(7),
            b.wrapping_add(14),
            b.wrapping_add(21),
        ]);
        i += 1;
    }
    ck
};

/// Four chained instructions cover the four S-box bytes of one round.
#[inline(always)]
fn round(f: fn(u32, u32, u8) -> u32, x: u32, t: u32) -> u32 {
    let x = f(x, t, 0);
    let x = f(x, t, 1);
    let x = f(x, t, 2);
    f(x, t, 3)
}

fn load(bytes: &[u8; 16]) -> [u32; 4] {
    let mut w = [0u32; 4];
    for (w, chunk) in w.iter_mut().zip(bytes.chunks_exact(4)) {
        *w = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    w
}

/// Expand `key` into the 32 encryption round keys.
#[must_use]
pub fn expand_key(key: &[u8; KEY_SIZE]) -> [u32; ROUNDS] {
    let mut k = load(key);
    for (k, fk) in k.iter_mut().zip(FK) {
        *k ^= fk;
    }

    let mut rk = [0u32; ROUNDS];
    for (i, ck) in CK.iter().enumerate() {
        let next = round(sm4ks, k[0], k[1] ^ k[2] ^ k[3] ^ ck);
        k = [k[1], k[2], k[3], next];
        rk[i] = next;
    }
    rk
}

/// The SM4 round sequence. Decryption is encryption with the round keys reversed.
#[must_use]
pub fn crypt_block(rk: &[u32; ROUNDS], block: &Block) -> Block {
    let mut x = load(block);
    for &k in rk {
        let next = round(sm4ed, x[0], x[1] ^ x[2] ^ x[3] ^ k);
        x = [x[1], x[2], x[3], next];
    }

    let mut out = [0u8; BLOCK_SIZE];
    for (chunk, w) in out.chunks_exact_mut(4).zip(x.iter().rev()) {
        chunk.copy_from_slice(&w.to_le_bytes());
    }
    out
}

/// SM4 with expanded encryption and decryption round keys.
#[derive(Clone)]
pub struct Sm4 {
    enc: [u32; ROUNDS],
    dec: [u32; ROUNDS],
}

impl Sm4 {
    /// Expand `key`.
    #[must_use]
    pub fn new(key: &[u8; KEY_SIZE]) -> Self {
        let enc = expand_key(key);
        let mut dec = enc;
        dec.reverse();
        Self { enc, dec }
    }

    /// Encrypt one block.
    #[must_use]
    pub fn encrypt_block(&self, block: &Block) -> Block {
        crypt_block(&self.enc, block)
    }

    /// Decrypt one block.
    #[must_use]
    pub fn decrypt_block(&self, block: &Block) -> Block {
        crypt_block(&self.dec, block)
    }
}

impl core::fmt::Debug for Sm4 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sm4").finish_non_exhaustive()
    }
}

#[cfg(feature = "zeroize")]
impl Drop for Sm4 {
    fn drop(&mut self) {
        self.enc.zeroize();
        self.dec.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn ck_bytes() {
        assert_eq!(CK[0].to_le_bytes(), hex!("00070e15"));
        assert_eq!(CK[1].to_le_bytes(), hex!("1c232a31"));
        assert_eq!(CK[31].to_le_bytes(), hex!("646b7279"));
    }

    #[test]
    fn gbt32907_example_1() {
        let key = hex!("0123456789abcdeffedcba9876543210");
        let cipher = Sm4::new(&key);
        let ct = cipher.encrypt_block(&key);
        assert_eq!(ct, hex!("681edf34d206965e86b3e94f536e4246"));
        assert_eq!(cipher.decrypt_block(&ct), key);
    }
}
