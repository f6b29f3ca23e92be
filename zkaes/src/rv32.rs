//! AES on RV32 with the `aes32*` instructions.
//!
//! Each output column of a round is four chained `aes32esmi` (or `aes32dsmi`) steps, one per
//! input byte, starting from the round key word. The final round uses the non-mixing variants.

use crate::{
    Block,
    schedule::{AesKey, RoundKeys},
};
use zkemu::{
    Block128,
    rv32::{aes32dsi, aes32dsmi, aes32esi, aes32esmi},
};

/// AES round constants as they enter the low byte of a little-endian word.
const RCON: [u32; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

type Step = fn(u32, u32, u8) -> u32;

/// SubWord via four `aes32esi`.
#[inline]
fn sub_word(x: u32) -> u32 {
    let mut y = 0;
    for bs in 0..4 {
        y = aes32esi(y, x, bs);
    }
    y
}

/// InvMixColumns of one word: SubWord cancelled by the inverse S-box inside `aes32dsmi`.
#[inline]
fn inv_mix_word(x: u32) -> u32 {
    let s = sub_word(x);
    let mut y = 0;
    for bs in 0..4 {
        y = aes32dsmi(y, s, bs);
    }
    y
}

/// Expand an encryption key schedule.
#[must_use]
pub fn encrypt_key<K: AesKey>(key: &K) -> RoundKeys {
    let total = 4 * (K::NR + 1);
    let mut rk = RoundKeys::from_key(key, total);
    let w = rk.words_mut();

    for i in K::NK..total {
        let mut t = w[i - 1];
        if i % K::NK == 0 {
            t = sub_word(t.rotate_right(8)) ^ RCON[i / K::NK - 1];
        } else if K::NK > 6 && i % K::NK == 4 {
            t = sub_word(t);
        }
        w[i] = w[i - K::NK] ^ t;
    }
    rk
}

/// Expand a decryption key schedule for the equivalent inverse cipher: round keys in reverse
/// order, with InvMixColumns applied to all but the first and last.
#[must_use]
pub fn decrypt_key<K: AesKey>(key: &K) -> RoundKeys {
    let ek = encrypt_key(key);
    let nr = K::NR;
    let mut dk = RoundKeys::zeroed(nr, 4 * (nr + 1));
    let w = dk.words_mut();

    for r in 0..=nr {
        let src = ek.round_key(nr - r);
        for c in 0..4 {
            w[4 * r + c] = if r == 0 || r == nr {
                src[c]
            } else {
                inv_mix_word(src[c])
            };
        }
    }
    dk
}

/// Cipher state: the four columns.
#[derive(Clone, Copy)]
struct State([u32; 4]);

impl State {
    #[inline]
    fn load(block: &Block, rk: [u32; 4]) -> Self {
        let t = Block128::new(*block).to_u32x4();
        Self([t[0] ^ rk[0], t[1] ^ rk[1], t[2] ^ rk[2], t[3] ^ rk[3]])
    }

    #[inline]
    fn store(self) -> Block {
        Block128::from_u32x4(self.0).to_bytes()
    }

    /// Forward round: column `c` gathers byte `b` from column `c + b` (ShiftRows).
    #[inline]
    fn encrypt_round(self, rk: [u32; 4], step: Step) -> Self {
        let t = self.0;
        let mut u = rk;
        for c in 0..4 {
            for bs in 0..4u8 {
                u[c] = step(u[c], t[(c + usize::from(bs)) % 4], bs);
            }
        }
        Self(u)
    }

    /// Inverse round: column `c` gathers byte `b` from column `c - b` (InvShiftRows).
    #[inline]
    fn decrypt_round(self, rk: [u32; 4], step: Step) -> Self {
        let t = self.0;
        let mut u = rk;
        for c in 0..4 {
            for bs in 0..4u8 {
                u[c] = step(u[c], t[(c + 4 - usize::from(bs)) % 4], bs);
            }
        }
        Self(u)
    }
}

/// Encrypt a single block.
#[must_use]
pub fn encrypt_block(rk: &RoundKeys, block: &Block) -> Block {
    let nr = rk.rounds();
    let mut t = State::load(block, rk.round_key(0));
    for r in 1..nr {
        t = t.encrypt_round(rk.round_key(r), aes32esmi);
    }
    t.encrypt_round(rk.round_key(nr), aes32esi).store()
}

/// Decrypt a single block with a schedule from [`decrypt_key`].
#[must_use]
pub fn decrypt_block(rk: &RoundKeys, block: &Block) -> Block {
    let nr = rk.rounds();
    let mut t = State::load(block, rk.round_key(0));
    for r in 1..nr {
        t = t.decrypt_round(rk.round_key(r), aes32dsmi);
    }
    t.decrypt_round(rk.round_key(nr), aes32dsi).store()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::expand_reference;
    use hex_literal::hex;

    #[test]
    fn schedules_match_reference() {
        let key = hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");
        let k128: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");
        let k192: [u8; 24] = hex!("000102030405060708090a0b0c0d0e0f1011121314151617");
        assert_eq!(encrypt_key(&k128), expand_reference(&k128));
        assert_eq!(encrypt_key(&k192), expand_reference(&k192));
        assert_eq!(encrypt_key(&key), expand_reference(&key));
    }

    #[test]
    fn fips197_aes128() {
        let key = hex!("000102030405060708090a0b0c0d0e0f");
        let pt = hex!("00112233445566778899aabbccddeeff");
        let ct = hex!("69c4e0d86a7b0430d8cdb78070b4c55a");
        assert_eq!(encrypt_block(&encrypt_key(&key), &pt), ct);
        assert_eq!(decrypt_block(&decrypt_key(&key), &ct), pt);
    }
}
