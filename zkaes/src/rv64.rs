//! AES on RV64 with the `aes64*` instructions.
//!
//! The state is two doublewords. Each half of a round is a single `aes64esm` (or `aes64dsm`)
//! with the operands in either order, followed by an XOR with the round key.

use crate::{
    Block,
    schedule::{AesKey, RoundKeys},
};
use zkemu::{
    Block128,
    rv64::{aes64ds, aes64dsm, aes64es, aes64esm, aes64im, aes64ks1i, aes64ks2},
};

/// `aes64ks1i` round number which skips RotWord and Rcon.
pub(crate) const KS1_SUBWORD_ONLY: u8 = 10;

/// Expand an encryption key schedule with `aes64ks1i`/`aes64ks2`.
#[must_use]
pub fn encrypt_key<K: AesKey>(key: &K) -> RoundKeys {
    let mut rk = RoundKeys::from_key(key, 4 * (K::NR + 1));
    match K::NK {
        4 => expand128(&mut rk),
        6 => expand192(&mut rk),
        _ => expand256(&mut rk),
    }
    rk
}

fn expand128(rk: &mut RoundKeys) {
    let (mut k0, mut k1) = (rk.dword(0), rk.dword(1));
    for i in 0..10u8 {
        let ks = aes64ks1i(k1, i);
        k0 = aes64ks2(ks, k0);
        k1 = aes64ks2(k0, k1);
        let n = 2 * usize::from(i) + 2;
        rk.set_dword(n, k0);
        rk.set_dword(n + 1, k1);
    }
}

fn expand192(rk: &mut RoundKeys) {
    let (mut k0, mut k1, mut k2) = (rk.dword(0), rk.dword(1), rk.dword(2));
    let mut n = 3;
    for i in 0..8u8 {
        let ks = aes64ks1i(k2, i);
        k0 = aes64ks2(ks, k0);
        k1 = aes64ks2(k0, k1);
        rk.set_dword(n, k0);
        rk.set_dword(n + 1, k1);
        n += 2;
        // the schedule ends after 26 doublewords
        if i < 7 {
            k2 = aes64ks2(k1, k2);
            rk.set_dword(n, k2);
            n += 1;
        }
    }
}

fn expand256(rk: &mut RoundKeys) {
    let (mut k0, mut k1, mut k2, mut k3) = (rk.dword(0), rk.dword(1), rk.dword(2), rk.dword(3));
    let mut n = 4;
    for i in 0..7u8 {
        let ks = aes64ks1i(k3, i);
        k0 = aes64ks2(ks, k0);
        k1 = aes64ks2(k0, k1);
        rk.set_dword(n, k0);
        rk.set_dword(n + 1, k1);
        n += 2;
        if i < 6 {
            let ks = aes64ks1i(k1, KS1_SUBWORD_ONLY);
            k2 = aes64ks2(ks, k2);
            k3 = aes64ks2(k2, k3);
            rk.set_dword(n, k2);
            rk.set_dword(n + 1, k3);
            n += 2;
        }
    }
}

/// Expand a decryption key schedule for the equivalent inverse cipher: round keys reversed,
/// middle round keys passed through `aes64im`.
#[must_use]
pub fn decrypt_key<K: AesKey>(key: &K) -> RoundKeys {
    let ek = encrypt_key(key);
    let nr = K::NR;
    let mut dk = RoundKeys::zeroed(nr, 4 * (nr + 1));
    for r in 0..=nr {
        let (mut a, mut b) = (ek.dword(2 * (nr - r)), ek.dword(2 * (nr - r) + 1));
        if r != 0 && r != nr {
            a = aes64im(a);
            b = aes64im(b);
        }
        dk.set_dword(2 * r, a);
        dk.set_dword(2 * r + 1, b);
    }
    dk
}

/// Cipher state: columns 0 and 1 in `t0`, columns 2 and 3 in `t1`.
#[derive(Clone, Copy)]
pub(crate) struct State {
    pub(crate) t0: u64,
    pub(crate) t1: u64,
}

impl State {
    #[inline]
    pub(crate) fn load(block: &Block) -> Self {
        let [t0, t1] = Block128::new(*block).to_u64x2();
        Self { t0, t1 }
    }

    #[inline]
    pub(crate) fn store(self) -> Block {
        Block128::from_u64x2([self.t0, self.t1]).to_bytes()
    }

    #[inline]
    pub(crate) fn add_key(self, k0: u64, k1: u64) -> Self {
        Self {
            t0: self.t0 ^ k0,
            t1: self.t1 ^ k1,
        }
    }

    /// ShiftRows, SubBytes and MixColumns.
    #[inline]
    pub(crate) fn esm(self) -> Self {
        Self {
            t0: aes64esm(self.t0, self.t1),
            t1: aes64esm(self.t1, self.t0),
        }
    }

    /// ShiftRows and SubBytes.
    #[inline]
    pub(crate) fn es(self) -> Self {
        Self {
            t0: aes64es(self.t0, self.t1),
            t1: aes64es(self.t1, self.t0),
        }
    }

    #[inline]
    fn dsm(self) -> Self {
        Self {
            t0: aes64dsm(self.t0, self.t1),
            t1: aes64dsm(self.t1, self.t0),
        }
    }

    #[inline]
    fn ds(self) -> Self {
        Self {
            t0: aes64ds(self.t0, self.t1),
            t1: aes64ds(self.t1, self.t0),
        }
    }
}

/// Encrypt a single block.
#[must_use]
pub fn encrypt_block(rk: &RoundKeys, block: &Block) -> Block {
    let nr = rk.rounds();
    let mut t = State::load(block).add_key(rk.dword(0), rk.dword(1));
    for r in 1..nr {
        t = t.esm().add_key(rk.dword(2 * r), rk.dword(2 * r + 1));
    }
    t.es().add_key(rk.dword(2 * nr), rk.dword(2 * nr + 1)).store()
}

/// Decrypt a single block with a schedule from [`decrypt_key`].
#[must_use]
pub fn decrypt_block(rk: &RoundKeys, block: &Block) -> Block {
    let nr = rk.rounds();
    let mut t = State::load(block).add_key(rk.dword(0), rk.dword(1));
    for r in 1..nr {
        t = t.dsm().add_key(rk.dword(2 * r), rk.dword(2 * r + 1));
    }
    t.ds().add_key(rk.dword(2 * nr), rk.dword(2 * nr + 1)).store()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rv32, schedule::expand_reference};
    use hex_literal::hex;

    const KEY: [u8; 32] = hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");

    #[test]
    fn schedules_match_reference() {
        let k128: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");
        let k192: [u8; 24] = hex!("000102030405060708090a0b0c0d0e0f1011121314151617");
        assert_eq!(encrypt_key(&k128), expand_reference(&k128));
        assert_eq!(encrypt_key(&k192), expand_reference(&k192));
        assert_eq!(encrypt_key(&KEY), expand_reference(&KEY));
    }

    #[test]
    fn decrypt_schedules_match_rv32() {
        let k192: [u8; 24] = hex!("000102030405060708090a0b0c0d0e0f1011121314151617");
        assert_eq!(decrypt_key(&k192), rv32::decrypt_key(&k192));
        assert_eq!(decrypt_key(&KEY), rv32::decrypt_key(&KEY));
    }

    #[test]
    fn fips197_aes256() {
        let pt = hex!("00112233445566778899aabbccddeeff");
        let ct = hex!("8ea2b7ca516745bfeafc49904b496089");
        assert_eq!(encrypt_block(&encrypt_key(&KEY), &pt), ct);
        assert_eq!(decrypt_block(&decrypt_key(&KEY), &ct), pt);
    }
}
