//! AES on RV64 with the key schedule computed on the fly, interleaved with the rounds.
//!
//! Only the cipher key is stored. Each round key is derived with `aes64ks1i`/`aes64ks2` right
//! before it is needed, so the expanded schedule never exists in memory.
//!
//! There is no on-the-fly decryption: the inverse cipher consumes round keys last to first.

use crate::{
    Block,
    rv64::{KS1_SUBWORD_ONLY, State},
    schedule::{AesKey, RoundKeys},
};
use zkemu::rv64::{aes64ks1i, aes64ks2};

/// Store the cipher key for [`encrypt_block`].
#[must_use]
pub fn encrypt_key<K: AesKey>(key: &K) -> RoundKeys {
    RoundKeys::from_key(key, K::NK)
}

/// Encrypt a single block, expanding the key held in `key` as the rounds progress.
#[must_use]
pub fn encrypt_block(key: &RoundKeys, block: &Block) -> Block {
    let t = State::load(block);
    match key.rounds() {
        10 => encrypt128(key, t),
        12 => encrypt192(key, t),
        _ => encrypt256(key, t),
    }
    .store()
}

/// Two doubleword AES-128 key register.
struct Key128 {
    k0: u64,
    k1: u64,
}

impl Key128 {
    #[inline]
    fn next(&mut self, rnum: u8) {
        let ks = aes64ks1i(self.k1, rnum);
        self.k0 = aes64ks2(ks, self.k0);
        self.k1 = aes64ks2(self.k0, self.k1);
    }
}

fn encrypt128(key: &RoundKeys, t: State) -> State {
    let mut k = Key128 {
        k0: key.dword(0),
        k1: key.dword(1),
    };
    let mut t = t.add_key(k.k0, k.k1);
    for i in 0..9 {
        t = t.esm();
        k.next(i);
        t = t.add_key(k.k0, k.k1);
    }
    t = t.es();
    k.next(9);
    t.add_key(k.k0, k.k1)
}

/// AES-192 key register. One step yields three doublewords, one and a half round keys.
struct Key192 {
    k0: u64,
    k1: u64,
    k2: u64,
}

impl Key192 {
    #[inline]
    fn next(&mut self, rnum: u8) {
        let ks = aes64ks1i(self.k2, rnum);
        self.k0 = aes64ks2(ks, self.k0);
        self.k1 = aes64ks2(self.k0, self.k1);
        self.k2 = aes64ks2(self.k1, self.k2);
    }
}

fn encrypt192(key: &RoundKeys, t: State) -> State {
    let mut k = Key192 {
        k0: key.dword(0),
        k1: key.dword(1),
        k2: key.dword(2),
    };
    let mut t = t;
    let mut rnum = 0;
    // three rounds per pass consume two key steps
    let v = loop {
        let mut u = t.add_key(k.k0, k.k1).esm();
        u.t0 ^= k.k2;
        k.next(rnum);
        rnum += 1;
        u.t1 ^= k.k0;
        let v = u.esm().add_key(k.k1, k.k2);
        if rnum == 7 {
            break v;
        }
        k.next(rnum);
        rnum += 1;
        t = v.esm();
    };
    // the last step only needs the first two doublewords
    let ks = aes64ks1i(k.k2, 7);
    k.k0 = aes64ks2(ks, k.k0);
    k.k1 = aes64ks2(k.k0, k.k1);
    v.es().add_key(k.k0, k.k1)
}

/// AES-256 key register: the low half `k0, k1` and the high half `k2, k3` advance alternately.
struct Key256 {
    k0: u64,
    k1: u64,
    k2: u64,
    k3: u64,
}

impl Key256 {
    #[inline]
    fn next_low(&mut self, rnum: u8) {
        let ks = aes64ks1i(self.k3, rnum);
        self.k0 = aes64ks2(ks, self.k0);
        self.k1 = aes64ks2(self.k0, self.k1);
    }

    #[inline]
    fn next_high(&mut self) {
        let ks = aes64ks1i(self.k1, KS1_SUBWORD_ONLY);
        self.k2 = aes64ks2(ks, self.k2);
        self.k3 = aes64ks2(self.k2, self.k3);
    }
}

fn encrypt256(key: &RoundKeys, t: State) -> State {
    let mut k = Key256 {
        k0: key.dword(0),
        k1: key.dword(1),
        k2: key.dword(2),
        k3: key.dword(3),
    };
    let mut t = t.add_key(k.k0, k.k1);
    for i in 0..7 {
        let u = t.esm().add_key(k.k2, k.k3);
        k.next_low(i);
        if i == 6 {
            return u.es().add_key(k.k0, k.k1);
        }
        t = u.esm();
        k.next_high();
        t = t.add_key(k.k0, k.k1);
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const PT: Block = hex!("00112233445566778899aabbccddeeff");

    #[test]
    fn fips197_appendix_c() {
        let key = hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");
        let k128: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");
        let k192: [u8; 24] = hex!("000102030405060708090a0b0c0d0e0f1011121314151617");
        assert_eq!(
            encrypt_block(&encrypt_key(&k128), &PT),
            hex!("69c4e0d86a7b0430d8cdb78070b4c55a")
        );
        assert_eq!(
            encrypt_block(&encrypt_key(&k192), &PT),
            hex!("dda97ca4864cdfe06eaf70a0ec0d7191")
        );
        assert_eq!(
            encrypt_block(&encrypt_key(&key), &PT),
            hex!("8ea2b7ca516745bfeafc49904b496089")
        );
    }

    #[test]
    fn stores_only_the_cipher_key() {
        let k192: [u8; 24] = [7; 24];
        let rk = encrypt_key(&k192);
        assert_eq!(rk.words().len(), 6);
        assert_eq!(rk.rounds(), 12);
    }
}
