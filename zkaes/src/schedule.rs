//! Round key schedules and the table-driven reference key expansion.

use zkemu::tables::AES_SBOX;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Largest schedule: AES-256, 15 round keys of four words.
pub const MAX_RK_WORDS: usize = 60;

/// AES round constants.
const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

mod sealed {
    pub trait Sealed {}
    impl Sealed for [u8; 16] {}
    impl Sealed for [u8; 24] {}
    impl Sealed for [u8; 32] {}
}

/// An AES cipher key. Implemented for exactly the three valid key lengths.
pub trait AesKey: sealed::Sealed + Copy {
    /// Key length in 32-bit words.
    const NK: usize;

    /// Number of rounds.
    const NR: usize;

    /// Key bytes.
    fn key_bytes(&self) -> &[u8];
}

/// AES-128 key.
pub type Aes128Key = [u8; 16];

/// AES-192 key.
pub type Aes192Key = [u8; 24];

/// AES-256 key.
pub type Aes256Key = [u8; 32];

macro_rules! impl_aes_key {
    ($len:expr, $nk:expr, $nr:expr) => {
        impl AesKey for [u8; $len] {
            const NK: usize = $nk;
            const NR: usize = $nr;

            #[inline]
            fn key_bytes(&self) -> &[u8] {
                self
            }
        }
    };
}

impl_aes_key!(16, 4, 10);
impl_aes_key!(24, 6, 12);
impl_aes_key!(32, 8, 14);

/// Expanded key material for `rounds` rounds.
///
/// Words are little-endian: word `4 * r + c` is column `c` of round key `r` as loaded by `lw`.
/// Doubleword `i` is words `2 * i` (low) and `2 * i + 1` (high), as loaded by `ld`.
///
/// The schedule is read-only once built. The on-the-fly engine stores only the cipher key here.
#[derive(Clone, PartialEq, Eq)]
pub struct RoundKeys {
    words: [u32; MAX_RK_WORDS],
    len: usize,
    rounds: usize,
}

impl RoundKeys {
    /// Empty schedule for `rounds` rounds holding `len` words.
    pub(crate) fn zeroed(rounds: usize, len: usize) -> Self {
        debug_assert!(len <= MAX_RK_WORDS);
        Self {
            words: [0; MAX_RK_WORDS],
            len,
            rounds,
        }
    }

    /// Load the cipher key as little-endian words, leaving the rest of the schedule empty.
    pub(crate) fn from_key<K: AesKey>(key: &K, len: usize) -> Self {
        let mut rk = Self::zeroed(K::NR, len);
        for (w, chunk) in rk.words.iter_mut().zip(key.key_bytes().chunks_exact(4)) {
            *w = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        rk
    }

    /// Number of rounds this schedule drives.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// The schedule words.
    #[must_use]
    pub fn words(&self) -> &[u32] {
        &self.words[..self.len]
    }

    pub(crate) fn words_mut(&mut self) -> &mut [u32] {
        &mut self.words[..self.len]
    }

    /// Doubleword `i` of the schedule.
    #[inline]
    pub(crate) fn dword(&self, i: usize) -> u64 {
        u64::from(self.words[2 * i]) | (u64::from(self.words[2 * i + 1]) << 32)
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn set_dword(&mut self, i: usize, x: u64) {
        self.words[2 * i] = x as u32;
        self.words[2 * i + 1] = (x >> 32) as u32;
    }

    /// Round key `r` as four words.
    #[inline]
    pub(crate) fn round_key(&self, r: usize) -> [u32; 4] {
        let w = &self.words[4 * r..4 * r + 4];
        [w[0], w[1], w[2], w[3]]
    }
}

impl core::fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RoundKeys")
            .field("rounds", &self.rounds)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "zeroize")]
impl Drop for RoundKeys {
    fn drop(&mut self) {
        self.words.zeroize();
    }
}

/// FIPS 197 key expansion with explicit S-box lookups, RotWord and Rcon.
///
/// Produces the same words as the instruction based schedules and serves as their reference.
#[must_use]
pub fn expand_reference<K: AesKey>(key: &K) -> RoundKeys {
    let total = 4 * (K::NR + 1);
    let mut w = [[0u8; 4]; MAX_RK_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.key_bytes().chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in K::NK..total {
        let mut temp = w[i - 1];
        if i % K::NK == 0 {
            temp.rotate_left(1);
            temp = temp.map(|b| AES_SBOX[usize::from(b)]);
            temp[0] ^= RCON[i / K::NK - 1];
        } else if K::NK > 6 && i % K::NK == 4 {
            temp = temp.map(|b| AES_SBOX[usize::from(b)]);
        }
        for j in 0..4 {
            w[i][j] = w[i - K::NK][j] ^ temp[j];
        }
    }

    let mut rk = RoundKeys::zeroed(K::NR, total);
    for (dst, src) in rk.words_mut().iter_mut().zip(w) {
        *dst = u32::from_le_bytes(src);
    }
    rk
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn fips197_appendix_a1_last_word() {
        // w[43] = b6630ca6
        let rk = expand_reference(&hex!("2b7e151628aed2a6abf7158809cf4f3c"));
        assert_eq!(rk.rounds(), 10);
        assert_eq!(rk.words().len(), 44);
        assert_eq!(rk.words()[43], u32::from_le_bytes(hex!("b6630ca6")));
    }

    #[test]
    fn fips197_appendix_a3_last_word() {
        // w[59] = 706c631e
        let rk = expand_reference(&hex!(
            "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4"
        ));
        assert_eq!(rk.words()[59], u32::from_le_bytes(hex!("706c631e")));
    }

    #[test]
    fn dword_view() {
        let mut rk = RoundKeys::zeroed(10, 44);
        rk.set_dword(3, 0x1122_3344_5566_7788);
        assert_eq!(rk.words()[6], 0x5566_7788);
        assert_eq!(rk.words()[7], 0x1122_3344);
        assert_eq!(rk.dword(3), 0x1122_3344_5566_7788);
    }
}
