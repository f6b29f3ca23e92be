//! AES-GCM with a 96-bit nonce and no associated data.
//!
//! The ciphertext is authenticated with GHASH under `H = E(K, 0^128)`; the tag is
//! `E(K, J0) ^ GHASH(C || len)` with `J0 = nonce || 1`. The keystream starts at counter 2.

use crate::{AesEnc, AesKey, BLOCK_SIZE, Block, BlockEncrypt, Error, Result};
use core::fmt;
use zkemu::Block128;
use zkghash::{GHash, Multiplier};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Nonce size in bytes.
pub const NONCE_SIZE: usize = 12;

/// Tag size in bytes.
pub const TAG_SIZE: usize = 16;

/// Longest plaintext GCM admits: 2^39 - 256 bits.
pub const P_MAX: u64 = (1 << 36) - 32;

/// GCM nonce.
pub type Nonce = [u8; NONCE_SIZE];

/// GCM authentication tag.
pub type Tag = [u8; TAG_SIZE];

/// AES-GCM over any [`BlockEncrypt`] cipher with a chosen GHASH [`Multiplier`].
#[derive(Clone)]
pub struct AesGcm<C> {
    cipher: C,
    h: Block,
    multiplier: Multiplier,
}

/// AES-GCM with a 128-bit key.
pub type Aes128Gcm = AesGcm<AesEnc<crate::Aes128Key>>;

/// AES-GCM with a 192-bit key.
pub type Aes192Gcm = AesGcm<AesEnc<crate::Aes192Key>>;

/// AES-GCM with a 256-bit key.
pub type Aes256Gcm = AesGcm<AesEnc<crate::Aes256Key>>;

impl<C: BlockEncrypt> AesGcm<C> {
    /// Wrap `cipher` with the default GHASH multiplier.
    #[must_use]
    pub fn new(cipher: C) -> Self {
        Self::with_multiplier(cipher, Multiplier::default())
    }

    /// Wrap `cipher` with an explicit GHASH multiplier.
    #[must_use]
    pub fn with_multiplier(cipher: C, multiplier: Multiplier) -> Self {
        let h = cipher.encrypt_block(&[0; BLOCK_SIZE]);
        Self {
            cipher,
            h,
            multiplier,
        }
    }

    /// GHASH multiplier in use.
    #[must_use]
    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    /// Encrypt `buffer` in place and return the tag.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] if `buffer` is longer than [`P_MAX`].
    pub fn encrypt_in_place_detached(&self, nonce: &Nonce, buffer: &mut [u8]) -> Result<Tag> {
        check_len(buffer.len())?;
        let j0 = Block128::from_partial(nonce).with_counter(1);
        self.apply_keystream(j0, buffer);
        Ok(self.compute_tag(j0, buffer))
    }

    /// Verify `tag` over the ciphertext in `buffer`, then decrypt it in place.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] if `buffer` is longer than [`P_MAX`],
    /// [`Error::VerificationFailed`] if the tag does not match. `buffer` is left untouched in
    /// both cases.
    pub fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce,
        buffer: &mut [u8],
        tag: &Tag,
    ) -> Result<()> {
        check_len(buffer.len())?;
        let j0 = Block128::from_partial(nonce).with_counter(1);

        let expected = self.compute_tag(j0, buffer);
        let diff = expected
            .iter()
            .zip(tag)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b));
        if diff != 0 {
            return Err(Error::VerificationFailed);
        }

        self.apply_keystream(j0, buffer);
        Ok(())
    }

    /// Encrypt `plaintext` into `out` as `ciphertext || tag` and return the number of bytes
    /// written.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] unless `out` is exactly [`TAG_SIZE`] bytes longer than
    /// `plaintext`.
    pub fn encrypt(&self, nonce: &Nonce, plaintext: &[u8], out: &mut [u8]) -> Result<usize> {
        if out.len() != plaintext.len() + TAG_SIZE {
            return Err(Error::InvalidInput);
        }
        let (ct, tag_out) = out.split_at_mut(plaintext.len());
        ct.copy_from_slice(plaintext);
        let tag = self.encrypt_in_place_detached(nonce, ct)?;
        tag_out.copy_from_slice(&tag);
        Ok(out.len())
    }

    /// Verify and decrypt `ciphertext || tag` into `out`, returning the plaintext length.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] if `sealed` is shorter than a tag or `out` is not exactly the
    /// plaintext length. [`Error::VerificationFailed`] if the tag does not match, in which case
    /// `out` is zeroed.
    pub fn decrypt(&self, nonce: &Nonce, sealed: &[u8], out: &mut [u8]) -> Result<usize> {
        let Some(ct_len) = sealed.len().checked_sub(TAG_SIZE) else {
            return Err(Error::InvalidInput);
        };
        if out.len() != ct_len {
            return Err(Error::InvalidInput);
        }

        let (ct, tag) = sealed.split_at(ct_len);
        let mut expected = [0u8; TAG_SIZE];
        expected.copy_from_slice(tag);

        out.copy_from_slice(ct);
        if let Err(e) = self.decrypt_in_place_detached(nonce, out, &expected) {
            out.fill(0);
            return Err(e);
        }
        Ok(ct_len)
    }

    /// XOR the CTR keystream starting at `inc32(j0)` into `buffer`.
    fn apply_keystream(&self, j0: Block128, buffer: &mut [u8]) {
        let mut ctr = j0;
        for chunk in buffer.chunks_mut(BLOCK_SIZE) {
            ctr = ctr.inc32();
            #[allow(unused_mut)]
            let mut ks = self.cipher.encrypt_block(ctr.as_bytes());
            for (b, k) in chunk.iter_mut().zip(ks) {
                *b ^= k;
            }
            #[cfg(feature = "zeroize")]
            ks.zeroize();
        }
    }

    fn compute_tag(&self, j0: Block128, ciphertext: &[u8]) -> Tag {
        let mut ghash = GHash::new_with_multiplier(&self.h.into(), self.multiplier);
        for chunk in ciphertext.chunks(BLOCK_SIZE) {
            ghash.update_block(&Block128::from_partial(chunk));
        }

        // no associated data: the first half stays zero
        let bits = (ciphertext.len() as u64) * 8;
        let mut len_block = Block128::ZERO;
        len_block.as_bytes_mut()[8..].copy_from_slice(&bits.to_be_bytes());
        ghash.update_block(&len_block);

        let s = ghash.peek();
        let t0: Block = self.cipher.encrypt_block(j0.as_bytes());
        (s ^ Block128::new(t0)).to_bytes()
    }
}

impl<K: AesKey> AesGcm<AesEnc<K>> {
    /// Key an AES-GCM instance with the given AES engine and GHASH multiplier.
    ///
    /// Only the encryption schedule is expanded.
    #[must_use]
    pub fn from_key(key: &K, engine: crate::Engine, multiplier: Multiplier) -> Self {
        Self::with_multiplier(AesEnc::with_engine(key, engine), multiplier)
    }
}

impl<C: fmt::Debug> fmt::Debug for AesGcm<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesGcm")
            .field("cipher", &self.cipher)
            .field("multiplier", &self.multiplier)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "zeroize")]
impl<C> Drop for AesGcm<C> {
    fn drop(&mut self) {
        self.h.zeroize();
    }
}

fn check_len(len: usize) -> Result<()> {
    if len as u64 > P_MAX {
        return Err(Error::InvalidInput);
    }
    Ok(())
}

/// Counter block helpers.
trait CounterBlock {
    fn with_counter(self, ctr: u32) -> Self;
    fn inc32(self) -> Self;
}

impl CounterBlock for Block128 {
    #[inline]
    fn with_counter(mut self, ctr: u32) -> Self {
        self.set_be_u32(3, ctr);
        self
    }

    /// Increment the last 32 bits as a big-endian integer, modulo 2^32.
    #[inline]
    fn inc32(mut self) -> Self {
        let ctr = self.be_u32(3).wrapping_add(1);
        self.set_be_u32(3, ctr);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Aes128Key, Engine};
    use hex_literal::hex;

    #[test]
    fn counter_wraps() {
        let b = Block128::new(hex!("000102030405060708090a0bffffffff")).inc32();
        assert_eq!(b.to_bytes(), hex!("000102030405060708090a0b00000000"));
    }

    #[test]
    fn hash_subkey() {
        let key: Aes128Key = [0; 16];
        let gcm = Aes128Gcm::from_key(&key, Engine::Rv64, Multiplier::default());
        assert_eq!(gcm.h, hex!("66e94bd4ef8a2c3b884cfa59ca342b2e"));
    }

    #[test]
    fn mcgrew_viega_test_case_1() {
        let gcm = Aes128Gcm::new(AesEnc::new(&[0; 16]));
        let mut out = [0u8; TAG_SIZE];
        assert_eq!(gcm.encrypt(&[0; 12], &[], &mut out).unwrap(), TAG_SIZE);
        assert_eq!(out, hex!("58e2fccefa7e3061367f1d57a4e7455a"));
    }
}
