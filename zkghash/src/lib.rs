//! **GHASH**: universal hash over GF(2^128) used by AES-GCM for message
//! authentication (i.e. GMAC), computed with emulated RISC-V carry-less
//! multiply instructions.
//!
//! ## Implementation Notes
//!
//! Each block is absorbed as `Y = (Y + X) * H`. The multiplication is carried out
//! by one of several interchangeable [`Multiplier`] strategies:
//!
//! - 32-bit (`clmul`/`clmulh` on RV32) or 64-bit (RV64) limbs,
//! - schoolbook or Karatsuba products,
//! - shift-and-XOR or multiply-by-`0x87` reduction.
//!
//! All of them produce the same result. [`GHash::new`] picks the default
//! strategy for the host; [`GHash::new_with_multiplier`] takes one explicitly.
//!
//! Field elements are kept bit-reflected within each byte (see
//! [`hazmat::FieldElement`] with the `hazmat` feature) so that the carry-less
//! multiplier sees the coefficient of `x^0` in bit 0.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]

#[cfg(feature = "hazmat")]
pub mod hazmat;

mod field_element;
mod multiplier;

pub use multiplier::{Multiplier, Multiply, Reduction};
pub use zkemu::LaneWidth;
pub use universal_hash;

use field_element::FieldElement;
use universal_hash::{
    KeyInit, Reset, UhfBackend, UhfClosure, UniversalHash,
    consts::{U1, U16},
    crypto_common::{BlockSizeUser, KeySizeUser, ParBlocksSizeUser},
};
use zkemu::Block128;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Size of a GHASH block in bytes
pub const BLOCK_SIZE: usize = 16;

/// Size of a GHASH key in bytes
pub const KEY_SIZE: usize = 16;

/// GHASH keys (16-bytes)
pub type Key = universal_hash::Key<GHash>;

/// GHASH blocks (16-bytes)
pub type Block = universal_hash::Block<GHash>;

/// GHASH tags (16-bytes)
pub type Tag = universal_hash::Block<GHash>;

/// **GHASH**: universal hash over GF(2^128) used by AES-GCM.
///
/// GHASH is a universal hash function used for message authentication in
/// the AES-GCM authenticated encryption cipher.
#[derive(Clone)]
pub struct GHash {
    /// Hash key `H`, reflected
    h: FieldElement,

    /// Running accumulator `Y`, reflected
    y: FieldElement,

    /// Multiplication strategy
    multiplier: Multiplier,
}

impl GHash {
    /// Initialize GHASH with the given `H` field element and multiplication strategy.
    #[must_use]
    pub fn new_with_multiplier(h: &Key, multiplier: Multiplier) -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(h);

        #[allow(unused_mut)]
        let mut h = Block128::new(bytes);

        let result = Self {
            h: FieldElement::from_gcm_block(&h),
            y: FieldElement::default(),
            multiplier,
        };

        #[cfg(feature = "zeroize")]
        {
            bytes.zeroize();
            h.zeroize();
        }

        result
    }

    /// Multiplication strategy in use.
    #[must_use]
    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    /// Absorb a block already held as a [`Block128`].
    #[inline]
    pub fn update_block(&mut self, x: &Block128) {
        self.y = self.multiplier.ghash_step(self.y, x, self.h);
    }

    /// Current accumulator in GCM bit order, without consuming the state.
    #[must_use]
    pub fn peek(&self) -> Block128 {
        self.y.to_gcm_block()
    }
}

impl KeySizeUser for GHash {
    type KeySize = U16;
}

impl KeyInit for GHash {
    /// Initialize GHASH with the given `H` field element and the default [`Multiplier`]
    #[inline]
    fn new(h: &Key) -> Self {
        Self::new_with_multiplier(h, Multiplier::default())
    }
}

impl BlockSizeUser for GHash {
    type BlockSize = U16;
}

impl ParBlocksSizeUser for GHash {
    type ParBlocksSize = U1;
}

impl UhfBackend for GHash {
    fn proc_block(&mut self, x: &Block) {
        self.update_block(&Block128::from_partial(x));
    }
}

impl UniversalHash for GHash {
    fn update_with_backend(&mut self, f: impl UhfClosure<BlockSize = Self::BlockSize>) {
        f.call(self);
    }

    /// Get GHASH output
    #[inline]
    fn finalize(self) -> Tag {
        let mut tag = Tag::default();
        tag.copy_from_slice(self.peek().as_bytes());
        tag
    }
}

impl Reset for GHash {
    fn reset(&mut self) {
        self.y = FieldElement::default();
    }
}

#[cfg(feature = "zeroize")]
impl Drop for GHash {
    fn drop(&mut self) {
        self.h.zeroize();
        self.y.zeroize();
    }
}

opaque_debug::implement!(GHash);

#[cfg(test)]
mod tests {
    use crate::{BLOCK_SIZE, GHash, Multiplier, universal_hash::UniversalHash};
    use hex_literal::hex;

    //
    // GCM test case 2, McGrew & Viega, "The Galois/Counter Mode of Operation"
    //

    const H: [u8; BLOCK_SIZE] = hex!("66e94bd4ef8a2c3b884cfa59ca342b2e");
    const C: [u8; BLOCK_SIZE] = hex!("0388dace60b6a392f328c2b971b2fe78");
    const LEN: [u8; BLOCK_SIZE] = hex!("00000000000000000000000000000080");

    /// GHASH(H, {}, C)
    const GHASH_RESULT: [u8; BLOCK_SIZE] = hex!("f38cbb1ad69223dcc3457ae5b6b0f885");

    #[test]
    fn ghash_test_vector() {
        for m in Multiplier::ALL {
            let mut ghash = GHash::new_with_multiplier(&H.into(), m);
            ghash.update(&[C.into(), LEN.into()]);

            let result = ghash.finalize();
            assert_eq!(&GHASH_RESULT[..], result.as_slice(), "{m:?}");
        }
    }
}
