//! **AES** and **AES-GCM** computed with emulated RISC-V scalar cryptography instructions.
//!
//! ## Engines
//!
//! Three interchangeable [`Engine`]s produce identical ciphertexts:
//!
//! - [`Engine::Rv32`]: `aes32esmi`/`aes32dsmi` column steps on 32-bit words,
//! - [`Engine::Rv64`]: `aes64esm`/`aes64dsm` half-state steps on 64-bit words,
//! - [`Engine::Rv64OnTheFly`]: as `Rv64`, but round keys are derived during encryption and no
//!   expanded schedule is stored.
//!
//! Key lengths are enforced by type: an [`Aes`] is parameterised by [`Aes128Key`],
//! [`Aes192Key`] or [`Aes256Key`]. [`AesEnc`] carries only the encryption schedule and is what
//! [`AesGcm`] runs on.
//!
//! Decryption uses the equivalent inverse cipher, with InvMixColumns applied to the inner
//! round keys. The on-the-fly engine decrypts with the `Rv64` schedule.
//!
//! ## Example
//!
//! ```
//! use zkaes::{Aes128Gcm, AesEnc, Engine};
//!
//! let key = [0x42; 16];
//! let nonce = [0x24; 12];
//! let gcm = Aes128Gcm::new(AesEnc::with_engine(&key, Engine::Rv32));
//!
//! let mut sealed = [0u8; 5 + 16];
//! gcm.encrypt(&nonce, b"hello", &mut sealed)?;
//!
//! let mut opened = [0u8; 5];
//! gcm.decrypt(&nonce, &sealed, &mut opened)?;
//! assert_eq!(&opened, b"hello");
//! # Ok::<(), zkaes::Error>(())
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]

pub mod gcm;
pub mod otf;
pub mod rv32;
pub mod rv64;
mod schedule;

pub use gcm::{Aes128Gcm, Aes192Gcm, Aes256Gcm, AesGcm, Nonce, Tag};
pub use schedule::{Aes128Key, Aes192Key, Aes256Key, AesKey, RoundKeys, expand_reference};
pub use zkghash;

use core::marker::PhantomData;
use zkghash::LaneWidth;

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block.
pub type Block = [u8; BLOCK_SIZE];

/// Errors raised by the message-level operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input or output buffer has the wrong length.
    #[error("invalid input length")]
    InvalidInput,

    /// Authentication tag did not match.
    #[error("authentication tag verification failed")]
    VerificationFailed,
}

/// Result type with the [`Error`] of this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// AES implementation strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Engine {
    /// 32-bit lanes with `aes32*`.
    Rv32,
    /// 64-bit lanes with `aes64*`.
    Rv64,
    /// 64-bit lanes, key schedule interleaved with encryption.
    Rv64OnTheFly,
}

impl Engine {
    /// Every engine.
    pub const ALL: [Engine; 3] = [Engine::Rv32, Engine::Rv64, Engine::Rv64OnTheFly];

    /// Prepare key material for [`Engine::encrypt_block`].
    #[must_use]
    pub fn encrypt_key<K: AesKey>(self, key: &K) -> RoundKeys {
        match self {
            Engine::Rv32 => rv32::encrypt_key(key),
            Engine::Rv64 => rv64::encrypt_key(key),
            Engine::Rv64OnTheFly => otf::encrypt_key(key),
        }
    }

    /// Prepare key material for [`Engine::decrypt_block`].
    #[must_use]
    pub fn decrypt_key<K: AesKey>(self, key: &K) -> RoundKeys {
        match self {
            Engine::Rv32 => rv32::decrypt_key(key),
            Engine::Rv64 | Engine::Rv64OnTheFly => rv64::decrypt_key(key),
        }
    }

    /// Encrypt one block with key material from [`Engine::encrypt_key`] of the same engine.
    #[must_use]
    pub fn encrypt_block(self, rk: &RoundKeys, block: &Block) -> Block {
        match self {
            Engine::Rv32 => rv32::encrypt_block(rk, block),
            Engine::Rv64 => rv64::encrypt_block(rk, block),
            Engine::Rv64OnTheFly => otf::encrypt_block(rk, block),
        }
    }

    /// Decrypt one block with key material from [`Engine::decrypt_key`] of the same engine.
    #[must_use]
    pub fn decrypt_block(self, rk: &RoundKeys, block: &Block) -> Block {
        match self {
            Engine::Rv32 => rv32::decrypt_block(rk, block),
            Engine::Rv64 | Engine::Rv64OnTheFly => rv64::decrypt_block(rk, block),
        }
    }
}

impl Default for Engine {
    /// Engine matching the native lane width.
    fn default() -> Self {
        match LaneWidth::default() {
            LaneWidth::W32 => Engine::Rv32,
            LaneWidth::W64 => Engine::Rv64,
        }
    }
}

/// Block cipher encryption in the forward direction, as used by the counter mode of GCM.
pub trait BlockEncrypt {
    /// Encrypt a single block.
    fn encrypt_block(&self, block: &Block) -> Block;
}

/// AES keyed for encryption only, bound to one [`Engine`].
///
/// Holds no decryption schedule. This is the cipher GCM runs on.
#[derive(Clone)]
pub struct AesEnc<K: AesKey> {
    engine: Engine,
    enc: RoundKeys,
    key: PhantomData<K>,
}

/// AES-128 encryption.
pub type Aes128Enc = AesEnc<Aes128Key>;

/// AES-192 encryption.
pub type Aes192Enc = AesEnc<Aes192Key>;

/// AES-256 encryption.
pub type Aes256Enc = AesEnc<Aes256Key>;

impl<K: AesKey> AesEnc<K> {
    /// Expand `key` for the default engine.
    #[must_use]
    pub fn new(key: &K) -> Self {
        Self::with_engine(key, Engine::default())
    }

    /// Expand `key` for `engine`.
    #[must_use]
    pub fn with_engine(key: &K, engine: Engine) -> Self {
        Self {
            engine,
            enc: engine.encrypt_key(key),
            key: PhantomData,
        }
    }

    /// Engine in use.
    #[must_use]
    pub fn engine(&self) -> Engine {
        self.engine
    }

    /// Encrypt a single block.
    #[must_use]
    pub fn encrypt_block(&self, block: &Block) -> Block {
        self.engine.encrypt_block(&self.enc, block)
    }
}

/// AES keyed with a `K` byte key and bound to one [`Engine`].
#[derive(Clone)]
pub struct Aes<K: AesKey> {
    enc: AesEnc<K>,
    dec: RoundKeys,
}

/// AES-128.
pub type Aes128 = Aes<Aes128Key>;

/// AES-192.
pub type Aes192 = Aes<Aes192Key>;

/// AES-256.
pub type Aes256 = Aes<Aes256Key>;

impl<K: AesKey> Aes<K> {
    /// Expand `key` for the default engine.
    #[must_use]
    pub fn new(key: &K) -> Self {
        Self::with_engine(key, Engine::default())
    }

    /// Expand `key` for `engine`.
    #[must_use]
    pub fn with_engine(key: &K, engine: Engine) -> Self {
        Self {
            enc: AesEnc::with_engine(key, engine),
            dec: engine.decrypt_key(key),
        }
    }

    /// Engine in use.
    #[must_use]
    pub fn engine(&self) -> Engine {
        self.enc.engine
    }

    /// Encrypt a single block.
    #[must_use]
    pub fn encrypt_block(&self, block: &Block) -> Block {
        self.enc.encrypt_block(block)
    }

    /// Decrypt a single block.
    #[must_use]
    pub fn decrypt_block(&self, block: &Block) -> Block {
        self.enc.engine.decrypt_block(&self.dec, block)
    }
}

impl<K: AesKey> From<Aes<K>> for AesEnc<K> {
    fn from(aes: Aes<K>) -> Self {
        aes.enc
    }
}

impl<K: AesKey> BlockEncrypt for Aes<K> {
    #[inline]
    fn encrypt_block(&self, block: &Block) -> Block {
        Aes::encrypt_block(self, block)
    }
}

impl<K: AesKey> BlockEncrypt for AesEnc<K> {
    #[inline]
    fn encrypt_block(&self, block: &Block) -> Block {
        AesEnc::encrypt_block(self, block)
    }
}

impl<K: AesKey> core::fmt::Debug for AesEnc<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AesEnc")
            .field("engine", &self.engine)
            .field("rounds", &K::NR)
            .finish_non_exhaustive()
    }
}

impl<K: AesKey> core::fmt::Debug for Aes<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Aes")
            .field("engine", &self.enc.engine)
            .field("rounds", &K::NR)
            .finish_non_exhaustive()
    }
}
