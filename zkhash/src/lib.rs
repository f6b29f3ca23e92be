//! Hash functions computed with emulated RISC-V scalar cryptography instructions.
//!
//! - [`sha256`]: SHA-224/256 with `sha256sig*`/`sha256sum*`,
//! - [`sha512`]: SHA-384/512 on 64-bit lanes or on split 32-bit lanes,
//! - [`sha3`]: SHA-3 and SHAKE with a 64-bit or a bit-interleaved 32-bit Keccak permutation,
//! - [`sm3`]: SM3 with `sm3p0`/`sm3p1`.
//!
//! Each compression function or permutation is exposed on its own, with the fixed-size block or
//! state it mutates. The incremental hashers and one-shot functions add padding on top.
//!
//! ```
//! use zkhash::{sha3::{KeccakImpl, Sha3_256}, sha256::sha256};
//!
//! let d = sha256(b"abc");
//! assert_eq!(d[0], 0xba);
//!
//! let mut h = Sha3_256::with_impl(KeccakImpl::Rv32);
//! h.update(b"abc");
//! assert_eq!(h.finalize()[0], 0x3a);
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]

pub mod sha256;
pub mod sha3;
pub mod sha512;
pub mod sm3;

mod buffer;

pub use sha3::KeccakImpl;
pub use sha512::Sha512Impl;
