//! Block ciphers computed with emulated RISC-V scalar cryptography instructions.
//!
//! - [`sm4`]: SM4 with the `sm4ks`/`sm4ed` instructions,
//! - [`present`]: PRESENT-80/128 with `xperm4` on 64-bit or 32-bit lanes, or with plain tables.
//!
//! ```
//! use hex_literal::hex;
//! use zkblock::{present::{Present, PresentImpl}, sm4::Sm4};
//!
//! let sm4 = Sm4::new(&hex!("0123456789abcdeffedcba9876543210"));
//! let ct = sm4.encrypt_block(&hex!("0123456789abcdeffedcba9876543210"));
//! assert_eq!(ct, hex!("681edf34d206965e86b3e94f536e4246"));
//!
//! let present = Present::new80(&[0; 10]).with_impl(PresentImpl::Rv32);
//! assert_eq!(present.encrypt_block(&[0; 8]), hex!("5579c1387b228445"));
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]

pub mod present;
pub mod sm4;

pub use present::{Present, PresentImpl};
pub use sm4::Sm4;
