#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]

pub mod block;
pub mod rv32;
pub mod rv64;
pub mod tables;

mod lane;
mod width;

pub use block::{BLOCK_SIZE, Block128};
pub use lane::Lane;
pub use width::LaneWidth;
