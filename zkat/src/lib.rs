//! Known-answer test harness for the emulated RISC-V scalar crypto primitives.
//!
//! A [`Selector`] names, per primitive [`Family`], which implementation answers. Nothing is bound
//! until the caller binds it; running a family whose slot is empty is reported as a failure.
//!
//! ```
//! use zkat::{Family, Selector, run_family};
//! use zkblock::PresentImpl;
//!
//! let mut sel = Selector::new();
//! sel.bind_present(PresentImpl::Reference);
//! assert!(run_family(&sel, Family::Present).is_success());
//! assert!(!run_family(&sel, Family::Keccak).is_success());
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]

pub mod vectors;

mod error;
mod kat;
mod selector;

pub use error::{Error, Result};
pub use kat::{Report, run_all, run_family, run_fixed};
pub use selector::{Family, Selector};
