//! Which implementation answers for each primitive family.

use crate::{Error, Result};
use core::fmt;
use tracing::{debug, error};
use zkaes::Engine;
use zkblock::PresentImpl;
use zkghash::Multiplier;
use zkhash::{KeccakImpl, Sha512Impl};

/// A primitive family with interchangeable implementations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Family {
    /// AES key schedule and block functions.
    Aes,
    /// GHASH multiplication inside AES-GCM.
    Ghash,
    /// SHA-384/512 compression.
    Sha512,
    /// Keccak-p[1600,24] for SHA-3 and SHAKE.
    Keccak,
    /// PRESENT round function.
    Present,
}

impl Family {
    /// Every family.
    pub const ALL: [Family; 5] = [
        Family::Aes,
        Family::Ghash,
        Family::Sha512,
        Family::Keccak,
        Family::Present,
    ];
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Family::Aes => "AES",
            Family::Ghash => "GHASH",
            Family::Sha512 => "SHA-512",
            Family::Keccak => "Keccak",
            Family::Present => "PRESENT",
        })
    }
}

/// Implementation bindings for one test phase.
///
/// A fresh selector has every slot empty. Reading an empty slot is an error rather than a
/// silent fallback, so a phase only exercises what it bound.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Selector {
    aes: Option<Engine>,
    ghash: Option<Multiplier>,
    sha512: Option<Sha512Impl>,
    keccak: Option<KeccakImpl>,
    present: Option<PresentImpl>,
}

fn unbound(family: Family) -> Error {
    error!(%family, "implementation slot read before binding");
    Error::UnboundImplementation(family)
}

impl Selector {
    /// Selector with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selector with every slot bound to the implementation for the native lane width.
    #[must_use]
    pub fn native() -> Self {
        let mut sel = Self::new();
        sel.bind_aes(Engine::default())
            .bind_ghash(Multiplier::default())
            .bind_sha512(Sha512Impl::default())
            .bind_keccak(KeccakImpl::default())
            .bind_present(PresentImpl::default());
        sel
    }

    /// Bind the AES engine.
    pub fn bind_aes(&mut self, engine: Engine) -> &mut Self {
        debug!(family = %Family::Aes, ?engine, "bound");
        self.aes = Some(engine);
        self
    }

    /// Bind the GHASH multiplier.
    pub fn bind_ghash(&mut self, multiplier: Multiplier) -> &mut Self {
        debug!(family = %Family::Ghash, ?multiplier, "bound");
        self.ghash = Some(multiplier);
        self
    }

    /// Bind the SHA-512 compression function.
    pub fn bind_sha512(&mut self, imp: Sha512Impl) -> &mut Self {
        debug!(family = %Family::Sha512, ?imp, "bound");
        self.sha512 = Some(imp);
        self
    }

    /// Bind the Keccak permutation.
    pub fn bind_keccak(&mut self, imp: KeccakImpl) -> &mut Self {
        debug!(family = %Family::Keccak, ?imp, "bound");
        self.keccak = Some(imp);
        self
    }

    /// Bind the PRESENT round function.
    pub fn bind_present(&mut self, imp: PresentImpl) -> &mut Self {
        debug!(family = %Family::Present, ?imp, "bound");
        self.present = Some(imp);
        self
    }

    /// Clear the slot for `family`.
    pub fn unbind(&mut self, family: Family) -> &mut Self {
        debug!(%family, "unbound");
        match family {
            Family::Aes => self.aes = None,
            Family::Ghash => self.ghash = None,
            Family::Sha512 => self.sha512 = None,
            Family::Keccak => self.keccak = None,
            Family::Present => self.present = None,
        }
        self
    }

    /// Whether `family` has an implementation bound.
    #[must_use]
    pub fn is_bound(&self, family: Family) -> bool {
        match family {
            Family::Aes => self.aes.is_some(),
            Family::Ghash => self.ghash.is_some(),
            Family::Sha512 => self.sha512.is_some(),
            Family::Keccak => self.keccak.is_some(),
            Family::Present => self.present.is_some(),
        }
    }

    /// The bound AES engine.
    ///
    /// # Errors
    /// [`Error::UnboundImplementation`] if the slot is empty.
    pub fn aes(&self) -> Result<Engine> {
        self.aes.ok_or_else(|| unbound(Family::Aes))
    }

    /// The bound GHASH multiplier.
    ///
    /// # Errors
    /// [`Error::UnboundImplementation`] if the slot is empty.
    pub fn ghash(&self) -> Result<Multiplier> {
        self.ghash.ok_or_else(|| unbound(Family::Ghash))
    }

    /// The bound SHA-512 compression function.
    ///
    /// # Errors
    /// [`Error::UnboundImplementation`] if the slot is empty.
    pub fn sha512(&self) -> Result<Sha512Impl> {
        self.sha512.ok_or_else(|| unbound(Family::Sha512))
    }

    /// The bound Keccak permutation.
    ///
    /// # Errors
    /// [`Error::UnboundImplementation`] if the slot is empty.
    pub fn keccak(&self) -> Result<KeccakImpl> {
        self.keccak.ok_or_else(|| unbound(Family::Keccak))
    }

    /// The bound PRESENT round function.
    ///
    /// # Errors
    /// [`Error::UnboundImplementation`] if the slot is empty.
    pub fn present(&self) -> Result<PresentImpl> {
        self.present.ok_or_else(|| unbound(Family::Present))
    }
}
