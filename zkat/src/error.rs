use crate::Family;

/// Harness error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A family was exercised before an implementation was bound to its slot.
    #[error("no implementation bound for {0}")]
    UnboundImplementation(Family),
    /// The AES-GCM layer rejected its input.
    #[error(transparent)]
    Aes(#[from] zkaes::Error),
}

/// Harness result.
pub type Result<T> = core::result::Result<T, Error>;
