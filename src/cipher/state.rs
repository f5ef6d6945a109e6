//! src/cipher/state.rs

use crate::error::LockboxError;

/// Lifecycle of a single-use cipher: `Uninitialized → Initialized → Finalized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CipherState {
    #[default]
    Uninitialized,
    Initialized,
    Finalized,
}

impl CipherState {
    /// Guard for `initialize`.
    #[inline]
    pub(crate) fn ensure_uninitialized(self) -> Result<(), LockboxError> {
        match self {
            Self::Uninitialized => Ok(()),
            Self::Initialized | Self::Finalized => Err(LockboxError::AlreadyInitialized),
        }
    }

    /// Guard for `process` and `finalize`.
    #[inline]
    pub(crate) fn ensure_initialized(self) -> Result<(), LockboxError> {
        match self {
            Self::Initialized => Ok(()),
            Self::Uninitialized => Err(LockboxError::NotInitialized),
            Self::Finalized => Err(LockboxError::AlreadyFinalized),
        }
    }
}
