//! # Cipher Engines
//!
//! Single-use streaming engines for the envelope format.
//!
//! ## Modules
//!
//! - [`encrypt`] - [`EncryptCipher`], emits ciphertext as soon as whole blocks are available
//! - [`decrypt`] - [`DecryptCipher`], buffers and releases plaintext only after MAC verification
//! - [`params`] - initialization parameters
//! - [`result`] - [`CipherResult`] and [`CipherOutcome`]
//! - [`state`] - the `Uninitialized → Initialized → Finalized` lifecycle
//!
//! Misuse of the lifecycle is a [`LockboxError`]. Malformed or tampered input is
//! never an error: it is a non-success [`CipherOutcome`] in the final result.

pub mod decrypt;
pub mod encrypt;
pub mod params;
pub mod result;
pub mod state;

pub use decrypt::DecryptCipher;
pub use encrypt::EncryptCipher;
pub use params::{DecryptParameters, EncryptParameters};
pub use result::{CipherOutcome, CipherResult};
pub use state::CipherState;

use crate::error::LockboxError;

/// A single-use streaming cipher.
///
/// The bytes returned by successive `process` calls, concatenated, are always a
/// prefix of the `data` of a successful `finalize`. Stream adapters rely on this
/// to emit only the remaining tail at the end.
pub trait Cipher {
    /// Feed more input.
    ///
    /// # Errors
    ///
    /// [`LockboxError::NotInitialized`] before `initialize`,
    /// [`LockboxError::AlreadyFinalized`] after `finalize`.
    fn process(&mut self, input: &[u8]) -> Result<Vec<u8>, LockboxError>;

    /// Complete the operation. Moves the cipher to `Finalized` whatever the outcome.
    ///
    /// # Errors
    ///
    /// Same lifecycle errors as [`process`](Cipher::process).
    fn finalize(&mut self) -> Result<CipherResult, LockboxError>;

    fn state(&self) -> CipherState;
}
