//! # Error Types
//!
//! This module defines the error type for programmer misuse and environment failures.
//!
//! Data-dependent decryption failures (truncated, tampered or foreign input) are
//! **not** errors: they are reported as a [`CipherOutcome`](crate::CipherOutcome)
//! inside a [`CipherResult`](crate::CipherResult). Anything returned as a
//! [`LockboxError`] indicates a caller bug or a broken environment.

use thiserror::Error;

/// The error type for state violations, invalid arguments and environment failures.
#[derive(Error, Debug)]
pub enum LockboxError {
    /// `initialize` was called on a cipher that has already been initialized.
    #[error("The cipher is already initialized.")]
    AlreadyInitialized,

    /// `process` or `finalize` was called before `initialize`.
    #[error("The cipher has not been initialized.")]
    NotInitialized,

    /// `initialize`, `process` or `finalize` was called after `finalize`.
    #[error("The cipher is already finalized.")]
    AlreadyFinalized,

    /// The encrypt secret is not 128 or 256 bits.
    ///
    /// The contained value is the rejected size in bytes.
    #[error("Invalid encrypt secret size {}. Encrypt secret must be 128 or 256 bits.", .0 * 8)]
    InvalidEncryptSecretSize(usize),

    /// The authentication secret is not 256 bits.
    ///
    /// The contained value is the rejected size in bytes.
    #[error("Invalid authentication secret size {}. Authentication secret must be 256 bits.", .0 * 8)]
    InvalidAuthSecretSize(usize),

    /// The PBKDF2 iteration count is outside `MIN_ITERATIONS..=MAX_ITERATIONS`.
    #[error(
        "Invalid iteration count {0}. Iteration count must be between {min} and {max}.",
        min = crate::consts::MIN_ITERATIONS,
        max = crate::consts::MAX_ITERATIONS
    )]
    InvalidIterationCount(u32),

    /// A cryptographic primitive rejected its input.
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// The random source could not produce bytes.
    #[error("Random source failure: {0}")]
    Random(String),

    /// I/O error raised by a writer wrapped in a [`CipherWriter`](crate::stream::CipherWriter).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<LockboxError> for std::io::Error {
    fn from(err: LockboxError) -> Self {
        match err {
            LockboxError::Io(inner) => inner,
            other => std::io::Error::other(other),
        }
    }
}
