//! src/batch_ops.rs
//! Parallel one-shot operations over independent inputs (feature `batch-ops`).
//!
//! Each item gets its own engine; all of them draw from the crypter's shared
//! random source.

#[cfg(feature = "batch-ops")]
use rayon::prelude::*;

#[cfg(feature = "batch-ops")]
use crate::{CipherResult, Crypter, DecryptParameters, EncryptParameters, LockboxError};

/// Encrypt every item in parallel. Output order matches input order.
///
/// Any IV or salt in `params` is ignored: every envelope gets fresh ones.
/// Stops at the first error.
#[cfg(feature = "batch-ops")]
pub fn encrypt_batch<T>(
    crypter: &Crypter,
    params: EncryptParameters<'_>,
    plaintexts: &[T],
) -> Result<Vec<Vec<u8>>, LockboxError>
where
    T: AsRef<[u8]> + Sync,
{
    let params = match params {
        EncryptParameters::Key { key, .. } => EncryptParameters::key(key),
        EncryptParameters::Password { password, iterations, .. } => {
            EncryptParameters::password(password, iterations)
        }
    };

    plaintexts
        .par_iter()
        .map(|plaintext| crypter.encrypt(params, plaintext.as_ref()))
        .collect()
}

/// Decrypt every envelope in parallel. Output order matches input order.
///
/// Per-item data failures are outcomes in the returned results; the `Err` side is
/// only for misuse and environment failures.
#[cfg(feature = "batch-ops")]
pub fn decrypt_batch<T>(
    crypter: &Crypter,
    params: DecryptParameters<'_>,
    envelopes: &[T],
) -> Result<Vec<CipherResult>, LockboxError>
where
    T: AsRef<[u8]> + Sync,
{
    envelopes
        .par_iter()
        .map(|envelope| crypter.decrypt(params, envelope.as_ref()))
        .collect()
}
