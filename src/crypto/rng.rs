// src/crypto/rng.rs
//! Secure randomness for IVs, salts and generated keys.
//!
//! Every component that needs randomness takes an `Arc<dyn RandomSource>`
//! explicitly; there is no process-wide default instance.

use crate::error::LockboxError;
use rand::rngs::OsRng;
use rand::TryRngCore;
use std::sync::Mutex;

/// A cryptographically secure byte source.
///
/// Implementations must be safe for concurrent use: many engines may draw from
/// one source at the same time.
pub trait RandomSource: Send + Sync {
    /// Fill `dest` entirely with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), LockboxError>;

    /// Return `len` fresh random bytes.
    fn next_bytes(&self, len: usize) -> Result<Vec<u8>, LockboxError> {
        let mut bytes = vec![0u8; len];
        self.fill_bytes(&mut bytes)?;
        Ok(bytes)
    }
}

/// Fill a fixed-size array from `source`.
#[inline]
pub fn random_array<const N: usize>(source: &dyn RandomSource) -> Result<[u8; N], LockboxError> {
    let mut bytes = [0u8; N];
    source.fill_bytes(&mut bytes)?;
    Ok(bytes)
}

/// The operating system CSPRNG.
///
/// Stateless; cloning or sharing it is free.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandomSource;

impl OsRandomSource {
    #[inline(always)]
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for OsRandomSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), LockboxError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| LockboxError::Random(format!("OS random source failed: {e}")))
    }
}

/// Replays a fixed byte sequence, cycling when exhausted.
///
/// **Testing only.** Two engines fed by identical fixed sources produce identical
/// envelopes, which is exactly what reproducible tests need and exactly what
/// production must never have.
#[derive(Debug)]
pub struct FixedRandomSource {
    bytes: Vec<u8>,
    position: Mutex<usize>,
}

impl FixedRandomSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            position: Mutex::new(0),
        }
    }
}

impl RandomSource for FixedRandomSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), LockboxError> {
        if self.bytes.is_empty() {
            return Err(LockboxError::Random("fixed random source is empty".into()));
        }

        let mut position = self
            .position
            .lock()
            .map_err(|_| LockboxError::Random("fixed random source lock poisoned".into()))?;

        for byte in dest.iter_mut() {
            *byte = self.bytes[*position];
            *position = (*position + 1) % self.bytes.len();
        }
        Ok(())
    }
}
