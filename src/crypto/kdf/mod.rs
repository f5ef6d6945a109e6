//! # Key Derivation
//!
//! Password-based key derivation (PBKDF2-HMAC-SHA256).
//!
//! ## Modules
//!
//! - [`pbkdf2`] - the raw KDF writing into a secure buffer
//!
//! [`KeyDeriver`] is what the engines use: it draws a salt when none is given,
//! runs the KDF, and splits the 64-byte output into a [`Key`].

pub mod pbkdf2;

use crate::aliases::{Aes256Key32, AuthSecret32, DerivedKey64, Salt64};
use crate::consts::{AUTH_SECRET_SIZE, DERIVED_KEY_SIZE, MAX_ITERATIONS, MIN_ITERATIONS};
use crate::crypto::rng::{random_array, RandomSource};
use crate::error::LockboxError;
use crate::key::{EncryptSecret, Key};
use crate::password::Password;
use std::sync::Arc;
use zeroize::Zeroize;

use self::pbkdf2::derive_secure_pbkdf2_key;

/// A key derived from a password, together with the salt that produced it.
#[derive(Debug, Clone)]
pub struct DerivedKey {
    key: Key,
    salt: Salt64,
}

impl DerivedKey {
    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn salt(&self) -> &Salt64 {
        &self.salt
    }

    pub fn into_parts(self) -> (Key, Salt64) {
        (self.key, self.salt)
    }
}

/// Derives [`Key`]s from [`Password`]s.
///
/// # Thread Safety
///
/// `KeyDeriver` is `Send + Sync` and cheap to clone (it only holds an `Arc`).
#[derive(Clone)]
pub struct KeyDeriver {
    random_source: Arc<dyn RandomSource>,
}

impl KeyDeriver {
    pub fn new(random_source: Arc<dyn RandomSource>) -> Self {
        Self { random_source }
    }

    /// Derive an AES-256 key plus authentication secret from `password`.
    ///
    /// Deterministic for a given `(password, salt, iterations)`. When `salt` is
    /// `None` a fresh 64-byte salt is drawn from the random source.
    ///
    /// # Errors
    ///
    /// - [`LockboxError::InvalidIterationCount`] unless `iterations` is in
    ///   `MIN_ITERATIONS..=MAX_ITERATIONS`; checked before any randomness is consumed
    /// - [`LockboxError::Random`] if a salt had to be drawn and the source failed
    pub fn derive_key_from_password(
        &self,
        password: &Password,
        iterations: u32,
        salt: Option<&Salt64>,
    ) -> Result<DerivedKey, LockboxError> {
        if !(MIN_ITERATIONS..=MAX_ITERATIONS).contains(&iterations) {
            return Err(LockboxError::InvalidIterationCount(iterations));
        }

        let salt = match salt {
            Some(salt) => *salt,
            None => random_array(self.random_source.as_ref())?,
        };

        let mut derived = DerivedKey64::new([0u8; DERIVED_KEY_SIZE]);
        derive_secure_pbkdf2_key(password.expose_secret(), &salt, iterations, &mut derived)?;

        let (encrypt_half, auth_half) = derived.expose_secret().split_at(DERIVED_KEY_SIZE - AUTH_SECRET_SIZE);

        let mut encrypt_secret = Aes256Key32::new([0u8; 32]);
        encrypt_secret.expose_secret_mut().copy_from_slice(encrypt_half);
        let mut auth_secret = AuthSecret32::new([0u8; AUTH_SECRET_SIZE]);
        auth_secret.expose_secret_mut().copy_from_slice(auth_half);
        derived.zeroize();

        Ok(DerivedKey {
            key: Key::from_secrets(EncryptSecret::Aes256(encrypt_secret), auth_secret),
            salt,
        })
    }
}
