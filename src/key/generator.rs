//! src/key/generator.rs
//! Random key generation from an injected [`RandomSource`].

use crate::aliases::{Aes128Key16, Aes256Key32, AuthSecret32};
use crate::consts::{AUTH_SECRET_SIZE, DEFAULT_ENCRYPT_SECRET_SIZE};
use crate::crypto::rng::{random_array, RandomSource};
use crate::error::LockboxError;
use crate::key::{EncryptSecret, Key};
use std::sync::Arc;

/// Generates fresh [`Key`]s.
#[derive(Clone)]
pub struct KeyGenerator {
    random_source: Arc<dyn RandomSource>,
}

impl KeyGenerator {
    pub fn new(random_source: Arc<dyn RandomSource>) -> Self {
        Self { random_source }
    }

    /// Generate a key with a random encrypt secret of `encrypt_secret_size` bytes
    /// (default 32) and a random 32-byte authentication secret.
    ///
    /// # Errors
    ///
    /// - [`LockboxError::InvalidEncryptSecretSize`] for sizes other than 16 or 32
    /// - [`LockboxError::Random`] if the random source fails
    pub fn generate_key(
        &self,
        encrypt_secret_size: Option<usize>,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Key, LockboxError> {
        let source = self.random_source.as_ref();

        let encrypt_secret = match encrypt_secret_size.unwrap_or(DEFAULT_ENCRYPT_SECRET_SIZE) {
            16 => EncryptSecret::Aes128(Aes128Key16::new(random_array(source)?)),
            32 => EncryptSecret::Aes256(Aes256Key32::new(random_array(source)?)),
            other => return Err(LockboxError::InvalidEncryptSecretSize(other)),
        };
        let auth_secret = AuthSecret32::new(random_array::<AUTH_SECRET_SIZE>(source)?);

        let mut key = Key::from_secrets(encrypt_secret, auth_secret);
        if let Some(name) = name {
            key = key.with_name(name);
        }
        if let Some(description) = description {
            key = key.with_description(description);
        }
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::rng::{FixedRandomSource, OsRandomSource};

    #[test]
    fn default_is_aes256() {
        let generator = KeyGenerator::new(Arc::new(OsRandomSource));
        let key = generator.generate_key(None, None, None).unwrap();
        assert_eq!(key.encrypt_secret_bits(), 256);
        assert_eq!(key.auth_secret_bits(), 256);
    }

    #[test]
    fn draws_encrypt_then_auth_secret() {
        let sequence: Vec<u8> = (0u8..48).collect();
        let generator = KeyGenerator::new(Arc::new(FixedRandomSource::new(sequence)));
        let key = generator
            .generate_key(Some(16), Some("name".into()), Some("description".into()))
            .unwrap();

        let expected_encrypt: Vec<u8> = (0u8..16).collect();
        let expected_auth: Vec<u8> = (16u8..48).collect();
        assert_eq!(key.encrypt_secret().expose_secret(), expected_encrypt.as_slice());
        assert_eq!(key.auth_secret().expose_secret().as_slice(), expected_auth.as_slice());
        assert_eq!(key.name(), Some("name"));
        assert_eq!(key.description(), Some("description"));
    }

    #[test]
    fn rejects_unsupported_size() {
        let generator = KeyGenerator::new(Arc::new(OsRandomSource));
        let err = generator.generate_key(Some(24), None, None).unwrap_err();
        assert!(matches!(err, LockboxError::InvalidEncryptSecretSize(24)));
    }
}
