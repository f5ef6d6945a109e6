//! src/key/mod.rs
//! Key value objects: immutable, size-checked at construction, wiped on drop.

pub mod generator;

pub use generator::KeyGenerator;

use crate::aliases::{Aes128Key16, Aes256Key32, AuthSecret32};
use crate::consts::AUTH_SECRET_SIZE;
use crate::error::LockboxError;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The encryption half of a [`Key`].
///
/// The variant selects the AES key schedule; there is no other way to pick
/// AES-128 or AES-256.
pub enum EncryptSecret {
    Aes128(Aes128Key16),
    Aes256(Aes256Key32),
}

impl EncryptSecret {
    /// Copies `bytes` into a secure buffer.
    ///
    /// # Errors
    ///
    /// [`LockboxError::InvalidEncryptSecretSize`] unless `bytes` is 16 or 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, LockboxError> {
        match bytes.len() {
            16 => {
                let mut secret = Aes128Key16::new([0u8; 16]);
                secret.expose_secret_mut().copy_from_slice(bytes);
                Ok(Self::Aes128(secret))
            }
            32 => {
                let mut secret = Aes256Key32::new([0u8; 32]);
                secret.expose_secret_mut().copy_from_slice(bytes);
                Ok(Self::Aes256(secret))
            }
            other => Err(LockboxError::InvalidEncryptSecretSize(other)),
        }
    }

    #[inline]
    pub fn expose_secret(&self) -> &[u8] {
        match self {
            Self::Aes128(secret) => secret.expose_secret(),
            Self::Aes256(secret) => secret.expose_secret(),
        }
    }

    /// Secret length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.expose_secret().len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Clone for EncryptSecret {
    fn clone(&self) -> Self {
        match self {
            Self::Aes128(secret) => Self::Aes128(Aes128Key16::new(*secret.expose_secret())),
            Self::Aes256(secret) => Self::Aes256(Aes256Key32::new(*secret.expose_secret())),
        }
    }
}

impl Zeroize for EncryptSecret {
    fn zeroize(&mut self) {
        match self {
            Self::Aes128(secret) => secret.zeroize(),
            Self::Aes256(secret) => secret.zeroize(),
        }
    }
}

impl Drop for EncryptSecret {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for EncryptSecret {}

impl fmt::Debug for EncryptSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncryptSecret({} bits, [REDACTED])", self.len() * 8)
    }
}

/// A symmetric key: encryption secret, authentication secret and optional labels.
///
/// Keys are created by [`Key::new`], a [`KeyGenerator`], or a
/// [`KeyDeriver`](crate::crypto::kdf::KeyDeriver), and never mutated afterwards.
///
/// # Thread Safety
///
/// `Key` is `Send + Sync`; engines copy the secrets they need at `initialize`.
pub struct Key {
    encrypt_secret: EncryptSecret,
    auth_secret: AuthSecret32,
    name: Option<String>,
    description: Option<String>,
}

impl Key {
    /// Build a key from raw secret bytes.
    ///
    /// # Errors
    ///
    /// - [`LockboxError::InvalidEncryptSecretSize`] unless `encrypt_secret` is 16 or 32 bytes
    /// - [`LockboxError::InvalidAuthSecretSize`] unless `auth_secret` is 32 bytes
    pub fn new(
        encrypt_secret: &[u8],
        auth_secret: &[u8],
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Self, LockboxError> {
        let encrypt_secret = EncryptSecret::from_slice(encrypt_secret)?;

        if auth_secret.len() != AUTH_SECRET_SIZE {
            return Err(LockboxError::InvalidAuthSecretSize(auth_secret.len()));
        }
        let mut auth = AuthSecret32::new([0u8; AUTH_SECRET_SIZE]);
        auth.expose_secret_mut().copy_from_slice(auth_secret);

        Ok(Self {
            encrypt_secret,
            auth_secret: auth,
            name,
            description,
        })
    }

    /// Build a key from secrets that are already in secure buffers. Infallible.
    pub fn from_secrets(encrypt_secret: EncryptSecret, auth_secret: AuthSecret32) -> Self {
        Self {
            encrypt_secret,
            auth_secret,
            name: None,
            description: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[inline]
    pub fn encrypt_secret(&self) -> &EncryptSecret {
        &self.encrypt_secret
    }

    #[inline]
    pub fn auth_secret(&self) -> &AuthSecret32 {
        &self.auth_secret
    }

    /// Encrypt secret size in bits (128 or 256).
    pub fn encrypt_secret_bits(&self) -> usize {
        self.encrypt_secret.len() * 8
    }

    /// Authentication secret size in bits (always 256).
    pub fn auth_secret_bits(&self) -> usize {
        AUTH_SECRET_SIZE * 8
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Clone for Key {
    fn clone(&self) -> Self {
        Self {
            encrypt_secret: self.encrypt_secret.clone(),
            auth_secret: AuthSecret32::new(*self.auth_secret.expose_secret()),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        // `encrypt_secret` wipes itself.
        self.auth_secret.zeroize();
    }
}

impl ZeroizeOnDrop for Key {}

impl PartialEq for Key {
    /// Constant-time over the secret bytes.
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;

        let encrypt = self
            .encrypt_secret
            .expose_secret()
            .ct_eq(other.encrypt_secret.expose_secret());
        let auth = self
            .auth_secret
            .expose_secret()
            .ct_eq(other.auth_secret.expose_secret());

        bool::from(encrypt & auth) && self.name == other.name && self.description == other.description
    }
}

impl Eq for Key {}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("encrypt_secret_bits", &self.encrypt_secret_bits())
            .field("auth_secret_bits", &self.auth_secret_bits())
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
