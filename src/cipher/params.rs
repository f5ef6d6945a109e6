//! src/cipher/params.rs
//! Initialization parameters for the cipher engines.

use crate::aliases::{Iv16, Salt64};
use crate::key::Key;
use crate::password::Password;

/// What an [`EncryptCipher`](super::EncryptCipher) is initialized with.
///
/// `iv` and `salt` are drawn from the engine's random source when `None`.
/// Supplying them is for reproducible output only; never reuse an IV with the same key.
#[derive(Debug, Clone, Copy)]
pub enum EncryptParameters<'a> {
    Key {
        key: &'a Key,
        iv: Option<Iv16>,
    },
    Password {
        password: &'a Password,
        iterations: u32,
        salt: Option<Salt64>,
        iv: Option<Iv16>,
    },
}

impl<'a> EncryptParameters<'a> {
    /// Key mode with a fresh IV.
    pub fn key(key: &'a Key) -> Self {
        Self::Key { key, iv: None }
    }

    /// Password mode with a fresh salt and IV.
    pub fn password(password: &'a Password, iterations: u32) -> Self {
        Self::Password {
            password,
            iterations,
            salt: None,
            iv: None,
        }
    }
}

impl<'a> From<&'a Key> for EncryptParameters<'a> {
    fn from(key: &'a Key) -> Self {
        Self::key(key)
    }
}

/// What a [`DecryptCipher`](super::DecryptCipher) is initialized with.
///
/// Password mode reads the iteration count and salt from the envelope.
#[derive(Debug, Clone, Copy)]
pub enum DecryptParameters<'a> {
    Key(&'a Key),
    Password(&'a Password),
}

impl<'a> From<&'a Key> for DecryptParameters<'a> {
    fn from(key: &'a Key) -> Self {
        Self::Key(key)
    }
}

impl<'a> From<&'a Password> for DecryptParameters<'a> {
    fn from(password: &'a Password) -> Self {
        Self::Password(password)
    }
}
