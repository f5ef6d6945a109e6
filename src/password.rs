//! src/password.rs
//! Password value object: arbitrary bytes, wiped on drop, never printed.

use crate::aliases::PasswordBytes;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A password used to derive a [`Key`](crate::Key) with PBKDF2.
///
/// The bytes are used as-is (UTF-8 for string inputs); no normalization is applied.
pub struct Password(PasswordBytes);

impl Password {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(PasswordBytes::new(bytes.into()))
    }

    #[inline]
    pub fn expose_secret(&self) -> &[u8] {
        self.0.expose_secret().as_slice()
    }

    pub fn len(&self) -> usize {
        self.expose_secret().len()
    }

    pub fn is_empty(&self) -> bool {
        self.expose_secret().is_empty()
    }
}

impl Clone for Password {
    fn clone(&self) -> Self {
        Self::new(self.expose_secret().to_vec())
    }
}

impl Zeroize for Password {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Password {}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes().to_vec())
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self::new(value.into_bytes())
    }
}

impl From<Vec<u8>> for Password {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}

impl From<&[u8]> for Password {
    fn from(value: &[u8]) -> Self {
        Self::new(value.to_vec())
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}
