//! src/builders/password_builder.rs
//! Password encryption parameters builder — strong defaults, explicit overrides.

use crate::aliases::{Iv16, Salt64};
use crate::cipher::EncryptParameters;
use crate::consts::DEFAULT_ITERATIONS;
use crate::password::Password;

/// Builds [`EncryptParameters::Password`].
///
/// Defaults: [`DEFAULT_ITERATIONS`], fresh random salt, fresh random IV.
///
/// Iteration counts are passed through unchanged; a zero count is rejected by
/// the engine at `initialize`, not silently clamped here.
///
/// # Thread Safety
///
/// This type is `Send + Sync` and `Copy`.
#[derive(Debug, Clone, Copy)]
pub struct PasswordParametersBuilder<'a> {
    password: &'a Password,
    iterations: u32,
    salt: Option<Salt64>,
    iv: Option<Iv16>,
}

impl<'a> PasswordParametersBuilder<'a> {
    #[must_use]
    pub fn new(password: &'a Password) -> Self {
        Self {
            password,
            iterations: DEFAULT_ITERATIONS,
            salt: None,
            iv: None,
        }
    }

    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Fixed salt — accepts `[u8; 64]`.
    #[must_use]
    pub fn with_salt(mut self, salt: impl Into<Salt64>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    /// Fixed IV — accepts `[u8; 16]`.
    #[must_use]
    pub fn with_iv(mut self, iv: impl Into<Iv16>) -> Self {
        self.iv = Some(iv.into());
        self
    }

    /// Current iteration count
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub fn build(self) -> EncryptParameters<'a> {
        EncryptParameters::Password {
            password: self.password,
            iterations: self.iterations,
            salt: self.salt,
            iv: self.iv,
        }
    }
}

impl<'a> From<PasswordParametersBuilder<'a>> for EncryptParameters<'a> {
    fn from(builder: PasswordParametersBuilder<'a>) -> Self {
        builder.build()
    }
}
