//! # High-Level API
//!
//! [`Crypter`] wires engines to one shared [`RandomSource`] and offers one-shot,
//! streaming and text-encoded operations.

use crate::cipher::{
    Cipher, CipherOutcome, CipherResult, DecryptCipher, DecryptParameters, EncryptCipher,
    EncryptParameters,
};
use crate::crypto::kdf::KeyDeriver;
use crate::crypto::rng::{OsRandomSource, RandomSource};
use crate::encoding::{Decoder, Encoder};
use crate::error::LockboxError;
use crate::key::KeyGenerator;
use crate::stream::CipherStream;
use std::sync::Arc;

/// Entry point for most users.
///
/// ```
/// use lockbox_rs::{Crypter, DecryptParameters, EncryptParameters, Password};
///
/// let crypter = Crypter::default();
/// let password = Password::from("correct horse battery staple");
///
/// let envelope = crypter.encrypt(EncryptParameters::password(&password, 1_000), b"foobar")?;
/// let result = crypter.decrypt(DecryptParameters::Password(&password), &envelope)?;
///
/// assert_eq!(result.data(), Some(&b"foobar"[..]));
/// assert_eq!(result.iterations(), Some(1_000));
/// # Ok::<(), lockbox_rs::LockboxError>(())
/// ```
///
/// # Thread Safety
///
/// `Crypter` is `Send + Sync` and cheap to clone. Every call builds its own engine,
/// so one instance can serve many threads.
#[derive(Clone)]
pub struct Crypter {
    random_source: Arc<dyn RandomSource>,
    key_deriver: KeyDeriver,
}

impl Crypter {
    pub fn new(random_source: Arc<dyn RandomSource>) -> Self {
        Self {
            key_deriver: KeyDeriver::new(random_source.clone()),
            random_source,
        }
    }

    pub fn random_source(&self) -> &Arc<dyn RandomSource> {
        &self.random_source
    }

    pub fn key_generator(&self) -> KeyGenerator {
        KeyGenerator::new(self.random_source.clone())
    }

    /// An initialized encryption engine.
    ///
    /// # Errors
    ///
    /// See [`EncryptCipher::initialize`].
    pub fn encrypt_cipher(&self, params: EncryptParameters<'_>) -> Result<EncryptCipher, LockboxError> {
        let mut cipher = EncryptCipher::new(self.random_source.clone(), self.key_deriver.clone());
        cipher.initialize(params)?;
        Ok(cipher)
    }

    /// An initialized decryption engine.
    pub fn decrypt_cipher(&self, params: DecryptParameters<'_>) -> Result<DecryptCipher, LockboxError> {
        let mut cipher = DecryptCipher::new(self.key_deriver.clone());
        cipher.initialize(params)?;
        Ok(cipher)
    }

    /// Encrypt `plaintext` into a complete envelope.
    ///
    /// # Errors
    ///
    /// - [`LockboxError::InvalidIterationCount`] for a count of zero or above
    ///   [`MAX_ITERATIONS`](crate::consts::MAX_ITERATIONS)
    /// - [`LockboxError::Random`] if the random source fails
    pub fn encrypt(&self, params: EncryptParameters<'_>, plaintext: &[u8]) -> Result<Vec<u8>, LockboxError> {
        let mut cipher = self.encrypt_cipher(params)?;
        cipher.process(plaintext)?;
        let result = cipher.finalize()?;
        // Encryption only fails through the lifecycle, never through the data.
        Ok(result.into_data().unwrap_or_default())
    }

    /// Decrypt a complete envelope.
    ///
    /// Bad input is reported through [`CipherResult::outcome`]; the `Err` side is
    /// reserved for misuse and environment failures.
    pub fn decrypt(&self, params: DecryptParameters<'_>, envelope: &[u8]) -> Result<CipherResult, LockboxError> {
        let mut cipher = self.decrypt_cipher(params)?;
        cipher.process(envelope)?;
        cipher.finalize()
    }

    pub fn encrypt_stream(&self, params: EncryptParameters<'_>) -> Result<CipherStream<EncryptCipher>, LockboxError> {
        self.encrypt_cipher(params).map(CipherStream::new)
    }

    pub fn decrypt_stream(&self, params: DecryptParameters<'_>) -> Result<CipherStream<DecryptCipher>, LockboxError> {
        self.decrypt_cipher(params).map(CipherStream::new)
    }

    /// [`encrypt`](Self::encrypt) followed by `encoder`.
    pub fn encrypt_encoded<E: Encoder + ?Sized>(
        &self,
        encoder: &E,
        params: EncryptParameters<'_>,
        plaintext: &[u8],
    ) -> Result<String, LockboxError> {
        self.encrypt(params, plaintext).map(|envelope| encoder.encode(&envelope))
    }

    /// `decoder` followed by [`decrypt`](Self::decrypt).
    ///
    /// Text the decoder rejects yields [`CipherOutcome::InvalidEncoding`].
    pub fn decrypt_encoded<D: Decoder + ?Sized>(
        &self,
        decoder: &D,
        params: DecryptParameters<'_>,
        text: &str,
    ) -> Result<CipherResult, LockboxError> {
        match decoder.decode(text) {
            Some(envelope) => self.decrypt(params, &envelope),
            None => Ok(CipherOutcome::InvalidEncoding.into()),
        }
    }
}

impl Default for Crypter {
    /// Backed by [`OsRandomSource`].
    fn default() -> Self {
        Self::new(Arc::new(OsRandomSource))
    }
}
