//! src/cipher/encrypt.rs
//! Streaming encryption engine.
//!
//! Emits the envelope header with the first output, then one ciphertext block for
//! every 16 plaintext bytes as soon as they arrive. `finalize` pads the remainder,
//! appends the MAC and returns the complete envelope.

use crate::cipher::{Cipher, CipherResult, CipherState, EncryptParameters};
use crate::consts::BLOCK_SIZE;
use crate::crypto::cbc::CbcEncryptor;
use crate::crypto::hmac::Authenticator;
use crate::crypto::kdf::KeyDeriver;
use crate::crypto::padding::add_padding;
use crate::crypto::rng::{random_array, RandomSource};
use crate::error::LockboxError;
use crate::header::{EnvelopeHeader, EnvelopeType};
use crate::key::Key;
use std::sync::Arc;
use tracing::{debug, trace};
use zeroize::Zeroizing;

/// Single-use encryption engine.
///
/// Every byte returned by `process` is also kept, so that `finalize` can return
/// the complete envelope. Memory use is therefore proportional to the plaintext
/// size; callers streaming large inputs should bound them.
///
/// ```
/// use lockbox_rs::{Cipher, EncryptCipher, EncryptParameters, Key, KeyDeriver, OsRandomSource};
/// use std::sync::Arc;
///
/// let random = Arc::new(OsRandomSource);
/// let key = Key::new(&[0u8; 32], &[1u8; 32], None, None)?;
///
/// let mut cipher = EncryptCipher::new(random.clone(), KeyDeriver::new(random));
/// cipher.initialize(EncryptParameters::key(&key))?;
/// let mut streamed = cipher.process(b"foo")?;
/// streamed.extend(cipher.process(b"bar")?);
/// let envelope = cipher.finalize()?.into_data().unwrap();
///
/// assert!(envelope.starts_with(&streamed));
/// assert_eq!(&envelope[..2], &[1, 1]);
/// # Ok::<(), lockbox_rs::LockboxError>(())
/// ```
pub struct EncryptCipher {
    random_source: Arc<dyn RandomSource>,
    key_deriver: KeyDeriver,
    state: CipherState,
    context: Option<EncryptContext>,
}

impl EncryptCipher {
    pub fn new(random_source: Arc<dyn RandomSource>, key_deriver: KeyDeriver) -> Self {
        Self {
            random_source,
            key_deriver,
            state: CipherState::Uninitialized,
            context: None,
        }
    }

    /// Prepare for encryption.
    ///
    /// Draws the IV (and, in password mode, the salt) when not supplied and derives
    /// the password key. The iteration count is validated before any randomness is drawn.
    ///
    /// # Errors
    ///
    /// - [`LockboxError::AlreadyInitialized`] unless the cipher is fresh
    /// - [`LockboxError::InvalidIterationCount`] for a count of zero or above
    ///   [`MAX_ITERATIONS`](crate::consts::MAX_ITERATIONS)
    /// - [`LockboxError::Random`] if the random source fails
    pub fn initialize(&mut self, params: EncryptParameters<'_>) -> Result<(), LockboxError> {
        self.state.ensure_uninitialized()?;

        let context = match params {
            EncryptParameters::Key { key, iv } => {
                let iv = match iv {
                    Some(iv) => iv,
                    None => random_array(self.random_source.as_ref())?,
                };
                EncryptContext::new(key, EnvelopeHeader::Key { iv })
            }
            EncryptParameters::Password {
                password,
                iterations,
                salt,
                iv,
            } => {
                let (key, salt) = self
                    .key_deriver
                    .derive_key_from_password(password, iterations, salt.as_ref())?
                    .into_parts();
                let iv = match iv {
                    Some(iv) => iv,
                    None => random_array(self.random_source.as_ref())?,
                };
                EncryptContext::new(&key, EnvelopeHeader::Password { iterations, salt, iv })
            }
        };

        debug!(envelope_type = ?context.envelope_type, "encrypt cipher initialized");
        self.context = Some(context);
        self.state = CipherState::Initialized;
        Ok(())
    }
}

impl Cipher for EncryptCipher {
    fn process(&mut self, input: &[u8]) -> Result<Vec<u8>, LockboxError> {
        self.state.ensure_initialized()?;
        let context = self.context.as_mut().ok_or(LockboxError::NotInitialized)?;

        trace!(input_len = input.len(), "encrypt cipher processing");
        Ok(context.process(input))
    }

    fn finalize(&mut self) -> Result<CipherResult, LockboxError> {
        self.state.ensure_initialized()?;
        self.state = CipherState::Finalized;
        let context = self.context.take().ok_or(LockboxError::NotInitialized)?;

        let envelope = context.finish();
        debug!(envelope_len = envelope.len(), "encrypt cipher finalized");
        Ok(CipherResult::success(envelope, None))
    }

    fn state(&self) -> CipherState {
        self.state
    }
}

/// Per-operation state, created by `initialize`.
struct EncryptContext {
    envelope_type: EnvelopeType,
    cbc: CbcEncryptor,
    authenticator: Authenticator,
    /// Plaintext tail shorter than one block.
    pending: Zeroizing<Vec<u8>>,
    /// Encoded header, until it has been emitted.
    header: Option<Vec<u8>>,
    /// Everything emitted so far. Grows with the input; returned whole by `finish`.
    envelope: Vec<u8>,
}

impl EncryptContext {
    fn new(key: &Key, header: EnvelopeHeader) -> Self {
        let encoded = header.encode();
        let mut authenticator = Authenticator::new(key.auth_secret());
        authenticator.update(&encoded);

        Self {
            envelope_type: header.envelope_type(),
            cbc: CbcEncryptor::new(key.encrypt_secret(), header.iv()),
            authenticator,
            pending: Zeroizing::new(Vec::with_capacity(BLOCK_SIZE)),
            envelope: Vec::with_capacity(encoded.len()),
            header: Some(encoded),
        }
    }

    fn process(&mut self, input: &[u8]) -> Vec<u8> {
        let mut output = self.header.take().unwrap_or_default();
        self.pending.extend_from_slice(input);

        let complete = self.pending.len() - self.pending.len() % BLOCK_SIZE;
        output.reserve(complete);
        for block in self.pending[..complete].chunks_exact(BLOCK_SIZE) {
            let ciphertext = self.cbc.encrypt_block(block);
            self.authenticator.update(&ciphertext);
            output.extend_from_slice(&ciphertext);
        }
        self.pending.drain(..complete);

        self.envelope.extend_from_slice(&output);
        output
    }

    fn finish(self) -> Vec<u8> {
        let Self {
            mut cbc,
            mut authenticator,
            pending,
            header,
            mut envelope,
            ..
        } = self;

        if let Some(header) = header {
            envelope.extend_from_slice(&header);
        }

        // `pending` is always shorter than a block, so this is exactly one block.
        let padded = Zeroizing::new(add_padding(BLOCK_SIZE, &pending));
        for block in padded.chunks_exact(BLOCK_SIZE) {
            let ciphertext = cbc.encrypt_block(block);
            authenticator.update(&ciphertext);
            envelope.extend_from_slice(&ciphertext);
        }

        envelope.extend_from_slice(&authenticator.finalize());
        envelope
    }
}
