//! src/cipher/decrypt.rs
//! Envelope decryption engine.
//!
//! Nothing is released before the MAC has been checked, so `process` only buffers.
//! All validation happens in `finalize`, which reports data problems as a
//! [`CipherOutcome`] rather than an error.

use crate::cipher::{Cipher, CipherOutcome, CipherResult, CipherState, DecryptParameters};
use crate::consts::{BLOCK_SIZE, MAX_ITERATIONS};
use crate::crypto::cbc::CbcDecryptor;
use crate::crypto::hmac::verify_mac;
use crate::crypto::kdf::KeyDeriver;
use crate::crypto::padding::remove_padding;
use crate::error::LockboxError;
use crate::header::{decode_envelope, Envelope, EnvelopeHeader};
use crate::key::Key;
use crate::password::Password;
use std::borrow::Cow;
use tracing::{debug, trace};
use zeroize::Zeroizing;

/// Owned copy of what the cipher was initialized with.
enum Credentials {
    Key(Key),
    Password(Password),
}

/// Single-use decryption engine.
///
/// The whole envelope is buffered until `finalize`, so memory use is
/// proportional to the envelope size.
pub struct DecryptCipher {
    key_deriver: KeyDeriver,
    state: CipherState,
    credentials: Option<Credentials>,
    buffer: Vec<u8>,
}

impl DecryptCipher {
    pub fn new(key_deriver: KeyDeriver) -> Self {
        Self {
            key_deriver,
            state: CipherState::Uninitialized,
            credentials: None,
            buffer: Vec::new(),
        }
    }

    /// # Errors
    ///
    /// [`LockboxError::AlreadyInitialized`] unless the cipher is fresh.
    pub fn initialize(&mut self, params: DecryptParameters<'_>) -> Result<(), LockboxError> {
        self.state.ensure_uninitialized()?;

        let credentials = match params {
            DecryptParameters::Key(key) => Credentials::Key(key.clone()),
            DecryptParameters::Password(password) => Credentials::Password(password.clone()),
        };
        debug!(
            password_mode = matches!(credentials, Credentials::Password(_)),
            "decrypt cipher initialized"
        );

        self.credentials = Some(credentials);
        self.state = CipherState::Initialized;
        Ok(())
    }

    fn open(&self, credentials: &Credentials, data: &[u8]) -> CipherResult {
        let envelope = match decode_envelope(data) {
            Ok(envelope) => envelope,
            Err(outcome) => return outcome.into(),
        };
        let (key, iterations) = match self.resolve_key(credentials, &envelope.header) {
            Ok(resolved) => resolved,
            Err(outcome) => return outcome.into(),
        };

        match decrypt_authenticated(&key, &envelope) {
            Ok(plaintext) => CipherResult::success(plaintext, iterations),
            Err(outcome) => outcome.into(),
        }
    }

    /// Pick or derive the key for this envelope. A mode mismatch is `UnsupportedType`.
    ///
    /// The header's iteration count is still unauthenticated here, so counts above
    /// [`MAX_ITERATIONS`] are refused before any derivation work.
    fn resolve_key<'c>(
        &self,
        credentials: &'c Credentials,
        header: &EnvelopeHeader,
    ) -> Result<(Cow<'c, Key>, Option<u32>), CipherOutcome> {
        match (credentials, header) {
            (Credentials::Key(key), EnvelopeHeader::Key { .. }) => Ok((Cow::Borrowed(key), None)),
            (Credentials::Password(password), EnvelopeHeader::Password { iterations, salt, .. }) => {
                if *iterations > MAX_ITERATIONS {
                    debug!(iterations = *iterations, "iteration count above decrypt limit");
                    return Err(CipherOutcome::InvalidMac);
                }
                // A zero count can only come from a forged header; the MAC would not verify anyway.
                let derived = self
                    .key_deriver
                    .derive_key_from_password(password, *iterations, Some(salt))
                    .map_err(|_| CipherOutcome::InvalidMac)?;
                Ok((Cow::Owned(derived.into_parts().0), Some(*iterations)))
            }
            _ => Err(CipherOutcome::UnsupportedType),
        }
    }
}

/// Verify the MAC, then decrypt and unpad.
fn decrypt_authenticated(key: &Key, envelope: &Envelope<'_>) -> Result<Vec<u8>, CipherOutcome> {
    if !verify_mac(key.auth_secret(), envelope.authenticated, envelope.mac) {
        return Err(CipherOutcome::InvalidMac);
    }

    let ciphertext = envelope.ciphertext;
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CipherOutcome::InvalidPadding);
    }

    let mut plaintext = Zeroizing::new(vec![0u8; ciphertext.len()]);
    let mut cbc = CbcDecryptor::new(key.encrypt_secret(), envelope.header.iv());
    for (block, out) in ciphertext
        .chunks_exact(BLOCK_SIZE)
        .zip(plaintext.chunks_exact_mut(BLOCK_SIZE))
    {
        cbc.decrypt_block(block, out);
    }

    let len = remove_padding(BLOCK_SIZE, &plaintext)
        .map(<[u8]>::len)
        .map_err(|_| CipherOutcome::InvalidPadding)?;
    plaintext.truncate(len);
    Ok(std::mem::take(&mut *plaintext))
}

impl Cipher for DecryptCipher {
    /// Buffers `input`; always returns an empty vector.
    fn process(&mut self, input: &[u8]) -> Result<Vec<u8>, LockboxError> {
        self.state.ensure_initialized()?;
        trace!(input_len = input.len(), "decrypt cipher buffering");
        self.buffer.extend_from_slice(input);
        Ok(Vec::new())
    }

    fn finalize(&mut self) -> Result<CipherResult, LockboxError> {
        self.state.ensure_initialized()?;
        self.state = CipherState::Finalized;
        let credentials = self.credentials.take().ok_or(LockboxError::NotInitialized)?;
        let data = std::mem::take(&mut self.buffer);

        let result = self.open(&credentials, &data);
        debug!(
            outcome = %result.outcome(),
            envelope_len = data.len(),
            "decrypt cipher finalized"
        );
        Ok(result)
    }

    fn state(&self) -> CipherState {
        self.state
    }
}
