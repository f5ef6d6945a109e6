//! # Streaming Adapters
//!
//! Chunk-oriented wrappers around a [`Cipher`].
//!
//! ## Modules
//!
//! - [`write`] - [`CipherWriter`], an [`std::io::Write`] sink
//!
//! An adapter forwards whatever the engine emits for each chunk. At the end it
//! finalizes the engine and emits only the part of the result it has not already
//! forwarded. Dropping an adapter before `end` abandons the operation; the engine's
//! key material and buffered plaintext are wiped as it drops.

pub mod write;

pub use write::CipherWriter;

use crate::cipher::{Cipher, CipherResult};
use crate::error::LockboxError;

/// Chunked input in, chunked output out.
pub trait StreamAdapter {
    /// Push one chunk and return whatever output it produced (possibly nothing).
    ///
    /// # Errors
    ///
    /// Lifecycle errors from the wrapped engine.
    fn feed(&mut self, chunk: &[u8]) -> Result<Vec<u8>, LockboxError>;

    /// Finalize. `output` is the remaining tail; it is empty unless the outcome is success.
    ///
    /// # Errors
    ///
    /// Lifecycle errors from the wrapped engine.
    fn end(self) -> Result<StreamEnd, LockboxError>;
}

/// What [`StreamAdapter::end`] produces.
#[derive(Debug)]
pub struct StreamEnd {
    pub output: Vec<u8>,
    pub result: CipherResult,
}

/// Adapter over any initialized engine.
///
/// Concatenating every `feed` output with `StreamEnd::output` gives exactly the
/// finalized `data`: the full envelope when encrypting, the plaintext when decrypting.
#[derive(Debug)]
pub struct CipherStream<C> {
    cipher: C,
    emitted: usize,
}

impl<C: Cipher> CipherStream<C> {
    pub fn new(cipher: C) -> Self {
        Self { cipher, emitted: 0 }
    }

    /// Bytes returned by `feed` so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn cipher(&self) -> &C {
        &self.cipher
    }
}

impl<C: Cipher> StreamAdapter for CipherStream<C> {
    fn feed(&mut self, chunk: &[u8]) -> Result<Vec<u8>, LockboxError> {
        let output = self.cipher.process(chunk)?;
        self.emitted += output.len();
        Ok(output)
    }

    fn end(mut self) -> Result<StreamEnd, LockboxError> {
        let result = self.cipher.finalize()?;
        let output = result
            .data()
            .and_then(|data| data.get(self.emitted..))
            .map(<[u8]>::to_vec)
            .unwrap_or_default();
        Ok(StreamEnd { output, result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::{CipherOutcome, DecryptCipher, DecryptParameters, EncryptCipher, EncryptParameters};
    use crate::crypto::kdf::KeyDeriver;
    use crate::crypto::rng::{FixedRandomSource, RandomSource};
    use crate::key::Key;
    use std::sync::Arc;

    fn key() -> Key {
        Key::new(&[3u8; 16], &[4u8; 32], None, None).unwrap()
    }

    fn encrypt_stream(key: &Key) -> CipherStream<EncryptCipher> {
        let random: Arc<dyn RandomSource> = Arc::new(FixedRandomSource::new(vec![0x10u8, 0x20]));
        let mut cipher = EncryptCipher::new(random.clone(), KeyDeriver::new(random));
        cipher.initialize(EncryptParameters::key(key)).unwrap();
        CipherStream::new(cipher)
    }

    fn decrypt_stream(key: &Key) -> CipherStream<DecryptCipher> {
        let random: Arc<dyn RandomSource> = Arc::new(FixedRandomSource::new(vec![0u8]));
        let mut cipher = DecryptCipher::new(KeyDeriver::new(random));
        cipher.initialize(DecryptParameters::Key(key)).unwrap();
        CipherStream::new(cipher)
    }

    #[test]
    fn encrypt_feed_plus_tail_is_the_envelope() {
        let key = key();
        let plaintext = vec![0x61u8; 40];

        let mut stream = encrypt_stream(&key);
        let mut collected = Vec::new();
        for chunk in plaintext.chunks(7) {
            collected.extend(stream.feed(chunk).unwrap());
        }
        assert_eq!(stream.emitted(), collected.len());

        let end = stream.end().unwrap();
        collected.extend_from_slice(&end.output);
        assert_eq!(Some(collected.as_slice()), end.result.data());
    }

    #[test]
    fn decrypt_emits_everything_at_the_end() {
        let key = key();
        let mut encryptor = encrypt_stream(&key);
        let mut envelope = encryptor.feed(b"streamed plaintext").unwrap();
        envelope.extend(encryptor.end().unwrap().output);

        let mut decryptor = decrypt_stream(&key);
        for chunk in envelope.chunks(5) {
            assert!(decryptor.feed(chunk).unwrap().is_empty());
        }
        let end = decryptor.end().unwrap();
        assert!(end.result.is_successful());
        assert_eq!(end.output, b"streamed plaintext");
    }

    #[test]
    fn failed_outcome_has_no_tail() {
        let key = key();
        let mut decryptor = decrypt_stream(&key);
        decryptor.feed(&[1, 1, 0, 0]).unwrap();

        let end = decryptor.end().unwrap();
        assert_eq!(end.result.outcome(), CipherOutcome::TooShort);
        assert!(end.output.is_empty());
    }
}
