//! src/stream/write.rs
//! `std::io::Write` integration.

use crate::cipher::{Cipher, CipherResult};
use crate::error::LockboxError;
use crate::stream::{CipherStream, StreamAdapter};
use std::io::{self, Write};

/// Writes everything a cipher produces into `inner`.
///
/// Engine errors surface from [`Write::write`] as [`io::Error`]s wrapping the
/// [`LockboxError`]. Call [`finish`](CipherWriter::finish) to finalize; dropping
/// the writer without it abandons the operation.
///
/// # Memory
///
/// Memory use grows with the data written. Both engines keep a full copy until
/// `finish`: [`EncryptCipher`](crate::EncryptCipher) retains every envelope byte
/// it has emitted so that the final [`CipherResult`] carries the whole envelope,
/// and [`DecryptCipher`](crate::DecryptCipher) buffers the envelope until the MAC
/// can be checked. Bound the input size accordingly.
///
/// ```
/// use lockbox_rs::{Crypter, DecryptParameters, EncryptParameters, Key};
/// use lockbox_rs::stream::CipherWriter;
/// use std::io::Write;
///
/// let crypter = Crypter::default();
/// let key = crypter.key_generator().generate_key(None, None, None)?;
///
/// let mut writer = CipherWriter::new(Vec::new(), crypter.encrypt_cipher(EncryptParameters::key(&key))?);
/// writer.write_all(b"hello ")?;
/// writer.write_all(b"world")?;
/// let (envelope, _) = writer.finish()?;
///
/// let result = crypter.decrypt(DecryptParameters::Key(&key), &envelope)?;
/// assert_eq!(result.data(), Some(&b"hello world"[..]));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct CipherWriter<W: Write, C: Cipher> {
    inner: W,
    stream: CipherStream<C>,
}

impl<W: Write, C: Cipher> CipherWriter<W, C> {
    /// `cipher` must already be initialized.
    pub fn new(inner: W, cipher: C) -> Self {
        Self {
            inner,
            stream: CipherStream::new(cipher),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Finalize the cipher and write the remaining output.
    ///
    /// Nothing more is written when the outcome is not a success.
    ///
    /// # Errors
    ///
    /// Lifecycle errors from the engine, or [`LockboxError::Io`] from `inner`.
    pub fn finish(self) -> Result<(W, CipherResult), LockboxError> {
        let Self { mut inner, stream } = self;
        let end = stream.end()?;
        if end.result.is_successful() {
            inner.write_all(&end.output)?;
        }
        inner.flush()?;
        Ok((inner, end.result))
    }
}

impl<W: Write, C: Cipher> Write for CipherWriter<W, C> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let output = self.stream.feed(buf)?;
        self.inner.write_all(&output)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
