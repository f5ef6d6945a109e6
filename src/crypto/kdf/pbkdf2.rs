//! src/crypto/kdf/pbkdf2.rs

use crate::aliases::{DerivedKey64, HmacSha256};
use crate::error::LockboxError;

use pbkdf2::pbkdf2;

/// Derive PBKDF2-HMAC-SHA256 directly into a secure 64-byte buffer.
///
/// The salt is taken as a slice so known-answer vectors with arbitrary salts can
/// be checked; the envelope itself always uses [`SALT_SIZE`](crate::consts::SALT_SIZE).
///
/// # Errors
///
/// [`LockboxError::InvalidIterationCount`] if `iterations` is zero.
#[inline(always)]
pub fn derive_secure_pbkdf2_key(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out_key: &mut DerivedKey64,
) -> Result<(), LockboxError> {
    if iterations == 0 {
        return Err(LockboxError::InvalidIterationCount(iterations));
    }

    pbkdf2::<HmacSha256>(password, salt, iterations, out_key.expose_secret_mut())
        .map_err(|e| LockboxError::Crypto(format!("PBKDF2 failed: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc7914_pbkdf2_hmac_sha256_vector() {
        let mut out = DerivedKey64::new([0u8; 64]);
        derive_secure_pbkdf2_key(b"passwd", b"salt", 1, &mut out).unwrap();

        let expected = hex::decode(
            "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc\
             49ca9cccf179b645991664b39d77ef317c71b845b1e30bd509112041d3a19783",
        )
        .unwrap();
        assert_eq!(out.expose_secret().as_slice(), expected.as_slice());
    }

    #[test]
    fn zero_iterations_rejected() {
        let mut out = DerivedKey64::new([0u8; 64]);
        let err = derive_secure_pbkdf2_key(b"pw", &[0u8; 64], 0, &mut out).unwrap_err();
        assert!(matches!(err, LockboxError::InvalidIterationCount(0)));
    }
}
