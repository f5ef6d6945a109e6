// src/crypto/hmac.rs

//! HMAC-SHA256 envelope authentication.
//!
//! The MAC covers `version ++ type ++ type_header ++ ciphertext` and is the
//! 32-byte envelope trailer. Verification is constant-time via [`Mac::verify_slice`].

use crate::aliases::{AuthSecret32, HmacSha256, MacTag32};
use hmac::Mac;

/// A running HMAC-SHA256 over an envelope.
///
/// Encryption feeds it the header and each ciphertext block as they are produced;
/// decryption feeds it the whole authenticated region before anything is decrypted.
#[derive(Clone)]
pub struct Authenticator {
    mac: HmacSha256,
}

impl Authenticator {
    pub fn new(auth_secret: &AuthSecret32) -> Self {
        let mac = <HmacSha256 as Mac>::new_from_slice(auth_secret.expose_secret())
            .expect("HMAC accepts keys of any length");
        Self { mac }
    }

    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        self.mac.update(data);
    }

    pub fn finalize(self) -> MacTag32 {
        self.mac.finalize().into_bytes().into()
    }

    /// Constant-time comparison against `candidate`.
    ///
    /// A candidate of the wrong length is rejected without comparing bytes.
    pub fn verify(self, candidate: &[u8]) -> bool {
        self.mac.verify_slice(candidate).is_ok()
    }
}

/// MAC `message` in one shot.
pub fn compute_mac(auth_secret: &AuthSecret32, message: &[u8]) -> MacTag32 {
    let mut authenticator = Authenticator::new(auth_secret);
    authenticator.update(message);
    authenticator.finalize()
}

/// Verify `candidate` against the MAC of `message` in constant time.
pub fn verify_mac(auth_secret: &AuthSecret32, message: &[u8], candidate: &[u8]) -> bool {
    let mut authenticator = Authenticator::new(auth_secret);
    authenticator.update(message);
    authenticator.verify(candidate)
}
