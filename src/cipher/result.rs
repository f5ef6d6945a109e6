//! src/cipher/result.rs
//! Typed outcome of a cipher operation.

use std::fmt;
use zeroize::Zeroizing;

/// Category of a finished operation.
///
/// Everything except [`Success`](CipherOutcome::Success) describes input that
/// was malformed or tampered with. These are values, never errors: only the
/// category is observable, never which byte was at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherOutcome {
    Success,
    /// Shorter than `2 + type_header_len + 32`.
    TooShort,
    /// Byte 0 is not a known version.
    UnsupportedVersion,
    /// Byte 1 is not a known type, or does not match the decrypt parameters.
    UnsupportedType,
    /// Authentication failed: wrong key or password, or modified data.
    InvalidMac,
    /// Authenticated, but the plaintext padding is malformed.
    InvalidPadding,
    /// The text transport could not be decoded.
    InvalidEncoding,
}

impl CipherOutcome {
    pub fn is_successful(self) -> bool {
        self == Self::Success
    }
}

impl fmt::Display for CipherOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Success => "success",
            Self::TooShort => "too short",
            Self::UnsupportedVersion => "unsupported version",
            Self::UnsupportedType => "unsupported type",
            Self::InvalidMac => "invalid MAC",
            Self::InvalidPadding => "invalid padding",
            Self::InvalidEncoding => "invalid encoding",
        };
        f.write_str(text)
    }
}

/// Result carrier for a finalized cipher.
///
/// For decryption `data` is the recovered plaintext and `iterations` is the
/// envelope's KDF iteration count in password mode. For encryption `data` is the
/// complete envelope. Both are `None` unless the outcome is `Success`.
///
/// Plaintext is zeroized when the result is dropped.
pub struct CipherResult {
    outcome: CipherOutcome,
    data: Option<Zeroizing<Vec<u8>>>,
    iterations: Option<u32>,
}

impl CipherResult {
    pub fn success(data: Vec<u8>, iterations: Option<u32>) -> Self {
        Self {
            outcome: CipherOutcome::Success,
            data: Some(Zeroizing::new(data)),
            iterations,
        }
    }

    /// A failed result. Passing [`CipherOutcome::Success`] yields a success with no data.
    pub fn failure(outcome: CipherOutcome) -> Self {
        Self {
            outcome,
            data: None,
            iterations: None,
        }
    }

    #[inline]
    pub fn outcome(&self) -> CipherOutcome {
        self.outcome
    }

    #[inline]
    pub fn is_successful(&self) -> bool {
        self.outcome.is_successful()
    }

    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref().map(Vec::as_slice)
    }

    /// Take the data out. The caller becomes responsible for wiping it.
    pub fn into_data(mut self) -> Option<Vec<u8>> {
        self.data.take().map(|mut data| std::mem::take(&mut *data))
    }

    pub fn iterations(&self) -> Option<u32> {
        self.iterations
    }
}

impl From<CipherOutcome> for CipherResult {
    fn from(outcome: CipherOutcome) -> Self {
        Self::failure(outcome)
    }
}

impl fmt::Debug for CipherResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherResult")
            .field("outcome", &self.outcome)
            .field("data_len", &self.data.as_ref().map(|d| d.len()))
            .field("iterations", &self.iterations)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_data() {
        let result = CipherResult::success(b"foobar".to_vec(), Some(10));
        assert!(result.is_successful());
        assert_eq!(result.data(), Some(&b"foobar"[..]));
        assert_eq!(result.iterations(), Some(10));
        assert_eq!(result.into_data(), Some(b"foobar".to_vec()));
    }

    #[test]
    fn failure_has_no_payload() {
        let result = CipherResult::from(CipherOutcome::InvalidMac);
        assert!(!result.is_successful());
        assert_eq!(result.outcome(), CipherOutcome::InvalidMac);
        assert_eq!(result.data(), None);
        assert_eq!(result.iterations(), None);
        assert_eq!(result.outcome().to_string(), "invalid MAC");
    }

    #[test]
    fn debug_hides_plaintext() {
        let rendered = format!("{:?}", CipherResult::success(b"secret".to_vec(), None));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("data_len: Some(6)"));
    }
}
