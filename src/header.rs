//! # Envelope Codec
//!
//! Framing for the versioned binary envelope. The codec only splits and joins
//! fields; MAC verification and decryption belong to the
//! [`DecryptCipher`](crate::cipher::DecryptCipher).
//!
//! # Layout
//!
//! All multi-byte integers are big-endian.
//!
//! | Type | Bytes |
//! |---|---|
//! | key (`1`) | `version(1) type(1) iv(16) ciphertext(n) mac(32)` |
//! | password (`2`) | `version(1) type(1) iterations(4) salt(64) iv(16) ciphertext(n) mac(32)` |
//!
//! The MAC covers every byte before it.

use crate::aliases::{Iv16, Salt64};
use crate::cipher::CipherOutcome;
use crate::consts::{
    ITERATIONS_SIZE, KEY_HEADER_SIZE, MAC_SIZE, PASSWORD_HEADER_SIZE, PREAMBLE_SIZE,
    SALT_SIZE, TYPE_KEY, TYPE_PASSWORD, VERSION,
};
use crate::utils::split_tail;

/// The envelope type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeType {
    Key,
    Password,
}

impl EnvelopeType {
    pub const fn tag(self) -> u8 {
        match self {
            Self::Key => TYPE_KEY,
            Self::Password => TYPE_PASSWORD,
        }
    }

    /// Length of the type-specific header that follows `version ++ type`.
    pub const fn header_len(self) -> usize {
        match self {
            Self::Key => KEY_HEADER_SIZE,
            Self::Password => PASSWORD_HEADER_SIZE,
        }
    }

    /// Smallest well-formed envelope of this type (empty ciphertext).
    pub const fn min_envelope_len(self) -> usize {
        PREAMBLE_SIZE + self.header_len() + MAC_SIZE
    }
}

impl TryFrom<u8> for EnvelopeType {
    type Error = CipherOutcome;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            TYPE_KEY => Ok(Self::Key),
            TYPE_PASSWORD => Ok(Self::Password),
            _ => Err(CipherOutcome::UnsupportedType),
        }
    }
}

/// Type-specific header fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeHeader {
    Key { iv: Iv16 },
    Password { iterations: u32, salt: Salt64, iv: Iv16 },
}

impl EnvelopeHeader {
    pub fn envelope_type(&self) -> EnvelopeType {
        match self {
            Self::Key { .. } => EnvelopeType::Key,
            Self::Password { .. } => EnvelopeType::Password,
        }
    }

    pub fn iv(&self) -> &Iv16 {
        match self {
            Self::Key { iv } | Self::Password { iv, .. } => iv,
        }
    }

    /// Length of `version ++ type ++ type_header`.
    pub fn encoded_len(&self) -> usize {
        PREAMBLE_SIZE + self.envelope_type().header_len()
    }

    /// Append `version ++ type ++ type_header` to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.reserve(self.encoded_len());
        out.push(VERSION);
        out.push(self.envelope_type().tag());
        match self {
            Self::Key { iv } => out.extend_from_slice(iv),
            Self::Password { iterations, salt, iv } => {
                out.extend_from_slice(&iterations.to_be_bytes());
                out.extend_from_slice(salt);
                out.extend_from_slice(iv);
            }
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut out);
        out
    }
}

/// A parsed envelope borrowing from the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<'a> {
    pub header: EnvelopeHeader,
    /// Every byte covered by the MAC: `version ++ type ++ type_header ++ ciphertext`.
    pub authenticated: &'a [u8],
    pub ciphertext: &'a [u8],
    pub mac: &'a [u8],
}

/// Assemble a complete envelope.
pub fn encode_envelope(header: &EnvelopeHeader, ciphertext: &[u8], mac: &[u8; MAC_SIZE]) -> Vec<u8> {
    let mut out = Vec::with_capacity(header.encoded_len() + ciphertext.len() + MAC_SIZE);
    header.write_to(&mut out);
    out.extend_from_slice(ciphertext);
    out.extend_from_slice(mac);
    out
}

/// Read the version and type bytes only.
///
/// Checks run in framing order: version, then type. Input too short to hold
/// the byte being checked is [`CipherOutcome::TooShort`].
pub fn read_envelope_type(data: &[u8]) -> Result<EnvelopeType, CipherOutcome> {
    match data.first() {
        None => return Err(CipherOutcome::TooShort),
        Some(&VERSION) => {}
        Some(_) => return Err(CipherOutcome::UnsupportedVersion),
    }
    match data.get(1) {
        None => Err(CipherOutcome::TooShort),
        Some(&tag) => EnvelopeType::try_from(tag),
    }
}

/// Split `data` into header fields, ciphertext and MAC.
///
/// # Errors
///
/// - [`CipherOutcome::UnsupportedVersion`] / [`CipherOutcome::UnsupportedType`]
///   for unknown framing bytes
/// - [`CipherOutcome::TooShort`] if `data` cannot hold `2 + type_header_len + 32` bytes
pub fn decode_envelope(data: &[u8]) -> Result<Envelope<'_>, CipherOutcome> {
    let envelope_type = read_envelope_type(data)?;
    if data.len() < envelope_type.min_envelope_len() {
        return Err(CipherOutcome::TooShort);
    }

    let (authenticated, mac) = split_tail(data, MAC_SIZE).ok_or(CipherOutcome::TooShort)?;
    let (type_header, ciphertext) = authenticated[PREAMBLE_SIZE..].split_at(envelope_type.header_len());

    let header = match envelope_type {
        EnvelopeType::Key => EnvelopeHeader::Key {
            iv: read_array(type_header),
        },
        EnvelopeType::Password => {
            let (iterations, rest) = type_header.split_at(ITERATIONS_SIZE);
            let (salt, iv) = rest.split_at(SALT_SIZE);
            EnvelopeHeader::Password {
                iterations: u32::from_be_bytes(read_array(iterations)),
                salt: read_array(salt),
                iv: read_array(iv),
            }
        }
    };

    Ok(Envelope {
        header,
        authenticated,
        ciphertext,
        mac,
    })
}

/// Copy the first `N` bytes of `bytes` into an array. Lengths are fixed by the layout above.
#[inline(always)]
fn read_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[..N]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password_header() -> EnvelopeHeader {
        EnvelopeHeader::Password {
            iterations: 0x0102_0304,
            salt: [0x55; 64],
            iv: [0xAA; 16],
        }
    }

    #[test]
    fn key_header_layout() {
        let header = EnvelopeHeader::Key { iv: [0x11; 16] };
        let bytes = header.encode();

        assert_eq!(bytes.len(), 18);
        assert_eq!(&bytes[..2], &[1, 1]);
        assert_eq!(&bytes[2..], &[0x11; 16]);
    }

    #[test]
    fn password_header_layout() {
        let bytes = password_header().encode();

        assert_eq!(bytes.len(), 2 + 4 + 64 + 16);
        assert_eq!(&bytes[..2], &[1, 2]);
        assert_eq!(&bytes[2..6], &[1, 2, 3, 4]);
        assert_eq!(&bytes[6..70], &[0x55; 64]);
        assert_eq!(&bytes[70..], &[0xAA; 16]);
    }

    #[test]
    fn decode_splits_fields() {
        let mac = [0xEEu8; 32];
        let envelope = encode_envelope(&password_header(), b"0123456789abcdef", &mac);

        let parsed = decode_envelope(&envelope).unwrap();
        assert_eq!(parsed.header, password_header());
        assert_eq!(parsed.ciphertext, b"0123456789abcdef");
        assert_eq!(parsed.mac, &mac);
        assert_eq!(parsed.authenticated, &envelope[..envelope.len() - 32]);
    }

    #[test]
    fn framing_checks_run_in_order() {
        assert_eq!(read_envelope_type(&[]), Err(CipherOutcome::TooShort));
        assert_eq!(read_envelope_type(&[2]), Err(CipherOutcome::UnsupportedVersion));
        assert_eq!(read_envelope_type(&[1]), Err(CipherOutcome::TooShort));
        assert_eq!(read_envelope_type(&[1, 3]), Err(CipherOutcome::UnsupportedType));
        assert_eq!(read_envelope_type(&[0, 3]), Err(CipherOutcome::UnsupportedVersion));
        assert_eq!(read_envelope_type(&[1, 2]), Ok(EnvelopeType::Password));
    }

    #[test]
    fn minimum_lengths() {
        assert_eq!(EnvelopeType::Key.min_envelope_len(), 50);
        assert_eq!(EnvelopeType::Password.min_envelope_len(), 118);

        let mut short = vec![1u8, 1];
        short.resize(49, 0);
        assert_eq!(decode_envelope(&short), Err(CipherOutcome::TooShort));
        short.push(0);
        let parsed = decode_envelope(&short).unwrap();
        assert!(parsed.ciphertext.is_empty());
    }
}
